//! Application services.
//!
//! Services resolve identifiers against the store, apply domain operations
//! and report lookup failures as typed errors. A missing station or line is
//! always an error here; "no matching line" in the fare pipeline never is.

mod error;
mod lines;
mod stations;

pub use error::ServiceError;
pub use lines::{LineRequest, LineService, LineUpdate, SectionRequest};
pub use stations::StationService;

use crate::domain::{Station, StationId};
use crate::store::StationTable;

/// Resolve a station id, failing with `StationNotFound`.
fn resolve_station(stations: &StationTable, id: StationId) -> Result<Station, ServiceError> {
    stations
        .get(id)
        .cloned()
        .ok_or(ServiceError::StationNotFound(id))
}
