//! Domain types for the subway network.
//!
//! Stations, the sections that link them, and the lines that own an ordered
//! path of sections. Lines enforce their path invariants on every mutation,
//! so code holding a `Line` can trust that its sections form a single chain.

mod distance;
mod error;
mod ids;
mod line;
mod section;
mod station;

pub use distance::Distance;
pub use error::DomainError;
pub use ids::{LineId, StationId};
pub use line::{Line, LineDraft};
pub use section::Section;
pub use station::Station;
