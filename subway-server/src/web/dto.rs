//! Data transfer objects for web requests and responses.
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::domain::{Distance, Line, LineId, Section, Station, StationId};
use crate::service::{LineRequest, LineUpdate, SectionRequest};

/// Request to register a station.
#[derive(Debug, Deserialize)]
pub struct StationCreateRequest {
    /// Station name, unique across the network
    pub name: String,
}

/// A station.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationResponse {
    pub id: StationId,
    pub name: String,
}

/// Request to open a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineCreateRequest {
    pub name: String,
    pub color: String,

    /// Surcharge for travelling on the line (defaults to zero)
    #[serde(default)]
    pub extra_fee: u32,

    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

/// Request to rename or recolor a line.
#[derive(Debug, Deserialize)]
pub struct LineUpdateRequest {
    pub name: String,
    pub color: String,
}

/// Request to attach a section to a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionCreateRequest {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

/// Query for detaching a station from a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveStationQuery {
    pub station_id: StationId,
}

/// A line with its stations in path order.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResponse {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub extra_fee: u32,

    /// Stations from head to tail
    pub stations: Vec<StationResponse>,

    /// RFC 3339 creation time
    pub created_at: String,

    /// RFC 3339 time of the last change
    pub modified_at: String,
}

/// A section of some line.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse {
    pub up_station: StationResponse,
    pub down_station: StationResponse,
    pub distance: Option<u32>,
}

/// Request to price an itinerary.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraFeeRequest {
    /// Stations in travel order
    pub station_ids: Vec<StationId>,
}

/// The extra fee for an itinerary.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraFeeResponse {
    pub extra_fee: u32,

    /// Name of the accumulation policy that produced the fee
    pub policy: String,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl From<&Station> for StationResponse {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id(),
            name: station.name().to_string(),
        }
    }
}

impl From<&Line> for LineResponse {
    fn from(line: &Line) -> Self {
        Self {
            id: line.id(),
            name: line.name().to_string(),
            color: line.color().to_string(),
            extra_fee: line.extra_fee(),
            stations: line.stations().iter().map(StationResponse::from).collect(),
            created_at: line.created_at().to_rfc3339(),
            modified_at: line.modified_at().to_rfc3339(),
        }
    }
}

impl From<&Section> for SectionResponse {
    fn from(section: &Section) -> Self {
        Self {
            up_station: section.upstream().into(),
            down_station: section.downstream().into(),
            distance: section.distance().map(Distance::get),
        }
    }
}

impl From<LineCreateRequest> for LineRequest {
    fn from(req: LineCreateRequest) -> Self {
        Self {
            name: req.name,
            color: req.color,
            extra_fee: req.extra_fee,
            up_station_id: req.up_station_id,
            down_station_id: req.down_station_id,
            distance: req.distance,
        }
    }
}

impl From<LineUpdateRequest> for LineUpdate {
    fn from(req: LineUpdateRequest) -> Self {
        Self {
            name: req.name,
            color: req.color,
        }
    }
}

impl From<SectionCreateRequest> for SectionRequest {
    fn from(req: SectionCreateRequest) -> Self {
        Self {
            up_station_id: req.up_station_id,
            down_station_id: req.down_station_id,
            distance: req.distance,
        }
    }
}
