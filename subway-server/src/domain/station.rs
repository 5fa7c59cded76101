//! Station type.

use std::hash::{Hash, Hasher};

use super::StationId;

/// A station in the network.
///
/// Stations are identified by their id alone: two values with the same id
/// are the same station, whatever name they carry.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{Station, StationId};
///
/// let a = Station::new(StationId(1), "Gangnam");
/// let b = Station::new(StationId(1), "Gangnam Stn");
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    name: String,
}

impl Station {
    /// Create a station with the given id and name.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the station id.
    pub fn id(&self) -> StationId {
        self.id
    }

    /// Returns the station name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
