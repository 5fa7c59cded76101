//! Station table.

use std::collections::BTreeMap;

use crate::domain::{Station, StationId};

use super::NameTaken;

/// Stations keyed by id. Names are unique.
#[derive(Debug, Default)]
pub struct StationTable {
    last_id: u64,
    rows: BTreeMap<StationId, Station>,
}

impl StationTable {
    /// Insert a new station, assigning the next id.
    pub fn insert(&mut self, name: impl Into<String>) -> Result<Station, NameTaken> {
        let name = name.into();
        if self.rows.values().any(|s| s.name() == name) {
            return Err(NameTaken(name));
        }

        self.last_id += 1;
        let station = Station::new(StationId(self.last_id), name);
        self.rows.insert(station.id(), station.clone());
        Ok(station)
    }

    /// Look up a station by id.
    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.rows.get(&id)
    }

    /// Returns all stations, ordered by id.
    pub fn all(&self) -> impl Iterator<Item = &Station> {
        self.rows.values()
    }

    /// Remove a station, returning it if it existed.
    pub fn remove(&mut self, id: StationId) -> Option<Station> {
        self.rows.remove(&id)
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
