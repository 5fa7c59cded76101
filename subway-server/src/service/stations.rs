//! Station registry service.

use tracing::info;

use crate::domain::{Station, StationId};
use crate::store::{NameTaken, Store};

use super::{ServiceError, resolve_station};

/// Creates, lists and deletes stations.
#[derive(Clone)]
pub struct StationService {
    store: Store,
}

impl StationService {
    /// Create a station service over the given store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Register a new station.
    pub async fn save_station(&self, name: impl Into<String>) -> Result<Station, ServiceError> {
        let mut network = self.store.write().await;
        let station = network
            .stations
            .insert(name)
            .map_err(|NameTaken(name)| ServiceError::DuplicateStationName(name))?;
        info!(station = %station.id(), name = station.name(), "created station");
        Ok(station)
    }

    /// List every station, ordered by id.
    pub async fn find_stations(&self) -> Vec<Station> {
        let network = self.store.read().await;
        network.stations.all().cloned().collect()
    }

    /// Look up a station by id.
    pub async fn find_station(&self, id: StationId) -> Result<Station, ServiceError> {
        let network = self.store.read().await;
        resolve_station(&network.stations, id)
    }

    /// Delete a station that no line uses.
    ///
    /// Returns whether a station was removed; deleting an unknown id is a
    /// no-op.
    pub async fn delete_station(&self, id: StationId) -> Result<bool, ServiceError> {
        let mut network = self.store.write().await;
        if network.lines.uses_station(id) {
            return Err(ServiceError::StationInUse(id));
        }
        let removed = network.stations.remove(id).is_some();
        if removed {
            info!(station = %id, "deleted station");
        }
        Ok(removed)
    }
}
