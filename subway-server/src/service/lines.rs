//! Line management and extra-fee service.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::domain::{Distance, Line, LineDraft, LineId, Section, Station, StationId};
use crate::fare::{FeePolicy, max_extra_fee};
use crate::store::{NameTaken, Store};

use super::{ServiceError, resolve_station};

/// Request to open a new line.
#[derive(Debug, Clone)]
pub struct LineRequest {
    pub name: String,
    pub color: String,
    pub extra_fee: u32,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

/// New name and color for an existing line.
#[derive(Debug, Clone)]
pub struct LineUpdate {
    pub name: String,
    pub color: String,
}

/// Request to attach a section to a line.
#[derive(Debug, Clone)]
pub struct SectionRequest {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

/// Creates and edits lines, and computes itinerary extra fees.
#[derive(Clone)]
pub struct LineService {
    store: Store,
    policy: FeePolicy,
}

impl LineService {
    /// Create a line service using `policy` for fee computation.
    pub fn new(store: Store, policy: FeePolicy) -> Self {
        Self { store, policy }
    }

    /// Returns the fee policy in use.
    pub fn policy(&self) -> FeePolicy {
        self.policy
    }

    /// Open a new line with a single section.
    pub async fn save_line(&self, request: LineRequest) -> Result<Line, ServiceError> {
        let mut network = self.store.write().await;
        let up = resolve_station(&network.stations, request.up_station_id)?;
        let down = resolve_station(&network.stations, request.down_station_id)?;
        let draft = LineDraft::new(
            request.name,
            request.color,
            request.extra_fee,
            up,
            down,
            Distance::new(request.distance)?,
        )?;

        let line = network
            .lines
            .insert(draft)
            .map_err(|NameTaken(name)| ServiceError::DuplicateLineName(name))?
            .clone();
        info!(line = %line.id(), name = line.name(), "created line");
        Ok(line)
    }

    /// List every line, ordered by id.
    pub async fn find_lines(&self) -> Vec<Line> {
        self.store.read().await.lines.snapshot()
    }

    /// Look up a line by id.
    pub async fn find_line(&self, id: LineId) -> Result<Line, ServiceError> {
        let network = self.store.read().await;
        network
            .lines
            .get(id)
            .cloned()
            .ok_or(ServiceError::LineNotFound(id))
    }

    /// Rename and recolor a line.
    pub async fn update_line(&self, id: LineId, update: LineUpdate) -> Result<Line, ServiceError> {
        let mut network = self.store.write().await;
        if network.lines.get(id).is_none() {
            return Err(ServiceError::LineNotFound(id));
        }
        if network.lines.name_taken(&update.name, Some(id)) {
            return Err(ServiceError::DuplicateLineName(update.name));
        }

        let line = network
            .lines
            .get_mut(id)
            .ok_or(ServiceError::LineNotFound(id))?;
        line.update(update.name, update.color);
        info!(line = %id, name = line.name(), "updated line");
        Ok(line.clone())
    }

    /// Delete a line.
    ///
    /// Returns whether a line was removed; deleting an unknown id is a no-op.
    pub async fn delete_line(&self, id: LineId) -> bool {
        let removed = self.store.write().await.lines.remove(id).is_some();
        if removed {
            info!(line = %id, "deleted line");
        }
        removed
    }

    /// Attach a section to a line, splitting an existing section if needed.
    pub async fn add_section(
        &self,
        line_id: LineId,
        request: SectionRequest,
    ) -> Result<Line, ServiceError> {
        let mut guard = self.store.write().await;
        let network = &mut *guard;

        let line = network
            .lines
            .get_mut(line_id)
            .ok_or(ServiceError::LineNotFound(line_id))?;
        let up = resolve_station(&network.stations, request.up_station_id)?;
        let down = resolve_station(&network.stations, request.down_station_id)?;

        line.add_section(up, down, Distance::new(request.distance)?)?;
        info!(
            line = %line_id,
            up = %request.up_station_id,
            down = %request.down_station_id,
            distance = request.distance,
            "added section"
        );
        Ok(line.clone())
    }

    /// Detach a station from a line's path.
    pub async fn remove_station(
        &self,
        line_id: LineId,
        station_id: StationId,
    ) -> Result<(), ServiceError> {
        let mut guard = self.store.write().await;
        let network = &mut *guard;

        let line = network
            .lines
            .get_mut(line_id)
            .ok_or(ServiceError::LineNotFound(line_id))?;
        let station = resolve_station(&network.stations, station_id)?;

        line.remove_station(station.id())?;
        info!(line = %line_id, station = %station_id, "removed station from line");
        Ok(())
    }

    /// Every section of every line.
    pub async fn all_sections(&self) -> Vec<Section> {
        let network = self.store.read().await;
        network
            .lines
            .all()
            .flat_map(|line| line.sections().iter().cloned())
            .collect()
    }

    /// The distinct stations used by any line, ordered by id.
    pub async fn all_stations(&self) -> Vec<Station> {
        let sections = self.all_sections().await;
        let unique: HashSet<Station> = sections
            .into_iter()
            .flat_map(|s| [s.upstream().clone(), s.downstream().clone()])
            .collect();

        let mut stations: Vec<Station> = unique.into_iter().collect();
        stations.sort_by_key(Station::id);
        stations
    }

    /// Compute the extra fee for travelling through `station_ids` in order.
    ///
    /// Every id must resolve to a registered station; an unknown id is
    /// reported as `StationNotFound`, never as a zero fee.
    pub async fn max_extra_fee(&self, station_ids: &[StationId]) -> Result<u32, ServiceError> {
        let (itinerary, lines) = {
            let network = self.store.read().await;
            let itinerary = station_ids
                .iter()
                .map(|&id| resolve_station(&network.stations, id))
                .collect::<Result<Vec<_>, _>>()?;
            (itinerary, network.lines.snapshot())
        };

        debug!(
            stations = itinerary.len(),
            lines = lines.len(),
            "computing extra fee"
        );
        Ok(max_extra_fee(&itinerary, &lines, self.policy))
    }
}
