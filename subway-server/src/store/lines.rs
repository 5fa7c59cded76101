//! Line table.

use std::collections::BTreeMap;

use crate::domain::{Line, LineDraft, LineId, StationId};

use super::NameTaken;

/// Lines keyed by id. Names are unique.
#[derive(Debug, Default)]
pub struct LineTable {
    last_id: u64,
    rows: BTreeMap<LineId, Line>,
}

impl LineTable {
    /// Open a new line from a draft, assigning the next id.
    pub fn insert(&mut self, draft: LineDraft) -> Result<&Line, NameTaken> {
        if self.name_taken(draft.name(), None) {
            return Err(NameTaken(draft.name().to_string()));
        }

        self.last_id += 1;
        let id = LineId(self.last_id);
        Ok(self.rows.entry(id).or_insert(Line::open(id, draft)))
    }

    /// Returns true if a line other than `except` already uses `name`.
    pub fn name_taken(&self, name: &str, except: Option<LineId>) -> bool {
        self.rows
            .values()
            .any(|line| line.name() == name && Some(line.id()) != except)
    }

    /// Look up a line by id.
    pub fn get(&self, id: LineId) -> Option<&Line> {
        self.rows.get(&id)
    }

    /// Look up a line by id for exclusive mutation.
    pub fn get_mut(&mut self, id: LineId) -> Option<&mut Line> {
        self.rows.get_mut(&id)
    }

    /// Returns all lines, ordered by id.
    pub fn all(&self) -> impl Iterator<Item = &Line> {
        self.rows.values()
    }

    /// Returns an owned copy of every line, ordered by id.
    pub fn snapshot(&self) -> Vec<Line> {
        self.rows.values().cloned().collect()
    }

    /// Remove a line, returning it if it existed.
    pub fn remove(&mut self, id: LineId) -> Option<Line> {
        self.rows.remove(&id)
    }

    /// Returns true if any line runs through the station.
    pub fn uses_station(&self, station: StationId) -> bool {
        self.rows.values().any(|line| line.contains_station(station))
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Distance, Station};

    fn draft(name: &str, up: u64, down: u64) -> LineDraft {
        LineDraft::new(
            name,
            "blue",
            0,
            Station::new(StationId(up), format!("S{up}")),
            Station::new(StationId(down), format!("S{down}")),
            Distance::new(10).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn insert_assigns_ids() {
        let mut table = LineTable::default();
        assert_eq!(table.insert(draft("1", 1, 2)).unwrap().id(), LineId(1));
        assert_eq!(table.insert(draft("2", 2, 3)).unwrap().id(), LineId(2));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut table = LineTable::default();
        table.insert(draft("Line 1", 1, 2)).unwrap();
        assert_eq!(
            table.insert(draft("Line 1", 3, 4)).unwrap_err(),
            NameTaken("Line 1".to_string())
        );
    }

    #[test]
    fn name_taken_excludes_self() {
        let mut table = LineTable::default();
        let id = table.insert(draft("Line 1", 1, 2)).unwrap().id();
        assert!(table.name_taken("Line 1", None));
        assert!(!table.name_taken("Line 1", Some(id)));
        assert!(table.name_taken("Line 1", Some(LineId(99))));
    }

    #[test]
    fn uses_station() {
        let mut table = LineTable::default();
        table.insert(draft("Line 1", 1, 2)).unwrap();
        assert!(table.uses_station(StationId(1)));
        assert!(table.uses_station(StationId(2)));
        assert!(!table.uses_station(StationId(3)));
    }

    #[test]
    fn snapshot_is_detached() {
        let mut table = LineTable::default();
        let id = table.insert(draft("Line 1", 1, 2)).unwrap().id();
        let snapshot = table.snapshot();
        table.remove(id);
        assert!(table.is_empty());
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id(), id);
    }

    #[test]
    fn get_mut_mutates_in_place() {
        let mut table = LineTable::default();
        let id = table.insert(draft("Line 1", 1, 2)).unwrap().id();
        table.get_mut(id).unwrap().update("Line 8", "pink");
        assert_eq!(table.get(id).unwrap().name(), "Line 8");
        assert_eq!(table.all().count(), 1);
    }
}
