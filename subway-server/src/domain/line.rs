//! Line types.
//!
//! A `Line` owns the sections that make up its physical path. The sections
//! are stored unordered; the path order is recovered on demand by walking
//! from the head station.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use super::{Distance, DomainError, LineId, Section, Station, StationId};

/// A validated request to open a new line with a single section.
#[derive(Debug, Clone)]
pub struct LineDraft {
    name: String,
    color: String,
    extra_fee: u32,
    first: Section,
}

impl LineDraft {
    /// Create a draft line running from `up` to `down`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SameStation` if both ends are the same station.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        extra_fee: u32,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<Self, DomainError> {
        if up == down {
            return Err(DomainError::SameStation(up.id()));
        }
        Ok(Self {
            name: name.into(),
            color: color.into(),
            extra_fee,
            first: Section::with_distance(up, down, distance),
        })
    }

    /// Returns the requested line name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A transit line.
///
/// # Invariants
///
/// - At least one section
/// - Every section carries a distance
/// - Sections form a single chain: each station is the upstream end of at
///   most one section and the downstream end of at most one section
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    extra_fee: u32,
    sections: Vec<Section>,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl Line {
    /// Opens a line from a draft under the given id.
    pub fn open(id: LineId, draft: LineDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: draft.name,
            color: draft.color,
            extra_fee: draft.extra_fee,
            sections: vec![draft.first],
            created_at: now,
            modified_at: now,
        }
    }

    /// Returns the line id.
    pub fn id(&self) -> LineId {
        self.id
    }

    /// Returns the line name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the surcharge for travelling on this line.
    pub fn extra_fee(&self) -> u32 {
        self.extra_fee
    }

    /// Returns when the line was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the line was last modified.
    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// Returns the sections in insertion order (not path order).
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns true if the line contains a section equal to `section`.
    pub fn has_section(&self, section: &Section) -> bool {
        self.sections.contains(section)
    }

    /// Returns true if the station is on this line's path.
    pub fn contains_station(&self, station: StationId) -> bool {
        self.sections.iter().any(|s| s.touches(station))
    }

    /// Returns the stations in path order, from head to tail.
    pub fn stations(&self) -> Vec<Station> {
        let downstreams: HashSet<StationId> =
            self.sections.iter().map(|s| s.downstream().id()).collect();
        let by_upstream: HashMap<StationId, &Section> = self
            .sections
            .iter()
            .map(|s| (s.upstream().id(), s))
            .collect();

        let Some(head) = self
            .sections
            .iter()
            .find(|s| !downstreams.contains(&s.upstream().id()))
        else {
            return Vec::new();
        };

        let mut stations = vec![head.upstream().clone()];
        let mut current = head;
        // Bounded by the section count so a corrupt chain cannot loop forever
        for _ in 0..self.sections.len() {
            stations.push(current.downstream().clone());
            match by_upstream.get(&current.downstream().id()) {
                Some(next) => current = *next,
                None => break,
            }
        }
        stations
    }

    /// Renames and recolors the line.
    pub fn update(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
        self.touch();
    }

    /// Adds a section between `up` and `down`.
    ///
    /// Exactly one of the two stations must already be on the line. If an
    /// existing section starts at `up` (or ends at `down`), it is split and
    /// gives up `distance` to the new section.
    ///
    /// # Errors
    ///
    /// - `SameStation` if `up` and `down` are the same station
    /// - `SectionAlreadyRegistered` if both stations are on the line
    /// - `SectionNotConnected` if neither station is on the line
    /// - `DistanceTooLong` if the split section is not longer than `distance`
    ///
    /// On error the line is left unchanged.
    pub fn add_section(
        &mut self,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<(), DomainError> {
        if up == down {
            return Err(DomainError::SameStation(up.id()));
        }

        let has_up = self.contains_station(up.id());
        let has_down = self.contains_station(down.id());

        match (has_up, has_down) {
            (true, true) => {
                return Err(DomainError::SectionAlreadyRegistered {
                    up: up.id(),
                    down: down.id(),
                });
            }
            (false, false) if !self.sections.is_empty() => {
                return Err(DomainError::SectionNotConnected {
                    up: up.id(),
                    down: down.id(),
                });
            }
            _ => {}
        }

        if has_up {
            if let Some(existing) = self
                .sections
                .iter_mut()
                .find(|s| s.upstream().id() == up.id())
            {
                existing.shift_upstream(down.clone(), distance)?;
            }
        } else if has_down
            && let Some(existing) = self
                .sections
                .iter_mut()
                .find(|s| s.downstream().id() == down.id())
        {
            existing.shift_downstream(up.clone(), distance)?;
        }

        self.sections.push(Section::with_distance(up, down, distance));
        self.touch();
        Ok(())
    }

    /// Removes a station from the line's path.
    ///
    /// A station in the middle of the path merges its two sections into one
    /// whose distance is the sum. A terminus simply drops its section.
    ///
    /// # Errors
    ///
    /// - `LastSection` if the line has only one section
    /// - `StationNotOnLine` if the station is not on the path
    pub fn remove_station(&mut self, station: StationId) -> Result<(), DomainError> {
        if self.sections.len() <= 1 {
            return Err(DomainError::LastSection);
        }

        let incoming = self
            .sections
            .iter()
            .position(|s| s.downstream().id() == station);
        let outgoing = self
            .sections
            .iter()
            .position(|s| s.upstream().id() == station);

        match (incoming, outgoing) {
            (Some(i), Some(o)) => {
                let before = &self.sections[i];
                let after = &self.sections[o];
                let merged = Section::with_distance(
                    before.upstream().clone(),
                    after.downstream().clone(),
                    before
                        .required_distance()?
                        .extend_by(after.required_distance()?),
                );
                // Remove the higher index first so the lower one stays valid
                self.sections.remove(i.max(o));
                self.sections.remove(i.min(o));
                self.sections.push(merged);
            }
            (Some(idx), None) | (None, Some(idx)) => {
                self.sections.remove(idx);
            }
            (None, None) => return Err(DomainError::StationNotOnLine(station)),
        }

        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: u64) -> Station {
        Station::new(StationId(id), format!("S{id}"))
    }

    fn dist(value: u32) -> Distance {
        Distance::new(value).unwrap()
    }

    /// Line 1 -> 2 with distance 10.
    fn line() -> Line {
        let draft = LineDraft::new("Line 2", "green", 0, station(1), station(2), dist(10)).unwrap();
        Line::open(LineId(1), draft)
    }

    fn path(line: &Line) -> Vec<u64> {
        line.stations().iter().map(|s| s.id().0).collect()
    }

    fn distance_of(line: &Line, up: u64, down: u64) -> Option<u32> {
        line.sections()
            .iter()
            .find(|s| s.key() == (StationId(up), StationId(down)))
            .and_then(|s| s.distance())
            .map(Distance::get)
    }

    #[test]
    fn draft_rejects_same_station() {
        let err = LineDraft::new("L", "red", 0, station(1), station(1), dist(5)).unwrap_err();
        assert_eq!(err, DomainError::SameStation(StationId(1)));
    }

    #[test]
    fn open_line_has_one_section() {
        let line = line();
        assert_eq!(line.sections().len(), 1);
        assert_eq!(path(&line), vec![1, 2]);
        assert_eq!(line.created_at(), line.modified_at());
    }

    #[test]
    fn extend_at_tail() {
        let mut line = line();
        line.add_section(station(2), station(3), dist(5)).unwrap();
        assert_eq!(path(&line), vec![1, 2, 3]);
        assert_eq!(distance_of(&line, 1, 2), Some(10));
        assert_eq!(distance_of(&line, 2, 3), Some(5));
    }

    #[test]
    fn extend_at_head() {
        let mut line = line();
        line.add_section(station(0), station(1), dist(5)).unwrap();
        assert_eq!(path(&line), vec![0, 1, 2]);
    }

    #[test]
    fn split_from_upstream() {
        let mut line = line();
        line.add_section(station(1), station(3), dist(4)).unwrap();
        assert_eq!(path(&line), vec![1, 3, 2]);
        assert_eq!(distance_of(&line, 1, 3), Some(4));
        assert_eq!(distance_of(&line, 3, 2), Some(6));
    }

    #[test]
    fn split_from_downstream() {
        let mut line = line();
        line.add_section(station(3), station(2), dist(4)).unwrap();
        assert_eq!(path(&line), vec![1, 3, 2]);
        assert_eq!(distance_of(&line, 1, 3), Some(6));
        assert_eq!(distance_of(&line, 3, 2), Some(4));
    }

    #[test]
    fn split_requires_shorter_distance() {
        let mut line = line();
        let err = line.add_section(station(1), station(3), dist(10)).unwrap_err();
        assert_eq!(
            err,
            DomainError::DistanceTooLong {
                existing: 10,
                requested: 10
            }
        );
        assert_eq!(path(&line), vec![1, 2]);
        assert_eq!(line.sections().len(), 1);
    }

    #[test]
    fn reject_already_registered() {
        let mut line = line();
        let err = line.add_section(station(1), station(2), dist(3)).unwrap_err();
        assert_eq!(
            err,
            DomainError::SectionAlreadyRegistered {
                up: StationId(1),
                down: StationId(2)
            }
        );
        // Reversed pair is still two known stations
        assert!(line.add_section(station(2), station(1), dist(3)).is_err());
    }

    #[test]
    fn reject_not_connected() {
        let mut line = line();
        let err = line.add_section(station(5), station(6), dist(3)).unwrap_err();
        assert_eq!(
            err,
            DomainError::SectionNotConnected {
                up: StationId(5),
                down: StationId(6)
            }
        );
    }

    #[test]
    fn reject_same_station_section() {
        let mut line = line();
        assert_eq!(
            line.add_section(station(1), station(1), dist(3)),
            Err(DomainError::SameStation(StationId(1)))
        );
    }

    #[test]
    fn remove_middle_merges_sections() {
        let mut line = line();
        line.add_section(station(2), station(3), dist(5)).unwrap();
        line.remove_station(StationId(2)).unwrap();
        assert_eq!(path(&line), vec![1, 3]);
        assert_eq!(distance_of(&line, 1, 3), Some(15));
        assert_eq!(line.sections().len(), 1);
    }

    #[test]
    fn remove_head_and_tail() {
        let mut line = line();
        line.add_section(station(2), station(3), dist(5)).unwrap();
        line.add_section(station(3), station(4), dist(5)).unwrap();

        line.remove_station(StationId(1)).unwrap();
        assert_eq!(path(&line), vec![2, 3, 4]);

        line.remove_station(StationId(4)).unwrap();
        assert_eq!(path(&line), vec![2, 3]);
    }

    #[test]
    fn remove_from_single_section_fails() {
        let mut line = line();
        assert_eq!(line.remove_station(StationId(1)), Err(DomainError::LastSection));
        assert_eq!(path(&line), vec![1, 2]);
    }

    #[test]
    fn remove_unknown_station_fails() {
        let mut line = line();
        line.add_section(station(2), station(3), dist(5)).unwrap();
        assert_eq!(
            line.remove_station(StationId(9)),
            Err(DomainError::StationNotOnLine(StationId(9)))
        );
    }

    #[test]
    fn has_section_ignores_distance_but_not_direction() {
        let line = line();
        assert!(line.has_section(&Section::new(station(1), station(2))));
        assert!(!line.has_section(&Section::new(station(2), station(1))));
    }

    #[test]
    fn update_changes_name_and_color() {
        let mut line = line();
        line.update("Line 9", "gold");
        assert_eq!(line.name(), "Line 9");
        assert_eq!(line.color(), "gold");
        assert!(line.modified_at() >= line.created_at());
    }

    #[test]
    fn path_order_survives_mixed_inserts() {
        let mut line = line();
        line.add_section(station(2), station(5), dist(8)).unwrap();
        line.add_section(station(0), station(1), dist(2)).unwrap();
        line.add_section(station(3), station(5), dist(3)).unwrap();
        line.add_section(station(1), station(4), dist(1)).unwrap();
        assert_eq!(path(&line), vec![0, 1, 4, 2, 3, 5]);
        assert_eq!(distance_of(&line, 4, 2), Some(9));
        assert_eq!(distance_of(&line, 2, 3), Some(5));
    }
}
