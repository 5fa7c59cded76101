//! Sections: directed links between two stations.

use std::hash::{Hash, Hasher};

use super::{Distance, DomainError, Station, StationId};

/// A directed link from an upstream station to a downstream station.
///
/// Identity is the (upstream, downstream) pair. The distance is carried
/// along but never compared, so a section built from an itinerary (which has
/// no distance) matches the same section stored on a line.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{Distance, Section, Station, StationId};
///
/// let a = Station::new(StationId(1), "A");
/// let b = Station::new(StationId(2), "B");
///
/// let on_line = Section::with_distance(a.clone(), b.clone(), Distance::new(5).unwrap());
/// let travelled = Section::new(a.clone(), b.clone());
/// assert_eq!(on_line, travelled);
///
/// // Direction matters
/// assert_ne!(Section::new(a.clone(), b.clone()), Section::new(b, a));
/// ```
#[derive(Debug, Clone)]
pub struct Section {
    upstream: Station,
    downstream: Station,
    distance: Option<Distance>,
}

impl Section {
    /// Create a section without a distance, as travelled by an itinerary.
    pub fn new(upstream: Station, downstream: Station) -> Self {
        Self {
            upstream,
            downstream,
            distance: None,
        }
    }

    /// Create a section with a known distance, as stored on a line.
    pub fn with_distance(upstream: Station, downstream: Station, distance: Distance) -> Self {
        Self {
            upstream,
            downstream,
            distance: Some(distance),
        }
    }

    /// Returns the upstream station.
    pub fn upstream(&self) -> &Station {
        &self.upstream
    }

    /// Returns the downstream station.
    pub fn downstream(&self) -> &Station {
        &self.downstream
    }

    /// Returns the distance, if known.
    pub fn distance(&self) -> Option<Distance> {
        self.distance
    }

    /// Returns the identity pair (upstream id, downstream id).
    pub fn key(&self) -> (StationId, StationId) {
        (self.upstream.id(), self.downstream.id())
    }

    /// Returns true if either end is the given station.
    pub fn touches(&self, station: StationId) -> bool {
        self.upstream.id() == station || self.downstream.id() == station
    }

    /// Moves the upstream end forward to `station`, giving up `carved`.
    ///
    /// `(A, C, 10)` split at `B` with `carved = 4` becomes `(B, C, 6)`.
    pub(crate) fn shift_upstream(
        &mut self,
        station: Station,
        carved: Distance,
    ) -> Result<(), DomainError> {
        let remaining = self.required_distance()?.shorten_by(carved)?;
        self.upstream = station;
        self.distance = Some(remaining);
        Ok(())
    }

    /// Moves the downstream end back to `station`, giving up `carved`.
    ///
    /// `(A, C, 10)` split at `B` with `carved = 4` becomes `(A, B, 6)`.
    pub(crate) fn shift_downstream(
        &mut self,
        station: Station,
        carved: Distance,
    ) -> Result<(), DomainError> {
        let remaining = self.required_distance()?.shorten_by(carved)?;
        self.downstream = station;
        self.distance = Some(remaining);
        Ok(())
    }

    pub(crate) fn required_distance(&self) -> Result<Distance, DomainError> {
        self.distance.ok_or(DomainError::MissingDistance)
    }
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Section {}

impl Hash for Section {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
