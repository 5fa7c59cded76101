//! Segment construction from an ordered station list.

use crate::domain::{Section, Station};

/// Builds one segment per consecutive pair of stations.
///
/// N stations yield N-1 segments in input order; fewer than two stations
/// yield none. No deduplication is done.
pub fn build_segments(stations: &[Station]) -> Vec<Section> {
    stations
        .windows(2)
        .map(|pair| Section::new(pair[0].clone(), pair[1].clone()))
        .collect()
}
