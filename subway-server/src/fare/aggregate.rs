//! Reducing matched lines to a single extra fee.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::matcher::{find_line_with, lines_with};
use super::segments::build_segments;
use crate::domain::{Line, LineId, Station};

/// Error returned when parsing an unknown fee policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fee policy {0:?} (expected \"last-segment\" or \"all-segments\")")]
pub struct InvalidFeePolicy(String);

/// How matched lines are accumulated across an itinerary's segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeePolicy {
    /// Each segment replaces the matched set with its first matching line,
    /// so only the final segment's match is charged.
    #[default]
    LastSegment,

    /// Every line containing any segment of the itinerary is charged.
    AllSegments,
}

impl FeePolicy {
    /// Returns the configuration name of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeePolicy::LastSegment => "last-segment",
            FeePolicy::AllSegments => "all-segments",
        }
    }
}

impl fmt::Display for FeePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeePolicy {
    type Err = InvalidFeePolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-segment" => Ok(FeePolicy::LastSegment),
            "all-segments" => Ok(FeePolicy::AllSegments),
            _ => Err(InvalidFeePolicy(s.to_string())),
        }
    }
}

/// Computes the extra fee for travelling `itinerary` over `lines`.
///
/// Returns the largest extra fee among the matched lines, or zero when no
/// line matched (including itineraries of fewer than two stations).
pub fn max_extra_fee(itinerary: &[Station], lines: &[Line], policy: FeePolicy) -> u32 {
    let segments = build_segments(itinerary);
    let mut matched: HashMap<LineId, &Line> = HashMap::new();

    for segment in &segments {
        match policy {
            FeePolicy::LastSegment => {
                matched = find_line_with(lines, segment)
                    .map(|line| (line.id(), line))
                    .into_iter()
                    .collect();
            }
            FeePolicy::AllSegments => {
                matched.extend(lines_with(lines, segment).map(|line| (line.id(), line)));
            }
        }
    }

    let fee = matched.values().map(|line| line.extra_fee()).max().unwrap_or(0);
    debug!(
        segments = segments.len(),
        matched = matched.len(),
        policy = %policy,
        fee,
        "computed extra fee"
    );
    fee
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Distance, LineDraft, StationId};

    fn station(id: u64) -> Station {
        Station::new(StationId(id), format!("S{id}"))
    }

    fn line(id: u64, fee: u32, up: u64, down: u64) -> Line {
        let draft = LineDraft::new(
            format!("L{id}"),
            "red",
            fee,
            station(up),
            station(down),
            Distance::new(10).unwrap(),
        )
        .unwrap();
        Line::open(LineId(id), draft)
    }

    fn itinerary(ids: &[u64]) -> Vec<Station> {
        ids.iter().map(|&id| station(id)).collect()
    }

    const A: u64 = 1;
    const B: u64 = 2;
    const C: u64 = 3;

    #[test]
    fn last_segment_fee_charged() {
        let lines = vec![line(1, 0, A, B), line(2, 900, B, C)];
        let fee = max_extra_fee(&itinerary(&[A, B, C]), &lines, FeePolicy::LastSegment);
        assert_eq!(fee, 900);
    }

    #[test]
    fn last_segment_drops_earlier_matches() {
        let lines = vec![line(1, 900, A, B), line(2, 0, B, C)];
        let path = itinerary(&[A, B, C]);
        assert_eq!(max_extra_fee(&path, &lines, FeePolicy::LastSegment), 0);
        assert_eq!(max_extra_fee(&path, &lines, FeePolicy::AllSegments), 900);
    }

    #[test]
    fn last_segment_without_match_resets_to_zero() {
        let lines = vec![line(1, 500, A, B)];
        let path = itinerary(&[A, B, C]);
        assert_eq!(max_extra_fee(&path, &lines, FeePolicy::LastSegment), 0);
        assert_eq!(max_extra_fee(&path, &lines, FeePolicy::AllSegments), 500);
    }

    #[test]
    fn no_matching_line_is_zero() {
        let lines = vec![line(1, 900, A, B)];
        for policy in [FeePolicy::LastSegment, FeePolicy::AllSegments] {
            assert_eq!(max_extra_fee(&itinerary(&[7, 8, 9]), &lines, policy), 0);
        }
    }

    #[test]
    fn empty_and_singleton_itineraries_are_zero() {
        let lines = vec![line(1, 900, A, B)];
        for policy in [FeePolicy::LastSegment, FeePolicy::AllSegments] {
            assert_eq!(max_extra_fee(&[], &lines, policy), 0);
            assert_eq!(max_extra_fee(&itinerary(&[A]), &lines, policy), 0);
        }
    }

    #[test]
    fn shared_segment_charges_one_line_under_last_segment() {
        let lines = vec![line(1, 100, A, B), line(2, 900, A, B)];
        let path = itinerary(&[A, B]);
        let fee = max_extra_fee(&path, &lines, FeePolicy::LastSegment);
        assert!(fee == 100 || fee == 900);
        assert_eq!(max_extra_fee(&path, &lines, FeePolicy::AllSegments), 900);
    }

    #[test]
    fn reverse_direction_not_charged() {
        let lines = vec![line(1, 300, A, B)];
        let fee = max_extra_fee(&itinerary(&[B, A]), &lines, FeePolicy::AllSegments);
        assert_eq!(fee, 0);
    }

    #[test]
    fn parse_policy() {
        assert_eq!("last-segment".parse::<FeePolicy>(), Ok(FeePolicy::LastSegment));
        assert_eq!(" All-Segments ".parse::<FeePolicy>(), Ok(FeePolicy::AllSegments));
        assert_eq!(
            "union".parse::<FeePolicy>(),
            Err(InvalidFeePolicy("union".to_string()))
        );
    }

    #[test]
    fn policy_display_round_trips() {
        for policy in [FeePolicy::LastSegment, FeePolicy::AllSegments] {
            assert_eq!(policy.to_string().parse::<FeePolicy>(), Ok(policy));
        }
        assert_eq!(FeePolicy::default(), FeePolicy::LastSegment);
    }
}
