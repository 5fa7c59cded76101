//! Domain error types.
//!
//! These errors represent rule violations on lines and sections. They are
//! distinct from lookup failures, which belong to the service layer.

use super::StationId;

/// Domain-level errors for line and section rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A distance of zero was supplied
    #[error("distance must be greater than zero")]
    NonPositiveDistance,

    /// A section would link a station to itself
    #[error("station {0} cannot be both ends of a section")]
    SameStation(StationId),

    /// The new section does not fit inside the section it would split
    #[error("distance {requested} must be shorter than the existing section ({existing})")]
    DistanceTooLong { existing: u32, requested: u32 },

    /// Both stations are already on the line
    #[error("section {up} -> {down} is already registered")]
    SectionAlreadyRegistered { up: StationId, down: StationId },

    /// Neither station is on the line
    #[error("section {up} -> {down} does not connect to the line")]
    SectionNotConnected { up: StationId, down: StationId },

    /// Removing a station would leave the line without a section
    #[error("a line with a single section cannot lose a station")]
    LastSection,

    /// The station is not part of the line's path
    #[error("station {0} is not on the line")]
    StationNotOnLine(StationId),

    /// A line section was stored without a distance
    #[error("line section is missing its distance")]
    MissingDistance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::NonPositiveDistance;
        assert_eq!(err.to_string(), "distance must be greater than zero");

        let err = DomainError::DistanceTooLong {
            existing: 7,
            requested: 10,
        };
        assert_eq!(
            err.to_string(),
            "distance 10 must be shorter than the existing section (7)"
        );

        let err = DomainError::SectionAlreadyRegistered {
            up: StationId(1),
            down: StationId(2),
        };
        assert_eq!(err.to_string(), "section 1 -> 2 is already registered");

        let err = DomainError::StationNotOnLine(StationId(9));
        assert_eq!(err.to_string(), "station 9 is not on the line");

        let err = DomainError::LastSection;
        assert_eq!(
            err.to_string(),
            "a line with a single section cannot lose a station"
        );
    }
}
