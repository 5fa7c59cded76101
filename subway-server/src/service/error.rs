//! Service error types.

use crate::domain::{DomainError, LineId, StationId};

/// Errors returned by the line and station services.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// No line has the given id
    #[error("line {0} not found")]
    LineNotFound(LineId),

    /// No station has the given id
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// Another line already uses the name
    #[error("line name {0:?} is already taken")]
    DuplicateLineName(String),

    /// Another station already uses the name
    #[error("station name {0:?} is already taken")]
    DuplicateStationName(String),

    /// The station cannot be deleted while a line runs through it
    #[error("station {0} is still used by a line")]
    StationInUse(StationId),

    /// A line or section rule was violated
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ServiceError::LineNotFound(LineId(3)).to_string(),
            "line 3 not found"
        );
        assert_eq!(
            ServiceError::StationNotFound(StationId(8)).to_string(),
            "station 8 not found"
        );
        assert_eq!(
            ServiceError::DuplicateLineName("Line 2".into()).to_string(),
            "line name \"Line 2\" is already taken"
        );
        assert_eq!(
            ServiceError::StationInUse(StationId(1)).to_string(),
            "station 1 is still used by a line"
        );
    }

    #[test]
    fn domain_errors_are_transparent() {
        let err = ServiceError::from(DomainError::LastSection);
        assert_eq!(err.to_string(), DomainError::LastSection.to_string());
    }
}
