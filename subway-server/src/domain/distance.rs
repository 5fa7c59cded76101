//! Distance between adjacent stations.

use std::fmt;

use super::DomainError;

/// A strictly positive distance between two adjacent stations.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Distance;
///
/// let d = Distance::new(10).unwrap();
/// assert_eq!(d.get(), 10);
///
/// // Zero is rejected
/// assert!(Distance::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u32);

impl Distance {
    /// Create a distance, rejecting zero.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::NonPositiveDistance);
        }
        Ok(Distance(value))
    }

    /// Returns the raw distance value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns what remains of `self` after carving out `part`.
    ///
    /// `part` must be strictly shorter than `self`, so the remainder stays
    /// positive.
    pub fn shorten_by(self, part: Distance) -> Result<Distance, DomainError> {
        if part >= self {
            return Err(DomainError::DistanceTooLong {
                existing: self.0,
                requested: part.0,
            });
        }
        Ok(Distance(self.0 - part.0))
    }

    /// Returns the combined length of two consecutive sections.
    pub fn extend_by(self, other: Distance) -> Distance {
        Distance(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
