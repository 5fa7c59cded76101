//! Extra-fee computation for an itinerary.
//!
//! The pipeline is: ordered stations -> segments -> matching lines -> the
//! largest extra fee among the matched lines. Everything here is pure and
//! synchronous; callers hand in a snapshot of the line catalog.

mod aggregate;
mod matcher;
mod segments;

pub use aggregate::{FeePolicy, InvalidFeePolicy, max_extra_fee};
pub use matcher::{find_line_with, lines_with};
pub use segments::build_segments;
