//! Finding the lines that run over a segment.

use crate::domain::{Line, Section};

/// Returns the first line in `lines` that contains `segment`.
///
/// Only one line is ever returned, even when several lines share the
/// segment. Use [`lines_with`] to see all of them.
pub fn find_line_with<'a>(lines: &'a [Line], segment: &Section) -> Option<&'a Line> {
    lines.iter().find(|line| line.has_section(segment))
}

/// Returns every line in `lines` that contains `segment`, in catalog order.
pub fn lines_with<'a>(
    lines: &'a [Line],
    segment: &'a Section,
) -> impl Iterator<Item = &'a Line> + 'a {
    lines.iter().filter(move |line| line.has_section(segment))
}
