//! Display formatting of coordinates and waypoint labels.

use crate::types::Coordinate;

/// Fractional digits shown for every coordinate component.
pub const COORD_DECIMALS: usize = 8;

/// Format one component with exactly [`COORD_DECIMALS`] fractional digits.
///
/// Output never depends on locale: `.` is always the decimal separator.
pub fn format_component(value: f64) -> String {
    let text = format!("{value:.COORD_DECIMALS$}");
    // "-0.00000000" reads as noise next to a real zero.
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}

/// Format a coordinate as `(x, y)`.
pub fn format_coordinate(c: Coordinate) -> String {
    format!("({}, {})", format_component(c.x), format_component(c.y))
}

/// Label of the vertex at `index` in traversal order: "01", "02", ...
///
/// Labels stay two digits wide up to 99 vertices and simply grow past that.
pub fn vertex_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Label of a polygon connector requested from row `at_index`.
pub fn connector_label(at_index: usize) -> String {
    format!("P{}", at_index + 1)
}
