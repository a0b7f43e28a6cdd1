use super::SessionError;
use crate::types::{Coordinate, Geometry};

/// Coordinates that become the vertex run for `geometry`.
///
/// A line string yields its points in order; a polygon yields its outer ring
/// as given, holes ignored. Other kinds are rejected.
pub fn vertex_run(geometry: &Geometry) -> Result<Vec<Coordinate>, SessionError> {
    match geometry {
        Geometry::LineString(coords) => Ok(coords.clone()),
        Geometry::Polygon(_) => Ok(geometry.outer_ring().map(<[_]>::to_vec).unwrap_or_default()),
        Geometry::Point(_) => Err(SessionError::UnsupportedGeometry(geometry.kind())),
    }
}

/// Anchor position of a polygon spliced into the sequence: the ring's first point.
pub fn connector_anchor(geometry: &Geometry) -> Result<Option<Coordinate>, SessionError> {
    match geometry {
        Geometry::Polygon(_) => Ok(geometry.outer_ring().and_then(|ring| ring.first().copied())),
        other => Err(SessionError::UnsupportedGeometry(other.kind())),
    }
}
