//! Geometries reported by the map surface.

use super::coord::Coordinate;
use std::fmt;

/// Declared type of a geometry, mirroring the names a web map uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
}

impl GeometryKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A drawn geometry.
///
/// Polygon rings are stored as given by the surface; an interactively drawn
/// ring is closed, so its last coordinate repeats the first.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Coordinate),
    LineString(Vec<Coordinate>),
    /// Outer ring first, holes after it.
    Polygon(Vec<Vec<Coordinate>>),
}

impl Geometry {
    pub const fn kind(&self) -> GeometryKind {
        match self {
            Self::Point(_) => GeometryKind::Point,
            Self::LineString(_) => GeometryKind::LineString,
            Self::Polygon(_) => GeometryKind::Polygon,
        }
    }

    /// Outer ring of a polygon, `None` for other kinds.
    pub fn outer_ring(&self) -> Option<&[Coordinate]> {
        match self {
            Self::Polygon(rings) => rings.first().map(Vec::as_slice),
            _ => None,
        }
    }
}
