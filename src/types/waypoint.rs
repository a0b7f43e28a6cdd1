use super::coord::Coordinate;
use crate::format::format_coordinate;
use serde::Serialize;

/// What a waypoint stands for in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WaypointKind {
    /// A vertex of the drawn path, labeled "01", "02", ...
    Vertex,
    /// Anchor of a polygon spliced into the path, labeled "P<n>".
    PolygonConnector,
}

impl WaypointKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::PolygonConnector => "polygon",
        }
    }
}

/// One labeled entry of the waypoint sequence.
///
/// Identity is positional; labels are only for display and may repeat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    pub label: String,
    pub coordinate: Coordinate,
    pub kind: WaypointKind,
}

impl Waypoint {
    pub const fn vertex(label: String, coordinate: Coordinate) -> Self {
        Self {
            label,
            coordinate,
            kind: WaypointKind::Vertex,
        }
    }

    pub const fn connector(label: String, coordinate: Coordinate) -> Self {
        Self {
            label,
            coordinate,
            kind: WaypointKind::PolygonConnector,
        }
    }

    pub const fn is_vertex(&self) -> bool {
        matches!(self.kind, WaypointKind::Vertex)
    }

    /// Display text of the coordinate with 8 fractional digits.
    pub fn formatted_coordinate(&self) -> String {
        format_coordinate(self.coordinate)
    }
}
