mod coord;
mod geometry;
mod waypoint;

pub use coord::Coordinate;
pub use geometry::{Geometry, GeometryKind};
pub use waypoint::{Waypoint, WaypointKind};
