use crate::types::GeometryKind;
use thiserror::Error;

/// Reasons a session command or map event was not applied.
///
/// None of these is fatal; every variant leaves the session state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no waypoint at index {index} (sequence has {len})")]
    InvalidInsertionIndex { index: usize, len: usize },
    #[error("another drawing is already in progress")]
    DrawInProgress,
    #[error("{0} geometries cannot produce waypoints")]
    UnsupportedGeometry(GeometryKind),
}
