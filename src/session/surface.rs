//! Contract between the session core and the map that collects drawings.

use crate::types::Geometry;

/// What the user is asked to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    LineString,
    Polygon,
}

impl DrawKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
        }
    }
}

/// Token for one interactive draw started on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawHandle(pub u64);

/// Geometry lifecycle notification emitted by the surface for a handle.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryEvent {
    /// First vertex placed.
    Started(DrawHandle, Geometry),
    /// The in-progress geometry changed; fired zero or more times.
    Changed(DrawHandle, Geometry),
    /// The user completed the geometry; fired at most once per handle.
    Finished(DrawHandle, Geometry),
}

impl GeometryEvent {
    pub const fn handle(&self) -> DrawHandle {
        match self {
            Self::Started(h, _) | Self::Changed(h, _) | Self::Finished(h, _) => *h,
        }
    }
}

/// The map the core draws on.
///
/// Implementations deliver [`GeometryEvent`]s for a handle back to the
/// session's single dispatch point, in order, one at a time.
pub trait MapSurface {
    /// Start collecting a user-drawn geometry of `kind`.
    fn begin_interactive_draw(&mut self, kind: DrawKind) -> DrawHandle;

    /// Abandon a draw; no further events are delivered for `handle`.
    fn cancel_interactive_draw(&mut self, handle: DrawHandle);

    /// Keep `geometry` rendered as a finished feature.
    fn add_feature(&mut self, geometry: Geometry);

    /// Remove every rendered feature.
    fn clear_features(&mut self);
}
