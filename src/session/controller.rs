//! Drawing-mode state machine.

use super::extract::vertex_run;
use super::presentation::UiPresentationState;
use super::sequence::WaypointSequence;
use super::surface::{DrawHandle, DrawKind, MapSurface};
use super::SessionError;
use crate::types::Geometry;
use tracing::{debug, info};

/// Which freehand drawing, if any, is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    #[default]
    Idle,
    DrawingLineString,
    DrawingPolygon,
}

impl DrawMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::DrawingLineString => "Drawing line",
            Self::DrawingPolygon => "Drawing polygon",
        }
    }

    pub const fn is_drawing(self) -> bool {
        !matches!(self, Self::Idle)
    }

    const fn for_kind(kind: DrawKind) -> Self {
        match kind {
            DrawKind::LineString => Self::DrawingLineString,
            DrawKind::Polygon => Self::DrawingPolygon,
        }
    }
}

/// Owns the drawing mode, the waypoint sequence and the presentation flags.
///
/// At most one interactive draw is active; every mode change goes through
/// [`Self::start_draw`] or [`Self::end_session`].
#[derive(Debug, Default)]
pub struct DrawSessionController {
    mode: DrawMode,
    handle: Option<DrawHandle>,
    tracking_changes: bool,
    waypoints: WaypointSequence,
    presentation: UiPresentationState,
}

impl DrawSessionController {
    pub const fn mode(&self) -> DrawMode {
        self.mode
    }

    pub const fn is_drawing(&self) -> bool {
        self.mode.is_drawing()
    }

    pub const fn waypoints(&self) -> &WaypointSequence {
        &self.waypoints
    }

    pub const fn waypoints_mut(&mut self) -> &mut WaypointSequence {
        &mut self.waypoints
    }

    pub const fn presentation(&self) -> &UiPresentationState {
        &self.presentation
    }

    pub const fn presentation_mut(&mut self) -> &mut UiPresentationState {
        &mut self.presentation
    }

    /// Whether events tagged with `handle` belong to the active draw.
    pub fn accepts(&self, handle: DrawHandle) -> bool {
        self.handle == Some(handle)
    }

    /// Idle → Drawing(kind). Rejected without side effects while drawing.
    pub fn start_draw(
        &mut self,
        surface: &mut dyn MapSurface,
        kind: DrawKind,
    ) -> Result<DrawHandle, SessionError> {
        if self.is_drawing() {
            debug!(requested = kind.label(), active = self.mode.label(), "draw request ignored");
            return Err(SessionError::DrawInProgress);
        }
        let handle = surface.begin_interactive_draw(kind);
        self.mode = DrawMode::for_kind(kind);
        self.handle = Some(handle);
        self.tracking_changes = false;
        info!(kind = kind.label(), handle = handle.0, "draw started");
        Ok(handle)
    }

    /// First vertex placed: show the details panel and follow changes if asked.
    pub const fn on_geometry_started(&mut self, track_changes: bool) {
        self.presentation.open_modal();
        self.tracking_changes = track_changes;
    }

    /// Rebuild the vertex run from the live geometry.
    pub fn on_geometry_changed(&mut self, geometry: &Geometry) -> Result<(), SessionError> {
        if !self.tracking_changes {
            return Ok(());
        }
        let coords = vertex_run(geometry)?;
        self.waypoints.replace_vertex_run(&coords);
        self.presentation.reconcile(self.waypoints.len());
        Ok(())
    }

    /// Back to idle; stops following the geometry.
    pub fn end_session(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!(handle = handle.0, "draw session ended");
        }
        self.mode = DrawMode::Idle;
        self.tracking_changes = false;
    }

    /// Abandon the active draw on the surface, if any.
    pub fn cancel(&mut self, surface: &mut dyn MapSurface) -> bool {
        let Some(handle) = self.handle else {
            return false;
        };
        surface.cancel_interactive_draw(handle);
        info!(handle = handle.0, "draw cancelled");
        self.end_session();
        true
    }

    /// Full reset: cancel drawing, drop waypoints and view flags, wipe the map.
    pub fn clear(&mut self, surface: &mut dyn MapSurface) {
        self.cancel(surface);
        self.waypoints.clear();
        self.presentation.reset();
        surface.clear_features();
    }
}
