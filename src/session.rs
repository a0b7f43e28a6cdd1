//! Drawing-session core: drawing modes, the waypoint sequence, polygon
//! insertion and the flags the details panel reads.
//!
//! All state changes happen synchronously inside [`WaypointEditor`], which is
//! the single entry point for both user commands and map events. Each call
//! runs to completion before the next one is handled.

mod controller;
mod error;
mod extract;
mod insertion;
mod presentation;
mod sequence;
mod surface;

pub use controller::{DrawMode, DrawSessionController};
pub use error::SessionError;
pub use insertion::{InsertPosition, PolygonInsertionCoordinator};
pub use surface::{DrawHandle, DrawKind, GeometryEvent, MapSurface};

use crate::types::Waypoint;
use tracing::{debug, info};

/// Read-only copy of the session for the view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSnapshot {
    pub waypoints: Vec<Waypoint>,
    pub mode: DrawMode,
    pub modal_open: bool,
    pub active_menu_index: Option<usize>,
    pub insertion_pending: bool,
}

/// Dispatch point for commands and geometry events.
#[derive(Debug, Default)]
pub struct WaypointEditor {
    controller: DrawSessionController,
    insertion: PolygonInsertionCoordinator,
}

impl WaypointEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn mode(&self) -> DrawMode {
        self.controller.mode()
    }

    pub const fn is_drawing(&self) -> bool {
        self.controller.is_drawing()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        self.controller.waypoints().as_slice()
    }

    pub const fn modal_open(&self) -> bool {
        self.controller.presentation().modal_open()
    }

    pub const fn active_menu_index(&self) -> Option<usize> {
        self.controller.presentation().active_menu_index()
    }

    pub const fn insertion_pending(&self) -> bool {
        self.insertion.is_pending()
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            waypoints: self.controller.waypoints().to_vec(),
            mode: self.mode(),
            modal_open: self.modal_open(),
            active_menu_index: self.active_menu_index(),
            insertion_pending: self.insertion_pending(),
        }
    }

    pub fn start_draw(
        &mut self,
        surface: &mut dyn MapSurface,
        kind: DrawKind,
    ) -> Result<(), SessionError> {
        self.controller.start_draw(surface, kind).map(|_| ())
    }

    pub fn insert_polygon(
        &mut self,
        surface: &mut dyn MapSurface,
        at_index: usize,
        position: InsertPosition,
    ) -> Result<(), SessionError> {
        self.insertion
            .begin(&mut self.controller, surface, at_index, position)
    }

    /// Abandon whatever is being drawn, nested insertions included.
    pub fn cancel_draw(&mut self, surface: &mut dyn MapSurface) -> bool {
        self.insertion.abandon();
        self.controller.cancel(surface)
    }

    pub fn clear(&mut self, surface: &mut dyn MapSurface) {
        self.insertion.abandon();
        self.controller.clear(surface);
        info!("drawing cleared");
    }

    pub fn toggle_menu(&mut self, index: usize) {
        let len = self.controller.waypoints().len();
        self.controller.presentation_mut().toggle_menu(index, len);
    }

    pub fn close_menu(&mut self) {
        self.controller.presentation_mut().close_menu();
    }

    /// Show or hide the details panel.
    pub fn toggle_modal(&mut self) {
        self.controller.presentation_mut().toggle_modal();
    }

    /// Apply one map event. Events for handles other than the active one are
    /// dropped.
    pub fn handle_event(
        &mut self,
        surface: &mut dyn MapSurface,
        event: GeometryEvent,
    ) -> Result<(), SessionError> {
        let handle = event.handle();
        if !self.controller.accepts(handle) {
            debug!(handle = handle.0, "event for inactive draw dropped");
            return Ok(());
        }
        let nested = self.insertion.owns(handle);
        match event {
            GeometryEvent::Started(..) => {
                self.controller.on_geometry_started(!nested);
                Ok(())
            }
            // The auxiliary polygon never feeds the vertex run.
            GeometryEvent::Changed(..) if nested => Ok(()),
            GeometryEvent::Changed(_, geometry) => {
                let res = self.controller.on_geometry_changed(&geometry);
                if let Err(err) = &res {
                    debug!(%err, "geometry change ignored");
                }
                res
            }
            GeometryEvent::Finished(_, geometry) if nested => self
                .insertion
                .complete(&mut self.controller, surface, geometry)
                .map(|_| ()),
            GeometryEvent::Finished(_, geometry) => {
                info!(
                    kind = geometry.kind().label(),
                    waypoints = self.controller.waypoints().len(),
                    "draw finished"
                );
                surface.add_feature(geometry);
                self.controller.end_session();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests;
