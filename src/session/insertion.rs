//! Splicing auxiliary polygons into the waypoint sequence.

use super::controller::DrawSessionController;
use super::extract::connector_anchor;
use super::surface::{DrawHandle, DrawKind, MapSurface};
use super::SessionError;
use crate::format::connector_label;
use crate::types::{Geometry, Waypoint};
use tracing::{info, warn};

/// Side of the chosen row the connector lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Before,
    After,
}

impl InsertPosition {
    const fn target(self, at_index: usize) -> usize {
        match self {
            Self::Before => at_index,
            Self::After => at_index + 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingInsertion {
    at_index: usize,
    position: InsertPosition,
    handle: DrawHandle,
}

/// Runs the nested polygon draw behind "insert polygon before/after".
#[derive(Debug, Default)]
pub struct PolygonInsertionCoordinator {
    pending: Option<PendingInsertion>,
}

impl PolygonInsertionCoordinator {
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether `handle` is the nested draw this coordinator waits on.
    pub fn owns(&self, handle: DrawHandle) -> bool {
        self.pending.is_some_and(|p| p.handle == handle)
    }

    /// Start a nested polygon draw that will splice a connector next to row
    /// `at_index`.
    pub fn begin(
        &mut self,
        controller: &mut DrawSessionController,
        surface: &mut dyn MapSurface,
        at_index: usize,
        position: InsertPosition,
    ) -> Result<(), SessionError> {
        if controller.is_drawing() {
            return Err(SessionError::DrawInProgress);
        }
        let len = controller.waypoints().len();
        if at_index >= len {
            return Err(SessionError::InvalidInsertionIndex {
                index: at_index,
                len,
            });
        }
        let handle = controller.start_draw(surface, DrawKind::Polygon)?;
        controller.presentation_mut().close_menu();
        self.pending = Some(PendingInsertion {
            at_index,
            position,
            handle,
        });
        Ok(())
    }

    /// The nested polygon is done: splice its connector and go idle.
    ///
    /// Returns the sequence position the connector landed at, or `None` when
    /// the polygon had no vertices to anchor on.
    pub fn complete(
        &mut self,
        controller: &mut DrawSessionController,
        surface: &mut dyn MapSurface,
        geometry: Geometry,
    ) -> Result<Option<usize>, SessionError> {
        let Some(pending) = self.pending.take() else {
            return Ok(None);
        };
        let anchor = match connector_anchor(&geometry) {
            Ok(anchor) => anchor,
            Err(err) => {
                controller.end_session();
                return Err(err);
            }
        };
        let Some(anchor) = anchor else {
            warn!(handle = pending.handle.0, "inserted polygon has no vertices");
            controller.end_session();
            return Ok(None);
        };

        let target = pending.position.target(pending.at_index);
        let connector = Waypoint::connector(connector_label(pending.at_index), anchor);
        let label = connector.label.clone();
        let inserted = controller.waypoints_mut().insert(target, connector);
        controller.end_session();
        inserted?;
        surface.add_feature(geometry);
        let len = controller.waypoints().len();
        let presentation = controller.presentation_mut();
        presentation.reconcile(len);
        presentation.open_modal();
        info!(%label, position = target, "polygon connector inserted");
        Ok(Some(target))
    }

    pub fn abandon(&mut self) {
        self.pending = None;
    }
}
