//! The on-screen map: a lon/lat plate carrée view that collects drawings.

use crate::config::{InitialView, MAX_ZOOM, MIN_ZOOM};
use crate::session::{DrawHandle, DrawKind, GeometryEvent, MapSurface};
use crate::types::{Coordinate, Geometry};
use egui::{Pos2, Rect, Vec2, pos2};
use tracing::debug;

/// Pixel width of the whole world at zoom 0, as with web map tiles.
const WORLD_PX_AT_ZOOM0: f64 = 256.0;

/// Pan/zoom state of the map canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: f32,
}

impl MapView {
    pub fn from_initial(view: &InitialView) -> Self {
        let view = view.sanitized();
        Self {
            center: Coordinate::from(view.center),
            zoom: view.zoom,
        }
    }

    pub fn pixels_per_degree(&self) -> f64 {
        WORLD_PX_AT_ZOOM0 * 2f64.powf(f64::from(self.zoom)) / 360.0
    }

    pub fn to_screen(&self, rect: Rect, c: Coordinate) -> Pos2 {
        let ppd = self.pixels_per_degree();
        let center = rect.center();
        #[allow(clippy::cast_possible_truncation)]
        {
            pos2(
                center.x + ((c.x - self.center.x) * ppd) as f32,
                center.y - ((c.y - self.center.y) * ppd) as f32,
            )
        }
    }

    pub fn to_map(&self, rect: Rect, p: Pos2) -> Coordinate {
        let ppd = self.pixels_per_degree();
        let offset = p - rect.center();
        Coordinate::new(
            self.center.x + f64::from(offset.x) / ppd,
            self.center.y - f64::from(offset.y) / ppd,
        )
    }

    /// Move the map content by a screen-space delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        let ppd = self.pixels_per_degree();
        self.center.x = (self.center.x - f64::from(delta.x) / ppd).clamp(-180.0, 180.0);
        self.center.y = (self.center.y + f64::from(delta.y) / ppd).clamp(-90.0, 90.0);
    }

    /// Zoom by `steps` levels keeping the map point under `anchor` fixed.
    pub fn zoom_about(&mut self, rect: Rect, anchor: Pos2, steps: f32) {
        let before = self.to_map(rect, anchor);
        self.zoom = (self.zoom + steps).clamp(MIN_ZOOM, MAX_ZOOM);
        let after = self.to_map(rect, anchor);
        self.center.x += before.x - after.x;
        self.center.y += before.y - after.y;
    }

    /// Spacing in degrees for graticule lines roughly `target_px` apart.
    pub fn graticule_step(&self, target_px: f64) -> f64 {
        const STEPS: [f64; 12] = [
            0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0, 30.0,
        ];
        let wanted = target_px / self.pixels_per_degree();
        STEPS.iter().copied().find(|s| *s >= wanted).unwrap_or(30.0)
    }
}

/// Finished features kept on the map.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    features: Vec<Geometry>,
}

impl FeatureStore {
    pub fn iter(&self) -> impl Iterator<Item = &Geometry> {
        self.features.iter()
    }

    pub const fn len(&self) -> usize {
        self.features.len()
    }
}

#[derive(Debug, Clone)]
struct ActiveDraw {
    handle: DrawHandle,
    kind: DrawKind,
    clicked: Vec<Coordinate>,
    floating: Option<Coordinate>,
}

impl ActiveDraw {
    const fn min_vertices(&self) -> usize {
        match self.kind {
            DrawKind::LineString => 2,
            DrawKind::Polygon => 3,
        }
    }

    fn geometry(&self, with_floating: bool) -> Geometry {
        let mut coords = self.clicked.clone();
        if with_floating && let Some(f) = self.floating {
            coords.push(f);
        }
        match self.kind {
            DrawKind::LineString => Geometry::LineString(coords),
            DrawKind::Polygon => {
                if let Some(first) = coords.first().copied() {
                    coords.push(first);
                }
                Geometry::Polygon(vec![coords])
            }
        }
    }
}

/// Map surface backed by the egui canvas.
///
/// Pointer input feeds the active draw; resulting geometry events queue up
/// until the app hands them to the session one by one.
#[derive(Debug, Default)]
pub struct CanvasSurface {
    next_handle: u64,
    active: Option<ActiveDraw>,
    vector_layer: FeatureStore,
    events: Vec<GeometryEvent>,
}

impl CanvasSurface {
    /// The editable vector layer holding finished features.
    pub const fn vector_layer(&self) -> &FeatureStore {
        &self.vector_layer
    }

    pub const fn is_collecting(&self) -> bool {
        self.active.is_some()
    }

    /// The in-progress sketch including the vertex following the pointer.
    pub fn sketch(&self) -> Option<(DrawKind, Geometry)> {
        self.active.as_ref().map(|a| (a.kind, a.geometry(true)))
    }

    pub fn take_events(&mut self) -> Vec<GeometryEvent> {
        std::mem::take(&mut self.events)
    }

    /// Place a vertex.
    pub fn click(&mut self, at: Coordinate) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.clicked.push(at);
        active.floating = None;
        let geometry = active.geometry(false);
        if active.clicked.len() == 1 {
            self.events
                .push(GeometryEvent::Started(active.handle, geometry.clone()));
        }
        self.events.push(GeometryEvent::Changed(active.handle, geometry));
    }

    /// Move the floating vertex; ignored until the first vertex is placed.
    pub fn pointer_moved(&mut self, at: Coordinate) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.clicked.is_empty() || active.floating == Some(at) {
            return;
        }
        active.floating = Some(at);
        self.events
            .push(GeometryEvent::Changed(active.handle, active.geometry(true)));
    }

    /// Complete the sketch if it has enough vertices.
    pub fn finish(&mut self) -> bool {
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        if active.clicked.len() < active.min_vertices() {
            return false;
        }
        let geometry = active.geometry(false);
        let handle = active.handle;
        self.events.push(GeometryEvent::Changed(handle, geometry.clone()));
        self.events.push(GeometryEvent::Finished(handle, geometry));
        self.active = None;
        true
    }
}

impl MapSurface for CanvasSurface {
    fn begin_interactive_draw(&mut self, kind: DrawKind) -> DrawHandle {
        self.next_handle += 1;
        let handle = DrawHandle(self.next_handle);
        self.active = Some(ActiveDraw {
            handle,
            kind,
            clicked: Vec::new(),
            floating: None,
        });
        handle
    }

    fn cancel_interactive_draw(&mut self, handle: DrawHandle) {
        if self.active.as_ref().is_some_and(|a| a.handle == handle) {
            self.active = None;
        }
        self.events.retain(|ev| ev.handle() != handle);
        debug!(handle = handle.0, "canvas draw abandoned");
    }

    fn add_feature(&mut self, geometry: Geometry) {
        self.vector_layer.features.push(geometry);
    }

    fn clear_features(&mut self) {
        self.vector_layer.features.clear();
    }
}
