use super::super::WaymarkApp;
use crate::types::{Coordinate, Geometry, WaypointKind};
use egui::{
    Align2, Color32, CornerRadius, FontId, PointerButton, Pos2, Rect, Sense, Shape, Stroke, vec2,
};

/// Upper bound on graticule lines per axis.
const MAX_GRID_LINES: usize = 200;
const ZOOM_SCROLL_DIVISOR: f32 = 200.0;

impl WaymarkApp {
    pub(crate) fn ui_central_map(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;

        self.handle_map_navigation(ui, &response);
        self.handle_map_drawing(&response);

        let bg = if ui.visuals().dark_mode {
            Color32::from_gray(32)
        } else {
            Color32::from_rgb(236, 240, 244)
        };
        painter.rect_filled(rect, CornerRadius::ZERO, bg);
        if self.config.graticule {
            self.paint_graticule(&painter, rect);
        }

        for geometry in self.surface.vector_layer().iter() {
            let stroke = match geometry {
                Geometry::Polygon(_) => self.config.polygon.stroke(),
                _ => self.config.line.stroke(),
            };
            self.paint_geometry(&painter, rect, geometry, stroke);
        }
        if let Some((_, sketch)) = self.surface.sketch() {
            self.paint_geometry(&painter, rect, &sketch, self.config.sketch.stroke());
        }
        self.paint_waypoints(&painter, rect);

        if self.editor.waypoints().is_empty() && !self.editor.is_drawing() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "Use Draw LineString or Draw Polygon to start sketching",
                FontId::proportional(15.0),
                ui.visuals().weak_text_color(),
            );
        }
    }

    fn handle_map_navigation(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let pan_drag = response.dragged_by(PointerButton::Secondary)
            || response.dragged_by(PointerButton::Middle)
            || (!self.surface.is_collecting() && response.dragged_by(PointerButton::Primary));
        if pan_drag {
            let delta = response.drag_delta() * self.config.pan_speed_factor();
            if delta.length_sq() > 0.0 {
                self.view.pan_by(delta);
            }
        }

        if let Some(hover) = response.hover_pos() {
            let scroll = ui.ctx().input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > f32::EPSILON {
                self.view
                    .zoom_about(response.rect, hover, scroll / ZOOM_SCROLL_DIVISOR);
            }
        }
    }

    fn handle_map_drawing(&mut self, response: &egui::Response) {
        let rect = response.rect;
        if self.surface.is_collecting()
            && let Some(pos) = response.hover_pos()
        {
            self.surface.pointer_moved(self.view.to_map(rect, pos));
        }

        if response.double_clicked() {
            self.finish_draw();
        } else if response.clicked() {
            if self.surface.is_collecting() {
                if let Some(pos) = response.interact_pointer_pos() {
                    self.surface.click(self.view.to_map(rect, pos));
                }
            } else {
                self.editor.close_menu();
            }
        }

        self.dispatch_surface_events();
    }

    fn paint_geometry(
        &self,
        painter: &egui::Painter,
        rect: Rect,
        geometry: &Geometry,
        stroke: Stroke,
    ) {
        let project = |coords: &[Coordinate]| -> Vec<Pos2> {
            coords.iter().map(|c| self.view.to_screen(rect, *c)).collect()
        };
        match geometry {
            Geometry::Point(c) => {
                let pos = self.view.to_screen(rect, *c);
                painter.circle_filled(pos, stroke.width * 2.0, stroke.color);
            }
            Geometry::LineString(coords) => {
                painter.add(Shape::line(project(coords), stroke));
            }
            Geometry::Polygon(rings) => {
                for ring in rings {
                    painter.add(Shape::line(project(ring), stroke));
                }
            }
        }
    }

    fn paint_waypoints(&self, painter: &egui::Painter, rect: Rect) {
        for wp in self.editor.waypoints() {
            let pos = self.view.to_screen(rect, wp.coordinate);
            if !rect.contains(pos) {
                continue;
            }
            let style = match wp.kind {
                WaypointKind::Vertex => &self.config.vertices,
                WaypointKind::PolygonConnector => &self.config.connectors,
            };
            let color = style.color32();
            painter.circle_filled(pos, style.radius(), color);
            painter.text(
                pos + vec2(style.radius() + 3.0, -style.radius() - 1.0),
                Align2::LEFT_BOTTOM,
                &wp.label,
                FontId::proportional(11.0),
                color,
            );
        }
    }

    fn paint_graticule(&self, painter: &egui::Painter, rect: Rect) {
        let step = self.view.graticule_step(90.0);
        let top_left = self.view.to_map(rect, rect.left_top());
        let bottom_right = self.view.to_map(rect, rect.right_bottom());
        let stroke = Stroke::new(0.5, Color32::from_gray(140).gamma_multiply(0.5));
        let label_color = Color32::from_gray(140);

        let lon_min = top_left.x.max(-180.0);
        let lon_max = bottom_right.x.min(180.0);
        let lat_min = bottom_right.y.max(-90.0);
        let lat_max = top_left.y.min(90.0);

        let mut lon = (lon_min / step).ceil() * step;
        let mut drawn = 0usize;
        while lon <= lon_max && drawn < MAX_GRID_LINES {
            let x = self.view.to_screen(rect, Coordinate::new(lon, 0.0)).x;
            painter.line_segment(
                [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
                stroke,
            );
            painter.text(
                Pos2::new(x + 2.0, rect.bottom() - 2.0),
                Align2::LEFT_BOTTOM,
                format!("{lon:.4}"),
                FontId::monospace(9.0),
                label_color,
            );
            lon += step;
            drawn += 1;
        }

        let mut lat = (lat_min / step).ceil() * step;
        drawn = 0;
        while lat <= lat_max && drawn < MAX_GRID_LINES {
            let y = self.view.to_screen(rect, Coordinate::new(0.0, lat)).y;
            painter.line_segment(
                [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
                stroke,
            );
            painter.text(
                Pos2::new(rect.left() + 2.0, y - 2.0),
                Align2::LEFT_BOTTOM,
                format!("{lat:.4}"),
                FontId::monospace(9.0),
                label_color,
            );
            lat += step;
            drawn += 1;
        }
    }
}
