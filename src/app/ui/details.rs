//! "Drawing details" panel: the live waypoint list and its row menus.

use super::super::WaymarkApp;
use super::icons;
use crate::geodesy::{format_distance, leg_distances, total_length_m};
use crate::session::InsertPosition;
use crate::types::WaypointKind;
use egui::{Color32, RichText};

enum RowAction {
    ToggleMenu(usize),
    Insert(usize, InsertPosition),
}

impl WaymarkApp {
    pub(crate) fn ui_details(&mut self, ui: &mut egui::Ui) {
        let snapshot = self.editor.snapshot();
        ui.heading("Drawing details");
        let vertices = snapshot
            .waypoints
            .iter()
            .filter(|wp| wp.kind == WaypointKind::Vertex)
            .count();
        let connectors = snapshot.waypoints.len() - vertices;
        ui.label(
            RichText::new(format!(
                "{vertices} vertices, {connectors} polygons, {}",
                format_distance(total_length_m(&snapshot.waypoints))
            ))
            .small()
            .color(Color32::from_gray(160)),
        );
        if snapshot.insertion_pending {
            ui.label(
                RichText::new("Draw the polygon to insert on the map…")
                    .small()
                    .italics(),
            );
        }
        ui.separator();

        let legs = leg_distances(&snapshot.waypoints);
        let mut action: Option<RowAction> = None;
        let list_height = (ui.available_height() - 48.0).max(80.0);
        egui::ScrollArea::vertical()
            .max_height(list_height)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for (idx, (wp, leg)) in snapshot.waypoints.iter().zip(&legs).enumerate() {
                    ui.horizontal(|ui| {
                        let label = match wp.kind {
                            WaypointKind::Vertex => RichText::new(format!("{}:", wp.label)),
                            WaypointKind::PolygonConnector => {
                                RichText::new(format!("{} {}:", icons::ICON_CONNECTOR, wp.label))
                                    .color(self.config.connectors.color32())
                            }
                        };
                        ui.label(label);
                        ui.label(RichText::new(wp.formatted_coordinate()).strong().monospace());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let open = snapshot.active_menu_index == Some(idx);
                            if ui
                                .add_enabled(
                                    !snapshot.mode.is_drawing(),
                                    egui::Button::new(icons::ICON_ROW_MENU).selected(open),
                                )
                                .on_hover_text("Insert a polygon next to this waypoint")
                                .clicked()
                            {
                                action = Some(RowAction::ToggleMenu(idx));
                            }
                        });
                    });
                    if let Some(d) = leg {
                        ui.label(
                            RichText::new(format!("  +{}", format_distance(*d)))
                                .small()
                                .color(Color32::from_gray(150)),
                        );
                    }
                    if snapshot.active_menu_index == Some(idx) {
                        ui.indent(("row_menu", idx), |ui| {
                            if ui.button("Insert Polygon Before").clicked() {
                                action = Some(RowAction::Insert(idx, InsertPosition::Before));
                            }
                            if ui.button("Insert Polygon After").clicked() {
                                action = Some(RowAction::Insert(idx, InsertPosition::After));
                            }
                        });
                    }
                    ui.separator();
                }
            });

        match action {
            Some(RowAction::ToggleMenu(idx)) => self.editor.toggle_menu(idx),
            Some(RowAction::Insert(idx, position)) => self.insert_polygon(idx, position),
            None => {}
        }

        ui.add_space(6.0);
        let has_waypoints = !snapshot.waypoints.is_empty();
        self.ui_export_menu(ui, has_waypoints);
    }
}
