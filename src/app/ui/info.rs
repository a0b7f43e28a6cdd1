use super::super::WaymarkApp;
use crate::geodesy::{format_distance, total_length_m};
use egui::{Color32, RichText};

impl WaymarkApp {
    pub(crate) fn ui_status_bar(&self, ui: &mut egui::Ui) {
        let waypoints = self.editor.waypoints();
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("Mode: {}", self.editor.mode().label()))
                    .small()
                    .color(Color32::from_gray(180)),
            );
            ui.separator();
            ui.label(
                RichText::new(format!(
                    "Waypoints: {}  Length: {}",
                    waypoints.len(),
                    format_distance(total_length_m(waypoints))
                ))
                .small()
                .color(Color32::from_gray(180)),
            );
            ui.separator();
            ui.label(
                RichText::new(format!(
                    "Features: {}  Zoom: {:.1}",
                    self.surface.vector_layer().len(),
                    self.view.zoom
                ))
                .small()
                .color(Color32::from_gray(180)),
            );
            if let Some(msg) = &self.ui.last_status {
                ui.separator();
                ui.label(
                    RichText::new(msg.as_str())
                        .small()
                        .color(Color32::from_gray(200)),
                );
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("v{}", super::super::APP_VERSION))
                        .small()
                        .color(Color32::from_gray(140)),
                );
            });
        });
    }
}
