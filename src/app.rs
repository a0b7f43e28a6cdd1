//! Main egui/eframe application state and UI orchestration.

use crate::config::AppConfig;
use crate::export::{self, ExportFormat, ExportPayload};
use crate::session::{DrawKind, InsertPosition, SessionError, WaypointEditor};
use canvas::{CanvasSurface, MapView};
use egui::{Context, Key};
use egui_file_dialog::{DialogState, FileDialog};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

mod canvas;
mod clipboard;
mod ui;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug)]
enum NativeDialog {
    SaveExport {
        dialog: FileDialog,
        payload: ExportPayload,
        format: ExportFormat,
    },
}

struct UiState {
    last_status: Option<String>,
}

/// Top-level application state for the Waymark UI.
pub struct WaymarkApp {
    editor: WaypointEditor,
    surface: CanvasSurface,
    view: MapView,
    config: AppConfig,
    ui: UiState,
    active_dialog: Option<NativeDialog>,
    last_export_dir: Option<PathBuf>,
}

impl Default for WaymarkApp {
    fn default() -> Self {
        Self::with_config(AppConfig::load())
    }
}

impl WaymarkApp {
    pub fn new(_ctx: &Context) -> Self {
        Self::default()
    }

    fn with_config(config: AppConfig) -> Self {
        let view = MapView::from_initial(&config.initial_view);
        Self {
            editor: WaypointEditor::new(),
            surface: CanvasSurface::default(),
            view,
            config,
            ui: UiState {
                last_status: None,
            },
            active_dialog: None,
            last_export_dir: None,
        }
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.ui.last_status = Some(msg.into());
    }

    pub(crate) fn start_draw(&mut self, kind: DrawKind) {
        match self.editor.start_draw(&mut self.surface, kind) {
            Ok(()) => self.set_status(format!(
                "Drawing {}: click to add vertices, double-click or Enter to finish, Esc to cancel.",
                kind.label()
            )),
            // Another drawing is active; the request is dropped silently.
            Err(err) => debug!(%err, "start draw ignored"),
        }
    }

    pub(crate) fn insert_polygon(&mut self, at_index: usize, position: InsertPosition) {
        match self
            .editor
            .insert_polygon(&mut self.surface, at_index, position)
        {
            Ok(()) => self.set_status("Draw the polygon to insert; double-click or Enter to finish."),
            Err(SessionError::DrawInProgress) => debug!("insert polygon ignored while drawing"),
            Err(err) => self.set_status(format!("Insert failed: {err}")),
        }
    }

    pub(crate) fn cancel_draw(&mut self) {
        if self.editor.cancel_draw(&mut self.surface) {
            self.set_status("Drawing canceled.");
        }
    }

    pub(crate) fn clear_drawing(&mut self) {
        self.editor.clear(&mut self.surface);
        self.set_status("Cleared.");
    }

    pub(crate) fn finish_draw(&mut self) {
        if self.surface.finish() {
            self.dispatch_surface_events();
        }
    }

    /// Hand queued map events to the session, oldest first.
    pub(crate) fn dispatch_surface_events(&mut self) {
        for event in self.surface.take_events() {
            if let Err(err) = self.editor.handle_event(&mut self.surface, event) {
                warn!(%err, "map event not applied");
            }
        }
    }

    fn remember_export_dir_from_path(&mut self, path: &Path) {
        if let Some(dir) = path.parent() {
            self.last_export_dir = Some(dir.to_path_buf());
        }
    }

    fn build_export_payload(&self) -> Result<ExportPayload, &'static str> {
        ExportPayload::from_waypoints(self.editor.waypoints())
            .ok_or("Nothing to export. Draw a line or polygon first.")
    }

    fn handle_hotkeys(&mut self, ctx: &Context) {
        // Ignored while typing in text fields
        if !ctx.wants_keyboard_input() {
            // Ctrl/Cmd + B: toggle side panel
            if ctx.input(|i| i.key_pressed(Key::B) && i.modifiers.command) {
                self.editor.toggle_modal();
            }
            if ctx.input(|i| i.key_pressed(Key::L) && i.modifiers.command) {
                self.start_draw(DrawKind::LineString);
            }
            if ctx.input(|i| i.key_pressed(Key::G) && i.modifiers.command) {
                self.start_draw(DrawKind::Polygon);
            }
            // Ctrl/Cmd + Shift + D: clear everything
            if ctx.input(|i| i.key_pressed(Key::D) && i.modifiers.command && i.modifiers.shift) {
                self.clear_drawing();
            }
            if self.active_dialog.is_none()
                && ctx.input(|i| i.key_pressed(Key::C) && i.modifiers.command && i.modifiers.shift)
            {
                self.start_export(ExportFormat::Csv);
            }
            if self.active_dialog.is_none()
                && ctx.input(|i| i.key_pressed(Key::J) && i.modifiers.command && i.modifiers.shift)
            {
                self.start_export(ExportFormat::Json);
            }
            if self.active_dialog.is_none()
                && ctx.input(|i| i.key_pressed(Key::E) && i.modifiers.command && i.modifiers.shift)
            {
                self.start_export(ExportFormat::Xlsx);
            }
            if ctx.input(|i| i.key_pressed(Key::Enter)) {
                self.finish_draw();
            }
        }

        // Esc: abandon the active drawing
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.cancel_draw();
        }
    }

    fn poll_active_dialog(&mut self, ctx: &Context) {
        let mut close_dialog = false;
        let mut picked_export_path: Option<PathBuf> = None;

        if let Some(NativeDialog::SaveExport {
            dialog,
            payload,
            format,
        }) = self.active_dialog.as_mut()
        {
            dialog.update(ctx);
            if let Some(path) = dialog.take_picked() {
                let format = *format;
                match export::export(&path, format, payload) {
                    Ok(()) => {
                        info!(path = %path.display(), format = format.label(), "exported");
                        self.ui.last_status = Some(format!("{} exported.", format.label()));
                    }
                    Err(e) => {
                        warn!("export to {} failed: {e:#}", path.display());
                        self.ui.last_status =
                            Some(format!("{} export failed: {e:#}", format.label()));
                    }
                }
                picked_export_path = Some(path);
                close_dialog = true;
            } else {
                match dialog.state() {
                    DialogState::Cancelled => {
                        self.ui.last_status = Some("Export canceled.".to_string());
                        close_dialog = true;
                    }
                    DialogState::Closed => close_dialog = true,
                    _ => {}
                }
            }
        }

        if let Some(path) = picked_export_path {
            self.remember_export_dir_from_path(&path);
        }

        if close_dialog {
            self.active_dialog = None;
        }
    }
}

impl eframe::App for WaymarkApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_hotkeys(ctx);

        egui::TopBottomPanel::top("top").show(ctx, |ui| self.ui_top(ui));
        let details_visible = self.editor.modal_open();
        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(340.0)
            .show_animated(ctx, details_visible, |ui| self.ui_details(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.ui_status_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.ui_central_map(ui));

        self.poll_active_dialog(ctx);
    }

    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}
