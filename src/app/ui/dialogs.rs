use super::super::{NativeDialog, WaymarkApp};
use crate::export::ExportFormat;
use egui_file_dialog::FileDialog;
use std::path::Path;

impl WaymarkApp {
    pub(crate) fn start_export(&mut self, format: ExportFormat) {
        match self.build_export_payload() {
            Ok(payload) => {
                let title = format!("Export {}", format.label());
                let default_name = format!("waypoints.{}", format.extension());
                let mut dialog = Self::make_save_dialog(
                    &title,
                    &default_name,
                    &[format.extension()],
                    self.last_export_dir.as_deref(),
                );
                dialog.save_file();
                self.active_dialog = Some(NativeDialog::SaveExport {
                    dialog,
                    payload,
                    format,
                });
            }
            Err(msg) => self.set_status(msg),
        }
    }

    pub(crate) fn make_save_dialog(
        title: &str,
        default_name: &str,
        extensions: &[&str],
        initial_dir: Option<&Path>,
    ) -> FileDialog {
        let mut dialog = FileDialog::new()
            .title(title)
            .default_file_name(default_name);
        let mut first_label: Option<String> = None;
        for ext in extensions {
            let label = format!("*.{ext}");
            if first_label.is_none() {
                first_label = Some(label.clone());
            }
            dialog = dialog.add_save_extension(&label, ext);
        }
        if let Some(label) = first_label.as_deref() {
            dialog = dialog.default_save_extension(label);
        }
        if let Some(dir) = initial_dir {
            dialog = dialog.initial_directory(dir.to_path_buf());
        }
        dialog
    }
}
