use super::WaymarkApp;
use crate::export::waypoints_as_text;
use arboard::{Clipboard, Error as ClipboardError};

impl WaymarkApp {
    pub(crate) fn copy_waypoints_to_clipboard(&mut self) {
        let waypoints = self.editor.waypoints();
        if waypoints.is_empty() {
            self.set_status("Nothing to copy.");
            return;
        }
        let text = waypoints_as_text(waypoints);
        let count = waypoints.len();
        match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => self.set_status(format!("Copied {count} waypoints.")),
            Err(err) => self.set_status(format_clipboard_error(err)),
        }
    }
}

fn format_clipboard_error(err: ClipboardError) -> String {
    match err {
        ClipboardError::ClipboardNotSupported => {
            "Copy failed: clipboard access is not supported in this environment.".to_string()
        }
        ClipboardError::ClipboardOccupied => {
            "Copy failed: clipboard is busy; try again in a moment.".to_string()
        }
        ClipboardError::Unknown { description } => {
            format!("Copy failed: {description}")
        }
        _ => {
            format!("Copy failed: {err}")
        }
    }
}
