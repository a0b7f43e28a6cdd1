//! Unicode UI icon constants.
//!
//! Uses a BMP-only "safe" subset for broad font coverage (no emoji fonts needed).

pub const ICON_LINE: &str = "╱";
pub const ICON_POLYGON: &str = "⬠";
pub const ICON_CLEAR: &str = "✖";
pub const ICON_CANCEL: &str = "⎋";
pub const ICON_FINISH: &str = "✔";
pub const ICON_SIDE_TOGGLE: &str = "⟷";
pub const ICON_ROW_MENU: &str = "⋮";
pub const ICON_EXPORT: &str = "⇩";
pub const ICON_COPY: &str = "⧉";
pub const ICON_CONNECTOR: &str = "◆";
