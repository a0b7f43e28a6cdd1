use std::fs;
use std::path::PathBuf;

use directories::{BaseDirs, ProjectDirs};
use egui::{Color32, Stroke};
use serde::Deserialize;
use tracing::{debug, warn};

const CONFIG_FILE_NAME: &str = "waymark.toml";

pub const MIN_ZOOM: f32 = 0.0;
pub const MAX_ZOOM: f32 = 20.0;

fn alpha_to_u8(alpha: f32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: [u8; 3],
    pub alpha: f32,
    pub thickness: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: [30, 60, 160],
            alpha: 1.0,
            thickness: 2.0,
        }
    }
}

impl StrokeStyle {
    pub fn color32(&self) -> Color32 {
        Color32::from_rgba_unmultiplied(
            self.color[0],
            self.color[1],
            self.color[2],
            alpha_to_u8(self.alpha),
        )
    }

    pub fn stroke(&self) -> Stroke {
        Stroke {
            width: self.thickness.max(0.1),
            color: self.color32(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PointStyle {
    pub color: [u8; 3],
    pub alpha: f32,
    pub radius: f32,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: [30, 60, 160],
            alpha: 1.0,
            radius: 3.5,
        }
    }
}

impl PointStyle {
    pub fn color32(&self) -> Color32 {
        Color32::from_rgba_unmultiplied(
            self.color[0],
            self.color[1],
            self.color[2],
            alpha_to_u8(self.alpha),
        )
    }

    pub const fn radius(&self) -> f32 {
        self.radius.max(0.1)
    }
}

/// Where the map opens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InitialView {
    /// `[lon, lat]` in degrees.
    pub center: [f64; 2],
    pub zoom: f32,
}

impl Default for InitialView {
    fn default() -> Self {
        Self {
            center: [78.9629, 20.5937],
            zoom: 5.0,
        }
    }
}

impl InitialView {
    pub fn sanitized(&self) -> Self {
        let [lon, lat] = self.center;
        let lon = if lon.is_finite() { lon.clamp(-180.0, 180.0) } else { 0.0 };
        let lat = if lat.is_finite() { lat.clamp(-90.0, 90.0) } else { 0.0 };
        let zoom = if self.zoom.is_finite() {
            self.zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            Self::default().zoom
        };
        Self {
            center: [lon, lat],
            zoom,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub initial_view: InitialView,
    pub line: StrokeStyle,
    pub polygon: StrokeStyle,
    pub sketch: StrokeStyle,
    pub vertices: PointStyle,
    pub connectors: PointStyle,
    pub pan_speed: f32,
    pub graticule: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_view: InitialView::default(),
            line: StrokeStyle::default(),
            polygon: StrokeStyle::default(),
            sketch: StrokeStyle {
                color: [60, 140, 230],
                alpha: 0.9,
                thickness: 1.6,
            },
            vertices: PointStyle::default(),
            connectors: PointStyle {
                color: [200, 110, 30],
                alpha: 1.0,
                radius: 5.0,
            },
            pan_speed: 1.0,
            graticule: true,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            if let Ok(contents) = fs::read_to_string(&path) {
                match Self::parse(&contents) {
                    Ok(cfg) => {
                        debug!(path = %path.display(), "config loaded");
                        return cfg;
                    }
                    Err(err) => {
                        warn!("Failed to parse config {}: {err}", path.display());
                    }
                }
            }
        }
        Self::default()
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Self>(contents)
    }

    pub const fn pan_speed_factor(&self) -> f32 {
        self.pan_speed.clamp(0.01, 50.0)
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(exe_path) = std::env::current_exe()
            && let Some(dir) = exe_path.parent()
        {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }

        if let Some(proj_dirs) = ProjectDirs::from("dev", "Waymark", "Waymark") {
            paths.push(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
        }

        if let Some(base_dirs) = BaseDirs::new() {
            paths.push(base_dirs.config_dir().join("waymark").join(CONFIG_FILE_NAME));
        }

        paths
    }
}
