//! "Generated data" export of the waypoint list.

use crate::format::{COORD_DECIMALS, format_component, format_coordinate};
use crate::geodesy::leg_distances;
use crate::types::Waypoint;
use anyhow::Context as _;
use chrono::{SecondsFormat, Utc};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use serde::Serialize;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xlsx => "xlsx",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
            Self::Xlsx => "Excel",
        }
    }
}

/// One exported row.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRow {
    pub label: String,
    pub kind: &'static str,
    pub x: f64,
    pub y: f64,
    pub coordinates: String,
    pub distance_m: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ExportPayload {
    pub rows: Vec<ExportRow>,
}

impl ExportPayload {
    /// Rows for `waypoints` in sequence order, with leg distances attached.
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Option<Self> {
        if waypoints.is_empty() {
            return None;
        }
        let rows = waypoints
            .iter()
            .zip(leg_distances(waypoints))
            .map(|(wp, distance_m)| ExportRow {
                label: wp.label.clone(),
                kind: wp.kind.label(),
                x: wp.coordinate.x,
                y: wp.coordinate.y,
                coordinates: format_coordinate(wp.coordinate),
                distance_m,
            })
            .collect();
        Some(Self { rows })
    }

    pub fn total_distance_m(&self) -> f64 {
        self.rows.iter().filter_map(|r| r.distance_m).sum()
    }
}

const HEADERS: [&str; 5] = ["waypoint", "kind", "x", "y", "distance_m"];

pub fn export(path: &Path, format: ExportFormat, payload: &ExportPayload) -> anyhow::Result<()> {
    match format {
        ExportFormat::Csv => export_to_csv(path, payload),
        ExportFormat::Json => export_to_json(path, payload),
        ExportFormat::Xlsx => export_to_xlsx(path, payload)
            .with_context(|| format!("Failed to write {}", path.display())),
    }
}

pub fn export_to_csv(path: &Path, payload: &ExportPayload) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    wtr.write_record(HEADERS)?;
    for row in &payload.rows {
        let distance = row
            .distance_m
            .map(|d| format!("{d:.3}"))
            .unwrap_or_default();
        let x = format_component(row.x);
        let y = format_component(row.y);
        wtr.write_record([
            row.label.as_str(),
            row.kind,
            x.as_str(),
            y.as_str(),
            distance.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    generated_at: String,
    crs: &'static str,
    total_distance_m: f64,
    waypoints: &'a [ExportRow],
}

pub fn export_to_json(path: &Path, payload: &ExportPayload) -> anyhow::Result<()> {
    let doc = JsonDocument {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        crs: "EPSG:4326",
        total_distance_m: payload.total_distance_m(),
        waypoints: &payload.rows,
    };
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &doc)?;
    Ok(())
}

pub fn export_to_xlsx(path: &Path, payload: &ExportPayload) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, header) in (0u16..).zip(HEADERS) {
        worksheet.write_string(0, col, header)?;
    }

    // Same precision as the on-screen list.
    let coord_format = Format::new().set_num_format(format!("0.{}", "0".repeat(COORD_DECIMALS)));
    let distance_format = Format::new().set_num_format("0.000");

    for (row_idx, row) in (1u32..).zip(&payload.rows) {
        worksheet.write_string(row_idx, 0, &row.label)?;
        worksheet.write_string(row_idx, 1, row.kind)?;
        worksheet.write_number_with_format(row_idx, 2, row.x, &coord_format)?;
        worksheet.write_number_with_format(row_idx, 3, row.y, &coord_format)?;
        if let Some(d) = row.distance_m {
            worksheet.write_number_with_format(row_idx, 4, d, &distance_format)?;
        }
    }

    workbook.save(path)
}

/// Plain-text listing used for the clipboard.
pub fn waypoints_as_text(waypoints: &[Waypoint]) -> String {
    waypoints
        .iter()
        .map(|wp| format!("{}: {}", wp.label, wp.formatted_coordinate()))
        .collect::<Vec<_>>()
        .join("\n")
}
