//! Change lists as re-importable marker lists.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::markers::{format_marker_line, LineLayout, Marker, MarkerColor, DEFAULT_MARKER_NAME};
use crate::reconcile::{ChangeKind, ChangeReport};

/// Tracks offered for exported markers.
pub const EXPORT_TRACK_OPTIONS: [&str; 9] = ["TC1", "V1", "V2", "V3", "V4", "V5", "V6", "V7", "V8"];

/// Name, track and color stamped on every exported marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTemplate {
    /// Marker name.
    pub name: String,
    /// Marker track.
    pub track: String,
    /// Marker color.
    pub color: MarkerColor,
}

impl Default for ExportTemplate {
    fn default() -> Self {
        Self {
            name: DEFAULT_MARKER_NAME.to_string(),
            track: EXPORT_TRACK_OPTIONS[0].to_string(),
            color: MarkerColor::White,
        }
    }
}

/// Turn reports of the included kinds into one-frame markers.
///
/// Added and changed shots are placed at their new position, deleted and
/// unchanged shots at their old one. Report order is preserved.
pub fn render_change_list(
    reports: &[ChangeReport],
    template: &ExportTemplate,
    include: &[ChangeKind],
) -> Vec<Marker> {
    reports
        .iter()
        .filter(|report| include.contains(&report.kind()))
        .map(|report| {
            let (comment, position) = match report {
                ChangeReport::Added { new } => {
                    (format!("Shot added: {}", new.comment()), new.start())
                }
                ChangeReport::Changed {
                    old,
                    new,
                    relative_offset,
                } => (
                    format!(
                        "Cut change near {} ({})",
                        old.comment(),
                        relative_offset.to_signed_string()
                    ),
                    new.start(),
                ),
                ChangeReport::Deleted { old } => (
                    format!("Shot removed since last cut: {}", old.comment()),
                    old.start(),
                ),
                ChangeReport::Unchanged { old, .. } => (
                    format!("Shot unchanged since last cut: {}", old.comment()),
                    old.start(),
                ),
            };
            Marker::new(
                &template.name,
                position,
                &template.track,
                template.color,
                &comment,
            )
        })
        .collect()
}

/// Write markers in the extended layout, one per line.
pub fn write_change_list<W: Write>(markers: &[Marker], writer: &mut W) -> io::Result<()> {
    for marker in markers {
        writeln!(writer, "{}", format_marker_line(marker, LineLayout::Extended))?;
    }
    Ok(())
}

/// Write markers to a file, replacing it.
pub fn write_change_list_file(markers: &[Marker], path: &Path) -> io::Result<()> {
    let mut content = Vec::new();
    write_change_list(markers, &mut content)?;
    fs::write(path, content)?;
    tracing::info!("Wrote {} change markers to {}", markers.len(), path.display());
    Ok(())
}
