//! Tab-delimited marker line parsing and formatting.
//!
//! Two layouts have been exported over the years:
//!
//! ```text
//! Legacy   (6): name  start  track  color         comment  duration
//! Extended (8): name  start  track  legacy_color  comment  duration  user  color
//! ```
//!
//! In the extended layout the trailing color is authoritative; the fourth
//! field only holds a legacy-safe stand-in and is read when the trailing
//! one is blank.

use super::error::{FieldError, MarkerError, MarkerResult};
use super::types::{parse_duration, Marker, MarkerColor};
use crate::timecode::{FrameRate, Timecode};

/// A known marker line layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineLayout {
    /// Eight fields with user and extended color.
    Extended,
    /// Six fields, legacy colors only.
    Legacy,
}

impl LineLayout {
    /// Layouts in the order they are tried.
    pub const ALL: [LineLayout; 2] = [LineLayout::Extended, LineLayout::Legacy];

    /// Number of tab-separated fields.
    pub fn field_count(&self) -> usize {
        match self {
            Self::Extended => 8,
            Self::Legacy => 6,
        }
    }

    /// Whether the split fields have this layout's shape.
    fn matches(&self, fields: &[&str]) -> bool {
        fields.len() == self.field_count() && fields[1].contains([':', ';'])
    }

    /// First layout whose shape matches.
    pub fn detect(fields: &[&str]) -> Option<Self> {
        Self::ALL.into_iter().find(|layout| layout.matches(fields))
    }
}

/// Parse one marker line.
///
/// `line_number` is 1-based and only used for the error.
pub fn parse_marker_line(line: &str, line_number: usize, rate: FrameRate) -> MarkerResult<Marker> {
    parse_fields(line, rate).map_err(|source| MarkerError::format(line_number, source))
}

fn parse_fields(line: &str, rate: FrameRate) -> Result<Marker, FieldError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = line.split('\t').collect();
    let layout = LineLayout::detect(&fields).ok_or(FieldError::UnknownLayout(fields.len()))?;

    let start = Timecode::parse(fields[1], rate)?;
    let duration = parse_duration(fields[5])?;

    let (color, user) = match layout {
        LineLayout::Legacy => (fields[3].parse::<MarkerColor>()?, ""),
        LineLayout::Extended => {
            let color_field = if fields[7].trim().is_empty() {
                fields[3]
            } else {
                fields[7]
            };
            (color_field.parse::<MarkerColor>()?, fields[6])
        }
    };

    Marker::new(fields[0], start, fields[2], color, fields[4])
        .with_duration(duration)
        .map(|marker| marker.with_user(user))
}

/// Format a marker as one line (no trailing newline).
pub fn format_marker_line(marker: &Marker, layout: LineLayout) -> String {
    let start = marker.start().to_string();
    let duration = marker.duration().to_string();
    let legacy_color = marker.color().legacy_slot();

    let mut fields = vec![
        marker.name(),
        start.as_str(),
        marker.track(),
        legacy_color.name(),
        marker.comment(),
        duration.as_str(),
    ];
    if layout == LineLayout::Extended {
        fields.push(marker.user());
        fields.push(marker.color().name());
    }
    fields.join("\t")
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_marker_line(self, LineLayout::Extended))
    }
}
