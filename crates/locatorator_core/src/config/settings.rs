//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};

use crate::changelist::{ExportTemplate, EXPORT_TRACK_OPTIONS};
use crate::logging::LogLevel;
use crate::markers::{MarkerColor, MarkerListFormat, ShotIdPattern, DEFAULT_MARKER_NAME};
use crate::reconcile::ChangeKind;
use crate::timecode::{FrameRate, TimecodeError};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// How marker lists are read.
    #[serde(default)]
    pub import: ImportSettings,

    /// How change lists are written.
    #[serde(default)]
    pub export: ExportSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Marker list import options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSettings {
    /// Frames per second of the project.
    #[serde(default = "default_timebase")]
    pub timebase: u32,

    /// Whether timecodes count in drop frame.
    #[serde(default)]
    pub drop_frame: bool,

    /// Force a list format; detected from the file extension when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<MarkerListFormat>,

    /// Drop markers whose comment does not start with a shot id.
    #[serde(default = "default_true")]
    pub filter_shot_ids: bool,

    /// Regex a comment must match to count as a shot id.
    #[serde(default = "default_shot_id_pattern")]
    pub shot_id_pattern: String,

    /// Sort each list by start position before comparing.
    #[serde(default = "default_true")]
    pub sort_by_start: bool,
}

fn default_timebase() -> u32 {
    24
}

fn default_true() -> bool {
    true
}

fn default_shot_id_pattern() -> String {
    ShotIdPattern::DEFAULT_PATTERN.to_string()
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            timebase: default_timebase(),
            drop_frame: false,
            format: None,
            filter_shot_ids: true,
            shot_id_pattern: default_shot_id_pattern(),
            sort_by_start: true,
        }
    }
}

impl ImportSettings {
    /// Validated frame rate.
    pub fn frame_rate(&self) -> Result<FrameRate, TimecodeError> {
        FrameRate::new(self.timebase, self.drop_frame)
    }

    /// Compiled shot id pattern.
    pub fn shot_id_pattern(&self) -> Result<ShotIdPattern, regex::Error> {
        ShotIdPattern::new(&self.shot_id_pattern)
    }
}

/// Change list export options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Name given to every exported marker.
    #[serde(default = "default_marker_name")]
    pub marker_name: String,

    /// Track exported markers are placed on.
    #[serde(default = "default_marker_track")]
    pub marker_track: String,

    /// Color of exported markers.
    #[serde(default = "default_marker_color")]
    pub marker_color: MarkerColor,

    /// Change kinds written to the list.
    #[serde(default = "default_include")]
    pub include: Vec<ChangeKind>,
}

fn default_marker_name() -> String {
    DEFAULT_MARKER_NAME.to_string()
}

fn default_marker_track() -> String {
    EXPORT_TRACK_OPTIONS[0].to_string()
}

fn default_marker_color() -> MarkerColor {
    MarkerColor::White
}

fn default_include() -> Vec<ChangeKind> {
    ChangeKind::exported_by_default().to_vec()
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            marker_name: default_marker_name(),
            marker_track: default_marker_track(),
            marker_color: default_marker_color(),
            include: default_include(),
        }
    }
}

impl ExportSettings {
    /// Template stamped on exported markers.
    pub fn template(&self) -> ExportTemplate {
        ExportTemplate {
            name: self.marker_name.clone(),
            track: self.marker_track.clone(),
            color: self.marker_color,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is unset.
    #[serde(default)]
    pub level: LogLevel,
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Import,
    Export,
    Logging,
}

impl ConfigSection {
    /// Get all sections in file order.
    pub fn all() -> &'static [ConfigSection] {
        &[Self::Import, Self::Export, Self::Logging]
    }

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Import => "import",
            ConfigSection::Export => "export",
            ConfigSection::Logging => "logging",
        }
    }

    /// Comment written above the section.
    pub fn description(&self) -> &'static str {
        match self {
            ConfigSection::Import => "Marker list import",
            ConfigSection::Export => "Change list export",
            ConfigSection::Logging => "Logging configuration",
        }
    }
}
