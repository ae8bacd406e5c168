//! Whole-file marker list loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{MarkerError, MarkerResult};
use super::filter::MarkerFilter;
use super::parser::parse_marker_line;
use super::types::Marker;
use super::xml::parse_marker_xml;
use crate::timecode::FrameRate;

/// On-disk marker list format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerListFormat {
    /// Tab-delimited text, one marker per line.
    #[default]
    Text,
    /// Marker interchange XML.
    Xml,
}

impl MarkerListFormat {
    /// Detect format from file extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "txt" => Some(Self::Text),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }

    /// Get the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Xml => "xml",
        }
    }
}

/// Reads marker lists into ordered marker sequences.
///
/// ```no_run
/// use locatorator_core::markers::{MarkerListLoader, ShotIdPattern};
/// use locatorator_core::timecode::FrameRate;
///
/// let loader = MarkerListLoader::new(FrameRate::FILM).with_filter(ShotIdPattern::default());
/// let markers = loader.load("reel1_v3.txt").unwrap();
/// ```
pub struct MarkerListLoader {
    rate: FrameRate,
    format: Option<MarkerListFormat>,
    filter: Option<Box<dyn MarkerFilter>>,
}

impl MarkerListLoader {
    /// Create a loader that detects format from the file extension.
    pub fn new(rate: FrameRate) -> Self {
        Self {
            rate,
            format: None,
            filter: None,
        }
    }

    /// Force a format instead of detecting it.
    pub fn with_format(mut self, format: MarkerListFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Keep only markers the filter accepts.
    pub fn with_filter(mut self, filter: impl MarkerFilter + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Frame rate timecodes are read at.
    pub fn rate(&self) -> FrameRate {
        self.rate
    }

    /// Load a marker list from disk.
    ///
    /// Unknown extensions are read as delimited text.
    pub fn load(&self, path: impl AsRef<Path>) -> MarkerResult<Vec<Marker>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| MarkerError::read(path, e))?;

        let format = self
            .format
            .or_else(|| MarkerListFormat::from_extension(path))
            .unwrap_or_default();

        let markers = self.parse(&content, format)?;
        tracing::debug!(
            "Loaded {} markers from {} as {:?}",
            markers.len(),
            path.display(),
            format
        );
        Ok(markers)
    }

    /// Parse already-read content in the given format.
    pub fn parse(&self, content: &str, format: MarkerListFormat) -> MarkerResult<Vec<Marker>> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let parsed = match format {
            MarkerListFormat::Text => self.parse_text(content)?,
            MarkerListFormat::Xml => parse_marker_xml(content, self.rate)?,
        };

        let total = parsed.len();
        let markers: Vec<Marker> = match &self.filter {
            Some(filter) => parsed.into_iter().filter(|m| filter.accepts(m)).collect(),
            None => parsed,
        };

        if markers.len() < total {
            tracing::debug!("Filter dropped {} of {} markers", total - markers.len(), total);
        }
        Ok(markers)
    }

    /// One marker per line; a single final newline does not start a record.
    fn parse_text(&self, content: &str) -> MarkerResult<Vec<Marker>> {
        let body = content
            .strip_suffix('\n')
            .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
            .unwrap_or(content);
        if body.is_empty() {
            return Ok(Vec::new());
        }

        body.split('\n')
            .enumerate()
            .map(|(idx, line)| parse_marker_line(line, idx + 1, self.rate))
            .collect()
    }
}
