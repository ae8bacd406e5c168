//! Marker error types.

use std::path::PathBuf;

use crate::timecode::TimecodeError;

/// Errors that can occur while loading a marker list.
#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    /// Failed to read the marker list from disk.
    #[error("Failed to read marker list '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A line or element could not be turned into a marker.
    #[error("Cannot parse marker on line {line}: {source}")]
    Format { line: usize, source: FieldError },

    /// The interchange document is not well-formed XML.
    #[error("Malformed marker XML: {0}")]
    MalformedXml(String),
}

/// Why a single marker record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// No known line layout has this shape.
    #[error("unrecognized marker layout ({0} tab-separated fields)")]
    UnknownLayout(usize),

    /// Color token outside the recognized set.
    #[error("unrecognized marker color '{0}'")]
    UnknownColor(String),

    /// Duration is not a positive whole number of frames.
    #[error("duration '{0}' is not a positive frame count")]
    InvalidDuration(String),

    /// Interchange element without a timecode property.
    #[error("marker has no timecode")]
    MissingTimecode,

    /// Start timecode failed to parse.
    #[error(transparent)]
    Timecode(#[from] TimecodeError),
}

/// Type alias for marker operation results.
pub type MarkerResult<T> = Result<T, MarkerError>;

impl MarkerError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a format error for a 1-based line number.
    pub fn format(line: usize, source: FieldError) -> Self {
        Self::Format { line, source }
    }

    /// The 1-based line number for format errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Format { line, .. } => Some(*line),
            _ => None,
        }
    }
}
