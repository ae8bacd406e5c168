//! Error types for the comparison pipeline.
//!
//! Errors from each stage chain through with the list or file they
//! concern: Comparison → Stage → Detail.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ConfigError;
use crate::markers::MarkerError;
use crate::reconcile::{ListSide, ReconcileError};
use crate::timecode::TimecodeError;

/// Any failure while comparing two cuts or writing the result.
#[derive(Error, Debug)]
pub enum LocatoratorError {
    /// One of the marker lists could not be loaded.
    #[error("Failed to load the {side} marker list: {source}")]
    Load {
        side: ListSide,
        #[source]
        source: MarkerError,
    },

    /// The lists could not be reconciled.
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    /// Configured frame rate is unusable.
    #[error("Invalid frame rate in settings: {0}")]
    FrameRate(#[from] TimecodeError),

    /// Configured shot id pattern does not compile.
    #[error("Invalid shot ID pattern: {0}")]
    ShotIdPattern(#[from] regex::Error),

    /// The change list could not be written.
    #[error("Failed to write change list to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Settings could not be loaded or saved.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LocatoratorError {
    /// Create a load error for one side.
    pub fn load(side: ListSide, source: MarkerError) -> Self {
        Self::Load { side, source }
    }

    /// Create a write error.
    pub fn write(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for comparison operations.
pub type LocatoratorResult<T> = Result<T, LocatoratorError>;
