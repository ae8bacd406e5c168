//! Marker lists.
//!
//! This module turns exported marker lists into ordered [`Marker`]
//! sequences.
//!
//! # Features
//!
//! - **Records**: Immutable, sanitized markers with a closed color set
//! - **Text lists**: Tab-delimited lines in the legacy (6 field) or
//!   extended (8 field) layout
//! - **XML lists**: The editor's marker interchange document
//! - **Filtering**: Optional inclusion filters such as [`ShotIdPattern`]
//!
//! # Usage
//!
//! ```no_run
//! use locatorator_core::markers::MarkerListLoader;
//! use locatorator_core::timecode::FrameRate;
//!
//! let loader = MarkerListLoader::new(FrameRate::FILM);
//! let markers = loader.load("reel1_v3.txt").unwrap();
//! for marker in &markers {
//!     println!("{} at {}", marker.comment(), marker.start());
//! }
//! ```

mod error;
mod filter;
mod loader;
mod parser;
mod types;
mod xml;

pub use error::{FieldError, MarkerError, MarkerResult};
pub use filter::{MarkerFilter, ShotIdPattern};
pub use loader::{MarkerListFormat, MarkerListLoader};
pub use parser::{format_marker_line, parse_marker_line, LineLayout};
pub use types::{Marker, MarkerColor, DEFAULT_MARKER_NAME};
pub use xml::parse_marker_xml;
