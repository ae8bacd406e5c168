//! Marker list reconciliation.
//!
//! Matches shots between an old and a new marker list by their comment
//! and classifies each one as unchanged, changed, added or deleted.
//!
//! # Usage
//!
//! ```
//! use locatorator_core::markers::{Marker, MarkerColor};
//! use locatorator_core::reconcile::{reconcile, ChangeKind};
//! use locatorator_core::timecode::{FrameRate, Timecode};
//!
//! let at = |tc: &str| Timecode::parse(tc, FrameRate::FILM).unwrap();
//! let old = vec![Marker::new("m", at("01:00:10:00"), "V1", MarkerColor::Red, "ABC0020")];
//! let new = vec![Marker::new("m", at("01:00:12:00"), "V1", MarkerColor::Red, "ABC0020")];
//!
//! let reports = reconcile(&old, &new).unwrap();
//! assert_eq!(reports[0].kind(), ChangeKind::Changed);
//! assert_eq!(reports[0].relative_offset().unwrap().frames(), 48);
//! ```

mod engine;
mod types;

pub use engine::reconcile;
pub use types::{ChangeKind, ChangeReport, ListSide, ReconcileError, ReconcileResult};
