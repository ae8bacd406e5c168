//! Change list output.
//!
//! Turns change reports into something an editor can use:
//!
//! - a marker list that re-imports onto the new cut, one marker per change
//! - an aligned text table for reading on screen or in a log
//!
//! # Usage
//!
//! ```
//! use locatorator_core::changelist::{render_change_list, write_change_list, ExportTemplate};
//! use locatorator_core::reconcile::{reconcile, ChangeKind};
//!
//! let reports = reconcile(&[], &[]).unwrap();
//! let markers = render_change_list(
//!     &reports,
//!     &ExportTemplate::default(),
//!     ChangeKind::exported_by_default(),
//! );
//!
//! let mut out = Vec::new();
//! write_change_list(&markers, &mut out).unwrap();
//! assert!(out.is_empty());
//! ```

mod table;
mod writer;

pub use table::format_change_table;
pub use writer::{
    render_change_list, write_change_list, write_change_list_file, ExportTemplate,
    EXPORT_TRACK_OPTIONS,
};
