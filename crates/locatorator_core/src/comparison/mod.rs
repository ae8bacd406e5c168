//! End-to-end comparison of two cuts.
//!
//! Ties the other modules together the way a front end uses them:
//! load both marker lists with the import settings, reconcile, then
//! write a change list with the export settings.
//!
//! # Usage
//!
//! ```no_run
//! use locatorator_core::comparison::{compare_files, export_change_list, suggest_output_path};
//! use locatorator_core::config::Settings;
//!
//! let settings = Settings::default();
//! let comparison = compare_files("reel1_v3.txt", "reel1_v4.txt", &settings.import).unwrap();
//! println!("{}", comparison.summary());
//!
//! if comparison.summary().has_exportable_changes() {
//!     let out = suggest_output_path("reel1_v3.txt", "reel1_v4.txt");
//!     export_change_list(&comparison, &settings.export, out).unwrap();
//! }
//! ```

mod errors;
mod pipeline;
mod types;

pub use errors::{LocatoratorError, LocatoratorResult};
pub use pipeline::{
    compare_files, compare_marker_lists, export_change_list, loader_from_settings,
    suggest_output_path,
};
pub use types::{ChangeSummary, Comparison};
