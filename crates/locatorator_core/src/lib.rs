//! Locatorator Core - marker list comparison between two cuts.
//!
//! Reads the marker lists an editor exports for an old and a new cut,
//! works out which shots changed, moved, appeared or went away, and
//! writes the result back as a marker list to import onto the new cut.
//! Contains no UI code; front ends drive it through [`comparison`] and
//! [`config`].

pub mod changelist;
pub mod comparison;
pub mod config;
pub mod logging;
pub mod markers;
pub mod reconcile;
pub mod timecode;

pub use comparison::{LocatoratorError, LocatoratorResult};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
