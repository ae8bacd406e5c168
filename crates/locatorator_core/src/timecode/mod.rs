//! Frame-accurate broadcast timecode.
//!
//! Marker lists carry positions as `HH:MM:SS:FF` strings. Everything the
//! comparison needs from them is frame arithmetic: equality, ordering and
//! subtraction yielding a signed frame count.
//!
//! # Usage
//!
//! ```
//! use locatorator_core::timecode::{FrameRate, Timecode};
//!
//! let rate = FrameRate::FILM;
//! let old = Timecode::parse("01:00:10:00", rate).unwrap();
//! let new = Timecode::parse("01:00:12:00", rate).unwrap();
//!
//! let offset = new - old;
//! assert_eq!(offset.frames(), 48);
//! assert_eq!(offset.to_signed_string(), "+00:00:02:00");
//! ```

mod rate;
mod types;

pub use rate::FrameRate;
pub use types::{Timecode, TimecodeError};
