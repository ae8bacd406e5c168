//! Frame rates and drop-frame bookkeeping.

use std::fmt;

use super::types::TimecodeError;

/// Timecode counting rate.
///
/// `timebase` is the integer number of frame numbers per second
/// (24 for 23.976/24, 30 for 29.97/30). Drop-frame counting skips
/// `timebase / 15` frame numbers at the start of every minute except
/// each tenth minute, so it is only defined for multiples of 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRate {
    timebase: u32,
    drop_frame: bool,
}

impl FrameRate {
    /// 24 fps non-drop, the editor's film default.
    pub const FILM: FrameRate = FrameRate {
        timebase: 24,
        drop_frame: false,
    };

    /// 25 fps non-drop.
    pub const PAL: FrameRate = FrameRate {
        timebase: 25,
        drop_frame: false,
    };

    /// 30 fps non-drop.
    pub const NTSC: FrameRate = FrameRate {
        timebase: 30,
        drop_frame: false,
    };

    /// 29.97 fps drop-frame.
    pub const NTSC_DF: FrameRate = FrameRate {
        timebase: 30,
        drop_frame: true,
    };

    /// Create a frame rate, validating the drop-frame combination.
    pub fn new(timebase: u32, drop_frame: bool) -> Result<Self, TimecodeError> {
        if timebase == 0 || (drop_frame && timebase % 30 != 0) {
            return Err(TimecodeError::InvalidRate {
                timebase,
                drop_frame,
            });
        }
        Ok(Self {
            timebase,
            drop_frame,
        })
    }

    /// Frame numbers per second.
    pub fn timebase(&self) -> u32 {
        self.timebase
    }

    /// Whether this rate uses drop-frame counting.
    pub fn is_drop_frame(&self) -> bool {
        self.drop_frame
    }

    /// Frame numbers skipped at the top of each non-tenth minute.
    pub(crate) fn dropped_per_minute(&self) -> i64 {
        if self.drop_frame {
            i64::from(self.timebase / 15)
        } else {
            0
        }
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::FILM
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.drop_frame {
            write!(f, "{} fps DF", self.timebase)
        } else {
            write!(f, "{} fps", self.timebase)
        }
    }
}
