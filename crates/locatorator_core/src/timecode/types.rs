//! Timecode value type and parse errors.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Sub;

use super::rate::FrameRate;

/// Errors that can occur while parsing timecode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimecodeError {
    /// Not four numeric fields separated by `:` or `;`.
    #[error("Invalid timecode '{0}': expected HH:MM:SS:FF")]
    Malformed(String),

    /// A field exceeds what the frame rate allows.
    #[error("Timecode '{value}' is out of range at {rate}")]
    OutOfRange { value: String, rate: FrameRate },

    /// Unusable frame rate.
    #[error("Invalid frame rate: timebase {timebase}, drop frame {drop_frame}")]
    InvalidRate { timebase: u32, drop_frame: bool },
}

/// A signed frame position (or duration) at a given frame rate.
///
/// Equality, hashing and ordering consider only the frame count, so two
/// timecodes are equal when they name the same frame.
#[derive(Debug, Clone, Copy)]
pub struct Timecode {
    frames: i64,
    rate: FrameRate,
}

impl Timecode {
    /// Create a timecode from an absolute frame count.
    pub fn from_frames(frames: i64, rate: FrameRate) -> Self {
        Self { frames, rate }
    }

    /// Zero frames at the given rate.
    pub fn zero(rate: FrameRate) -> Self {
        Self::from_frames(0, rate)
    }

    /// Parse `HH:MM:SS:FF` (or `HH:MM:SS;FF`), optionally prefixed with `-`.
    pub fn parse(text: &str, rate: FrameRate) -> Result<Self, TimecodeError> {
        let text = text.trim();
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let fields: Vec<&str> = body.split([':', ';']).collect();
        if fields.len() != 4 {
            return Err(TimecodeError::Malformed(text.to_string()));
        }

        let mut values = [0i64; 4];
        for (slot, field) in values.iter_mut().zip(&fields) {
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TimecodeError::Malformed(text.to_string()));
            }
            let value: u32 = field
                .parse()
                .map_err(|_| TimecodeError::Malformed(text.to_string()))?;
            *slot = i64::from(value);
        }
        let [hours, minutes, seconds, frames] = values;

        let timebase = i64::from(rate.timebase());
        let dropped = rate.dropped_per_minute();
        let is_dropped_number = seconds == 0 && minutes % 10 != 0 && frames < dropped;
        if minutes >= 60 || seconds >= 60 || frames >= timebase || is_dropped_number {
            return Err(TimecodeError::OutOfRange {
                value: text.to_string(),
                rate,
            });
        }

        let total_minutes = hours * 60 + minutes;
        let nominal = (total_minutes * 60 + seconds) * timebase + frames;
        let count = nominal - dropped * (total_minutes - total_minutes / 10);

        Ok(Self::from_frames(if negative { -count } else { count }, rate))
    }

    /// Signed frame count.
    pub fn frames(&self) -> i64 {
        self.frames
    }

    /// Frame rate this timecode counts in.
    pub fn rate(&self) -> FrameRate {
        self.rate
    }

    /// True at exactly zero frames.
    pub fn is_zero(&self) -> bool {
        self.frames == 0
    }

    /// Render with an explicit `+` for positive values.
    ///
    /// Negative values already carry their `-`; zero has no sign.
    pub fn to_signed_string(&self) -> String {
        if self.frames > 0 {
            format!("+{}", self)
        } else {
            self.to_string()
        }
    }

    /// Split the magnitude into (hours, minutes, seconds, frames) labels.
    fn components(&self) -> (u64, u64, u64, u64) {
        let timebase = u64::from(self.rate.timebase());
        let dropped = self.rate.dropped_per_minute().unsigned_abs();
        let mut count = self.frames.unsigned_abs();

        if dropped > 0 {
            let per_minute = timebase * 60 - dropped;
            let per_ten_minutes = timebase * 600 - dropped * 9;
            let tens = count / per_ten_minutes;
            let remainder = count % per_ten_minutes;
            count += dropped * 9 * tens;
            if remainder > dropped {
                count += dropped * ((remainder - dropped) / per_minute);
            }
        }

        let frames = count % timebase;
        let seconds = (count / timebase) % 60;
        let minutes = (count / (timebase * 60)) % 60;
        let hours = count / (timebase * 3600);
        (hours, minutes, seconds, frames)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes, seconds, frames) = self.components();
        let sign = if self.frames < 0 { "-" } else { "" };
        let separator = if self.rate.is_drop_frame() { ';' } else { ':' };
        write!(
            f,
            "{}{:02}:{:02}:{:02}{}{:02}",
            sign, hours, minutes, seconds, separator, frames
        )
    }
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.frames == other.frames
    }
}

impl Eq for Timecode {}

impl Hash for Timecode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.frames.hash(state);
    }
}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timecode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frames.cmp(&other.frames)
    }
}

impl Sub for Timecode {
    type Output = Timecode;

    /// Frame difference, counted in the left operand's rate.
    fn sub(self, rhs: Self) -> Self::Output {
        Timecode::from_frames(self.frames - rhs.frames, self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tc(text: &str) -> Timecode {
        Timecode::parse(text, FrameRate::FILM).unwrap()
    }

    #[test]
    fn parse_non_drop() {
        assert_eq!(tc("00:00:00:00").frames(), 0);
        assert_eq!(tc("00:00:01:00").frames(), 24);
        assert_eq!(tc("01:00:00:00").frames(), 86_400);
        assert_eq!(tc("01:00:10:12").frames(), 86_400 + 240 + 12);
    }

    #[test]
    fn format_non_drop() {
        assert_eq!(tc("01:02:03:04").to_string(), "01:02:03:04");
        assert_eq!(
            Timecode::from_frames(24 * 3600 * 25, FrameRate::FILM).to_string(),
            "25:00:00:00"
        );
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "01:00:00", "01:00:00:00:00", "aa:00:00:00", "01:00: 00:00", "01::00:00"] {
            assert!(
                matches!(
                    Timecode::parse(bad, FrameRate::FILM),
                    Err(TimecodeError::Malformed(_))
                ),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_out_of_range_fields() {
        for bad in ["00:60:00:00", "00:00:60:00", "00:00:00:24"] {
            assert!(matches!(
                Timecode::parse(bad, FrameRate::FILM),
                Err(TimecodeError::OutOfRange { .. })
            ));
        }
        assert!(Timecode::parse("00:00:00:24", FrameRate::PAL).is_ok());
    }

    #[test]
    fn drop_frame_counts() {
        let rate = FrameRate::NTSC_DF;
        assert_eq!(Timecode::parse("00:01:00;02", rate).unwrap().frames(), 1800);
        assert_eq!(Timecode::parse("00:10:00;00", rate).unwrap().frames(), 17_982);
        assert_eq!(Timecode::parse("01:00:00;00", rate).unwrap().frames(), 107_892);
    }

    #[test]
    fn drop_frame_formats() {
        let rate = FrameRate::NTSC_DF;
        assert_eq!(Timecode::from_frames(1799, rate).to_string(), "00:00:59;29");
        assert_eq!(Timecode::from_frames(1800, rate).to_string(), "00:01:00;02");
        assert_eq!(Timecode::from_frames(17_982, rate).to_string(), "00:10:00;00");
        assert_eq!(Timecode::from_frames(107_892, rate).to_string(), "01:00:00;00");
    }

    #[test]
    fn drop_frame_rejects_skipped_numbers() {
        let rate = FrameRate::NTSC_DF;
        assert!(Timecode::parse("00:01:00;00", rate).is_err());
        assert!(Timecode::parse("00:01:00;01", rate).is_err());
        assert!(Timecode::parse("00:10:00;00", rate).is_ok());
    }

    #[test]
    fn subtraction_is_signed() {
        let earlier = tc("01:00:10:00");
        let later = tc("01:00:12:00");
        assert_eq!((later - earlier).frames(), 48);
        assert_eq!((earlier - later).frames(), -48);
        assert_eq!((earlier - later).to_string(), "-00:00:02:00");
    }

    #[test]
    fn signed_rendering() {
        let rate = FrameRate::FILM;
        assert_eq!(Timecode::from_frames(30, rate).to_signed_string(), "+00:00:01:06");
        assert_eq!(Timecode::from_frames(-30, rate).to_signed_string(), "-00:00:01:06");
        assert_eq!(Timecode::zero(rate).to_signed_string(), "00:00:00:00");
    }

    #[test]
    fn negative_parse_roundtrip() {
        let negative = tc("-00:00:02:00");
        assert_eq!(negative.frames(), -48);
        assert_eq!(negative.to_string(), "-00:00:02:00");
    }

    #[test]
    fn ordering_by_frame() {
        let mut codes = vec![tc("01:00:12:00"), tc("00:59:59:23"), tc("01:00:00:00")];
        codes.sort();
        assert_eq!(codes[0], tc("00:59:59:23"));
        assert_eq!(codes[2], tc("01:00:12:00"));
    }
}
