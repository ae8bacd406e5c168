//! Marker record and color definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::FieldError;
use crate::timecode::Timecode;

/// Name given to markers when the source does not supply one.
pub const DEFAULT_MARKER_NAME: &str = "Locatorator";

/// Marker colors the editor can store.
///
/// The first eight are the legacy set every list layout understands.
/// The rest were added later and only survive in the extended layout's
/// trailing color field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
    Black,
    White,
    Orange,
    Pink,
    Purple,
    Lime,
    Teal,
    Lavender,
}

impl MarkerColor {
    /// Written to the legacy color slot when the real color is extended-only.
    pub const LEGACY_FALLBACK: MarkerColor = MarkerColor::Yellow;

    /// Get all colors, legacy set first.
    pub fn all() -> &'static [MarkerColor] {
        &[
            Self::Red,
            Self::Green,
            Self::Blue,
            Self::Cyan,
            Self::Magenta,
            Self::Yellow,
            Self::Black,
            Self::White,
            Self::Orange,
            Self::Pink,
            Self::Purple,
            Self::Lime,
            Self::Teal,
            Self::Lavender,
        ]
    }

    /// Title-case name as written to marker lists.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Cyan => "Cyan",
            Self::Magenta => "Magenta",
            Self::Yellow => "Yellow",
            Self::Black => "Black",
            Self::White => "White",
            Self::Orange => "Orange",
            Self::Pink => "Pink",
            Self::Purple => "Purple",
            Self::Lime => "Lime",
            Self::Teal => "Teal",
            Self::Lavender => "Lavender",
        }
    }

    /// Whether this color belongs to the original eight-color set.
    pub fn is_legacy(&self) -> bool {
        matches!(
            self,
            Self::Red
                | Self::Green
                | Self::Blue
                | Self::Cyan
                | Self::Magenta
                | Self::Yellow
                | Self::Black
                | Self::White
        )
    }

    /// Color to write where only the legacy set is understood.
    pub fn legacy_slot(&self) -> MarkerColor {
        if self.is_legacy() {
            *self
        } else {
            Self::LEGACY_FALLBACK
        }
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MarkerColor {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|color| color.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| FieldError::UnknownColor(token.to_string()))
    }
}

/// One marker (locator) from an exported marker list.
///
/// Immutable once built: text fields are sanitized on the way in, so no
/// field ever contains a tab, newline or other control character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    name: String,
    start: Timecode,
    duration: u32,
    track: String,
    color: MarkerColor,
    comment: String,
    user: String,
}

impl Marker {
    /// Create a single-frame marker with no user.
    pub fn new(
        name: &str,
        start: Timecode,
        track: &str,
        color: MarkerColor,
        comment: &str,
    ) -> Self {
        Self {
            name: sanitize(name),
            start,
            duration: 1,
            track: sanitize(track),
            color,
            comment: sanitize(comment),
            user: String::new(),
        }
    }

    /// Set the duration in frames. Zero is rejected.
    pub fn with_duration(mut self, frames: u32) -> Result<Self, FieldError> {
        if frames == 0 {
            return Err(FieldError::InvalidDuration(frames.to_string()));
        }
        self.duration = frames;
        Ok(self)
    }

    /// Set the user who placed the marker.
    pub fn with_user(mut self, user: &str) -> Self {
        self.user = sanitize(user);
        self
    }

    /// Marker name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Start position.
    pub fn start(&self) -> Timecode {
        self.start
    }

    /// Duration in frames (at least 1).
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Track the marker sits on ("V1", "TC1", ...).
    pub fn track(&self) -> &str {
        &self.track
    }

    /// Marker color.
    pub fn color(&self) -> MarkerColor {
        self.color
    }

    /// Comment, which carries the shot id.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// User name, empty when the source layout has none.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Whether the marker spans more than one frame.
    pub fn is_spanned(&self) -> bool {
        self.duration > 1
    }

    /// Key used to match this marker between lists.
    pub fn shot_key(&self) -> String {
        self.comment.to_lowercase()
    }
}

/// Parse a duration field as a positive frame count.
pub(crate) fn parse_duration(text: &str) -> Result<u32, FieldError> {
    match text.trim().parse::<u32>() {
        Ok(frames) if frames > 0 => Ok(frames),
        _ => Err(FieldError::InvalidDuration(text.trim().to_string())),
    }
}

/// Drop control characters (tabs and newlines included) and trim.
fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timecode::FrameRate;

    fn start() -> Timecode {
        Timecode::parse("01:00:00:00", FrameRate::FILM).unwrap()
    }

    #[test]
    fn color_parse_is_case_insensitive() {
        assert_eq!("red".parse::<MarkerColor>().unwrap(), MarkerColor::Red);
        assert_eq!("MAGENTA".parse::<MarkerColor>().unwrap(), MarkerColor::Magenta);
        assert_eq!(" Lavender ".parse::<MarkerColor>().unwrap(), MarkerColor::Lavender);
    }

    #[test]
    fn unknown_color_fails() {
        let err = "chartreuse".parse::<MarkerColor>().unwrap_err();
        assert_eq!(err, FieldError::UnknownColor("chartreuse".to_string()));
    }

    #[test]
    fn legacy_slot_falls_back_to_yellow() {
        assert_eq!(MarkerColor::Blue.legacy_slot(), MarkerColor::Blue);
        assert_eq!(MarkerColor::Orange.legacy_slot(), MarkerColor::Yellow);
        assert_eq!(MarkerColor::all().iter().filter(|c| c.is_legacy()).count(), 8);
    }

    #[test]
    fn sanitize_strips_control_characters() {
        let marker = Marker::new(" A\tname\n", start(), "V1\r", MarkerColor::Red, "ABC\u{7}0010 ");
        assert_eq!(marker.name(), "Aname");
        assert_eq!(marker.track(), "V1");
        assert_eq!(marker.comment(), "ABC0010");
    }

    #[test]
    fn duration_must_be_positive() {
        let marker = Marker::new("m", start(), "V1", MarkerColor::Red, "ABC0010");
        assert!(marker.clone().with_duration(0).is_err());
        let spanned = marker.with_duration(12).unwrap();
        assert_eq!(spanned.duration(), 12);
        assert!(spanned.is_spanned());
    }

    #[test]
    fn parse_duration_rejects_junk() {
        assert_eq!(parse_duration(" 3 ").unwrap(), 3);
        assert!(parse_duration("0").is_err());
        assert!(parse_duration("-1").is_err());
        assert!(parse_duration("1.5").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn shot_key_is_lowercase() {
        let marker = Marker::new("m", start(), "V1", MarkerColor::Red, "AbC0010");
        assert_eq!(marker.shot_key(), "abc0010");
    }
}
