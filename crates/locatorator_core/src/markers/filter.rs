//! Inclusion filters applied while loading marker lists.

use regex::{Regex, RegexBuilder};

use super::types::Marker;

/// Decides whether a parsed marker is kept.
///
/// Rejected markers are dropped silently; they are not errors.
pub trait MarkerFilter {
    /// Return true to keep the marker.
    fn accepts(&self, marker: &Marker) -> bool;
}

impl<F> MarkerFilter for F
where
    F: Fn(&Marker) -> bool,
{
    fn accepts(&self, marker: &Marker) -> bool {
        self(marker)
    }
}

/// Keeps markers whose comment starts with a shot id.
///
/// Matching is always case-insensitive.
#[derive(Debug, Clone)]
pub struct ShotIdPattern {
    regex: Regex,
}

impl ShotIdPattern {
    /// Two to four letters followed by three to four digits.
    pub const DEFAULT_PATTERN: &'static str = r"^[a-z]{2,4}[0-9]{3,4}";

    /// Compile a custom pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { regex })
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// The part of `comment` that matched, if any.
    pub fn shot_id<'c>(&self, comment: &'c str) -> Option<&'c str> {
        self.regex.find(comment).map(|m| m.as_str())
    }
}

impl Default for ShotIdPattern {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATTERN).expect("default shot id pattern compiles")
    }
}

impl MarkerFilter for ShotIdPattern {
    fn accepts(&self, marker: &Marker) -> bool {
        self.regex.is_match(marker.comment())
    }
}
