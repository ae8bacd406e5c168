//! Change report types and reconciliation errors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::markers::Marker;
use crate::timecode::Timecode;

/// How a shot differs between the old and new marker lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Matched, and no new cut since the last change.
    Unchanged,
    /// Matched, and moved relative to the running offset.
    Changed,
    /// Only in the new list.
    Added,
    /// Only in the old list.
    Deleted,
}

impl ChangeKind {
    /// Get all kinds.
    pub fn all() -> &'static [ChangeKind] {
        &[Self::Unchanged, Self::Changed, Self::Added, Self::Deleted]
    }

    /// Kinds written to an exported change list unless told otherwise.
    pub fn exported_by_default() -> &'static [ChangeKind] {
        &[Self::Added, Self::Changed, Self::Deleted]
    }

    /// Get the display name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unchanged => "Unchanged",
            Self::Changed => "Changed",
            Self::Added => "Added",
            Self::Deleted => "Deleted",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome for one shot.
///
/// Each variant carries exactly the markers its kind allows, so an added
/// shot can never have an old marker or an offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeReport {
    /// Matched with no new offset.
    Unchanged { old: Marker, new: Marker },
    /// Matched and moved by `relative_offset` beyond the running offset.
    Changed {
        old: Marker,
        new: Marker,
        relative_offset: Timecode,
    },
    /// New shot.
    Added { new: Marker },
    /// Shot no longer present.
    Deleted { old: Marker },
}

impl ChangeReport {
    /// The kind of change.
    pub fn kind(&self) -> ChangeKind {
        match self {
            Self::Unchanged { .. } => ChangeKind::Unchanged,
            Self::Changed { .. } => ChangeKind::Changed,
            Self::Added { .. } => ChangeKind::Added,
            Self::Deleted { .. } => ChangeKind::Deleted,
        }
    }

    /// Marker from the old list, absent for added shots.
    pub fn old(&self) -> Option<&Marker> {
        match self {
            Self::Unchanged { old, .. } | Self::Changed { old, .. } | Self::Deleted { old } => {
                Some(old)
            }
            Self::Added { .. } => None,
        }
    }

    /// Marker from the new list, absent for deleted shots.
    pub fn new(&self) -> Option<&Marker> {
        match self {
            Self::Unchanged { new, .. } | Self::Changed { new, .. } | Self::Added { new } => {
                Some(new)
            }
            Self::Deleted { .. } => None,
        }
    }

    /// Offset since the last change; zero for unchanged, absent for added or deleted.
    pub fn relative_offset(&self) -> Option<Timecode> {
        match self {
            Self::Unchanged { new, .. } => Some(Timecode::zero(new.start().rate())),
            Self::Changed {
                relative_offset, ..
            } => Some(*relative_offset),
            Self::Added { .. } | Self::Deleted { .. } => None,
        }
    }

    /// Shot id as written in the old list, or the new one for added shots.
    pub fn shot_id(&self) -> &str {
        match (self.old(), self.new()) {
            (Some(old), _) => old.comment(),
            (None, Some(new)) => new.comment(),
            (None, None) => "",
        }
    }
}

/// Which input list a problem was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSide {
    Old,
    New,
}

impl fmt::Display for ListSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListSide::Old => write!(f, "old"),
            ListSide::New => write!(f, "new"),
        }
    }
}

/// Errors that abort reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconcileError {
    /// The same shot id (ignoring case) appears twice in one list.
    #[error("Shot ID \"{shot_id}\" was found more than once in the {list} marker list")]
    DuplicateShotId { list: ListSide, shot_id: String },
}

/// Type alias for reconciliation results.
pub type ReconcileResult<T> = Result<T, ReconcileError>;
