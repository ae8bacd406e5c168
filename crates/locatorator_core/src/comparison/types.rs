//! Comparison results.

use std::fmt;

use crate::changelist::{format_change_table, render_change_list};
use crate::config::ExportSettings;
use crate::markers::{Marker, ShotIdPattern};
use crate::reconcile::{ChangeKind, ChangeReport};

/// Count of reports per change kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pub unchanged: usize,
    pub changed: usize,
    pub added: usize,
    pub deleted: usize,
}

impl ChangeSummary {
    /// Tally a set of reports.
    pub fn from_reports(reports: &[ChangeReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            match report.kind() {
                ChangeKind::Unchanged => summary.unchanged += 1,
                ChangeKind::Changed => summary.changed += 1,
                ChangeKind::Added => summary.added += 1,
                ChangeKind::Deleted => summary.deleted += 1,
            }
        }
        summary
    }

    /// Number of reports of one kind.
    pub fn count(&self, kind: ChangeKind) -> usize {
        match kind {
            ChangeKind::Unchanged => self.unchanged,
            ChangeKind::Changed => self.changed,
            ChangeKind::Added => self.added,
            ChangeKind::Deleted => self.deleted,
        }
    }

    /// Total number of reports.
    pub fn total(&self) -> usize {
        self.unchanged + self.changed + self.added + self.deleted
    }

    /// True when any shot changed or was added.
    pub fn has_exportable_changes(&self) -> bool {
        self.changed > 0 || self.added > 0
    }
}

impl fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} changed, {} added, {} deleted, {} unchanged",
            self.changed, self.added, self.deleted, self.unchanged
        )
    }
}

/// Outcome of comparing two cuts.
#[derive(Debug, Clone)]
pub struct Comparison {
    reports: Vec<ChangeReport>,
    summary: ChangeSummary,
}

impl Comparison {
    pub(crate) fn new(reports: Vec<ChangeReport>) -> Self {
        let summary = ChangeSummary::from_reports(&reports);
        Self { reports, summary }
    }

    /// Reports in engine order.
    pub fn reports(&self) -> &[ChangeReport] {
        &self.reports
    }

    /// Per-kind counts.
    pub fn summary(&self) -> ChangeSummary {
        self.summary
    }

    /// Consume into the reports.
    pub fn into_reports(self) -> Vec<ChangeReport> {
        self.reports
    }

    /// Markers for the configured kinds, stamped with the configured template.
    pub fn change_list(&self, settings: &ExportSettings) -> Vec<Marker> {
        render_change_list(&self.reports, &settings.template(), &settings.include)
    }

    /// Display table of every report.
    pub fn table(&self, pattern: &ShotIdPattern) -> Vec<String> {
        format_change_table(&self.reports, pattern, ChangeKind::all())
    }
}
