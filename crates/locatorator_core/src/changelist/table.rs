//! Plain-text comparison table for display.

use crate::markers::ShotIdPattern;
use crate::reconcile::{ChangeKind, ChangeReport};

const HEADER: &str = "Shot ID               Old Version    New Version    Offset since last change";
const RULE: &str = "--------------------  -------------  -------------  ------------------------";

/// Format reports of the included kinds as aligned table lines, header first.
///
/// The shot column shows the part of the comment matching `pattern`, or the
/// whole comment when nothing matches.
pub fn format_change_table(
    reports: &[ChangeReport],
    pattern: &ShotIdPattern,
    include: &[ChangeKind],
) -> Vec<String> {
    let mut lines = vec![HEADER.to_string(), RULE.to_string()];

    for report in reports.iter().filter(|r| include.contains(&r.kind())) {
        let comment = report.shot_id();
        let shot = pattern.shot_id(comment).unwrap_or(comment);

        let old_tc = report.old().map(|m| m.start().to_string()).unwrap_or_default();
        let new_tc = report.new().map(|m| m.start().to_string()).unwrap_or_default();

        let offset = match report {
            ChangeReport::Added { .. } => "Shot added".to_string(),
            ChangeReport::Deleted { .. } => "Shot removed".to_string(),
            ChangeReport::Changed {
                relative_offset, ..
            } => relative_offset.to_signed_string(),
            ChangeReport::Unchanged { .. } => "-".to_string(),
        };

        lines.push(format!("{:<20}  {:<13}  {:<13}  {}", shot, old_tc, new_tc, offset));
    }

    lines
}
