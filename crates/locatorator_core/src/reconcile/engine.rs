//! Running-offset reconciliation of two marker lists.
//!
//! Shots are matched by comment (case-insensitive). For each shot in the
//! new list the engine compares its absolute offset against the running
//! offset left by the last detected change. A uniform ripple downstream of
//! one cut is therefore reported once, on the shot that caused it.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::types::{ChangeReport, ListSide, ReconcileError, ReconcileResult};
use crate::markers::Marker;
use crate::timecode::Timecode;

/// Reconcile an old and a new marker list.
///
/// Reports come out in the new list's order, followed by deleted shots in
/// the old list's order. Neither list is reordered; sort by start first if
/// the offsets should follow the timeline.
///
/// Fails without producing any report if either list repeats a shot id.
pub fn reconcile(old: &[Marker], new: &[Marker]) -> ReconcileResult<Vec<ChangeReport>> {
    let mut lookup = build_lookup(old, ListSide::Old)?;
    build_lookup(new, ListSide::New)?;

    let mut running_offset: i64 = 0;
    let mut reports = Vec::with_capacity(new.len() + old.len().saturating_sub(new.len()));

    for marker_new in new {
        let Some(idx) = lookup.remove(&marker_new.shot_key()) else {
            reports.push(ChangeReport::Added {
                new: marker_new.clone(),
            });
            continue;
        };
        let marker_old = &old[idx];

        let absolute_offset = (marker_new.start() - marker_old.start()).frames();
        let relative_offset = absolute_offset - running_offset;

        if relative_offset != 0 {
            running_offset = absolute_offset;
            reports.push(ChangeReport::Changed {
                old: marker_old.clone(),
                new: marker_new.clone(),
                relative_offset: Timecode::from_frames(relative_offset, marker_new.start().rate()),
            });
        } else {
            reports.push(ChangeReport::Unchanged {
                old: marker_old.clone(),
                new: marker_new.clone(),
            });
        }
    }

    let mut leftover: Vec<usize> = lookup.into_values().collect();
    leftover.sort_unstable();
    reports.extend(leftover.into_iter().map(|idx| ChangeReport::Deleted {
        old: old[idx].clone(),
    }));

    tracing::debug!(
        "Reconciled {} old and {} new markers into {} reports",
        old.len(),
        new.len(),
        reports.len()
    );

    Ok(reports)
}

/// Map lowercased shot ids to their index, rejecting repeats.
fn build_lookup(markers: &[Marker], side: ListSide) -> ReconcileResult<HashMap<String, usize>> {
    let mut lookup = HashMap::with_capacity(markers.len());

    for (idx, marker) in markers.iter().enumerate() {
        match lookup.entry(marker.shot_key()) {
            Entry::Occupied(_) => {
                return Err(ReconcileError::DuplicateShotId {
                    list: side,
                    shot_id: marker.comment().to_string(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(idx);
            }
        }
    }

    Ok(lookup)
}
