//! Load, reconcile and export in one call.

use std::path::{Path, PathBuf};

use super::errors::{LocatoratorError, LocatoratorResult};
use super::types::Comparison;
use crate::changelist::write_change_list_file;
use crate::config::{ExportSettings, ImportSettings};
use crate::markers::{Marker, MarkerListLoader};
use crate::reconcile::{reconcile, ListSide, ReconcileResult};

/// Build the loader described by the import settings.
pub fn loader_from_settings(settings: &ImportSettings) -> LocatoratorResult<MarkerListLoader> {
    let mut loader = MarkerListLoader::new(settings.frame_rate()?);
    if let Some(format) = settings.format {
        loader = loader.with_format(format);
    }
    if settings.filter_shot_ids {
        loader = loader.with_filter(settings.shot_id_pattern()?);
    }
    Ok(loader)
}

/// Load two marker list files and compare them.
pub fn compare_files(
    old_path: impl AsRef<Path>,
    new_path: impl AsRef<Path>,
    settings: &ImportSettings,
) -> LocatoratorResult<Comparison> {
    let (old_path, new_path) = (old_path.as_ref(), new_path.as_ref());
    let loader = loader_from_settings(settings)?;

    let old = loader
        .load(old_path)
        .map_err(|e| LocatoratorError::load(ListSide::Old, e))?;
    let new = loader
        .load(new_path)
        .map_err(|e| LocatoratorError::load(ListSide::New, e))?;

    tracing::info!(
        "Comparing {} ({} markers) against {} ({} markers)",
        old_path.display(),
        old.len(),
        new_path.display(),
        new.len()
    );

    let comparison = compare_marker_lists(old, new, settings.sort_by_start)?;
    tracing::info!("Comparison: {}", comparison.summary());
    Ok(comparison)
}

/// Compare two already-loaded lists, optionally sorting each by start first.
///
/// The sort is stable, so markers sharing a start keep their file order.
pub fn compare_marker_lists(
    mut old: Vec<Marker>,
    mut new: Vec<Marker>,
    sort_by_start: bool,
) -> ReconcileResult<Comparison> {
    if sort_by_start {
        old.sort_by_key(Marker::start);
        new.sort_by_key(Marker::start);
    }
    Ok(Comparison::new(reconcile(&old, &new)?))
}

/// Write the change list for a comparison. Returns the number of markers written.
pub fn export_change_list(
    comparison: &Comparison,
    settings: &ExportSettings,
    path: impl AsRef<Path>,
) -> LocatoratorResult<usize> {
    let path = path.as_ref();
    let markers = comparison.change_list(settings);
    write_change_list_file(&markers, path).map_err(|e| LocatoratorError::write(path, e))?;
    Ok(markers.len())
}

/// Default change list path: `"<old stem> vs <new stem>.txt"` beside the old list.
pub fn suggest_output_path(old_path: impl AsRef<Path>, new_path: impl AsRef<Path>) -> PathBuf {
    let (old_path, new_path) = (old_path.as_ref(), new_path.as_ref());
    let stem = |path: &Path| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    };
    old_path.with_file_name(format!("{} vs {}.txt", stem(old_path), stem(new_path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::{MarkerColor, MarkerListFormat};
    use crate::reconcile::{ChangeKind, ReconcileError};
    use crate::timecode::{FrameRate, Timecode};
    use std::fs;
    use tempfile::tempdir;

    const OLD: &str = "m\t01:00:10:00\tV1\tRed\tABC0020\t1\n\
                       m\t01:00:00:00\tV1\tRed\tABC0010\t1\n\
                       m\t01:00:05:00\tV1\tRed\ttemp music\t1\n";
    const NEW: &str = "m\t01:00:00:00\tV1\tRed\tABC0010\t1\n\
                       m\t01:00:12:00\tV1\tRed\tABC0020\t1\n\
                       m\t01:00:20:00\tV1\tRed\tABC0030\t1\n";

    fn marker(comment: &str, start: &str) -> Marker {
        Marker::new(
            "m",
            Timecode::parse(start, FrameRate::FILM).unwrap(),
            "V1",
            MarkerColor::Red,
            comment,
        )
    }

    #[test]
    fn compare_files_sorts_and_filters() {
        let dir = tempdir().unwrap();
        let old_path = dir.path().join("reel1_v1.txt");
        let new_path = dir.path().join("reel1_v2.txt");
        fs::write(&old_path, OLD).unwrap();
        fs::write(&new_path, NEW).unwrap();

        let comparison = compare_files(&old_path, &new_path, &ImportSettings::default()).unwrap();
        let summary = comparison.summary();
        assert_eq!(summary.unchanged, 1);
        assert_eq!(summary.changed, 1);
        assert_eq!(summary.added, 1);
        assert_eq!(summary.deleted, 0);
        assert!(summary.has_exportable_changes());
    }

    #[test]
    fn unfiltered_lists_keep_every_marker() {
        let dir = tempdir().unwrap();
        let old_path = dir.path().join("old.txt");
        let new_path = dir.path().join("new.txt");
        fs::write(&old_path, OLD).unwrap();
        fs::write(&new_path, NEW).unwrap();

        let settings = ImportSettings {
            filter_shot_ids: false,
            ..ImportSettings::default()
        };
        let comparison = compare_files(&old_path, &new_path, &settings).unwrap();
        assert_eq!(comparison.summary().deleted, 1);
        assert_eq!(comparison.summary().total(), 4);
    }

    #[test]
    fn load_failure_names_side() {
        let dir = tempdir().unwrap();
        let old_path = dir.path().join("old.txt");
        fs::write(&old_path, OLD).unwrap();

        let err = compare_files(&old_path, dir.path().join("missing.txt"), &ImportSettings::default())
            .unwrap_err();
        assert!(matches!(
            err,
            LocatoratorError::Load {
                side: ListSide::New,
                ..
            }
        ));
    }

    #[test]
    fn bad_settings_fail_before_loading() {
        let settings = ImportSettings {
            timebase: 24,
            drop_frame: true,
            ..ImportSettings::default()
        };
        let err = compare_files("old.txt", "new.txt", &settings).unwrap_err();
        assert!(matches!(err, LocatoratorError::FrameRate(_)));
    }

    #[test]
    fn forced_format_reaches_loader() {
        let dir = tempdir().unwrap();
        let old_path = dir.path().join("old.xml");
        let new_path = dir.path().join("new.xml");
        fs::write(&old_path, OLD).unwrap();
        fs::write(&new_path, NEW).unwrap();

        let settings = ImportSettings {
            format: Some(MarkerListFormat::Text),
            ..ImportSettings::default()
        };
        assert!(compare_files(&old_path, &new_path, &settings).is_ok());
        assert!(compare_files(&old_path, &new_path, &ImportSettings::default()).is_err());
    }

    #[test]
    fn unsorted_lists_follow_file_order() {
        let old = vec![marker("ABC0020", "01:00:10:00"), marker("ABC0010", "01:00:00:00")];
        let new = vec![marker("ABC0020", "01:00:11:00"), marker("ABC0010", "01:00:01:00")];

        let sorted = compare_marker_lists(old.clone(), new.clone(), true).unwrap();
        assert_eq!(sorted.reports()[0].shot_id(), "ABC0010");
        assert_eq!(sorted.reports()[0].kind(), ChangeKind::Changed);

        let unsorted = compare_marker_lists(old, new, false).unwrap();
        assert_eq!(unsorted.reports()[0].shot_id(), "ABC0020");
        assert_eq!(unsorted.reports()[1].kind(), ChangeKind::Unchanged);
    }

    #[test]
    fn duplicates_abort_comparison() {
        let old = vec![marker("ABC0010", "01:00:00:00"), marker("ABC0010", "01:00:10:00")];
        let err = compare_marker_lists(old, Vec::new(), true).unwrap_err();
        assert!(matches!(err, ReconcileError::DuplicateShotId { .. }));
    }

    #[test]
    fn export_writes_selected_kinds() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("changes.txt");
        let comparison = compare_marker_lists(
            vec![marker("ABC0010", "01:00:00:00")],
            vec![marker("ABC0010", "01:00:00:00"), marker("ABC0020", "01:00:05:00")],
            true,
        )
        .unwrap();

        let written = export_change_list(&comparison, &ExportSettings::default(), &out).unwrap();
        assert_eq!(written, 1);
        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(
            content,
            "Locatorator\t01:00:05:00\tTC1\tWhite\tShot added: ABC0020\t1\t\tWhite\n"
        );

        let everything = ExportSettings {
            include: ChangeKind::all().to_vec(),
            ..ExportSettings::default()
        };
        assert_eq!(export_change_list(&comparison, &everything, &out).unwrap(), 2);
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let comparison = compare_marker_lists(Vec::new(), Vec::new(), true).unwrap();
        let err = export_change_list(
            &comparison,
            &ExportSettings::default(),
            dir.path().join("no").join("such.txt"),
        )
        .unwrap_err();
        assert!(matches!(err, LocatoratorError::Write { .. }));
    }

    #[test]
    fn output_path_sits_beside_old_list() {
        let path = suggest_output_path("/cuts/reel1_v1.txt", "/other/reel1_v2.xml");
        assert_eq!(path, PathBuf::from("/cuts/reel1_v1 vs reel1_v2.txt"));
    }
}
