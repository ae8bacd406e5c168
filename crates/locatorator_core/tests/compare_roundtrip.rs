//! Full pipeline on disk: two cuts in, change list out, change list back in.

use std::fs;

use locatorator_core::comparison::{compare_files, export_change_list, suggest_output_path};
use locatorator_core::config::{ConfigManager, ConfigSection, Settings};
use locatorator_core::markers::{MarkerColor, MarkerListFormat, MarkerListLoader};
use locatorator_core::reconcile::ChangeKind;
use locatorator_core::timecode::FrameRate;
use locatorator_core::LocatoratorError;
use tempfile::tempdir;

const OLD_CUT: &str = "\
Locator\t01:00:00:00\tV1\tRed\tABC0010\t1
Locator\t01:00:10:00\tV1\tRed\tABC0020\t1
Locator\t01:00:20:00\tV1\tRed\tABC0030\t1
Locator\t01:00:25:00\tV1\tRed\tsound note\t1
Locator\t01:00:30:00\tV1\tRed\tABC0040\t1
";

fn xml_marker(comment: &str, timecode: &str) -> String {
    format!(
        r#"<ListElem><AvClass id="ATTR"><List>
<ListElem><AvProp id="ATTR" name="OMFI:ATTB:Name" type="string">_ATN_CRM_COM</AvProp><AvProp id="ATTR" name="OMFI:ATTB:StringAttribute" type="string">{comment}</AvProp></ListElem>
<ListElem><AvProp id="ATTR" name="OMFI:ATTB:Name" type="string">_ATN_CRM_TC</AvProp><AvProp id="ATTR" name="OMFI:ATTB:StringAttribute" type="string">{timecode}</AvProp></ListElem>
</List></AvClass></ListElem>"#
    )
}

fn new_cut_xml() -> String {
    // ABC0020 trimmed by a second, ABC0040 dropped, ABC0035 added.
    let markers = [
        xml_marker("ABC0010", "01:00:00:00"),
        xml_marker("ABC0020", "01:00:09:00"),
        xml_marker("ABC0030", "01:00:19:00"),
        xml_marker("ABC0035", "01:00:24:00"),
    ];
    format!(
        "<?xml version=\"1.0\"?>\n<Avid:StreamItems xmlns:Avid=\"http://www.avid.com\">\n<AvClass id=\"MLST\"><List>\n{}\n</List></AvClass>\n</Avid:StreamItems>",
        markers.join("\n")
    )
}

#[test]
fn text_against_xml_roundtrips_through_change_list() {
    let dir = tempdir().unwrap();
    let old_path = dir.path().join("reel1_v1.txt");
    let new_path = dir.path().join("reel1_v2.xml");
    fs::write(&old_path, OLD_CUT).unwrap();
    fs::write(&new_path, new_cut_xml()).unwrap();

    let settings = Settings::default();
    let comparison = compare_files(&old_path, &new_path, &settings.import).unwrap();

    let kinds: Vec<ChangeKind> = comparison.reports().iter().map(|r| r.kind()).collect();
    assert_eq!(
        kinds,
        [
            ChangeKind::Unchanged,
            ChangeKind::Changed,
            ChangeKind::Unchanged,
            ChangeKind::Added,
            ChangeKind::Deleted,
        ]
    );
    assert!(comparison.summary().has_exportable_changes());

    let out = suggest_output_path(&old_path, &new_path);
    assert_eq!(out, dir.path().join("reel1_v1 vs reel1_v2.txt"));
    let written = export_change_list(&comparison, &settings.export, &out).unwrap();
    assert_eq!(written, 3);

    let reloaded = MarkerListLoader::new(FrameRate::FILM)
        .with_format(MarkerListFormat::Text)
        .load(&out)
        .unwrap();
    let comments: Vec<&str> = reloaded.iter().map(|m| m.comment()).collect();
    assert_eq!(
        comments,
        [
            "Cut change near ABC0020 (-00:00:01:00)",
            "Shot added: ABC0035",
            "Shot removed since last cut: ABC0040",
        ]
    );
    assert!(reloaded
        .iter()
        .all(|m| m.track() == "TC1" && m.color() == MarkerColor::White && m.duration() == 1));
    assert_eq!(reloaded[0].start().to_string(), "01:00:09:00");
    assert_eq!(reloaded[2].start().to_string(), "01:00:30:00");
}

#[test]
fn saved_settings_drive_the_comparison() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("locatorator.toml");
    let old_path = dir.path().join("old.txt");
    let new_path = dir.path().join("new.txt");
    fs::write(&old_path, OLD_CUT).unwrap();
    fs::write(&new_path, OLD_CUT.replace("sound note", "ABC0025")).unwrap();

    let mut config = ConfigManager::new(&config_path);
    config.load_or_create().unwrap();
    config.settings_mut().import.filter_shot_ids = false;
    config.update_section(ConfigSection::Import).unwrap();

    let mut reloaded = ConfigManager::new(&config_path);
    reloaded.load().unwrap();
    let comparison = compare_files(&old_path, &new_path, &reloaded.settings().import).unwrap();

    // Unfiltered, the renamed note shows up as one added and one deleted marker.
    let summary = comparison.summary();
    assert_eq!((summary.added, summary.deleted, summary.unchanged), (1, 1, 4));
}

#[test]
fn duplicate_shot_in_new_cut_is_reported() {
    let dir = tempdir().unwrap();
    let old_path = dir.path().join("old.txt");
    let new_path = dir.path().join("new.txt");
    fs::write(&old_path, OLD_CUT).unwrap();
    fs::write(&new_path, OLD_CUT.replace("ABC0030", "abc0020")).unwrap();

    let err = compare_files(&old_path, &new_path, &Settings::default().import).unwrap_err();
    assert!(matches!(err, LocatoratorError::Reconcile(_)));
    assert!(err.to_string().contains("new marker list"));
}
