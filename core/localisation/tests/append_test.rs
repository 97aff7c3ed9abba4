use std::fs;
use std::path::Path;

use localisation::process::add_localisation;

const FOCUS_FILE: &str = "focus_tree = {\n\
\tfocus = {\n\
\t\tid = army_effort\n\
\t}\n\
\tfocus = {\n\
\t\tid = air_effort\n\
\t}\n\
}\n";

fn write_focus_input(dir: &Path) -> std::path::PathBuf {
    let input = dir.join("focus.txt");
    fs::write(&input, FOCUS_FILE).unwrap();
    input
}

#[test]
fn missing_destination_gets_header_and_all_keys() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_focus_input(dir.path());
    let output = dir.path().join("loc.yml");

    add_localisation(&input, &output, false).unwrap();

    let bytes = fs::read(&output).unwrap();
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);

    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "l_english:");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], " #TODO");
    assert_eq!(lines[3], " army_effort:0 \"\"");
    assert_eq!(lines[4], " army_effort_desc:0 \"\"");
    assert_eq!(lines[5], " air_effort:0 \"\"");
    assert_eq!(lines[6], " air_effort_desc:0 \"\"");
}

#[test]
fn keys_already_present_are_not_appended() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_focus_input(dir.path());
    let output = dir.path().join("loc.yml");
    fs::write(&output, "l_english:\n army_effort:0 \"Army Effort\"\n").unwrap();

    add_localisation(&input, &output, false).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.matches("army_effort:0").count(), 1);
    assert!(text.contains(" army_effort_desc:0 \"\""));
    assert!(text.contains(" air_effort:0 \"\""));
}

#[test]
fn second_run_appends_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_focus_input(dir.path());
    let output = dir.path().join("loc.yml");

    add_localisation(&input, &output, false).unwrap();
    let first = fs::read(&output).unwrap();
    add_localisation(&input, &output, false).unwrap();
    assert_eq!(first, fs::read(&output).unwrap());
}

#[test]
fn todo_flag_marks_every_entry() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_focus_input(dir.path());
    let output = dir.path().join("loc.yml");

    add_localisation(&input, &output, true).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    // one marker per appended key
    assert_eq!(text.matches(" #TODO").count(), 4);
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("loc.yml");
    let err = add_localisation(Path::new("/nonexistent/focus.txt"), &output, false).unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert!(!output.exists());
}
