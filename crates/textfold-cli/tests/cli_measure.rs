use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_measure_reports_layout() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("textfold")
        .env("TEXTFOLD_HOME", dir.path())
        .args(["measure", "你好世界", "--width", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 lines, max width 6"))
        .stdout(predicate::str::contains("你好世"));
}

#[test]
fn test_measure_json_output() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("textfold")
        .env("TEXTFOLD_HOME", dir.path())
        .args(["measure", "你好世界", "--width", "6", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"line_count\":2"))
        .stdout(predicate::str::contains("\"max_line_width\":6"))
        .stdout(predicate::str::contains("\"start\":9"));
}

#[test]
fn test_measure_reads_stdin() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("textfold")
        .env("TEXTFOLD_HOME", dir.path())
        .args(["measure", "--width", "80"])
        .write_stdin("one two\nthree\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 lines"));
}
