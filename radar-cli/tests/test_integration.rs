use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("test-fixtures")
        .join("ini")
        .join(name)
}

fn copy_fixture(dir: &Path, fixture: &str, name: &str) {
    std::fs::copy(fixture_path(fixture), dir.join(name)).unwrap();
}

#[test]
fn test_batch_reports_skipped_failed_and_summary() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    copy_fixture(input.path(), "ko1.ini", "001_KO1.ini");
    copy_fixture(input.path(), "missing-selectors.ini", "002_KO2.ini");
    copy_fixture(input.path(), "bad-offset.ini", "003_KO3.ini");

    let mut cmd = cargo_bin_cmd!("radar2csv");
    cmd.arg("batch")
        .arg("--input")
        .arg(input.path())
        .arg("--output")
        .arg(output.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains(
            "Batch complete: 1 converted, 1 skipped, 1 failed",
        ))
        .stderr(
            predicate::str::contains("SKIPPED")
                .and(predicate::str::contains("002_KO2.ini: section Selectors is missing"))
                .and(predicate::str::contains("FAILED"))
                .and(predicate::str::contains("003_KO3.ini"))
                .and(predicate::str::contains("tag2"))
                .and(predicate::str::contains("1 of 3 files failed to convert")),
        );

    assert!(output.path().join("001_KO1.csv").exists());
    assert!(!output.path().join("002_KO2.csv").exists());
    assert!(!output.path().join("003_KO3.csv").exists());
}

#[test]
fn test_batch_with_only_skips_succeeds() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    copy_fixture(input.path(), "ko1.ini", "a.ini");
    copy_fixture(input.path(), "missing-selectors.ini", "b.ini");

    let mut cmd = cargo_bin_cmd!("radar2csv");
    cmd.arg("batch")
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(output.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Batch complete: 1 converted, 1 skipped, 0 failed",
        ))
        .stderr(predicate::str::contains("SKIPPED").and(predicate::str::contains("FAILED").not()));
}

#[test]
fn test_convert_writes_cp1251_csv() {
    let dir = tempfile::tempdir().unwrap();
    copy_fixture(dir.path(), "ko1.ini", "ko1.ini");

    let mut cmd = cargo_bin_cmd!("radar2csv");
    cmd.arg("convert").arg(dir.path().join("ko1.ini"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(9 rows)"));

    let bytes = std::fs::read(dir.path().join("ko1.csv")).unwrap();
    let (text, _, had_errors) = encoding_rs::WINDOWS_1251.decode(&bytes);
    assert!(!had_errors);
    assert!(text.starts_with("tag_full_name;description;"));
    assert!(text.contains("KO1.Mode;Operating mode;INT (1 byte);W;ДКМ;2000,8;0;;1, 0, 1, Byte\r\n"));
}

#[test]
fn test_convert_dry_run() {
    let dir = tempfile::tempdir().unwrap();
    copy_fixture(dir.path(), "ko1.ini", "ko1.ini");

    let mut cmd = cargo_bin_cmd!("radar2csv");
    cmd.arg("convert")
        .arg(dir.path().join("ko1.ini"))
        .arg("--dry-run");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("dry run: would write 9 rows"));

    assert!(!dir.path().join("ko1.csv").exists());
}

#[test]
fn test_convert_missing_section_reports_skip() {
    let dir = tempfile::tempdir().unwrap();
    copy_fixture(dir.path(), "missing-selectors.ini", "ko2.ini");

    let mut cmd = cargo_bin_cmd!("radar2csv");
    cmd.arg("convert").arg(dir.path().join("ko2.ini"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("section Selectors is missing"));

    assert!(!dir.path().join("ko2.csv").exists());
}

#[test]
fn test_info_counts() {
    let mut cmd = cargo_bin_cmd!("radar2csv");
    cmd.arg("info").arg(fixture_path("ko1.ini"));
    cmd.assert().success().stdout(
        predicate::str::contains("Buffers:     5")
            .and(predicate::str::contains("Selectors:   2"))
            .and(predicate::str::contains("Tags:        8"))
            .and(predicate::str::contains("Rows:        9 (7 read, 2 write)")),
    );
}

#[test]
fn test_output_encoding_flag_is_rejected() {
    let mut cmd = cargo_bin_cmd!("radar2csv");
    cmd.arg("convert")
        .arg(fixture_path("ko1.ini"))
        .arg("--encoding")
        .arg("utf-8")
        .arg("--dry-run");
    cmd.assert().failure();
}
