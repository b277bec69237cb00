use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{ghs, no_config, temp_dir, write_fixture};

const MARCH_FIFTH: &str = concat!(
    "\"Tue Mar 5 18:00:00 2024 +0000\",\"Merge branch 'dev' | \",0.5\n",
    "\"Tue Mar 5 17:30:00 2024 +0000\",\"c | \",4.0\n",
    "\"Tue Mar 5 13:30:00 2024 +0000\",\"b | \",4.0\n",
    "\"Tue Mar 5 09:30:00 2024 +0000\",\"a | \",4.0\n",
);

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .expect("file name")
        .to_string_lossy()
        .to_string()
}

#[test]
fn test_cleanup_writes_capped_copy() {
    let input = write_fixture("clean_basic", "csv", MARCH_FIFTH);
    let out_dir = temp_dir("clean_basic");

    ghs()
        .args([
            "--config",
            &no_config("clean_basic"),
            "cleanup",
            &input,
            "--output",
            &out_dir.to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(contains("Done!"));

    let content = fs::read_to_string(out_dir.join(file_name(&input))).expect("read cleaned csv");
    assert_eq!(
        content,
        concat!(
            "\"Tue Mar 5 17:30:00 2024 +0000\",\"c | \",4.0\n",
            "\"Tue Mar 5 13:30:00 2024 +0000\",\"b | \",4.0\n",
        )
    );
}

#[test]
fn test_cleanup_verbose_reports_drops() {
    let input = write_fixture("clean_verbose", "csv", MARCH_FIFTH);
    let out_dir = temp_dir("clean_verbose");

    ghs()
        .args([
            "--config",
            &no_config("clean_verbose"),
            "--verbose",
            "cleanup",
            &input,
            "-o",
            &out_dir.to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(contains("(blacklist)").and(contains("12 hours on Mar 05")));
}

#[test]
fn test_cleanup_dry_run_writes_nothing() {
    let input = write_fixture("clean_dry", "csv", MARCH_FIFTH);
    let out_dir = temp_dir("clean_dry");

    ghs()
        .args([
            "--config",
            &no_config("clean_dry"),
            "cleanup",
            &input,
            "--output",
            &out_dir.to_string_lossy(),
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(contains("\"b | \",4.0").and(contains("\"a | \"").not()));

    assert!(!out_dir.exists());
}

#[test]
fn test_cleanup_cap_spans_files() {
    let first = write_fixture(
        "clean_span_one",
        "csv",
        "\"Tue Mar 5 12:00:00 2024 +0000\",\"repo one | \",6.0\n",
    );
    let second = write_fixture(
        "clean_span_two",
        "csv",
        "\"Tue Mar 5 16:00:00 2024 +0000\",\"repo two | \",6.0\n\
         \"Wed Mar 6 16:00:00 2024 +0000\",\"next day | \",6.0\n",
    );
    let out_dir = temp_dir("clean_span");

    ghs()
        .args([
            "--config",
            &no_config("clean_span"),
            "cleanup",
            &first,
            &second,
            "--output",
            &out_dir.to_string_lossy(),
        ])
        .assert()
        .success();

    let one = fs::read_to_string(out_dir.join(file_name(&first))).expect("read first");
    let two = fs::read_to_string(out_dir.join(file_name(&second))).expect("read second");
    assert!(one.contains("repo one"));
    assert!(!two.contains("repo two"));
    assert!(two.contains("next day"));
}

#[test]
fn test_cleanup_threshold_and_blacklist_options() {
    let input = write_fixture("clean_options", "csv", MARCH_FIFTH);
    let out_dir = temp_dir("clean_options");

    ghs()
        .args([
            "--config",
            &no_config("clean_options"),
            "cleanup",
            &input,
            "--output",
            &out_dir.to_string_lossy(),
            "--max-hours",
            "5",
            "--blacklist",
            "c |",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(out_dir.join(file_name(&input))).expect("read cleaned csv");
    assert_eq!(
        content,
        concat!(
            "\"Tue Mar 5 18:00:00 2024 +0000\",\"Merge branch 'dev' | \",0.5\n",
            "\"Tue Mar 5 13:30:00 2024 +0000\",\"b | \",4.0\n",
        )
    );
}

#[test]
fn test_cleanup_threshold_from_config() {
    let cfg = write_fixture("clean_cfg", "conf", "hours_threshold: 5.0\n");
    let input = write_fixture("clean_cfg", "csv", MARCH_FIFTH);
    let out_dir = temp_dir("clean_cfg");

    ghs()
        .args([
            "--config",
            &cfg,
            "cleanup",
            &input,
            "--output",
            &out_dir.to_string_lossy(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(out_dir.join(file_name(&input))).expect("read cleaned csv");
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("\"c | \",4.0"));
}

#[test]
fn test_cleanup_malformed_file_writes_nothing() {
    let good = write_fixture("clean_bad_good", "csv", MARCH_FIFTH);
    let bad = write_fixture(
        "clean_bad_bad",
        "csv",
        "\"Tue Mar 5 12:00:00 2024 +0000\",\"work | \",many\n",
    );
    let out_dir = temp_dir("clean_bad");

    ghs()
        .args([
            "--config",
            &no_config("clean_bad"),
            "cleanup",
            &good,
            &bad,
            "--output",
            &out_dir.to_string_lossy(),
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid hours value"));

    assert!(!out_dir.exists());
}

#[test]
fn test_cleanup_requires_output() {
    let input = write_fixture("clean_no_out", "csv", MARCH_FIFTH);

    ghs()
        .args(["--config", &no_config("clean_no_out"), "cleanup", &input])
        .assert()
        .failure();
}
