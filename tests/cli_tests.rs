mod support;

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

use support::{write_inputs, write_population, write_two_day};

/// `moodlens <command>` reading inputs from `dir` with no config file.
fn moodlens(command: &str, dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("moodlens").unwrap();
    cmd.arg(command)
        .arg("--config")
        .arg(dir.join("none.toml"))
        .arg("--sentiment")
        .arg(dir.join("sentiment.csv"))
        .arg("--trades")
        .arg(dir.join("trades.csv"))
        .arg("--color")
        .arg("never");
    cmd
}

#[test]
fn help_lists_commands() {
    Command::cargo_bin("moodlens")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("segment"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn analyze_writes_four_tables() {
    let dir = tempfile::tempdir().unwrap();
    write_two_day(dir.path());
    let out = dir.path().join("out");

    moodlens("analyze", dir.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentiment summary"))
        .stdout(predicate::str::contains("daily_metrics.csv"));

    for file in [
        "daily_metrics.csv",
        "fear_vs_greed_summary.csv",
        "segment_analysis.csv",
        "clustering_simple_results.csv",
    ] {
        assert!(out.join(file).exists(), "{file} missing");
    }
    assert_eq!(
        fs::read_to_string(out.join("segment_analysis.csv")).unwrap(),
        "leverage_group,Fear,Greed\nHigh Leverage,0,3\nLow Leverage,5,0\n"
    );
}

#[test]
fn segment_with_clustering_writes_cluster_table_only() {
    let dir = tempfile::tempdir().unwrap();
    write_population(dir.path());
    let out = dir.path().join("out");

    moodlens("segment", dir.path())
        .args(["--method", "clustering", "--seed", "42"])
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("High Risk Taker"));

    assert!(out.join("clustering_results.csv").exists());
    assert!(!out.join("daily_metrics.csv").exists());
}

#[test]
fn missing_column_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(
        dir.path(),
        "date,classification\n2024-01-01,Fear\n",
        "account,time,closedPnL,size\nA,2024-01-01 10:00,1,1\n",
    );
    let out = dir.path().join("out");

    moodlens("analyze", dir.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("leverage"));

    assert!(!out.exists());
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    moodlens("analyze", dir.path())
        .arg("-o")
        .arg(dir.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("sentiment"));
}

#[test]
fn check_reports_duplicates_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(
        dir.path(),
        "date,classification\n2024-01-01,Fear\n2024-01-01,Fear\n",
        "account,time,closedPnL,leverage,size\nA,2024-01-01 10:00,1,1,1\n",
    );

    moodlens("check", dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("sentiment table"))
        .stdout(predicate::str::contains("2024-01-01 appears 2 times"));
}

#[test]
fn check_json_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    write_two_day(dir.path());

    let assert = moodlens("check", dir.path()).arg("--json").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();

    assert_eq!(value["command"], "check");
    assert_eq!(value["tables"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["tables"][1]["records"], 3);
}

#[test]
fn invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_two_day(dir.path());
    let config = dir.path().join("moodlens.toml");
    fs::write(&config, "[segmentation.clustering]\nclusters = 0\n").unwrap();

    Command::cargo_bin("moodlens")
        .unwrap()
        .arg("analyze")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("segmentation.clustering.clusters"));
}

#[test]
fn config_file_supplies_paths() {
    let dir = tempfile::tempdir().unwrap();
    write_population(dir.path());
    let config = dir.path().join("moodlens.toml");
    fs::write(
        &config,
        moodlens::testkit::config::toml_in_dir(
            dir.path(),
            moodlens::domain::SegmentationMethod::Clustering,
        ),
    )
    .unwrap();

    Command::cargo_bin("moodlens")
        .unwrap()
        .args(["-q", "analyze", "--config"])
        .arg(&config)
        .assert()
        .success();

    assert!(dir.path().join("outputs/clustering_results.csv").exists());
}
