use std::fs;
use std::path::PathBuf;

use moodlens::domain::SegmentationMethod;
use moodlens::error::{ConfigError, Error};
use moodlens::infrastructure::config::{Config, Overrides};
use moodlens::testkit::config::toml_in_dir;

#[test]
fn loads_a_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moodlens.toml");
    fs::write(&path, toml_in_dir(dir.path(), SegmentationMethod::Clustering)).unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.input.sentiment, dir.path().join("sentiment.csv"));
    assert_eq!(config.output.dir, dir.path().join("outputs"));
    assert_eq!(config.segmentation.method, SegmentationMethod::Clustering);
    assert_eq!(config.segmentation.clustering.clusters, 3);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn absent_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("missing.toml")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.input.trades, PathBuf::from("hyperliquid_trades.csv"));
    assert_eq!(config.segmentation.method, SegmentationMethod::Rules);
}

#[test]
fn load_of_absent_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
}

#[test]
fn zero_clusters_is_rejected() {
    let err = Config::parse_toml("[segmentation.clustering]\nclusters = 0\n").unwrap_err();
    match err {
        Error::Config(ConfigError::InvalidValue { field, .. }) => {
            assert_eq!(field, "segmentation.clustering.clusters");
        }
        other => panic!("expected invalid value, got {other:?}"),
    }
}

#[test]
fn unknown_method_is_a_parse_error() {
    let err = Config::parse_toml("[segmentation]\nmethod = \"dbscan\"\n").unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
}

#[test]
fn overrides_replace_file_values_and_revalidate() {
    let config = Config::parse_toml("[output]\ndir = \"reports\"\n").unwrap();

    let applied = config
        .clone()
        .apply(Overrides {
            output: Some(PathBuf::from("elsewhere")),
            method: Some(SegmentationMethod::Clustering),
            seed: Some(7),
            json_logs: true,
            ..Overrides::default()
        })
        .unwrap();
    assert_eq!(applied.output.dir, PathBuf::from("elsewhere"));
    assert_eq!(applied.segmentation.clustering.seed, 7);
    assert_eq!(applied.logging.format, "json");

    let rejected = config.apply(Overrides {
        clusters: Some(0),
        ..Overrides::default()
    });
    assert!(rejected.is_err());
}
