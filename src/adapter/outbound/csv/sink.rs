//! Writes the output tables as CSV files into one directory.

use std::fs;
use std::path::PathBuf;

use csv::Writer;
use tracing::info;

use crate::domain::stats::round_to;
use crate::domain::{
    DailyMetric, LeverageSegmentation, Segmentation, SegmentationMethod, SentimentSummary,
    TraderProfile,
};
use crate::error::Result;
use crate::port::ReportSink;

pub const DAILY_METRICS_FILE: &str = "daily_metrics.csv";
pub const SUMMARY_FILE: &str = "fear_vs_greed_summary.csv";
pub const SEGMENTS_FILE: &str = "segment_analysis.csv";
pub const RULES_PROFILES_FILE: &str = "clustering_simple_results.csv";
pub const CLUSTER_PROFILES_FILE: &str = "clustering_results.csv";
pub const PROFILES_FILE: &str = "trader_profiles.csv";

const SUMMARY_DECIMALS: i32 = 4;

/// File name of the profile table for a segmentation method.
#[must_use]
pub fn profiles_file(method: Option<SegmentationMethod>) -> &'static str {
    match method {
        Some(SegmentationMethod::Rules) => RULES_PROFILES_FILE,
        Some(SegmentationMethod::Clustering) => CLUSTER_PROFILES_FILE,
        None => PROFILES_FILE,
    }
}

/// CSV writer for every output table.
///
/// Rows are written in the order received, which is already sorted by key,
/// so identical inputs give byte-identical files.
#[derive(Debug)]
pub struct CsvSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl CsvSink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Files written so far, in order.
    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write(&mut self, file: &str, header: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file);
        let mut writer = Writer::from_path(&path)?;
        writer.write_record(header)?;
        for row in &rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = rows.len(), "wrote table");
        self.written.push(path);
        Ok(())
    }
}

impl ReportSink for CsvSink {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn daily_metrics(&mut self, rows: &[DailyMetric]) -> Result<()> {
        let rows = rows
            .iter()
            .map(|m| {
                vec![
                    m.account.to_string(),
                    m.date.format("%Y-%m-%d").to_string(),
                    m.classification.clone(),
                    m.daily_pnl.to_string(),
                    m.trades_count.to_string(),
                    m.avg_leverage.to_string(),
                    m.avg_size.to_string(),
                    m.win_rate.to_string(),
                ]
            })
            .collect();
        self.write(
            DAILY_METRICS_FILE,
            &[
                "account",
                "date",
                "classification",
                "daily_pnl",
                "trades_count",
                "avg_leverage",
                "avg_size",
                "win_rate",
            ],
            rows,
        )
    }

    fn sentiment_summary(&mut self, rows: &[SentimentSummary]) -> Result<()> {
        let round = |v: f64| round_to(v, SUMMARY_DECIMALS).to_string();
        let rows = rows
            .iter()
            .map(|s| {
                vec![
                    s.classification.clone(),
                    round(s.daily_pnl),
                    round(s.trades_count),
                    round(s.avg_leverage),
                    round(s.avg_size),
                    round(s.win_rate),
                ]
            })
            .collect();
        self.write(
            SUMMARY_FILE,
            &[
                "classification",
                "daily_pnl",
                "trades_count",
                "avg_leverage",
                "avg_size",
                "win_rate",
            ],
            rows,
        )
    }

    fn leverage_segments(&mut self, segmentation: &LeverageSegmentation) -> Result<()> {
        let matrix = &segmentation.matrix;
        let mut header = vec!["leverage_group"];
        header.extend(matrix.classifications.iter().map(String::as_str));

        let rows = matrix
            .rows
            .iter()
            .map(|row| {
                std::iter::once(row.cohort.label().to_owned())
                    .chain(row.values.iter().map(f64::to_string))
                    .collect::<Vec<_>>()
            })
            .collect();
        self.write(SEGMENTS_FILE, &header, rows)
    }

    fn profiles(
        &mut self,
        profiles: &[TraderProfile],
        segmentation: Option<&Segmentation>,
    ) -> Result<()> {
        let rows = profiles
            .iter()
            .map(|p| {
                let assignment = segmentation.and_then(|s| s.assignment(&p.account));
                vec![
                    p.account.to_string(),
                    p.total_pnl.to_string(),
                    p.avg_pnl.to_string(),
                    optional(p.std_pnl),
                    p.avg_leverage.to_string(),
                    p.avg_size.to_string(),
                    p.trade_count.to_string(),
                    p.win_rate.to_string(),
                    p.sentiment_reaction.to_string(),
                    assignment
                        .and_then(|a| a.cluster)
                        .map(|c| c.to_string())
                        .unwrap_or_default(),
                    assignment.map(|a| a.archetype.clone()).unwrap_or_default(),
                    assignment
                        .and_then(|a| a.leverage_policy)
                        .unwrap_or_default()
                        .to_owned(),
                ]
            })
            .collect();
        self.write(
            profiles_file(segmentation.map(|s| s.method)),
            &[
                "account",
                "total_pnl",
                "avg_pnl",
                "std_pnl",
                "avg_leverage",
                "avg_size",
                "trade_count",
                "win_rate",
                "sentiment_reaction",
                "cluster",
                "archetype",
                "leverage_policy",
            ],
            rows,
        )
    }
}

/// Undefined values are written as an empty cell.
fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
