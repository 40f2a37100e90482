//! Terminal rendering of the report: text bar charts, distribution boxes
//! and tables.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::output;
use crate::domain::stats::FiveNumberSummary;
use crate::domain::{
    DailyMetric, LeverageSegmentation, Segmentation, SentimentSummary, TraderProfile,
};
use crate::error::Result;
use crate::port::ReportSink;

const BAR_WIDTH: usize = 30;

/// Renders every table to stdout, or as JSON lines in `--json` mode.
#[derive(Debug, Default)]
pub struct TerminalChartSink;

impl ReportSink for TerminalChartSink {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn daily_metrics(&mut self, rows: &[DailyMetric]) -> Result<()> {
        let leverage = distributions(rows, |m| m.avg_leverage);
        let pnl = distributions(rows, |m| m.daily_pnl);

        if output::is_json() {
            output::json_output(json!({
                "table": "distributions",
                "rows": rows.len(),
                "avg_leverage": serde_json::to_value(&leverage)?,
                "daily_pnl": serde_json::to_value(&pnl)?,
            }));
            return Ok(());
        }
        if !output::is_human() {
            return Ok(());
        }

        output::section("Daily metrics");
        output::field("Rows", rows.len());
        if rows.is_empty() {
            output::hint("no trades matched a sentiment date");
            return Ok(());
        }
        output::section("Leverage distribution by sentiment");
        output::lines(&distribution_table(&leverage));
        output::section("Daily PnL distribution by sentiment");
        output::lines(&distribution_table(&pnl));
        Ok(())
    }

    fn sentiment_summary(&mut self, rows: &[SentimentSummary]) -> Result<()> {
        if output::is_json() {
            output::json_output(json!({
                "table": "sentiment_summary",
                "rows": serde_json::to_value(rows)?,
            }));
            return Ok(());
        }
        if !output::is_human() || rows.is_empty() {
            return Ok(());
        }

        output::section("Sentiment summary");
        let table = Table::new(rows.iter().map(SummaryRow::from))
            .with(Style::rounded())
            .to_string();
        output::lines(&table);

        let charts: [(&str, fn(&SentimentSummary) -> f64); 4] = [
            ("Average daily PnL", |s| s.daily_pnl),
            ("Win rate", |s| s.win_rate),
            ("Average leverage", |s| s.avg_leverage),
            ("Average trades per day", |s| s.trades_count),
        ];
        for (title, value) in charts {
            output::section(title);
            let bars: Vec<(&str, f64)> = rows
                .iter()
                .map(|s| (s.classification.as_str(), value(s)))
                .collect();
            output::lines(&bar_chart(&bars));
        }
        Ok(())
    }

    fn leverage_segments(&mut self, segmentation: &LeverageSegmentation) -> Result<()> {
        if output::is_json() {
            output::json_output(json!({
                "table": "leverage_segments",
                "segmentation": serde_json::to_value(segmentation)?,
            }));
            return Ok(());
        }
        if !output::is_human() || segmentation.matrix.is_empty() {
            return Ok(());
        }

        output::section("Mean daily PnL by leverage cohort");
        output::field("Median leverage", output::number(segmentation.median_leverage, 2));

        let matrix = &segmentation.matrix;
        let mut builder = Builder::default();
        builder.push_record(
            std::iter::once("leverage_group".to_string())
                .chain(matrix.classifications.iter().cloned()),
        );
        for row in &matrix.rows {
            builder.push_record(
                std::iter::once(row.cohort.label().to_string())
                    .chain(row.values.iter().map(|v| format!("{v:.2}"))),
            );
        }
        output::lines(&builder.build().with(Style::rounded()).to_string());
        Ok(())
    }

    fn profiles(
        &mut self,
        profiles: &[TraderProfile],
        segmentation: Option<&Segmentation>,
    ) -> Result<()> {
        if output::is_json() {
            output::json_output(json!({
                "table": "profiles",
                "profiles": serde_json::to_value(profiles)?,
                "segmentation": serde_json::to_value(segmentation)?,
            }));
            return Ok(());
        }
        if !output::is_human() {
            return Ok(());
        }

        output::section("Trader profiles");
        output::field("Accounts", profiles.len());
        if profiles.is_empty() {
            return Ok(());
        }
        let rows = profiles.iter().map(|p| ProfileRow::new(p, segmentation));
        output::lines(&Table::new(rows).with(Style::rounded()).to_string());

        let Some(segmentation) = segmentation else {
            return Ok(());
        };
        output::section(&format!("Archetypes ({})", segmentation.method));
        for group in &segmentation.groups {
            let title = match group.cluster {
                Some(id) => format!("Cluster {id}: {}", group.label),
                None => group.label.clone(),
            };
            output::lines(&output::highlight(title));
            output::field("Accounts", group.accounts.len());
            output::field("Avg leverage", format!("{:.2}", group.avg_leverage));
            output::field("Avg trades", format!("{:.1}", group.avg_trade_count));
            output::field("Win rate", format!("{:.2}", group.win_rate));
            output::field("Sentiment", format!("{:.2}", group.sentiment_reaction));
            output::field(
                "Avg PnL",
                output::signed(group.avg_pnl, format!("{:.2}", group.avg_pnl)),
            );
            if let Some(policy) = group.leverage_policy {
                output::field("Policy", policy);
            }
        }
        Ok(())
    }
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Sentiment")]
    classification: String,
    #[tabled(rename = "Daily PnL")]
    daily_pnl: String,
    #[tabled(rename = "Trades/day")]
    trades: String,
    #[tabled(rename = "Leverage")]
    leverage: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Win rate")]
    win_rate: String,
}

impl From<&SentimentSummary> for SummaryRow {
    fn from(s: &SentimentSummary) -> Self {
        Self {
            classification: s.classification.clone(),
            daily_pnl: format!("{:.2}", s.daily_pnl),
            trades: format!("{:.2}", s.trades_count),
            leverage: format!("{:.2}", s.avg_leverage),
            size: format!("{:.2}", s.avg_size),
            win_rate: format!("{:.2}", s.win_rate),
        }
    }
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Trades")]
    trades: usize,
    #[tabled(rename = "Total PnL")]
    total_pnl: String,
    #[tabled(rename = "PnL std")]
    std_pnl: String,
    #[tabled(rename = "Leverage")]
    leverage: String,
    #[tabled(rename = "Win rate")]
    win_rate: String,
    #[tabled(rename = "Reaction")]
    reaction: String,
    #[tabled(rename = "Archetype")]
    archetype: String,
}

impl ProfileRow {
    fn new(p: &TraderProfile, segmentation: Option<&Segmentation>) -> Self {
        Self {
            account: p.account.to_string(),
            trades: p.trade_count,
            total_pnl: format!("{:.2}", p.total_pnl),
            std_pnl: output::number(p.std_pnl, 2),
            leverage: format!("{:.2}", p.avg_leverage),
            win_rate: format!("{:.2}", p.win_rate),
            reaction: format!("{:.2}", p.sentiment_reaction),
            archetype: segmentation
                .and_then(|s| s.assignment(&p.account))
                .map(|a| a.archetype.clone())
                .unwrap_or_default(),
        }
    }
}

/// Five-number summary of one column, per classification.
#[derive(Debug, Serialize)]
struct Distribution {
    classification: String,
    count: usize,
    #[serde(flatten)]
    summary: Option<FiveNumberSummary>,
}

fn distributions(rows: &[DailyMetric], value: fn(&DailyMetric) -> f64) -> Vec<Distribution> {
    let mut by_class: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for row in rows {
        by_class
            .entry(row.classification.as_str())
            .or_default()
            .push(value(row));
    }
    by_class
        .into_iter()
        .map(|(classification, values)| Distribution {
            classification: classification.to_owned(),
            count: values.len(),
            summary: FiveNumberSummary::of(&values),
        })
        .collect()
}

fn distribution_table(distributions: &[Distribution]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Sentiment", "n", "min", "Q1", "median", "Q3", "max"].map(String::from));
    for d in distributions {
        let cell = |f: fn(&FiveNumberSummary) -> f64| output::number(d.summary.as_ref().map(f), 2);
        builder.push_record([
            d.classification.clone(),
            d.count.to_string(),
            cell(|s| s.min),
            cell(|s| s.q1),
            cell(|s| s.median),
            cell(|s| s.q3),
            cell(|s| s.max),
        ]);
    }
    builder.build().with(Style::rounded()).to_string()
}

/// Horizontal bars scaled to the largest magnitude. Negative values draw
/// with a lighter glyph.
fn bar_chart(bars: &[(&str, f64)]) -> String {
    let label_width = bars.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let scale = bars.iter().map(|(_, v)| v.abs()).fold(0.0, f64::max);

    bars.iter()
        .map(|(label, value)| {
            let len = if scale > 0.0 {
                ((value.abs() / scale) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            let glyph = if *value < 0.0 { "░" } else { "█" };
            format!(
                "{label:<label_width$} {bar:<width$} {shown}",
                bar = glyph.repeat(len),
                width = BAR_WIDTH,
                shown = output::signed(*value, format!("{value:.2}")),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
