//! Report/chart sink contract.

use crate::domain::{
    AnalysisReport, DailyMetric, LeverageSegmentation, Segmentation, SentimentSummary,
    TraderProfile,
};
use crate::error::Result;

/// Consumer of finished output tables.
///
/// Sinks receive the tables verbatim and own every presentation concern:
/// file paths, formatting, chart styling. Each hook has a no-op default so a
/// sink only implements the tables it renders.
pub trait ReportSink {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn daily_metrics(&mut self, _rows: &[DailyMetric]) -> Result<()> {
        Ok(())
    }

    fn sentiment_summary(&mut self, _rows: &[SentimentSummary]) -> Result<()> {
        Ok(())
    }

    fn leverage_segments(&mut self, _segmentation: &LeverageSegmentation) -> Result<()> {
        Ok(())
    }

    fn profiles(
        &mut self,
        _profiles: &[TraderProfile],
        _segmentation: Option<&Segmentation>,
    ) -> Result<()> {
        Ok(())
    }

    /// Publish a whole report, table by table, in a fixed order.
    fn publish(&mut self, report: &AnalysisReport) -> Result<()> {
        self.daily_metrics(&report.daily_metrics)?;
        self.sentiment_summary(&report.sentiment_summary)?;
        self.leverage_segments(&report.leverage)?;
        self.profiles(&report.profiles, report.segmentation.as_ref())
    }
}
