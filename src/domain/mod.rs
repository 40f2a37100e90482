//! Data-source-agnostic domain types.

mod archetype;
mod id;
mod metric;
mod profile;
mod report;
mod sentiment;
mod trade;

pub mod stats;
pub mod time;

pub use archetype::{
    Archetype, ArchetypeAssignment, ClusterArchetype, GroupSummary, Segmentation,
    SegmentationMethod,
};
pub use id::AccountId;
pub use metric::{
    DailyMetric, LeverageCohort, LeverageSegmentation, SegmentMatrix, SegmentRow,
    SentimentSummary,
};
pub use profile::{TraderProfile, FEATURE_COUNT, FEATURE_NAMES};
pub use report::AnalysisReport;
pub use sentiment::{is_fear, SentimentRecord, FEAR_TOKEN};
pub use trade::{MergedTrade, TradeRecord};
