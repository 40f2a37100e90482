//! Moodlens - trader behaviour versus market sentiment.
//!
//! Joins a daily fear/greed sentiment index with a trade log, computes
//! per-account daily metrics, compares them across sentiment classes and
//! leverage cohorts, and labels each account with a behavioural archetype.
//!
//! # Architecture
//!
//! - [`domain`] - Records, metrics, profiles and archetypes
//! - [`application`] - Merge, aggregation, profiling and classification
//! - [`port`] - The data source and report sink contracts
//! - [`adapter`] - CSV loader and writer, command-line interface
//! - [`infrastructure`] - Configuration and logging
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use moodlens::adapter::outbound::csv::{CsvSink, CsvSource};
//! use moodlens::application::classifier::RuleClassifier;
//! use moodlens::application::Pipeline;
//! use moodlens::port::ReportSink;
//!
//! fn main() -> moodlens::error::Result<()> {
//!     let source = CsvSource::new("fear_greed.csv", "hyperliquid_trades.csv");
//!     let report = Pipeline::new()
//!         .with_classifier(Box::new(RuleClassifier))
//!         .run(&source)?;
//!     CsvSink::new("outputs").publish(&report)
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
