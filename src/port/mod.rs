//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The analysis core never touches files or terminals directly. It reads its
//! two input tables through a [`DataSource`] and hands finished tables to one
//! or more [`ReportSink`]s.
//!
//! ```text
//!   ┌────────────┐      ┌──────────────────┐      ┌──────────────┐
//!   │ DataSource │ ───▶ │   Application    │ ───▶ │  ReportSink  │
//!   │ (CSV, ...) │      │ merge/aggregate/ │      │ (CSV files,  │
//!   └────────────┘      │ profile/classify │      │  terminal)   │
//!                       └──────────────────┘      └──────────────┘
//! ```

pub mod outbound;

pub use outbound::report::ReportSink;
pub use outbound::source::{DataSource, RawTable};
