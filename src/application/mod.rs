//! Application services (use cases).
//!
//! Pure functions over domain records, composed by [`pipeline::Pipeline`].
//! Nothing here touches files or the terminal.

pub mod classifier;
pub mod daily;
pub mod leverage;
pub mod merge;
pub mod pipeline;
pub mod profile;
pub mod quality;
pub mod summary;

pub use pipeline::Pipeline;
