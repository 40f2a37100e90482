//! Infrastructure configuration modules.

pub mod io;
pub mod logging;
pub mod segmentation;
pub mod settings;

pub use io::{InputConfig, OutputConfig};
pub use logging::LoggingConfig;
pub use segmentation::{ClusteringConfig, SegmentationConfig};
pub use settings::{Config, Overrides, DEFAULT_CONFIG_PATH};
