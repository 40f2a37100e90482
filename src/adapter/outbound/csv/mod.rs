//! Flat-file adapters: the CSV data loader and the CSV table writer.

pub mod sink;
pub mod source;
pub mod table;

pub use sink::CsvSink;
pub use source::CsvSource;
