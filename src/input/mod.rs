//! Reading and parsing input records.
//!
//! - [`source`] - stdin, CSV and JSON readers producing [`Record`]s
//! - [`pool`] - worker pool that parses records into blocks

mod pool;
mod source;

// Re-export public types and functions
pub use pool::{parse_chunk, ParseOutcome, ParsePool, RecordError};
pub use source::{parse_json_records, read_csv, read_lines, Record, Source};
