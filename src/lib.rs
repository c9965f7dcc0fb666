//! cidr-converter - normalise, merge and aggregate IPv4 CIDR blocks.
//!
//! Records in CIDR, wildcard, binary or bare dotted-decimal notation are
//! parsed into canonical [`models::Block`]s, then de-duplicated, merged
//! (nested blocks dropped) and aggregated (sibling blocks combined) into a
//! minimal [`models::BlockSet`] that can be rendered or queried.
//!
//! ```
//! use cidr_converter::{normalize, parse_block, render};
//!
//! let mut blocks = Vec::new();
//! for text in ["192.168.0.0/24", "192.168.1.*", "192.168.1.128/25"] {
//!     blocks.extend(parse_block(text).unwrap());
//! }
//! assert_eq!(render(&normalize(blocks)), vec!["192.168.0.0/23"]);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod parser;
pub mod processing;

pub use error::{BlockError, PipelineError};
pub use models::{Block, BlockSet};
pub use parser::parse_block;
pub use processing::{aggregate, contains, dedup, merge, normalize, render};
