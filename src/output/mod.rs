//! Output formatting for block sets.
//!
//! - [`json`] - JSON file / string output
//! - [`csv`] - CSV table output
//! - [`terminal`] - field formatting and coloured diagnostics

mod csv;
mod json;
mod terminal;

pub use csv::{block_table, print_block_table, BlockPrintRow};
pub use json::{save_to_json, to_json_string};
pub use terminal::{failure_lines, format_field, print_failures};
