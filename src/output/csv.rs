//! CSV table output for a block set.

use crate::models::{Block, BlockSet};

use super::terminal::format_field;

/// Represents a row of block data for output.
#[derive(Debug)]
pub struct BlockPrintRow {
    /// Row index, starting at 1.
    pub j: usize,
    /// Block in CIDR notation.
    pub cidr: String,
    /// Network address.
    pub first: String,
    /// Broadcast address.
    pub last: String,
    /// Number of addresses in the block.
    pub addresses: u64,
}

impl BlockPrintRow {
    fn new(j: usize, block: &Block) -> BlockPrintRow {
        BlockPrintRow {
            j,
            cidr: block.to_string(),
            first: block.first().to_string(),
            last: block.last().to_string(),
            addresses: block.size(),
        }
    }
}

const HEADER: &str = r#" "cnt",        "cidr",         "first",          "last", "addresses""#;

/// Header plus one formatted line per block.
pub fn block_table(set: &BlockSet) -> Vec<String> {
    let mut lines = Vec::with_capacity(set.len() + 1);
    lines.push(HEADER.to_string());
    lines.extend(
        set.iter()
            .enumerate()
            .map(|(i, block)| format_csv_row(&BlockPrintRow::new(i + 1, block))),
    );
    lines
}

/// Print the block table to stdout.
pub fn print_block_table(set: &BlockSet) {
    log::info!(
        "#Start print_block_table() {} block(s), {} address(es)",
        set.len(),
        set.address_count()
    );
    for line in block_table(set) {
        println!("{line}");
    }
}

fn format_csv_row(row: &BlockPrintRow) -> String {
    format!(
        "{j},{cidr},{first},{last},{addresses}",
        j = format_field(row.j, 6),
        cidr = format_field(&row.cidr, 20),
        first = format_field(&row.first, 17),
        last = format_field(&row.last, 17),
        addresses = format_field(row.addresses, 12),
    )
}
