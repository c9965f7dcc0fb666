//! Block set processing.
//!
//! The pipeline stages, each consuming one [`BlockSet`] and returning a new one:
//! - [`dedup`] - sort and drop exact duplicates
//! - [`merge`] - drop blocks contained in another block
//! - [`aggregate`] - combine sibling blocks into their parent, to a fixed point
//!
//! plus [`contains`] for membership queries and [`render`] for output.

mod aggregate;
mod dedup;
mod membership;
mod merge;

// Re-export public functions
pub use aggregate::aggregate;
pub use dedup::dedup;
pub use membership::{contains, contains_addr, parse_address};
pub use merge::merge;

use crate::models::{Block, BlockSet};

/// Full normalisation: dedup, then merge, then aggregate.
pub fn normalize(blocks: Vec<Block>) -> BlockSet {
    let count = blocks.len();
    let set = aggregate(merge(dedup(blocks)));
    log::info!("normalize: {} block(s) in, {} block(s) out", count, set.len());
    set
}

/// Canonical `a.b.c.d/n` strings in set order.
pub fn render(set: &BlockSet) -> Vec<String> {
    set.iter().map(|block| block.to_string()).collect()
}
