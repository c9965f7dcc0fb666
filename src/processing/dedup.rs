//! Exact-duplicate removal.

use crate::models::{Block, BlockSet};

/// Sort blocks by `(base, prefix)` and drop exact duplicates.
///
/// The resulting order (broader blocks first on equal base) is the canonical
/// order every later stage relies on.
pub fn dedup(mut blocks: Vec<Block>) -> BlockSet {
    let before = blocks.len();

    // Dedup only removes neighbours - must be sorted first
    blocks.sort_unstable();
    blocks.dedup();

    if blocks.len() < before {
        log::debug!("dedup: removed {} duplicate block(s)", before - blocks.len());
    }
    BlockSet::from_sorted(blocks)
}
