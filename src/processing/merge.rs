//! Subsumption merging: drop blocks that lie inside another block.

use crate::models::{Block, BlockSet};

/// Remove every block contained in a broader block of the set.
///
/// Walks the sorted set keeping the last retained block; a block whose base
/// falls inside that block is dropped. Because CIDR blocks never partially
/// overlap, containing the base means containing the whole block. Disjoint
/// neighbours are left alone.
pub fn merge(set: BlockSet) -> BlockSet {
    let before = set.len();
    let mut kept: Vec<Block> = Vec::with_capacity(before);

    for block in set {
        match kept.last() {
            Some(last) if last.contains_bits(block.base_bits()) => {
                log::trace!("merge: {block} is inside {last}");
            }
            _ => kept.push(block),
        }
    }

    log::debug!("merge: {} -> {} block(s)", before, kept.len());
    BlockSet::from_sorted(kept)
}
