//! Sibling aggregation: combine bit-aligned neighbours into their parent.

use super::{dedup, merge};
use crate::models::{Block, BlockSet};

/// Combine sibling blocks until no pair is left.
///
/// Each pass walks the sorted set once. When a block is the right-hand
/// sibling of the last kept block, both are replaced by their parent, and the
/// parent is tried against the block before it (so four /24s become a /22 in
/// one walk). After every pass the result is sorted, de-duplicated and merged
/// again; passes repeat until one combines nothing.
pub fn aggregate(set: BlockSet) -> BlockSet {
    let mut set = merge(set);
    let mut pass = 0;

    loop {
        pass += 1;
        let (blocks, combined) = aggregate_pass(set.into_vec());
        set = merge(dedup(blocks));
        log::debug!(
            "aggregate: pass {pass} combined {combined} pair(s), {} block(s) left",
            set.len()
        );
        if combined == 0 {
            break;
        }
    }

    debug_assert!(!set.has_siblings(), "aggregate left a sibling pair");
    set
}

/// One left-to-right walk. Returns the new blocks and how many pairs combined.
fn aggregate_pass(blocks: Vec<Block>) -> (Vec<Block>, usize) {
    let mut out: Vec<Block> = Vec::with_capacity(blocks.len());
    let mut combined = 0;

    for block in blocks {
        let mut current = block;
        loop {
            // Input is sorted, so `last` is always the left half.
            let parent = match out.last() {
                Some(last) if last.is_sibling(&current) => last.parent(),
                _ => None,
            };
            match parent {
                Some(parent) => {
                    log::trace!("aggregate: {} + {current} -> {parent}", out[out.len() - 1]);
                    out.pop();
                    combined += 1;
                    current = parent;
                }
                None => break,
            }
        }
        out.push(current);
    }

    (out, combined)
}
