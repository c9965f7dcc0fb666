//! Point-in-range membership queries.

use crate::error::BlockError;
use crate::models::{Block, BlockSet};
use std::net::Ipv4Addr;

/// Blocks of `set` that contain `address`, in set order.
///
/// On a merged set there is at most one match. An unmerged set may return
/// several (e.g. both a /8 and a /24 inside it).
pub fn contains(set: &BlockSet, address: &str) -> Result<Vec<Block>, BlockError> {
    let addr = parse_address(address)?;
    Ok(contains_addr(set, addr))
}

pub fn contains_addr(set: &BlockSet, addr: Ipv4Addr) -> Vec<Block> {
    set.iter()
        .filter(|block| block.contains_addr(addr))
        .copied()
        .collect()
}

/// Parse a dotted-quad IPv4 literal.
pub fn parse_address(address: &str) -> Result<Ipv4Addr, BlockError> {
    let address = address.trim();
    address
        .parse::<Ipv4Addr>()
        .map_err(|_| BlockError::InvalidAddress(address.to_string()))
}
