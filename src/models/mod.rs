//! Domain models for cidr-converter.
//!
//! - [`Block`] - canonical IPv4 range (base address, prefix length)
//! - [`BlockSet`] - sorted, duplicate-free collection of blocks

mod block;
mod block_set;

// Re-export public types
pub use block::{cut_addr, get_cidr_mask, Block, MAX_LENGTH};
pub use block_set::BlockSet;
