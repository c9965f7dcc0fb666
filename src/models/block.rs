//! IPv4 block (CIDR range) value type.
//!
//! A [`Block`] is stored as a 32-bit base address plus a prefix length. Host
//! bits are always cleared when a block is built, so every `Block` is in
//! canonical form and two blocks covering the same range compare equal.

use crate::error::BlockError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum prefix length for an IPv4 block (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a prefix length to a network mask as u32.
///
/// # Examples
/// ```
/// use cidr_converter::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, BlockError> {
    if len > MAX_LENGTH {
        Err(BlockError::InvalidPrefix(len.to_string()))
    } else {
        Ok(netmask(len))
    }
}

/// Clear every bit of `bits` beyond the first `len`.
pub fn cut_addr(bits: u32, len: u8) -> Result<u32, BlockError> {
    Ok(bits & get_cidr_mask(len)?)
}

// Callers guarantee len <= MAX_LENGTH.
fn netmask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Canonical IPv4 range: base address with host bits zeroed, and prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash)]
pub struct Block {
    // Field order gives the (base, prefix) sort used by every set stage.
    base: u32,
    prefix: u8,
}

impl Block {
    /// Build a block from an address and prefix, masking off host bits.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Block, BlockError> {
        Block::from_bits(u32::from(addr), prefix)
    }

    /// Build a block from raw address bits, masking off host bits.
    pub fn from_bits(bits: u32, prefix: u8) -> Result<Block, BlockError> {
        let base = cut_addr(bits, prefix)?;
        Ok(Block { base, prefix })
    }

    pub fn base(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.base)
    }

    pub fn base_bits(&self) -> u32 {
        self.base
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Lowest (network) address of the block.
    pub fn first(&self) -> Ipv4Addr {
        self.base()
    }

    /// Highest (broadcast) address of the block.
    pub fn last(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.base | !netmask(self.prefix))
    }

    /// Number of addresses covered; `2^32` for `/0`.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// True when `addr` masked to this block's prefix equals the base.
    pub fn contains_addr(&self, addr: Ipv4Addr) -> bool {
        self.contains_bits(u32::from(addr))
    }

    pub fn contains_bits(&self, bits: u32) -> bool {
        bits & netmask(self.prefix) == self.base
    }

    /// True when `other` lies entirely inside this block (or equals it).
    pub fn contains(&self, other: &Block) -> bool {
        other.prefix >= self.prefix && self.contains_bits(other.base)
    }

    /// The enclosing block one bit shorter; `None` for `/0`.
    pub fn parent(&self) -> Option<Block> {
        let prefix = self.prefix.checked_sub(1)?;
        Some(Block {
            base: self.base & netmask(prefix),
            prefix,
        })
    }

    /// True when `self` and `other` are the two halves of the same parent.
    ///
    /// Both blocks must have the same prefix `p >= 1`, share their first
    /// `p - 1` bits, and sit exactly one block size apart. Two equal-size
    /// blocks that merely touch (e.g. 10.0.1.0/24 and 10.0.2.0/24) are not
    /// siblings.
    pub fn is_sibling(&self, other: &Block) -> bool {
        if self.prefix != other.prefix || self.prefix == 0 {
            return false;
        }
        let parent_mask = netmask(self.prefix - 1);
        if self.base & parent_mask != other.base & parent_mask {
            return false;
        }
        let (left, right) = if self.base < other.base {
            (self.base, other.base)
        } else {
            (other.base, self.base)
        };
        let half = 1u32 << (MAX_LENGTH - self.prefix);
        left & half == 0 && right - left == half
    }
}

impl FromStr for Block {
    type Err = BlockError;

    /// Parse any supported notation; see [`crate::parser::parse_block`].
    fn from_str(s: &str) -> Result<Block, BlockError> {
        crate::parser::parse_block(s)?
            .into_iter()
            .next()
            .ok_or_else(|| BlockError::InvalidFormat(s.to_string()))
    }
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Block, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Block::from_str(&s).map_err(de::Error::custom)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.base(), self.prefix)
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Block({self})")
    }
}
