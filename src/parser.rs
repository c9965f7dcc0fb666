//! Notation parser: turns one text record into canonical [`Block`]s.
//!
//! Supported shapes:
//! - CIDR `a.b.c.d/n`
//! - wildcard `a.b.*.*` (wildcards only in trailing fields)
//! - binary `<32 x 0|1>/n`
//! - bare dotted-decimal `a.b.c.d` (a /32 host route)

use crate::error::BlockError;
use crate::models::{Block, MAX_LENGTH};
use lazy_static::lazy_static;
use regex::Regex;

const WILDCARD: &str = "*";

lazy_static! {
    static ref DOTTED_RE: Regex =
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("Invalid Regex?");
    static ref WILDCARD_RE: Regex =
        Regex::new(r"^([0-9]+|\*)\.([0-9]+|\*)\.([0-9]+|\*)\.([0-9]+|\*)$")
            .expect("Invalid Regex?");
    static ref BINARY_RE: Regex = Regex::new(r"^[01]{32}$").expect("Invalid Regex?");
}

/// Parse one record in any supported notation.
///
/// Every notation currently yields exactly one block; the `Vec` leaves room
/// for notations that expand to several.
///
/// # Examples
/// ```
/// use cidr_converter::parser::parse_block;
/// let blocks = parse_block("192.168.1.5/24").unwrap();
/// assert_eq!(blocks[0].to_string(), "192.168.1.0/24");
/// ```
pub fn parse_block(text: &str) -> Result<Vec<Block>, BlockError> {
    let text = text.trim();
    let block = match text.split_once('/') {
        Some((_, prefix)) if prefix.contains('/') => {
            return Err(BlockError::InvalidFormat(text.to_string()))
        }
        Some((addr, prefix)) if BINARY_RE.is_match(addr) => parse_binary(text, addr, prefix)?,
        Some((addr, prefix)) => {
            let bits = parse_octets(text, addr)?;
            Block::from_bits(bits, parse_prefix(prefix)?)?
        }
        None if text.contains(WILDCARD) => parse_wildcard(text)?,
        None => Block::from_bits(parse_octets(text, text)?, MAX_LENGTH)?,
    };
    log::trace!("parse_block({text}) -> {block}");
    Ok(vec![block])
}

/// Dotted-decimal address to bits. Shape errors report the whole record.
fn parse_octets(text: &str, addr: &str) -> Result<u32, BlockError> {
    let caps = DOTTED_RE
        .captures(addr)
        .ok_or_else(|| BlockError::InvalidFormat(text.to_string()))?;
    let mut bits = 0u32;
    for field in caps.iter().skip(1).flatten() {
        bits = (bits << 8) | u32::from(parse_octet(field.as_str())?);
    }
    Ok(bits)
}

fn parse_octet(field: &str) -> Result<u8, BlockError> {
    field
        .parse::<u8>()
        .map_err(|_| BlockError::InvalidOctet(field.to_string()))
}

fn parse_prefix(prefix: &str) -> Result<u8, BlockError> {
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BlockError::InvalidPrefix(prefix.to_string()));
    }
    prefix
        .parse::<u8>()
        .ok()
        .filter(|len| *len <= MAX_LENGTH)
        .ok_or_else(|| BlockError::InvalidPrefix(prefix.to_string()))
}

fn parse_wildcard(text: &str) -> Result<Block, BlockError> {
    let caps = WILDCARD_RE
        .captures(text)
        .ok_or_else(|| BlockError::InvalidFormat(text.to_string()))?;
    let mut bits = 0u32;
    let mut wildcards = 0u8;
    for field in caps.iter().skip(1).flatten() {
        let octet = if field.as_str() == WILDCARD {
            wildcards += 1;
            0
        } else if wildcards > 0 {
            return Err(BlockError::NonContiguousWildcard(text.to_string()));
        } else {
            parse_octet(field.as_str())?
        };
        bits = (bits << 8) | u32::from(octet);
    }
    Block::from_bits(bits, MAX_LENGTH - 8 * wildcards)
}

fn parse_binary(text: &str, addr: &str, prefix: &str) -> Result<Block, BlockError> {
    let bits =
        u32::from_str_radix(addr, 2).map_err(|_| BlockError::InvalidFormat(text.to_string()))?;
    Block::from_bits(bits, parse_prefix(prefix)?)
}
