//! Sorted, duplicate-free collection of [`Block`]s.

use super::Block;
use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::fmt;

/// Blocks sorted ascending by `(base, prefix)` with no exact duplicates.
///
/// The only ways to build one are [`crate::processing::dedup`] (or collecting
/// an iterator, which goes through it) and the set stages that consume and
/// return a `BlockSet`, so the ordering invariant always holds.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlockSet {
    blocks: Vec<Block>,
}

impl BlockSet {
    /// Wrap blocks that are already sorted and duplicate-free.
    pub(crate) fn from_sorted(blocks: Vec<Block>) -> BlockSet {
        debug_assert!(
            blocks.iter().tuple_windows().all(|(a, b)| a < b),
            "BlockSet requires strictly ascending blocks"
        );
        BlockSet { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn as_slice(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_vec(self) -> Vec<Block> {
        self.blocks
    }

    /// True when some block lies inside another one.
    ///
    /// In a sorted set a nested block always follows a block that contains
    /// it directly, so comparing neighbours is enough.
    pub fn has_nested(&self) -> bool {
        self.blocks
            .iter()
            .tuple_windows()
            .any(|(a, b)| a.contains(b))
    }

    /// True when two neighbouring blocks could be combined into their parent.
    pub fn has_siblings(&self) -> bool {
        self.blocks
            .iter()
            .tuple_windows()
            .any(|(a, b)| a.is_sibling(b))
    }

    /// Total addresses covered, counting overlaps once per block.
    pub fn address_count(&self) -> u64 {
        self.blocks.iter().map(Block::size).sum()
    }
}

impl FromIterator<Block> for BlockSet {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        crate::processing::dedup(iter.into_iter().collect())
    }
}

impl IntoIterator for BlockSet {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a BlockSet {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl Serialize for BlockSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.blocks)
    }
}

impl fmt::Display for BlockSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.blocks.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BlockSet {
        items.iter().map(|s| s.parse::<Block>().unwrap()).collect()
    }

    #[test]
    fn test_collect_sorts_and_dedups() {
        let s = set(&["10.0.1.0/24", "10.0.0.0/24", "10.0.1.0/24", "10.0.0.0/16"]);
        assert_eq!(s.to_string(), "[10.0.0.0/16, 10.0.0.0/24, 10.0.1.0/24]");
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_has_nested() {
        assert!(set(&["10.0.0.0/8", "10.1.0.0/16"]).has_nested());
        assert!(set(&["10.0.0.0/8", "10.1.0.0/16", "11.0.0.0/8"]).has_nested());
        assert!(!set(&["10.0.0.0/8", "11.0.0.0/8"]).has_nested());
    }

    #[test]
    fn test_has_siblings() {
        assert!(set(&["10.0.0.0/24", "10.0.1.0/24"]).has_siblings());
        assert!(!set(&["10.0.1.0/24", "10.0.2.0/24"]).has_siblings());
    }

    #[test]
    fn test_address_count() {
        assert_eq!(set(&["10.0.0.0/24", "10.0.1.0/25"]).address_count(), 384);
        assert_eq!(BlockSet::default().address_count(), 0);
    }

    #[test]
    fn test_serialize() {
        let s = set(&["192.168.0.0/24", "10.0.0.0/8"]);
        assert_eq!(
            serde_json::to_string(&s).unwrap(),
            r#"["10.0.0.0/8","192.168.0.0/24"]"#
        );
    }
}
