use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::huffman::HuffmanError;
use crate::huffman::frequency::FrequencyTable;

/// One node of a Huffman code tree.
///
/// Leaves carry exactly one byte of the alphabet; internal nodes carry no
/// payload and own exactly two children. Frequencies live only in the builder
/// queue, not in the tree: once built, only shape and leaf bytes matter, and
/// the tree is never mutated or shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf { byte: u8 },
    Internal { left: Box<HuffNode>, right: Box<HuffNode> },
}

impl HuffNode {
    pub fn leaf(byte: u8) -> Self {
        HuffNode::Leaf { byte }
    }

    pub fn internal(left: HuffNode, right: HuffNode) -> Self {
        HuffNode::Internal {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }
}

/// A pending subtree in the builder's priority queue.
///
/// `merge_key` is the concatenation, in merge order, of every original byte
/// the subtree covers. It is the tie-break when two subtrees have the same
/// aggregate frequency, which keeps the extraction order (and therefore the
/// emitted bitstream) deterministic for inputs like all-unique-byte strings
/// where every leaf starts at frequency 1.
#[derive(Debug, PartialEq, Eq)]
struct QueueEntry {
    frequency: u64,
    merge_key: Vec<u8>,
    node: HuffNode,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then_with(|| self.merge_key.cmp(&other.merge_key))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Builds the Huffman tree for a non-empty frequency table.
///
/// Repeatedly extracts the two lowest-frequency entries, merges them under a
/// new internal node whose frequency is the sum of both children, and
/// reinserts the merge, until one entry remains. The second-extracted entry
/// becomes the left child and the first-extracted the right, matching the
/// layout this format has always produced.
///
/// A table with exactly one distinct byte yields a lone leaf as the root; the
/// codebook layer gives that leaf the fixed one-bit code `0`.
///
/// # Errors
///
/// Returns [`HuffmanError::EmptyAlphabet`] when the table has no entries.
pub fn build_tree(frequencies: &FrequencyTable) -> Result<HuffNode, HuffmanError> {
    if frequencies.is_empty() {
        return Err(HuffmanError::EmptyAlphabet);
    }

    let mut queue: BinaryHeap<Reverse<QueueEntry>> = frequencies
        .iter()
        .map(|(byte, count)| {
            Reverse(QueueEntry {
                frequency: count,
                merge_key: vec![byte],
                node: HuffNode::leaf(byte),
            })
        })
        .collect();

    while queue.len() > 1 {
        let Reverse(first) = queue.pop().ok_or(HuffmanError::EmptyAlphabet)?;
        let Reverse(second) = queue.pop().ok_or(HuffmanError::EmptyAlphabet)?;

        let mut merge_key = second.merge_key;
        merge_key.extend_from_slice(&first.merge_key);

        queue.push(Reverse(QueueEntry {
            frequency: first.frequency + second.frequency,
            merge_key,
            node: HuffNode::internal(second.node, first.node),
        }));
    }

    let Reverse(root) = queue.pop().ok_or(HuffmanError::EmptyAlphabet)?;
    Ok(root.node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_for(data: &[u8]) -> HuffNode {
        build_tree(&FrequencyTable::from_bytes(data)).unwrap()
    }

    fn leaf_depths(node: &HuffNode, depth: usize, out: &mut Vec<(u8, usize)>) {
        match node {
            HuffNode::Leaf { byte } => out.push((*byte, depth)),
            HuffNode::Internal { left, right } => {
                leaf_depths(left, depth + 1, out);
                leaf_depths(right, depth + 1, out);
            }
        }
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = build_tree(&FrequencyTable::from_bytes(&[])).unwrap_err();
        assert!(matches!(err, HuffmanError::EmptyAlphabet));
    }

    #[test]
    fn single_distinct_byte_yields_a_lone_leaf() {
        assert_eq!(tree_for(b"aaaa"), HuffNode::leaf(b'a'));
    }

    #[test]
    fn equal_frequencies_break_ties_deterministically() {
        // both permutations carry the same multiset, so the same tree must
        // come out
        assert_eq!(tree_for(b"ab"), tree_for(b"ba"));
        assert_eq!(tree_for(b"abcd"), tree_for(b"dcba"));
    }

    #[test]
    fn two_symbol_tree_places_lexicographically_smaller_on_the_right() {
        // at frequency 1 each, 'a' is extracted first and becomes the right
        // child
        let tree = tree_for(b"ab");
        assert_eq!(tree, HuffNode::internal(HuffNode::leaf(b'b'), HuffNode::leaf(b'a')));
    }

    #[test]
    fn skewed_frequencies_give_a_skewed_tree() {
        // frequencies 1, 2, 4, 8: every merge pairs the two smallest, so each
        // byte sits one level deeper than the next more frequent one
        let mut data = Vec::new();
        for (byte, count) in [(b'a', 1usize), (b'b', 2), (b'c', 4), (b'd', 8)] {
            data.extend(std::iter::repeat_n(byte, count));
        }
        let tree = tree_for(&data);

        let mut depths = Vec::new();
        leaf_depths(&tree, 0, &mut depths);
        depths.sort_unstable();
        assert_eq!(depths, vec![(b'a', 3), (b'b', 3), (b'c', 2), (b'd', 1)]);
    }

    #[test]
    fn every_distinct_byte_appears_exactly_once() {
        let tree = tree_for(b"This is a test!");
        let mut depths = Vec::new();
        leaf_depths(&tree, 0, &mut depths);

        let mut bytes: Vec<u8> = depths.iter().map(|&(b, _)| b).collect();
        bytes.sort_unstable();

        let mut expected = b"Thisaet! ".to_vec();
        expected.sort_unstable();
        assert_eq!(bytes, expected);
    }
}
