use std::collections::HashMap;

use crate::huffman::tree::HuffNode;

/// Root-to-leaf walk shared by both codebook builders. Descending left
/// appends `false` (0), descending right `true` (1), and `visit` fires once
/// per leaf with the accumulated path.
///
/// A tree whose root is itself a leaf (single-byte alphabet) gets the fixed
/// one-bit path `0`; an empty code would be unencodable.
fn visit_leaves(node: &HuffNode, path: &mut Vec<bool>, visit: &mut impl FnMut(u8, &[bool])) {
    match node {
        HuffNode::Leaf { byte } => {
            if path.is_empty() {
                visit(*byte, &[false]);
            } else {
                visit(*byte, path);
            }
        }
        HuffNode::Internal { left, right } => {
            path.push(false);
            visit_leaves(left, path, visit);
            path.pop();

            path.push(true);
            visit_leaves(right, path, visit);
            path.pop();
        }
    }
}

/// Byte-to-code mapping used while encoding. Codes are prefix-free by
/// construction since they are only ever minted at the leaves of a binary
/// tree.
#[derive(Debug, Clone)]
pub struct EncodeBook {
    codes: HashMap<u8, Vec<bool>>,
}

impl EncodeBook {
    pub fn from_tree(root: &HuffNode) -> Self {
        let mut codes = HashMap::new();
        visit_leaves(root, &mut Vec::new(), &mut |byte, path| {
            codes.insert(byte, path.to_vec());
        });
        Self { codes }
    }

    pub fn code(&self, byte: u8) -> Option<&[bool]> {
        self.codes.get(&byte).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &[bool])> + '_ {
        self.codes.iter().map(|(&b, code)| (b, code.as_slice()))
    }
}

/// Code-to-byte mapping used while decoding, the inverse of [`EncodeBook`]
/// for the same tree.
#[derive(Debug, Clone)]
pub struct DecodeBook {
    bytes: HashMap<Vec<bool>, u8>,
    max_code_len: usize,
}

impl DecodeBook {
    pub fn from_tree(root: &HuffNode) -> Self {
        let mut bytes = HashMap::new();
        let mut max_code_len = 0;
        visit_leaves(root, &mut Vec::new(), &mut |byte, path| {
            max_code_len = max_code_len.max(path.len());
            bytes.insert(path.to_vec(), byte);
        });
        Self { bytes, max_code_len }
    }

    pub fn lookup(&self, path: &[bool]) -> Option<u8> {
        self.bytes.get(path).copied()
    }

    /// Length of the longest code in the book. An accumulated decode path
    /// longer than this can never match and marks the stream as corrupt.
    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }
}
