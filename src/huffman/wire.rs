use crate::huffman::HuffmanError;
use crate::huffman::bitio::{BitReader, BitWriter};
use crate::huffman::codebook::{DecodeBook, EncodeBook};
use crate::huffman::tree::HuffNode;

/// Fixed width of one alphabet symbol on the wire. Both ends must agree on
/// this out of band; it is part of the format, not of any one stream.
pub const SYMBOL_BITS: u32 = 8;

/// Width of the payload bit-count field.
const COUNT_BITS: u32 = 64;

/// Deepest tree the reader will reconstruct. An 8-bit alphabet caps a
/// well-formed tree at 255 internal levels, so anything deeper is a malformed
/// stream, not a big alphabet.
const MAX_TREE_DEPTH: usize = 256;

/// Serializes the tree shape pre-order: `1` + the symbol for a leaf, `0`
/// followed by the left then right subtree for an internal node.
pub fn write_tree(node: &HuffNode, writer: &mut BitWriter) {
    match node {
        HuffNode::Leaf { byte } => {
            writer.push_bit(true);
            writer.push_bits(u64::from(*byte), SYMBOL_BITS);
        }
        HuffNode::Internal { left, right } => {
            writer.push_bit(false);
            write_tree(left, writer);
            write_tree(right, writer);
        }
    }
}

/// Mirror of [`write_tree`]: reconstructs shape and leaf symbols. Frequencies
/// are not part of the wire format and are not restored.
///
/// # Errors
///
/// [`HuffmanError::CorruptStream`] when the stream is truncated mid-tree or
/// describes a tree deeper than any 8-bit alphabet allows.
pub fn read_tree(reader: &mut BitReader<'_>) -> Result<HuffNode, HuffmanError> {
    read_node(reader, 0)
}

fn read_node(reader: &mut BitReader<'_>, depth: usize) -> Result<HuffNode, HuffmanError> {
    if depth > MAX_TREE_DEPTH {
        return Err(HuffmanError::CorruptStream("serialized tree exceeds maximum depth"));
    }

    if reader.read_bit()? {
        let byte = reader.read_bits(SYMBOL_BITS)? as u8;
        Ok(HuffNode::leaf(byte))
    } else {
        let left = read_node(reader, depth + 1)?;
        let right = read_node(reader, depth + 1)?;
        Ok(HuffNode::internal(left, right))
    }
}

/// Emits the payload: the total code-bit count as a 64-bit field, then every
/// input byte's code in input order, MSB (path start) first.
///
/// # Errors
///
/// [`HuffmanError::MissingCode`] if a byte has no code in `book`, which can
/// only happen when the book was built from a different input than `data`.
pub fn write_payload(data: &[u8], book: &EncodeBook, writer: &mut BitWriter) -> Result<(), HuffmanError> {
    let mut count: u64 = 0;
    for byte in data.iter().copied() {
        let code = book.code(byte).ok_or(HuffmanError::MissingCode(byte))?;
        count += code.len() as u64;
    }

    writer.push_bits(count, COUNT_BITS);

    for byte in data.iter().copied() {
        let code = book.code(byte).ok_or(HuffmanError::MissingCode(byte))?;
        for bit in code.iter().copied() {
            writer.push_bit(bit);
        }
    }

    Ok(())
}

/// Reads the declared number of payload bits, emitting a byte every time the
/// accumulated path matches a code. Padding bits past the declared count are
/// never touched.
///
/// # Errors
///
/// [`HuffmanError::CorruptStream`] when the stream ends before the declared
/// count is satisfied, when the path outgrows every code in the book without
/// matching, or when bits are left dangling in the path once the count is
/// exhausted.
pub fn read_payload(reader: &mut BitReader<'_>, book: &DecodeBook) -> Result<Vec<u8>, HuffmanError> {
    let declared_bits = reader.read_bits(COUNT_BITS)?;

    let mut output = Vec::new();
    let mut path: Vec<bool> = Vec::new();

    for _ in 0..declared_bits {
        path.push(reader.read_bit()?);

        if let Some(byte) = book.lookup(&path) {
            output.push(byte);
            path.clear();
        } else if path.len() > book.max_code_len() {
            return Err(HuffmanError::CorruptStream("payload bits match no code"));
        }
    }

    if !path.is_empty() {
        return Err(HuffmanError::CorruptStream("payload ends mid-code"));
    }

    Ok(output)
}
