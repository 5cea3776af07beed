use std::fmt::Display;

use anyhow::anyhow;
use thiserror::Error;

use crate::compressor::{Compressor, DecompressionError, Result};
use crate::huffman::bitio::{BitReader, BitWriter};
use crate::huffman::codebook::{DecodeBook, EncodeBook};
use crate::huffman::frequency::FrequencyTable;
use crate::huffman::tree::build_tree;
use crate::huffman::wire::{read_payload, read_tree, write_payload, write_tree};

pub mod bitio;
pub mod codebook;
pub mod frequency;
pub mod tree;
pub mod wire;

/// Errors emitted by the Huffman encoder and decoder.
///
/// Every failure is terminal for its call; no state survives between calls,
/// so a failed decode can never poison a later one.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// No symbols to build a code from: the frequency table was empty.
    #[error("cannot build a Huffman code over an empty alphabet")]
    EmptyAlphabet,

    /// The bitstream does not describe a well-formed tree plus payload.
    #[error("corrupt bitstream: {0}")]
    CorruptStream(&'static str),

    /// A byte of the input has no code in the encode book. Only reachable
    /// when the book was derived from a different input sequence.
    #[error("byte {0:#04x} has no assigned code")]
    MissingCode(u8),
}

/// Canonical Huffman coding over byte streams.
///
/// One compress call builds the frequency table, the code tree and the encode
/// book from scratch, then writes the serialized tree followed by the payload
/// into a single bitstream. Decompression reverses the exact same layout.
#[derive(Clone)]
pub struct HuffmanCoding;

impl Compressor for HuffmanCoding {
    fn compress_bytes(&mut self, data: &[u8]) -> Vec<u8> {
        self.huffman_encode(data)
    }

    fn decompress_bytes(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        self.huffman_decode(data)
            .map_err(|e| anyhow!(DecompressionError::InvalidInput(e.to_string())))
    }
}

impl Display for HuffmanCoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Huffman Coding")
    }
}

impl HuffmanCoding {
    /// Encodes `data` as a serialized code tree followed by the coded
    /// payload, zero-padded to the next byte boundary.
    ///
    /// The empty input encodes to the empty stream; that sentinel is the only
    /// stream with no embedded tree.
    pub fn huffman_encode(&mut self, data: &[u8]) -> Vec<u8> {
        if data.is_empty() {
            return Vec::new();
        }

        let frequencies = FrequencyTable::from_bytes(data);
        // the table is non-empty whenever the input is, and the book covers
        // every byte of the very input it was built from
        let Ok(tree) = build_tree(&frequencies) else {
            return Vec::new();
        };
        let book = EncodeBook::from_tree(&tree);

        let mut writer = BitWriter::new();
        write_tree(&tree, &mut writer);
        if write_payload(data, &book, &mut writer).is_err() {
            return Vec::new();
        }

        writer.into_bytes()
    }

    /// Decodes a stream produced by [`huffman_encode`](Self::huffman_encode).
    ///
    /// # Errors
    ///
    /// [`HuffmanError::CorruptStream`] when the stream is truncated or its
    /// bits stop corresponding to the embedded tree.
    pub fn huffman_decode(&mut self, data: &[u8]) -> Result<Vec<u8>, HuffmanError> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let mut reader = BitReader::new(data);
        let tree = read_tree(&mut reader)?;
        let book = DecodeBook::from_tree(&tree);
        read_payload(&mut reader, &book)
    }
}
