pub use anyhow::Result;
use core::error::Error;

/// Error emitted by a decompressor while decoding data.
#[derive(Debug)]
pub enum DecompressionError {
    /// Input given to the decompressor was malformed, invalid, or otherwise
    /// incorrect for decoding. The argument describes what went wrong.
    InvalidInput(String),
}

impl Error for DecompressionError {}

impl core::fmt::Display for DecompressionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidInput(message) => {
                write!(f, "input data was malformed, and could not be decoded: {}", message)
            }
        }
    }
}

/// Shared behavior for compressors.
///
/// No guarantee is made about the length of the output of
/// [`compress_bytes`](Compressor::compress_bytes); it can be shorter, equal in
/// length, or longer than the input. The only guarantee is that
/// [`decompress_bytes`](Compressor::decompress_bytes) reconstructs the
/// original data.
pub trait Compressor: 'static {
    /// Compresses a byte slice and returns the encoded data.
    fn compress_bytes(&mut self, data: &[u8]) -> Vec<u8>;

    /// Decompresses a byte slice and returns the decoded data.
    ///
    /// # Errors
    ///
    /// Returns an error if the input data was malformed.
    fn decompress_bytes(&mut self, data: &[u8]) -> Result<Vec<u8>>;

    /// Compresses and immediately decompresses `data`, reporting whether the
    /// round trip reproduced it. Use for sanity checking the compressor and
    /// decompressor against each other.
    fn test_roundtrip<'orig>(&mut self, data: &'orig [u8]) -> Result<RoundTrip<'orig>> {
        let compressed = self.compress_bytes(data);
        let decompressed = self.decompress_bytes(&compressed)?;
        let equal = data == decompressed.as_slice();

        Ok(RoundTrip {
            equal,
            original: data,
            compressed,
            decompressed,
        })
    }
}

/// The artifacts of one round-trip test.
#[derive(Clone, Debug)]
pub struct RoundTrip<'orig> {
    pub(crate) equal: bool,
    pub(crate) original: &'orig [u8],
    pub(crate) compressed: Vec<u8>,
    pub(crate) decompressed: Vec<u8>,
}

impl<'orig> RoundTrip<'orig> {
    /// Whether the original and decompressed data were equal.
    pub const fn is_successful(&self) -> bool {
        self.equal
    }

    /// The data before any action was taken.
    pub const fn original(&self) -> &'orig [u8] {
        self.original
    }

    /// The data after it was encoded by the compressor.
    pub fn compressed(&self) -> &[u8] {
        self.compressed.as_slice()
    }

    /// The data after the encoded form was decoded again.
    pub fn decompressed(&self) -> &[u8] {
        self.decompressed.as_slice()
    }
}
