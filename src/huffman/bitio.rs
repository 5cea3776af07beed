use crate::huffman::HuffmanError;

/// Appends single bits and fixed-width integers to a growable byte buffer.
///
/// Bits fill each byte MSB-first. The buffer is always byte-granular: the
/// final partial byte is zero-padded the moment its first bit is pushed, so
/// [`into_bytes`](BitWriter::into_bytes) needs no separate flush step.
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_bit(&mut self, bit: bool) {
        let byte_index = self.bit_len / 8;
        let bit_offset = self.bit_len % 8;

        if byte_index >= self.bytes.len() {
            self.bytes.push(0);
        }

        if bit {
            self.bytes[byte_index] |= 1 << (7 - bit_offset);
        }

        self.bit_len += 1;
    }

    /// Pushes the low `width` bits of `value`, most significant first.
    pub fn push_bits(&mut self, value: u64, width: u32) {
        debug_assert!(width <= 64);
        for shift in (0..width).rev() {
            self.push_bit((value >> shift) & 1 == 1);
        }
    }

    /// Number of significant bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Consumes the writer, returning the zero-padded byte buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Consumes single bits and fixed-width integers from a byte slice, MSB-first
/// within each byte. Running off the end of the slice is a [`HuffmanError::CorruptStream`].
#[derive(Debug)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn read_bit(&mut self) -> Result<bool, HuffmanError> {
        let byte_index = self.pos / 8;
        let bit_offset = self.pos % 8;

        let byte = self
            .bytes
            .get(byte_index)
            .copied()
            .ok_or(HuffmanError::CorruptStream("unexpected end of bitstream"))?;

        self.pos += 1;
        Ok(byte & (1 << (7 - bit_offset)) != 0)
    }

    /// Reads `width` bits into the low end of a `u64`, most significant first.
    pub fn read_bits(&mut self, width: u32) -> Result<u64, HuffmanError> {
        debug_assert!(width <= 64);
        let mut value = 0u64;
        for _ in 0..width {
            value = (value << 1) | u64::from(self.read_bit()?);
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_come_back_in_order() {
        let mut w = BitWriter::new();
        w.push_bit(true);
        w.push_bit(false);
        w.push_bit(true);
        w.push_bits(0b1101, 4);
        assert_eq!(w.bit_len(), 7);

        let bytes = w.into_bytes();
        assert_eq!(bytes.len(), 1);

        let mut r = BitReader::new(&bytes);
        assert!(r.read_bit().unwrap());
        assert!(!r.read_bit().unwrap());
        assert!(r.read_bit().unwrap());
        assert_eq!(r.read_bits(4).unwrap(), 0b1101);
    }

    #[test]
    fn partial_byte_is_zero_padded() {
        let mut w = BitWriter::new();
        w.push_bit(true);
        assert_eq!(w.into_bytes(), vec![0b1000_0000]);
    }

    #[test]
    fn wide_field_spans_bytes() {
        let mut w = BitWriter::new();
        w.push_bit(false);
        w.push_bits(0xDEAD_BEEF_0BAD_CAFE, 64);
        let bytes = w.into_bytes();

        let mut r = BitReader::new(&bytes);
        assert!(!r.read_bit().unwrap());
        assert_eq!(r.read_bits(64).unwrap(), 0xDEAD_BEEF_0BAD_CAFE);
    }

    #[test]
    fn reading_past_the_end_fails() {
        let mut r = BitReader::new(&[0xFF]);
        for _ in 0..8 {
            r.read_bit().unwrap();
        }
        assert!(matches!(r.read_bit(), Err(HuffmanError::CorruptStream(_))));
        assert!(matches!(r.read_bits(3), Err(HuffmanError::CorruptStream(_))));
    }
}
