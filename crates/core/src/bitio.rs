//! Bit-level output for packing code sequences into bytes.
//!
//! `BitWriter` accumulates individual bits MSB-first and flushes complete
//! bytes to an output buffer. Huffman payloads rarely end on a byte
//! boundary; `finish` right-pads the final partial byte with zero bits, so
//! the consumer must carry the exact bit count separately (the blob stores
//! it in its 4-byte length field).

/// Writes bits MSB-first into a byte buffer.
///
/// # Invariants
/// - `buffer` holds at most 7 pending bits, MSB-aligned
/// - `used` is always < 8
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    buffer: u8,
    used: u8,
}

impl BitWriter {
    /// Create a writer with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with room for `bits` bits preallocated.
    pub fn with_bit_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity((bits + 7) / 8),
            buffer: 0,
            used: 0,
        }
    }

    /// Append a single bit. Any nonzero `bit` writes a 1.
    pub fn push_bit(&mut self, bit: u8) {
        if bit != 0 {
            self.buffer |= 1 << (7 - self.used);
        }
        self.used += 1;

        if self.used == 8 {
            self.bytes.push(self.buffer);
            self.buffer = 0;
            self.used = 0;
        }
    }

    /// Append a sequence of bits (each element 0 or 1) in order.
    pub fn extend_bits(&mut self, bits: &[u8]) {
        for &bit in bits {
            self.push_bit(bit);
        }
    }

    /// Total number of bits written so far, including any partial byte.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.used as usize
    }

    /// Finish writing and return the output bytes.
    ///
    /// A partial final byte is flushed with its unused low bits left as 0
    /// (right padding). Consumes the writer.
    pub fn finish(mut self) -> Vec<u8> {
        if self.used > 0 {
            self.bytes.push(self.buffer);
        }
        self.bytes
    }
}
