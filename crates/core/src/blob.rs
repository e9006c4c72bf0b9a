//! Blob layout and packing.
//!
//! The encoder's only artifact is a self-describing byte blob holding the
//! code table followed by the packed payload:
//!
//! ```text
//! +--------------------+
//! | unique count (1)   |  u8 number of table records, N
//! +--------------------+
//! | record 0 (3)       |  symbol (1) | code length (1) | code bits (1)
//! | ...                |  code bits are right-aligned in their byte
//! | record N-1 (3)     |
//! +--------------------+
//! | payload bits (4)   |  u32 big-endian, bit count (not byte count)
//! +--------------------+
//! | payload            |  code bits packed MSB-first; final partial
//! | (variable)         |  byte right-padded with 0s
//! +--------------------+
//! ```
//!
//! # Record Width
//!
//! One byte of code bits caps representable codes at 8 bits. Rather than
//! truncating longer codes (which would corrupt the payload undetectably),
//! packing fails with `Error::CodeTooLong`. Likewise the one-byte count
//! field caps the table at 255 records; only alphabets wider than 128
//! entries can exceed that.

use crate::bitio::BitWriter;
use crate::codes::CodeTable;
use crate::error::{Error, Result};

/// Bytes per table record: symbol, code length, code bits.
pub const RECORD_SIZE: usize = 3;

/// Bytes in the payload bit-length field.
pub const LEN_FIELD_SIZE: usize = 4;

/// Widest code the record format can carry.
pub const MAX_CODE_BITS: usize = 8;

/// Pack the code table and the unpacked payload bit sequence into a blob.
///
/// `bits` is the concatenation of per-symbol codes in input order, one
/// element (0 or 1) per bit, as produced by `CodeTable::encode_bits`.
///
/// # Errors
/// - `Error::TooManySymbols` if the table exceeds 255 records
/// - `Error::CodeTooLong` if any code exceeds [`MAX_CODE_BITS`]
pub fn pack(table: &CodeTable, bits: &[u8]) -> Result<Vec<u8>> {
    if table.len() > u8::MAX as usize {
        return Err(Error::TooManySymbols { count: table.len() });
    }

    let payload_len = (bits.len() + 7) / 8;
    let total_size = 1 + table.len() * RECORD_SIZE + LEN_FIELD_SIZE + payload_len;
    let mut blob = Vec::with_capacity(total_size);

    // Table header: unique count, then one record per symbol
    blob.push(table.len() as u8);
    for entry in table.entries() {
        let length = entry.code.len();
        if length > MAX_CODE_BITS {
            return Err(Error::CodeTooLong {
                symbol: entry.symbol,
                length,
                max: MAX_CODE_BITS,
            });
        }

        // Right-align the code's bits in a single byte; the length field
        // recovers any leading zeros.
        let mut value = 0u8;
        for &bit in entry.code.bits() {
            value = (value << 1) | bit;
        }

        blob.push(entry.symbol);
        blob.push(length as u8);
        blob.push(value);
    }

    // Payload bit count, big-endian
    blob.extend_from_slice(&(bits.len() as u32).to_be_bytes());

    // Packed payload
    let mut writer = BitWriter::with_bit_capacity(bits.len());
    writer.extend_bits(bits);
    blob.extend_from_slice(&writer.finish());

    Ok(blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::CodeTable;
    use crate::symbols::{Alphabet, SymbolCensus};
    use crate::tree::Tree;

    fn table_for(input: &[u8]) -> CodeTable {
        let census = SymbolCensus::scan(Alphabet::ASCII, input);
        let tree = Tree::build(&census);
        CodeTable::derive(&tree, census.alphabet())
    }

    #[test]
    fn test_empty_table_empty_payload() {
        let table = table_for(b"");
        let blob = pack(&table, &[]).unwrap();

        // count byte + 4-byte zero length, nothing else
        assert_eq!(blob, vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_two_symbol_layout() {
        let table = table_for(b"aaab");
        let bits = table.encode_bits(b"aaab");
        let blob = pack(&table, &bits).unwrap();

        assert_eq!(
            blob,
            vec![
                2, // unique count
                b'a', 1, 0b1, // record: a -> code 1, length 1
                b'b', 1, 0b0, // record: b -> code 0, length 1
                0, 0, 0, 4, // 4 payload bits, big-endian
                0b1110_0000, // 1 1 1 0 + right padding
            ]
        );
    }

    #[test]
    fn test_length_field_is_bits_not_bytes() {
        let table = table_for(b"abcabcabcx");
        let bits = table.encode_bits(b"abcabcabcx");
        let blob = pack(&table, &bits).unwrap();

        let records_end = 1 + table.len() * RECORD_SIZE;
        let len_bytes: [u8; 4] = blob[records_end..records_end + LEN_FIELD_SIZE]
            .try_into()
            .unwrap();
        assert_eq!(u32::from_be_bytes(len_bytes) as usize, bits.len());
        assert_eq!(
            blob.len(),
            records_end + LEN_FIELD_SIZE + (bits.len() + 7) / 8
        );
    }

    #[test]
    fn test_code_too_long_rejected() {
        // Fibonacci counts over 10 symbols force a 9-bit code for the
        // rarest symbol.
        let mut input = Vec::new();
        let mut counts = (1u64, 1u64);
        for symbol in b'a'..=b'j' {
            input.extend(std::iter::repeat(symbol).take(counts.0 as usize));
            counts = (counts.1, counts.0 + counts.1);
        }

        let table = table_for(&input);
        assert!(table.max_code_len() > MAX_CODE_BITS);

        let bits = table.encode_bits(&input);
        let err = pack(&table, &bits).unwrap_err();
        assert!(matches!(err, Error::CodeTooLong { length, .. } if length > MAX_CODE_BITS));
    }

    #[test]
    fn test_eight_bit_code_accepted() {
        // Fibonacci counts over 9 symbols peak at exactly 8 bits.
        let mut input = Vec::new();
        let mut counts = (1u64, 1u64);
        for symbol in b'a'..=b'i' {
            input.extend(std::iter::repeat(symbol).take(counts.0 as usize));
            counts = (counts.1, counts.0 + counts.1);
        }

        let table = table_for(&input);
        assert_eq!(table.max_code_len(), MAX_CODE_BITS);

        let bits = table.encode_bits(&input);
        assert!(pack(&table, &bits).is_ok());
    }
}
