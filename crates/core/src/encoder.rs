//! The encode pipeline and its artifact.
//!
//! A single forward pass: census the input, build the tree, derive the
//! codes, assemble the bit string, pack the blob. Every call constructs its
//! own tree, table, and blob from scratch; nothing is shared between calls,
//! so independent encodes may run on separate threads freely.
//!
//! The returned [`Encoded`] keeps the intermediate structures alive for
//! inspection (tree shape, code table, raw bit string) alongside the blob.

use crate::blob;
use crate::codes::CodeTable;
use crate::error::Result;
use crate::symbols::{Alphabet, SymbolCensus};
use crate::tree::Tree;

/// Encode `input` over the ASCII alphabet (symbols 0..=127).
///
/// Out-of-range bytes are silently excluded. Empty input yields a blob with
/// zero table records and an empty payload; an input with one unique symbol
/// yields a 1-bit code per occurrence.
///
/// # Errors
/// `Error::CodeTooLong` if the frequency distribution produces a code wider
/// than a table record can hold (more than 8 bits).
pub fn encode(input: &[u8]) -> Result<Encoded> {
    encode_with(Alphabet::ASCII, input)
}

/// Encode `input` over an explicit alphabet.
///
/// Same contract as [`encode`]; additionally fails with
/// `Error::TooManySymbols` if more than 255 unique symbols occur, which
/// requires an alphabet wider than 128 entries.
pub fn encode_with(alphabet: Alphabet, input: &[u8]) -> Result<Encoded> {
    let census = SymbolCensus::scan(alphabet, input);
    let tree = Tree::build(&census);
    let table = CodeTable::derive(&tree, alphabet);
    let bits = table.encode_bits(input);
    let blob = blob::pack(&table, &bits)?;

    let stats = EncodeStats {
        input_symbols: census.total(),
        unique_symbols: table.len(),
        payload_bits: bits.len(),
        blob_bytes: blob.len(),
    };

    Ok(Encoded {
        tree,
        table,
        bits,
        blob,
        stats,
    })
}

/// The result of one encode call.
///
/// Immutable after construction. Accessors expose the intermediate pipeline
/// stages read-only; only [`Encoded::blob`] hands out owned data, and that
/// as an independent copy.
#[derive(Debug, Clone)]
pub struct Encoded {
    tree: Tree,
    table: CodeTable,
    bits: Vec<u8>,
    blob: Vec<u8>,
    stats: EncodeStats,
}

impl Encoded {
    /// The Huffman tree the codes were derived from.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The symbol-to-code table. Its `Display` impl renders one
    /// `symbol length code` row per entry.
    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    /// The unpacked payload bit sequence, one element (0 or 1) per bit, in
    /// input order, before byte packing.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// The payload bit sequence rendered as a string of '0' and '1'.
    pub fn bit_string(&self) -> String {
        self.bits.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
    }

    /// An independent copy of the packed blob.
    pub fn blob(&self) -> Vec<u8> {
        self.blob.clone()
    }

    /// Borrow the packed blob without copying.
    pub fn blob_bytes(&self) -> &[u8] {
        &self.blob
    }

    /// Consume the artifact, keeping only the blob.
    pub fn into_blob(self) -> Vec<u8> {
        self.blob
    }

    /// Size and ratio figures for this encode.
    pub fn stats(&self) -> EncodeStats {
        self.stats
    }
}

/// Observable figures for one encode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeStats {
    /// In-range symbols consumed from the input.
    pub input_symbols: u64,

    /// Table records emitted (distinct in-range symbols).
    pub unique_symbols: usize,

    /// Payload length in bits, before padding.
    pub payload_bits: usize,

    /// Total blob size, table included.
    pub blob_bytes: usize,
}

impl EncodeStats {
    /// Blob bytes per input symbol; 1.0 means no saving over one byte per
    /// symbol. Returns `None` for empty input.
    pub fn ratio(&self) -> Option<f64> {
        if self.input_symbols == 0 {
            None
        } else {
            Some(self.blob_bytes as f64 / self.input_symbols as f64)
        }
    }
}
