//! Per-symbol code derivation and bit-string assembly.
//!
//! A symbol's code is the root-to-leaf path in the Huffman tree: 0 for a
//! left edge, 1 for a right edge. Derivation walks each leaf *upward*
//! through parent links (recording whether it was its parent's left or
//! right child) and reverses the collected bits into transmission order.
//!
//! Codes are prefix-free by construction: no leaf path can be the prefix of
//! another leaf path in a binary tree.
//!
//! # Single-symbol trees
//!
//! A tree with one leaf has no edges, so the upward walk yields a
//! zero-length code, which the blob format cannot represent. That symbol is
//! assigned the trivial 1-bit code `0` instead, so every occurrence still
//! contributes one payload bit.

use std::fmt;

use crate::symbols::Alphabet;
use crate::tree::Tree;

/// A single symbol's code: the root-to-leaf bit path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    bits: Vec<u8>,
}

impl Code {
    fn from_bits(bits: Vec<u8>) -> Self {
        debug_assert!(bits.iter().all(|&b| b <= 1));
        Self { bits }
    }

    /// The code's bits in root-to-leaf order, each 0 or 1.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Number of bits in the code (the leaf's tree depth).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the code has no bits. Never true for a derived table entry.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// One table row: a symbol and its code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub symbol: u8,
    pub code: Code,
}

/// The complete symbol-to-code mapping for one tree.
///
/// Entries are kept in the tree's leaf order (first occurrence of each
/// symbol in the input), with an alphabet-indexed lookup table for encoding.
#[derive(Debug, Clone)]
pub struct CodeTable {
    alphabet: Alphabet,
    entries: Vec<CodeEntry>,
    index: Vec<Option<u16>>,
}

impl CodeTable {
    /// Derive the code for every leaf of `tree`.
    ///
    /// Guarantees one entry per unique input symbol. An empty tree produces
    /// an empty table.
    pub fn derive(tree: &Tree, alphabet: Alphabet) -> Self {
        let single_leaf = tree.leaves().len() == 1;
        let mut entries = Vec::with_capacity(tree.leaves().len());
        let mut index = vec![None; alphabet.size()];

        for &leaf_id in tree.leaves() {
            // Leaf ids always carry a symbol.
            let symbol = match tree.node(leaf_id).symbol {
                Some(symbol) => symbol,
                None => continue,
            };

            let mut bits = Vec::new();
            let mut current = leaf_id;

            while let Some(parent_id) = tree.node(current).parent {
                let parent = tree.node(parent_id);
                if parent.left == Some(current) {
                    bits.push(0);
                } else {
                    bits.push(1);
                }
                current = parent_id;
            }

            // Walk collected leaf-to-root; transmission order is root-to-leaf.
            bits.reverse();

            if single_leaf {
                bits.push(0);
            }

            if let Some(slot) = alphabet.index_of(symbol) {
                index[slot] = Some(entries.len() as u16);
                entries.push(CodeEntry {
                    symbol,
                    code: Code::from_bits(bits),
                });
            }
        }

        Self {
            alphabet,
            entries,
            index,
        }
    }

    /// The code assigned to `symbol`, if it occurred in the input.
    pub fn code_for(&self, symbol: u8) -> Option<&Code> {
        let slot = self.alphabet.index_of(symbol)?;
        let pos = self.index[slot]? as usize;
        Some(&self.entries[pos].code)
    }

    /// All table rows, in first-occurrence symbol order.
    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries (empty input).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest code, or 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.code.len())
            .max()
            .unwrap_or(0)
    }

    /// Concatenate the codes of every in-range symbol of `input`, in input
    /// order, into one unpacked bit sequence (each element 0 or 1).
    ///
    /// Symbols without a code (out of the alphabet, so never counted) are
    /// skipped, mirroring the census.
    pub fn encode_bits(&self, input: &[u8]) -> Vec<u8> {
        let mut bits = Vec::new();
        for &symbol in input {
            if let Some(code) = self.code_for(symbol) {
                bits.extend_from_slice(code.bits());
            }
        }
        bits
    }
}

impl fmt::Display for CodeTable {
    /// Renders one `symbol length code` row per entry, e.g. `0x61 2 01`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(
                f,
                "{:#04x} {} {}",
                entry.symbol,
                entry.code.len(),
                entry.code
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SymbolCensus;

    fn table_for(input: &[u8]) -> CodeTable {
        let census = SymbolCensus::scan(Alphabet::ASCII, input);
        let tree = Tree::build(&census);
        CodeTable::derive(&tree, census.alphabet())
    }

    fn is_prefix(a: &[u8], b: &[u8]) -> bool {
        a.len() <= b.len() && &b[..a.len()] == a
    }

    #[test]
    fn test_empty_input_empty_table() {
        let table = table_for(b"");
        assert!(table.is_empty());
        assert!(table.encode_bits(b"").is_empty());
    }

    #[test]
    fn test_single_symbol_gets_one_bit_code() {
        let table = table_for(b"aaaaa");

        let code = table.code_for(b'a').unwrap();
        assert_eq!(code.bits(), &[0]);
        assert_eq!(table.encode_bits(b"aaaaa"), vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_two_symbols_one_bit_each() {
        let table = table_for(b"aaab");

        // b is lighter, so it lands on the left (0); a on the right (1)
        assert_eq!(table.code_for(b'a').unwrap().bits(), &[1]);
        assert_eq!(table.code_for(b'b').unwrap().bits(), &[0]);
        assert_eq!(table.encode_bits(b"aaab"), vec![1, 1, 1, 0]);
    }

    #[test]
    fn test_every_unique_symbol_has_a_code() {
        let input = b"the quick brown fox jumps over the lazy dog";
        let table = table_for(input);
        let census = SymbolCensus::scan(Alphabet::ASCII, input);

        assert_eq!(table.len(), census.unique().len());
        for &symbol in census.unique() {
            assert!(table.code_for(symbol).is_some());
        }
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let table = table_for(b"abracadabra stray cats scatter");

        for (i, a) in table.entries().iter().enumerate() {
            for (j, b) in table.entries().iter().enumerate() {
                if i != j {
                    assert!(
                        !is_prefix(a.code.bits(), b.code.bits()),
                        "code for {:?} prefixes code for {:?}",
                        a.symbol as char,
                        b.symbol as char
                    );
                }
            }
        }
    }

    #[test]
    fn test_code_length_matches_leaf_depth() {
        let input = b"aaaaaaaabbbbccd";
        let census = SymbolCensus::scan(Alphabet::ASCII, input);
        let tree = Tree::build(&census);
        let table = CodeTable::derive(&tree, census.alphabet());

        for &leaf_id in tree.leaves() {
            let symbol = tree.node(leaf_id).symbol.unwrap();
            let code = table.code_for(symbol).unwrap();
            assert_eq!(code.len(), tree.depth(leaf_id));
        }
    }

    #[test]
    fn test_bit_string_length_accounting() {
        let input = b"mississippi river";
        let table = table_for(input);
        let census = SymbolCensus::scan(Alphabet::ASCII, input);

        let expected: u64 = census
            .unique()
            .iter()
            .map(|&s| census.count(s) * table.code_for(s).unwrap().len() as u64)
            .sum();
        assert_eq!(table.encode_bits(input).len() as u64, expected);
    }

    #[test]
    fn test_out_of_range_symbols_not_encoded() {
        let input = [b'a', b'a', 0xFF, b'b'];
        let census = SymbolCensus::scan(Alphabet::ASCII, &input);
        let tree = Tree::build(&census);
        let table = CodeTable::derive(&tree, census.alphabet());

        assert!(table.code_for(0xFF).is_none());
        // 0xFF contributes no bits
        assert_eq!(table.encode_bits(&input).len(), 3);
    }

    #[test]
    fn test_display_rendering() {
        let table = table_for(b"aaab");
        let rendered = table.to_string();
        assert!(rendered.contains("0x61 1 1"));
        assert!(rendered.contains("0x62 1 0"));
    }
}
