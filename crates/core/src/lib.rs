//! huffpack-core: Static Huffman encoding into a self-describing blob
//!
//! This library builds a Huffman code for a byte stream over a fixed,
//! bounded alphabet and serializes the code table together with the packed
//! payload into a single binary blob:
//! - Counts symbol occurrences over the alphabet
//! - Builds a binary tree by repeatedly merging the two lowest-weight nodes
//! - Derives each symbol's code by walking from its leaf up to the root
//! - Packs the table header and the concatenated code bits into bytes
//!
//! # Architecture
//!
//! The encoder is a single forward pipeline with clear module boundaries:
//! - `symbols`: alphabet bounds and occurrence counting
//! - `tree`: arena-based Huffman tree construction
//! - `codes`: per-symbol code derivation and bit-string assembly
//! - `bitio`: low-level MSB-first bit writing
//! - `blob`: blob layout and packing
//! - `encoder`: the `encode` entry point and the `Encoded` artifact
//!
//! # Design Principles
//!
//! - **No panics**: degenerate inputs (empty, single symbol) produce
//!   well-defined output; unrepresentable codes are structured errors
//! - **Deterministic**: equal-weight nodes merge in insertion order, so the
//!   same input always produces the same blob
//! - **Single-use**: each encode call builds its own tree, table, and blob;
//!   nothing is shared between calls

pub mod bitio;
pub mod blob;
pub mod codes;
pub mod encoder;
pub mod error;
pub mod symbols;
pub mod tree;

// Re-export commonly used types
pub use encoder::{encode, encode_with, EncodeStats, Encoded};
pub use error::{Error, Result};
pub use symbols::Alphabet;
