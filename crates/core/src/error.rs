//! Error types for the encoder.
//!
//! All operations return structured errors rather than panicking. Note that
//! most degenerate inputs are *not* errors:
//! - symbols outside the alphabet are silently excluded, not rejected
//! - empty input produces an empty blob (zero symbols, zero payload bits)
//! - single-symbol input gets a trivial 1-bit code
//!
//! The only hard failures are inputs whose code table cannot be represented
//! in the blob's fixed-width record format.

use thiserror::Error;

/// Top-level error type for encoding operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A derived code is longer than the single byte reserved for code bits
    /// in a table record. Happens for highly skewed frequency distributions
    /// with many unique symbols (e.g. Fibonacci-like counts).
    #[error("code for symbol {symbol:#04x} is {length} bits, record field holds at most {max}")]
    CodeTooLong {
        symbol: u8,
        length: usize,
        max: usize,
    },

    /// More unique symbols than the 1-byte table header can count.
    /// Only reachable with alphabets wider than 128 entries.
    #[error("{count} unique symbols cannot be recorded in a one-byte count field")]
    TooManySymbols { count: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
