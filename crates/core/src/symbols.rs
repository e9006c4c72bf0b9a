//! Alphabet bounds and symbol occurrence counting.
//!
//! The encoder operates over a closed, contiguous byte range. Symbols outside
//! the range are dropped entirely: they are neither counted nor encoded, and
//! their presence is not an error. This matches the compatibility contract of
//! the blob format, where every table record must fit a single symbol byte.

/// A closed, contiguous range of byte values the encoder accepts.
///
/// Passed into the encoder explicitly rather than read from global state, so
/// callers can narrow (or widen) the symbol domain per encode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    min: u8,
    max: u8,
}

impl Alphabet {
    /// The 7-bit ASCII range, 0 through 127 inclusive (128 entries).
    pub const ASCII: Alphabet = Alphabet { min: 0, max: 127 };

    /// Create an alphabet covering `min..=max`.
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn new(min: u8, max: u8) -> Self {
        assert!(min <= max, "alphabet min must not exceed max");
        Self { min, max }
    }

    /// Lowest symbol value in the alphabet.
    pub fn min(&self) -> u8 {
        self.min
    }

    /// Highest symbol value in the alphabet.
    pub fn max(&self) -> u8 {
        self.max
    }

    /// Number of symbol values in the alphabet.
    pub fn size(&self) -> usize {
        (self.max - self.min) as usize + 1
    }

    /// Whether `symbol` falls inside the alphabet.
    pub fn contains(&self, symbol: u8) -> bool {
        symbol >= self.min && symbol <= self.max
    }

    /// Zero-based index of `symbol` within the alphabet, if it is in range.
    pub fn index_of(&self, symbol: u8) -> Option<usize> {
        if self.contains(symbol) {
            Some((symbol - self.min) as usize)
        } else {
            None
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::ASCII
    }
}

/// Occurrence counts for one input, indexed over the full alphabet.
///
/// Holds a count slot for every alphabet entry (unseen symbols stay 0) plus
/// the list of symbols that actually occurred, in first-occurrence order.
/// That order is what later fixes the leaf insertion order of the tree
/// builder, and with it the exact code assignment.
#[derive(Debug, Clone)]
pub struct SymbolCensus {
    alphabet: Alphabet,
    counts: Vec<u64>,
    unique: Vec<u8>,
}

impl SymbolCensus {
    /// Count every in-range symbol in `input`.
    ///
    /// Out-of-range symbols are skipped; they appear neither in the counts
    /// nor in the unique list.
    pub fn scan(alphabet: Alphabet, input: &[u8]) -> Self {
        let mut counts = vec![0u64; alphabet.size()];
        let mut unique = Vec::new();

        for &symbol in input {
            if let Some(idx) = alphabet.index_of(symbol) {
                if counts[idx] == 0 {
                    unique.push(symbol);
                }
                counts[idx] += 1;
            }
        }

        Self {
            alphabet,
            counts,
            unique,
        }
    }

    /// The alphabet this census was taken over.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Occurrence count for `symbol` (0 if unseen or out of range).
    pub fn count(&self, symbol: u8) -> u64 {
        match self.alphabet.index_of(symbol) {
            Some(idx) => self.counts[idx],
            None => 0,
        }
    }

    /// Symbols that occurred at least once, in first-occurrence order.
    pub fn unique(&self) -> &[u8] {
        &self.unique
    }

    /// Total number of counted (in-range) symbols.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
