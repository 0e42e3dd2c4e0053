use crate::error::WordGenError;

/// The lowercase latin alphabet, the default symbol set.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Upper bound on word length.
///
/// Enumeration recurses once per position, so this also bounds stack depth.
pub const MAX_WORD_LENGTH: usize = 64;

/// Upper bound on the number of words a builder will enumerate.
///
/// Eager enumeration holds every word in one set, so builders reject any
/// config whose closed-form word count exceeds this.
pub const MAX_WORDS: usize = 1 << 24;

/// The symbols a word may be built from, and the length of every word.
///
/// Equality and hashing are structural: two configs are equal iff their
/// symbol sequences (order included) and lengths are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlphabetConfig {
    symbols: Vec<char>,
    length: usize,
}

impl AlphabetConfig {
    /// Creates a config from an ordered sequence of symbols.
    ///
    /// Duplicate symbols are kept as given; generated sets deduplicate
    /// whatever words they produce more than once.
    pub fn new<I>(symbols: I, length: usize) -> Result<Self, WordGenError>
    where
        I: IntoIterator<Item = char>,
    {
        if length > MAX_WORD_LENGTH {
            return Err(WordGenError::WordTooLong {
                length,
                max: MAX_WORD_LENGTH,
            });
        }

        Ok(Self {
            symbols: symbols.into_iter().collect(),
            length,
        })
    }

    /// Creates a config whose symbols are the chars of `symbols`.
    pub fn from_str_symbols(symbols: &str, length: usize) -> Result<Self, WordGenError> {
        Self::new(symbols.chars(), length)
    }

    /// Creates a config over [`LOWERCASE`].
    pub fn lowercase(length: usize) -> Result<Self, WordGenError> {
        Self::from_str_symbols(LOWERCASE, length)
    }

    /// Creates a config from a signed length, rejecting negative values.
    pub fn with_signed_length<I>(symbols: I, length: i64) -> Result<Self, WordGenError>
    where
        I: IntoIterator<Item = char>,
    {
        let length = usize::try_from(length).map_err(|_| WordGenError::NegativeLength(length))?;
        Self::new(symbols, length)
    }

    /// Returns the symbols in their configured order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the word length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the number of symbols, duplicates included.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }
}
