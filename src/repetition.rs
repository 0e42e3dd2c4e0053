use crate::config::AlphabetConfig;
use crate::enumerate::{bounded_cardinality, Enumerate, WordBuffer, WordSet};
use crate::error::WordGenError;
use log::{debug, trace};

/// Builds every word of the configured length, symbols may repeat.
///
/// For `n` symbols and length `L` there are exactly `n^L` words (one empty
/// word when `L == 0`, none when `n == 0` and `L > 0`).
///
/// # Example
///
/// ```
/// use wordgen_rs::{AlphabetConfig, Enumerate, WordBuilder};
///
/// let config = AlphabetConfig::from_str_symbols("ABC", 5).unwrap();
/// let builder = WordBuilder::new(config).unwrap();
///
/// assert_eq!(builder.all_words().len(), 243);
/// assert_eq!(builder.count_no_consecutive(), 48);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordBuilder {
    config: AlphabetConfig,
    cardinality: usize,
}

impl WordBuilder {
    /// Creates a builder, rejecting configs with more than [`MAX_WORDS`] words.
    ///
    /// [`MAX_WORDS`]: crate::MAX_WORDS
    pub fn new(config: AlphabetConfig) -> Result<Self, WordGenError> {
        let count = repetition_count(config.symbol_count(), config.length());
        let cardinality = bounded_cardinality(&config, count)?;

        Ok(Self {
            config,
            cardinality,
        })
    }
}

impl Enumerate for WordBuilder {
    fn config(&self) -> &AlphabetConfig {
        &self.config
    }

    fn cardinality(&self) -> usize {
        self.cardinality
    }

    fn all_words(&self) -> WordSet {
        debug!(
            "enumerating {} words of length {} over {} symbols",
            self.cardinality,
            self.config.length(),
            self.config.symbol_count()
        );

        let mut words = WordSet::with_capacity(self.cardinality);
        let mut buffer: WordBuffer = smallvec::smallvec!['\0'; self.config.length()];
        fill_position(self.config.symbols(), &mut buffer, 0, &mut words);

        trace!("materialized {} distinct words", words.len());
        words
    }
}

/// Returns `n^length`, or None on overflow.
pub(crate) fn repetition_count(n: usize, length: usize) -> Option<usize> {
    let exp = u32::try_from(length).ok()?;
    n.checked_pow(exp)
}

/// Tries every symbol at `pos`, then recurses to the next position.
///
/// Once every position is filled the buffer is copied into `words`.
fn fill_position(symbols: &[char], buffer: &mut WordBuffer, pos: usize, words: &mut WordSet) {
    if pos == buffer.len() {
        words.insert(buffer.iter().collect());
        return;
    }

    for &symbol in symbols {
        buffer[pos] = symbol;
        fill_position(symbols, buffer, pos + 1, words);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_WORDS;

    fn builder(symbols: &str, length: usize) -> WordBuilder {
        WordBuilder::new(AlphabetConfig::from_str_symbols(symbols, length).unwrap()).unwrap()
    }

    fn set(words: &[&str]) -> WordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_all_words_abc_2() {
        let words = builder("ABC", 2).all_words();
        assert_eq!(
            words,
            set(&["AA", "AB", "AC", "BA", "BB", "BC", "CA", "CB", "CC"])
        );
    }

    #[test]
    fn test_no_consecutive_abc_2() {
        let b = builder("ABC", 2);
        let all = b.all_words();
        let kept = b.all_words_no_consecutive();

        assert_eq!(kept.len(), 6);
        let removed: WordSet = all.difference(&kept).cloned().collect();
        assert_eq!(removed, set(&["AA", "BB", "CC"]));
    }

    #[test]
    fn test_count_no_consecutive_abc_5() {
        assert_eq!(builder("ABC", 5).count_no_consecutive(), 48);
    }

    #[test]
    fn test_zero_length() {
        let b = builder("ABC", 0);
        assert_eq!(b.cardinality(), 1);
        assert_eq!(b.all_words(), set(&[""]));
    }

    #[test]
    fn test_empty_alphabet() {
        let b = builder("", 3);
        assert_eq!(b.cardinality(), 0);
        assert!(b.all_words().is_empty());

        let b = builder("", 0);
        assert_eq!(b.all_words(), set(&[""]));
    }

    #[test]
    fn test_cardinality_matches() {
        let b = builder("abcd", 4);
        assert_eq!(b.cardinality(), 256);
        assert_eq!(b.all_words().len(), 256);
    }

    #[test]
    fn test_excluding() {
        let b = builder("ab", 3);
        let words = b.all_words_excluding(["aa", "bb"]);
        assert_eq!(words, set(&["aba", "bab"]));
    }

    #[test]
    fn test_duplicate_symbols_collapse() {
        let b = builder("aab", 2);
        assert_eq!(b.cardinality(), 9);
        assert_eq!(b.all_words(), set(&["aa", "ab", "ba", "bb"]));
    }

    #[test]
    fn test_too_many_words() {
        let config = AlphabetConfig::lowercase(64).unwrap();
        let err = WordBuilder::new(config).unwrap_err();
        assert_eq!(
            err,
            WordGenError::TooManyWords {
                symbols: 26,
                length: 64,
                max: MAX_WORDS
            }
        );
    }

    #[test]
    fn test_count_fits_usize_but_over_limit() {
        // 26^13 fits in a u64 but could never be materialized.
        assert!(repetition_count(26, 13).is_some());
        let err = WordBuilder::new(AlphabetConfig::lowercase(13).unwrap()).unwrap_err();
        assert!(matches!(err, WordGenError::TooManyWords { length: 13, .. }));
    }

    #[test]
    fn test_word_limit_boundary() {
        // 2^24 words is exactly the limit, one more position is over it.
        let at_limit = WordBuilder::new(AlphabetConfig::from_str_symbols("ab", 24).unwrap());
        assert_eq!(at_limit.unwrap().cardinality(), MAX_WORDS);

        let over = WordBuilder::new(AlphabetConfig::from_str_symbols("ab", 25).unwrap());
        assert!(matches!(over, Err(WordGenError::TooManyWords { .. })));
    }

    #[test]
    fn test_builder_equality() {
        assert_eq!(builder("abc", 2), builder("abc", 2));
        assert_ne!(builder("abc", 2), builder("acb", 2));
    }
}
