use crate::config::AlphabetConfig;
use crate::enumerate::{bounded_cardinality, Enumerate, WordBuffer, WordSet};
use crate::error::WordGenError;
use log::{debug, trace};
use smallvec::SmallVec;

/// Builds every word of the configured length in which no symbol position of
/// the alphabet is used twice.
///
/// For `n` symbols and length `L <= n` there are `n! / (n - L)!` words. When
/// `L > n` no word can be built and the result is empty.
///
/// The enumeration is factorial in the alphabet size and is not meant to
/// scale past small alphabets or short words.
///
/// # Example
///
/// ```
/// use wordgen_rs::{AlphabetConfig, Enumerate, PermutationBuilder};
///
/// let config = AlphabetConfig::lowercase(4).unwrap();
/// let builder = PermutationBuilder::new(config).unwrap();
///
/// let words = builder.all_words_excluding(["be", "lap", "scum", "third"]);
/// assert!(words.len() < builder.cardinality());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PermutationBuilder {
    config: AlphabetConfig,
    cardinality: usize,
}

impl PermutationBuilder {
    /// Creates a builder, rejecting configs with more than [`MAX_WORDS`] words.
    ///
    /// [`MAX_WORDS`]: crate::MAX_WORDS
    ///
    /// A length longer than the alphabet is accepted and yields no words.
    pub fn new(config: AlphabetConfig) -> Result<Self, WordGenError> {
        let count = permutation_count(config.symbol_count(), config.length());
        let cardinality = bounded_cardinality(&config, count)?;

        Ok(Self {
            config,
            cardinality,
        })
    }
}

impl Enumerate for PermutationBuilder {
    fn config(&self) -> &AlphabetConfig {
        &self.config
    }

    fn cardinality(&self) -> usize {
        self.cardinality
    }

    fn all_words(&self) -> WordSet {
        let symbols = self.config.symbols();
        let length = self.config.length();

        debug!(
            "enumerating {} permutations of length {} over {} symbols",
            self.cardinality,
            length,
            symbols.len()
        );

        let mut words = WordSet::with_capacity(self.cardinality);
        if length > symbols.len() {
            return words;
        }

        let mut used: SmallVec<[bool; 32]> = smallvec::smallvec![false; symbols.len()];
        let mut buffer: WordBuffer = smallvec::smallvec!['\0'; length];
        place_unused(symbols, &mut used, &mut buffer, 0, &mut words);

        trace!("materialized {} distinct permutations", words.len());
        words
    }
}

/// Returns `n! / (n - length)!`, zero when `length > n`, or None on overflow.
pub(crate) fn permutation_count(n: usize, length: usize) -> Option<usize> {
    if length > n {
        return Some(0);
    }
    (n - length + 1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

/// Tries every unused symbol at `pos`, marking it used for the deeper
/// positions and releasing it afterwards.
fn place_unused(
    symbols: &[char],
    used: &mut [bool],
    buffer: &mut WordBuffer,
    pos: usize,
    words: &mut WordSet,
) {
    if pos == buffer.len() {
        words.insert(buffer.iter().collect());
        return;
    }

    for (i, &symbol) in symbols.iter().enumerate() {
        if used[i] {
            continue;
        }
        used[i] = true;
        buffer[pos] = symbol;
        place_unused(symbols, used, buffer, pos + 1, words);
        used[i] = false;
    }
}
