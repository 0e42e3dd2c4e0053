use crate::config::{AlphabetConfig, MAX_WORDS};
use crate::error::WordGenError;
use crate::filter;
use ahash::AHashSet;

/// A deduplicated set of generated words.
pub type WordSet = AHashSet<String>;

/// Operations shared by every word builder.
///
/// Implementors provide the full enumeration; the filtered views are built on
/// top of it, so both builders expose the same superset of operations.
pub trait Enumerate {
    /// Returns the configuration this builder enumerates.
    fn config(&self) -> &AlphabetConfig;

    /// Returns the number of enumeration paths, computed in closed form.
    ///
    /// Equals the size of [`Enumerate::all_words`] when the alphabet holds no
    /// duplicate symbols.
    fn cardinality(&self) -> usize;

    /// Materializes every word into a fresh set.
    fn all_words(&self) -> WordSet;

    /// Returns every word with no two equal adjacent chars.
    fn all_words_no_consecutive(&self) -> WordSet {
        filter::filter_no_consecutive(&self.all_words())
    }

    /// Counts the words with no two equal adjacent chars.
    fn count_no_consecutive(&self) -> usize {
        filter::count_no_consecutive(&self.all_words())
    }

    /// Returns every word containing none of the `forbidden` substrings.
    fn all_words_excluding<I>(&self, forbidden: I) -> WordSet
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        Self: Sized,
    {
        filter::filter_excluding(&self.all_words(), forbidden)
    }
}

/// Accepts a closed-form word count if it was computed without overflow and
/// stays within [`MAX_WORDS`].
pub(crate) fn bounded_cardinality(
    config: &AlphabetConfig,
    count: Option<usize>,
) -> Result<usize, WordGenError> {
    count
        .filter(|&count| count <= MAX_WORDS)
        .ok_or(WordGenError::TooManyWords {
            symbols: config.symbol_count(),
            length: config.length(),
            max: MAX_WORDS,
        })
}

/// Inline capacity for per-word buffers; longer words spill to the heap.
pub(crate) const INLINE_WORD: usize = 16;

/// Working buffer holding the word under construction.
pub(crate) type WordBuffer = smallvec::SmallVec<[char; INLINE_WORD]>;
