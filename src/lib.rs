//! # wordgen - Brute-force word enumeration
//!
//! Generates every fixed-length word over an alphabet, either with repeated
//! symbols (`n^L` words) or as permutations without repetition
//! (`n! / (n - L)!` words), and filters the results.
//!
//! Two filters are provided:
//! - **No consecutive duplicates**: drops words with two equal adjacent chars
//! - **Substring exclusion**: drops words containing any forbidden substring
//!
//! ## Example
//!
//! ```
//! use wordgen_rs::{AlphabetConfig, Enumerate, WordBuilder};
//!
//! let config = AlphabetConfig::from_str_symbols("ABC", 2).unwrap();
//! let builder = WordBuilder::new(config).unwrap();
//!
//! let words = builder.all_words();
//! assert_eq!(words.len(), 9);
//!
//! let filtered = builder.all_words_no_consecutive();
//! assert!(!filtered.contains("AA"));
//! assert_eq!(filtered.len(), 6);
//! ```
//!
//! ## Performance
//!
//! - Enumeration is exponential (with repetition) or factorial (permutations)
//! - Eager results are materialized into a pre-sized set; use `iter()` to walk
//!   the words lazily instead
//! - Builders refuse configurations with more than `MAX_WORDS` words

mod config;
mod enumerate;
mod error;
mod filter;
mod iter;
mod permutation;
mod repetition;


pub use config::{AlphabetConfig, LOWERCASE, MAX_WORDS, MAX_WORD_LENGTH};
pub use enumerate::{Enumerate, WordSet};
pub use error::WordGenError;
pub use filter::{
    contains_any, count_no_consecutive, filter_excluding, filter_no_consecutive,
    has_consecutive_duplicate,
};
pub use iter::{PermutationWords, Words};
pub use permutation::PermutationBuilder;
pub use repetition::WordBuilder;
