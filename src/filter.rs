//! Subtractive filters over generated word sets.
//!
//! Every filter returns a fresh subset of its input; none ever adds a word.

use crate::enumerate::WordSet;
use log::debug;

/// Returns true if any two adjacent chars of `word` are equal.
pub fn has_consecutive_duplicate(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(mut prev) = chars.next() else {
        return false;
    };

    for c in chars {
        if c == prev {
            return true;
        }
        prev = c;
    }
    false
}

/// Returns true if `word` contains any entry of `forbidden` as a contiguous
/// substring.
///
/// Matching is literal and case-sensitive. The empty string is contained in
/// every word.
pub fn contains_any<I>(word: &str, forbidden: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    forbidden
        .into_iter()
        .any(|pattern| word.contains(pattern.as_ref()))
}

/// Keeps the words with no two equal adjacent chars.
pub fn filter_no_consecutive(words: &WordSet) -> WordSet {
    let kept: WordSet = words
        .iter()
        .filter(|word| !has_consecutive_duplicate(word))
        .cloned()
        .collect();

    debug!(
        "no-consecutive filter kept {} of {} words",
        kept.len(),
        words.len()
    );
    kept
}

/// Counts the words with no two equal adjacent chars.
pub fn count_no_consecutive(words: &WordSet) -> usize {
    let count = words
        .iter()
        .filter(|word| !has_consecutive_duplicate(word))
        .count();

    debug!(
        "no-consecutive count is {} of {} words",
        count,
        words.len()
    );
    count
}

/// Keeps the words containing none of the `forbidden` substrings.
///
/// An empty `forbidden` collection keeps every word.
pub fn filter_excluding<I>(words: &WordSet, forbidden: I) -> WordSet
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let forbidden: Vec<I::Item> = forbidden.into_iter().collect();

    let kept: WordSet = words
        .iter()
        .filter(|word| !contains_any(word, &forbidden))
        .cloned()
        .collect();

    debug!(
        "exclusion filter over {} patterns kept {} of {} words",
        forbidden.len(),
        kept.len(),
        words.len()
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> WordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_has_consecutive_duplicate() {
        assert!(has_consecutive_duplicate("AA"));
        assert!(has_consecutive_duplicate("ABB"));
        assert!(has_consecutive_duplicate("ABCC"));
        assert!(!has_consecutive_duplicate("ABA"));
        assert!(!has_consecutive_duplicate("A"));
        assert!(!has_consecutive_duplicate(""));
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("scumbag", ["scum"]));
        assert!(contains_any("label", ["be", "lap"]));
        assert!(!contains_any("abcd", ["be", "lap"]));
        assert!(!contains_any("Scum", ["scum"]));
        assert!(!contains_any("abcd", Vec::<String>::new()));
        assert!(contains_any("abcd", [""]));
    }

    #[test]
    fn test_filter_no_consecutive() {
        let words = set(&["AA", "AB", "BA", "BB"]);
        assert_eq!(filter_no_consecutive(&words), set(&["AB", "BA"]));
        assert_eq!(count_no_consecutive(&words), 2);
    }

    #[test]
    fn test_filter_excluding() {
        let words = set(&["abc", "bca", "cab", "bac"]);
        assert_eq!(filter_excluding(&words, ["ab"]), set(&["bca", "bac"]));
        assert_eq!(filter_excluding(&words, ["ab", "ba"]), set(&["bca"]));
    }

    #[test]
    fn test_filter_excluding_empty_forbidden() {
        let words = set(&["abc", "bca"]);
        assert_eq!(filter_excluding(&words, Vec::<&str>::new()), words);
    }

    #[test]
    fn test_filter_excluding_common_substring() {
        let words = set(&["xab", "abx", "xaby"]);
        assert!(filter_excluding(&words, ["ab"]).is_empty());
    }

    #[test]
    fn test_filter_empty_set() {
        let words = WordSet::new();
        assert!(filter_no_consecutive(&words).is_empty());
        assert!(filter_excluding(&words, ["a"]).is_empty());
    }
}
