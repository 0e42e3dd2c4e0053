use crate::enumerate::{Enumerate, INLINE_WORD};
use crate::permutation::PermutationBuilder;
use crate::repetition::WordBuilder;
use smallvec::SmallVec;

type IndexVec = SmallVec<[usize; INLINE_WORD]>;

/// Lazy iterator over every word of a [`WordBuilder`].
///
/// Advances an odometer of symbol indices, rightmost position first, so words
/// come out in lexicographic order of alphabet position. Unlike
/// [`Enumerate::all_words`] nothing is deduplicated, so an alphabet holding a
/// symbol twice yields some words twice.
pub struct Words<'a> {
    symbols: &'a [char],
    indices: IndexVec,
    remaining: usize,
}

impl<'a> Words<'a> {
    pub(crate) fn new(builder: &'a WordBuilder) -> Self {
        let config = builder.config();
        let mut indices = IndexVec::new();
        indices.resize(config.length(), 0);

        Self {
            symbols: config.symbols(),
            indices,
            remaining: builder.cardinality(),
        }
    }

    fn current(&self) -> String {
        self.indices.iter().map(|&i| self.symbols[i]).collect()
    }

    /// Moves the odometer one step; the final wrap-around is never observed
    /// because `remaining` reaches zero first.
    fn advance(&mut self) {
        let n = self.symbols.len();
        for index in self.indices.iter_mut().rev() {
            *index += 1;
            if *index < n {
                return;
            }
            *index = 0;
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let word = self.current();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Words<'_> {}

/// Lazy iterator over every word of a [`PermutationBuilder`].
///
/// Tracks a permutation of all alphabet positions plus a countdown per output
/// position; only the first `length` positions form the word.
pub struct PermutationWords<'a> {
    symbols: &'a [char],
    length: usize,
    indices: IndexVec,
    cycles: IndexVec,
    remaining: usize,
}

impl<'a> PermutationWords<'a> {
    pub(crate) fn new(builder: &'a PermutationBuilder) -> Self {
        let config = builder.config();
        let n = config.symbol_count();
        let length = config.length();

        let indices: IndexVec = (0..n).collect();
        let cycles: IndexVec = if length <= n {
            (n - length + 1..=n).rev().collect()
        } else {
            IndexVec::new()
        };

        Self {
            symbols: config.symbols(),
            length,
            indices,
            cycles,
            remaining: builder.cardinality(),
        }
    }

    fn current(&self) -> String {
        self.indices[..self.length]
            .iter()
            .map(|&i| self.symbols[i])
            .collect()
    }

    /// Steps to the next arrangement, starting from the last output position.
    fn advance(&mut self) {
        let n = self.indices.len();
        for i in (0..self.length).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = n - self.cycles[i];
                self.indices.swap(i, j);
                return;
            }
        }
    }
}

impl Iterator for PermutationWords<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let word = self.current();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for PermutationWords<'_> {}

impl WordBuilder {
    /// Returns a lazy iterator over every word, one allocation per word.
    pub fn iter(&self) -> Words<'_> {
        Words::new(self)
    }
}

impl<'a> IntoIterator for &'a WordBuilder {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PermutationBuilder {
    /// Returns a lazy iterator over every permutation, one allocation per word.
    pub fn iter(&self) -> PermutationWords<'_> {
        PermutationWords::new(self)
    }
}

impl<'a> IntoIterator for &'a PermutationBuilder {
    type Item = String;
    type IntoIter = PermutationWords<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
