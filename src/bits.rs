//! Packed candidate bitmap backing every sieve pass.
//!
//! One bit per candidate integer, 8× smaller than `Vec<bool>`: a √(10^9)-sized
//! window (~31623 candidates) fits in ~4 KB, comfortably inside L1. A set bit
//! means "not yet proven composite"; bits only ever transition set → clear
//! within one array's lifetime. Survivor collection uses hardware `POPCNT`
//! (via `count_ones()`) for sizing and `trailing_zeros()` for iteration.
//!
//! Bit layout: bit `i` lives in word `i / 64`, position `i % 64`. Padding bits
//! past `len` in the last word are kept clear so counts stay exact.

/// One bit per candidate, all set at construction.
pub struct CandidateBits {
    words: Vec<u64>,
    len: usize,
}

impl CandidateBits {
    /// `len` candidates, every one initially "not yet proven composite".
    pub fn all_set(len: usize) -> Self {
        let num_words = len.div_ceil(64);
        let mut words = vec![u64::MAX; num_words];
        // Clear padding bits in the last word
        let extra = num_words * 64 - len;
        if extra > 0 && num_words > 0 {
            words[num_words - 1] >>= extra;
        }
        CandidateBits { words, len }
    }

    /// Number of candidates tracked.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if candidate `index` has not been proven composite.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    pub fn is_set(&self, index: usize) -> bool {
        debug_assert!(
            index < self.len,
            "candidate index out of bounds: {} >= {}",
            index,
            self.len
        );
        self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    /// Cross off candidate `index`. The only mutation: set → clear, never back.
    #[inline]
    pub fn mark_composite(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.words[index / 64] &= !(1u64 << (index % 64));
    }

    /// Number of surviving candidates, via word-level popcount.
    pub fn count_set(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Ascending indices of surviving candidates, starting at `start`.
    ///
    /// The window sieve scans from offset 1 (offset 0 is the excluded left
    /// boundary); the base sieve scans from 0.
    pub fn iter_set(&self, start: usize) -> impl Iterator<Item = usize> + '_ {
        let start = start.min(self.len);
        let first_word = start / 64;
        let skip = start % 64;
        self.words[first_word.min(self.words.len())..]
            .iter()
            .enumerate()
            .flat_map(move |(k, &word)| {
                let mut w = word;
                if k == 0 && skip > 0 {
                    w &= u64::MAX << skip;
                }
                WordBits {
                    word: w,
                    base: (first_word + k) * 64,
                }
            })
    }
}

/// Iterator over set bits within a single u64 word.
struct WordBits {
    word: u64,
    base: usize,
}

impl Iterator for WordBits {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.word == 0 {
            return None;
        }
        let tz = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1; // clear lowest set bit
        Some(self.base + tz)
    }
}
