//! Prefix-XOR table answering range-XOR queries in O(1).
//!
//! XOR is associative and self-inverse (`x ^ x = 0`), so with
//! `X[i] = A[0] ^ … ^ A[i]` precomputed once in O(n), the XOR of any
//! `A[lo..=hi]` is `X[hi] ^ X[lo-1]` (just `X[hi]` when `lo = 0`).

/// Precomputed prefix-XOR table over a fixed sequence.
pub struct PrefixXor {
    prefix: Vec<u64>,
}

impl PrefixXor {
    /// Build the table in O(n). The constructor is the whole precomputation;
    /// queries never touch the original values again.
    pub fn new(values: &[u64]) -> Self {
        let mut prefix = Vec::with_capacity(values.len());
        let mut acc = 0u64;
        for &v in values {
            acc ^= v;
            prefix.push(acc);
        }
        PrefixXor { prefix }
    }

    /// Length of the underlying sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    /// XOR of `values[lo..=hi]`, or `None` when the range is empty or out of
    /// bounds.
    #[inline]
    pub fn range_xor(&self, lo: usize, hi: usize) -> Option<u64> {
        if lo > hi || hi >= self.prefix.len() {
            return None;
        }
        let upto = self.prefix[hi];
        Some(if lo == 0 { upto } else { upto ^ self.prefix[lo - 1] })
    }
}
