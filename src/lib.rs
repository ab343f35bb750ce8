pub mod base;
pub mod bits;
pub mod euclid;
pub mod segmented;
pub mod xor_range;

pub use base::{base_primes, base_primes_with_budget};
pub use segmented::{segmented_primes, segmented_primes_with_budget, window_primes};

/// Errors from sieve operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SieveError {
    /// Window query with `to < from`.
    InvalidWindow { from: u64, to: u64 },
    /// A sieve pass would need more scratch memory than the budget allows.
    ResourceExceeded {
        required_bytes: u64,
        budget_bytes: u64,
    },
}

impl std::fmt::Display for SieveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SieveError::InvalidWindow { from, to } => {
                write!(f, "invalid window: to = {} precedes from = {}", to, from)
            }
            SieveError::ResourceExceeded {
                required_bytes,
                budget_bytes,
            } => write!(
                f,
                "sieve needs {} bytes of scratch memory, budget allows {}",
                required_bytes, budget_bytes
            ),
        }
    }
}

impl std::error::Error for SieveError {}

/// Cap on transient sieve memory, for callers handing in untrusted bounds.
///
/// The budget covers the candidate bit arrays a call allocates (the O(sqrt n)
/// component of the segmented sieve; O(n) for a direct base-sieve call). The
/// returned prime vector is the answer, not scratch, and is not counted.
#[derive(Clone, Copy, Debug)]
pub struct Budget {
    pub max_auxiliary_bytes: u64,
}

impl Default for Budget {
    fn default() -> Self {
        Budget {
            max_auxiliary_bytes: 1 << 30, // 1 GiB
        }
    }
}

impl Budget {
    /// Budget allowing at most `bytes` of scratch memory per call.
    pub fn with_max_bytes(bytes: u64) -> Self {
        Budget {
            max_auxiliary_bytes: bytes,
        }
    }

    /// Reject before allocating: a bit array of `bits` candidates must fit
    /// both the budget and the address space. Sized in u128 because a window
    /// spanning the whole u64 range holds 2^64 candidates. Returns the array
    /// length on success.
    pub(crate) fn checked_len(&self, bits: u128) -> Result<usize, SieveError> {
        let required_bytes = bits.div_ceil(64) * 8;
        if required_bytes > self.max_auxiliary_bytes as u128 || usize::try_from(bits).is_err() {
            return Err(SieveError::ResourceExceeded {
                required_bytes: u64::try_from(required_bytes).unwrap_or(u64::MAX),
                budget_bytes: self.max_auxiliary_bytes,
            });
        }
        Ok(bits as usize)
    }
}

/// Estimate prime count up to n using the prime counting function approximation.
/// Used as a capacity hint when collecting survivors.
pub(crate) fn estimate_prime_count(n: u64) -> usize {
    if n < 10 {
        return 4;
    }
    let nf = n as f64;
    (1.3 * nf / nf.ln()) as usize
}
