//! # Segmented Sieve — prime generation in O(√n) auxiliary space
//!
//! The full-range sieve ([`crate::base`]) needs one bit per candidate and
//! streams its marking writes across the whole array, so at n = 10^9 it costs
//! ~125 MB and exhibits almost no locality of reference. The segmented sieve
//! trades one extra bootstrap pass for both problems at once:
//!
//! 1. Compute `delta = ceil(√n)` and bootstrap `basis`, the primes ≤ delta,
//!    with one full sieve over the first block.
//! 2. Slide a window of `delta` candidates across `(delta, n]`. Each window
//!    crosses off multiples of the basis primes in its own private bit array
//!    and appends the survivors to `basis`.
//!
//! The appended survivors are all > √n, so they can never divide anything in
//! a later window; carrying them in the same vector is deliberate: the one
//! growing sequence is both the sieving basis and the accumulated answer.
//! Windows only consult the frozen bootstrap prefix, so total marking work
//! stays Σ n/p over primes p ≤ √n, the same O(n log log n) as the full sieve,
//! while live scratch is one `delta`-bit window (~4 KB at n = 10^9) plus the
//! O(√n / ln √n) basis.
//!
//! ## Window indexing
//!
//! A window `(from, to]` maps value `v` to offset `v - from`. Offset 0 is the
//! excluded left boundary (`from` was already classified by the previous
//! window, or is `delta` itself, covered by the bootstrap), so no value is
//! ever reported twice. Marking for prime `p` starts at the first multiple of
//! `p` strictly greater than `from`, never below `p²` (everything smaller has
//! a lesser prime factor and is handled by that prime's own pass).
//!
//! ## References
//!
//! - <https://en.wikipedia.org/wiki/Sieve_of_Eratosthenes#Segmented_sieve>
//! - Carter Bays & Richard H. Hudson, "The segmented sieve of Eratosthenes
//!   and primes in arithmetic progressions to 10^12", BIT 17:121–127, 1977.

use tracing::debug;

use crate::base::base_primes_with_budget;
use crate::bits::CandidateBits;
use crate::{Budget, SieveError};

/// All primes less than or equal to `n`, ascending. Empty for `n < 2`.
///
/// Uses the default scratch [`Budget`]; see [`segmented_primes_with_budget`]
/// for untrusted bounds.
pub fn segmented_primes(n: u64) -> Result<Vec<u64>, SieveError> {
    segmented_primes_with_budget(n, &Budget::default())
}

/// [`segmented_primes`] with an explicit cap on scratch memory.
///
/// Peak scratch is one `ceil(√n)`-bit window array (the bootstrap array is
/// the same size and is gone before the first window is allocated).
///
/// # Errors
///
/// Returns [`SieveError::ResourceExceeded`] if a `ceil(√n)`-bit array would
/// exceed the budget.
pub fn segmented_primes_with_budget(n: u64, budget: &Budget) -> Result<Vec<u64>, SieveError> {
    if n < 2 {
        return Ok(Vec::new());
    }

    // ceil(sqrt(n)) so the basis provably holds every prime factor of every
    // composite <= n; flooring can fall one short of sqrt(n).
    let delta = ceil_sqrt(n);

    // Bootstrap covers [0, delta]: base_primes is exclusive, hence the +1,
    // which also picks up delta itself when n is a square of a prime (n = 49
    // needs 7 in the basis).
    let mut primes = base_primes_with_budget(delta + 1, budget)?;
    let basis_len = primes.len();
    debug!(delta, basis = basis_len, "bootstrap basis ready");

    let mut windows: u64 = 0;
    let mut m = delta;
    while m <= n {
        let to = m.saturating_add(delta).min(n);
        let found = sieve_window(m, to, &primes[..basis_len], budget)?;
        primes.extend(found);
        windows += 1;
        m = match m.checked_add(delta) {
            Some(next) => next,
            None => break,
        };
    }
    debug!(windows, primes = primes.len(), "window loop complete");

    Ok(primes)
}

/// Primes in `(from, to]`, exclusive of `from`, given a basis holding every
/// prime ≤ √to.
///
/// Basis entries larger than √to are harmless (their first relevant multiple
/// falls past `to`), as are entries larger than the window itself. `from` is
/// never reported; callers wanting an inclusive left edge should start one
/// lower.
///
/// # Errors
///
/// Returns [`SieveError::InvalidWindow`] if `to < from`.
pub fn window_primes(from: u64, to: u64, basis: &[u64]) -> Result<Vec<u64>, SieveError> {
    if to < from {
        return Err(SieveError::InvalidWindow { from, to });
    }
    sieve_window(from, to, basis, &Budget::default())
}

/// One window pass: private bit array over `(from, to]`, cross off basis
/// multiples, collect survivors. Requires `from <= to`.
fn sieve_window(
    from: u64,
    to: u64,
    basis: &[u64],
    budget: &Budget,
) -> Result<Vec<u64>, SieveError> {
    // Sized in u128: a full-range window holds 2^64 candidates, one past
    // what u64 arithmetic can count.
    let span = (to - from) as u128 + 1;
    let len = budget.checked_len(span)?;

    let mut candidates = CandidateBits::all_set(len);
    for &p in basis {
        mark_multiples(&mut candidates, from, to, p);
    }

    // Offset 0 is `from` itself: excluded by the window contract.
    let mut found = Vec::with_capacity(candidates.count_set());
    found.extend(candidates.iter_set(1).map(|offset| from + offset as u64));
    Ok(found)
}

/// Cross off every multiple of `p` in `(from, to]`, starting at the first
/// multiple strictly greater than `from` and never below `p²`.
fn mark_multiples(candidates: &mut CandidateBits, from: u64, to: u64, p: u64) {
    if p < 2 {
        return;
    }
    let first = match (from / p + 1).checked_mul(p) {
        Some(m) => m.max(p.saturating_mul(p)),
        None => return,
    };
    let mut m = first;
    while m <= to {
        candidates.mark_composite((m - from) as usize);
        m = match m.checked_add(p) {
            Some(next) => next,
            None => break,
        };
    }
}

/// Smallest d with d² ≥ n.
fn ceil_sqrt(n: u64) -> u64 {
    let r = n.isqrt();
    if r * r < n {
        r + 1
    } else {
        r
    }
}
