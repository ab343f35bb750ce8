//! Classic full-range Sieve of Eratosthenes.
//!
//! Bootstraps the segmented sieve (which only ever asks for primes up to
//! ~√n) and stands on its own for callers whose bound fits in memory.
//! O(n log log n) time, O(n) bits of scratch.

use crate::bits::CandidateBits;
use crate::{estimate_prime_count, Budget, SieveError};

/// All primes strictly below `limit`, ascending. Empty for `limit < 2`.
///
/// Uses the default scratch [`Budget`]; see [`base_primes_with_budget`] for
/// untrusted bounds.
pub fn base_primes(limit: u64) -> Result<Vec<u64>, SieveError> {
    base_primes_with_budget(limit, &Budget::default())
}

/// [`base_primes`] with an explicit cap on scratch memory.
///
/// The pass allocates one bit per candidate; marking for each surviving `i`
/// starts at `i*i` because every smaller multiple has a prime factor below
/// `i` and was already crossed off. Total marking work is Σ limit/p over
/// primes p < √limit, i.e. O(limit log log limit).
///
/// # Errors
///
/// Returns [`SieveError::ResourceExceeded`] if the bit array would exceed
/// the budget.
pub fn base_primes_with_budget(limit: u64, budget: &Budget) -> Result<Vec<u64>, SieveError> {
    if limit < 2 {
        return Ok(Vec::new());
    }
    let len = budget.checked_len(limit as u128)?;
    let mut candidates = CandidateBits::all_set(len);
    candidates.mark_composite(0);
    candidates.mark_composite(1);

    let mut i: usize = 2;
    while (i as u64) * (i as u64) < limit {
        if candidates.is_set(i) {
            let mut multiple = i * i;
            while multiple < len {
                candidates.mark_composite(multiple);
                multiple += i;
            }
        }
        i += 1;
    }

    let mut primes = Vec::with_capacity(estimate_prime_count(limit));
    primes.extend(candidates.iter_set(0).map(|v| v as u64));
    Ok(primes)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The known list of primes below 30: exactly pi(29) = 10 of them.
    #[test]
    fn primes_below_30() {
        assert_eq!(
            base_primes(30).unwrap(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    /// Small limits around the first primes. The bound is exclusive, so
    /// `base_primes(2)` is empty and `base_primes(3)` is the first non-empty
    /// result; 8 through 10 all stop after 7.
    #[test]
    fn small_limits() {
        assert_eq!(base_primes(0).unwrap(), Vec::<u64>::new());
        assert_eq!(base_primes(1).unwrap(), Vec::<u64>::new());
        assert_eq!(base_primes(2).unwrap(), Vec::<u64>::new());
        assert_eq!(base_primes(3).unwrap(), vec![2]);
        assert_eq!(base_primes(4).unwrap(), vec![2, 3]);
        assert_eq!(base_primes(8).unwrap(), vec![2, 3, 5, 7]);
        assert_eq!(base_primes(10).unwrap(), vec![2, 3, 5, 7]);
        assert_eq!(base_primes(12).unwrap(), vec![2, 3, 5, 7, 11]);
    }

    /// Prime counts against pi(x) (OEIS A000720): pi(100) = 25,
    /// pi(1000) = 168, pi(10000) = 1229, pi(100000) = 9592. The exclusive
    /// bound means `base_primes(x + 1)` counts primes <= x; all four x values
    /// here are composite, so the off-by-one cannot hide.
    #[test]
    fn known_prime_counts() {
        assert_eq!(base_primes(100).unwrap().len(), 25);
        assert_eq!(base_primes(1000).unwrap().len(), 168);
        assert_eq!(base_primes(10_000).unwrap().len(), 1229);
        assert_eq!(base_primes(100_000).unwrap().len(), 9592);
    }

    /// Perfect-square limits: 25 must exclude 25 itself but keep 23; 26 and
    /// 49/50 follow. Squares are where an off-by-one in the `i*i` marking
    /// cutoff shows up first.
    #[test]
    fn perfect_square_limits() {
        assert_eq!(base_primes(25).unwrap().last(), Some(&23));
        assert!(!base_primes(26).unwrap().contains(&25));
        assert!(!base_primes(50).unwrap().contains(&49));
        assert!(base_primes(50).unwrap().contains(&47));
    }

    /// Output is strictly increasing with no duplicates.
    #[test]
    fn strictly_increasing() {
        let primes = base_primes(10_000).unwrap();
        assert!(primes.windows(2).all(|w| w[0] < w[1]));
    }

    /// Same limit twice yields the same sequence: the sieve is pure, with no
    /// state surviving a call.
    #[test]
    fn idempotent() {
        assert_eq!(base_primes(5000).unwrap(), base_primes(5000).unwrap());
    }

    /// A starved budget reports `ResourceExceeded` instead of allocating.
    #[test]
    fn budget_exceeded() {
        let tiny = Budget::with_max_bytes(8);
        let err = base_primes_with_budget(1_000_000, &tiny).unwrap_err();
        assert!(matches!(err, SieveError::ResourceExceeded { .. }));
        // 65 candidates need two words = 16 bytes
        assert!(base_primes_with_budget(65, &tiny).is_err());
        assert!(base_primes_with_budget(64, &tiny).is_ok());
    }
}
