//! Euclid's algorithm. `gcd(a, b) = gcd(|a|, |b|)`, so signed inputs are
//! normalized up front; `gcd(0, 0)` is defined as 0.

/// Greatest common divisor of two signed integers.
pub fn gcd(a: i64, b: i64) -> u64 {
    gcd_u64(a.unsigned_abs(), b.unsigned_abs())
}

/// GCD of any number of values, by associativity:
/// `gcd(a, b, c) = gcd(gcd(a, b), c)`. Empty input yields 0.
pub fn gcd_all(values: &[i64]) -> u64 {
    values
        .iter()
        .fold(0u64, |acc, &v| gcd_u64(acc, v.unsigned_abs()))
}

fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}
