//! # Prime Table Sizing
//!
//! Open-addressing tables in this crate always have a prime number of slots, which keeps
//! linear probe sequences from clustering on hash values that share a factor with the
//! table size. Sizes are small (bounded by the table ceiling), so plain trial division
//! up to the integer square root is all that is needed.

use num_integer::Roots;

/// Returns true if `n` is prime. Numbers below 2 are never prime.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let limit = Roots::sqrt(&n);
    (2..=limit).all(|d| n % d != 0)
}

/// Smallest prime greater than or equal to `n`.
///
/// ```rust
/// use wordfreq::cs::hashing::prime::next_prime;
///
/// assert_eq!(next_prime(10), 11);
/// assert_eq!(next_prime(11), 11);
/// assert_eq!(next_prime(0), 2);
/// ```
pub fn next_prime(n: usize) -> usize {
    let mut candidate = n;
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}
