//! Curated prime moduli
//!
//! Instead of testing primality at runtime the crate picks its modulus from a
//! fixed ascending table. The table merges two families:
//!
//! - Mersenne primes `2^n - 1`
//! - the smallest `(n+1)`-bit primes `2^n + c`, for `n` a multiple of 64 from 128 to 4096
//!
//! Secrets that need a larger field than the largest entry must be split with an
//! explicit prime (see [`Config::with_prime_mod`](crate::Config::with_prime_mod)).

use crate::error::{Result, ShamirError};
use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;

const MERSENNE_EXPONENTS: [u32; 26] = [
    17, 19, 31, 61, 89, 107, 127, 521, 607, 1279, 2203, 2281, 3217, 4253, 4423, 9689, 9941, 11213,
    19937, 21701, 23209, 44497, 86243, 110503, 132049, 216091,
];

/// `(n, c)` such that `2^n + c` is the smallest prime above `2^n`
const POWER_OF_TWO_OFFSETS: [(u32, u32); 13] = [
    (128, 51),
    (192, 133),
    (256, 297),
    (320, 27),
    (384, 231),
    (448, 211),
    (512, 75),
    (768, 183),
    (1024, 643),
    (1536, 75),
    (2048, 981),
    (3072, 813),
    (4096, 1761),
];

static PRIME_TABLE: Lazy<Vec<BigUint>> = Lazy::new(|| {
    let mersenne = MERSENNE_EXPONENTS
        .iter()
        .map(|&n| (BigUint::one() << n) - 1u32);
    let offsets = POWER_OF_TWO_OFFSETS
        .iter()
        .map(|&(n, c)| (BigUint::one() << n) + c);

    let mut table: Vec<BigUint> = mersenne.chain(offsets).collect();
    table.sort();
    table
});

/// The full candidate table in ascending order
pub fn tabulated_primes() -> &'static [BigUint] {
    &PRIME_TABLE
}

/// Returns the smallest tabulated prime strictly greater than `value`
///
/// # Errors
/// [`ShamirError::PrimeTableExhausted`] if `value` is at least the largest tabulated prime.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use prime_share::select_prime_larger_than;
///
/// let p = select_prime_larger_than(&BigUint::from(255u32)).unwrap();
/// assert_eq!(p, BigUint::from((1u32 << 17) - 1));
/// ```
pub fn select_prime_larger_than(value: &BigUint) -> Result<BigUint> {
    let table = tabulated_primes();
    let idx = table.partition_point(|prime| prime <= value);
    table
        .get(idx)
        .cloned()
        .ok_or(ShamirError::PrimeTableExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn test_table_is_sorted_and_complete() {
        let table = tabulated_primes();
        assert_eq!(table.len(), 39);
        assert!(table.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(table[0], BigUint::from(131071u32));
        assert_eq!(table[6], (BigUint::one() << 127u32) - 1u32);
        assert_eq!(table[7], (BigUint::one() << 128u32) + 51u32);
        assert_eq!(table.last().unwrap().bits(), 216091);
    }

    #[test]
    fn test_zero_selects_smallest() {
        assert_eq!(
            select_prime_larger_than(&BigUint::zero()).unwrap(),
            tabulated_primes()[0]
        );
    }

    #[test]
    fn test_boundaries() {
        let table = tabulated_primes();
        for (i, prime) in table.iter().enumerate() {
            // Just below a prime selects that prime
            assert_eq!(&select_prime_larger_than(&(prime - 1u32)).unwrap(), prime);

            // Exactly a prime selects the next one
            match table.get(i + 1) {
                Some(next) => {
                    assert_eq!(&select_prime_larger_than(prime).unwrap(), next);
                    let midway = (prime + next) >> 1u32;
                    assert_eq!(&select_prime_larger_than(&midway).unwrap(), next);
                }
                None => assert!(matches!(
                    select_prime_larger_than(prime),
                    Err(ShamirError::PrimeTableExhausted)
                )),
            }
        }
    }

    #[test]
    fn test_all_ff_secret_bounds() {
        // 5 bytes of 0xFF sits between 2^31-1 and 2^61-1
        let bound = BigUint::from(0xFF_FFFF_FFFFu64);
        assert_eq!(
            select_prime_larger_than(&bound).unwrap(),
            (BigUint::one() << 61u32) - 1u32
        );

        // 16 bytes of 0xFF is 2^128 - 1
        let bound = (BigUint::one() << 128u32) - 1u32;
        assert_eq!(
            select_prime_larger_than(&bound).unwrap(),
            (BigUint::one() << 128u32) + 51u32
        );
    }

    #[test]
    fn test_too_large() {
        let huge = BigUint::one() << 216091u32;
        assert!(matches!(
            select_prime_larger_than(&huge),
            Err(ShamirError::PrimeTableExhausted)
        ));
    }
}
