use crate::error::{Result, ShamirError};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Computes `a^-1 mod modulus` with the iterative extended Euclidean algorithm
///
/// Only the Bezout coefficient of `a` is tracked. The result is normalized to
/// `[0, modulus)`.
///
/// # Errors
/// - [`ShamirError::InvalidModulus`] if `modulus <= 1`
/// - [`ShamirError::ValueOutOfRange`] if `a >= modulus`
/// - [`ShamirError::NotCoprime`] if `gcd(a, modulus) != 1` (this includes `a == 0`)
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use prime_share::modular_inverse;
///
/// let inv = modular_inverse(&BigUint::from(3u32), &BigUint::from(7u32)).unwrap();
/// assert_eq!(inv, BigUint::from(5u32));
/// ```
pub fn modular_inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if *modulus <= BigUint::one() {
        return Err(ShamirError::InvalidModulus);
    }
    if a >= modulus {
        return Err(ShamirError::ValueOutOfRange);
    }
    if a.is_zero() {
        return Err(ShamirError::NotCoprime);
    }

    let m = BigInt::from(modulus.clone());
    let mut a = BigInt::from(a.clone());
    let mut b = m.clone();
    let mut x0 = BigInt::zero();
    let mut x1 = BigInt::one();

    while a > BigInt::one() {
        if b.is_zero() {
            return Err(ShamirError::NotCoprime);
        }
        let (q, r) = a.div_rem(&b);
        a = std::mem::replace(&mut b, r);
        let next = &x1 - &q * &x0;
        x1 = std::mem::replace(&mut x0, next);
    }

    let (_, magnitude) = x1.mod_floor(&m).into_parts();
    Ok(magnitude)
}

/// `(a - b) mod p` for operands already reduced into `[0, p)`
#[inline]
pub(crate) fn sub_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a + p - b) % p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primes::tabulated_primes;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    fn assert_inverse(a: &BigUint, p: &BigUint) {
        let inv = modular_inverse(a, p).unwrap();
        assert!(&inv < p);
        assert_eq!((a * &inv) % p, BigUint::one(), "a = {a}, p = {p}");
    }

    #[test]
    fn test_known_inverses() {
        assert_eq!(modular_inverse(&big(3), &big(7)).unwrap(), big(5));
        assert_eq!(modular_inverse(&big(1), &big(2)).unwrap(), big(1));
        assert_eq!(modular_inverse(&big(10), &big(17)).unwrap(), big(12));
    }

    #[test]
    fn test_all_inverses_small_primes() {
        for p in [2u64, 3, 5, 7, 11, 13, 257, 65537] {
            let p = big(p);
            let mut a = big(1);
            while a < p {
                assert_inverse(&a, &p);
                a += 1u32;
            }
        }
    }

    #[test]
    fn test_inverses_tabulated_primes() {
        // Values chosen so the Euclidean loop stays short on the huge primes
        for p in tabulated_primes() {
            for a in [big(1), big(2), big(3), big(65536), p - 1u32, p - 2u32] {
                if &a < p {
                    assert_inverse(&a, p);
                }
            }
        }
    }

    #[test]
    fn test_largest_tabulated_prime() {
        let largest = tabulated_primes().last().unwrap();
        assert_inverse(&big(2), largest);
        assert_inverse(&(largest - 1u32), largest);
    }

    #[test]
    fn test_not_coprime() {
        assert!(matches!(
            modular_inverse(&big(4), &big(8)),
            Err(ShamirError::NotCoprime)
        ));
        assert!(matches!(
            modular_inverse(&big(6), &big(9)),
            Err(ShamirError::NotCoprime)
        ));
        assert!(matches!(
            modular_inverse(&big(0), &big(7)),
            Err(ShamirError::NotCoprime)
        ));
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            modular_inverse(&big(1), &big(1)),
            Err(ShamirError::InvalidModulus)
        ));
        assert!(matches!(
            modular_inverse(&big(0), &big(0)),
            Err(ShamirError::InvalidModulus)
        ));
        assert!(matches!(
            modular_inverse(&big(7), &big(7)),
            Err(ShamirError::ValueOutOfRange)
        ));
    }

    #[test]
    fn test_sub_mod_wraps() {
        let p = big(13);
        assert_eq!(sub_mod(&big(2), &big(5), &p), big(10));
        assert_eq!(sub_mod(&big(5), &big(2), &p), big(3));
        assert_eq!(sub_mod(&big(0), &big(0), &p), big(0));
    }
}
