use crate::error::{Result, ShamirError};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// A polynomial over the prime field `GF(p)`
///
/// Coefficients are stored highest degree first, `[a_k, ..., a_1, a_0]`, so the
/// last coefficient is the constant term. When used for sharing, the constant
/// term is the secret and the polynomial must never be evaluated at zero.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use prime_share::Polynomial;
///
/// // P(x) = 2x^2 + 3x + 5 over GF(17)
/// let coefficients = vec![2u32, 3, 5].into_iter().map(BigUint::from).collect();
/// let poly = Polynomial::new(BigUint::from(17u32), coefficients).unwrap();
/// assert_eq!(poly.evaluate(&BigUint::from(2u32)).unwrap(), BigUint::from(2u32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    prime_mod: BigUint,
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    /// Creates a polynomial after validating it against the field
    ///
    /// # Errors
    /// Returns `ShamirError` if:
    /// - `prime_mod <= 1`
    /// - there are at least `prime_mod` coefficients
    /// - any coefficient is not in `[0, prime_mod)`
    pub fn new(prime_mod: BigUint, coefficients: Vec<BigUint>) -> Result<Self> {
        if prime_mod <= BigUint::one() {
            return Err(ShamirError::InvalidModulus);
        }
        if BigUint::from(coefficients.len()) >= prime_mod {
            return Err(ShamirError::TooManyCoefficients(coefficients.len()));
        }
        if coefficients.iter().any(|c| c >= &prime_mod) {
            return Err(ShamirError::ValueOutOfRange);
        }

        Ok(Self {
            prime_mod,
            coefficients,
        })
    }

    pub fn prime_mod(&self) -> &BigUint {
        &self.prime_mod
    }

    /// Coefficients, highest degree first
    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }

    /// Degree of the polynomial (0 for a constant or empty polynomial)
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates `P(x) mod p` using Horner's method
    ///
    /// # Errors
    /// - [`ShamirError::ValueOutOfRange`] if `x >= p`
    /// - [`ShamirError::ZeroEvaluationPoint`] if `x == 0`
    pub fn evaluate(&self, x: &BigUint) -> Result<BigUint> {
        if x >= &self.prime_mod {
            return Err(ShamirError::ValueOutOfRange);
        }
        if x.is_zero() {
            return Err(ShamirError::ZeroEvaluationPoint);
        }

        let p = &self.prime_mod;
        let y = self.coefficients.iter().fold(BigUint::zero(), |acc, c| {
            let scaled = (acc * x) % p;
            (scaled + c) % p
        });
        Ok(y)
    }
}
