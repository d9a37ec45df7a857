use crate::error::{Result, ShamirError};
use crate::randomness::RandomnessPreference;
use num_bigint::BigUint;
use num_traits::One;

/// How shares are evaluated during a split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Evaluate the polynomial at each x in turn
    Sequential,
    /// Evaluate the polynomial for all x in parallel
    Parallel,
}

impl Default for SplitMode {
    fn default() -> Self {
        Self::Sequential
    }
}

/// Configuration options for splitting and reconstruction
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Explicit prime modulus; `None` selects one from the prime table
    pub prime_mod: Option<BigUint>,
    /// Source of coefficient randomness
    pub randomness: RandomnessPreference,
    /// Processing mode
    pub mode: SplitMode,
    /// Reject bundles without `required_shares` instead of warning
    pub strict_share_count: bool,
}

impl Config {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `prime` as the field modulus instead of a tabulated prime
    ///
    /// The value is trusted to be prime; only `prime > 1` is checked.
    pub fn with_prime_mod(mut self, prime: BigUint) -> Result<Self> {
        if prime <= BigUint::one() {
            return Err(ShamirError::InvalidConfig(
                "Prime modulus must be greater than one".into(),
            ));
        }
        self.prime_mod = Some(prime);
        Ok(self)
    }

    /// Sets the randomness source preference
    pub fn with_randomness(mut self, randomness: RandomnessPreference) -> Self {
        self.randomness = randomness;
        self
    }

    /// Sets the processing mode
    pub fn with_mode(mut self, mode: SplitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables or disables strict share counting on reconstruction
    pub fn with_strict_share_count(mut self, enabled: bool) -> Self {
        self.strict_share_count = enabled;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(prime) = &self.prime_mod {
            if *prime <= BigUint::one() {
                return Err(ShamirError::InvalidConfig(
                    "Prime modulus must be greater than one".into(),
                ));
            }
        }

        Ok(())
    }
}
