//! Shamir's Secret Sharing over prime fields
//!
//! This library splits a byte-string secret into `N` shares so that any `K` of
//! them reconstruct it exactly, while fewer than `K` reveal nothing about it.
//! The secret is read as one big integer and becomes the constant term of a
//! random polynomial over `GF(p)`, with `p` taken from a curated prime table.
//!
//! # Quick Start
//!
//! ```
//! use prime_share::{ShamirShare, encoding};
//!
//! // Create a scheme with 5 shares and threshold 3
//! let scheme = ShamirShare::new(5, 3).unwrap();
//!
//! // Split a secret
//! let secret = b"my secret data";
//! let bundle = scheme.split(secret).unwrap();
//!
//! // Shares travel as text
//! let text = encoding::to_base64(&bundle);
//!
//! // Reconstruct from 3 of them
//! let mut restored = encoding::from_base64(&text).unwrap();
//! restored.shares = vec![
//!     restored.shares[4].clone(),
//!     restored.shares[0].clone(),
//!     restored.shares[2].clone(),
//! ];
//! let reconstructed = ShamirShare::reconstruct(&restored).unwrap();
//! assert_eq!(reconstructed, secret);
//! ```
//!
//! # Limitations
//!
//! Shares carry no integrity protection. A bundle whose `required_shares` is
//! unset is reconstructed from whatever shares it holds, and too few shares then
//! produce a wrong secret without an error (a warning is logged through
//! `tracing`). Enable [`Config::with_strict_share_count`] to reject such bundles.
//!
//! With the `zeroize` feature the byte buffers holding the secret and the raw
//! coefficient draws are wiped after use. The big-integer copies made during
//! splitting and interpolation are not: `BigUint` offers no way to clear its
//! limbs, so those values are dropped without being overwritten. Callers can
//! wipe their own [`Share`]s with `Zeroize::zeroize`.

pub mod codec;
mod config;
pub mod encoding;
mod error;
mod finite_field;
mod polynomial;
mod primes;
pub mod randomness;
mod shamir;

pub use config::{Config, SplitMode};
pub use encoding::{EncodedBundle, EncodedPrime};
pub use error::{Result, ShamirError};
pub use finite_field::modular_inverse;
pub use polynomial::Polynomial;
pub use primes::{select_prime_larger_than, tabulated_primes};
pub use randomness::{
    BlockingRandom, FastRandom, RandomSource, RandomnessPreference, SeededRandom,
};
pub use shamir::{
    PrimeModulus, SENTINEL_BYTE, ShamirShare, ShamirShareBuilder, Share, ShareBundle,
    lagrange_interpolation, recover_secret, recover_secret_with_config, split_secret,
};

// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        Config, RandomSource, RandomnessPreference, Result, ShamirError, ShamirShare, Share,
        ShareBundle, SplitMode, recover_secret, split_secret,
    };
}
