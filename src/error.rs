use std::io;
use thiserror::Error;

/// Error type for prime-field secret sharing operations
#[derive(Error, Debug)]
pub enum ShamirError {
    /// Invalid threshold value (must be 1 <= threshold <= total_shares)
    #[error("Invalid threshold value {0}")]
    InvalidThreshold(u32),

    /// Invalid total shares count (must be >= 1)
    #[error("Invalid share count {0}")]
    InvalidShareCount(u32),

    /// Threshold exceeds total shares
    #[error("Threshold {threshold} exceeds total shares {total_shares}")]
    ThresholdTooLarge { threshold: u32, total_shares: u32 },

    /// Fewer shares than the bundle's `required_shares`
    #[error("Need at least {needed} shares, got {got}")]
    InsufficientShares { needed: u32, got: usize },

    /// No shares were supplied for reconstruction
    #[error("No shares provided")]
    MissingShares,

    /// Strict mode is on and the bundle carries no `required_shares`
    #[error("Bundle does not state how many shares are required")]
    MissingThreshold,

    /// The modulus is not greater than one
    #[error("Invalid prime modulus")]
    InvalidModulus,

    /// A value lies outside `[0, modulus)`
    #[error("Value out of range for the field")]
    ValueOutOfRange,

    /// Evaluation at x = 0 would reveal the secret coefficient
    #[error("Polynomial may not be evaluated at zero")]
    ZeroEvaluationPoint,

    /// The field has no room for this many coefficients
    #[error("Prime modulus must exceed the number of coefficients ({0})")]
    TooManyCoefficients(usize),

    #[error("Value and modulus are not coprime")]
    NotCoprime,

    /// No tabulated prime exceeds the requested bound
    #[error("No tabulated prime is large enough; supply an explicit prime modulus")]
    PrimeTableExhausted,

    /// A caller-supplied prime cannot hold the secret
    #[error("Prime modulus is not large enough for a {secret_len}-byte secret")]
    PrimeTooSmall { secret_len: usize },

    /// An interpolation point has a coordinate outside the field
    #[error("Invalid point at position {0}")]
    InvalidPoint(usize),

    /// Invalid share format or content
    #[error("Invalid share format")]
    InvalidShareFormat,

    #[error("Base64 decoding error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("Hex decoding error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("Randomness source error: {0}")]
    Randomness(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ShamirError>;
