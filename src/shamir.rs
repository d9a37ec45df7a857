use crate::codec::{int_from_bytes, int_to_bytes, required_bytes_given_value};
use crate::config::{Config, SplitMode};
use crate::error::{Result, ShamirError};
use crate::finite_field::{modular_inverse, sub_mod};
use crate::polynomial::Polynomial;
use crate::primes::select_prime_larger_than;
use crate::randomness::{self, RandomSource};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rayon::prelude::*;
use tracing::{debug, warn};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Byte prepended to every secret so leading zero bytes survive the integer encoding
pub const SENTINEL_BYTE: u8 = 42;

/// A share in Shamir's Secret Sharing scheme
///
/// A share is one point `(x, P(x))` on the secret polynomial. `y` holds the
/// minimal big-endian encoding of `P(x) mod p`. `x` is never zero.
///
/// With the `zeroize` feature, shares derive `Zeroize`, which clears `y` and
/// resets `x` to zero.
///
/// # Example
/// ```
/// use prime_share::ShamirShare;
///
/// let shamir = ShamirShare::builder(5, 3).build().unwrap();
/// let bundle = shamir.split(b"secret").unwrap();
///
/// assert_eq!(bundle.shares[0].x, 1);
/// assert_eq!(bundle.required_shares, Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "zeroize", derive(Zeroize))]
pub struct Share {
    /// Evaluation point, 1-based
    pub x: u32,
    /// Big-endian bytes of `P(x) mod p`
    pub y: Vec<u8>,
}

impl Share {
    pub fn new(x: u32, y: Vec<u8>) -> Self {
        Self { x, y }
    }
}

/// Prime modulus as carried by a bundle
///
/// Splitting always produces [`PrimeModulus::Bytes`]; a caller building a bundle
/// by hand may give the integer directly. Two moduli compare equal when they
/// denote the same number.
#[derive(Debug, Clone)]
pub enum PrimeModulus {
    /// Minimal big-endian encoding
    Bytes(Vec<u8>),
    Integer(BigUint),
}

impl PrimeModulus {
    /// The modulus as an integer
    pub fn value(&self) -> BigUint {
        match self {
            Self::Bytes(bytes) => int_from_bytes(bytes),
            Self::Integer(value) => value.clone(),
        }
    }

    /// The modulus as minimal big-endian bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Bytes(bytes) => bytes.clone(),
            Self::Integer(value) => int_to_bytes(value),
        }
    }
}

impl PartialEq for PrimeModulus {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for PrimeModulus {}

impl From<BigUint> for PrimeModulus {
    fn from(value: BigUint) -> Self {
        Self::Integer(value)
    }
}

impl From<Vec<u8>> for PrimeModulus {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Everything produced by one split
///
/// `required_shares` is advisory: the reconstructor uses it to reject short
/// share sets and to truncate long ones, but nothing binds it to the shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareBundle {
    pub required_shares: Option<u32>,
    pub prime_mod: PrimeModulus,
    pub shares: Vec<Share>,
}

/// Shamir's Secret Sharing over a prime field
///
/// The secret is treated as one big integer, so a single polynomial carries the
/// whole secret. The field is the smallest tabulated prime above the largest
/// integer of the secret's byte length, unless the configuration names one.
///
/// # Example
/// ```
/// use prime_share::ShamirShare;
///
/// // Create a scheme with 5 total shares and threshold of 3
/// let scheme = ShamirShare::builder(5, 3).build().unwrap();
///
/// // Split a secret
/// let secret = b"my secret data";
/// let mut bundle = scheme.split(secret).unwrap();
///
/// // Reconstruct with 3 shares
/// bundle.shares.truncate(3);
/// let reconstructed = ShamirShare::reconstruct(&bundle).unwrap();
/// assert_eq!(reconstructed, secret);
/// ```
#[derive(Debug, Clone)]
pub struct ShamirShare {
    /// Total number of shares to generate
    total_shares: u32,
    /// Minimum number of shares needed for reconstruction
    threshold: u32,
    /// Configuration options for the sharing scheme
    config: Config,
}

/// Builder for creating ShamirShare instances with custom configuration
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use prime_share::{Config, ShamirShare, SplitMode};
///
/// let config = Config::new()
///     .with_prime_mod(BigUint::from(2u32).pow(521) - 1u32)
///     .unwrap()
///     .with_mode(SplitMode::Parallel);
///
/// let shamir = ShamirShare::builder(5, 3)
///     .with_config(config)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct ShamirShareBuilder {
    total_shares: u32,
    threshold: u32,
    config: Config,
}

impl ShamirShareBuilder {
    /// Creates a new builder with the specified parameters and default configuration
    ///
    /// # Arguments
    /// * `total_shares` - Total number of shares to create
    /// * `threshold` - Minimum shares required for reconstruction (1-total_shares)
    pub fn new(total_shares: u32, threshold: u32) -> Self {
        Self {
            total_shares,
            threshold,
            config: Config::default(),
        }
    }

    /// Sets a custom configuration for the ShamirShare instance
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Builds the ShamirShare instance with validation
    ///
    /// # Errors
    /// Returns `ShamirError` if:
    /// - `total_shares` is 0
    /// - `threshold` is 0
    /// - `threshold` > `total_shares`
    /// - Configuration validation fails
    pub fn build(self) -> Result<ShamirShare> {
        if self.total_shares == 0 {
            return Err(ShamirError::InvalidShareCount(self.total_shares));
        }
        if self.threshold == 0 {
            return Err(ShamirError::InvalidThreshold(self.threshold));
        }
        if self.threshold > self.total_shares {
            return Err(ShamirError::ThresholdTooLarge {
                threshold: self.threshold,
                total_shares: self.total_shares,
            });
        }

        self.config.validate()?;

        Ok(ShamirShare {
            total_shares: self.total_shares,
            threshold: self.threshold,
            config: self.config,
        })
    }
}

impl ShamirShare {
    /// Creates a scheme with the default configuration
    pub fn new(total_shares: u32, threshold: u32) -> Result<Self> {
        Self::builder(total_shares, threshold).build()
    }

    /// Creates a builder for configuring a ShamirShare instance
    ///
    /// # Arguments
    /// * `total_shares` - Total number of shares to create
    /// * `threshold` - Minimum shares required for reconstruction (1-total_shares)
    pub fn builder(total_shares: u32, threshold: u32) -> ShamirShareBuilder {
        ShamirShareBuilder::new(total_shares, threshold)
    }

    pub fn total_shares(&self) -> u32 {
        self.total_shares
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Splits a secret into `total_shares` shares
    ///
    /// The randomness source is chosen by `config.randomness` and released
    /// before this method returns, on success or failure.
    ///
    /// # Errors
    /// Returns `ShamirError` if:
    /// - no tabulated prime is large enough for the secret
    /// - the configured prime is not larger than the secret's range
    /// - the randomness source fails
    ///
    /// # Example
    /// ```
    /// use prime_share::ShamirShare;
    ///
    /// let scheme = ShamirShare::builder(5, 3).build().unwrap();
    /// let bundle = scheme.split(b"secret data").unwrap();
    /// assert_eq!(bundle.shares.len(), 5);
    /// ```
    pub fn split(&self, secret: &[u8]) -> Result<ShareBundle> {
        let envelope_len = secret.len() + 1;
        let mut source = randomness::acquire(self.config.randomness, envelope_len)?;
        self.split_with_source(secret, &mut source)
    }

    /// Splits a secret drawing coefficients from a caller-supplied source
    ///
    /// # Example
    /// ```
    /// use prime_share::{SeededRandom, ShamirShare};
    ///
    /// let scheme = ShamirShare::builder(3, 2).build().unwrap();
    /// let a = scheme.split_with_source(b"abc", &mut SeededRandom::seed_from_u64(1)).unwrap();
    /// let b = scheme.split_with_source(b"abc", &mut SeededRandom::seed_from_u64(1)).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn split_with_source<R: RandomSource + ?Sized>(
        &self,
        secret: &[u8],
        source: &mut R,
    ) -> Result<ShareBundle> {
        let mut envelope = Vec::with_capacity(secret.len() + 1);
        envelope.push(SENTINEL_BYTE);
        envelope.extend_from_slice(secret);

        let largest_representable = int_from_bytes(&vec![0xFF; envelope.len()]);
        let secret_int = int_from_bytes(&envelope);
        #[cfg(feature = "zeroize")]
        envelope.zeroize();

        let prime_mod = match &self.config.prime_mod {
            Some(prime) => prime.clone(),
            None => select_prime_larger_than(&largest_representable)?,
        };
        if largest_representable >= prime_mod {
            return Err(ShamirError::PrimeTooSmall {
                secret_len: secret.len(),
            });
        }

        let coefficient_width = required_bytes_given_value(&(&prime_mod - 1u32)) as usize;
        debug!(
            secret_len = secret.len(),
            threshold = self.threshold,
            total_shares = self.total_shares,
            prime_bits = prime_mod.bits(),
            "splitting secret"
        );

        let mut coefficients = Vec::with_capacity(self.threshold as usize);
        for _ in 1..self.threshold {
            let mut raw = source.next_bytes(coefficient_width)?;
            coefficients.push(int_from_bytes(&raw) % &prime_mod);
            #[cfg(feature = "zeroize")]
            raw.zeroize();
        }
        coefficients.push(secret_int);

        let polynomial = Polynomial::new(prime_mod, coefficients)?;
        let shares = self.evaluate_shares(&polynomial)?;

        Ok(ShareBundle {
            required_shares: Some(self.threshold),
            prime_mod: PrimeModulus::Bytes(int_to_bytes(polynomial.prime_mod())),
            shares,
        })
    }

    /// Evaluates the polynomial at `x = 1..=total_shares`, in ascending order
    fn evaluate_shares(&self, polynomial: &Polynomial) -> Result<Vec<Share>> {
        let share_at = |x: u32| -> Result<Share> {
            let y = polynomial.evaluate(&BigUint::from(x))?;
            Ok(Share::new(x, int_to_bytes(&y)))
        };

        match self.config.mode {
            SplitMode::Sequential => (1..=self.total_shares).map(share_at).collect(),
            SplitMode::Parallel => (1..=self.total_shares)
                .into_par_iter()
                .map(share_at)
                .collect(),
        }
    }

    /// Reconstructs the original secret from a bundle using Lagrange interpolation
    ///
    /// # Errors
    /// Returns `ShamirError` if:
    /// - No shares provided
    /// - Fewer shares than the bundle's `required_shares`
    /// - The prime modulus is not greater than one
    /// - A share lies outside the field or two shares share an x value
    ///
    /// A bundle without `required_shares` is reconstructed from whatever shares
    /// it holds. Too few shares then yield a wrong secret without any error.
    ///
    /// # Example
    /// ```
    /// use prime_share::ShamirShare;
    ///
    /// let scheme = ShamirShare::builder(5, 3).build().unwrap();
    /// let bundle = scheme.split(b"data").unwrap();
    ///
    /// let secret = ShamirShare::reconstruct(&bundle).unwrap();
    /// assert_eq!(secret, b"data");
    /// ```
    pub fn reconstruct(bundle: &ShareBundle) -> Result<Vec<u8>> {
        recover_secret(bundle)
    }
}

/// Splits `secret` into `distributed_shares` shares, any `required_shares` of which recover it
///
/// # Example
/// ```
/// use prime_share::{recover_secret, split_secret, Config};
///
/// let bundle = split_secret(b"hello", 2, 3, Config::default()).unwrap();
/// assert_eq!(recover_secret(&bundle).unwrap(), b"hello");
/// ```
pub fn split_secret(
    secret: &[u8],
    required_shares: u32,
    distributed_shares: u32,
    config: Config,
) -> Result<ShareBundle> {
    ShamirShare::builder(distributed_shares, required_shares)
        .with_config(config)
        .build()?
        .split(secret)
}

/// Recovers the secret held by `bundle`
///
/// See [`ShamirShare::reconstruct`].
pub fn recover_secret(bundle: &ShareBundle) -> Result<Vec<u8>> {
    recover_secret_with_config(bundle, &Config::default())
}

/// Recovers the secret, honouring `config.strict_share_count`
pub fn recover_secret_with_config(bundle: &ShareBundle, config: &Config) -> Result<Vec<u8>> {
    if bundle.shares.is_empty() {
        return Err(ShamirError::MissingShares);
    }

    let shares = match bundle.required_shares {
        Some(required) if required > 0 => {
            let needed = required as usize;
            if bundle.shares.len() < needed {
                return Err(ShamirError::InsufficientShares {
                    needed: required,
                    got: bundle.shares.len(),
                });
            }
            &bundle.shares[..needed]
        }
        _ if config.strict_share_count => return Err(ShamirError::MissingThreshold),
        _ => {
            warn!(
                shares = bundle.shares.len(),
                "required share count not specified; \
                 too few shares will produce an incorrect secret without detection"
            );
            &bundle.shares[..]
        }
    };

    let prime_mod = bundle.prime_mod.value();
    if prime_mod <= BigUint::one() {
        return Err(ShamirError::InvalidModulus);
    }

    let points: Vec<(BigUint, BigUint)> = shares
        .iter()
        .map(|share| (BigUint::from(share.x), int_from_bytes(&share.y)))
        .collect();

    let secret_int = lagrange_interpolation(&BigUint::zero(), &points, &prime_mod)?;
    let mut envelope = int_to_bytes(&secret_int);
    let secret = envelope[1..].to_vec();
    #[cfg(feature = "zeroize")]
    envelope.zeroize();

    Ok(secret)
}

/// Evaluates at `x` the unique polynomial of degree `< points.len()` through `points`
///
/// All arithmetic is reduced modulo `prime_mod` after each multiplication.
///
/// # Errors
/// - [`ShamirError::InvalidModulus`] if `prime_mod <= 1`
/// - [`ShamirError::ValueOutOfRange`] if `x >= prime_mod`
/// - [`ShamirError::InvalidPoint`] if a coordinate is outside the field
/// - [`ShamirError::NotCoprime`] if two points share an x value
pub fn lagrange_interpolation(
    x: &BigUint,
    points: &[(BigUint, BigUint)],
    prime_mod: &BigUint,
) -> Result<BigUint> {
    if *prime_mod <= BigUint::one() {
        return Err(ShamirError::InvalidModulus);
    }
    if x >= prime_mod {
        return Err(ShamirError::ValueOutOfRange);
    }
    if let Some(pos) = points
        .iter()
        .position(|(xi, yi)| xi >= prime_mod || yi >= prime_mod)
    {
        return Err(ShamirError::InvalidPoint(pos));
    }

    let mut y = BigUint::zero();
    for (i, (xi, yi)) in points.iter().enumerate() {
        let mut numerator = yi.clone();
        let mut denominator = BigUint::one();
        for (j, (xj, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = (numerator * sub_mod(x, xj, prime_mod)) % prime_mod;
            denominator = (denominator * sub_mod(xi, xj, prime_mod)) % prime_mod;
        }
        let term = (numerator * modular_inverse(&denominator, prime_mod)?) % prime_mod;
        y = (y + term) % prime_mod;
    }

    Ok(y)
}
