//! Text renditions of a [`ShareBundle`]
//!
//! Both encodings map a bundle to an [`EncodedBundle`] whose prime is a text
//! string and whose shares are strings of the form `<x>-<y>`, with `x` in
//! decimal and `y` in the chosen encoding:
//!
//! ```text
//! required_shares: 3
//! prime_mod: "H/////////8="
//! shares: ["1-Gk2ghnHG", "2-CZlO3Q5V", ...]
//! ```
//!
//! [`EncodedBundle`] derives serde's traits, so it can be written out as JSON or
//! any other serde format.

use crate::codec::int_to_bytes;
use crate::error::{Result, ShamirError};
use crate::shamir::{PrimeModulus, Share, ShareBundle};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// A bundle with every byte string rendered as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedBundle {
    pub required_shares: Option<u32>,
    pub prime_mod: EncodedPrime,
    pub shares: Vec<String>,
}

/// The prime as it appears in an encoded bundle
///
/// Encoding always produces [`EncodedPrime::Text`]. When decoding, a plain
/// integer is taken as the prime itself rather than as encoded bytes.
///
/// The integer form only reaches primes below 2^64, which in the prime table
/// means 2^17 - 1, 2^19 - 1, 2^31 - 1 and 2^61 - 1. Larger primes must be
/// given as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EncodedPrime {
    Integer(u64),
    Text(String),
}

trait TextCodec {
    fn encode(bytes: &[u8]) -> String;
    fn decode(text: &str) -> Result<Vec<u8>>;
}

struct Base64Text;

impl TextCodec for Base64Text {
    fn encode(bytes: &[u8]) -> String {
        B64.encode(bytes)
    }

    fn decode(text: &str) -> Result<Vec<u8>> {
        Ok(B64.decode(text)?)
    }
}

struct HexText;

impl TextCodec for HexText {
    fn encode(bytes: &[u8]) -> String {
        hex::encode(bytes)
    }

    fn decode(text: &str) -> Result<Vec<u8>> {
        Ok(hex::decode(text)?)
    }
}

fn encode_bundle<C: TextCodec>(bundle: &ShareBundle) -> EncodedBundle {
    let prime_bytes = match &bundle.prime_mod {
        PrimeModulus::Bytes(bytes) => C::encode(bytes),
        PrimeModulus::Integer(value) => C::encode(&int_to_bytes(value)),
    };
    EncodedBundle {
        required_shares: bundle.required_shares,
        prime_mod: EncodedPrime::Text(prime_bytes),
        shares: bundle
            .shares
            .iter()
            .map(|share| format!("{}-{}", share.x, C::encode(&share.y)))
            .collect(),
    }
}

fn decode_share<C: TextCodec>(text: &str) -> Result<Share> {
    let (x, y) = text
        .split_once('-')
        .ok_or(ShamirError::InvalidShareFormat)?;
    let x = x.parse().map_err(|_| ShamirError::InvalidShareFormat)?;
    Ok(Share::new(x, C::decode(y)?))
}

fn decode_bundle<C: TextCodec>(encoded: &EncodedBundle) -> Result<ShareBundle> {
    let prime_mod = match &encoded.prime_mod {
        EncodedPrime::Integer(value) => PrimeModulus::Integer(BigUint::from(*value)),
        EncodedPrime::Text(text) => PrimeModulus::Bytes(C::decode(text)?),
    };
    let shares = encoded
        .shares
        .iter()
        .map(|share| decode_share::<C>(share))
        .collect::<Result<Vec<_>>>()?;

    Ok(ShareBundle {
        required_shares: encoded.required_shares,
        prime_mod,
        shares,
    })
}

/// Renders the bundle with standard, padded base64
pub fn to_base64(bundle: &ShareBundle) -> EncodedBundle {
    encode_bundle::<Base64Text>(bundle)
}

/// Parses a bundle produced by [`to_base64`]
pub fn from_base64(encoded: &EncodedBundle) -> Result<ShareBundle> {
    decode_bundle::<Base64Text>(encoded)
}

/// Renders the bundle with lowercase hexadecimal
pub fn to_hex(bundle: &ShareBundle) -> EncodedBundle {
    encode_bundle::<HexText>(bundle)
}

/// Parses a bundle produced by [`to_hex`]
pub fn from_hex(encoded: &EncodedBundle) -> Result<ShareBundle> {
    decode_bundle::<HexText>(encoded)
}
