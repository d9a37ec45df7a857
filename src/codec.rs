//! Big-endian conversions between byte strings and field integers

use num_bigint::BigUint;

/// Decodes a big-endian unsigned integer. An empty slice decodes to zero.
#[inline]
pub fn int_from_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Encodes `value` big-endian using the fewest bytes that represent it
///
/// Zero encodes as a single zero byte.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use prime_share::codec::int_to_bytes;
///
/// assert_eq!(int_to_bytes(&BigUint::from(0x012345u32)), vec![0x01, 0x23, 0x45]);
/// assert_eq!(int_to_bytes(&BigUint::from(0u32)), vec![0x00]);
/// ```
#[inline]
pub fn int_to_bytes(value: &BigUint) -> Vec<u8> {
    value.to_bytes_be()
}

/// `ceil(bits / 8)`; zero bits need zero bytes
#[inline]
pub fn required_bytes_given_bitlength(bits: u64) -> u64 {
    bits.div_ceil(8)
}

/// Bytes needed for the bit length of `value` (zero for a zero value)
#[inline]
pub fn required_bytes_given_value(value: &BigUint) -> u64 {
    required_bytes_given_bitlength(value.bits())
}
