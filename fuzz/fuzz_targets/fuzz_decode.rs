#![no_main]

use libfuzzer_sys::fuzz_target;
use prime_share::encoding::{from_base64, from_hex};
use prime_share::{EncodedBundle, EncodedPrime};

// Arbitrary text in the share and prime fields must decode to Ok or Err,
// never panic.
fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut parts = text.split('\n');
    let prime = parts.next().unwrap_or_default().to_string();
    let shares: Vec<String> = parts.map(str::to_string).collect();

    let encoded = EncodedBundle {
        required_shares: Some(shares.len() as u32),
        prime_mod: EncodedPrime::Text(prime),
        shares,
    };
    let _result = from_hex(&encoded);
    let _result = from_base64(&encoded);
});
