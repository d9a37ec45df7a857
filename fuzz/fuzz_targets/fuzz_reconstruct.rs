#![no_main]

use libfuzzer_sys::fuzz_target;
use prime_share::{PrimeModulus, Share, ShareBundle, recover_secret};

// Builds arbitrary bundles from fuzzer bytes and feeds them to recover_secret.
// Whatever the input (zero or duplicate x values, y outside the field, a
// modulus of 0 or 1, bogus required_shares) reconstruction must return a
// Result and never panic.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let required_shares = match data[0] % 4 {
        0 => None,
        n => Some(u32::from(data[1] % 8) * u32::from(n)),
    };

    // Prime bytes: length from the input, capped to keep runs fast
    let prime_len = (data[2] as usize % 16).min(data.len() - 3);
    let prime_bytes = data[3..3 + prime_len].to_vec();
    let mut offset = 3 + prime_len;

    let mut shares = Vec::new();
    while offset + 2 <= data.len() && shares.len() < 20 {
        let x = u32::from(data[offset]);
        let y_len = (data[offset + 1] as usize % 24).min(data.len() - offset - 2);
        let y = data[offset + 2..offset + 2 + y_len].to_vec();
        offset += 2 + y_len;
        shares.push(Share::new(x, y));
    }

    let bundle = ShareBundle {
        required_shares,
        prime_mod: PrimeModulus::Bytes(prime_bytes),
        shares,
    };
    let _result = recover_secret(&bundle);

    // The same points with a known-good prime
    let mut tabulated = bundle.clone();
    tabulated.prime_mod = PrimeModulus::Integer(prime_share::tabulated_primes()[3].clone());
    let _result = recover_secret(&tabulated);

    // Empty share list
    let mut empty = bundle;
    empty.shares.clear();
    let _result = recover_secret(&empty);
});
