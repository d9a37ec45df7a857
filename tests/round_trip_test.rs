use prime_share::{
    Config, RandomSource, RandomnessPreference, SeededRandom, ShamirShare, ShareBundle,
    recover_secret,
};

/// All `k`-element index combinations of `0..n`, in lexicographic order
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn extend(
        start: usize,
        n: usize,
        k: usize,
        current: &mut Vec<usize>,
        out: &mut Vec<Vec<usize>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..n {
            current.push(i);
            extend(i + 1, n, k, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    extend(0, n, k, &mut Vec::new(), &mut out);
    out
}

fn pick(bundle: &ShareBundle, indices: &[usize]) -> ShareBundle {
    ShareBundle {
        shares: indices.iter().map(|&i| bundle.shares[i].clone()).collect(),
        ..bundle.clone()
    }
}

fn fast_scheme(total: u32, threshold: u32) -> ShamirShare {
    ShamirShare::builder(total, threshold)
        .with_config(Config::new().with_randomness(RandomnessPreference::Fast))
        .build()
        .unwrap()
}

#[test]
fn test_every_subset_small_schemes() {
    let secret = b"every subset";
    for n in 1..=6u32 {
        for k in 1..=n {
            let bundle = fast_scheme(n, k).split(secret).unwrap();
            for combo in combinations(n as usize, k as usize) {
                let recovered = recover_secret(&pick(&bundle, &combo)).unwrap();
                assert_eq!(recovered, secret, "n = {n}, k = {k}, shares = {combo:?}");

                // Order does not matter
                let mut reversed = combo.clone();
                reversed.reverse();
                let recovered = recover_secret(&pick(&bundle, &reversed)).unwrap();
                assert_eq!(recovered, secret, "n = {n}, k = {k}, shares = {reversed:?}");
            }
        }
    }
}

#[test]
fn test_sixty_four_shares() {
    let secret = b"sixty-four shares";
    for k in [1u32, 2, 17, 63, 64] {
        let bundle = fast_scheme(64, k).split(secret).unwrap();
        let k = k as usize;

        let first: Vec<usize> = (0..k).collect();
        let last: Vec<usize> = (64 - k..64).collect();
        let reversed: Vec<usize> = (0..k).rev().collect();
        let strided: Vec<usize> = (0..64).rev().step_by(64 / k).take(k).collect();

        for subset in [first, last, reversed, strided] {
            assert_eq!(subset.len(), k);
            let recovered = recover_secret(&pick(&bundle, &subset)).unwrap();
            assert_eq!(recovered, secret, "k = {k}, shares = {subset:?}");
        }
    }
}

#[test]
fn test_secret_lengths() {
    let mut filler = SeededRandom::seed_from_u64(2024);
    let shamir = ShamirShare::new(5, 3).unwrap();

    // Crosses the blocking/fast source boundary at 65 enveloped bytes
    for len in 0..=96usize {
        let secret = filler.next_bytes(len).unwrap();
        let bundle = shamir.split(&secret).unwrap();
        let recovered = recover_secret(&pick(&bundle, &[4, 0, 2])).unwrap();
        assert_eq!(recovered, secret, "len = {len}");
    }
}

#[test]
fn test_large_secret_uses_large_prime() {
    let secret = vec![0xFFu8; 500];
    let bundle = fast_scheme(4, 2).split(&secret).unwrap();
    // 501 bytes = 4008 bits, which only 2^4096 + 1761 and the big Mersenne primes exceed
    assert_eq!(bundle.prime_mod.value().bits(), 4097);
    assert_eq!(recover_secret(&pick(&bundle, &[3, 1])).unwrap(), secret);
}

#[test]
fn test_seeded_splits_round_trip() {
    let shamir = ShamirShare::new(7, 4).unwrap();
    for seed in 0..16u64 {
        let secret = format!("seeded secret {seed}").into_bytes();
        let bundle = shamir
            .split_with_source(&secret, &mut SeededRandom::seed_from_u64(seed))
            .unwrap();
        assert_eq!(recover_secret(&pick(&bundle, &[6, 2, 0, 4])).unwrap(), secret);
    }
}

#[test]
fn test_combinations_helper() {
    assert_eq!(combinations(4, 2).len(), 6);
    assert_eq!(combinations(6, 3).len(), 20);
    assert_eq!(combinations(3, 3), vec![vec![0, 1, 2]]);
}
