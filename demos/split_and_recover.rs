use prime_share::{Config, ShamirShare, SplitMode, encoding};

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Prime Field Secret Sharing Demo ===\n");

    let shamir = ShamirShare::builder(5, 3)
        .with_config(Config::new().with_mode(SplitMode::Parallel))
        .build()
        .unwrap();
    let secret = b"correct horse battery staple";

    println!("Secret: {:?}", std::str::from_utf8(secret).unwrap());
    println!("Configuration: 5 total shares, threshold of 3\n");

    let bundle = shamir.split(secret).unwrap();
    println!("Prime modulus: {} bits", bundle.prime_mod.value().bits());

    // Demo 1: shares as text
    println!("\nDemo 1: Shares rendered as base64");
    let encoded = encoding::to_base64(&bundle);
    for share in &encoded.shares {
        println!("  {share}");
    }

    // Demo 2: any three shares reconstruct the secret
    println!("\nDemo 2: Reconstruct from shares 5, 2 and 4");
    let mut restored = encoding::from_base64(&encoded).unwrap();
    restored.shares = [4, 1, 3].iter().map(|&i| restored.shares[i].clone()).collect();
    let reconstructed = ShamirShare::reconstruct(&restored).unwrap();
    println!("Reconstruction successful: {}", reconstructed == secret);

    // Demo 3: two shares are not enough
    println!("\nDemo 3: Reconstruct from only two shares");
    restored.shares.truncate(2);
    match ShamirShare::reconstruct(&restored) {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("Rejected: {e}"),
    }

    // Demo 4: without the share count, too few shares give garbage
    println!("\nDemo 4: Same two shares with required_shares removed");
    restored.required_shares = None;
    let wrong = ShamirShare::reconstruct(&restored).unwrap();
    println!("Recovered matches secret: {}", wrong == secret);
}
