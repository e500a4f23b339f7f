//! Known-answer vectors and XOF property tests for the public API.
use shake128::{shake128, Shake128};

/// FIPS 202 SHAKE128("") with a 32-byte output.
const KAT_EMPTY: &str = "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26";

/// FIPS 202 SHAKE128("abc") with a 32-byte output.
const KAT_ABC: &str = "5881092dd818bf5cf8a3ddb793fbcba74097d5c526a6d35f97b83351940f2cc8";

#[test]
fn e1_empty_input() {
    let digest = shake128(b"", 32);
    assert_eq!(hex::encode(&digest), KAT_EMPTY);
}

#[test]
fn e2_abc_input() {
    let digest = shake128(b"abc", 32);
    assert_eq!(hex::encode(&digest), KAT_ABC);
}

#[test]
fn e3_streaming_matches_one_shot() {
    let mut ctx = Shake128::new();
    ctx.update(b"abc").unwrap();
    ctx.update(b"def").unwrap();
    let streamed = ctx.digest(16);
    let one_shot = shake128(b"abcdef", 16);
    assert_eq!(streamed, one_shot);
}

#[test]
fn e4_long_input_is_reproducible() {
    let data: Vec<u8> = (0..200u32).map(|i| (i % 256) as u8).collect();
    let first = shake128(&data, 32);
    let second = shake128(&data, 32);
    assert_eq!(first.len(), 32);
    assert_eq!(first, second);
}

#[test]
fn e5_long_output_prefix_matches_short_output() {
    let long = shake128(&[0x78], 256);
    let short = shake128(&[0x78], 32);
    assert_eq!(long.len(), 256);
    assert_eq!(&long[..32], short.as_slice());
}

#[test]
fn e6_block_boundary_is_deterministic() {
    let data = vec![0u8; 168];
    let a = shake128(&data, 32);
    let b = shake128(&data, 32);
    assert_eq!(a, b);
}

#[test]
fn invariant_determinism() {
    for &n in &[0usize, 1, 31, 32, 33, 100] {
        let m = b"the quick brown fox jumps over the lazy dog";
        assert_eq!(shake128(m, n), shake128(m, n));
    }
}

#[test]
fn invariant_streaming_equivalence_arbitrary_partitions() {
    let data: Vec<u8> = (0..500u32).map(|i| (i % 251) as u8).collect();
    let partitions: &[&[usize]] = &[
        &[],
        &[0],
        &[500],
        &[1, 499],
        &[168, 168, 164],
        &[167, 1, 167, 1, 164],
        &[0, 0, 500],
        &[100; 5],
    ];
    let reference = shake128(&data, 48);

    for chunks in partitions {
        let mut ctx = Shake128::new();
        let mut offset = 0;
        for &len in *chunks {
            ctx.update(&data[offset..offset + len]).unwrap();
            offset += len;
        }
        // Absorb whatever the partition didn't cover.
        ctx.update(&data[offset..]).unwrap();
        assert_eq!(ctx.digest(48), reference, "partition {chunks:?} differs");
    }
}

#[test]
fn invariant_prefix_property() {
    let data = b"the prefix property holds for any n1 <= n2";
    let long = shake128(data, 200);
    for &n1 in &[0usize, 1, 32, 168, 199] {
        let short = shake128(data, n1);
        assert_eq!(short, &long[..n1], "n1 = {n1}");
    }
}

#[test]
fn invariant_idempotent_digest() {
    let mut ctx = Shake128::new();
    ctx.update(b"idempotent").unwrap();
    let first = ctx.digest(64);
    let second = ctx.digest(64);
    assert_eq!(first, second);
}

#[test]
fn invariant_reset_purity() {
    let mut ctx = Shake128::new();
    ctx.update(b"stateful").unwrap();
    let _ = ctx.digest(16);
    ctx.reset();

    ctx.update(b"abc").unwrap();
    assert_eq!(ctx.digest(32), shake128(b"abc", 32));
}

#[test]
fn invariant_block_boundary_lengths() {
    const RATE: usize = 168;
    for &len in &[0usize, 1, RATE - 1, RATE, RATE + 1, 2 * RATE - 1, 2 * RATE, 2 * RATE + 1] {
        let data = vec![0x5a_u8; len];
        let ours = shake128(&data, 32);

        use sha3::digest::{ExtendableOutput, Update, XofReader};
        let mut hasher = sha3::Shake128::default();
        hasher.update(&data);
        let mut theirs = vec![0u8; 32];
        hasher.finalize_xof().read(&mut theirs);

        assert_eq!(ours, theirs, "length {len} disagrees with reference");
    }
}

#[test]
fn differential_against_sha3_crate_across_lengths() {
    use sha3::digest::{ExtendableOutput, Update, XofReader};

    for len in 0..400 {
        let data: Vec<u8> = (0..len as u32).map(|i| (i % 256) as u8).collect();
        let ours = shake128(&data, 40);

        let mut hasher = sha3::Shake128::default();
        hasher.update(&data);
        let mut theirs = vec![0u8; 40];
        hasher.finalize_xof().read(&mut theirs);

        assert_eq!(ours, theirs, "length {len} disagrees with reference");
    }
}

#[test]
fn update_after_finalize_is_rejected() {
    let mut ctx = Shake128::new();
    ctx.update(b"abc").unwrap();
    let _ = ctx.digest(16);
    assert!(ctx.update(b"more").is_err());
}
