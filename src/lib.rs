#![forbid(unsafe_code)]
//! A portable implementation of SHAKE128, the 128-bit-security
//! extendable-output function (XOF) from the SHA-3 family (FIPS 202).
//!
//! ```
//! use shake128::Shake128;
//!
//! let mut ctx = Shake128::new();
//! ctx.update(b"abc").unwrap();
//! let digest = ctx.digest(32);
//! assert_eq!(digest, shake128::shake128(b"abc", 32));
//! ```
//!
//! This crate implements only the Keccak-f\[1600\] permutation and the
//! SHAKE128 sponge wrapper around it: no constant-time guarantees, no
//! KMAC/cSHAKE/SHAKE256, no incremental squeeze beyond a single bounded
//! `digest(len)` request per call, and no persistence of intermediate
//! state.

mod error;
mod permute;
mod sponge;

pub use error::Error;
pub use sponge::Shake128;

/// One-shot SHAKE128: absorb `data` and return `output_len` bytes of
/// output. Equivalent to constructing a fresh [`Shake128`], calling
/// `update(data)`, and returning `digest(output_len)`.
pub fn shake128(data: &[u8], output_len: usize) -> Vec<u8> {
    Shake128::hash(data, output_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_hash() {
        let input = b"some input string";
        dbg!(shake128(&input[..], 32));
    }

    #[cfg(not(miri))]
    #[test]
    fn compare_to_sha3_crate() {
        use sha3::digest::{ExtendableOutput, Update, XofReader};

        // Go beyond one block in both directions.
        for i in 0..300 {
            let input = vec![0; i];
            let my_hash = shake128(&input, 64);

            let mut hasher = sha3::Shake128::default();
            hasher.update(&input);
            let mut other_hash = vec![0u8; 64];
            hasher.finalize_xof().read(&mut other_hash);

            assert_eq!(my_hash, other_hash, "len {i} hash differs");
        }
    }
}
