//! KECCAK-f[1600] permutation based on [XKCP]
//!
//! This implementation is closely based on the [readable and compact] and
//! [ref-64-bits] implementations of the KECCAK Team, adapted to expose the
//! state as a flat byte-addressable buffer rather than a fixed hash-output
//! width, so that a single engine can back a streaming sponge with an
//! arbitrary-length squeeze.
//!
//! [readable and compact]: https://github.com/XKCP/XKCP/blob/716f007dd73ef28d357b8162173646be574ad1b7/Standalone/CompactFIPS202/C/Keccak-readable-and-compact.c
//! [ref-64-bits]: https://github.com/XKCP/XKCP/tree/716f007dd73ef28d357b8162173646be574ad1b7/lib/low/KeccakP-1600/ref-64bits
//! [XKCP]: https://github.com/XKCP/XKCP
#![allow(non_snake_case)]
use std::ops::{Index, IndexMut};

// NOTE: References to Sections, Algorithms, Tables, etc. refer to the
// FIPS 202 standard (https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf)
// if not otherwise specified.

/// Number of rounds performed in `KECCAK-p[1600, 24]`.
const ROUNDS: usize = 24;

/// Lane of the state array containing w = 64 bits.
type Lane = u64;

/// Total addressable bytes of the 1600-bit state.
pub(crate) const STATE_BYTES: usize = 200;

/// State array A of Keccak-f[1600]. Contains 1600 bits as 25 lanes of 64
/// bits each. Byte `b` of the state is `(lane(b / 8) >> 8 * (b % 8)) & 0xFF`;
/// no observable state exists outside these 200 bytes, and permutation
/// scratch never leaks between calls to [`KeccakState::permute`].
#[derive(Clone, Copy)]
pub(crate) struct KeccakState([Lane; 25]);

/// Compute a lane index in [`KeccakState`] from its (x, y) coordinates.
#[inline(always)]
fn idx(x: usize, y: usize) -> usize {
    // % ops are optimized out for constant x, y
    (x % 5) + 5 * (y % 5)
}

impl Index<(usize, usize)> for KeccakState {
    type Output = Lane;

    #[inline(always)]
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.0[idx(x, y)]
    }
}

impl IndexMut<(usize, usize)> for KeccakState {
    #[inline(always)]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        &mut self.0[idx(x, y)]
    }
}

impl KeccakState {
    pub(crate) fn new() -> Self {
        Self([0; 25])
    }

    /// Set every lane to zero.
    pub(crate) fn reset(&mut self) {
        self.0 = [0; 25];
    }

    /// XOR the low 8 bits of `value` into the state byte at `offset`.
    pub(crate) fn xor_byte(&mut self, value: u8, offset: usize) {
        let lane = offset / 8;
        let shift = 8 * (offset % 8);
        self.0[lane] ^= (value as Lane) << shift;
    }

    /// XOR `src` into the state starting at byte `state_off`.
    ///
    /// Requires `state_off + src.len() <= STATE_BYTES`; callers never
    /// absorb across the rate boundary, so `src` is at most one rate block.
    pub(crate) fn xor_bytes(&mut self, src: &[u8], state_off: usize) {
        debug_assert!(state_off + src.len() <= STATE_BYTES);
        for (i, &byte) in src.iter().enumerate() {
            self.xor_byte(byte, state_off + i);
        }
    }

    /// Write `dst.len()` bytes of state starting at byte `state_off` into
    /// `dst`. Requires `state_off + dst.len() <= STATE_BYTES`.
    pub(crate) fn extract_bytes(&self, dst: &mut [u8], state_off: usize) {
        debug_assert!(state_off + dst.len() <= STATE_BYTES);
        for (i, out) in dst.iter_mut().enumerate() {
            let offset = state_off + i;
            let lane = self.0[offset / 8];
            let shift = 8 * (offset % 8);
            *out = (lane >> shift) as u8;
        }
    }

    /// 3.3 Algorithm 7: KECCAK-p[b, nr](S)
    ///
    /// Not the generic algorithm, but specialized to `b = 1600` and
    /// `nr = 24`. See Section 3.4 of FIPS 202.
    pub(crate) fn permute(&mut self) {
        for round in 0..ROUNDS {
            theta(self);
            rho(self);
            pi(self);
            chi(self);
            iota(self, round);
        }
    }
}

/// 3.2.1 Algorithm 1: θ(A)
fn theta(A: &mut KeccakState) {
    // We have 5 * 64 columns, whose parity bits we can store in 5 lanes
    let mut C: [Lane; 5] = Default::default();
    // Step 1: compute the parity of the columns
    for (x, Cx) in C.iter_mut().enumerate() {
        *Cx ^= A[(x, 0)];
        *Cx ^= A[(x, 1)];
        *Cx ^= A[(x, 2)];
        *Cx ^= A[(x, 3)];
        *Cx ^= A[(x, 4)];
    }

    // Interleaved step 2 and 3
    for x in 0..5 {
        // Step 2: compute the θ effect for a given column
        // (x + 4) % 5 is equivalent to (x - 1) % 5 in the spec
        let D = C[(x + 4) % 5] ^ C[(x + 1) % 5].rotate_left(1);
        // Step 3: add the θ effect to the whole column
        for y in 0..5 {
            A[(x, y)] ^= D;
        }
    }
}

/// Table 2: values are modulo the lane width w = 64.
/// In row-major order starting with x = 0, y = 0.
const KECCAK_RHO_OFFSETS: [u32; 25] = [
    0, 1, 62, 28, 27, 36, 44, 6, 55, 20, 3, 10, 43, 25, 39, 41, 45, 15, 21, 8, 18, 2, 61, 56, 14,
];

/// 3.2.2 Algorithm 2: ρ(A)
///
/// Rotates the bits of each lane by an offset depending on its fixed (x, y)
/// coordinates.
fn rho(A: &mut KeccakState) {
    for x in 0..5 {
        for y in 0..5 {
            A[(x, y)] = A[(x, y)].rotate_left(KECCAK_RHO_OFFSETS[x + 5 * y]);
        }
    }
}

/// 3.2.3 Algorithm 3: π(A)
///
/// Rearranges the positions of the lanes.
fn pi(A: &mut KeccakState) {
    let temp_A = *A;
    for x in 0..5 {
        for y in 0..5 {
            A[(y, 2 * x + 3 * y)] = temp_A[(x, y)];
        }
    }
}

/// 3.2.4 Algorithm 4: χ(A)
///
/// XORs each bit with a non-linear function of two other bits in its row.
fn chi(A: &mut KeccakState) {
    let mut C: [Lane; 5] = Default::default();

    for y in 0..5 {
        for (x, Cx) in C.iter_mut().enumerate() {
            *Cx = A[(x, y)] ^ (!A[(x + 1, y)] & A[(x + 2, y)]);
        }
        for (x, Cx) in C.into_iter().enumerate() {
            A[(x, y)] = Cx;
        }
    }
}

/// Round constants applied to the (0, 0) lane in the [`iota`] step.
/// Table taken from:
/// https://github.com/XKCP/XKCP/blob/716f007dd73ef28d357b8162173646be574ad1b7/lib/low/KeccakP-1600/ref-64bits/KeccakP-1600-reference.c#L109-L135
const KECCAK_ROUND_CONSTANTS: [Lane; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// 3.2.5 Algorithm 6: ι(A, ir)
///
/// Modifies some of the bits of lane (0, 0) depending on the round index.
fn iota(A: &mut KeccakState, round: usize) {
    A[(0, 0)] ^= KECCAK_ROUND_CONSTANTS[round];
}
