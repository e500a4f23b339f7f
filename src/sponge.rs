//! SHAKE128 sponge construction with an incremental absorb/squeeze API.
use crate::error::Error;
use crate::permute::KeccakState;

/// Rate of the sponge in bytes: the portion of the 200-byte state that
/// absorbs input and produces output.
const RATE: usize = 168;

/// Capacity of the sponge in bytes: `200 - RATE`, untouched by input/output.
#[allow(dead_code)]
const CAPACITY: usize = 200 - RATE;

/// SHAKE domain-separation suffix (FIPS 202 §6.2), XORed in at finalization.
const SUFFIX: u8 = 0x1F;

/// Padding tail bit (the final '1' of the `pad10*1` rule), always lands on
/// the last byte of the rate.
const PAD: u8 = 0x80;

/// A SHAKE128 extendable-output function context.
///
/// Accepts [`Shake128::update`] calls while absorbing, then transitions to
/// the squeeze phase on the first [`Shake128::digest`] call. `digest` is
/// idempotent: repeated calls on the same context return the same prefix
/// of the output stream (see the crate-level docs for the full contract).
pub struct Shake128 {
    state: KeccakState,
    /// Bytes XORed into the current rate block since the last permutation.
    /// Always `< RATE`.
    absorbed: usize,
    /// `false` while absorbing, `true` once the first `digest` call has
    /// applied padding and performed the finalizing permutation.
    finalized: bool,
}

impl Shake128 {
    /// Construct a fresh, empty context.
    pub fn new() -> Self {
        Self {
            state: KeccakState::new(),
            absorbed: 0,
            finalized: false,
        }
    }

    /// Absorb `data` into the sponge.
    ///
    /// Bytes are absorbed in the order they appear in `data` and across
    /// successive calls: splitting a message into any sequence of `update`
    /// calls yields the same state as a single call with the concatenated
    /// bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UpdateAfterFinalize`] if this context has already
    /// produced output via [`Shake128::digest`]. The context is left
    /// unchanged and remains usable for further `digest` calls.
    pub fn update(&mut self, data: &[u8]) -> Result<(), Error> {
        if self.finalized {
            return Err(Error::UpdateAfterFinalize);
        }

        let mut data = data;
        while !data.is_empty() {
            let take = (RATE - self.absorbed).min(data.len());
            let (chunk, rest) = data.split_at(take);
            self.state.xor_bytes(chunk, self.absorbed);
            self.absorbed += take;
            data = rest;

            if self.absorbed == RATE {
                self.state.permute();
                self.absorbed = 0;
            }
        }
        Ok(())
    }

    /// Finalize (if not already finalized) and produce `output_len` bytes.
    ///
    /// The first call applies SHAKE padding (suffix `0x1F`, trailing
    /// `0x80`) and performs the finalizing permutation. Every call,
    /// including the first, squeezes from the start of the output stream,
    /// so `digest(n)` always returns the same `n` bytes regardless of how
    /// many times it has been called before.
    pub fn digest(&mut self, output_len: usize) -> Vec<u8> {
        if !self.finalized {
            self.state.xor_byte(SUFFIX, self.absorbed);
            self.state.xor_byte(PAD, RATE - 1);
            self.state.permute();
            self.finalized = true;
        }

        // Squeeze from a scratch copy of the finalized state so that
        // `self.state` always represents the pristine, freshly-finalized
        // checkpoint and repeated `digest` calls are idempotent.
        let mut work = self.state;
        let mut output = vec![0u8; output_len];
        let mut squeeze_off = 0;
        let mut pos = 0;
        let mut remaining = output_len;

        while remaining > 0 {
            let take = (RATE - squeeze_off).min(remaining);
            work.extract_bytes(&mut output[pos..pos + take], squeeze_off);
            squeeze_off += take;
            pos += take;
            remaining -= take;

            if remaining > 0 && squeeze_off == RATE {
                work.permute();
                squeeze_off = 0;
            }
        }

        output
    }

    /// Return this context to its freshly-constructed state.
    pub fn reset(&mut self) {
        self.state.reset();
        self.absorbed = 0;
        self.finalized = false;
    }

    /// One-shot convenience: absorb `data` and return `output_len` bytes.
    pub fn hash(data: &[u8], output_len: usize) -> Vec<u8> {
        let mut ctx = Self::new();
        ctx.update(data)
            .expect("a freshly constructed context is never finalized");
        ctx.digest(output_len)
    }
}

impl Default for Shake128 {
    fn default() -> Self {
        Self::new()
    }
}
