//! Error types surfaced by the public [`crate::Shake128`] API.
use thiserror::Error;

/// Errors that can occur while driving a [`crate::Shake128`] context.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Returned by [`crate::Shake128::update`] when called on a context
    /// that has already produced output via `digest`. The context is left
    /// unmodified and remains usable in the squeeze phase; call `reset` to
    /// absorb new input.
    #[error("update() called after digest() finalized the sponge; call reset() first")]
    UpdateAfterFinalize,
}
