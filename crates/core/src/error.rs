//! Error taxonomy: two outcomes, no panics on any API-reachable path.

#[cfg(feature = "std")]
use thiserror::Error;

/// Errors surfaced by the streaming and one-shot Skein API.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeinError {
    /// The requested output length is not supported (must be a positive
    /// bit count; zero is rejected).
    #[cfg_attr(feature = "std", error("unsupported hash bit length"))]
    BadHashLen,
    /// `update`/`update_bits`/`finalize` called out of sequence — most
    /// commonly `finalize` called twice, or a non-byte-aligned `update`
    /// in the middle of a stream.
    #[cfg_attr(feature = "std", error("context used out of sequence"))]
    BadState,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for SkeinError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SkeinError::BadHashLen => "unsupported hash bit length",
            SkeinError::BadState => "context used out of sequence",
        };
        f.write_str(msg)
    }
}
