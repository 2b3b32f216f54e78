//! Optional diagnostic hook for round-by-round state inspection.
//!
//! The original C source traces round state through a macro that compiles
//! to nothing unless a debug build defines `SKEIN_DEBUG`. Rather than gate
//! this behind conditional compilation, it is exposed here as a callback
//! trait so tests (or any embedder) can attach an observer without
//! rebuilding the crate.

/// Receives a snapshot after round `round` of a single Threefish block
/// call (`round == 0` is the state right after the initial key
/// injection). `state` holds the current Nw 64-bit words.
pub trait RoundObserver {
    fn round(&mut self, round: usize, state: &[u64]);
}

impl<F: FnMut(usize, &[u64])> RoundObserver for F {
    fn round(&mut self, round: usize, state: &[u64]) {
        (self)(round, state)
    }
}
