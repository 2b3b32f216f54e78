//! Skein Hash Library
//!
//! Skein is a tweakable-block-cipher-based cryptographic hash function
//! (a NIST SHA-3 finalist) built from the Threefish block cipher and
//! Unique Block Iteration (UBI) chaining.
//!
//! # Example
//!
//! ```rust
//! use skein::algorithm::{hash512, Skein512, SkeinContext};
//!
//! let mut digest = [0u8; 64];
//! hash512(512, b"input data", &mut digest).unwrap();
//!
//! let mut ctx = Skein512::init(512).unwrap();
//! ctx.update(b"input ").unwrap();
//! ctx.update(b"data").unwrap();
//! let mut out = [0u8; 64];
//! ctx.finalize(&mut out).unwrap();
//! assert_eq!(digest, out);
//! ```

// Re-export the core algorithm
pub use skein_core as algorithm;

// Convenience re-exports
pub use algorithm::{
    hash1024, hash256, hash512, RoundObserver, Skein1024, Skein256, Skein512, SkeinContext,
    SkeinError,
};
