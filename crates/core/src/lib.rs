//! # Skein Core Algorithm
//!
//! Skein is a tweakable-block-cipher-based hash function built from the
//! Threefish cipher and Unique Block Iteration (UBI) chaining. It was one
//! of the five NIST SHA-3 finalists.
//!
//! ## Family
//!
//! - **Skein-256**: Nw=4 64-bit words, 72 rounds, Nb=32-byte blocks
//! - **Skein-512**: Nw=8 64-bit words, 72 rounds, Nb=64-byte blocks
//! - **Skein-1024**: Nw=16 64-bit words, 80 rounds, Nb=128-byte blocks
//!
//! Every size supports an arbitrary requested output length in bits, not
//! just its native chaining-state width.
//!
//! ## Example
//!
//! ```rust
//! use skein_core::{Skein512, hash512};
//!
//! // One-shot
//! let mut digest = [0u8; 64];
//! hash512(512, b"input data", &mut digest).unwrap();
//!
//! // Streaming
//! let mut ctx = Skein512::init(512).unwrap();
//! ctx.update(b"first chunk ").unwrap();
//! ctx.update(b"second chunk").unwrap();
//! let mut out = [0u8; 64];
//! ctx.finalize(&mut out).unwrap();
//! ```
//!
//! ## no_std support
//!
//! This crate supports `no_std` environments:
//!
//! ```toml
//! [dependencies]
//! skein-core = { version = "0.1", default-features = false }
//! ```
//!
//! Without the `std` feature, [`SkeinError`] still implements
//! `core::fmt::Display`, just not `std::error::Error`.

#![cfg_attr(not(feature = "std"), no_std)]

mod error;
mod observer;
mod params;
mod rotation;
mod skein;
mod threefish;
mod ubi;

pub use error::SkeinError;
pub use observer::RoundObserver;
pub use skein::{hash1024, hash256, hash512, Skein1024, Skein256, Skein512, SkeinContext};
