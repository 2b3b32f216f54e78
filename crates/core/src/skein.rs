//! The Skein hash driver: CFG/MSG/OUT UBI passes wired into a NIST-shaped
//! `Init`/`Update`/`Final` streaming API, plus a one-shot convenience
//! front end.

use core::cmp::min;

use zeroize::Zeroize;

use crate::error::SkeinError;
use crate::observer::RoundObserver;
use crate::params::{config_block, UbiType};
use crate::threefish::{block_1024, block_256, block_512};
use crate::ubi::{
    bytes_to_words_1024, bytes_to_words_256, bytes_to_words_512, ubi_1024, ubi_256, ubi_512,
    words_to_bytes_1024, words_to_bytes_256, words_to_bytes_512,
};

/// Tracks where a context sits in its Init -> (Update)* -> Final
/// lifecycle. Whether any update has happened yet is never externally
/// observable, so only the finalized/not-finalized distinction is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Accepting,
    Finalized,
}

/// Common shape of [`Skein256`], [`Skein512`] and [`Skein1024`], for code
/// that needs to be generic over the chosen state size.
pub trait SkeinContext: Sized {
    fn init(hash_bit_len: u64) -> Result<Self, SkeinError>;
    fn update(&mut self, data: &[u8]) -> Result<(), SkeinError>;
    fn update_bits(&mut self, data: &[u8], data_bit_len: u64) -> Result<(), SkeinError>;
    fn finalize(&mut self, out: &mut [u8]) -> Result<(), SkeinError>;
}

macro_rules! skein_context {
    (
        $name:ident, $nw:expr, $nb:expr,
        $block_fn:ident, $ubi_fn:ident,
        $words_to_bytes:ident, $bytes_to_words:ident,
        $doc:expr
    ) => {
        #[doc = $doc]
        pub struct $name {
            g: [u64; $nw],
            hash_bit_len: u64,
            buf: [u8; $nb],
            buf_len: usize,
            t0: u64,
            first: bool,
            bit_padded: bool,
            state: State,
        }

        impl $name {
            /// Runs the CFG UBI pass and readies the context for the MSG
            /// pass. `hash_bit_len` is the requested output length in
            /// bits; any positive value is accepted, with a partial
            /// trailing output byte when it isn't a multiple of 8.
            pub fn init(hash_bit_len: u64) -> Result<Self, SkeinError> {
                if hash_bit_len == 0 {
                    return Err(SkeinError::BadHashLen);
                }
                let cfg = config_block(hash_bit_len);
                let g = $ubi_fn([0u64; $nw], &cfg, UbiType::Cfg, None);
                Ok(Self {
                    g,
                    hash_bit_len,
                    buf: [0u8; $nb],
                    buf_len: 0,
                    t0: 0,
                    first: true,
                    bit_padded: false,
                    state: State::Accepting,
                })
            }

            /// Appends whole bytes of message data. May be called any
            /// number of times before [`Self::finalize`].
            pub fn update(&mut self, data: &[u8]) -> Result<(), SkeinError> {
                self.update_with_observer(data, None)
            }

            /// Like [`Self::update`], attaching a round observer for
            /// diagnostics (see [`crate::RoundObserver`]).
            pub fn update_with_observer(
                &mut self,
                mut data: &[u8],
                mut observer: Option<&mut dyn RoundObserver>,
            ) -> Result<(), SkeinError> {
                if self.state == State::Finalized || self.bit_padded {
                    return Err(SkeinError::BadState);
                }
                if data.is_empty() {
                    return Ok(());
                }

                if self.buf_len > 0 {
                    let need = $nb - self.buf_len;
                    if data.len() <= need {
                        self.buf[self.buf_len..self.buf_len + data.len()].copy_from_slice(data);
                        self.buf_len += data.len();
                        return Ok(());
                    }
                    self.buf[self.buf_len..$nb].copy_from_slice(&data[..need]);
                    self.process_full_block(observer.as_deref_mut());
                    data = &data[need..];
                }

                while data.len() > $nb {
                    let (block, rest) = data.split_at($nb);
                    self.buf.copy_from_slice(block);
                    self.process_full_block(observer.as_deref_mut());
                    data = rest;
                }

                self.buf[..data.len()].copy_from_slice(data);
                self.buf_len = data.len();
                Ok(())
            }

            /// Appends a bit-level final chunk: `data_bit_len` significant
            /// bits of `data`, least-significant byte last. Only the
            /// final call before [`Self::finalize`] may use a
            /// `data_bit_len` that isn't a multiple of 8; any further
            /// call after that returns [`SkeinError::BadState`].
            pub fn update_bits(
                &mut self,
                data: &[u8],
                data_bit_len: u64,
            ) -> Result<(), SkeinError> {
                if self.state == State::Finalized || self.bit_padded {
                    return Err(SkeinError::BadState);
                }
                let full_bytes = (data_bit_len / 8) as usize;
                let rem_bits = (data_bit_len % 8) as u32;
                if rem_bits == 0 {
                    return self.update(&data[..full_bytes]);
                }
                self.update(&data[..full_bytes])?;
                let last = data[full_bytes];
                let keep_mask = 0xFFu8 << (8 - rem_bits);
                let padded = (last & keep_mask) | (1u8 << (7 - rem_bits));
                self.update(&[padded])?;
                self.bit_padded = true;
                Ok(())
            }

            fn process_full_block(&mut self, observer: Option<&mut dyn RoundObserver>) {
                self.t0 += $nb as u64;
                let t1 = crate::ubi::tweak_t1(UbiType::Msg, self.first, false);
                let words = $bytes_to_words(&self.buf);
                self.g = $block_fn(&self.g, [self.t0, t1], words, observer);
                self.first = false;
            }

            /// Runs the final MSG block (with the final-block flag set)
            /// and the OUT pass, writing `ceil(hash_bit_len / 8)` bytes
            /// into `out`. Truncates the trailing byte's unused high bits
            /// to zero when `hash_bit_len` isn't a multiple of 8.
            pub fn finalize(&mut self, out: &mut [u8]) -> Result<(), SkeinError> {
                if self.state == State::Finalized {
                    return Err(SkeinError::BadState);
                }
                let out_bytes = ((self.hash_bit_len + 7) / 8) as usize;
                if out.len() < out_bytes {
                    return Err(SkeinError::BadHashLen);
                }

                self.t0 += self.buf_len as u64;
                let t1 = crate::ubi::tweak_t1(UbiType::Msg, self.first, true);
                let mut tail = [0u8; $nb];
                tail[..self.buf_len].copy_from_slice(&self.buf[..self.buf_len]);
                let words = $bytes_to_words(&tail);
                let g_msg = $block_fn(&self.g, [self.t0, t1], words, None);
                self.state = State::Finalized;

                let iterations = (out_bytes + $nb - 1) / $nb;
                for i in 0..iterations {
                    let counter = (i as u64).to_le_bytes();
                    let gi = $ubi_fn(g_msg, &counter, UbiType::Out, None);
                    let bytes = $words_to_bytes(&gi);
                    let start = i * $nb;
                    let end = min(start + $nb, out_bytes);
                    out[start..end].copy_from_slice(&bytes[..end - start]);
                }

                let rem_bits = (self.hash_bit_len % 8) as u32;
                if rem_bits != 0 {
                    let mask = (1u8 << rem_bits) - 1;
                    out[out_bytes - 1] &= mask;
                }

                Ok(())
            }
        }

        impl Drop for $name {
            fn drop(&mut self) {
                self.g.zeroize();
                self.buf.zeroize();
            }
        }

        impl SkeinContext for $name {
            fn init(hash_bit_len: u64) -> Result<Self, SkeinError> {
                $name::init(hash_bit_len)
            }
            fn update(&mut self, data: &[u8]) -> Result<(), SkeinError> {
                $name::update(self, data)
            }
            fn update_bits(&mut self, data: &[u8], data_bit_len: u64) -> Result<(), SkeinError> {
                $name::update_bits(self, data, data_bit_len)
            }
            fn finalize(&mut self, out: &mut [u8]) -> Result<(), SkeinError> {
                $name::finalize(self, out)
            }
        }
    };
}

skein_context!(
    Skein256,
    4,
    32,
    block_256,
    ubi_256,
    words_to_bytes_256,
    bytes_to_words_256,
    "Streaming Skein-256 context."
);

skein_context!(
    Skein512,
    8,
    64,
    block_512,
    ubi_512,
    words_to_bytes_512,
    bytes_to_words_512,
    "Streaming Skein-512 context."
);

skein_context!(
    Skein1024,
    16,
    128,
    block_1024,
    ubi_1024,
    words_to_bytes_1024,
    bytes_to_words_1024,
    "Streaming Skein-1024 context."
);

/// One-shot Skein-256: `init; update; finalize` in a single call.
pub fn hash256(hash_bit_len: u64, data: &[u8], out: &mut [u8]) -> Result<(), SkeinError> {
    let mut ctx = Skein256::init(hash_bit_len)?;
    ctx.update(data)?;
    ctx.finalize(out)
}

/// One-shot Skein-512: `init; update; finalize` in a single call.
pub fn hash512(hash_bit_len: u64, data: &[u8], out: &mut [u8]) -> Result<(), SkeinError> {
    let mut ctx = Skein512::init(hash_bit_len)?;
    ctx.update(data)?;
    ctx.finalize(out)
}

/// One-shot Skein-1024: `init; update; finalize` in a single call.
pub fn hash1024(hash_bit_len: u64, data: &[u8], out: &mut [u8]) -> Result<(), SkeinError> {
    let mut ctx = Skein1024::init(hash_bit_len)?;
    ctx.update(data)?;
    ctx.finalize(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streaming_matches_one_shot_across_chunk_sizes() {
        let data: Vec<u8> = (0..2000u32).map(|i| (i % 251) as u8).collect();

        let mut one_shot = [0u8; 64];
        hash512(512, &data, &mut one_shot).unwrap();

        for chunk_size in [1usize, 7, 63, 64, 65, 1000, 2000] {
            let mut ctx = Skein512::init(512).unwrap();
            for chunk in data.chunks(chunk_size) {
                ctx.update(chunk).unwrap();
            }
            let mut streamed = [0u8; 64];
            ctx.finalize(&mut streamed).unwrap();
            assert_eq!(one_shot, streamed, "mismatch at chunk size {chunk_size}");
        }
    }

    #[test]
    fn empty_message_hashes_deterministically_and_differs_by_size() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        hash256(256, b"", &mut a).unwrap();
        hash256(256, b"", &mut b).unwrap();
        assert_eq!(a, b);

        let mut c = [0u8; 64];
        hash512(512, b"", &mut c).unwrap();
        assert_ne!(&a[..], &c[..32]);
    }

    #[test]
    fn non_byte_aligned_hash_bit_len_zeroes_unused_high_bits() {
        let mut out = [0xFFu8; 2];
        hash256(13, b"some input", &mut out).unwrap();
        // 13 significant bits means the second byte keeps only its 5
        // low-order bits; the 3 high-order bits must be zero.
        assert_eq!(out[1] & 0b1110_0000, 0);
    }

    #[test]
    fn finalize_cannot_run_twice() {
        let mut ctx = Skein256::init(256).unwrap();
        ctx.update(b"data").unwrap();
        let mut out = [0u8; 32];
        ctx.finalize(&mut out).unwrap();
        assert_eq!(ctx.finalize(&mut out), Err(SkeinError::BadState));
    }

    #[test]
    fn update_after_finalize_is_rejected() {
        let mut ctx = Skein256::init(256).unwrap();
        let mut out = [0u8; 32];
        ctx.finalize(&mut out).unwrap();
        assert_eq!(ctx.update(b"too late"), Err(SkeinError::BadState));
    }

    #[test]
    fn update_after_bit_padding_is_rejected() {
        let mut ctx = Skein256::init(256).unwrap();
        ctx.update_bits(&[0b1010_0000], 3).unwrap();
        assert_eq!(ctx.update(b"more"), Err(SkeinError::BadState));
    }

    #[test]
    fn distinct_state_sizes_are_generic_over_skein_context() {
        fn run<C: SkeinContext>(out_len: usize) -> Vec<u8> {
            let mut ctx = C::init((out_len * 8) as u64).unwrap();
            ctx.update(b"generic input").unwrap();
            let mut out = vec![0u8; out_len];
            ctx.finalize(&mut out).unwrap();
            out
        }
        let a = run::<Skein256>(32);
        let b = run::<Skein512>(64);
        assert_ne!(a.len(), b.len());
    }
}
