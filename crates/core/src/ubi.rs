//! Unique Block Iteration (UBI) chaining: threads a 128-bit tweak
//! (byte position, first/final flags, type tag) through however many
//! Threefish block calls a UBI pass's input requires.
//!
//! Each `ubi_*` function runs one full, self-contained UBI pass over
//! `input` under a fixed type tag. An empty `input` is processed as
//! exactly one all-zero final block with `byte_count_add = 0`, so even
//! zero-length inputs still produce a distinguishable final block.

use crate::observer::RoundObserver;
use crate::params::UbiType;
use crate::threefish::{block_1024, block_256, block_512};

const FIRST_FLAG: u64 = 1 << 62;
const FINAL_FLAG: u64 = 1 << 63;

/// Packs the type tag and first/final flags into tweak word T1. The type
/// field sits at local bits 48..54; bits 62/63 carry the first/final
/// flags.
#[inline(always)]
pub(crate) fn tweak_t1(ubi_type: UbiType, first: bool, final_: bool) -> u64 {
    let mut t1 = ubi_type.value() << 48;
    if first {
        t1 |= FIRST_FLAG;
    }
    if final_ {
        t1 |= FINAL_FLAG;
    }
    t1
}

#[inline(always)]
fn load_le_u64(bytes: &[u8], words: &mut [u64]) {
    for (chunk, word) in bytes.chunks(8).zip(words.iter_mut()) {
        let mut buf = [0u8; 8];
        buf[..chunk.len()].copy_from_slice(chunk);
        *word = u64::from_le_bytes(buf);
    }
}

#[inline(always)]
fn store_le_u64(words: &[u64], out: &mut [u8]) {
    for (word, chunk) in words.iter().zip(out.chunks_mut(8)) {
        let bytes = word.to_le_bytes();
        let n = chunk.len();
        chunk.copy_from_slice(&bytes[..n]);
    }
}

macro_rules! ubi_fn {
    ($name:ident, $nw:expr, $nb:expr, $block_fn:ident) => {
        pub(crate) fn $name(
            mut g: [u64; $nw],
            input: &[u8],
            ubi_type: UbiType,
            mut observer: Option<&mut dyn RoundObserver>,
        ) -> [u64; $nw] {
            let mut t0: u64 = 0;
            let mut first = true;

            let full_blocks = if input.is_empty() {
                0
            } else {
                // The last Nb-byte chunk is always deferred to the final
                // call, even when the input is an exact multiple of Nb.
                (input.len() - 1) / $nb
            };

            let mut offset = 0;
            for _ in 0..full_blocks {
                let chunk = &input[offset..offset + $nb];
                t0 += $nb as u64;
                let t1 = tweak_t1(ubi_type, first, false);
                let mut words = [0u64; $nw];
                load_le_u64(chunk, &mut words);
                g = $block_fn(&g, [t0, t1], words, observer.as_deref_mut());
                first = false;
                offset += $nb;
            }

            let tail = &input[offset..];
            let tail_len = tail.len() as u64;
            t0 += tail_len;
            let t1 = tweak_t1(ubi_type, first, true);
            let mut words = [0u64; $nw];
            let mut padded = [0u8; $nb];
            padded[..tail.len()].copy_from_slice(tail);
            load_le_u64(&padded, &mut words);
            g = $block_fn(&g, [t0, t1], words, observer.as_deref_mut());

            g
        }
    };
}

ubi_fn!(ubi_256, 4, 32, block_256);
ubi_fn!(ubi_512, 8, 64, block_512);
ubi_fn!(ubi_1024, 16, 128, block_1024);

pub(crate) fn words_to_bytes_256(words: &[u64; 4]) -> [u8; 32] {
    let mut out = [0u8; 32];
    store_le_u64(words, &mut out);
    out
}

pub(crate) fn words_to_bytes_512(words: &[u64; 8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    store_le_u64(words, &mut out);
    out
}

pub(crate) fn words_to_bytes_1024(words: &[u64; 16]) -> [u8; 128] {
    let mut out = [0u8; 128];
    store_le_u64(words, &mut out);
    out
}

pub(crate) fn bytes_to_words_256(bytes: &[u8; 32]) -> [u64; 4] {
    let mut words = [0u64; 4];
    load_le_u64(bytes, &mut words);
    words
}

pub(crate) fn bytes_to_words_512(bytes: &[u8; 64]) -> [u64; 8] {
    let mut words = [0u64; 8];
    load_le_u64(bytes, &mut words);
    words
}

pub(crate) fn bytes_to_words_1024(bytes: &[u8; 128]) -> [u64; 16] {
    let mut words = [0u64; 16];
    load_le_u64(bytes, &mut words);
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_processes_one_final_block() {
        let g = [0u64; 4];
        let a = ubi_256(g, b"", UbiType::Msg, None);
        let b = ubi_256(g, b"", UbiType::Cfg, None);
        assert_ne!(a, b, "type tag must reach the compression function");
    }

    #[test]
    fn exact_multiple_of_block_size_still_has_final_block() {
        let g = [0u64; 4];
        let one_block = [0xABu8; 32];
        let a = ubi_256(g, &one_block, UbiType::Msg, None);
        // two identical blocks must not collapse to the same state as one
        let two_blocks = [0xABu8; 64];
        let b = ubi_256(g, &two_blocks, UbiType::Msg, None);
        assert_ne!(a, b);
    }

    #[test]
    fn first_and_final_flags_are_distinguishable() {
        let g = [1u64, 2, 3, 4];
        let block = [0u8; 32];
        // one block, final flag set on the only (first+final) block
        let direct = ubi_256(g, &block, UbiType::Msg, None);

        // the same block split so the first call is non-final, the
        // second an empty final call, must differ from the direct case
        let nonfinal_then_empty = {
            let t0 = 32u64;
            let t1 = tweak_t1(UbiType::Msg, true, false);
            let words = bytes_to_words_256(&block);
            let g1 = block_256(&g, [t0, t1], words, None);
            let t1_final = tweak_t1(UbiType::Msg, false, true);
            let words0 = [0u64; 4];
            block_256(&g1, [t0, t1_final], words0, None)
        };
        assert_ne!(direct, nonfinal_then_empty);
    }
}
