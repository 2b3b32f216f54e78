//! The Threefish tweakable block cipher, one function per state size.
//!
//! Each `block_*` function is the complete per-block algorithm: key
//! schedule, initial key injection, 8-mini-round macro rounds with key
//! injection every 4 mini-rounds, and the final feed-forward XOR that
//! turns the keyed permutation into the Matyas-Meyer-Oseas style
//! compression step UBI relies on. Tweak advancement (`T0 += byte_count`)
//! is the caller's (UBI's) responsibility — these functions are pure.

use crate::observer::RoundObserver;
use crate::rotation::{
    C240, PERMUTE_256, PERMUTE_512, PERMUTE_1024, ROTATION_256, ROTATION_512, ROTATION_1024,
    ROUNDS_256, ROUNDS_512, ROUNDS_1024,
};

#[inline(always)]
fn mix(x: u64, y: u64, rot: u32) -> (u64, u64) {
    let x1 = x.wrapping_add(y);
    let y1 = y.rotate_left(rot) ^ x1;
    (x1, y1)
}

#[inline(always)]
fn inject_key_256(x: &mut [u64; 4], ks: &[u64; 5], ts: &[u64; 3], s: u64) {
    for (i, xi) in x.iter_mut().enumerate() {
        *xi = xi.wrapping_add(ks[(s as usize + i) % 5]);
    }
    x[1] = x[1].wrapping_add(ts[(s % 3) as usize]);
    x[2] = x[2].wrapping_add(ts[((s + 1) % 3) as usize]);
    x[3] = x[3].wrapping_add(s);
}

#[inline(always)]
fn inject_key_512(x: &mut [u64; 8], ks: &[u64; 9], ts: &[u64; 3], s: u64) {
    for (i, xi) in x.iter_mut().enumerate() {
        *xi = xi.wrapping_add(ks[(s as usize + i) % 9]);
    }
    x[5] = x[5].wrapping_add(ts[(s % 3) as usize]);
    x[6] = x[6].wrapping_add(ts[((s + 1) % 3) as usize]);
    x[7] = x[7].wrapping_add(s);
}

#[inline(always)]
fn inject_key_1024(x: &mut [u64; 16], ks: &[u64; 17], ts: &[u64; 3], s: u64) {
    for (i, xi) in x.iter_mut().enumerate() {
        *xi = xi.wrapping_add(ks[(s as usize + i) % 17]);
    }
    x[13] = x[13].wrapping_add(ts[(s % 3) as usize]);
    x[14] = x[14].wrapping_add(ts[((s + 1) % 3) as usize]);
    x[15] = x[15].wrapping_add(s);
}

/// Threefish-256 block function. `key` is the current chaining state,
/// `tweak` is (T0, T1), `block` is the Nb=32-byte input loaded as 4
/// little-endian u64 words. Returns the next chaining state (feed-forward
/// already applied).
pub(crate) fn block_256(
    key: &[u64; 4],
    tweak: [u64; 2],
    block: [u64; 4],
    observer: Option<&mut dyn RoundObserver>,
) -> [u64; 4] {
    let mut ks = [0u64; 5];
    ks[..4].copy_from_slice(key);
    ks[4] = C240 ^ key[0] ^ key[1] ^ key[2] ^ key[3];
    let ts = [tweak[0], tweak[1], tweak[0] ^ tweak[1]];

    let mut x = block;
    inject_key_256(&mut x, &ks, &ts, 0);
    let mut observer = observer;
    if let Some(obs) = observer.as_deref_mut() {
        obs.round(0, &x);
    }

    for r in 1..=(ROUNDS_256 / 8) {
        for s in 0..8usize {
            let perm = &PERMUTE_256[s % 2];
            let rot = &ROTATION_256[s];
            for (k, &(a, b)) in perm.iter().enumerate() {
                let (xa, xb) = mix(x[a], x[b], rot[k]);
                x[a] = xa;
                x[b] = xb;
            }
            if s == 3 {
                inject_key_256(&mut x, &ks, &ts, (2 * r - 1) as u64);
            } else if s == 7 {
                inject_key_256(&mut x, &ks, &ts, (2 * r) as u64);
            }
        }
        if let Some(obs) = observer.as_deref_mut() {
            obs.round(r, &x);
        }
    }

    for i in 0..4 {
        x[i] ^= block[i];
    }
    x
}

/// Threefish-512 block function. See [`block_256`] for the shape.
pub(crate) fn block_512(
    key: &[u64; 8],
    tweak: [u64; 2],
    block: [u64; 8],
    observer: Option<&mut dyn RoundObserver>,
) -> [u64; 8] {
    let mut ks = [0u64; 9];
    ks[..8].copy_from_slice(key);
    ks[8] = C240;
    for &k in key {
        ks[8] ^= k;
    }
    let ts = [tweak[0], tweak[1], tweak[0] ^ tweak[1]];

    let mut x = block;
    inject_key_512(&mut x, &ks, &ts, 0);
    let mut observer = observer;
    if let Some(obs) = observer.as_deref_mut() {
        obs.round(0, &x);
    }

    for r in 1..=(ROUNDS_512 / 8) {
        for s in 0..8usize {
            let perm = &PERMUTE_512[s % 4];
            let rot = &ROTATION_512[s];
            for (k, &(a, b)) in perm.iter().enumerate() {
                let (xa, xb) = mix(x[a], x[b], rot[k]);
                x[a] = xa;
                x[b] = xb;
            }
            if s == 3 {
                inject_key_512(&mut x, &ks, &ts, (2 * r - 1) as u64);
            } else if s == 7 {
                inject_key_512(&mut x, &ks, &ts, (2 * r) as u64);
            }
        }
        if let Some(obs) = observer.as_deref_mut() {
            obs.round(r, &x);
        }
    }

    for i in 0..8 {
        x[i] ^= block[i];
    }
    x
}

/// Threefish-1024 block function. See [`block_256`] for the shape.
pub(crate) fn block_1024(
    key: &[u64; 16],
    tweak: [u64; 2],
    block: [u64; 16],
    observer: Option<&mut dyn RoundObserver>,
) -> [u64; 16] {
    let mut ks = [0u64; 17];
    ks[..16].copy_from_slice(key);
    ks[16] = C240;
    for &k in key {
        ks[16] ^= k;
    }
    let ts = [tweak[0], tweak[1], tweak[0] ^ tweak[1]];

    let mut x = block;
    inject_key_1024(&mut x, &ks, &ts, 0);
    let mut observer = observer;
    if let Some(obs) = observer.as_deref_mut() {
        obs.round(0, &x);
    }

    for r in 1..=(ROUNDS_1024 / 8) {
        for s in 0..8usize {
            let perm = &PERMUTE_1024[s % 4];
            let rot = &ROTATION_1024[s];
            for (k, &(a, b)) in perm.iter().enumerate() {
                let (xa, xb) = mix(x[a], x[b], rot[k]);
                x[a] = xa;
                x[b] = xb;
            }
            if s == 3 {
                inject_key_1024(&mut x, &ks, &ts, (2 * r - 1) as u64);
            } else if s == 7 {
                inject_key_1024(&mut x, &ks, &ts, (2 * r) as u64);
            }
        }
        if let Some(obs) = observer.as_deref_mut() {
            obs.round(r, &x);
        }
    }

    for i in 0..16 {
        x[i] ^= block[i];
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_256_is_deterministic() {
        let key = [0u64; 4];
        let block = [1u64, 2, 3, 4];
        let a = block_256(&key, [0, 0], block, None);
        let b = block_256(&key, [0, 0], block, None);
        assert_eq!(a, b);
        assert_ne!(a, block);
    }

    #[test]
    fn block_512_changes_with_tweak() {
        let key = [0u64; 8];
        let block = [0u64; 8];
        let a = block_512(&key, [0, 0], block, None);
        let b = block_512(&key, [1, 0], block, None);
        assert_ne!(a, b);
    }

    #[test]
    fn block_1024_changes_with_key() {
        let block = [0u64; 16];
        let mut key = [0u64; 16];
        let a = block_1024(&key, [0, 0], block, None);
        key[0] = 1;
        let b = block_1024(&key, [0, 0], block, None);
        assert_ne!(a, b);
    }
}
