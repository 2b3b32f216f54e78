//! Skein wire-level constants: UBI type-tag values and the configuration
//! block layout.

/// UBI type-tag values, placed in bits 112..118 of tweak word T1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UbiType {
    Key = 0,
    Cfg = 4,
    Pers = 8,
    Pk = 12,
    Kdf = 16,
    Nonce = 20,
    Msg = 48,
    Out = 63,
}

impl UbiType {
    #[inline(always)]
    pub(crate) const fn value(self) -> u64 {
        self as u64
    }
}

/// Byte length of the fixed configuration string.
pub(crate) const CFG_BLOCK_BYTES: usize = 32;

/// Builds the 32-byte Skein configuration string for a given requested
/// output length in bits. Tree parameters are always zero (plain hashing
/// only — no tree-hash mode).
pub(crate) fn config_block(hash_bit_len: u64) -> [u8; CFG_BLOCK_BYTES] {
    let mut cfg = [0u8; CFG_BLOCK_BYTES];
    cfg[0..4].copy_from_slice(b"SHA3");
    cfg[4..6].copy_from_slice(&1u16.to_le_bytes()); // version
    // cfg[6..8] reserved = 0
    cfg[8..16].copy_from_slice(&hash_bit_len.to_le_bytes());
    // cfg[16..19] tree params = 0 (leaf/fan-out/max-height logs)
    // cfg[19..32] reserved = 0
    cfg
}
