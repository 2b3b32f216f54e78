//! Published Skein 1.3 round constants: rotation amounts and the fixed
//! word-permutation schedule for each state size.
//!
//! These are security parameters, not tuning knobs — reproduced verbatim
//! from the Skein 1.3 specification. Changing any value produces a
//! different (non-conforming) hash function.

/// Skein key-schedule parity constant.
pub(crate) const C240: u64 = 0x1BD1_1BDA_A9FC_1A22;

pub(crate) const ROUNDS_256: usize = 72;
pub(crate) const ROUNDS_512: usize = 72;
pub(crate) const ROUNDS_1024: usize = 80;

/// Rotation constants, 8 mini-rounds x 2 rotations (Nw/2 = 2 for Nw=4).
pub(crate) const ROTATION_256: [[u32; 2]; 8] = [
    [14, 16],
    [52, 57],
    [23, 40],
    [5, 37],
    [25, 33],
    [46, 12],
    [58, 22],
    [32, 32],
];

/// Word-pair schedule for Threefish-256. Period 2: even slots use pattern
/// A, odd slots use pattern B. The first word of each pair is always an
/// even-indexed state word (the MIX addition target); the second is
/// always odd-indexed (the rotate+xor target).
pub(crate) const PERMUTE_256: [[(usize, usize); 2]; 2] = [
    [(0, 1), (2, 3)],
    [(0, 3), (2, 1)],
];

/// Rotation constants, 8 mini-rounds x 4 rotations (Nw/2 = 4 for Nw=8).
pub(crate) const ROTATION_512: [[u32; 4]; 8] = [
    [46, 36, 19, 37],
    [33, 27, 14, 42],
    [17, 49, 36, 39],
    [44, 9, 54, 56],
    [39, 30, 34, 24],
    [13, 50, 10, 17],
    [25, 29, 39, 43],
    [8, 35, 56, 22],
];

/// Word-pair schedule for Threefish-512. Period 4.
pub(crate) const PERMUTE_512: [[(usize, usize); 4]; 4] = [
    [(0, 1), (2, 3), (4, 5), (6, 7)],
    [(2, 1), (4, 7), (6, 5), (0, 3)],
    [(4, 1), (6, 3), (0, 5), (2, 7)],
    [(6, 1), (0, 7), (2, 5), (4, 3)],
];

/// Rotation constants, 8 mini-rounds x 8 rotations (Nw/2 = 8 for Nw=16).
pub(crate) const ROTATION_1024: [[u32; 8]; 8] = [
    [24, 13, 8, 47, 8, 17, 22, 37],
    [38, 19, 10, 55, 49, 18, 23, 52],
    [33, 4, 51, 13, 34, 41, 59, 17],
    [5, 20, 48, 41, 47, 28, 16, 25],
    [41, 9, 37, 31, 12, 47, 44, 30],
    [16, 34, 56, 51, 4, 53, 42, 41],
    [31, 44, 47, 46, 19, 42, 44, 25],
    [9, 48, 35, 52, 23, 31, 37, 20],
];

/// Word-pair schedule for Threefish-1024. Period 4.
pub(crate) const PERMUTE_1024: [[(usize, usize); 8]; 4] = [
    [
        (0, 1),
        (2, 3),
        (4, 5),
        (6, 7),
        (8, 9),
        (10, 11),
        (12, 13),
        (14, 15),
    ],
    [
        (0, 9),
        (2, 13),
        (6, 11),
        (4, 15),
        (10, 7),
        (12, 3),
        (14, 5),
        (8, 1),
    ],
    [
        (0, 7),
        (2, 5),
        (4, 3),
        (6, 1),
        (12, 15),
        (14, 13),
        (8, 11),
        (10, 9),
    ],
    [
        (0, 15),
        (2, 11),
        (6, 13),
        (4, 9),
        (14, 1),
        (8, 5),
        (10, 3),
        (12, 7),
    ],
];
