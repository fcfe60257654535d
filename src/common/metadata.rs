use std::fmt::{self, Display, Formatter};
use std::ops::{Deref, Not};

use super::error::{QrError, QrResult};
use super::mask::MaskPattern;

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Color {
    Light,
    Dark,
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

// Version
//------------------------------------------------------------------------------

/// QR symbol version. Only versions 1 through 20 are representable; the
/// capacity tables below are fixed at error correction level H.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub struct Version(u8);

impl Version {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(20);

    pub fn new(version: u8) -> QrResult<Self> {
        if (1..=20).contains(&version) {
            Ok(Self(version))
        } else {
            Err(QrError::InvalidVersion)
        }
    }

    /// Picks the smallest version with at least `len` data codewords.
    /// Mode and character count headers are not part of the comparison.
    pub fn fit(len: usize) -> QrResult<Self> {
        (1..=20).map(Self).find(|v| len <= v.data_codewords()).ok_or(QrError::DataTooLong)
    }

    pub const fn width(self) -> usize {
        self.0 as usize * 4 + 17
    }

    pub fn total_codewords(self) -> usize {
        TOTAL_CODEWORDS[self.0 as usize - 1]
    }

    pub fn ecc_per_block(self) -> usize {
        ECC_PER_BLOCK[self.0 as usize - 1]
    }

    /// Block structure as (group-1 size, group-1 count, group-2 size,
    /// group-2 count). Group-2 blocks, when present, carry one extra byte.
    pub fn data_codewords_per_block(self) -> (usize, usize, usize, usize) {
        DATA_CODEWORDS_PER_BLOCK[self.0 as usize - 1]
    }

    pub fn data_codewords(self) -> usize {
        let (b1s, b1c, b2s, b2c) = self.data_codewords_per_block();
        b1s * b1c + b2s * b2c
    }

    pub fn data_bit_capacity(self) -> usize {
        self.data_codewords() << 3
    }

    pub fn char_count_bit_len(self) -> usize {
        if self.0 <= 9 {
            8
        } else {
            16
        }
    }

    pub fn remainder_bits(self) -> usize {
        match self.0 {
            2..=6 => 7,
            14..=20 => 3,
            _ => 0,
        }
    }

    pub fn alignment_pattern(self) -> &'static [i16] {
        ALIGNMENT_PATTERN_POSITIONS[self.0 as usize - 1]
    }

    pub fn info(self) -> u32 {
        debug_assert!(self.0 >= 7, "Version {} has no version info", self.0);
        VERSION_INFOS[self.0 as usize - 7]
    }
}

impl Deref for Version {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Format info
//------------------------------------------------------------------------------

/// 15-bit format information for the given mask at EC level H, BCH(15, 5)
/// encoded and XOR-masked with 0x5412.
pub fn format_info(pattern: MaskPattern) -> u16 {
    FORMAT_INFOS_H[*pattern as usize]
}

pub const FORMAT_INFO_BIT_LEN: usize = 15;

pub const VERSION_INFO_BIT_LEN: usize = 18;

// Global constants
//------------------------------------------------------------------------------

pub const MAX_WIDTH: usize = 97;

pub const MAX_GRID_SIZE: usize = MAX_WIDTH * MAX_WIDTH;

static TOTAL_CODEWORDS: [usize; 20] = [
    26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901, 991,
    1085,
];

static ECC_PER_BLOCK: [usize; 20] =
    [17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28];

static DATA_CODEWORDS_PER_BLOCK: [(usize, usize, usize, usize); 20] = [
    (9, 1, 0, 0),
    (16, 1, 0, 0),
    (13, 2, 0, 0),
    (9, 4, 0, 0),
    (11, 2, 12, 2),
    (15, 4, 0, 0),
    (13, 4, 14, 1),
    (14, 4, 15, 2),
    (12, 4, 13, 4),
    (15, 6, 16, 2),
    (12, 3, 13, 8),
    (14, 7, 15, 4),
    (11, 12, 12, 4),
    (12, 11, 13, 5),
    (12, 11, 13, 7),
    (15, 3, 16, 13),
    (14, 2, 15, 17),
    (14, 2, 15, 19),
    (13, 9, 14, 16),
    (15, 15, 16, 10),
];

static ALIGNMENT_PATTERN_POSITIONS: [&[i16]; 20] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
];

static VERSION_INFOS: [u32; 14] = [
    0x07C94, 0x085BC, 0x09A99, 0x0A4D3, 0x0BBF6, 0x0C762, 0x0D847, 0x0E60D, 0x0F928, 0x10B78,
    0x1145D, 0x12A17, 0x13532, 0x149A6,
];

static FORMAT_INFOS_H: [u16; 8] =
    [0x1689, 0x13BE, 0x1CE7, 0x19D0, 0x0762, 0x0255, 0x0D0C, 0x083B];

// Coordinate runs are ordered most significant bit first
pub static FORMAT_INFO_COORDS_MAIN: [(i16, i16); 15] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

pub static FORMAT_INFO_COORDS_SIDE: [(i16, i16); 15] = [
    (-1, 8),
    (-2, 8),
    (-3, 8),
    (-4, 8),
    (-5, 8),
    (-6, 8),
    (-7, 8),
    (8, -8),
    (8, -7),
    (8, -6),
    (8, -5),
    (8, -4),
    (8, -3),
    (8, -2),
    (8, -1),
];

pub static VERSION_INFO_COORDS_TR: [(i16, i16); 18] = [
    (5, -9),
    (5, -10),
    (5, -11),
    (4, -9),
    (4, -10),
    (4, -11),
    (3, -9),
    (3, -10),
    (3, -11),
    (2, -9),
    (2, -10),
    (2, -11),
    (1, -9),
    (1, -10),
    (1, -11),
    (0, -9),
    (0, -10),
    (0, -11),
];

pub static VERSION_INFO_COORDS_BL: [(i16, i16); 18] = [
    (-9, 5),
    (-10, 5),
    (-11, 5),
    (-9, 4),
    (-10, 4),
    (-11, 4),
    (-9, 3),
    (-10, 3),
    (-11, 3),
    (-9, 2),
    (-10, 2),
    (-11, 2),
    (-9, 1),
    (-10, 1),
    (-11, 1),
    (-9, 0),
    (-10, 0),
    (-11, 0),
];
