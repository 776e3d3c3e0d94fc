use std::fmt::{Display, Error, Formatter};
use std::ops::RangeInclusive;

use image::Rgba;

// Global constants
//------------------------------------------------------------------------------

pub const DIVISION_RANGE: RangeInclusive<u32> = 3..=8;

pub const BLOCK_SIZE_RANGE: RangeInclusive<u32> = 16..=32;

pub const DEFAULT_DIVISION: u32 = 5;

pub const DEFAULT_BLOCK_SIZE: u32 = 32;

// Border and white ring on each side of the code grid
pub const QUIET_BLOCKS: u32 = 4;

// Largest side length accepted in size mode, keeps the RGBA buffer at 256 MiB
pub const MAX_SIZE: u32 = 8192;

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Light,
    Dark,
    Clear,
}

impl Color {
    pub fn select<T>(&self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark | Self::Clear => dark,
        }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        match self {
            Self::Light => Rgba([255, 255, 255, 255]),
            Self::Dark => Rgba([0, 0, 0, 255]),
            Self::Clear => Rgba([0, 0, 0, 0]),
        }
    }
}

impl From<bool> for Color {
    fn from(bit: bool) -> Self {
        if bit {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

// Layout
//------------------------------------------------------------------------------

/// Validated geometry of a marker.
///
/// `size` always equals `block_size * (division + 4)`.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Layout {
    division: u32,
    block_size: u32,
    size: u32,
    border: bool,
}

impl Layout {
    pub(crate) fn new(division: u32, block_size: u32, border: bool) -> Self {
        debug_assert!(DIVISION_RANGE.contains(&division), "Invalid division");
        debug_assert!(block_size > 0, "Block size must be positive");

        let size = block_size * (division + QUIET_BLOCKS);
        Self { division, block_size, size, border }
    }

    pub fn division(&self) -> u32 {
        self.division
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn has_border(&self) -> bool {
        self.border
    }

    pub fn cell_count(&self) -> usize {
        (self.division * self.division) as usize
    }

    // Top left pixel of the code grid
    pub fn code_origin(&self) -> u32 {
        self.block_size * 2
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(
            f,
            "{{ Division: {}, Block size: {}, Size: {}, Border: {} }}",
            self.division, self.block_size, self.size, self.border
        )
    }
}
