use std::ops::Deref;

use super::metadata::Color;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Cell {
    Orientation,
    Reserved,
    Data(Color),
}

impl Deref for Cell {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Cell::Orientation => &Color::Light,
            Cell::Reserved => &Color::Dark,
            Cell::Data(c) => c,
        }
    }
}

// Bit matrix
//------------------------------------------------------------------------------

/// Code grid of a marker, `division * division` cells in row-major order.
///
/// The four corner cells never carry payload: the top left one is the white
/// orientation cell, the other three are reserved and render as background.
/// Every other cell holds one bit of the code, least significant bit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    division: usize,
    corners: [usize; 4],
    data: Vec<Color>,
}

impl BitMatrix {
    pub fn new(code: i32, division: u32) -> Self {
        let division = division as usize;
        debug_assert!(division >= 2, "Division too small to hold four distinct corners");

        let len = division * division;
        let corners = [0, division - 1, division * (division - 1), len - 1];

        // Magnitude bits, LSB first. A negative code takes one more cell for its sign,
        // which stays dark.
        let bits = code.unsigned_abs();
        let bit_len = (u32::BITS - bits.leading_zeros()) as usize;
        let data = (0..len - corners.len())
            .map(|i| Color::from(i < bit_len && (bits >> i) & 1 == 1))
            .collect();

        Self { division, corners, data }
    }

    pub fn division(&self) -> usize {
        self.division
    }

    pub fn len(&self) -> usize {
        self.division * self.division
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn corners(&self) -> &[usize; 4] {
        &self.corners
    }

    pub fn is_corner(&self, index: usize) -> bool {
        self.corners.contains(&index)
    }

    /// Payload bits in placement order, `division² - 4` entries.
    pub fn data_bits(&self) -> &[Color] {
        &self.data
    }

    pub fn get(&self, index: usize) -> Cell {
        debug_assert!(index < self.len(), "Cell index {index} out of bounds");

        if index == self.corners[0] {
            return Cell::Orientation;
        }
        if self.is_corner(index) {
            return Cell::Reserved;
        }

        // Data cells preceding `index` are all cells before it minus the corners before it
        let skipped = self.corners.iter().filter(|&&c| c < index).count();
        Cell::Data(self.data[index - skipped])
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }

    pub fn count_light_cells(&self) -> usize {
        self.cells().filter(|c| matches!(**c, Color::Light)).count()
    }

    /// Reads the payload back as a magnitude, LSB first. Bits beyond 32 are ignored.
    pub fn value(&self) -> u32 {
        self.data
            .iter()
            .take(u32::BITS as usize)
            .enumerate()
            .fold(0, |acc, (i, c)| acc | (u32::from(*c == Color::Light) << i))
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity(self.len() + self.division + 1);
        res.push('\n');
        for (i, cell) in self.cells().enumerate() {
            let c = match cell {
                Cell::Orientation => 'o',
                Cell::Reserved => 'x',
                Cell::Data(Color::Light) => '1',
                Cell::Data(Color::Dark | Color::Clear) => '0',
            };
            res.push(c);
            if i % self.division == self.division - 1 {
                res.push('\n');
            }
        }
        res
    }
}
