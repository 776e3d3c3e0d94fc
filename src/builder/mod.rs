mod marker;

pub use marker::{default_file_name, Marker};

use crate::common::{
    error::{MarkerError, MarkerResult},
    metadata::{
        Color, Layout, BLOCK_SIZE_RANGE, DEFAULT_BLOCK_SIZE, DEFAULT_DIVISION, DIVISION_RANGE,
        MAX_SIZE, QUIET_BLOCKS,
    },
};

pub struct MarkerBuilder {
    code: i32,
    division: u32,
    block_size: u32,
    size: Option<u32>,
    border: bool,
    name: Option<String>,
}

impl MarkerBuilder {
    pub fn new(code: i32) -> Self {
        Self {
            code,
            division: DEFAULT_DIVISION,
            block_size: DEFAULT_BLOCK_SIZE,
            size: None,
            border: true,
            name: None,
        }
    }

    pub fn code(&mut self, code: i32) -> &mut Self {
        self.code = code;
        self
    }

    pub fn division(&mut self, division: u32) -> &mut Self {
        self.division = division;
        self
    }

    pub fn block_size(&mut self, block_size: u32) -> &mut Self {
        self.block_size = block_size;
        self
    }

    /// Switches to size mode: the block size is derived from the total side length.
    pub fn size(&mut self, size: u32) -> &mut Self {
        self.size = Some(size);
        self
    }

    pub fn unset_size(&mut self) -> &mut Self {
        self.size = None;
        self
    }

    pub fn border(&mut self, border: bool) -> &mut Self {
        self.border = border;
        self
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn metadata(&self) -> String {
        match self.size {
            Some(s) => format!(
                "{{ Code: {}, Division: {}, Size: {}, Border: {} }}",
                self.code, self.division, s, self.border
            ),
            None => format!(
                "{{ Code: {}, Division: {}, Block size: {}, Border: {} }}",
                self.code, self.division, self.block_size, self.border
            ),
        }
    }
}


impl MarkerBuilder {
    /// Validates the parameters and derives the marker geometry without drawing anything.
    pub fn layout(&self) -> MarkerResult<Layout> {
        if !DIVISION_RANGE.contains(&self.division) {
            return Err(MarkerError::DivisionOutOfRange(self.division));
        }

        let cells_per_side = self.division + QUIET_BLOCKS;
        let block_size = match self.size {
            Some(size) => {
                if size > MAX_SIZE {
                    return Err(MarkerError::SizeTooLarge(size));
                }
                if size == 0 || size % cells_per_side != 0 {
                    return Err(MarkerError::IncorrectProportions { size, division: self.division });
                }
                size / cells_per_side
            }
            None => {
                if !BLOCK_SIZE_RANGE.contains(&self.block_size) {
                    return Err(MarkerError::BlockSizeOutOfRange(self.block_size));
                }
                self.block_size
            }
        };

        Ok(Layout::new(self.division, block_size, self.border))
    }

    pub fn build(&self) -> MarkerResult<Marker> {
        log::info!("Generating marker {}...", self.metadata());

        log::debug!("Validating layout...");
        let layout = self.layout()?;

        log::debug!("Encoding code into {0}x{0} bit matrix...", layout.division());
        let mut marker = Marker::new(self.code, layout, self.name.clone());

        log::debug!("Drawing border layers...");
        marker.draw_layers();

        log::debug!("Drawing code blocks...");
        marker.draw_code();

        let matrix = marker.matrix();
        let total_cells = matrix.len();
        let light_cells = matrix.count_light_cells();
        let payload_bits = matrix.data_bits().len();
        let used_bits =
            matrix.data_bits().iter().rposition(|&c| c == Color::Light).map_or(0, |p| p + 1);

        log::info!("Marker generated successfully: {}", marker.metadata());
        log::debug!("Payload capacity: {payload_bits} bits, Used: {used_bits} bits");
        log::debug!(
            "Light cells: {}, Dark cells: {}, Balance: {}%",
            light_cells,
            total_cells - light_cells,
            light_cells * 100 / total_cells
        );

        Ok(marker)
    }
}
