use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::common::{
    canvas::Canvas,
    error::MarkerResult,
    matrix::BitMatrix,
    metadata::{Color, Layout},
};

#[derive(Debug, Clone)]
pub struct Marker {
    code: i32,
    layout: Layout,
    matrix: BitMatrix,
    canvas: Canvas,
    name: Option<String>,
}

// Marker type for builder
//------------------------------------------------------------------------------

impl Marker {
    pub(crate) fn new(code: i32, layout: Layout, name: Option<String>) -> Self {
        let matrix = BitMatrix::new(code, layout.division());
        let canvas = Canvas::new(layout.size());
        Self { code, layout, matrix, canvas, name }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn matrix(&self) -> &BitMatrix {
        &self.matrix
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Output file name, `code-<code>.png` when no name was given.
    pub fn file_name(&self) -> String {
        match self.name.as_deref() {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => default_file_name(self.code),
        }
    }

    pub fn metadata(&self) -> String {
        format!("{{ Code: {}, Layout: {} }}", self.code, self.layout)
    }

    pub fn to_image(&self) -> RgbaImage {
        self.canvas.as_image().clone()
    }
}

pub fn default_file_name(code: i32) -> String {
    format!("code-{code}.png")
}

#[cfg(test)]
mod marker_util_tests {
    use super::{default_file_name, Marker};
    use crate::common::metadata::Layout;

    #[test]
    fn test_default_file_name() {
        assert_eq!(default_file_name(42), "code-42.png");
        assert_eq!(default_file_name(-7), "code--7.png");

        let marker = Marker::new(42, Layout::new(5, 32, true), None);
        assert_eq!(marker.file_name(), "code-42.png");
        let marker = Marker::new(42, Layout::new(5, 32, true), Some(String::new()));
        assert_eq!(marker.file_name(), "code-42.png");
        let marker = Marker::new(42, Layout::new(5, 32, true), Some("out.png".into()));
        assert_eq!(marker.file_name(), "out.png");
        assert_eq!(marker.name(), Some("out.png"));
    }

    #[test]
    fn test_metadata() {
        let marker = Marker::new(7, Layout::new(4, 16, true), None);
        assert_eq!(
            marker.metadata(),
            "{ Code: 7, Layout: { Division: 4, Block size: 16, Size: 128, Border: true } }"
        );
    }
}

// Border layers
//------------------------------------------------------------------------------

impl Marker {
    pub(crate) fn draw_layers(&mut self) {
        let sz = self.layout.size();
        let bs = self.layout.block_size();

        let outer = if self.layout.has_border() { Color::Dark } else { Color::Clear };
        self.canvas.fill(outer);
        self.canvas.fill_rect(bs, bs, sz - bs, sz - bs, Color::Light);
        self.canvas.fill_rect(bs * 2, bs * 2, sz - bs * 2, sz - bs * 2, Color::Dark);
    }
}


// Code blocks
//------------------------------------------------------------------------------

impl Marker {
    pub(crate) fn draw_code(&mut self) {
        let bs = self.layout.block_size();
        let origin = self.layout.code_origin();
        let div = self.matrix.division();

        for (i, cell) in self.matrix.cells().enumerate() {
            if !matches!(*cell, Color::Light) {
                continue;
            }
            let x = origin + (i % div) as u32 * bs;
            let y = origin + (i / div) as u32 * bs;
            self.canvas.fill_rect(x, y, x + bs, y + bs, Color::Light);
        }
    }
}


// Render
//------------------------------------------------------------------------------

impl Marker {
    /// Text preview of the code grid, one character per cell.
    pub fn to_str(&self) -> String {
        let div = self.matrix.division();
        let mut res = String::with_capacity(self.matrix.len() * 3 + div);
        for (i, cell) in self.matrix.cells().enumerate() {
            res.push(cell.select('█', ' '));
            if i % div == div - 1 {
                res.push('\n');
            }
        }
        res
    }

    /// Saves the marker as PNG under [`Marker::file_name`] and returns the path written.
    pub fn save(&self) -> MarkerResult<PathBuf> {
        self.save_as(self.file_name())
    }

    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> MarkerResult<PathBuf> {
        let path = path.as_ref();
        let sz = self.layout.size();
        log::debug!("Encoding {sz}x{sz} marker to {}...", path.display());
        self.canvas.as_image().save_with_format(path, ImageFormat::Png)?;
        Ok(path.to_path_buf())
    }
}
