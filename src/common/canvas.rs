use image::RgbaImage;
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use super::metadata::Color;

// Canvas
//------------------------------------------------------------------------------

/// Square RGBA pixel buffer painted with flat, axis aligned rectangles.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    pub fn new(size: u32) -> Self {
        Self { img: RgbaImage::new(size, size) }
    }

    pub fn size(&self) -> u32 {
        self.img.width()
    }

    /// Paints the half open rectangle `[x1, x2) x [y1, y2)`, clipped to the canvas.
    ///
    /// Pixels are replaced, not blended, so a `Color::Clear` fill erases.
    pub fn fill_rect(&mut self, x1: u32, y1: u32, x2: u32, y2: u32, color: Color) {
        let (x2, y2) = (x2.min(self.size()), y2.min(self.size()));
        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let rect = Rect::at(x1 as i32, y1 as i32).of_size(x2 - x1, y2 - y1);
        draw_filled_rect_mut(&mut self.img, rect, color.to_rgba());
    }

    pub fn fill(&mut self, color: Color) {
        let sz = self.size();
        self.fill_rect(0, 0, sz, sz, color);
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn try_pixel(&self, x: u32, y: u32) -> Option<Color> {
        match self.img.get_pixel_checked(x, y)?.0 {
            [_, _, _, 0] => Some(Color::Clear),
            [255, 255, 255, 255] => Some(Color::Light),
            [0, 0, 0, 255] => Some(Color::Dark),
            _ => None,
        }
    }

    /// Color at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the canvas or holds a color `fill_rect` never paints.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.try_pixel(x, y)
            .unwrap_or_else(|| panic!("Pixel ({x}, {y}) outside {0}x{0} canvas", self.size()))
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    pub fn as_raw(&self) -> &[u8] {
        self.img.as_raw()
    }
}
