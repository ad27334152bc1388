//! Accumulation target shared with the presentation layer.
//!
//! The buffer persists across frames: every render call blends into the
//! values already present rather than overwriting them.

use crate::color::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    rows: usize,
    cols: usize,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            pixels: vec![Color::ZERO; rows * cols],
        }
    }

    /// Buffer for a `width` x `height` window rendered at a fraction of its
    /// resolution.
    pub fn scaled(width: u32, height: u32, factor: f32) -> Self {
        let cols = (width as f32 * factor) as usize;
        let rows = (height as f32 * factor) as usize;
        Self::new(rows, cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Color {
        self.pixels[i * self.cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, color: Color) {
        self.pixels[i * self.cols + j] = color;
    }

    /// Row-major pixels.
    pub fn as_slice(&self) -> &[Color] {
        &self.pixels
    }

    pub fn as_mut_slice(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Raw `f32` RGB triples, ready for a texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.pixels.as_slice())
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Color::ZERO);
    }
}
