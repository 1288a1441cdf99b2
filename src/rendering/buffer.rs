use super::{FrameSink, palette::cell_rgba};
use crate::domain::Grid;
use rayon::prelude::*;

/// One RGBA pixel per grid cell, row-major.
/// Scaling up to screen size is left to the texture draw.
pub struct PixelBuffer {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bytes: vec![0; width * height * 4],
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// RGBA of one pixel
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        (x < self.width && y < self.height).then(|| {
            let i = (y * self.width + x) * 4;
            [self.bytes[i], self.bytes[i + 1], self.bytes[i + 2], self.bytes[i + 3]]
        })
    }

    /// Recolour every pixel from the grid, rows in parallel
    pub fn rasterize(&mut self, grid: &Grid) {
        let (width, height) = grid.dimensions();
        if (width, height) != (self.width, self.height) {
            *self = Self::new(width, height);
        }
        if width == 0 {
            return;
        }

        self.bytes
            .par_chunks_mut(width * 4)
            .enumerate()
            .for_each(|(y, row)| {
                let (materials, jitter) = grid.row(y);
                for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                    pixel.copy_from_slice(&cell_rgba(materials[x], jitter[x]));
                }
            });
    }
}

impl FrameSink for PixelBuffer {
    fn present(&mut self, grid: &Grid) {
        self.rasterize(grid);
    }
}
