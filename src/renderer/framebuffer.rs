//! Fixed-size binary pixel buffer

use crate::consts::{IHEIGHT, IWIDTH};

/// One cell of the pixel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pixel {
    #[default]
    Bg,
    Fg,
}

/// The 80x22 row-major pixel grid, cleared and fully rewritten each frame.
///
/// Owned by the frame loop and passed into the rasterizer by reference;
/// there is no global screen state.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    pixels: Vec<Pixel>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: vec![Pixel::Bg; IWIDTH * IHEIGHT],
        }
    }

    /// Overwrite every pixel
    pub fn clear(&mut self, pixel: Pixel) {
        self.pixels.fill(pixel);
    }

    /// Write a pixel; coordinates outside the grid are clipped
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, pixel: Pixel) {
        if x >= 0 && (x as usize) < IWIDTH && y >= 0 && (y as usize) < IHEIGHT {
            self.pixels[y as usize * IWIDTH + x as usize] = pixel;
        }
    }

    /// Read a pixel; `Bg` outside the grid
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Pixel {
        if x >= 0 && (x as usize) < IWIDTH && y >= 0 && (y as usize) < IHEIGHT {
            self.pixels[y as usize * IWIDTH + x as usize]
        } else {
            Pixel::Bg
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_clear() {
        let fb = FrameBuffer::new();
        for y in 0..IHEIGHT as i32 {
            for x in 0..IWIDTH as i32 {
                assert_eq!(fb.get(x, y), Pixel::Bg);
            }
        }
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut fb = FrameBuffer::new();
        fb.set(3, 7, Pixel::Fg);
        assert_eq!(fb.get(3, 7), Pixel::Fg);
        assert_eq!(fb.get(4, 7), Pixel::Bg);

        fb.clear(Pixel::Bg);
        assert_eq!(fb.get(3, 7), Pixel::Bg);
    }

    #[test]
    fn test_out_of_range_writes_are_clipped() {
        let mut fb = FrameBuffer::new();
        fb.set(-1, 0, Pixel::Fg);
        fb.set(0, -1, Pixel::Fg);
        fb.set(IWIDTH as i32, 0, Pixel::Fg);
        fb.set(0, IHEIGHT as i32, Pixel::Fg);
        for y in 0..IHEIGHT as i32 {
            for x in 0..IWIDTH as i32 {
                assert_eq!(fb.get(x, y), Pixel::Bg);
            }
        }
    }
}
