// src/canvas.rs
//! Grayscale framebuffer for the ruler card.
//!
//! One byte per pixel, row-major, top-to-bottom and left-to-right.
//! 0x00 is black ink, 0xFF is white background.

/// Black pixel value.
pub const BLACK: u8 = 0x00;

/// White pixel value.
pub const WHITE: u8 = 0xFF;

/// A single-channel grayscale pixel buffer.
#[derive(Debug)]
pub struct Canvas {
    data: Box<[u8]>,
    width: usize,
    height: usize,
}

impl Canvas {
    /// Create a new canvas filled with white pixels.
    pub fn new(width: usize, height: usize) -> Self {
        let data = vec![WHITE; width * height].into_boxed_slice();
        Self {
            data,
            width,
            height,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Set the pixel at `(x, y)` to black.
    ///
    /// Coordinates are signed so that callers may anchor shapes partially
    /// off-canvas; writes outside the buffer are skipped, never wrapped.
    pub fn set_black(&mut self, x: i64, y: i64) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[y * self.width + x] = BLACK;
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the canvas.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height);
        self.data[y * self.width + x]
    }

    /// Raw bytes of the buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the canvas, yielding the raw buffer for encoding.
    pub fn into_raw(self) -> Vec<u8> {
        self.data.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn buffer_length_is_width_times_height() {
        let canvas = Canvas::new(350, 155);
        assert_eq!(canvas.as_bytes().len(), 54250);
    }

    #[test]
    fn new_canvas_is_all_white() {
        let canvas = Canvas::new(8, 4);
        assert!(canvas.as_bytes().iter().all(|&p| p == WHITE));
    }

    #[test]
    fn set_black_writes_one_pixel() {
        let mut canvas = Canvas::new(8, 4);
        canvas.set_black(3, 2);
        assert_eq!(canvas.get(3, 2), BLACK);
        let inked = canvas.as_bytes().iter().filter(|&&p| p == BLACK).count();
        assert_eq!(inked, 1);
    }

    #[test]
    fn out_of_bounds_writes_are_skipped() {
        let mut canvas = Canvas::new(8, 4);
        canvas.set_black(-1, 0);
        canvas.set_black(0, -3);
        canvas.set_black(8, 0);
        canvas.set_black(0, 4);
        assert!(canvas.as_bytes().iter().all(|&p| p == WHITE));
    }
}
