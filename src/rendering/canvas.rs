use crate::rendering::color::Color;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CanvasError {
    #[error("invalid canvas size ({width}, {height})")]
    InvalidSize { width: usize, height: usize },
    #[error("expected {expected} pixels for a {width}x{height} canvas, got {got}")]
    InvalidPixelCount {
        width: usize,
        height: usize,
        expected: usize,
        got: usize,
    },
}

/// A rectangular grid of pixels, stored row-major.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates a black canvas.
    pub fn new(width: usize, height: usize) -> Result<Canvas, CanvasError> {
        if width < 1 || height < 1 {
            return Err(CanvasError::InvalidSize { width, height });
        }
        Ok(Canvas {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        })
    }

    /// Rebuilds a canvas from a raw row-major pixel buffer.
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<Color>,
    ) -> Result<Canvas, CanvasError> {
        if width < 1 || height < 1 {
            return Err(CanvasError::InvalidSize { width, height });
        }
        let expected = width * height;
        if pixels.len() != expected {
            return Err(CanvasError::InvalidPixelCount {
                width,
                height,
                expected,
                got: pixels.len(),
            });
        }
        Ok(Canvas {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Checks whether position (x, y) lies within the canvas.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "index ({}, {}) out of range for canvas size ({}, {})",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Returns the color of the pixel at (x, y).
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Sets the color of the pixel at (x, y).
    pub fn set_pixel(&mut self, x: usize, y: usize, c: Color) {
        let i = self.index(x, y);
        self.pixels[i] = c;
    }

    /// Rounds the coordinates up to a pixel position and writes the color
    /// there. Out-of-range writes are silently dropped.
    pub fn write_pixel(&mut self, x: f64, y: f64, c: Color) {
        let x_pos = x.ceil() as i64;
        let y_pos = y.ceil() as i64;

        if self.contains(x_pos, y_pos) {
            self.set_pixel(x_pos as usize, y_pos as usize, c);
        }
    }
}
