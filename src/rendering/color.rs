use crate::math;
use approx::AbsDiffEq;
use std::ops::{Add, Mul, Sub};

/// A (red, green, blue) triple. Components are unbounded; values outside
/// [0, 1] are only clamped when the image is encoded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    pub const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const MAGENTA: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 1.0,
    };

    pub fn new(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b }
    }

    /// Approximately compares two colors.
    pub fn equal(&self, other: &Color) -> bool {
        math::equals(self.r, other.r)
            && math::equals(self.g, other.g)
            && math::equals(self.b, other.b)
    }

    /// Blends two colors by multiplying corresponding components.
    pub fn hadamard(&self, other: &Color) -> Color {
        Color::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }

    /// Converts to 8-bit channels, rounding up and clamping to 0..=255.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            convert_channel(self.r),
            convert_channel(self.g),
            convert_channel(self.b),
        ]
    }
}

pub(crate) fn convert_channel(c: f64) -> u8 {
    (c * 255.0).ceil().clamp(0.0, 255.0) as u8
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        Color::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, n: f64) -> Color {
        Color::new(n * self.r, n * self.g, n * self.b)
    }
}

impl AbsDiffEq for Color {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        math::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.r, &other.r, epsilon)
            && f64::abs_diff_eq(&self.g, &other.g, epsilon)
            && f64::abs_diff_eq(&self.b, &other.b, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn add_colors() {
        let a = Color::new(0.9, 0.6, 0.75);
        let b = Color::new(0.7, 0.1, 0.25);
        assert_abs_diff_eq!(a + b, Color::new(1.6, 0.7, 1.0));
    }

    #[test]
    fn subtract_colors() {
        let a = Color::new(0.9, 0.6, 0.75);
        let b = Color::new(0.7, 0.1, 0.25);
        assert_abs_diff_eq!(a - b, Color::new(0.2, 0.5, 0.5), epsilon = 1e-5);
    }

    #[test]
    fn multiply_by_scalar() {
        let c = Color::new(0.2, 0.3, 0.4);
        assert_abs_diff_eq!(c * 2.0, Color::new(0.4, 0.6, 0.8));
    }

    #[test]
    fn hadamard_product() {
        let a = Color::new(1.0, 0.2, 0.4);
        let b = Color::new(0.9, 1.0, 0.1);
        assert_abs_diff_eq!(a.hadamard(&b), Color::new(0.9, 0.2, 0.04), epsilon = 1e-5);
    }

    #[test]
    fn approximate_equality() {
        let a = Color::new(0.1, 0.2, 0.3);
        assert!(a.equal(&Color::new(0.1 + 1e-6, 0.2, 0.3)));
        assert!(!a.equal(&Color::new(0.2, 0.2, 0.3)));
    }

    #[test]
    fn channel_conversion_clamps() {
        assert_eq!(Color::new(1.5, 0.0, -0.5).to_rgb8(), [255, 0, 0]);
        assert_eq!(Color::new(0.0, 0.5, 1.0).to_rgb8(), [0, 128, 255]);
    }
}
