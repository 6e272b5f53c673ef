use crate::math::tuple::Tuple;
use crate::rendering::color::Color;

/// A light source with no size, existing at a single point in space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    position: Tuple,
    intensity: Color,
}

impl PointLight {
    pub fn new(position: Tuple, intensity: Color) -> PointLight {
        PointLight {
            position,
            intensity,
        }
    }

    pub fn position(&self) -> Tuple {
        self.position
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }
}
