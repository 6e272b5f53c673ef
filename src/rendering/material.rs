use crate::rendering::color::Color;

/// Surface color plus the four attributes of the Phong reflection model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    color: Color,
    ambient: f64,
    diffuse: f64,
    specular: f64,
    shininess: f64,
}

impl Material {
    pub fn new() -> Material {
        Material {
            color: Color::WHITE,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Background lighting, or light reflected from other objects in the
    /// environment.
    pub fn ambient(&self) -> f64 {
        self.ambient
    }

    /// Light reflected from a matte surface.
    pub fn diffuse(&self) -> f64 {
        self.diffuse
    }

    /// The reflection of the light source itself, the bright spot on a
    /// curved surface.
    pub fn specular(&self) -> f64 {
        self.specular
    }

    /// The higher the shininess, the smaller and tighter the specular
    /// highlight.
    pub fn shininess(&self) -> f64 {
        self.shininess
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_ambient(&mut self, ambient: f64) {
        self.ambient = ambient;
    }

    pub fn set_diffuse(&mut self, diffuse: f64) {
        self.diffuse = diffuse;
    }

    pub fn set_specular(&mut self, specular: f64) {
        self.specular = specular;
    }

    pub fn set_shininess(&mut self, shininess: f64) {
        self.shininess = shininess;
    }
}

impl Default for Material {
    fn default() -> Material {
        Material::new()
    }
}
