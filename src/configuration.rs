use crate::math::matrix::Matrix;
use crate::math::transform;
use crate::math::tuple::Tuple;
use crate::rendering::color::Color;
use crate::rendering::light::PointLight;
use crate::rendering::material::Material;
use crate::rendering::raytracer::TracerError;
use serde::Deserialize;

/// Scene description for the render subcommand. Every section is optional;
/// the defaults reproduce the built-in shadowed-sphere scene.
#[derive(Debug, Default, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub material: MaterialConfig,
    #[serde(default)]
    pub light: LightConfig,
    #[serde(default)]
    pub transforms: Vec<TransformConfig>,
}

impl RenderConfig {
    pub fn load(path: &str) -> Result<RenderConfig, TracerError> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| TracerError::InvalidConfiguration(format!("{}: {}", path, e)))
    }

    /// Composes the transform list, first entry applied first to a point.
    pub fn sphere_transform(&self) -> Result<Matrix, TracerError> {
        let matrices: Vec<Matrix> = self.transforms.iter().map(|t| t.to_matrix()).collect();
        Ok(transform::transform(&matrices)?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    pub color: (f64, f64, f64),
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
}

impl Default for MaterialConfig {
    fn default() -> MaterialConfig {
        let defaults = Material::new();
        MaterialConfig {
            // The stock render scene uses a magenta sphere.
            color: (Color::MAGENTA.r, Color::MAGENTA.g, Color::MAGENTA.b),
            ambient: defaults.ambient(),
            diffuse: defaults.diffuse(),
            specular: defaults.specular(),
            shininess: defaults.shininess(),
        }
    }
}

impl MaterialConfig {
    pub fn to_material(&self) -> Material {
        let mut material = Material::new();
        material.set_color(Color::new(self.color.0, self.color.1, self.color.2));
        material.set_ambient(self.ambient);
        material.set_diffuse(self.diffuse);
        material.set_specular(self.specular);
        material.set_shininess(self.shininess);
        material
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub position: (f64, f64, f64),
    pub intensity: (f64, f64, f64),
}

impl Default for LightConfig {
    fn default() -> LightConfig {
        LightConfig {
            position: (-10.0, 10.0, -10.0),
            intensity: (1.0, 1.0, 1.0),
        }
    }
}

impl LightConfig {
    pub fn to_light(&self) -> PointLight {
        PointLight::new(
            Tuple::point(self.position.0, self.position.1, self.position.2),
            Color::new(self.intensity.0, self.intensity.1, self.intensity.2),
        )
    }
}

#[derive(Debug, Deserialize)]
pub enum TransformConfig {
    Translation { x: f64, y: f64, z: f64 },
    Scaling { x: f64, y: f64, z: f64 },
    RotationX { radians: f64 },
    RotationY { radians: f64 },
    RotationZ { radians: f64 },
    Shearing { xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64 },
}

impl TransformConfig {
    pub fn to_matrix(&self) -> Matrix {
        match *self {
            TransformConfig::Translation { x, y, z } => transform::translation(x, y, z),
            TransformConfig::Scaling { x, y, z } => transform::scaling(x, y, z),
            TransformConfig::RotationX { radians } => transform::rotation_x(radians),
            TransformConfig::RotationY { radians } => transform::rotation_y(radians),
            TransformConfig::RotationZ { radians } => transform::rotation_z(radians),
            TransformConfig::Shearing {
                xy,
                xz,
                yx,
                yz,
                zx,
                zy,
            } => transform::shearing(xy, xz, yx, yz, zx, zy),
        }
    }
}
