use crate::math::tuple::Tuple;
use crate::rendering::color::Color;
use crate::rendering::light::PointLight;
use crate::rendering::material::Material;
use crate::rendering::raytracer::TracerError;

/// Shades a point on a surface with the Phong reflection model. The eye and
/// normal vectors are unit vectors pointing away from the surface.
pub fn lighting(
    material: &Material,
    light: &PointLight,
    point: Tuple,
    eye_vec: Tuple,
    normal_vec: Tuple,
) -> Result<Color, TracerError> {
    // combine the surface color with the light's color/intensity
    let effective_color = material.color().hadamard(&light.intensity());

    // direction to the light source
    let light_vec = (light.position() - point).normalize()?;

    let ambient = effective_color * material.ambient();

    // cosine of the angle between the light vector and the normal vector;
    // negative means the light is on the other side of the surface
    let light_dot_normal = light_vec.dot(&normal_vec)?;

    let mut diffuse = Color::BLACK;
    let mut specular = Color::BLACK;

    if light_dot_normal >= 0.0 {
        diffuse = effective_color * (material.diffuse() * light_dot_normal);

        // cosine of the angle between the reflection vector and the eye
        // vector; non-positive means the light reflects away from the eye
        let reflect_dot_eye = (-light_vec).reflect(&normal_vec)?.dot(&eye_vec)?;

        if reflect_dot_eye > 0.0 {
            let factor = reflect_dot_eye.powf(material.shininess());
            specular = light.intensity() * (material.specular() * factor);
        }
    }

    Ok(ambient + diffuse + specular)
}
