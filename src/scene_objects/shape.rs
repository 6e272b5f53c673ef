use crate::math::tuple::Tuple;
use crate::rendering::material::Material;
use crate::rendering::ray::Ray;
use crate::rendering::raytracer::TracerError;
use crate::scene_objects::intersection::Intersections;

/// Implemented by objects that can be rendered.
pub trait Shape {
    /// Returns the collection of intersections where the ray meets the
    /// object. A miss is an empty collection, not an error.
    fn intersect(&self, ray: &Ray) -> Result<Intersections<'_>, TracerError>;

    /// Returns the world-space surface normal at the given point.
    fn normal_at(&self, point: Tuple) -> Result<Tuple, TracerError>;

    /// Returns the surface material of the object.
    fn material(&self) -> &Material;
}
