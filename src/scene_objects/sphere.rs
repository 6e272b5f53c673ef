use crate::math::matrix::Matrix;
use crate::math::tuple::Tuple;
use crate::rendering::material::Material;
use crate::rendering::ray::Ray;
use crate::rendering::raytracer::TracerError;
use crate::scene_objects::intersection::{Intersection, Intersections};
use crate::scene_objects::shape::Shape;

/// A unit sphere centered at the world origin before its transformation is
/// applied.
#[derive(Clone, Debug)]
pub struct Sphere {
    transform: Matrix,
    material: Material,
}

impl Sphere {
    pub fn new() -> Sphere {
        Sphere {
            transform: Matrix::identity(),
            material: Material::new(),
        }
    }

    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    pub fn set_transform(&mut self, m: Matrix) {
        self.transform = m;
    }

    pub fn set_material(&mut self, m: Material) {
        self.material = m;
    }
}

impl Default for Sphere {
    fn default() -> Sphere {
        Sphere::new()
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> Result<Intersections<'_>, TracerError> {
        // Work in the sphere's local space instead of transforming the sphere.
        let local = ray.transform(&self.transform.inverse()?)?;

        // the vector from the sphere's center to the ray origin
        let sphere_to_ray = local.origin() - Tuple::point(0.0, 0.0, 0.0);

        let a = local.direction().dot(&local.direction())?;
        let b = 2.0 * local.direction().dot(&sphere_to_ray)?;
        let c = sphere_to_ray.dot(&sphere_to_ray)? - 1.0;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Ok(Intersections::empty());
        }

        let t1 = (-b - discriminant.sqrt()) / (2.0 * a);
        let t2 = (-b + discriminant.sqrt()) / (2.0 * a);

        let i1 = Intersection::new(t1, self as &dyn Shape);
        let i2 = Intersection::new(t2, self as &dyn Shape);

        // A tangent ray keeps both equal roots.
        if t1 > t2 {
            Ok(Intersections::new(vec![i2, i1]))
        } else {
            Ok(Intersections::new(vec![i1, i2]))
        }
    }

    fn normal_at(&self, point: Tuple) -> Result<Tuple, TracerError> {
        let inverse = self.transform.inverse()?;
        let local_point = inverse.tup_mul(&point)?;
        let local_normal = local_point - Tuple::point(0.0, 0.0, 0.0);

        // The inverse transpose keeps normals perpendicular to the surface
        // under non-uniform scaling; w is forced back to vector semantics
        // before normalizing.
        let world_normal = inverse.transpose().tup_mul(&local_normal)?.as_vector();
        Ok(world_normal.normalize()?)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
