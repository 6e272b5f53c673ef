use crate::math::matrix::Matrix;
use crate::math::tuple::Tuple;
use crate::rendering::raytracer::TracerError;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RayError {
    #[error("ray origin must be a point (w = 1), got w = {w}")]
    OriginNotAPoint { w: f64 },
    #[error("ray direction must be a vector (w = 0), got w = {w}")]
    DirectionNotAVector { w: f64 },
}

/// A ray has a starting point called the origin and a direction vector that
/// says where it points.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    origin: Tuple,
    direction: Tuple,
}

impl Ray {
    pub fn new(origin: Tuple, direction: Tuple) -> Result<Ray, RayError> {
        if !origin.is_point() {
            return Err(RayError::OriginNotAPoint { w: origin.w });
        }
        if !direction.is_vector() {
            return Err(RayError::DirectionNotAVector { w: direction.w });
        }
        Ok(Ray { origin, direction })
    }

    pub fn origin(&self) -> Tuple {
        self.origin
    }

    pub fn direction(&self) -> Tuple {
        self.direction
    }

    /// Computes the point at distance t along the ray.
    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    /// Returns a new ray with the transformation applied to both origin and
    /// direction. The direction is unaffected by translation because its
    /// w = 0 zeroes out the translation column.
    pub fn transform(&self, m: &Matrix) -> Result<Ray, TracerError> {
        Ok(Ray::new(m.tup_mul(&self.origin)?, m.tup_mul(&self.direction)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::transform::{scaling, translation};
    use approx::assert_abs_diff_eq;

    #[test]
    fn create_ray() {
        let origin = Tuple::point(1.0, 2.0, 3.0);
        let direction = Tuple::vector(4.0, 5.0, 6.0);
        let ray = Ray::new(origin, direction).unwrap();
        assert_abs_diff_eq!(ray.origin(), origin);
        assert_abs_diff_eq!(ray.direction(), direction);
    }

    #[test]
    fn vector_origin_is_rejected() {
        let err = Ray::new(Tuple::vector(1.0, 2.0, 3.0), Tuple::vector(4.0, 5.0, 6.0))
            .unwrap_err();
        assert_eq!(err, RayError::OriginNotAPoint { w: 0.0 });
    }

    #[test]
    fn point_direction_is_rejected() {
        let err = Ray::new(Tuple::point(1.0, 2.0, 3.0), Tuple::point(4.0, 5.0, 6.0))
            .unwrap_err();
        assert_eq!(err, RayError::DirectionNotAVector { w: 1.0 });
    }

    #[test]
    fn position_along_ray() {
        let ray = Ray::new(Tuple::point(2.0, 3.0, 4.0), Tuple::vector(1.0, 0.0, 0.0)).unwrap();
        assert_abs_diff_eq!(ray.position(0.0), Tuple::point(2.0, 3.0, 4.0));
        assert_abs_diff_eq!(ray.position(1.0), Tuple::point(3.0, 3.0, 4.0));
        assert_abs_diff_eq!(ray.position(-1.0), Tuple::point(1.0, 3.0, 4.0));
        assert_abs_diff_eq!(ray.position(2.5), Tuple::point(4.5, 3.0, 4.0));
    }

    #[test]
    fn translate_ray() {
        let ray = Ray::new(Tuple::point(1.0, 2.0, 3.0), Tuple::vector(0.0, 1.0, 0.0)).unwrap();
        let moved = ray.transform(&translation(3.0, 4.0, 5.0)).unwrap();
        assert_abs_diff_eq!(moved.origin(), Tuple::point(4.0, 6.0, 8.0));
        assert_abs_diff_eq!(moved.direction(), Tuple::vector(0.0, 1.0, 0.0));
    }

    #[test]
    fn scale_ray() {
        let ray = Ray::new(Tuple::point(1.0, 2.0, 3.0), Tuple::vector(0.0, 1.0, 0.0)).unwrap();
        let scaled = ray.transform(&scaling(2.0, 3.0, 4.0)).unwrap();
        assert_abs_diff_eq!(scaled.origin(), Tuple::point(2.0, 6.0, 12.0));
        assert_abs_diff_eq!(scaled.direction(), Tuple::vector(0.0, 3.0, 0.0));
    }
}
