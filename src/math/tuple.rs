use crate::math;
use approx::AbsDiffEq;
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Div, Mul, Neg, Sub};

const POINT_W: f64 = 1.0;
const VECTOR_W: f64 = 0.0;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TupleError {
    #[error("operand must be a vector (w = 0), got w = {w}")]
    InvalidOperand { w: f64 },
}

/// Four components: three spatial coordinates and one that distinguishes a
/// point (w = 1) from a vector (w = 0). Intermediate results of matrix
/// multiplication may carry any w.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Tuple {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Tuple {
        Tuple { x, y, z, w }
    }

    /// Creates a point (w = 1).
    pub fn point(x: f64, y: f64, z: f64) -> Tuple {
        Tuple::new(x, y, z, POINT_W)
    }

    /// Creates a vector (w = 0).
    pub fn vector(x: f64, y: f64, z: f64) -> Tuple {
        Tuple::new(x, y, z, VECTOR_W)
    }

    pub fn is_point(&self) -> bool {
        self.w == POINT_W
    }

    pub fn is_vector(&self) -> bool {
        self.w == VECTOR_W
    }

    /// Returns the same coordinates with w forced back to vector semantics.
    /// Multiplying a vector by a general 4x4 matrix can perturb w.
    pub fn as_vector(&self) -> Tuple {
        Tuple::vector(self.x, self.y, self.z)
    }

    /// Approximately compares two tuples.
    pub fn equal(&self, other: &Tuple) -> bool {
        math::equals(self.x, other.x)
            && math::equals(self.y, other.y)
            && math::equals(self.z, other.z)
            && math::equals(self.w, other.w)
    }

    fn require_vector(&self) -> Result<(), TupleError> {
        if self.is_vector() {
            Ok(())
        } else {
            Err(TupleError::InvalidOperand { w: self.w })
        }
    }

    /// Returns the length of the vector.
    pub fn magnitude(&self) -> Result<f64, TupleError> {
        self.require_vector()?;
        Ok((self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt())
    }

    /// Scales the vector down to a unit vector.
    pub fn normalize(&self) -> Result<Tuple, TupleError> {
        Ok(*self / self.magnitude()?)
    }

    /// Returns the dot product of the two vectors.
    pub fn dot(&self, other: &Tuple) -> Result<f64, TupleError> {
        self.require_vector()?;
        other.require_vector()?;
        Ok(self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w)
    }

    /// Returns the cross product of the two vectors.
    pub fn cross(&self, other: &Tuple) -> Result<Tuple, TupleError> {
        self.require_vector()?;
        other.require_vector()?;
        Ok(Tuple::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        ))
    }

    /// Mirrors the vector about the given normal.
    pub fn reflect(&self, normal: &Tuple) -> Result<Tuple, TupleError> {
        Ok(*self - *normal * (2.0 * self.dot(normal)?))
    }
}

impl Add for Tuple {
    type Output = Tuple;

    fn add(self, rhs: Tuple) -> Tuple {
        Tuple::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Tuple {
    type Output = Tuple;

    fn sub(self, rhs: Tuple) -> Tuple {
        Tuple::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Neg for Tuple {
    type Output = Tuple;

    fn neg(self) -> Tuple {
        Tuple::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f64> for Tuple {
    type Output = Tuple;

    fn mul(self, n: f64) -> Tuple {
        Tuple::new(n * self.x, n * self.y, n * self.z, n * self.w)
    }
}

impl Mul<Tuple> for f64 {
    type Output = Tuple;

    fn mul(self, t: Tuple) -> Tuple {
        t * self
    }
}

impl Div<f64> for Tuple {
    type Output = Tuple;

    fn div(self, n: f64) -> Tuple {
        Tuple::new(self.x / n, self.y / n, self.z / n, self.w / n)
    }
}

impl Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_vector() {
            write!(f, "vector({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
        } else if self.is_point() {
            write!(f, "point({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
        } else {
            write!(
                f,
                "tuple({:.1}, {:.1}, {:.1}, {:.1})",
                self.x, self.y, self.z, self.w
            )
        }
    }
}

impl AbsDiffEq for Tuple {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        math::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon)
            && f64::abs_diff_eq(&self.y, &other.y, epsilon)
            && f64::abs_diff_eq(&self.z, &other.z, epsilon)
            && f64::abs_diff_eq(&self.w, &other.w, epsilon)
    }
}
