pub mod intersection;
pub mod shape;
pub mod sphere;
