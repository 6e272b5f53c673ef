pub mod canvas;
pub mod color;
pub mod light;
pub mod lighting;
pub mod material;
pub mod ppm;
pub mod ray;
pub mod raytracer;
