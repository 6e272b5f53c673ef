use crate::math::matrix::MatrixError;
use crate::math::tuple::{Tuple, TupleError};
use crate::rendering::canvas::{Canvas, CanvasError};
use crate::rendering::color::Color;
use crate::rendering::light::PointLight;
use crate::rendering::lighting::lighting;
use crate::rendering::ppm::Ppm;
use crate::rendering::ray::{Ray, RayError};
use crate::scene_objects::shape::Shape;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::ParallelSliceMut;
use rayon::iter::{IndexedParallelIterator, ParallelIterator};

#[derive(Debug, thiserror::Error)]
pub enum TracerError {
    #[error("tuple error: {0}")]
    Tuple(#[from] TupleError),
    #[error("matrix error: {0}")]
    Matrix(#[from] MatrixError),
    #[error("ray error: {0}")]
    Ray(#[from] RayError),
    #[error("canvas error: {0}")]
    Canvas(#[from] CanvasError),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Casts one ray per pixel from a fixed eye through a wall plane behind the
/// scene and shades the nearest visible intersection.
pub struct Raytracer {
    width: usize,
    height: usize,
    ray_origin: Tuple,
    wall_z: f64,
    wall_half: f64,
    pixel_size: f64,
}

impl Raytracer {
    pub fn new(width: usize, height: usize) -> Raytracer {
        let wall_size = 7.0;
        Raytracer {
            width,
            height,
            ray_origin: Tuple::point(0.0, 0.0, -5.0),
            wall_z: 10.0,
            wall_half: wall_size / 2.0,
            pixel_size: wall_size / width as f64,
        }
    }

    fn color_at<S: Shape>(
        &self,
        shape: &S,
        light: &PointLight,
        x: usize,
        y: usize,
    ) -> Result<Color, TracerError> {
        let world_x = self.pixel_size * x as f64 - self.wall_half;
        let world_y = self.wall_half - self.pixel_size * y as f64;

        let target = Tuple::point(world_x, world_y, self.wall_z);
        let direction = (target - self.ray_origin).normalize()?;
        let ray = Ray::new(self.ray_origin, direction)?;

        let xs = shape.intersect(&ray)?;
        match xs.hit() {
            Some(hit) => {
                let point = ray.position(hit.t());
                let normal = hit.object().normal_at(point)?;
                let eye = -ray.direction();
                lighting(hit.object().material(), light, point, eye, normal)
            }
            None => Ok(Color::BLACK),
        }
    }

    /// Renders the scene, one rayon task per scanline. The scene is
    /// read-only while rendering.
    pub fn render<S: Shape + Sync>(
        &self,
        shape: &S,
        light: &PointLight,
    ) -> Result<Canvas, TracerError> {
        debug!(
            "rendering {}x{} pixels, eye at {}",
            self.width, self.height, self.ray_origin
        );

        let pb = ProgressBar::new((self.width * self.height) as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] [{wide_bar}] {pos}/{len} ({eta})",
            )
            .unwrap()
            .progress_chars("=> "),
        );

        let mut pixels = vec![Color::BLACK; self.width * self.height];
        pixels
            .par_chunks_mut(self.width)
            .enumerate()
            .try_for_each(|(y, row)| -> Result<(), TracerError> {
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = self.color_at(shape, light, x, y)?;
                }
                pb.inc(row.len() as u64);
                Ok(())
            })?;
        pb.finish();

        Ok(Canvas::from_pixels(self.width, self.height, pixels)?)
    }
}

/// Saves the canvas, choosing the encoder by file extension: `.ppm` gets the
/// plain-text encoder, anything else goes through the image crate.
pub fn save_canvas(canvas: &Canvas, filename: &str) -> Result<(), TracerError> {
    if filename.ends_with(".ppm") {
        Ppm::new(canvas).save(filename)?;
    } else {
        let buffer: Vec<u8> = canvas.pixels().iter().flat_map(|c| c.to_rgb8()).collect();
        let img: image::RgbImage =
            image::ImageBuffer::from_vec(canvas.width() as u32, canvas.height() as u32, buffer)
                .expect("canvas pixel buffer matches image dimensions");
        img.save(filename)?;
    }
    info!("saved image to {}", filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene_objects::sphere::Sphere;
    use approx::assert_abs_diff_eq;

    #[test]
    fn render_shades_sphere_in_the_middle() {
        let sphere = Sphere::new();
        let light = PointLight::new(Tuple::point(-10.0, 10.0, -10.0), Color::WHITE);

        let tracer = Raytracer::new(11, 11);
        let canvas = tracer.render(&sphere, &light).unwrap();

        assert_eq!(canvas.width(), 11);
        assert_eq!(canvas.height(), 11);

        // The unit sphere covers the center of the wall but not its corners.
        let center = canvas.pixel(5, 5);
        assert!(center.r > 0.0 && center.g > 0.0 && center.b > 0.0);
        assert_abs_diff_eq!(canvas.pixel(0, 0), Color::BLACK);
        assert_abs_diff_eq!(canvas.pixel(10, 10), Color::BLACK);
    }

    #[test]
    fn misses_render_black() {
        let mut sphere = Sphere::new();
        sphere.set_transform(crate::math::transform::translation(100.0, 0.0, 0.0));
        let light = PointLight::new(Tuple::point(-10.0, 10.0, -10.0), Color::WHITE);

        let tracer = Raytracer::new(5, 5);
        let canvas = tracer.render(&sphere, &light).unwrap();
        for pixel in canvas.pixels() {
            assert_abs_diff_eq!(*pixel, Color::BLACK);
        }
    }
}
