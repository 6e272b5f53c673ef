use crate::cli::GlobalOpts;
use crate::math::transform::{rotation_z, transform, translation};
use crate::math::tuple::Tuple;
use crate::rendering::canvas::Canvas;
use crate::rendering::color::Color;
use crate::rendering::raytracer::{save_canvas, TracerError};
use log::info;
use std::f64::consts::PI;

const HOUR_MARKS: usize = 12;

pub fn run(opts: &GlobalOpts, filename: &str) -> Result<(), TracerError> {
    let mut canvas = Canvas::new(opts.width, opts.height)?;

    let center = Tuple::point(0.0, 0.0, 0.0);
    let radius = opts.width.min(opts.height) as f64 * 0.4;
    let angle = 2.0 * PI / HOUR_MARKS as f64;

    for h in 0..HOUR_MARKS {
        let p = transform(&[
            translation(0.0, radius, 0.0),
            rotation_z(-(h as f64) * angle),
            translation(
                canvas.width() as f64 / 2.0,
                canvas.height() as f64 / 2.0,
                0.0,
            ),
        ])?
        .tup_mul(&center)?;

        info!("hour mark {} at {}", h, p);
        canvas.write_pixel(p.x, canvas.height() as f64 - p.y, Color::WHITE);
    }

    save_canvas(&canvas, filename)
}
