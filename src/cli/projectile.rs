use crate::cli::GlobalOpts;
use crate::math::tuple::Tuple;
use crate::rendering::canvas::Canvas;
use crate::rendering::color::Color;
use crate::rendering::raytracer::{save_canvas, TracerError};
use log::{debug, info};

struct Projectile {
    position: Tuple,
    velocity: Tuple,
}

struct Environment {
    gravity: Tuple,
    wind: Tuple,
}

fn tick(env: &Environment, proj: &Projectile) -> Projectile {
    Projectile {
        position: proj.position + proj.velocity,
        velocity: proj.velocity + env.gravity + env.wind,
    }
}

pub fn run(opts: &GlobalOpts, filename: &str) -> Result<(), TracerError> {
    let env = Environment {
        gravity: Tuple::vector(0.0, -0.1, 0.0),
        wind: Tuple::vector(-0.01, 0.0, 0.0),
    };

    let mut proj = Projectile {
        position: Tuple::point(0.0, 1.0, 0.0),
        velocity: Tuple::vector(1.0, 1.8, 0.0).normalize()? * 11.25,
    };

    let mut canvas = Canvas::new(opts.width, opts.height)?;

    let mut ticks = 0;
    while proj.position.y > 0.0 {
        debug!("#{} {}", ticks, proj.position);
        proj = tick(&env, &proj);
        ticks += 1;

        canvas.write_pixel(
            proj.position.x,
            canvas.height() as f64 - proj.position.y,
            Color::WHITE,
        );
    }

    info!("projectile landed after {} ticks", ticks);
    save_canvas(&canvas, filename)
}
