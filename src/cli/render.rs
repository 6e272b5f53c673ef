use crate::cli::GlobalOpts;
use crate::configuration::RenderConfig;
use crate::rendering::raytracer::{save_canvas, Raytracer, TracerError};
use crate::scene_objects::sphere::Sphere;
use log::debug;

pub fn run(opts: &GlobalOpts, config: &RenderConfig, filename: &str) -> Result<(), TracerError> {
    let mut sphere = Sphere::new();
    sphere.set_material(config.material.to_material());
    sphere.set_transform(config.sphere_transform()?);

    let light = config.light.to_light();
    debug!(
        "light at {} with intensity {:?}",
        light.position(),
        light.intensity()
    );

    let tracer = Raytracer::new(opts.width, opts.height);
    let canvas = tracer.render(&sphere, &light)?;
    save_canvas(&canvas, filename)
}
