mod cli;
mod configuration;
mod math;
mod rendering;
mod scene_objects;

use crate::cli::{Action, App};
use crate::configuration::RenderConfig;
use crate::rendering::raytracer::TracerError;
use clap::Parser;
use log::error;

fn run(app: App) -> Result<(), TracerError> {
    let App {
        global_opts,
        config_file,
        action,
    } = app;

    match action {
        Action::Render { filename } => {
            let config = match config_file {
                Some(path) => RenderConfig::load(&path)?,
                None => RenderConfig::default(),
            };
            cli::render::run(&global_opts, &config, &filename)
        }
        Action::Clock { filename } => cli::clock::run(&global_opts, &filename),
        Action::Projectile { filename } => cli::projectile::run(&global_opts, &filename),
    }
}

fn main() {
    env_logger::init();

    if let Err(err) = run(App::parse()) {
        error!("{}", err);
        std::process::exit(1);
    }
}
