pub mod clock;
pub mod projectile;
pub mod render;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Args, Clone)]
pub struct GlobalOpts {
    #[arg(long, default_value = "300")]
    pub width: usize,
    #[arg(long, default_value = "300")]
    pub height: usize,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct App {
    #[clap(flatten)]
    pub global_opts: GlobalOpts,
    /// Optional TOML scene description for the render subcommand.
    #[arg(short, long)]
    pub config_file: Option<String>,
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Action {
    /// Render a sphere shaded by a single point light.
    Render {
        #[arg(long, default_value = "render.ppm")]
        filename: String,
    },
    /// Plot the twelve hour marks of a clock face.
    Clock {
        #[arg(long, default_value = "clock.ppm")]
        filename: String,
    },
    /// Plot the trajectory of a projectile under gravity and wind.
    Projectile {
        #[arg(long, default_value = "projectile.ppm")]
        filename: String,
    },
}
