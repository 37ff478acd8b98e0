use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use kiss3d::window::Window;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use rust_orrery::assets::resolve_assets;
use rust_orrery::config::Config;
use rust_orrery::gui::Simulation;
use rust_orrery::model::Planetarium;

/// An animated model of the Solar System.
#[derive(Debug, Parser)]
struct Args {
    /// Directory holding the body and background images
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Width of the drawing area, not counting the control panel
    #[arg(long)]
    width: Option<u32>,

    /// Height of the window, at least 820
    #[arg(long)]
    height: Option<u32>,

    /// Number of background stars
    #[arg(long)]
    stars: Option<usize>,

    /// Seed for the starfield, for the same sky every run
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(dir) = self.assets {
            config.asset_dir = dir;
        }
        if let Some(width) = self.width {
            config.canvas_width = width;
        }
        if let Some(height) = self.height {
            config.set_canvas_height(height);
        }
        if let Some(stars) = self.stars {
            config.star_count = stars;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = Config::default();
    Args::parse().apply(&mut config);

    info!("Loading images from {}", config.asset_dir.display());
    let assets = resolve_assets(&config.asset_dir);

    let (width, height) = config.window_size();
    let mut window = Window::new_with_size("Solar System", width, height);
    window.set_background_color(0.0, 0.0, 0.0);
    window.set_framerate_limit(Some(60));

    let planetarium = Planetarium::new(&config, assets.counts(), Instant::now());
    info!(
        "Solar system ready: {} bodies, {}/{} images",
        planetarium.orrery().len(),
        assets.found_count(),
        assets.expected_count()
    );

    let simulation = Simulation::new(planetarium, &assets, &config, &mut window);
    window.render_loop(simulation);
}
