use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use plotters::prelude::*;
use rust_orrery::config::Config;
use rust_orrery::model::Planetarium;

/// Runs the solar system without a window and plots where everything went.
#[derive(Debug, Parser)]
struct Args {
    /// How many animation ticks to run
    #[arg(long, default_value_t = 1000)]
    ticks: usize,

    /// Speed multiplier, applied by pressing "faster" or "slower" until it sticks
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    #[arg(long, default_value = "plots/orbits.png")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = Config {
        seed: Some(0),
        ..Config::default()
    };

    let mut planetarium = Planetarium::new(&config, (0, 0), Instant::now());
    // The multiplier only moves in steps, so walk it towards the target.
    while planetarium.state().speed_multiplier() < args.speed * 0.9 {
        let before = planetarium.state().speed_multiplier();
        planetarium.speed_up();
        if planetarium.state().speed_multiplier() == before {
            break;
        }
    }
    while planetarium.state().speed_multiplier() > args.speed * 1.1 {
        let before = planetarium.state().speed_multiplier();
        planetarium.slow_down();
        if planetarium.state().speed_multiplier() == before {
            break;
        }
    }

    for _ in 0..args.ticks {
        planetarium.tick();
    }

    if let Some(dir) = args.output.parent() {
        fs::create_dir_all(dir)?;
    }
    draw_plot(&args.output, &planetarium, &config)?;
    println!(
        "Wrote {} ticks at {:.1}x to {}",
        planetarium.ticks(),
        planetarium.state().speed_multiplier(),
        args.output.display()
    );
    Ok(())
}

fn draw_plot(
    path: &Path,
    planetarium: &Planetarium,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let half = config.canvas_half_extents();
    let root = BitMapBackend::new(path, (config.canvas_width, config.canvas_height))
        .into_drawing_area();
    root.fill(&BLACK)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-half.x..half.x, -half.y..half.y)?;

    chart
        .configure_mesh()
        .axis_style(&WHITE)
        .label_style(("sans-serif", 12).into_font().color(&WHITE))
        .light_line_style(&BLACK)
        .draw()?;

    let orrery = planetarium.orrery();
    for (id, trail) in planetarium.trails() {
        let color = to_rgb(orrery.get_body(id).info.color);
        for stroke in trail.strokes() {
            chart.draw_series(LineSeries::new(stroke.iter().map(|p| (p.x, p.y)), &color))?;
        }
    }

    for body in orrery.bodies() {
        let color = to_rgb(body.info.color);
        let radius = (20.0 * body.visual_scale).max(2.0) as i32;
        chart.draw_series(std::iter::once(Circle::new(
            (body.position.x, body.position.y),
            radius,
            color.filled(),
        )))?;
    }

    root.present()?;
    Ok(())
}

fn to_rgb(color: nalgebra::Point3<f32>) -> RGBColor {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    RGBColor(channel(color.x), channel(color.y), channel(color.z))
}
