use std::path::PathBuf;
use std::time::Duration;

use nalgebra::Vector2;
use tracing::warn;

/// The control panel's buttons, status and instructions need this much room.
pub const MIN_CANVAS_HEIGHT: u32 = 820;

/// Runtime knobs. The defaults reproduce the classic layout: a 1400x900 canvas
/// with a 300 wide control panel to its right, ticking every 15 ms.
#[derive(Debug, Clone)]
pub struct Config {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub panel_width: u32,
    pub tick_interval: Duration,
    pub max_catch_up_ticks: usize,
    pub asset_dir: PathBuf,
    pub star_count: usize,
    pub twinkle_interval: Duration,
    // None means a different sky every run
    pub seed: Option<u64>,
    pub max_trail_points: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            canvas_width: 1400,
            canvas_height: 900,
            panel_width: 300,
            tick_interval: Duration::from_millis(15),
            max_catch_up_ticks: 4,
            asset_dir: PathBuf::from("assets"),
            star_count: 50,
            twinkle_interval: Duration::from_millis(300),
            seed: None,
            max_trail_points: 2000,
        }
    }
}

impl Config {
    /// Sets the height of the canvas (and so of the panel), keeping enough
    /// room for the panel's contents.
    pub fn set_canvas_height(&mut self, height: u32) {
        if height < MIN_CANVAS_HEIGHT {
            warn!(
                "Height {} is too small for the control panel, using {}",
                height, MIN_CANVAS_HEIGHT
            );
        }
        self.canvas_height = height.max(MIN_CANVAS_HEIGHT);
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.canvas_width + self.panel_width, self.canvas_height)
    }

    pub fn canvas_half_extents(&self) -> Vector2<f64> {
        Vector2::new(
            self.canvas_width as f64 / 2.0,
            self.canvas_height as f64 / 2.0,
        )
    }

    /// Where the canvas origin lands in window coordinates, which put (0, 0) at
    /// the center of the whole window.
    pub fn canvas_origin_in_window(&self) -> Vector2<f64> {
        Vector2::new(-(self.panel_width as f64) / 2.0, 0.0)
    }
}
