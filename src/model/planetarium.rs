use std::collections::HashMap;
use std::time::Instant;

use nalgebra::{Point2, Vector2};
use tracing::{debug, info};

use super::catalog::solar_system;
use super::controls::{Control, ControlPanel, PanelStatus, Rect};
use super::driver::Ticker;
use super::facts::fact_sheet;
use super::info::info_panel_lines;
use super::orrery::{Body, BodyID, Orrery};
use super::starfield::Starfield;
use super::state::SimulationState;
use super::text::{TextLine, TextStyle};
use super::trail::Trail;
use crate::config::Config;

pub const ZOOM_IN_FACTOR: f64 = 1.15;
// Not the reciprocal of ZOOM_IN_FACTOR; zooming in and back out shrinks orbits
// to 97.75% of where they started.
pub const ZOOM_OUT_FACTOR: f64 = 0.85;
pub const SMALLER_FACTOR: f64 = 0.8;
pub const BIGGER_FACTOR: f64 = 1.2;

const LABEL_HEIGHT: f64 = 25.0;

/// The whole simulation minus the window: bodies, the user's settings, trails,
/// the animation timer, and the panel beside the canvas.
pub struct Planetarium {
    orrery: Orrery,
    state: SimulationState,
    trails: HashMap<BodyID, Trail>,
    driver: Ticker,
    starfield: Starfield,
    // Where bodies, trails and labels may be drawn
    canvas: Rect,
    panel: ControlPanel,
    status: PanelStatus,
    ticks: u64,
}

impl Planetarium {
    pub fn new(config: &Config, images: (usize, usize), now: Instant) -> Self {
        Self::with_orrery(solar_system(), config, images, now)
    }

    pub fn with_orrery(
        orrery: Orrery,
        config: &Config,
        (images_found, images_expected): (usize, usize),
        now: Instant,
    ) -> Self {
        let trails = orrery
            .orbiting_bodies()
            .filter(|b| b.info.leaves_trail)
            .map(|b| (b.id, Trail::new(config.max_trail_points)))
            .collect();

        let status = PanelStatus {
            images_found,
            images_expected,
            planets: orrery.orbiting_bodies().count(),
        };

        let half_canvas = config.canvas_half_extents();
        let canvas = Rect::new(
            Point2::origin(),
            config.canvas_width as f64,
            config.canvas_height as f64,
        );
        let panel_area = Rect::new(
            Point2::new(half_canvas.x + config.panel_width as f64 / 2.0, 0.0),
            config.panel_width as f64,
            config.canvas_height as f64,
        );

        let mut planetarium = Planetarium {
            orrery,
            state: SimulationState::new(),
            trails,
            driver: Ticker::new(config.tick_interval, config.max_catch_up_ticks),
            starfield: Starfield::new(
                config.star_count,
                half_canvas,
                config.twinkle_interval,
                config.seed,
                now,
            ),
            canvas,
            panel: ControlPanel::new(panel_area),
            status,
            ticks: 0,
        };
        planetarium.reset_positions();
        if planetarium.state.running {
            planetarium.driver.arm(now);
        }
        planetarium
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn trails(&self) -> impl Iterator<Item = (BodyID, &Trail)> + '_ {
        self.trails.iter().map(|(id, trail)| (*id, trail))
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn canvas(&self) -> &Rect {
        &self.canvas
    }

    fn canvas_top(&self) -> f64 {
        self.canvas.center.y + self.canvas.half_extents.y
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    /// Whether a body is over the canvas rather than out past its edge or
    /// under the panel.
    pub fn is_visible(&self, body: &Body) -> bool {
        self.canvas.contains(body.position)
    }

    /// Trail segments to draw, with the body each belongs to. Segments that
    /// leave the canvas are left out.
    pub fn trail_segments(&self) -> Vec<(BodyID, Point2<f64>, Point2<f64>)> {
        let mut segments = vec![];
        for (id, trail) in self.trails.iter() {
            for (a, b) in trail.segments() {
                if self.canvas.contains(a) && self.canvas.contains(b) {
                    segments.push((*id, a, b));
                }
            }
        }
        segments
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_armed()
    }

    /// Runs whatever animation ticks are due, and twinkles the stars.
    /// Returns the number of ticks run.
    pub fn update(&mut self, now: Instant) -> usize {
        self.starfield.update(now);

        let due = self.driver.poll(now);
        for _ in 0..due {
            self.tick();
        }
        due
    }

    /// One step of the animation: draw everything where it is, then move it
    /// along.
    pub fn tick(&mut self) {
        self.redraw();
        self.orrery.advance_angles(self.state.speed_multiplier());
        self.ticks += 1;
    }

    fn redraw(&mut self) {
        self.orrery.update_positions();
        if self.state.trails_visible {
            for (id, trail) in self.trails.iter_mut() {
                trail.extend_to(self.orrery.get_body(*id).position);
            }
        }
    }

    // Puts every body back at angle zero, with fresh trails.
    fn reset_positions(&mut self) {
        self.orrery.reset_angles();
        for (id, trail) in self.trails.iter_mut() {
            trail.clear();
            if self.state.trails_visible {
                trail.start_at(self.orrery.get_body(*id).position);
            }
        }
    }

    pub fn apply(&mut self, control: Control, now: Instant) {
        debug!("Control pressed: {:?}", control);
        match control {
            Control::TogglePause => self.toggle_pause(now),
            Control::SpeedUp => self.speed_up(),
            Control::SlowDown => self.slow_down(),
            Control::ZoomIn => self.zoom_in(),
            Control::ZoomOut => self.zoom_out(),
            Control::Smaller => self.make_smaller(),
            Control::Bigger => self.make_bigger(),
            Control::ToggleLabels => self.toggle_labels(),
            Control::ToggleTrails => self.toggle_trails(),
            Control::ClearInfo => self.clear_info(),
            Control::Reset => self.reset(),
        }
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        self.state.running = !self.state.running;
        if self.state.running {
            self.driver.arm(now);
        } else {
            self.driver.disarm();
        }
        info!("Animation {}", if self.state.running { "resumed" } else { "paused" });
    }

    pub fn speed_up(&mut self) {
        self.state.speed_up();
        info!("Speed: {:.1}x", self.state.speed_multiplier());
    }

    pub fn slow_down(&mut self) {
        self.state.slow_down();
        info!("Speed: {:.1}x", self.state.speed_multiplier());
    }

    pub fn zoom_in(&mut self) {
        self.zoom(ZOOM_IN_FACTOR);
    }

    pub fn zoom_out(&mut self) {
        self.zoom(ZOOM_OUT_FACTOR);
    }

    fn zoom(&mut self, factor: f64) {
        self.orrery.scale_orbits(factor);
        self.reset_positions();
    }

    pub fn make_smaller(&mut self) {
        self.resize(SMALLER_FACTOR);
    }

    pub fn make_bigger(&mut self) {
        self.resize(BIGGER_FACTOR);
    }

    fn resize(&mut self, factor: f64) {
        let before: Vec<f64> = self
            .orrery
            .orbiting_bodies()
            .map(|b| b.visual_scale)
            .collect();
        self.orrery.scale_bodies(factor);
        for (body, old) in self.orrery.orbiting_bodies().zip(before) {
            debug!(
                "Resized {}: {:.2} -> {:.2}",
                body.info.name, old, body.visual_scale
            );
        }
    }

    pub fn toggle_labels(&mut self) {
        self.state.labels_visible = !self.state.labels_visible;
    }

    pub fn toggle_trails(&mut self) {
        self.state.trails_visible = !self.state.trails_visible;
        for (id, trail) in self.trails.iter_mut() {
            trail.clear();
            if self.state.trails_visible {
                trail.start_at(self.orrery.get_body(*id).position);
            }
        }
    }

    pub fn show_info(&mut self, key: &str) {
        if fact_sheet(key).is_none() {
            return;
        }
        self.state.select(key);
    }

    pub fn clear_info(&mut self) {
        self.state.deselect();
    }

    pub fn reset(&mut self) {
        self.state.reset_speed();
        self.reset_positions();
        self.clear_info();
        info!("Simulation reset");
    }

    /// Handles a click anywhere in the window, given in canvas coordinates.
    /// Clicks on the panel go to its buttons, clicks on the canvas select a
    /// body or clear the fact sheet.
    pub fn click(&mut self, point: Point2<f64>, now: Instant) {
        if self.panel.contains(point) {
            if let Some(control) = self.panel.control_at(point) {
                self.apply(control, now);
            }
            return;
        }

        match self.orrery.hit_test(point, |b| self.is_visible(b)) {
            Some(id) => {
                let key = self.orrery.get_body(id).info.info_key.clone();
                self.show_info(&key);
            }
            None => self.clear_info(),
        }
    }

    pub fn labels(&self) -> Vec<TextLine> {
        if !self.state.labels_visible {
            return vec![];
        }

        let mut labels = vec![];
        for body in self.orrery.orbiting_bodies().filter(|b| self.is_visible(b)) {
            let at = |dy: f64| body.position + Vector2::new(0.0, dy);
            let name_at = at(LABEL_HEIGHT);
            labels.push(TextLine::new(
                body.info.name.clone(),
                name_at.x,
                name_at.y,
                TextStyle::BodyName,
            ));
            if let Some(caption) = &body.info.size_label {
                let caption_at = at(-LABEL_HEIGHT);
                labels.push(TextLine::new(
                    caption.clone(),
                    caption_at.x,
                    caption_at.y,
                    TextStyle::BodyCaption,
                ));
            }
        }
        labels.retain(|line| self.canvas.contains(line.position));
        labels
    }

    pub fn info_lines(&self) -> Vec<TextLine> {
        self.state
            .selected_info_key()
            .and_then(|key| info_panel_lines(key, self.canvas_top()))
            .unwrap_or_default()
    }

    pub fn panel_lines(&self) -> Vec<TextLine> {
        self.panel.text_lines(&self.state, &self.status)
    }
}
