use std::time::Instant;

use kiss3d::camera::Camera;
use kiss3d::event::EventManager;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};
use nalgebra::Vector2;

use self::controller::{Controller, Input};
use self::view::View;
use crate::assets::AssetReport;
use crate::config::Config;
use crate::model::Planetarium;

mod controller;
mod view;

pub struct Simulation {
    planetarium: Planetarium,
    view: View,
    controller: Controller,
}

impl Simulation {
    pub fn new(
        planetarium: Planetarium,
        assets: &AssetReport,
        config: &Config,
        window: &mut Window,
    ) -> Self {
        let view = View::new(window, &planetarium, assets, config);
        Self {
            planetarium,
            view,
            controller: Controller::new(),
        }
    }

    fn process_user_input(&mut self, mut events: EventManager, window_size: Vector2<f32>, now: Instant) {
        for event in events.iter() {
            match self.controller.process_event(&event.value) {
                Some(Input::Control(control)) => self.planetarium.apply(control, now),
                Some(Input::Click(point)) => {
                    let point = self.view.window_to_canvas(point, window_size);
                    self.planetarium.click(point, now);
                }
                None => {}
            }
        }
    }
}

impl State for Simulation {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        self.view.cameras_and_effect_and_renderer()
    }

    fn step(&mut self, window: &mut Window) {
        let now = Instant::now();
        let window_size = Vector2::new(window.width() as f32, window.height() as f32);

        self.process_user_input(window.events(), window_size, now);
        self.planetarium.update(now);
        self.view.update_scene_objects(&self.planetarium);
        self.view.prerender_scene(window, &self.planetarium);
    }
}
