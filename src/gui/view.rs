use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use kiss3d::camera::Camera;
use kiss3d::planar_camera::{FixedView, PlanarCamera};
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::scene::PlanarSceneNode;
use kiss3d::text::Font;
use kiss3d::window::Window;
use nalgebra::{Point2, Point3, Translation2, Vector2};
use tracing::info;

use crate::assets::{AssetReport, Sprite, BACKGROUND_KEY};
use crate::config::Config;
use crate::model::colors;
use crate::model::orrery::{Body, BodyID, BodyKind};
use crate::model::text::{TextLine, TextStyle};
use crate::model::Planetarium;

// A plain circle at scale 1 is 20 across; images at scale 1 are 100 across.
const CIRCLE_RADIUS: f32 = 10.0;
const SPRITE_SIZE: f32 = 100.0;
// Without its image the sun is drawn as a big circle rather than at its
// image scale.
const SUN_CIRCLE_SCALE: f32 = 3.0;
const STAR_DOT_RADIUS: f32 = 0.5;

// Rough width of a glyph, relative to the font size. Good enough to center
// short lines of text.
const GLYPH_WIDTH_RATIO: f32 = 0.5;

struct BodySprite {
    node: PlanarSceneNode,
    textured: bool,
    kind: BodyKind,
}

fn sprite_scale(textured: bool, kind: BodyKind, visual_scale: f64) -> f32 {
    match (textured, kind) {
        (false, BodyKind::Star) => SUN_CIRCLE_SCALE,
        _ => visual_scale as f32,
    }
}

pub struct View {
    camera: FixedView,
    // Where canvas (0, 0) is, in window coordinates
    canvas_origin: Vector2<f32>,
    body_sprites: HashMap<BodyID, BodySprite>,
    star_dots: Vec<PlanarSceneNode>,
    font: Rc<Font>,
}

impl View {
    pub fn new(
        window: &mut Window,
        planetarium: &Planetarium,
        assets: &AssetReport,
        config: &Config,
    ) -> Self {
        let canvas_origin: Vector2<f32> = nalgebra::convert(config.canvas_origin_in_window());

        // Order matters: things added first are drawn underneath.
        Self::create_background(window, assets, config, canvas_origin);

        let star_dots = planetarium
            .starfield()
            .stars()
            .iter()
            .map(|_| {
                let mut dot = window.add_circle(STAR_DOT_RADIUS);
                dot.set_color(1.0, 1.0, 1.0);
                dot
            })
            .collect();

        let mut body_sprites = HashMap::new();
        for body in planetarium.orrery().bodies() {
            let sprite = Self::create_body_sprite(window, body, assets);
            body_sprites.insert(body.id, sprite);
        }

        // The panel goes over any sprite hanging off the edge of the canvas.
        Self::create_panel_objects(window, planetarium, canvas_origin);

        let mut view = View {
            camera: FixedView::new(),
            canvas_origin,
            body_sprites,
            star_dots,
            font: Font::default(),
        };
        view.update_scene_objects(planetarium);
        view
    }

    fn create_background(
        window: &mut Window,
        assets: &AssetReport,
        config: &Config,
        canvas_origin: Vector2<f32>,
    ) {
        match assets.sprite_for(BACKGROUND_KEY) {
            Sprite::Image(path) => {
                let mut background = window.add_rectangle(
                    config.canvas_width as f32,
                    config.canvas_height as f32,
                );
                background.set_texture_from_file(&path, BACKGROUND_KEY);
                background.set_local_translation(Translation2::from(canvas_origin));
                info!("Background loaded successfully!");
            }
            Sprite::Fallback => info!("Using black background"),
        }
    }

    fn create_panel_objects(
        window: &mut Window,
        planetarium: &Planetarium,
        canvas_origin: Vector2<f32>,
    ) {
        let panel = planetarium.panel();
        let add_rect = |window: &mut Window, center: Point2<f64>, w: f64, h: f64| {
            let center: Point2<f32> = nalgebra::convert(center);
            let mut node = window.add_rectangle(w as f32, h as f32);
            node.set_local_translation(Translation2::from(center.coords + canvas_origin));
            node
        };

        let area = panel.area();
        let mut background = add_rect(window, area.center, area.width(), area.height());
        background.set_color(colors::PANEL.x, colors::PANEL.y, colors::PANEL.z);

        for button in panel.buttons() {
            let rect = &button.rect;
            let mut node = add_rect(window, rect.center, rect.width(), rect.height());
            node.set_color(button.color.x, button.color.y, button.color.z);
        }
    }

    fn create_body_sprite(window: &mut Window, body: &Body, assets: &AssetReport) -> BodySprite {
        let key = &body.info.info_key;
        let (node, textured) = match assets.sprite_for(key) {
            Sprite::Image(path) => (Self::create_image_node(window, &path, key), true),
            Sprite::Fallback => {
                let mut circle = window.add_circle(CIRCLE_RADIUS);
                let color = &body.info.color;
                circle.set_color(color.x, color.y, color.z);
                (circle, false)
            }
        };
        info!(
            "{}: using {} (size: {})",
            body.info.name,
            if textured { "image" } else { "colored circle" },
            body.visual_scale
        );

        BodySprite {
            node,
            textured,
            kind: body.info.kind,
        }
    }

    fn create_image_node(window: &mut Window, path: &Path, name: &str) -> PlanarSceneNode {
        let mut node = window.add_rectangle(SPRITE_SIZE, SPRITE_SIZE);
        node.set_texture_from_file(path, name);
        node
    }

    /// Moves sprites and star dots to match the model.
    pub fn update_scene_objects(&mut self, planetarium: &Planetarium) {
        for (id, sprite) in self.body_sprites.iter_mut() {
            let body = planetarium.orrery().get_body(*id);
            let position = to_window(self.canvas_origin, body.position);
            sprite
                .node
                .set_local_translation(Translation2::from(position.coords));
            let scale = sprite_scale(sprite.textured, sprite.kind, body.visual_scale);
            sprite.node.set_local_scale(scale, scale);
            sprite.node.set_visible(planetarium.is_visible(body));
        }

        let stars = planetarium.starfield().stars();
        for (dot, star) in self.star_dots.iter_mut().zip(stars) {
            let position = to_window(self.canvas_origin, star.position);
            dot.set_local_translation(Translation2::from(position.coords));
            let size = star.size as f32;
            dot.set_local_scale(size, size);
        }
    }

    pub fn prerender_scene(&mut self, window: &mut Window, planetarium: &Planetarium) {
        self.draw_trails(window, planetarium);

        let text = planetarium
            .labels()
            .into_iter()
            .chain(planetarium.info_lines())
            .chain(planetarium.panel_lines());
        for line in text {
            self.draw_text_line(window, &line);
        }
    }

    fn draw_trails(&self, window: &mut Window, planetarium: &Planetarium) {
        for (id, a, b) in planetarium.trail_segments() {
            let color = planetarium.orrery().get_body(id).info.color;
            let a = to_window(self.canvas_origin, a);
            let b = to_window(self.canvas_origin, b);
            window.draw_planar_line(&a, &b, &color);
        }
    }

    fn draw_text_line(&self, window: &mut Window, line: &TextLine) {
        let (size, color) = text_appearance(line.style);

        // Text is placed in physical pixels from the top-left corner, unlike
        // everything else.
        let hidpi = window.scale_factor() as f32;
        let size = size * hidpi;
        let center = to_window(self.canvas_origin, line.position);
        let width = GLYPH_WIDTH_RATIO * size * line.text.chars().count() as f32;
        let corner = Point2::new(
            window.width() as f32 / 2.0 + center.x * hidpi - width / 2.0,
            window.height() as f32 / 2.0 - center.y * hidpi - size / 2.0,
        );

        window.draw_text(&line.text, &corner, size, &self.font, &color);
    }

    /// Converts a point in window pixels (as reported by the cursor) into
    /// canvas coordinates.
    pub fn window_to_canvas(&self, point: Point2<f32>, window_size: Vector2<f32>) -> Point2<f64> {
        let planar = self.camera.unproject(&point, &window_size);
        nalgebra::convert(planar - self.canvas_origin)
    }

    pub fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (None, Some(&mut self.camera), None, None)
    }
}

fn to_window(canvas_origin: Vector2<f32>, point: Point2<f64>) -> Point2<f32> {
    let point: Point2<f32> = nalgebra::convert(point);
    point + canvas_origin
}

// Font size in logical pixels, and color
fn text_appearance(style: TextStyle) -> (f32, Point3<f32>) {
    match style {
        TextStyle::InfoTitle => (30.0, colors::CYAN),
        TextStyle::InfoFact => (22.0, colors::WHITE),
        TextStyle::InfoDescription => (20.0, colors::LIGHT_BLUE),
        TextStyle::InfoFunFact => (18.0, colors::YELLOW),
        TextStyle::BodyName => (16.0, colors::WHITE),
        TextStyle::BodyCaption => (12.0, colors::YELLOW),
        TextStyle::PanelTitle => (22.0, colors::WHITE),
        TextStyle::PanelButton => (18.0, colors::WHITE),
        TextStyle::PanelSpeed => (18.0, colors::YELLOW),
        TextStyle::PanelHeading => (18.0, colors::WHITE),
        TextStyle::PanelStatus => (16.0, colors::LIME),
        TextStyle::PanelWarning => (16.0, colors::RED),
        TextStyle::PanelHint => (14.0, colors::YELLOW),
    }
}
