use nalgebra::{Point2, Vector2};

mod body;

pub use body::{Body, BodyID, BodyInfo, BodyKind};

// Orbits are drawn as ellipses squashed vertically, which reads as a ring
// seen at an angle.
pub const VERTICAL_SQUASH: f64 = 0.6;

pub const BODY_HIT_RADIUS: f64 = 30.0;
pub const STAR_HIT_RADIUS: f64 = 60.0;

pub const MIN_VISUAL_SCALE: f64 = 0.05;
pub const MAX_VISUAL_SCALE: f64 = 1.0;

// Invariant: a body's parent always has a smaller ID than the body itself, so
// walking `bodies` in order positions every parent before its children.
#[derive(Debug, Clone, Default)]
pub struct Orrery {
    bodies: Vec<Body>,
}

impl Orrery {
    pub fn new() -> Self {
        Orrery { bodies: vec![] }
    }

    pub fn add_fixed_body(
        &mut self,
        info: BodyInfo,
        position: Point2<f64>,
        visual_scale: f64,
    ) -> BodyID {
        let id = BodyID(self.bodies.len());
        self.bodies.push(Body {
            id,
            info,
            parent: None,
            orbit_radius: 0.0,
            angle: 0.0,
            visual_scale,
            position,
        });
        id
    }

    pub fn add_body(
        &mut self,
        info: BodyInfo,
        parent_id: BodyID,
        orbit_radius: f64,
        visual_scale: f64,
    ) -> BodyID {
        let id = BodyID(self.bodies.len());
        let parent_position = self.get_body(parent_id).position;
        let mut body = Body {
            id,
            info,
            parent: Some(parent_id),
            orbit_radius,
            angle: 0.0,
            visual_scale,
            position: parent_position,
        };
        body.position = parent_position + orbit_displacement(&body);
        self.bodies.push(body);
        id
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter()
    }

    /// Everything except the fixed bodies, in creation order.
    pub fn orbiting_bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter().filter(|b| !b.is_fixed())
    }

    pub fn fixed_bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter().filter(|b| b.is_fixed())
    }

    pub fn get_body(&self, id: BodyID) -> &Body {
        &self.bodies[id.0]
    }

    pub fn find_body(&self, info_key: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.info.info_key == info_key)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Moves every orbiting body to the point given by its current angle.
    pub fn update_positions(&mut self) {
        for idx in 0..self.bodies.len() {
            let parent_id = match self.bodies[idx].parent {
                Some(id) => id,
                None => continue,
            };
            let parent_position = self.bodies[parent_id.0].position;
            let body = &mut self.bodies[idx];
            body.position = parent_position + orbit_displacement(body);
        }
    }

    pub fn advance_angles(&mut self, speed_multiplier: f64) {
        for body in self.bodies.iter_mut().filter(|b| !b.is_fixed()) {
            body.angle += body.info.angular_speed * speed_multiplier;
        }
    }

    pub fn reset_angles(&mut self) {
        for body in self.bodies.iter_mut() {
            body.angle = 0.0;
        }
        self.update_positions();
    }

    /// Scales the orbit of every planet, leaving moons where they are
    /// relative to their planet.
    pub fn scale_orbits(&mut self, factor: f64) {
        for body in self.bodies.iter_mut() {
            if body.is_fixed() || body.is_moon() {
                continue;
            }
            body.orbit_radius *= factor;
        }
    }

    pub fn scale_bodies(&mut self, factor: f64) {
        for body in self.bodies.iter_mut().filter(|b| !b.is_fixed()) {
            body.visual_scale = nalgebra::clamp(
                body.visual_scale * factor,
                MIN_VISUAL_SCALE,
                MAX_VISUAL_SCALE,
            );
        }
    }

    /// Finds the body under `point`, among the bodies `visible` accepts.
    /// Orbiting bodies are checked first, in creation order, and the first one
    /// close enough wins; only then are the fixed bodies checked, with a larger
    /// radius.
    pub fn hit_test(
        &self,
        point: Point2<f64>,
        visible: impl Fn(&Body) -> bool,
    ) -> Option<BodyID> {
        let within =
            |body: &&Body, radius: f64| visible(*body) && (point - body.position).norm() < radius;

        self.orbiting_bodies()
            .find(|b| within(b, BODY_HIT_RADIUS))
            .or_else(|| self.fixed_bodies().find(|b| within(b, STAR_HIT_RADIUS)))
            .map(|b| b.id)
    }
}

fn orbit_displacement(body: &Body) -> Vector2<f64> {
    let (sin, cos) = body.angle.sin_cos();
    Vector2::new(
        body.info.offset + body.orbit_radius * cos,
        body.orbit_radius * sin * VERTICAL_SQUASH,
    )
}
