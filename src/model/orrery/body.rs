use nalgebra::{Point2, Point3};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
}

// All the immutable info about a body
#[derive(Debug, Clone)]
pub struct BodyInfo {
    pub name: String,
    pub kind: BodyKind,
    // Key into the fact sheets, and into the asset table
    pub info_key: String,
    pub size_label: Option<String>,
    pub color: Point3<f32>,
    pub angular_speed: f64,
    pub offset: f64,
    pub leaves_trail: bool,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyID,
    pub info: BodyInfo,
    pub parent: Option<BodyID>,
    pub orbit_radius: f64,
    pub angle: f64,
    pub visual_scale: f64,
    pub position: Point2<f64>,
}

impl Body {
    pub fn is_fixed(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_moon(&self) -> bool {
        self.info.kind == BodyKind::Moon
    }
}
