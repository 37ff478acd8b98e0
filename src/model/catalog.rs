use nalgebra::{Point2, Point3};

use super::colors;
use super::orrery::{BodyInfo, BodyKind, Orrery};

pub const SUN_KEY: &str = "sun";
pub const SUN_SCALE: f64 = 1.2;

struct PlanetEntry {
    name: &'static str,
    orbit_radius: f64,
    visual_scale: f64,
    color: Point3<f32>,
    size_label: &'static str,
    angular_speed: f64,
}

const PLANETS: [PlanetEntry; 8] = [
    PlanetEntry {
        name: "Mercury",
        orbit_radius: 180.0,
        visual_scale: 0.15,
        color: colors::GRAY,
        size_label: "4,879 km",
        angular_speed: 0.06,
    },
    PlanetEntry {
        name: "Venus",
        orbit_radius: 220.0,
        visual_scale: 0.18,
        color: colors::ORANGE,
        size_label: "12,104 km",
        angular_speed: 0.045,
    },
    PlanetEntry {
        name: "Earth",
        orbit_radius: 280.0,
        visual_scale: 0.2,
        color: colors::BLUE,
        size_label: "12,756 km",
        angular_speed: 0.035,
    },
    PlanetEntry {
        name: "Mars",
        orbit_radius: 340.0,
        visual_scale: 0.16,
        color: colors::RED,
        size_label: "6,792 km",
        angular_speed: 0.025,
    },
    PlanetEntry {
        name: "Jupiter",
        orbit_radius: 460.0,
        visual_scale: 0.35,
        color: colors::ORANGE,
        size_label: "142,984 km",
        angular_speed: 0.015,
    },
    PlanetEntry {
        name: "Saturn",
        orbit_radius: 560.0,
        visual_scale: 0.3,
        color: colors::KHAKI,
        size_label: "120,536 km",
        angular_speed: 0.012,
    },
    PlanetEntry {
        name: "Uranus",
        orbit_radius: 660.0,
        visual_scale: 0.22,
        color: colors::CYAN,
        size_label: "51,118 km",
        angular_speed: 0.008,
    },
    PlanetEntry {
        name: "Neptune",
        orbit_radius: 760.0,
        visual_scale: 0.21,
        color: colors::BLUE,
        size_label: "49,528 km",
        angular_speed: 0.006,
    },
];

const MOON: PlanetEntry = PlanetEntry {
    name: "Moon",
    orbit_radius: 45.0,
    visual_scale: 0.08,
    color: colors::LIGHT_GRAY,
    size_label: "3,476 km",
    angular_speed: 0.15,
};

const MOON_PARENT: &str = "earth";

/// Builds the Sun, the eight planets and Earth's moon, with the Sun at the
/// origin.
pub fn solar_system() -> Orrery {
    let mut orrery = Orrery::new();

    let sun_info = BodyInfo {
        name: String::from("Sun"),
        kind: BodyKind::Star,
        info_key: String::from(SUN_KEY),
        size_label: None,
        color: colors::YELLOW,
        angular_speed: 0.0,
        offset: 0.0,
        leaves_trail: false,
    };
    let sun = orrery.add_fixed_body(sun_info, Point2::origin(), SUN_SCALE);

    for entry in PLANETS.iter() {
        let info = body_info(entry, BodyKind::Planet);
        orrery.add_body(info, sun, entry.orbit_radius, entry.visual_scale);
    }

    if let Some(parent) = orrery.find_body(MOON_PARENT).map(|b| b.id) {
        let info = body_info(&MOON, BodyKind::Moon);
        orrery.add_body(info, parent, MOON.orbit_radius, MOON.visual_scale);
    }

    orrery
}

fn body_info(entry: &PlanetEntry, kind: BodyKind) -> BodyInfo {
    BodyInfo {
        name: entry.name.to_owned(),
        kind,
        info_key: entry.name.to_lowercase(),
        size_label: Some(entry.size_label.to_owned()),
        color: entry.color,
        angular_speed: entry.angular_speed,
        offset: 0.0,
        leaves_trail: kind != BodyKind::Moon,
    }
}
