use nalgebra::{Point3, Vector3};

// `Point3::new` isn't usable in constants, so build the point from its coords.
const fn rgb(r: f32, g: f32, b: f32) -> Point3<f32> {
    Point3 {
        coords: Vector3::new(r, g, b),
    }
}

// Named colors, the same shades a web browser would give them.
pub const YELLOW: Point3<f32> = rgb(1.0, 1.0, 0.0);
pub const GRAY: Point3<f32> = rgb(0.745, 0.745, 0.745);
pub const LIGHT_GRAY: Point3<f32> = rgb(0.827, 0.827, 0.827);
pub const ORANGE: Point3<f32> = rgb(1.0, 0.647, 0.0);
pub const BLUE: Point3<f32> = rgb(0.0, 0.0, 1.0);
pub const RED: Point3<f32> = rgb(1.0, 0.0, 0.0);
pub const KHAKI: Point3<f32> = rgb(0.941, 0.902, 0.549);
pub const CYAN: Point3<f32> = rgb(0.0, 1.0, 1.0);
pub const WHITE: Point3<f32> = rgb(1.0, 1.0, 1.0);
pub const LIGHT_BLUE: Point3<f32> = rgb(0.678, 0.847, 0.902);
pub const LIME: Point3<f32> = rgb(0.0, 1.0, 0.0);
pub const DARK_GREEN: Point3<f32> = rgb(0.0, 0.392, 0.0);
pub const PURPLE: Point3<f32> = rgb(0.502, 0.0, 0.502);
pub const DARK_BLUE: Point3<f32> = rgb(0.0, 0.0, 0.545);
pub const DARK_RED: Point3<f32> = rgb(0.545, 0.0, 0.0);
pub const BROWN: Point3<f32> = rgb(0.647, 0.165, 0.165);
pub const DARK_ORANGE: Point3<f32> = rgb(1.0, 0.549, 0.0);
pub const DARK_GRAY: Point3<f32> = rgb(0.663, 0.663, 0.663);
pub const PANEL: Point3<f32> = rgb(0.06, 0.06, 0.08);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_colors_match_runtime_points() {
        assert_eq!(ORANGE, Point3::new(1.0, 0.647, 0.0));
        assert_eq!(PANEL, Point3::new(0.06, 0.06, 0.08));
    }
}
