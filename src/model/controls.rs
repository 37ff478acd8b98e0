use nalgebra::{Point2, Point3, Vector2};

use super::catalog::SUN_SCALE;
use super::colors;
use super::state::SimulationState;
use super::text::{TextLine, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    TogglePause,
    SpeedUp,
    SlowDown,
    ZoomIn,
    ZoomOut,
    Smaller,
    Bigger,
    ToggleLabels,
    ToggleTrails,
    ClearInfo,
    Reset,
}

impl Control {
    pub fn caption(&self, state: &SimulationState) -> &'static str {
        match self {
            Control::TogglePause if state.running => "Pause",
            Control::TogglePause => "Resume",
            Control::SpeedUp => "Speed Up",
            Control::SlowDown => "Slow Down",
            Control::ZoomIn => "Zoom In",
            Control::ZoomOut => "Zoom Out",
            Control::Smaller => "Smaller",
            Control::Bigger => "Bigger",
            Control::ToggleLabels if state.labels_visible => "Hide Labels",
            Control::ToggleLabels => "Show Labels",
            Control::ToggleTrails if state.trails_visible => "Hide Trails",
            Control::ToggleTrails => "Show Trails",
            Control::ClearInfo => "Clear Info",
            Control::Reset => "Reset Everything",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Point2<f64>,
    pub half_extents: Vector2<f64>,
}

impl Rect {
    pub fn new(center: Point2<f64>, width: f64, height: f64) -> Self {
        Rect {
            center,
            half_extents: Vector2::new(width / 2.0, height / 2.0),
        }
    }

    pub fn width(&self) -> f64 {
        2.0 * self.half_extents.x
    }

    pub fn height(&self) -> f64 {
        2.0 * self.half_extents.y
    }

    pub fn contains(&self, point: Point2<f64>) -> bool {
        let d = point - self.center;
        d.x.abs() <= self.half_extents.x && d.y.abs() <= self.half_extents.y
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    pub control: Control,
    pub rect: Rect,
    pub color: Point3<f32>,
}

/// Numbers for the status block at the bottom of the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelStatus {
    pub images_found: usize,
    pub images_expected: usize,
    pub planets: usize,
}

impl PanelStatus {
    pub fn images_missing(&self) -> usize {
        self.images_expected.saturating_sub(self.images_found)
    }
}

// Sizes are in canvas units
const FULL_WIDTH: f64 = 200.0;
const HALF_WIDTH: f64 = 95.0;
const PAIR_SPACING: f64 = 50.0;
const BUTTON_HEIGHT: f64 = 30.0;
const LINE_HEIGHT: f64 = 20.0;
const HINT_HEIGHT: f64 = 18.0;

const INSTRUCTIONS: [&str; 8] = [
    "- CLICK any planet for info!",
    "- Info appears at TOP",
    "- Pause/Resume animation",
    "- Zoom in/out for better view",
    "- Adjust planet sizes",
    "- Toggle labels and trails",
    "- Clear info with button",
    "- Reset to start over",
];

/// The column of buttons and readouts beside the canvas.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    area: Rect,
    buttons: Vec<Button>,
}

impl ControlPanel {
    /// `area` is the panel's own rectangle, in canvas coordinates.
    pub fn new(area: Rect) -> Self {
        let cx = area.center.x;
        let top = area.center.y + area.half_extents.y;

        let full = |control, y, color| Button {
            control,
            rect: Rect::new(Point2::new(cx, top - y), FULL_WIDTH, BUTTON_HEIGHT),
            color,
        };
        let left = |control, y, color| Button {
            control,
            rect: Rect::new(
                Point2::new(cx - PAIR_SPACING, top - y),
                HALF_WIDTH,
                BUTTON_HEIGHT,
            ),
            color,
        };
        let right = |control, y, color| Button {
            control,
            rect: Rect::new(
                Point2::new(cx + PAIR_SPACING, top - y),
                HALF_WIDTH,
                BUTTON_HEIGHT,
            ),
            color,
        };

        let buttons = vec![
            full(Control::TogglePause, 70.0, colors::DARK_GREEN),
            left(Control::SpeedUp, 115.0, colors::BLUE),
            right(Control::SlowDown, 115.0, colors::PURPLE),
            left(Control::ZoomIn, 190.0, colors::DARK_BLUE),
            right(Control::ZoomOut, 190.0, colors::DARK_RED),
            left(Control::Smaller, 235.0, colors::BROWN),
            right(Control::Bigger, 235.0, colors::DARK_ORANGE),
            full(Control::ToggleLabels, 280.0, colors::DARK_GRAY),
            full(Control::ToggleTrails, 320.0, colors::DARK_GRAY),
            full(Control::ClearInfo, 360.0, colors::DARK_BLUE),
            full(Control::Reset, 410.0, colors::DARK_RED),
        ];

        ControlPanel { area, buttons }
    }

    pub fn area(&self) -> &Rect {
        &self.area
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn contains(&self, point: Point2<f64>) -> bool {
        self.area.contains(point)
    }

    pub fn control_at(&self, point: Point2<f64>) -> Option<Control> {
        self.buttons
            .iter()
            .find(|b| b.rect.contains(point))
            .map(|b| b.control)
    }

    pub fn text_lines(&self, state: &SimulationState, status: &PanelStatus) -> Vec<TextLine> {
        let cx = self.area.center.x;
        let top = self.area.center.y + self.area.half_extents.y;

        let mut lines = vec![TextLine::new(
            "Solar System Controls",
            cx,
            top - 30.0,
            TextStyle::PanelTitle,
        )];

        for button in self.buttons.iter() {
            lines.push(TextLine::new(
                button.control.caption(state),
                button.rect.center.x,
                button.rect.center.y,
                TextStyle::PanelButton,
            ));
        }

        lines.push(TextLine::new(
            format!("Speed: {:.1}x", state.speed_multiplier()),
            cx,
            top - 150.0,
            TextStyle::PanelSpeed,
        ));

        let mut y = top - 460.0;
        let mut push = |lines: &mut Vec<TextLine>, text: String, style| {
            lines.push(TextLine::new(text, cx, y, style));
            y -= LINE_HEIGHT;
        };
        push(&mut lines, String::from("Status:"), TextStyle::PanelHeading);
        push(
            &mut lines,
            format!(
                "Images Found: {}/{}",
                status.images_found, status.images_expected
            ),
            TextStyle::PanelStatus,
        );
        push(
            &mut lines,
            format!("Planets: {}", status.planets),
            TextStyle::PanelStatus,
        );
        push(
            &mut lines,
            format!("Sun size: {:.1}", SUN_SCALE),
            TextStyle::PanelStatus,
        );
        push(
            &mut lines,
            String::from("Click planets for info!"),
            TextStyle::PanelHint,
        );
        if status.images_missing() > 0 {
            push(
                &mut lines,
                format!("Missing: {} files", status.images_missing()),
                TextStyle::PanelWarning,
            );
        }

        let mut y = top - 600.0;
        lines.push(TextLine::new("INSTRUCTIONS:", cx, y, TextStyle::PanelHeading));
        y -= HINT_HEIGHT;
        for instruction in INSTRUCTIONS.iter() {
            y -= HINT_HEIGHT;
            lines.push(TextLine::new(*instruction, cx, y, TextStyle::PanelHint));
        }
        y -= 2.0 * HINT_HEIGHT;
        lines.push(TextLine::new(
            "Click the Sun or planets to learn!",
            cx,
            y,
            TextStyle::PanelHint,
        ));

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> ControlPanel {
        // Same placement as the default window: right of a 1400x900 canvas
        ControlPanel::new(Rect::new(Point2::new(850.0, 0.0), 300.0, 900.0))
    }

    #[test]
    fn test_every_control_has_a_button() {
        let panel = panel();
        let controls = [
            Control::TogglePause,
            Control::SpeedUp,
            Control::SlowDown,
            Control::ZoomIn,
            Control::ZoomOut,
            Control::Smaller,
            Control::Bigger,
            Control::ToggleLabels,
            Control::ToggleTrails,
            Control::ClearInfo,
            Control::Reset,
        ];
        for control in controls.iter() {
            let button = panel
                .buttons()
                .iter()
                .find(|b| b.control == *control)
                .unwrap();
            assert!(panel.contains(button.rect.center));
            assert_eq!(panel.control_at(button.rect.center), Some(*control));
        }
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let panel = panel();
        let buttons = panel.buttons();
        for (i, a) in buttons.iter().enumerate() {
            for b in buttons[i + 1..].iter() {
                let d = b.rect.center - a.rect.center;
                let apart_x = d.x.abs() > a.rect.half_extents.x + b.rect.half_extents.x;
                let apart_y = d.y.abs() > a.rect.half_extents.y + b.rect.half_extents.y;
                assert!(apart_x || apart_y, "{:?} overlaps {:?}", a.control, b.control);
            }
        }
    }

    #[test]
    fn test_gap_between_buttons() {
        let panel = panel();
        // Between the pause button and the speed row
        assert_eq!(panel.control_at(Point2::new(850.0, 450.0 - 92.0)), None);
        assert_eq!(panel.control_at(Point2::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_captions_follow_state() {
        let mut state = SimulationState::new();
        assert_eq!(Control::TogglePause.caption(&state), "Pause");
        assert_eq!(Control::ToggleLabels.caption(&state), "Hide Labels");
        state.running = false;
        state.labels_visible = false;
        state.trails_visible = false;
        assert_eq!(Control::TogglePause.caption(&state), "Resume");
        assert_eq!(Control::ToggleLabels.caption(&state), "Show Labels");
        assert_eq!(Control::ToggleTrails.caption(&state), "Show Trails");
    }

    #[test]
    fn test_status_text() {
        let panel = panel();
        let state = SimulationState::new();
        let status = PanelStatus {
            images_found: 0,
            images_expected: 11,
            planets: 9,
        };
        let lines = panel.text_lines(&state, &status);
        let has = |text: &str| lines.iter().any(|l| l.text == text);
        assert!(has("Speed: 1.0x"));
        assert!(has("Images Found: 0/11"));
        assert!(has("Planets: 9"));
        assert!(has("Sun size: 1.2"));
        assert!(has("Missing: 11 files"));

        let complete = PanelStatus {
            images_found: 11,
            ..status
        };
        let lines = panel.text_lines(&state, &complete);
        assert!(!lines.iter().any(|l| l.text.starts_with("Missing")));
    }

    #[test]
    fn test_everything_fits_at_minimum_height() {
        let height = crate::config::MIN_CANVAS_HEIGHT as f64;
        let panel = ControlPanel::new(Rect::new(Point2::new(850.0, 0.0), 300.0, height));
        let status = PanelStatus {
            images_found: 3,
            images_expected: 11,
            planets: 9,
        };
        let lines = panel.text_lines(&SimulationState::new(), &status);
        assert!(lines.iter().all(|l| panel.contains(l.position)));
        assert!(panel.buttons().iter().all(|b| panel.contains(b.rect.center)));
    }
}
