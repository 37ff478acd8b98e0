use kiss3d::event::{Action, Key, MouseButton, WindowEvent};
use nalgebra::Point2;

use crate::model::Control;

// Key config, all in one place
const KEY_TOGGLE_PAUSE: Key = Key::Space;
const KEY_SPEED_UP: Key = Key::Period;
const KEY_SLOW_DOWN: Key = Key::Comma;
const KEY_ZOOM_IN: Key = Key::Equals;
const KEY_ZOOM_OUT: Key = Key::Minus;
const KEY_SMALLER: Key = Key::LBracket;
const KEY_BIGGER: Key = Key::RBracket;
const KEY_TOGGLE_LABELS: Key = Key::L;
const KEY_TOGGLE_TRAILS: Key = Key::T;
const KEY_CLEAR_INFO: Key = Key::C;
const KEY_RESET: Key = Key::R;

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Control(Control),
    // In window pixels, as reported by the cursor
    Click(Point2<f32>),
}

pub struct Controller {
    cursor: Point2<f32>,
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            cursor: Point2::origin(),
        }
    }

    pub fn process_event(&mut self, event: &WindowEvent) -> Option<Input> {
        match *event {
            WindowEvent::CursorPos(x, y, _) => {
                self.cursor = Point2::new(x as f32, y as f32);
                None
            }
            WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) => {
                Some(Input::Click(self.cursor))
            }
            WindowEvent::Key(key, Action::Press, _) => key_control(key).map(Input::Control),
            _ => None,
        }
    }
}

fn key_control(key: Key) -> Option<Control> {
    let control = match key {
        KEY_TOGGLE_PAUSE => Control::TogglePause,
        KEY_SPEED_UP => Control::SpeedUp,
        KEY_SLOW_DOWN => Control::SlowDown,
        KEY_ZOOM_IN => Control::ZoomIn,
        KEY_ZOOM_OUT => Control::ZoomOut,
        KEY_SMALLER => Control::Smaller,
        KEY_BIGGER => Control::Bigger,
        KEY_TOGGLE_LABELS => Control::ToggleLabels,
        KEY_TOGGLE_TRAILS => Control::ToggleTrails,
        KEY_CLEAR_INFO => Control::ClearInfo,
        KEY_RESET => Control::Reset,
        _ => return None,
    };
    Some(control)
}

#[cfg(test)]
mod tests {
    use kiss3d::event::Modifiers;

    use super::*;

    #[test]
    fn test_click_uses_last_cursor_position() {
        let mut controller = Controller::new();
        let moved = WindowEvent::CursorPos(120.0, 45.0, Modifiers::empty());
        assert_eq!(controller.process_event(&moved), None);

        let press = WindowEvent::MouseButton(MouseButton::Button1, Action::Press, Modifiers::empty());
        assert_eq!(
            controller.process_event(&press),
            Some(Input::Click(Point2::new(120.0, 45.0)))
        );

        let release =
            WindowEvent::MouseButton(MouseButton::Button1, Action::Release, Modifiers::empty());
        assert_eq!(controller.process_event(&release), None);
    }

    #[test]
    fn test_keys() {
        let mut controller = Controller::new();
        let mut press = |key| controller.process_event(&WindowEvent::Key(key, Action::Press, Modifiers::empty()));

        assert_eq!(press(Key::Space), Some(Input::Control(Control::TogglePause)));
        assert_eq!(press(Key::Equals), Some(Input::Control(Control::ZoomIn)));
        assert_eq!(press(Key::RBracket), Some(Input::Control(Control::Bigger)));
        assert_eq!(press(Key::R), Some(Input::Control(Control::Reset)));
        assert_eq!(press(Key::Q), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut controller = Controller::new();
        let release = WindowEvent::Key(Key::Space, Action::Release, Modifiers::empty());
        assert_eq!(controller.process_event(&release), None);
    }
}
