//! Keyboard and mouse input handling

use goal_core::{Command, Keymap};
use web_sys::{KeyboardEvent, MouseEvent, WheelEvent};

/// Translate a key press with the demo's bindings
pub fn key_command(keymap: Keymap, event: &KeyboardEvent) -> Option<Command> {
    keymap.command(&event.key(), &event.code())
}

/// Commands bound to keys the browser would otherwise use to scroll
pub fn suppresses_default(command: Command) -> bool {
    matches!(
        command,
        Command::Launch
            | Command::PreviousCurve
            | Command::NextCurve
            | Command::SpeedUp
            | Command::SlowDown
    )
}

/// Mouse drag tracking for the orbit camera
#[derive(Debug, Default)]
pub struct Drag {
    last: Option<(f32, f32)>,
}

fn pointer(event: &MouseEvent) -> (f32, f32) {
    (event.client_x() as f32, event.client_y() as f32)
}

impl Drag {
    pub fn press(&mut self, event: &MouseEvent) {
        self.press_at(pointer(event));
    }

    /// Pixels moved since the previous event, while a button is held
    pub fn moved(&mut self, event: &MouseEvent) -> Option<(f32, f32)> {
        self.move_to(pointer(event))
    }

    pub fn release(&mut self) {
        self.last = None;
    }

    fn press_at(&mut self, at: (f32, f32)) {
        self.last = Some(at);
    }

    fn move_to(&mut self, (x, y): (f32, f32)) -> Option<(f32, f32)> {
        let (last_x, last_y) = self.last?;
        self.last = Some((x, y));
        Some((x - last_x, y - last_y))
    }
}

/// +1 for scrolling down (zoom out), -1 for up
pub fn wheel_direction(event: &WheelEvent) -> f32 {
    zoom_step(event.delta_y())
}

fn zoom_step(delta_y: f64) -> f32 {
    if delta_y > 0.0 {
        1.0
    } else if delta_y < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_scroll_keys_suppress_default() {
        for command in [
            Command::Launch,
            Command::PreviousCurve,
            Command::NextCurve,
            Command::SpeedUp,
            Command::SlowDown,
        ] {
            assert!(suppresses_default(command), "{:?} should not scroll the page", command);
        }
        assert!(!suppresses_default(Command::ToggleWireframe));
        assert!(!suppresses_default(Command::ToggleCurvePath));
    }

    #[wasm_bindgen_test]
    fn test_drag_reports_deltas_while_held() {
        let mut drag = Drag::default();
        assert_eq!(drag.move_to((10.0, 10.0)), None, "No delta before a press");

        drag.press_at((100.0, 50.0));
        assert_eq!(drag.move_to((110.0, 45.0)), Some((10.0, -5.0)));
        assert_eq!(drag.move_to((110.0, 60.0)), Some((0.0, 15.0)));

        drag.release();
        assert_eq!(drag.move_to((0.0, 0.0)), None, "No delta after release");
    }

    #[wasm_bindgen_test]
    fn test_zoom_step_follows_wheel_sign() {
        assert_eq!(zoom_step(120.0), 1.0);
        assert_eq!(zoom_step(-3.5), -1.0);
        assert_eq!(zoom_step(0.0), 0.0);
    }

    #[wasm_bindgen_test]
    fn test_keymaps_reach_their_demo() {
        assert_eq!(Keymap::Viewer.command("w", "KeyW"), Some(Command::ToggleWireframe));
        assert_eq!(Keymap::Game.command(" ", "Space"), Some(Command::Launch));
        assert_eq!(Keymap::Game.command("w", "KeyW"), None);
    }
}
