//! Keyboard bindings

/// State change requested by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    ToggleOrbit,
    ToggleWireframe,
    ToggleRotateX,
    ToggleRotateY,
    ShrinkGoal,
    ExpandGoal,
    SpeedUp,
    SlowDown,
    PreviousCurve,
    NextCurve,
    Launch,
    ToggleCurvePath,
}

/// Which binding table a demo uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keymap {
    /// Matches `KeyboardEvent.key`
    Viewer,
    /// Matches `KeyboardEvent.code`
    Game,
}

impl Keymap {
    /// Look up a key event given its `key` and `code` strings
    pub fn command(self, key: &str, code: &str) -> Option<Command> {
        match self {
            Keymap::Viewer => viewer_command(key),
            Keymap::Game => game_command(code),
        }
    }
}

pub fn viewer_command(key: &str) -> Option<Command> {
    match key {
        "o" => Some(Command::ToggleOrbit),
        "w" => Some(Command::ToggleWireframe),
        "1" => Some(Command::ToggleRotateX),
        "2" => Some(Command::ToggleRotateY),
        "3" => Some(Command::ShrinkGoal),
        "4" => Some(Command::ExpandGoal),
        "+" | "ArrowUp" => Some(Command::SpeedUp),
        "-" | "ArrowDown" => Some(Command::SlowDown),
        _ => None,
    }
}

pub fn game_command(code: &str) -> Option<Command> {
    match code {
        "ArrowLeft" => Some(Command::PreviousCurve),
        "ArrowRight" => Some(Command::NextCurve),
        "Space" => Some(Command::Launch),
        "KeyT" => Some(Command::ToggleCurvePath),
        _ => None,
    }
}
