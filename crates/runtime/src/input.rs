//! Player input for one frame.
//!
//! Raw key and gamepad names are mapped to [`InputAction`]s by the frontend;
//! the session only ever sees actions and a movement vector.

use school_core::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputAction {
    /// Interact, advance a line, or pick the highlighted choice.
    Confirm,
    /// Skip the line being typed, or dismiss a choice.
    Cancel,
    Up,
    Down,
    ToggleLocale,
    ToggleMute,
}

impl InputAction {
    /// Maps a keyboard key name (case-insensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        let action = match key.to_ascii_lowercase().as_str() {
            "space" | " " | "enter" => Self::Confirm,
            "b" | "escape" | "esc" => Self::Cancel,
            "arrowup" | "up" | "w" => Self::Up,
            "arrowdown" | "down" | "s" => Self::Down,
            "l" => Self::ToggleLocale,
            "m" => Self::ToggleMute,
            _ => return None,
        };
        Some(action)
    }

    /// Maps a gamepad button name using the standard face-button layout.
    pub fn from_gamepad_button(button: &str) -> Option<Self> {
        let action = match button.to_ascii_lowercase().as_str() {
            "east" | "a" => Self::Confirm,
            "south" | "b" => Self::Cancel,
            "dpad_up" | "dpadup" => Self::Up,
            "dpad_down" | "dpaddown" => Self::Down,
            "select" | "back" => Self::ToggleLocale,
            _ => return None,
        };
        Some(action)
    }
}

/// Everything the player did during one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    #[serde(default)]
    pub elapsed_ms: u32,
    /// Desired walking direction; normalized by the session.
    #[serde(default)]
    pub movement: Vec2,
    #[serde(default)]
    pub actions: Vec<InputAction>,
}

impl FrameInput {
    pub fn idle(elapsed_ms: u32) -> Self {
        Self {
            elapsed_ms,
            ..Self::default()
        }
    }

    pub fn walk(elapsed_ms: u32, direction: Vec2) -> Self {
        Self {
            elapsed_ms,
            movement: direction,
            actions: Vec::new(),
        }
    }

    pub fn press(action: InputAction) -> Self {
        Self {
            actions: vec![action],
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_mapping() {
        assert_eq!(InputAction::from_key("Space"), Some(InputAction::Confirm));
        assert_eq!(InputAction::from_key("b"), Some(InputAction::Cancel));
        assert_eq!(InputAction::from_key("ArrowDown"), Some(InputAction::Down));
        assert_eq!(InputAction::from_key("L"), Some(InputAction::ToggleLocale));
        assert_eq!(InputAction::from_key("q"), None);
    }

    #[test]
    fn gamepad_east_confirms_south_cancels() {
        assert_eq!(InputAction::from_gamepad_button("east"), Some(InputAction::Confirm));
        assert_eq!(InputAction::from_gamepad_button("south"), Some(InputAction::Cancel));
        assert_eq!(InputAction::from_gamepad_button("north"), None);
    }

    #[test]
    fn frame_input_defaults_missing_fields() {
        let input: FrameInput = serde_json::from_str(r#"{"actions":["confirm"]}"#).unwrap();
        assert_eq!(input, FrameInput::press(InputAction::Confirm));
    }
}
