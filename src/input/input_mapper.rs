//! Input mapping from raw events to semantic actions
//!
//! The orrery has no controls beyond leaving: Escape or closing the window.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Stop the frame loop and exit (Escape, or a window close request)
    Quit,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Only presses count; releases and unbound keys return `None`.
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Quit),
            _ => None,
        }
    }

    /// A close request from the window manager always quits
    pub fn map_close_requested() -> InputAction {
        InputAction::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_press_quits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::Quit));
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released);
        assert_eq!(action, None);
    }

    #[test]
    fn test_other_keys_not_mapped() {
        for key in [KeyCode::KeyQ, KeyCode::Space, KeyCode::Enter, KeyCode::KeyW] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_close_request_quits() {
        assert_eq!(InputMapper::map_close_requested(), InputAction::Quit);
    }
}
