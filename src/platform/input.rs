//! Window-system input to game input

use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::sim::{Input, Key};

/// Map a physical key to the keys the game knows about
pub fn key_from_code(key: PhysicalKey) -> Key {
    match key {
        PhysicalKey::Code(KeyCode::Space) => Key::Space,
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        _ => Key::Other,
    }
}

/// Convert a physical cursor position to canvas space
pub fn canvas_position(position: PhysicalPosition<f64>, scale_factor: f64) -> Vec2 {
    let logical = position.to_logical::<f32>(scale_factor);
    Vec2::new(logical.x, logical.y)
}

/// A click is a press and release at the same spot over the window
pub fn click_between(pressed: Option<Vec2>, released: Option<Vec2>) -> Option<Input> {
    match (pressed, released) {
        (Some(down), Some(up)) if down == up => Some(Input::Click(up)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_from_code(PhysicalKey::Code(KeyCode::Space)), Key::Space);
        assert_eq!(key_from_code(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
        assert_eq!(key_from_code(PhysicalKey::Code(KeyCode::Enter)), Key::Other);
        assert_eq!(
            key_from_code(PhysicalKey::Unidentified(NativeKeyCode::Unidentified)),
            Key::Other
        );
    }

    #[test]
    fn test_canvas_position_scales_to_logical() {
        let p = canvas_position(PhysicalPosition::new(600.0, 940.0), 2.0);
        assert_eq!(p, Vec2::new(300.0, 470.0));
    }

    #[test]
    fn test_click_needs_press_and_release_in_place() {
        let p = Vec2::new(1.0, 2.0);
        assert_eq!(click_between(Some(p), Some(p)), Some(Input::Click(p)));
        assert_eq!(click_between(None, Some(p)), None);
        assert_eq!(click_between(Some(p), None), None);
        // Dragging between press and release is not a click
        assert_eq!(click_between(Some(p), Some(Vec2::new(40.0, 2.0))), None);
    }
}
