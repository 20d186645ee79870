//! Mouse orbit controls and keyboard shortcuts.
//!
//! Raw winit events are translated here so the viewer's event handler stays a
//! thin dispatcher. Nothing in this module touches the GPU, so it is tested
//! without a window.

use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

use crate::camera::{Camera, CameraPreset};

/// Radians of rotation per pixel of drag.
pub const ROTATE_SPEED: f32 = 0.005;
/// Distance change per wheel line.
pub const ZOOM_SPEED: f32 = 0.3;
/// Wheel lines per pixel for touchpads reporting pixel deltas.
const PIXELS_TO_LINES: f32 = 0.1;

/// Left-drag rotates, wheel zooms.
#[derive(Debug, Default)]
pub struct OrbitControls {
    dragging: bool,
    last_cursor: Option<(f64, f64)>,
}

impl OrbitControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left mouse button pressed or released.
    pub fn on_button(&mut self, pressed: bool) {
        self.dragging = pressed;
        if !pressed {
            self.last_cursor = None;
        }
    }

    /// Cursor moved to `(x, y)` in physical pixels. Rotates while dragging.
    pub fn on_cursor(&mut self, x: f64, y: f64, camera: &mut Camera) {
        if !self.dragging {
            return;
        }
        if let Some((last_x, last_y)) = self.last_cursor {
            let dx = (x - last_x) as f32;
            let dy = (y - last_y) as f32;
            camera.orbit(-dx * ROTATE_SPEED, dy * ROTATE_SPEED);
        }
        self.last_cursor = Some((x, y));
    }

    pub fn on_scroll(&mut self, delta: MouseScrollDelta, camera: &mut Camera) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * PIXELS_TO_LINES,
        };
        camera.zoom(lines * ZOOM_SPEED);
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// What a keyboard shortcut asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    TogglePause,
    ToggleLabels,
    TogglePathways,
    Camera(CameraPreset),
}

/// Map a physical key to its shortcut, if it has one.
pub fn key_action(key: KeyCode) -> Option<KeyAction> {
    let digit = match key {
        KeyCode::Space => return Some(KeyAction::TogglePause),
        KeyCode::KeyL => return Some(KeyAction::ToggleLabels),
        KeyCode::KeyP => return Some(KeyAction::TogglePathways),
        KeyCode::Digit1 | KeyCode::Numpad1 => 1,
        KeyCode::Digit2 | KeyCode::Numpad2 => 2,
        KeyCode::Digit3 | KeyCode::Numpad3 => 3,
        KeyCode::Digit4 | KeyCode::Numpad4 => 4,
        KeyCode::Digit5 | KeyCode::Numpad5 => 5,
        KeyCode::Digit6 | KeyCode::Numpad6 => 6,
        _ => return None,
    };
    CameraPreset::from_digit(digit).map(KeyAction::Camera)
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_drag_rotates() {
        let mut controls = OrbitControls::new();
        let mut camera = Camera::new();
        let yaw = camera.yaw;

        controls.on_button(true);
        controls.on_cursor(100.0, 100.0, &mut camera);
        controls.on_cursor(140.0, 100.0, &mut camera);
        assert!((camera.yaw - (yaw - 40.0 * ROTATE_SPEED)).abs() < 1e-6);

        controls.on_cursor(140.0, 120.0, &mut camera);
        assert!((camera.pitch - 20.0 * ROTATE_SPEED).abs() < 1e-6);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut controls = OrbitControls::new();
        let mut camera = Camera::new();
        let before = camera.clone();
        controls.on_cursor(0.0, 0.0, &mut camera);
        controls.on_cursor(500.0, 500.0, &mut camera);
        assert_eq!(camera, before);
    }

    #[test]
    fn test_release_forgets_last_position() {
        let mut controls = OrbitControls::new();
        let mut camera = Camera::new();
        controls.on_button(true);
        controls.on_cursor(0.0, 0.0, &mut camera);
        controls.on_button(false);
        assert!(!controls.is_dragging());

        // A new drag starting elsewhere must not jump.
        controls.on_button(true);
        let before = camera.clone();
        controls.on_cursor(900.0, 900.0, &mut camera);
        assert_eq!(camera, before);
    }

    #[test]
    fn test_scroll_zooms_within_limits() {
        let mut controls = OrbitControls::new();
        let mut camera = Camera::new();
        let d = camera.distance;
        controls.on_scroll(MouseScrollDelta::LineDelta(0.0, 1.0), &mut camera);
        assert!((camera.distance - (d - ZOOM_SPEED)).abs() < 1e-6);

        controls.on_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -10_000.0)), &mut camera);
        assert_eq!(camera.distance, crate::camera::MAX_DISTANCE);
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(key_action(KeyCode::Space), Some(KeyAction::TogglePause));
        assert_eq!(key_action(KeyCode::KeyL), Some(KeyAction::ToggleLabels));
        assert_eq!(key_action(KeyCode::KeyP), Some(KeyAction::TogglePathways));
        assert_eq!(key_action(KeyCode::Digit3), Some(KeyAction::Camera(CameraPreset::Temporal)));
        assert_eq!(key_action(KeyCode::Numpad6), Some(KeyAction::Camera(CameraPreset::Superior)));
        assert_eq!(key_action(KeyCode::Digit7), None);
        assert_eq!(key_action(KeyCode::KeyQ), None);
    }
}
