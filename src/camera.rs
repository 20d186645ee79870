//! Orbit camera and its named viewpoints.

use std::fmt;

use glam::{Mat4, Vec2, Vec3};

/// Pitch limit in radians; keeps the camera off the poles.
pub const PITCH_LIMIT: f32 = 1.5;
/// Closest allowed orbit distance.
pub const MIN_DISTANCE: f32 = 2.0;
/// Farthest allowed orbit distance.
pub const MAX_DISTANCE: f32 = 8.0;

const FOV_Y: f32 = 45.0 * std::f32::consts::PI / 180.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// Named camera viewpoints, bound to keys `1`..`6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraPreset {
    Overview,
    Frontal,
    Temporal,
    Occipital,
    Sagittal,
    Superior,
}

impl CameraPreset {
    pub const ALL: [CameraPreset; 6] = [
        CameraPreset::Overview,
        CameraPreset::Frontal,
        CameraPreset::Temporal,
        CameraPreset::Occipital,
        CameraPreset::Sagittal,
        CameraPreset::Superior,
    ];

    /// Camera position for this preset, looking at the origin.
    pub fn position(self) -> Vec3 {
        match self {
            CameraPreset::Overview => Vec3::new(0.0, 0.0, 4.0),
            CameraPreset::Frontal => Vec3::new(0.0, 1.0, 2.5),
            CameraPreset::Temporal => Vec3::new(-2.5, 0.0, 2.0),
            CameraPreset::Occipital => Vec3::new(0.0, 0.0, -3.0),
            CameraPreset::Sagittal => Vec3::new(3.0, 0.0, 0.0),
            CameraPreset::Superior => Vec3::new(0.0, 3.0, 0.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CameraPreset::Overview => "Overview",
            CameraPreset::Frontal => "Frontal",
            CameraPreset::Temporal => "Temporal",
            CameraPreset::Occipital => "Occipital",
            CameraPreset::Sagittal => "Sagittal",
            CameraPreset::Superior => "Superior",
        }
    }

    /// Preset for a 1-based hotkey digit.
    pub fn from_digit(digit: u32) -> Option<Self> {
        let index = digit.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for CameraPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Orbit camera around a target point.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
}

impl Camera {
    /// Camera at the overview preset.
    pub fn new() -> Self {
        Self::from_preset(CameraPreset::Overview)
    }

    pub fn from_preset(preset: CameraPreset) -> Self {
        let mut camera = Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: MIN_DISTANCE,
            target: Vec3::ZERO,
        };
        camera.apply_preset(preset);
        camera
    }

    /// Jump to `preset`, aiming at the origin.
    pub fn apply_preset(&mut self, preset: CameraPreset) {
        self.target = Vec3::ZERO;
        self.look_from(preset.position());
        log::debug!("camera preset: {preset}");
    }

    /// Place the camera at `eye` (world space), keeping the current target.
    pub fn look_from(&mut self, eye: Vec3) {
        let offset = eye - self.target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }
        self.yaw = offset.x.atan2(offset.z);
        self.pitch = (offset.y / distance).asin();
        self.distance = distance;
        self.clamp();
    }

    /// Rotate by the given angles in radians.
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch += delta_pitch;
        self.clamp();
    }

    /// Move toward (positive) or away from the target.
    pub fn zoom(&mut self, amount: f32) {
        self.distance -= amount;
        self.clamp();
    }

    fn clamp(&mut self) {
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.distance = self.distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(FOV_Y, aspect.max(f32::EPSILON), Z_NEAR, Z_FAR)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// World-space right and up vectors, for billboarding.
    pub fn basis(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.position()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }

    /// Project a world point to screen coordinates (origin top-left).
    ///
    /// Returns `None` for points behind the camera or outside the clip volume
    /// depth range.
    pub fn project(&self, point: Vec3, screen: Vec2) -> Option<Vec2> {
        let clip = self.view_proj(screen.x / screen.y) * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if !(0.0..=1.0).contains(&ndc.z) {
            return None;
        }
        Some(Vec2::new(
            (ndc.x * 0.5 + 0.5) * screen.x,
            (0.5 - ndc.y * 0.5) * screen.y,
        ))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn test_presets_round_trip() {
        for preset in CameraPreset::ALL {
            if preset == CameraPreset::Superior {
                continue;
            }
            let camera = Camera::from_preset(preset);
            assert!(approx(camera.position(), preset.position()), "{preset}");
        }
    }

    #[test]
    fn test_superior_is_pitch_clamped() {
        let camera = Camera::from_preset(CameraPreset::Superior);
        assert_eq!(camera.pitch, PITCH_LIMIT);
        assert!((camera.distance - 3.0).abs() < 1e-5);
        assert!(camera.position().y > 2.9);
    }

    #[test]
    fn test_digits_map_to_presets() {
        assert_eq!(CameraPreset::from_digit(1), Some(CameraPreset::Overview));
        assert_eq!(CameraPreset::from_digit(6), Some(CameraPreset::Superior));
        assert_eq!(CameraPreset::from_digit(0), None);
        assert_eq!(CameraPreset::from_digit(7), None);
    }

    #[test]
    fn test_orbit_and_zoom_clamp() {
        let mut camera = Camera::new();
        camera.orbit(0.0, 10.0);
        assert_eq!(camera.pitch, PITCH_LIMIT);
        camera.orbit(0.0, -10.0);
        assert_eq!(camera.pitch, -PITCH_LIMIT);
        camera.zoom(100.0);
        assert_eq!(camera.distance, MIN_DISTANCE);
        camera.zoom(-100.0);
        assert_eq!(camera.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_target_projects_to_screen_center() {
        let camera = Camera::new();
        let screen = Vec2::new(1280.0, 720.0);
        let p = camera.project(Vec3::ZERO, screen).unwrap();
        assert!((p - screen * 0.5).length() < 1e-2);
    }

    #[test]
    fn test_point_behind_camera_is_not_projected() {
        let camera = Camera::new();
        assert!(camera.project(Vec3::new(0.0, 0.0, 10.0), Vec2::new(800.0, 600.0)).is_none());
    }

    #[test]
    fn test_up_is_up_on_screen() {
        let camera = Camera::new();
        let screen = Vec2::new(800.0, 600.0);
        let above = camera.project(Vec3::new(0.0, 0.5, 0.0), screen).unwrap();
        assert!(above.y < 300.0);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let camera = Camera::from_preset(CameraPreset::Temporal);
        let (right, up) = camera.basis();
        assert!((right.length() - 1.0).abs() < 1e-5);
        assert!((up.length() - 1.0).abs() < 1e-5);
        assert!(right.dot(up).abs() < 1e-5);
    }
}
