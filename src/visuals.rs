//! Visual configuration and color helpers.
//!
//! Region and pathway colors are authored as `0xRRGGBB` sRGB values, the way a
//! designer writes them. The renderer works on an sRGB surface, so colors are
//! converted to linear space once, when the tables are built.
//!
//! # Usage
//!
//! ```ignore
//! let mut visuals = VisualConfig::new();
//! visuals.labels(false).pathways(true);
//! ```

use glam::Vec3;

/// Convert a packed `0xRRGGBB` sRGB color to linear RGB.
pub fn rgb(packed: u32) -> Vec3 {
    let channel = |shift: u32| srgb_to_linear(((packed >> shift) & 0xFF) as f32 / 255.0);
    Vec3::new(channel(16), channel(8), channel(0))
}

/// sRGB transfer function, inverse.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB transfer function, forward.
pub fn linear_to_srgb(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Convert a linear color to 8-bit sRGB channels (for UI widgets).
pub fn to_srgb8(color: Vec3) -> [u8; 3] {
    let q = |c: f32| (linear_to_srgb(c) * 255.0).round() as u8;
    [q(color.x), q(color.y), q(color.z)]
}

/// Rendering toggles exposed in the header bar.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    /// Draw floating region name labels.
    pub show_labels: bool,
    /// Draw pathway particle flows.
    pub show_pathways: bool,
    /// Draw region particle clouds.
    pub show_particles: bool,
    /// Draw the translucent brain shell.
    pub show_shell: bool,
    /// Clear color (linear RGB).
    pub background: Vec3,
}

impl VisualConfig {
    /// Defaults matching the original presentation: everything on, near-black
    /// background.
    pub fn new() -> Self {
        Self {
            show_labels: true,
            show_pathways: true,
            show_particles: true,
            show_shell: true,
            background: Vec3::new(0.004, 0.004, 0.008),
        }
    }

    pub fn labels(&mut self, on: bool) -> &mut Self {
        self.show_labels = on;
        self
    }

    pub fn pathways(&mut self, on: bool) -> &mut Self {
        self.show_pathways = on;
        self
    }

    pub fn particles(&mut self, on: bool) -> &mut Self {
        self.show_particles = on;
        self
    }

    pub fn shell(&mut self, on: bool) -> &mut Self {
        self.show_shell = on;
        self
    }

    pub fn background(&mut self, color: Vec3) -> &mut Self {
        self.background = color;
        self
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_reads_only_low_three_bytes() {
        assert_eq!(rgb(0xAB00_FF00), rgb(0x00FF00));
        assert_eq!(rgb(0xFFFFFF), Vec3::ONE);
        assert_eq!(rgb(0), Vec3::ZERO);
    }

    #[test]
    fn test_rgb_channels_are_linear() {
        let c = rgb(0xFF0000);
        assert_eq!(c.x, 1.0);
        assert_eq!(c.y, 0.0);
        // Mid-grey in sRGB is ~0.21 in linear space.
        let grey = rgb(0x808080).x;
        assert!((grey - 0.2158).abs() < 0.001);
    }

    #[test]
    fn test_srgb8_roundtrips_authored_colors() {
        assert_eq!(to_srgb8(rgb(0x4A90E2)), [0x4A, 0x90, 0xE2]);
        assert_eq!(to_srgb8(rgb(0xFF4757)), [0xFF, 0x47, 0x57]);
    }

    #[test]
    fn test_visual_config_builder() {
        let mut v = VisualConfig::new();
        v.labels(false).pathways(false);
        assert!(!v.show_labels);
        assert!(!v.show_pathways);
        assert!(v.show_particles);
    }
}
