//! # Neuroglow - neural activation visualizer
//!
//! A stylized brain made of glowing particles. Type a question (or pick one
//! of the canned alignment scenarios) and the regions and pathways it
//! "recruits" light up: region clouds pulse, signal particles stream along
//! the arcs between active regions, and a canned response types itself out.
//!
//! ## Quick Start
//!
//! ```ignore
//! use neuroglow::prelude::*;
//!
//! fn main() -> Result<(), ViewerError> {
//!     Viewer::new()
//!         .with_intensity(0.8)
//!         .with_camera_preset(CameraPreset::Frontal)
//!         .run()
//! }
//! ```
//!
//! ## Without a window
//!
//! Everything up to the animator is plain data and runs headless:
//!
//! ```
//! use neuroglow::prelude::*;
//!
//! let mut session = Session::new(Anatomy::standard(), 7);
//! session.submit("What do I fear?");
//! assert!(session.activation().is_region_active(RegionId("amygdala")));
//!
//! let mut animator = ParticleAnimator::new(session.anatomy(), 7);
//! animator.tick(session.activation(), session.intensity(), 0.0, 1.0 / 60.0);
//! ```
//!
//! ## Pipeline
//!
//! text → [`classify`] → [`ActiveTagSet`] → [`resolve`] → [`Activation`] →
//! [`ParticleAnimator::tick`] → sprites on the GPU.
//!
//! A region is active when any of its tags is in the set. A pathway is active
//! only when both of its endpoint regions are.
//!
//! ## Features
//!
//! - `egui` *(default)*: the GPU renderer, the egui shell and [`Viewer`].
//!   Without it the crate is the headless core only.

pub mod activation;
pub mod anatomy;
pub mod animator;
pub mod camera;
pub mod classifier;
pub mod clock;
pub mod error;
pub mod input;
pub mod pathway;
pub mod presets;
pub mod region;
pub mod script;
pub mod session;
pub mod visuals;

#[cfg(feature = "egui")]
pub mod gpu;
#[cfg(feature = "egui")]
pub mod shell;
#[cfg(feature = "egui")]
mod viewer;

pub use activation::{resolve, Activation, ActiveTagSet};
pub use anatomy::Anatomy;
pub use animator::ParticleAnimator;
pub use camera::{Camera, CameraPreset};
pub use classifier::{classify, Classification, ScriptKey};
pub use clock::FrameClock;
pub use error::{GpuError, ViewerError};
pub use glam::{Vec2, Vec3};
pub use pathway::{FlowCurve, Pathway, PathwayId};
pub use presets::{Preset, PresetCategory};
pub use region::{Region, RegionId};
pub use session::Session;
#[cfg(feature = "egui")]
pub use viewer::Viewer;
pub use visuals::VisualConfig;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use neuroglow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::activation::{resolve, Activation, ActiveTagSet};
    pub use crate::anatomy::Anatomy;
    pub use crate::animator::ParticleAnimator;
    pub use crate::camera::{Camera, CameraPreset};
    pub use crate::classifier::{classify, ScriptKey};
    pub use crate::clock::FrameClock;
    pub use crate::error::{GpuError, ViewerError};
    pub use crate::pathway::PathwayId;
    pub use crate::region::RegionId;
    pub use crate::session::Session;
    pub use crate::visuals::VisualConfig;
    pub use crate::{Vec2, Vec3};
    #[cfg(feature = "egui")]
    pub use crate::viewer::Viewer;
}
