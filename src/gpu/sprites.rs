//! Flattening animator state into billboard instances.

use bytemuck::{Pod, Zeroable};

use crate::animator::ParticleAnimator;
use crate::visuals::VisualConfig;

/// Softness of region particles and flow particles.
const DOT: f32 = 0.0;
/// Softness of region body glows.
const GLOW: f32 = 1.0;
const SHELL_POINT_SIZE: f32 = 0.012;
/// How much a region body glow extends past its nominal scale.
const BODY_SPREAD: f32 = 1.3;

/// One billboard, uploaded as per-instance vertex data.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 3],
    /// Half-extent of the quad in world units.
    pub size: f32,
    /// Linear RGB plus alpha.
    pub color: [f32; 4],
    /// 0 for a hard-edged dot, 1 for a soft glow.
    pub softness: f32,
}

impl SpriteInstance {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 4] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x4, 3 => Float32];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Rebuild `out` from the animator, honoring the visibility toggles.
///
/// `out` is cleared first; its allocation is reused across frames.
pub fn collect(animator: &ParticleAnimator, visuals: &VisualConfig, out: &mut Vec<SpriteInstance>) {
    out.clear();

    if visuals.show_shell {
        let shell = animator.shell();
        let color = shell.color.extend(shell.opacity).to_array();
        out.extend(shell.points.iter().map(|p| SpriteInstance {
            position: (*p * shell.scale).to_array(),
            size: SHELL_POINT_SIZE,
            color,
            softness: DOT,
        }));
    }

    for body in animator.bodies() {
        let color = body.color * (1.0 + body.emissive);
        out.push(SpriteInstance {
            position: body.center.to_array(),
            size: body.scale.max_element() * BODY_SPREAD,
            color: color.extend(body.opacity).to_array(),
            softness: GLOW,
        });
    }

    if visuals.show_particles {
        for cloud in animator.clouds() {
            for i in 0..cloud.len() {
                out.push(SpriteInstance {
                    position: cloud.positions[i].to_array(),
                    size: cloud.sizes[i],
                    color: cloud.colors[i].extend(cloud.opacity).to_array(),
                    softness: DOT,
                });
            }
        }
    }

    if visuals.show_pathways {
        for flow in animator.flows() {
            for i in 0..flow.len() {
                out.push(SpriteInstance {
                    position: flow.positions[i].to_array(),
                    size: flow.sizes[i],
                    color: flow.colors[i].extend(flow.opacity).to_array(),
                    softness: DOT,
                });
            }
        }
    }
}
