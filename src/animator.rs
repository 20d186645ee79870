//! Per-frame particle animation.
//!
//! The animator owns every particle buffer in the scene. Buffers are laid out
//! as parallel arrays (one `Vec` per attribute) allocated once in
//! [`ParticleAnimator::new`] and rewritten in place on every
//! [`tick`](ParticleAnimator::tick). Nothing is allocated per frame.
//!
//! Four kinds of state are animated:
//!
//! | Part | Active | Inactive |
//! |------|--------|----------|
//! | Region cloud | bounded random walk, pulsing color/size | frozen, dimmed |
//! | Pathway flow | particles cycle along the arc | frozen, faint |
//! | Region body | pulsing opacity/emissive | base opacity |
//! | Shell | slow breathing | n/a |
//!
//! Intensity is expected in `[0, 1]`; the animator does not clamp it.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activation::Activation;
use crate::anatomy::Anatomy;
use crate::pathway::{FlowCurve, PathwayId};
use crate::region::RegionId;
use crate::visuals::rgb;

/// Reference frame rate the flow speeds were authored against.
pub const REFERENCE_FPS: f32 = 60.0;
/// Region particles spawn within this radius of the region center.
pub const SPAWN_RADIUS: f32 = 0.4;
/// Region particles farther than this from the center get reflected.
pub const BOUND_RADIUS: f32 = 0.45;
/// Radius a reflected particle is placed back at.
pub const REFLECT_RADIUS: f32 = 0.4;
/// Velocity kept (and reversed) on reflection.
pub const RESTITUTION: f32 = 0.7;
/// Horizontal drift speed of region particles, units per second.
const DRIFT_SPEED: f32 = 0.24;
/// Random acceleration applied to drifting particles, units per second squared.
const WANDER: f32 = 0.6;
/// Upper bound on drift speed after jitter.
const MAX_DRIFT: f32 = 0.5;
/// Size of an inactive region particle.
const IDLE_SIZE: f32 = 0.008;
/// Brightness of an inactive region particle.
const IDLE_DIM: f32 = 0.3;
const SHELL_RADIUS: f32 = 1.4;
const SHELL_POINTS: usize = 1500;

/// Wrap a progress value into `[0, 1)`.
#[inline]
fn wrap_unit(t: f32) -> f32 {
    if (0.0..1.0).contains(&t) {
        return t;
    }
    let w = t.rem_euclid(1.0);
    // rem_euclid of a tiny negative value can round up to exactly 1.0.
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}

/// Particles drifting inside one region.
#[derive(Debug, Clone)]
pub struct RegionCloud {
    pub id: RegionId,
    pub center: Vec3,
    pub base_color: Vec3,
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    pub colors: Vec<Vec3>,
    pub sizes: Vec<f32>,
    phases: Vec<f32>,
    base_sizes: Vec<f32>,
    /// Opacity of the whole cloud.
    pub opacity: f32,
    pub active: bool,
}

impl RegionCloud {
    fn spawn(id: RegionId, center: Vec3, color: Vec3, count: usize, rng: &mut StdRng) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        let mut phases = Vec::with_capacity(count);
        let mut base_sizes = Vec::with_capacity(count);

        for _ in 0..count {
            let theta = rng.gen::<f32>() * TAU;
            let phi = (rng.gen::<f32>() * 2.0 - 1.0).acos();
            let r = rng.gen::<f32>() * SPAWN_RADIUS;
            positions.push(
                center
                    + r * Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos()),
            );

            // Mostly tangential drift around the vertical axis.
            let tangent = Vec3::new(
                (theta + PI / 2.0).sin(),
                (rng.gen::<f32>() - 0.5) * 0.5,
                (theta + PI / 2.0).cos(),
            )
            .normalize();
            velocities.push(tangent * Vec3::new(DRIFT_SPEED, DRIFT_SPEED * 0.75, DRIFT_SPEED));

            phases.push(rng.gen::<f32>() * TAU);
            base_sizes.push(0.01 + rng.gen::<f32>() * 0.008);
        }

        Self {
            id,
            center,
            base_color: color,
            positions,
            velocities,
            colors: vec![color * IDLE_DIM; count],
            sizes: vec![IDLE_SIZE; count],
            phases,
            base_sizes,
            opacity: 0.4,
            active: false,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    fn tick(&mut self, rng: &mut StdRng, intensity: f32, time: f32, delta: f32) {
        if !self.active {
            let dim = self.base_color * IDLE_DIM;
            self.colors.fill(dim);
            self.sizes.fill(IDLE_SIZE);
            self.opacity = 0.4;
            return;
        }

        for i in 0..self.positions.len() {
            let pulse = (self.phases[i] + time * 3.0).sin() * 0.5 + 0.5;

            let jitter = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            ) * (WANDER * delta);
            let mut velocity = (self.velocities[i] + jitter).clamp_length_max(MAX_DRIFT);
            let mut position = self.positions[i] + velocity * (intensity * (1.0 + pulse) * delta);

            let offset = position - self.center;
            let distance = offset.length();
            if distance > BOUND_RADIUS {
                position = self.center + offset / distance * REFLECT_RADIUS;
                velocity *= -RESTITUTION;
            }

            self.positions[i] = position;
            self.velocities[i] = velocity;
            self.colors[i] = (self.base_color * (1.0 + pulse * intensity * 1.2)).min(Vec3::ONE);
            self.sizes[i] = self.base_sizes[i] * (1.0 + pulse * intensity * 3.0);
        }
        self.opacity = 0.9;
    }
}

/// Particles cycling along one pathway.
#[derive(Debug, Clone)]
pub struct PathwayFlow {
    pub id: PathwayId,
    pub curve: FlowCurve,
    pub base_color: Vec3,
    pub flow_speed: f32,
    /// Position along the curve, always in `[0, 1)`.
    pub progress: Vec<f32>,
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
    pub sizes: Vec<f32>,
    speeds: Vec<f32>,
    base_sizes: Vec<f32>,
    pub opacity: f32,
    pub active: bool,
}

impl PathwayFlow {
    fn spawn(id: PathwayId, curve: FlowCurve, color: Vec3, flow_speed: f32, count: usize, rng: &mut StdRng) -> Self {
        let progress: Vec<f32> = (0..count).map(|i| i as f32 / count as f32).collect();
        let positions = progress.iter().map(|&t| curve.point(t)).collect();
        let speeds = (0..count).map(|_| 0.5 + rng.gen::<f32>()).collect();
        let base_sizes: Vec<f32> = (0..count).map(|_| 0.02 + rng.gen::<f32>() * 0.015).collect();

        Self {
            id,
            curve,
            base_color: color,
            flow_speed,
            progress,
            positions,
            colors: vec![color; count],
            sizes: base_sizes.clone(),
            speeds,
            base_sizes,
            opacity: 0.15,
            active: false,
        }
    }

    pub fn len(&self) -> usize {
        self.progress.len()
    }

    pub fn is_empty(&self) -> bool {
        self.progress.is_empty()
    }

    fn tick(&mut self, intensity: f32, time: f32, delta: f32) {
        if !self.active {
            self.opacity = 0.15;
            return;
        }

        let step = self.flow_speed * intensity * delta * REFERENCE_FPS;
        for i in 0..self.progress.len() {
            let t = wrap_unit(self.progress[i] + step * self.speeds[i]);
            self.progress[i] = t;
            self.positions[i] = self.curve.point(t);

            let pulse = (t * TAU + time * 2.0).sin() * 0.5 + 0.5;
            self.colors[i] = self.base_color * (0.5 + pulse * 0.8);
            self.sizes[i] = self.base_sizes[i] * (1.0 + pulse * intensity);
        }
        self.opacity = 0.9 * intensity;
    }
}

/// The translucent body of a region.
#[derive(Debug, Clone)]
pub struct RegionBody {
    pub id: RegionId,
    pub name: &'static str,
    pub center: Vec3,
    pub scale: Vec3,
    pub base_color: Vec3,
    pub base_opacity: f32,
    pub active_opacity: f32,
    /// Pulse phase offset (the region's table index).
    phase: f32,
    pub color: Vec3,
    pub opacity: f32,
    pub emissive: f32,
    pub active: bool,
}

impl RegionBody {
    fn tick(&mut self, intensity: f32, time: f32) {
        if self.active {
            let pulse = (time * 3.0 + self.phase).sin() * 0.3 + 0.7;
            self.opacity = self.active_opacity.min(self.base_opacity + intensity * pulse * 0.6);
            self.emissive = intensity * pulse * 0.8;
            self.color = self.base_color * (1.0 + pulse * intensity * 0.5);
        } else {
            self.opacity = self.base_opacity;
            self.emissive = 0.05;
            self.color = self.base_color;
        }
    }
}

/// Faint point sphere around the whole model.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Points at rest scale.
    pub points: Vec<Vec3>,
    pub color: Vec3,
    pub opacity: f32,
    /// Current breathing scale.
    pub scale: f32,
}

impl Shell {
    fn new() -> Self {
        // Fibonacci sphere: evenly spread, deterministic.
        let golden = PI * (3.0 - 5.0_f32.sqrt());
        let points = (0..SHELL_POINTS)
            .map(|i| {
                let y = 1.0 - 2.0 * (i as f32 + 0.5) / SHELL_POINTS as f32;
                let r = (1.0 - y * y).sqrt();
                let a = golden * i as f32;
                Vec3::new(r * a.cos(), y, r * a.sin()) * SHELL_RADIUS
            })
            .collect();
        Self {
            points,
            color: rgb(0xD4B5A0),
            opacity: 0.06,
            scale: 1.0,
        }
    }

    fn tick(&mut self, time: f32) {
        self.scale = 1.0 + (time * 0.8).sin() * 0.005;
    }
}

/// Owns and animates every particle buffer of the scene.
#[derive(Debug)]
pub struct ParticleAnimator {
    rng: StdRng,
    clouds: Vec<RegionCloud>,
    flows: Vec<PathwayFlow>,
    bodies: Vec<RegionBody>,
    shell: Shell,
}

impl ParticleAnimator {
    /// Allocate all particle state for `anatomy`. The seed makes the
    /// randomized parts (spawn positions, jitter, sizes) reproducible.
    pub fn new(anatomy: &Anatomy, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let clouds: Vec<RegionCloud> = anatomy
            .regions()
            .iter()
            .map(|r| RegionCloud::spawn(r.id, r.position, r.color, r.particle_count as usize, &mut rng))
            .collect();

        let bodies = anatomy
            .regions()
            .iter()
            .enumerate()
            .map(|(i, r)| RegionBody {
                id: r.id,
                name: r.name,
                center: r.position,
                scale: r.scale,
                base_color: r.color,
                base_opacity: r.base_opacity,
                active_opacity: r.active_opacity,
                phase: i as f32,
                color: r.color,
                opacity: r.base_opacity,
                emissive: 0.05,
                active: false,
            })
            .collect();

        let mut flows = Vec::with_capacity(anatomy.pathways().len());
        for p in anatomy.pathways() {
            let Some(curve) = anatomy.curve(p) else {
                log::warn!("pathway '{}' has no curve, not animated", p.name);
                continue;
            };
            flows.push(PathwayFlow::spawn(p.id, curve, p.color, p.flow_speed, p.particle_count as usize, &mut rng));
        }

        let total: usize = clouds.iter().map(RegionCloud::len).sum::<usize>()
            + flows.iter().map(PathwayFlow::len).sum::<usize>();
        log::info!(
            "animator ready: {} regions, {} pathways, {} particles",
            clouds.len(),
            flows.len(),
            total
        );

        Self {
            rng,
            clouds,
            flows,
            bodies,
            shell: Shell::new(),
        }
    }

    /// Advance one frame.
    ///
    /// `time` is seconds since start, `delta` seconds since the last frame.
    pub fn tick(&mut self, activation: &Activation, intensity: f32, time: f32, delta: f32) {
        for cloud in &mut self.clouds {
            cloud.active = activation.is_region_active(cloud.id);
            cloud.tick(&mut self.rng, intensity, time, delta);
        }
        for flow in &mut self.flows {
            flow.active = activation.is_pathway_active(flow.id);
            flow.tick(intensity, time, delta);
        }
        for body in &mut self.bodies {
            body.active = activation.is_region_active(body.id);
            body.tick(intensity, time);
        }
        self.shell.tick(time);
    }

    pub fn clouds(&self) -> &[RegionCloud] {
        &self.clouds
    }

    pub fn flows(&self) -> &[PathwayFlow] {
        &self.flows
    }

    pub fn bodies(&self) -> &[RegionBody] {
        &self.bodies
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Total number of sprites the renderer may draw.
    pub fn sprite_capacity(&self) -> usize {
        self.clouds.iter().map(RegionCloud::len).sum::<usize>()
            + self.flows.iter().map(PathwayFlow::len).sum::<usize>()
            + self.bodies.len()
            + self.shell.points.len()
    }
}
