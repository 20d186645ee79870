//! Pathway registry: directed connections between regions.

use std::fmt;

use glam::Vec3;

use crate::region::RegionId;
use crate::visuals::rgb;

/// Identity of a pathway, implicit in its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathwayId {
    pub from: RegionId,
    pub to: RegionId,
}

impl PathwayId {
    pub fn new(from: &'static str, to: &'static str) -> Self {
        Self {
            from: RegionId(from),
            to: RegionId(to),
        }
    }
}

impl fmt::Display for PathwayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A directed flow of particles from one region to another.
#[derive(Debug, Clone)]
pub struct Pathway {
    pub id: PathwayId,
    pub name: &'static str,
    /// Particle color (linear RGB).
    pub color: Vec3,
    /// Number of particles travelling the path.
    pub particle_count: u32,
    /// Progress per 1/60 s at full intensity.
    pub flow_speed: f32,
}

impl Pathway {
    pub fn from(&self) -> RegionId {
        self.id.from
    }

    pub fn to(&self) -> RegionId {
        self.id.to
    }
}

/// Build the standard five-pathway table.
pub fn standard_pathways() -> Vec<Pathway> {
    vec![
        Pathway {
            id: PathwayId::new("prefrontal-cortex", "anterior-cingulate"),
            name: "Executive Control",
            color: rgb(0x00CED1),
            particle_count: 80,
            flow_speed: 0.04,
        },
        Pathway {
            id: PathwayId::new("hippocampus", "prefrontal-cortex"),
            name: "Memory Integration",
            color: rgb(0x9370DB),
            particle_count: 70,
            flow_speed: 0.035,
        },
        Pathway {
            id: PathwayId::new("prefrontal-cortex", "amygdala"),
            name: "Emotional Regulation",
            color: rgb(0xFFA500),
            particle_count: 60,
            flow_speed: 0.045,
        },
        Pathway {
            id: PathwayId::new("language-areas", "prefrontal-cortex"),
            name: "Language Network",
            color: rgb(0xFFD700),
            particle_count: 65,
            flow_speed: 0.038,
        },
        Pathway {
            id: PathwayId::new("visual-cortex", "parietal-association"),
            name: "Visual Integration",
            color: rgb(0xFF69B4),
            particle_count: 75,
            flow_speed: 0.042,
        },
    ]
}

/// Arched flow curve between two points.
///
/// A quadratic Bézier whose control point sits above the midpoint by 30% of
/// the straight-line distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowCurve {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
}

impl FlowCurve {
    /// Lift of the control point, as a fraction of endpoint distance.
    pub const LIFT: f32 = 0.3;

    pub fn between(start: Vec3, end: Vec3) -> Self {
        let control = start.lerp(end, 0.5) + Vec3::Y * start.distance(end) * Self::LIFT;
        Self {
            start,
            control,
            end,
        }
    }

    /// Evaluate the curve at `t` in `[0, 1]`.
    #[inline]
    pub fn point(&self, t: f32) -> Vec3 {
        let u = 1.0 - t;
        self.start * (u * u) + self.control * (2.0 * u * t) + self.end * (t * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_endpoints() {
        let arc = FlowCurve::between(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(arc.point(0.0), Vec3::ZERO);
        assert_eq!(arc.point(1.0), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_arc_bulges_upward() {
        let arc = FlowCurve::between(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        assert!((arc.control - Vec3::new(1.0, 0.6, 0.0)).length() < 1e-6);
        // Bézier midpoint is halfway between chord midpoint and control.
        let mid = arc.point(0.5);
        assert!((mid - Vec3::new(1.0, 0.3, 0.0)).length() < 1e-6);
        for i in 1..10 {
            assert!(arc.point(i as f32 / 10.0).y > 0.0);
        }
    }

    #[test]
    fn test_standard_pathways_are_distinct() {
        let pathways = standard_pathways();
        for (i, a) in pathways.iter().enumerate() {
            for b in &pathways[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_pathway_id_display() {
        let id = PathwayId::new("hippocampus", "prefrontal-cortex");
        assert_eq!(id.to_string(), "hippocampus -> prefrontal-cortex");
    }
}
