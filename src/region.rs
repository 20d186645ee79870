//! Region registry: the named anatomical areas of the model.
//!
//! Each region carries the set of activation tags that light it up. A region
//! is considered active when any of its tags is present in the current
//! [`ActiveTagSet`](crate::activation::ActiveTagSet).

use std::fmt;

use glam::Vec3;

use crate::visuals::rgb;

/// Identifier of a region, e.g. `"prefrontal-cortex"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub &'static str);

impl RegionId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A named region of the brain model.
#[derive(Debug, Clone)]
pub struct Region {
    pub id: RegionId,
    /// Display name used for labels.
    pub name: &'static str,
    /// One-line description shown in the activity monitor.
    pub description: &'static str,
    /// Center of the region in model space.
    pub position: Vec3,
    /// Extent of the region body along each axis.
    pub scale: Vec3,
    /// Base color (linear RGB).
    pub color: Vec3,
    /// Body opacity while inactive.
    pub base_opacity: f32,
    /// Upper bound for body opacity while active.
    pub active_opacity: f32,
    /// Number of particles drifting inside the region.
    pub particle_count: u32,
    /// Tags that activate this region.
    pub tags: &'static [&'static str],
}

impl Region {
    /// Whether this region carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }
}

/// Build the standard eight-region table.
pub fn standard_regions() -> Vec<Region> {
    vec![
        Region {
            id: RegionId("prefrontal-cortex"),
            name: "Prefrontal Cortex",
            description: "Executive control and abstract reasoning",
            position: Vec3::new(0.0, 0.6, 0.8),
            scale: Vec3::new(0.9, 0.5, 0.7),
            color: rgb(0x4A90E2),
            base_opacity: 0.4,
            active_opacity: 0.95,
            particle_count: 1200,
            tags: &[
                "reasoning-module-1",
                "reasoning-module-2",
                "attention-head-1",
                "prefrontal-cortex",
            ],
        },
        Region {
            id: RegionId("anterior-cingulate"),
            name: "Anterior Cingulate",
            description: "Conflict monitoring and emotional regulation",
            position: Vec3::new(0.0, 0.3, 0.2),
            scale: Vec3::new(0.4, 0.9, 0.7),
            color: rgb(0xFF9F43),
            base_opacity: 0.45,
            active_opacity: 0.9,
            particle_count: 800,
            tags: &["anterior-cingulate", "emotion-regulation", "conflict-monitoring"],
        },
        Region {
            id: RegionId("amygdala"),
            name: "Amygdala",
            description: "Threat detection and fear processing",
            position: Vec3::new(0.0, -0.4, 0.2),
            scale: Vec3::new(0.7, 0.4, 0.5),
            color: rgb(0xFF4757),
            base_opacity: 0.5,
            active_opacity: 0.95,
            particle_count: 600,
            tags: &["amygdala", "fear-processing", "threat-detection"],
        },
        Region {
            id: RegionId("hippocampus"),
            name: "Hippocampus",
            description: "Memory formation and consolidation",
            position: Vec3::new(0.0, -0.5, 0.0),
            scale: Vec3::new(0.9, 0.3, 0.7),
            color: rgb(0x5DADE2),
            base_opacity: 0.4,
            active_opacity: 0.9,
            particle_count: 900,
            tags: &[
                "embedding-layer-1",
                "embedding-layer-2",
                "memory-formation",
                "hippocampus",
            ],
        },
        Region {
            id: RegionId("visual-cortex"),
            name: "Visual Cortex",
            description: "Visual processing and feature extraction",
            position: Vec3::new(0.0, 0.1, -1.2),
            scale: Vec3::new(0.9, 0.8, 0.5),
            color: rgb(0xFF6B6B),
            base_opacity: 0.35,
            active_opacity: 0.85,
            particle_count: 1000,
            tags: &["visual-processing"],
        },
        Region {
            id: RegionId("language-areas"),
            name: "Language Areas",
            description: "Speech and language processing",
            position: Vec3::new(-0.95, 0.1, 0.45),
            scale: Vec3::new(0.6, 0.6, 0.7),
            color: rgb(0x9B59B6),
            base_opacity: 0.45,
            active_opacity: 0.9,
            particle_count: 700,
            tags: &[
                "language-processing",
                "speech-production",
                "comprehension",
                "semantic-processing",
            ],
        },
        Region {
            id: RegionId("parietal-association"),
            name: "Parietal Areas",
            description: "Spatial processing and integration",
            position: Vec3::new(0.0, 0.4, -0.4),
            scale: Vec3::new(1.1, 0.7, 0.6),
            color: rgb(0xF39C12),
            base_opacity: 0.4,
            active_opacity: 0.8,
            particle_count: 800,
            tags: &["spatial-attention", "multimodal-integration"],
        },
        Region {
            id: RegionId("insula"),
            name: "Insula",
            description: "Interoception and empathy",
            position: Vec3::new(0.0, 0.0, 0.3),
            scale: Vec3::new(0.8, 0.5, 0.4),
            color: rgb(0xFF6B9D),
            base_opacity: 0.4,
            active_opacity: 0.85,
            particle_count: 500,
            tags: &["anterior-insula", "interoception", "empathy-networks"],
        },
    ]
}

/// Human-readable meaning of an activation tag, for the activity monitor.
pub fn describe_tag(tag: &str) -> Option<&'static str> {
    let description = match tag {
        "prefrontal-cortex" => "Executive Control & Abstract Reasoning",
        "anterior-cingulate" => "Conflict Monitoring & Emotional Regulation",
        "amygdala" => "Threat Detection & Fear Processing",
        "hippocampus" => "Memory Formation & Consolidation",
        "visual-cortex" => "Visual Processing & Feature Extraction",
        "language-areas" => "Speech & Language Processing",
        "parietal-association" => "Spatial Processing & Integration",
        "insula" => "Interoception & Empathy",
        "reasoning-module-1" => "Logical Inference & Problem Solving",
        "reasoning-module-2" => "Meta-Reasoning & Abstract Thought",
        "attention-head-1" => "Selective Attention & Focus",
        "embedding-layer-1" => "Pattern Recognition & Memory Encoding",
        "embedding-layer-2" => "Semantic Representation & Context",
        "language-processing" => "Natural Language Understanding",
        "visual-processing" => "Image Analysis & Object Recognition",
        "emotion-regulation" => "Emotional Control & Modulation",
        "conflict-monitoring" => "Decision Conflict & Error Detection",
        "fear-processing" => "Threat Assessment & Survival Response",
        "threat-detection" => "Danger Recognition & Alert Systems",
        "memory-formation" => "Experience Encoding & Storage",
        "speech-production" => "Verbal Expression & Articulation",
        "comprehension" => "Language Understanding & Interpretation",
        "semantic-processing" => "Meaning Extraction & Context",
        "spatial-attention" => "Location Awareness & Spatial Focus",
        "multimodal-integration" => "Cross-Sensory Information Binding",
        "anterior-insula" => "Body Awareness & Emotional Integration",
        "interoception" => "Internal Body State Monitoring",
        "empathy-networks" => "Social Understanding & Perspective-Taking",
        _ => return None,
    };
    Some(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_regions_have_unique_ids() {
        let regions = standard_regions();
        let ids: HashSet<_> = regions.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), regions.len());
        assert_eq!(regions.len(), 8);
    }

    #[test]
    fn test_regions_have_tags_and_sane_opacity() {
        for region in standard_regions() {
            assert!(!region.tags.is_empty(), "{} has no tags", region.id);
            assert!(region.base_opacity < region.active_opacity);
            assert!(region.particle_count > 0);
        }
    }

    #[test]
    fn test_every_region_tag_is_described() {
        for region in standard_regions() {
            for tag in region.tags {
                assert!(describe_tag(tag).is_some(), "missing description for {tag}");
            }
        }
    }

    #[test]
    fn test_has_tag() {
        let regions = standard_regions();
        let pfc = &regions[0];
        assert!(pfc.has_tag("reasoning-module-1"));
        assert!(!pfc.has_tag("amygdala"));
    }
}
