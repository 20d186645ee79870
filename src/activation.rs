//! Activation resolution: which regions and pathways are lit for a tag set.
//!
//! The rules are strictly boolean:
//!
//! - a region is active iff its tags intersect the active tag set;
//! - a pathway is active iff **both** of its endpoints are active.
//!
//! Unknown tags simply match nothing.

use std::collections::BTreeSet;

use crate::anatomy::Anatomy;
use crate::pathway::PathwayId;
use crate::region::{Region, RegionId};

/// The tags produced by the most recent query. Replaced wholesale each time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveTagSet {
    tags: BTreeSet<String>,
}

impl ActiveTagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Whether any of `region`'s tags is in this set.
    pub fn activates(&self, region: &Region) -> bool {
        region.tags.iter().any(|t| self.contains(t))
    }
}

impl<S: Into<String>> FromIterator<S> for ActiveTagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result of resolving a tag set against an [`Anatomy`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activation {
    regions: BTreeSet<RegionId>,
    pathways: BTreeSet<PathwayId>,
}

impl Activation {
    /// Nothing active.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_region_active(&self, id: RegionId) -> bool {
        self.regions.contains(&id)
    }

    pub fn is_pathway_active(&self, id: PathwayId) -> bool {
        self.pathways.contains(&id)
    }

    pub fn regions(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.regions.iter().copied()
    }

    pub fn pathways(&self) -> impl Iterator<Item = PathwayId> + '_ {
        self.pathways.iter().copied()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn pathway_count(&self) -> usize {
        self.pathways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Resolve `tags` against the region and pathway tables.
pub fn resolve(anatomy: &Anatomy, tags: &ActiveTagSet) -> Activation {
    let regions: BTreeSet<RegionId> = anatomy
        .regions()
        .iter()
        .filter(|r| tags.activates(r))
        .map(|r| r.id)
        .collect();

    let pathways = anatomy
        .pathways()
        .iter()
        .filter(|p| regions.contains(&p.from()) && regions.contains(&p.to()))
        .map(|p| p.id)
        .collect();

    Activation { regions, pathways }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> ActiveTagSet {
        list.iter().copied().collect()
    }

    #[test]
    fn test_empty_tags_activate_nothing() {
        let activation = resolve(&Anatomy::standard(), &ActiveTagSet::new());
        assert!(activation.is_empty());
        assert_eq!(activation.pathway_count(), 0);
    }

    #[test]
    fn test_unknown_tags_activate_nothing() {
        let activation = resolve(&Anatomy::standard(), &tags(&["value-systems", "goal-systems"]));
        assert!(activation.is_empty());
    }

    #[test]
    fn test_region_active_iff_tags_intersect() {
        let anatomy = Anatomy::standard();
        // Every single tag in the table, alone, lights exactly the regions
        // that carry it.
        for region in anatomy.regions() {
            for tag in region.tags {
                let set = tags(&[*tag]);
                let activation = resolve(&anatomy, &set);
                for other in anatomy.regions() {
                    assert_eq!(
                        activation.is_region_active(other.id),
                        other.has_tag(tag),
                        "tag {tag} vs region {}",
                        other.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_pathway_requires_both_endpoints() {
        let anatomy = Anatomy::standard();
        // Prefrontal only: every pathway touching it has one dark endpoint.
        let activation = resolve(&anatomy, &tags(&["prefrontal-cortex"]));
        assert!(activation.is_region_active(RegionId("prefrontal-cortex")));
        assert_eq!(activation.pathway_count(), 0);

        let activation = resolve(&anatomy, &tags(&["prefrontal-cortex", "amygdala"]));
        assert!(activation.is_pathway_active(PathwayId::new("prefrontal-cortex", "amygdala")));
        assert!(!activation.is_pathway_active(PathwayId::new("prefrontal-cortex", "anterior-cingulate")));
        assert_eq!(activation.pathway_count(), 1);
    }

    #[test]
    fn test_pathway_rule_holds_for_all_region_pairs() {
        let anatomy = Anatomy::standard();
        let regions = anatomy.regions();
        for a in regions {
            for b in regions {
                let set = tags(&[a.tags[0], b.tags[0]]);
                let activation = resolve(&anatomy, &set);
                for p in anatomy.pathways() {
                    let expected = activation.is_region_active(p.from())
                        && activation.is_region_active(p.to());
                    assert_eq!(activation.is_pathway_active(p.id), expected);
                }
            }
        }
    }

    #[test]
    fn test_no_weighting_by_match_count() {
        let anatomy = Anatomy::standard();
        let one = resolve(&anatomy, &tags(&["hippocampus"]));
        let many = resolve(&anatomy, &tags(&["hippocampus", "embedding-layer-1", "memory-formation"]));
        assert_eq!(one, many);
    }
}
