//! The validated region + pathway tables.
//!
//! [`Anatomy`] is built once and never changes. Construction is where the
//! tables are checked against each other: a pathway that names a region that
//! does not exist is a configuration error. It is logged and dropped here so
//! the frame loop never has to deal with a dangling endpoint.

use std::collections::HashSet;

use crate::pathway::{standard_pathways, FlowCurve, Pathway};
use crate::region::{standard_regions, Region, RegionId};

/// Region and pathway tables, cross-checked.
#[derive(Debug, Clone)]
pub struct Anatomy {
    regions: Vec<Region>,
    pathways: Vec<Pathway>,
}

impl Anatomy {
    /// Build from custom tables.
    ///
    /// Regions with a duplicate id keep their first definition. Pathways
    /// whose endpoints are unknown, or that loop back onto the same region,
    /// are skipped with a warning.
    pub fn new(regions: Vec<Region>, pathways: Vec<Pathway>) -> Self {
        let mut seen = HashSet::new();
        let regions: Vec<Region> = regions
            .into_iter()
            .filter(|r| {
                let fresh = seen.insert(r.id);
                if !fresh {
                    log::warn!("duplicate region '{}' ignored", r.id);
                }
                fresh
            })
            .collect();

        let pathways = pathways
            .into_iter()
            .filter(|p| {
                let known = |id: RegionId| regions.iter().any(|r| r.id == id);
                if !known(p.from()) || !known(p.to()) {
                    log::warn!("pathway '{}' ({}) references an unknown region, skipped", p.name, p.id);
                    return false;
                }
                if p.from() == p.to() {
                    log::warn!("pathway '{}' loops onto itself, skipped", p.name);
                    return false;
                }
                true
            })
            .collect();

        Self { regions, pathways }
    }

    /// The built-in eight regions and five pathways.
    pub fn standard() -> Self {
        Self::new(standard_regions(), standard_pathways())
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn pathways(&self) -> &[Pathway] {
        &self.pathways
    }

    /// Look up a region by id.
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Position of a region in [`regions`](Self::regions).
    pub fn region_index(&self, id: RegionId) -> Option<usize> {
        self.regions.iter().position(|r| r.id == id)
    }

    /// Flow curve of a pathway. `None` only for pathways not from this table.
    pub fn curve(&self, pathway: &Pathway) -> Option<FlowCurve> {
        let from = self.region(pathway.from())?;
        let to = self.region(pathway.to())?;
        Some(FlowCurve::between(from.position, to.position))
    }
}

impl Default for Anatomy {
    fn default() -> Self {
        Self::standard()
    }
}
