// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory model store
//!
//! Stands in for a live foreign session: tests, offline conversion, and
//! callers that already hold the foreign records.

use femlink_model::{
    ConvertError, EntityKind, ForeignCrossSection, ForeignLine, ForeignMaterial,
    ForeignNodalSupport, ForeignNode, ForeignSurface, ForeignSurfaceStiffness, IdAllocator,
    LineNo, MaterialNo, ModelStore, ModelWriter, NodeNo, Result, SurfaceNo,
};
use rustc_hash::FxHashMap;
use std::cell::Cell;

/// Foreign model held in hash maps
#[derive(Debug, Default)]
pub struct MemoryStore {
    nodes: FxHashMap<NodeNo, ForeignNode>,
    lines: FxHashMap<LineNo, ForeignLine>,
    surfaces: FxHashMap<SurfaceNo, ForeignSurface>,
    /// Surface numbers in insertion order
    surface_order: Vec<SurfaceNo>,
    stiffness: FxHashMap<SurfaceNo, ForeignSurfaceStiffness>,
    materials: FxHashMap<MaterialNo, ForeignMaterial>,
    cross_sections: Vec<ForeignCrossSection>,
    nodal_supports: Vec<ForeignNodalSupport>,
    /// Reject every write with a store error
    reject_writes: bool,
    node_requests: Cell<usize>,
    material_requests: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: ForeignNode) {
        self.nodes.insert(node.no, node);
    }

    pub fn add_line(&mut self, line: ForeignLine) {
        self.lines.insert(line.no, line);
    }

    /// Add a surface, replacing one with the same number in place
    pub fn add_surface(&mut self, surface: ForeignSurface) {
        if self.surfaces.insert(surface.no, surface.clone()).is_none() {
            self.surface_order.push(surface.no);
        }
    }

    pub fn add_surface_stiffness(&mut self, no: SurfaceNo, stiffness: ForeignSurfaceStiffness) {
        self.stiffness.insert(no, stiffness);
    }

    pub fn add_material(&mut self, material: ForeignMaterial) {
        self.materials.insert(material.no, material);
    }

    /// Make every write fail, for exercising error paths
    pub fn reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    /// Cross-sections written so far
    pub fn cross_sections(&self) -> &[ForeignCrossSection] {
        &self.cross_sections
    }

    /// Nodal supports written so far
    pub fn nodal_supports(&self) -> &[ForeignNodalSupport] {
        &self.nodal_supports
    }

    /// Number of node lookups served
    pub fn node_requests(&self) -> usize {
        self.node_requests.get()
    }

    /// Number of material lookups served
    pub fn material_requests(&self) -> usize {
        self.material_requests.get()
    }

    /// Allocator continuing after the highest number of each table
    pub fn allocator(&self) -> SequentialAllocator {
        let mut allocator = SequentialAllocator::new();
        allocator.reserve(EntityKind::Node, self.nodes.keys().map(|n| n.0).max());
        allocator.reserve(EntityKind::Line, self.lines.keys().map(|n| n.0).max());
        allocator.reserve(EntityKind::Surface, self.surface_order.iter().map(|n| n.0).max());
        allocator.reserve(EntityKind::Material, self.materials.keys().map(|n| n.0).max());
        allocator.reserve(
            EntityKind::CrossSection,
            self.cross_sections.iter().map(|c| c.no.0).max(),
        );
        allocator.reserve(
            EntityKind::NodalSupport,
            self.nodal_supports.iter().map(|s| s.no.0).max(),
        );
        allocator
    }

    fn check_writable(&self) -> Result<()> {
        if self.reject_writes {
            return Err(ConvertError::store("model is read-only"));
        }
        Ok(())
    }
}

impl ModelStore for MemoryStore {
    fn surface(&self, no: SurfaceNo) -> Option<ForeignSurface> {
        self.surfaces.get(&no).cloned()
    }

    fn line(&self, no: LineNo) -> Option<ForeignLine> {
        self.lines.get(&no).cloned()
    }

    fn node(&self, no: NodeNo) -> Option<ForeignNode> {
        self.node_requests.set(self.node_requests.get() + 1);
        self.nodes.get(&no).cloned()
    }

    fn material(&self, no: MaterialNo) -> Option<ForeignMaterial> {
        self.material_requests.set(self.material_requests.get() + 1);
        self.materials.get(&no).cloned()
    }

    fn surface_stiffness(&self, no: SurfaceNo) -> Option<ForeignSurfaceStiffness> {
        self.stiffness.get(&no).cloned()
    }

    fn surfaces(&self) -> Vec<ForeignSurface> {
        self.surface_order
            .iter()
            .filter_map(|no| self.surfaces.get(no).cloned())
            .collect()
    }

    fn surface_count(&self) -> usize {
        self.surface_order.len()
    }
}

impl ModelWriter for MemoryStore {
    fn set_material(&mut self, material: ForeignMaterial) -> Result<()> {
        self.check_writable()?;
        self.materials.insert(material.no, material);
        Ok(())
    }

    fn set_cross_sections(&mut self, sections: Vec<ForeignCrossSection>) -> Result<()> {
        self.check_writable()?;
        for section in sections {
            self.cross_sections.retain(|c| c.no != section.no);
            self.cross_sections.push(section);
        }
        Ok(())
    }

    fn set_nodal_supports(&mut self, supports: Vec<ForeignNodalSupport>) -> Result<()> {
        self.check_writable()?;
        for support in supports {
            self.nodal_supports.retain(|s| s.no != support.no);
            self.nodal_supports.push(support);
        }
        Ok(())
    }
}

/// Hands out 1, 2, 3, ... per table
#[derive(Debug, Default, Clone)]
pub struct SequentialAllocator {
    last: FxHashMap<EntityKind, u32>,
}

impl SequentialAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every number up to `highest` as taken
    pub fn reserve(&mut self, kind: EntityKind, highest: Option<u32>) {
        if let Some(highest) = highest {
            let last = self.last.entry(kind).or_default();
            *last = (*last).max(highest);
        }
    }
}

impl IdAllocator for SequentialAllocator {
    fn next_id(&mut self, kind: EntityKind) -> Result<u32> {
        let last = self.last.entry(kind).or_default();
        let next = last
            .checked_add(1)
            .ok_or_else(|| ConvertError::store(format!("no {} numbers left", kind)))?;
        *last = next;
        Ok(next)
    }
}
