// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-batch memo of mapped materials

use femlink_model::{Material, MaterialNo};
use rustc_hash::FxHashMap;

/// Outcome of looking up and mapping one foreign material
#[derive(Clone, Debug, PartialEq)]
pub enum MaterialLookup {
    Mapped(Material),
    /// Record exists, its category has no structural counterpart
    Unsupported,
    /// No record with that number
    Missing,
}

impl MaterialLookup {
    /// The mapped material, if any
    pub fn material(self) -> Option<Material> {
        match self {
            MaterialLookup::Mapped(material) => Some(material),
            MaterialLookup::Unsupported | MaterialLookup::Missing => None,
        }
    }
}

/// Materials already looked up during one batch, keyed by foreign number
///
/// Unsupported and missing materials are remembered too so they are not
/// fetched again. A cache is created by a batch call and dropped with it.
#[derive(Debug, Default)]
pub struct BatchCache {
    materials: FxHashMap<MaterialNo, MaterialLookup>,
    hits: usize,
}

impl BatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached lookup, `None` if the material was never looked up
    pub fn material(&mut self, no: MaterialNo) -> Option<MaterialLookup> {
        let cached = self.materials.get(&no).cloned();
        if cached.is_some() {
            self.hits += 1;
        }
        cached
    }

    pub fn insert_material(&mut self, no: MaterialNo, lookup: MaterialLookup) {
        self.materials.insert(no, lookup);
    }

    /// Number of lookups answered from the cache
    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
