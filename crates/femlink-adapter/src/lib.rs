// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Femlink Adapter - structural model ↔ finite-element store conversion
//!
//! This crate reads panels out of a foreign finite-element model store and
//! writes sections and supports back into it. It works against the traits
//! defined in `femlink-model`, so any store implementing them can be used.
//!
//! # Features
//!
//! - **ID list tokens** parsed with `nom` combinators (`"1,3,5-9"`)
//! - **Geometry resolution** of surface → line → node with a node memo
//! - **Material, section, constraint and stiffness mappers**
//! - **Partial failure** - problems are collected as diagnostics, one bad
//!   panel never aborts a batch
//!
//! # Example
//!
//! ```ignore
//! use femlink_adapter::{MemoryStore, PanelReader, ReadOptions};
//!
//! let store: MemoryStore = load_model();
//! let batch = PanelReader::with_options(&store, ReadOptions::from_env()).read_all_panels();
//!
//! println!("{} panels, {} diagnostics", batch.panels.len(), batch.diagnostics.len());
//! ```

mod cache;
mod config;
mod constraint;
pub mod export;
mod geometry;
pub mod id_range;
mod material;
mod memory;
mod panel;
mod section;
mod surface_property;

pub use cache::{BatchCache, MaterialLookup};
pub use config::ReadOptions;
pub use constraint::{constraint_to_foreign, dof_constant, FIXED, FREE};
pub use export::{push_sections, push_supports};
pub use geometry::{is_closed_loop, node_from_foreign, GeometryResolver};
pub use material::{classify, material_from_foreign, TIMBER_DAMPING_RATIO};
pub use memory::{MemoryStore, SequentialAllocator};
pub use panel::{read_panels, PanelBatch, PanelReader};
pub use section::section_to_foreign;
pub use surface_property::{surface_property_from_foreign, surface_property_to_foreign};

/// Read every panel from a store with default options
pub fn read_all_panels(store: &dyn femlink_model::ModelStore) -> PanelBatch {
    PanelReader::new(store).read_all_panels()
}
