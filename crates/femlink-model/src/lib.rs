// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! femlink Model - Structural domain types and foreign store abstractions
//!
//! This crate defines both sides of the interchange between a vendor-neutral
//! structural model and a third-party finite-element tool:
//!
//! - the structural domain: [`Node`], [`Edge`], [`Panel`], [`Material`],
//!   [`SectionProperty`], [`SurfaceProperty`], [`Constraint6Dof`]
//! - the foreign records as the tool's API exposes them: [`ForeignSurface`],
//!   [`ForeignLine`], [`ForeignNode`], [`ForeignMaterial`], ...
//! - typed foreign numbers ([`NodeNo`], [`LineNo`], [`SurfaceNo`], ...)
//! - the collaborator traits the adapter talks through: [`ModelStore`],
//!   [`ModelWriter`], [`IdAllocator`]
//! - the [`Diagnostics`] accumulator for non-fatal problems
//!
//! # Example
//!
//! ```ignore
//! use femlink_model::{ModelStore, ModelStoreExt, SurfaceNo};
//!
//! let store: &dyn ModelStore = open_session();
//! let surface = store.surface_or_err(SurfaceNo(1))?;
//! println!("Boundary lines: {}", surface.boundary_line_list);
//! ```

pub mod constraints;
pub mod diagnostics;
pub mod elements;
pub mod error;
pub mod foreign;
pub mod geometry;
pub mod materials;
pub mod properties;
pub mod store;
pub mod traits;
pub mod types;

// Re-export all public types
pub use constraints::*;
pub use diagnostics::*;
pub use elements::*;
pub use error::*;
pub use foreign::*;
pub use geometry::*;
pub use materials::*;
pub use properties::*;
pub use store::*;
pub use traits::*;
pub use types::*;
