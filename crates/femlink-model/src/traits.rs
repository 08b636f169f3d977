// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Write-side collaborators of the foreign model store

use crate::{EntityKind, ForeignCrossSection, ForeignMaterial, ForeignNodalSupport, Result};

/// Write access to the foreign model store
pub trait ModelWriter {
    /// Create or overwrite one material
    ///
    /// # Arguments
    /// * `material` - The record to write, keyed by its `no`
    ///
    /// # Returns
    /// `Ok(())` on success, `ConvertError::Store` if the store rejects it
    fn set_material(&mut self, material: ForeignMaterial) -> Result<()>;

    /// Create or overwrite a batch of cross-sections in one request
    ///
    /// # Arguments
    /// * `sections` - The records to write, each keyed by its `no`
    ///
    /// # Returns
    /// `Ok(())` if the whole batch was written, `ConvertError::Store` otherwise
    fn set_cross_sections(&mut self, sections: Vec<ForeignCrossSection>) -> Result<()>;

    /// Create or overwrite a batch of nodal supports in one request
    ///
    /// # Arguments
    /// * `supports` - The records to write, each keyed by its `no`
    ///
    /// # Returns
    /// `Ok(())` if the whole batch was written, `ConvertError::Store` otherwise
    fn set_nodal_supports(&mut self, supports: Vec<ForeignNodalSupport>) -> Result<()>;
}

/// Source of free foreign numbers
///
/// Numbers are per table; allocating a node number does not consume a
/// material number.
pub trait IdAllocator {
    /// Next unused number in the given table
    ///
    /// # Arguments
    /// * `kind` - The table to allocate from
    ///
    /// # Returns
    /// The number, or `ConvertError::Store` once the table has run out
    fn next_id(&mut self, kind: EntityKind) -> Result<u32>;
}
