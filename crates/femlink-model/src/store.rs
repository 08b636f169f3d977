// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read access to the foreign model store

use crate::{
    ConvertError, EntityKind, ForeignLine, ForeignMaterial, ForeignNode, ForeignSurface,
    ForeignSurfaceStiffness, LineNo, MaterialNo, NodeNo, SurfaceNo,
};

/// Lookup of foreign records by number
///
/// This is the only way the adapter reaches the foreign model. Each call is
/// a synchronous request against the foreign session; implementations decide
/// how records are fetched and whether they are cached.
///
/// # Example
///
/// ```ignore
/// use femlink_model::{ModelStore, SurfaceNo};
///
/// fn boundary_of(store: &dyn ModelStore, no: SurfaceNo) -> Option<String> {
///     store.surface(no).map(|s| s.boundary_line_list)
/// }
/// ```
pub trait ModelStore {
    /// Get surface by number
    ///
    /// # Arguments
    /// * `no` - The foreign surface number
    ///
    /// # Returns
    /// `Some(ForeignSurface)` if found, `None` otherwise
    fn surface(&self, no: SurfaceNo) -> Option<ForeignSurface>;

    /// Get line by number
    ///
    /// # Arguments
    /// * `no` - The foreign line number
    ///
    /// # Returns
    /// `Some(ForeignLine)` with its encoded node list if found, `None` otherwise
    fn line(&self, no: LineNo) -> Option<ForeignLine>;

    /// Get node by number
    ///
    /// # Arguments
    /// * `no` - The foreign node number
    ///
    /// # Returns
    /// `Some(ForeignNode)` with its coordinates if found, `None` otherwise
    fn node(&self, no: NodeNo) -> Option<ForeignNode>;

    /// Get material by number
    ///
    /// # Arguments
    /// * `no` - The foreign material number
    ///
    /// # Returns
    /// `Some(ForeignMaterial)` if found, `None` otherwise
    fn material(&self, no: MaterialNo) -> Option<ForeignMaterial>;

    /// Get the extended stiffness record of an orthotropic surface
    ///
    /// # Arguments
    /// * `no` - The foreign number of the surface the record belongs to
    ///
    /// # Returns
    /// `Some(ForeignSurfaceStiffness)` if the surface has one, `None` otherwise
    fn surface_stiffness(&self, no: SurfaceNo) -> Option<ForeignSurfaceStiffness>;

    /// All surfaces in store order
    ///
    /// # Returns
    /// Every surface record, empty if the model has none
    fn surfaces(&self) -> Vec<ForeignSurface>;

    /// Number of surfaces in the model
    fn surface_count(&self) -> usize {
        self.surfaces().len()
    }
}

/// Extension methods for ModelStore
pub trait ModelStoreExt: ModelStore {
    /// Get surface or return error
    fn surface_or_err(&self, no: SurfaceNo) -> crate::Result<ForeignSurface> {
        self.surface(no)
            .ok_or(ConvertError::not_found(EntityKind::Surface, no))
    }

    /// Get line or return error
    fn line_or_err(&self, no: LineNo) -> crate::Result<ForeignLine> {
        self.line(no).ok_or(ConvertError::not_found(EntityKind::Line, no))
    }

    /// Get node or return error
    fn node_or_err(&self, no: NodeNo) -> crate::Result<ForeignNode> {
        self.node(no).ok_or(ConvertError::not_found(EntityKind::Node, no))
    }

    /// Get material or return error
    fn material_or_err(&self, no: MaterialNo) -> crate::Result<ForeignMaterial> {
        self.material(no)
            .ok_or(ConvertError::not_found(EntityKind::Material, no))
    }

    /// Get orthotropic stiffness or return error
    fn surface_stiffness_or_err(&self, no: SurfaceNo) -> crate::Result<ForeignSurfaceStiffness> {
        self.surface_stiffness(no)
            .ok_or(ConvertError::not_found(EntityKind::Surface, no))
    }
}

// Blanket implementation for all ModelStore types
impl<T: ModelStore + ?Sized> ModelStoreExt for T {}
