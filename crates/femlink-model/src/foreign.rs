// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Records of the foreign finite-element model store
//!
//! These mirror the flat records the foreign API hands out. References to
//! other records are either typed numbers or ID list strings such as
//! `"1,3,5-9"`.

use crate::{CrossSectionNo, LineNo, MaterialCategory, MaterialNo, NodeNo, SupportNo, SurfaceNo};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Foreign node
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForeignNode {
    pub no: NodeNo,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Foreign line, a polyline through the listed nodes
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForeignLine {
    pub no: LineNo,
    /// Node IDs in line order, e.g. `"1,2,3"`
    pub node_list: String,
}

/// Geometry type of a foreign surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceGeometryType {
    #[default]
    Plane,
    Quadrangle,
    Rotated,
    Pipe,
    Trimmed,
    Nurbs,
}

/// Stiffness type discriminant of a foreign surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceStiffnessType {
    #[default]
    Standard,
    Orthotropic,
    Glass,
    Laminate,
    Rigid,
    Membrane,
    WithoutTension,
    Null,
}

impl fmt::Display for SurfaceStiffnessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Foreign surface
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForeignSurface {
    pub no: SurfaceNo,
    /// Boundary line IDs in loop order, e.g. `"10,11"` or `"1-4"`
    pub boundary_line_list: String,
    pub material_no: MaterialNo,
    pub geometry_type: SurfaceGeometryType,
    pub stiffness_type: SurfaceStiffnessType,
    /// Constant thickness, meaningful for standard stiffness only
    pub thickness: f64,
}

/// Orthotropy layout of an extended surface stiffness record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrthotropyType {
    ConstantThickness,
    EffectiveThickness,
    StiffnessMatrix,
    UnidirectionalRibs,
    BidirectionalRibs,
    TrapezoidalSheet,
    HollowCoreSlab,
    Grillage,
}

impl fmt::Display for OrthotropyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Rib geometry of an orthotropic surface
///
/// Unidirectional ribs use the plain fields, bidirectional ribs the X/Y ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometricProperties {
    pub height: f64,
    pub spacing: f64,
    pub width: f64,
    pub height_x: f64,
    pub height_y: f64,
    pub spacing_x: f64,
    pub spacing_y: f64,
    pub width_x: f64,
    pub width_y: f64,
}

/// Extended stiffness record of an orthotropic surface
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForeignSurfaceStiffness {
    /// `None` on an empty record
    pub orthotropy: Option<OrthotropyType>,
    pub thickness: f64,
    pub geometry: GeometricProperties,
}

impl ForeignSurfaceStiffness {
    /// Whether nothing was mapped into this record
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Foreign material
///
/// The text ID uses the foreign `Key|Value@Key|Value` layout, for example
/// `NameID|S355@TypeID|STEEL@NormID|EN 1993-1-1`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForeignMaterial {
    pub no: MaterialNo,
    pub text_id: String,
    pub description: String,
    /// Declared type, takes precedence over the `TypeID` text segment
    pub material_type: Option<String>,
    pub elasticity_modulus: f64,
    pub shear_modulus: f64,
    pub poisson_ratio: f64,
    pub specific_weight: f64,
    pub thermal_expansion: f64,
}

impl ForeignMaterial {
    /// Record with a text ID built from name and category
    pub fn new(no: MaterialNo, name: &str, category: MaterialCategory) -> Self {
        Self {
            no,
            text_id: format!("NameID|{}@TypeID|{}", name, category.name().to_uppercase()),
            ..Self::default()
        }
    }

    /// Value of one `Key|Value` segment of the text ID
    pub fn text_field(&self, key: &str) -> Option<&str> {
        self.text_id.split('@').find_map(|segment| {
            let (k, v) = segment.split_once('|')?;
            (k.trim() == key).then(|| v.trim())
        })
    }

    /// Material name, the whole text ID when it has no `NameID` segment
    pub fn name(&self) -> &str {
        self.text_field("NameID").unwrap_or(self.text_id.trim())
    }

    /// Declared material type name, if any
    pub fn declared_type(&self) -> Option<&str> {
        self.material_type
            .as_deref()
            .or_else(|| self.text_field("TypeID"))
    }
}

/// Foreign beam cross-section
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForeignCrossSection {
    pub no: CrossSectionNo,
    pub material_no: MaterialNo,
    pub text_id: String,
    pub description: String,
    pub axial_area: f64,
    pub torsion_moment: f64,
    pub shear_area_y: f64,
    pub shear_area_z: f64,
    pub bending_moment_y: f64,
    pub bending_moment_z: f64,
}

/// Foreign nodal support
///
/// Each constant is `0` for free, `-1` for fixed, or a spring stiffness.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForeignNodalSupport {
    pub no: SupportNo,
    /// Supported node IDs
    pub node_list: String,
    pub support_constant_x: f64,
    pub support_constant_y: f64,
    pub support_constant_z: f64,
    pub restraint_constant_x: f64,
    pub restraint_constant_y: f64,
    pub restraint_constant_z: f64,
}
