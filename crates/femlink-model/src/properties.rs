// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Section and surface properties

use crate::Material;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of cross-section a [`SectionProperty`] was derived from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionVariant {
    Steel,
    Concrete,
    Explicit,
}

impl fmt::Display for SectionVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionVariant::Steel => "steel section",
            SectionVariant::Concrete => "concrete section",
            SectionVariant::Explicit => "explicit section",
        };
        f.write_str(name)
    }
}

/// Beam cross-section constants
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionProperty {
    pub name: String,
    pub variant: SectionVariant,
    /// Axial area [m²]
    pub area: f64,
    /// Torsion constant [m⁴]
    pub j: f64,
    /// Shear area along local y [m²]
    pub asy: f64,
    /// Shear area along local z [m²]
    pub asz: f64,
    /// Bending inertia about local y [m⁴]
    pub iy: f64,
    /// Bending inertia about local z [m⁴]
    pub iz: f64,
}

impl SectionProperty {
    /// Section with all constants zero
    pub fn new(name: impl Into<String>, variant: SectionVariant) -> Self {
        Self {
            name: name.into(),
            variant,
            area: 0.0,
            j: 0.0,
            asy: 0.0,
            asz: 0.0,
            iy: 0.0,
            iz: 0.0,
        }
    }
}

/// Stiffness layout of a panel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SurfaceStiffness {
    ConstantThickness {
        thickness: f64,
    },
    /// Slab with ribs along one axis
    Ribbed {
        thickness: f64,
        total_depth: f64,
        spacing: f64,
        stem_width: f64,
    },
    /// Slab with ribs along both axes
    Waffle {
        thickness: f64,
        total_depth_x: f64,
        total_depth_y: f64,
        spacing_x: f64,
        spacing_y: f64,
        stem_width_x: f64,
        stem_width_y: f64,
    },
    /// Load distribution only, no physical stiffness
    LoadingPanel,
    /// Any layout this layer has no mapping for, by type name
    Unknown(String),
}

impl SurfaceStiffness {
    pub fn type_name(&self) -> &str {
        match self {
            SurfaceStiffness::ConstantThickness { .. } => "ConstantThickness",
            SurfaceStiffness::Ribbed { .. } => "Ribbed",
            SurfaceStiffness::Waffle { .. } => "Waffle",
            SurfaceStiffness::LoadingPanel => "LoadingPanel",
            SurfaceStiffness::Unknown(name) => name,
        }
    }
}

/// Surface property of a panel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceProperty {
    pub name: String,
    pub stiffness: SurfaceStiffness,
    /// `None` when the foreign material has no domain counterpart
    pub material: Option<Material>,
}

impl SurfaceProperty {
    pub fn new(stiffness: SurfaceStiffness, material: Option<Material>) -> Self {
        Self {
            name: String::new(),
            stiffness,
            material,
        }
    }

    pub fn constant_thickness(thickness: f64, material: Option<Material>) -> Self {
        Self::new(SurfaceStiffness::ConstantThickness { thickness }, material)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
