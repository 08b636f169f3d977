// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structural materials
//!
//! [`MaterialCategory`] is the closed set of categories a foreign material
//! can declare. Only some of them map onto a [`Material`]; the others have
//! no domain representation and are dropped by the mapper.

use crate::{MaterialNo, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Material category declared by a foreign material record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialCategory {
    Steel,
    Concrete,
    Aluminium,
    Timber,
    Rebar,
    Tendon,
    Glass,
    Cable,
    Undefined,
}

impl MaterialCategory {
    /// Parse a declared type name, case-insensitive
    ///
    /// Unrecognized names are `Undefined`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "STEEL" | "STRUCTURAL STEEL" => MaterialCategory::Steel,
            "CONCRETE" => MaterialCategory::Concrete,
            "ALUMINIUM" | "ALUMINUM" => MaterialCategory::Aluminium,
            "TIMBER" | "WOOD" => MaterialCategory::Timber,
            "REBAR" | "REINFORCING STEEL" => MaterialCategory::Rebar,
            "TENDON" | "PRESTRESSING STEEL" => MaterialCategory::Tendon,
            "GLASS" => MaterialCategory::Glass,
            "CABLE" => MaterialCategory::Cable,
            _ => MaterialCategory::Undefined,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MaterialCategory::Steel => "Steel",
            MaterialCategory::Concrete => "Concrete",
            MaterialCategory::Aluminium => "Aluminium",
            MaterialCategory::Timber => "Timber",
            MaterialCategory::Rebar => "Rebar",
            MaterialCategory::Tendon => "Tendon",
            MaterialCategory::Glass => "Glass",
            MaterialCategory::Cable => "Cable",
            MaterialCategory::Undefined => "Undefined",
        }
    }
}

impl FromStr for MaterialCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Isotropic elastic constants (SI units)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Isotropic {
    /// Young's modulus [Pa]
    pub youngs_modulus: f64,
    pub poissons_ratio: f64,
    /// Thermal expansion coefficient [1/K]
    pub thermal_expansion: f64,
    /// Density [kg/m³]
    pub density: f64,
    pub damping_ratio: f64,
}

/// Steel with yield and ultimate strength
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Steel {
    pub elastic: Isotropic,
    /// Yield stress [Pa]
    pub yield_stress: f64,
    /// Ultimate stress [Pa]
    pub ultimate_stress: f64,
}

impl Default for Steel {
    fn default() -> Self {
        Self {
            elastic: Isotropic {
                youngs_modulus: 210.0e9,
                poissons_ratio: 0.3,
                thermal_expansion: 1.2e-5,
                density: 7850.0,
                damping_ratio: 0.0,
            },
            yield_stress: 235.0e6,
            ultimate_stress: 360.0e6,
        }
    }
}

/// Concrete with characteristic strengths
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Concrete {
    pub elastic: Isotropic,
    /// Cylinder strength [Pa]
    pub cylinder_strength: f64,
    /// Cube strength [Pa]
    pub cube_strength: f64,
}

impl Default for Concrete {
    fn default() -> Self {
        Self {
            elastic: Isotropic {
                youngs_modulus: 33.0e9,
                poissons_ratio: 0.2,
                thermal_expansion: 1.0e-5,
                density: 2550.0,
                damping_ratio: 0.0,
            },
            cylinder_strength: 0.0,
            cube_strength: 0.0,
        }
    }
}

/// Aluminium
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aluminium {
    pub elastic: Isotropic,
}

impl Default for Aluminium {
    fn default() -> Self {
        Self {
            elastic: Isotropic {
                youngs_modulus: 70.0e9,
                poissons_ratio: 0.34,
                thermal_expansion: 2.3e-5,
                density: 2710.0,
                damping_ratio: 0.0,
            },
        }
    }
}

/// Orthotropic timber
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timber {
    pub youngs_modulus: Vector,
    pub poissons_ratio: Vector,
    pub shear_modulus: Vector,
    pub thermal_expansion: Vector,
    pub density: f64,
    pub damping_ratio: f64,
}

/// Physical constants, one variant per supported category
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MaterialProperties {
    Steel(Steel),
    Concrete(Concrete),
    Aluminium(Aluminium),
    Timber(Timber),
}

/// Structural material
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub properties: MaterialProperties,
    /// Foreign material this was read from or written to
    pub foreign_id: Option<MaterialNo>,
}

impl Material {
    /// Steel with default constants
    pub fn steel(name: impl Into<String>) -> Self {
        Self::with_properties(name, MaterialProperties::Steel(Steel::default()))
    }

    /// Concrete with default constants
    pub fn concrete(name: impl Into<String>) -> Self {
        Self::with_properties(name, MaterialProperties::Concrete(Concrete::default()))
    }

    /// Aluminium with default constants
    pub fn aluminium(name: impl Into<String>) -> Self {
        Self::with_properties(name, MaterialProperties::Aluminium(Aluminium::default()))
    }

    pub fn timber(name: impl Into<String>, timber: Timber) -> Self {
        Self::with_properties(name, MaterialProperties::Timber(timber))
    }

    fn with_properties(name: impl Into<String>, properties: MaterialProperties) -> Self {
        Self {
            name: name.into(),
            properties,
            foreign_id: None,
        }
    }

    /// Stamp the foreign cross-reference
    pub fn with_foreign_id(mut self, id: MaterialNo) -> Self {
        self.foreign_id = Some(id);
        self
    }

    pub fn category(&self) -> MaterialCategory {
        match self.properties {
            MaterialProperties::Steel(_) => MaterialCategory::Steel,
            MaterialProperties::Concrete(_) => MaterialCategory::Concrete,
            MaterialProperties::Aluminium(_) => MaterialCategory::Aluminium,
            MaterialProperties::Timber(_) => MaterialCategory::Timber,
        }
    }
}
