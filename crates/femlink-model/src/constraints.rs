// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Six degree-of-freedom constraints

use serde::{Deserialize, Serialize};

/// State of one degree of freedom
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum DofMode {
    #[default]
    Free,
    Fixed,
    /// Elastic restraint with the given stiffness
    Spring(f64),
}

/// Restraint of 3 translations and 3 rotations
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraint6Dof {
    pub name: String,
    pub translation_x: DofMode,
    pub translation_y: DofMode,
    pub translation_z: DofMode,
    pub rotation_x: DofMode,
    pub rotation_y: DofMode,
    pub rotation_z: DofMode,
}

impl Constraint6Dof {
    /// All six DOFs fixed
    pub fn fixed(name: impl Into<String>) -> Self {
        Self::uniform(name, DofMode::Fixed, DofMode::Fixed)
    }

    /// Translations fixed, rotations free
    pub fn pinned(name: impl Into<String>) -> Self {
        Self::uniform(name, DofMode::Fixed, DofMode::Free)
    }

    fn uniform(name: impl Into<String>, translation: DofMode, rotation: DofMode) -> Self {
        Self {
            name: name.into(),
            translation_x: translation,
            translation_y: translation,
            translation_z: translation,
            rotation_x: rotation,
            rotation_y: rotation,
            rotation_z: rotation,
        }
    }

    /// DOFs in order tx, ty, tz, rx, ry, rz
    pub fn dofs(&self) -> [DofMode; 6] {
        [
            self.translation_x,
            self.translation_y,
            self.translation_z,
            self.rotation_x,
            self.rotation_y,
            self.rotation_z,
        ]
    }
}
