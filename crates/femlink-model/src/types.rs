// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed foreign identifiers
//!
//! The foreign model store numbers every record per table. A node 7 and a
//! line 7 are unrelated, so each table gets its own newtype.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Foreign table a numeric ID belongs to
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum EntityKind {
    Node,
    Line,
    Surface,
    Material,
    CrossSection,
    NodalSupport,
}

impl EntityKind {
    /// Human readable table name
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Node => "node",
            EntityKind::Line => "line",
            EntityKind::Surface => "surface",
            EntityKind::Material => "material",
            EntityKind::CrossSection => "cross-section",
            EntityKind::NodalSupport => "nodal support",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common behavior of all typed foreign IDs
pub trait ForeignId: Copy + Eq + std::hash::Hash + From<u32> + Into<u32> {
    /// Table this ID indexes
    const KIND: EntityKind;

    /// Raw foreign number
    fn raw(self) -> u32 {
        self.into()
    }
}

macro_rules! foreign_id {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize, Default,
        )]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", $kind.name(), self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                $name(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl ForeignId for $name {
            const KIND: EntityKind = $kind;
        }
    };
}

foreign_id!(
    /// Foreign node number
    NodeNo,
    EntityKind::Node
);
foreign_id!(
    /// Foreign line number
    LineNo,
    EntityKind::Line
);
foreign_id!(
    /// Foreign surface number
    SurfaceNo,
    EntityKind::Surface
);
foreign_id!(
    /// Foreign material number
    MaterialNo,
    EntityKind::Material
);
foreign_id!(
    /// Foreign cross-section number
    CrossSectionNo,
    EntityKind::CrossSection
);
foreign_id!(
    /// Foreign nodal support number
    SupportNo,
    EntityKind::NodalSupport
);
