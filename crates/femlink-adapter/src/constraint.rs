// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 6-DOF constraint → foreign nodal support

use crate::id_range;
use femlink_model::{Constraint6Dof, DofMode, ForeignNodalSupport, NodeNo, SupportNo};

/// Foreign constant for a free DOF
pub const FREE: f64 = 0.0;

/// Foreign constant for a rigid DOF, distinct from any spring stiffness
pub const FIXED: f64 = -1.0;

/// Foreign constant for one DOF
///
/// Spring stiffness is passed through unconverted; translations are in N/m
/// and rotations in Nm/rad on both sides.
pub fn dof_constant(mode: DofMode) -> f64 {
    match mode {
        DofMode::Free => FREE,
        DofMode::Fixed => FIXED,
        DofMode::Spring(stiffness) => stiffness,
    }
}

/// Convert a constraint into a nodal support on one node
pub fn constraint_to_foreign(
    constraint: &Constraint6Dof,
    support_no: SupportNo,
    node_no: NodeNo,
) -> ForeignNodalSupport {
    ForeignNodalSupport {
        no: support_no,
        node_list: id_range::encode_ids(&[node_no]),
        support_constant_x: dof_constant(constraint.translation_x),
        support_constant_y: dof_constant(constraint.translation_y),
        support_constant_z: dof_constant(constraint.translation_z),
        restraint_constant_x: dof_constant(constraint.rotation_x),
        restraint_constant_y: dof_constant(constraint.rotation_y),
        restraint_constant_z: dof_constant(constraint.rotation_z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dof_sentinels() {
        assert_eq!(dof_constant(DofMode::Fixed), -1.0);
        assert_eq!(dof_constant(DofMode::Free), 0.0);
        assert_eq!(dof_constant(DofMode::Spring(500.0)), 500.0);
        assert_eq!(dof_constant(DofMode::Spring(0.0)), 0.0);
    }

    #[test]
    fn test_each_dof_maps_independently() {
        let constraint = Constraint6Dof {
            name: "mixed".into(),
            translation_x: DofMode::Fixed,
            translation_y: DofMode::Free,
            translation_z: DofMode::Spring(500.0),
            rotation_x: DofMode::Spring(1.5e6),
            rotation_y: DofMode::Fixed,
            rotation_z: DofMode::Free,
        };
        let support = constraint_to_foreign(&constraint, SupportNo(2), NodeNo(14));

        assert_eq!(support.no, SupportNo(2));
        assert_eq!(support.node_list, "14");
        assert_eq!(support.support_constant_x, -1.0);
        assert_eq!(support.support_constant_y, 0.0);
        assert_eq!(support.support_constant_z, 500.0);
        assert_eq!(support.restraint_constant_x, 1.5e6);
        assert_eq!(support.restraint_constant_y, -1.0);
        assert_eq!(support.restraint_constant_z, 0.0);
    }

    #[test]
    fn test_fully_fixed() {
        let support = constraint_to_foreign(&Constraint6Dof::fixed("fix"), SupportNo(1), NodeNo(1));
        assert_eq!(support.support_constant_x, FIXED);
        assert_eq!(support.restraint_constant_z, FIXED);
    }
}
