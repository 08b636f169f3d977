// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Batch export of sections and supports
//!
//! Each batch allocates one foreign number per item, converts every item and
//! writes the whole batch with a single store request. Conversion problems
//! are recorded as diagnostics and never stop the batch; only a failed
//! store write is returned as an error.

use crate::constraint::constraint_to_foreign;
use crate::section::section_to_foreign;
use femlink_model::{
    Constraint6Dof, CrossSectionNo, Diagnostic, DiagnosticKind, Diagnostics, DofMode, EntityKind,
    IdAllocator, MaterialNo, ModelWriter, NodeNo, Result, SectionProperty, Severity, SupportNo,
};

/// Write cross-sections, returning the number given to each, in order
pub fn push_sections(
    writer: &mut dyn ModelWriter,
    allocator: &mut dyn IdAllocator,
    sections: &[(SectionProperty, MaterialNo)],
    diagnostics: &mut Diagnostics,
) -> Result<Vec<CrossSectionNo>> {
    if sections.is_empty() {
        return Ok(Vec::new());
    }

    let mut numbers = Vec::with_capacity(sections.len());
    let mut records = Vec::with_capacity(sections.len());
    for (section, material_no) in sections {
        let no = CrossSectionNo(allocator.next_id(EntityKind::CrossSection)?);
        numbers.push(no);
        records.push(section_to_foreign(section, no, *material_no, diagnostics));
    }

    writer.set_cross_sections(records)?;
    tracing::info!(count = numbers.len(), "Cross-sections written");
    Ok(numbers)
}

/// Write one nodal support per (constraint, node) pair
pub fn push_supports(
    writer: &mut dyn ModelWriter,
    allocator: &mut dyn IdAllocator,
    supports: &[(Constraint6Dof, NodeNo)],
    diagnostics: &mut Diagnostics,
) -> Result<Vec<SupportNo>> {
    if supports.is_empty() {
        return Ok(Vec::new());
    }

    let mut numbers = Vec::with_capacity(supports.len());
    let mut records = Vec::with_capacity(supports.len());
    for (constraint, node_no) in supports {
        let no = SupportNo(allocator.next_id(EntityKind::NodalSupport)?);
        numbers.push(no);
        if has_negative_spring(constraint) {
            diagnostics.push(
                Diagnostic::new(
                    Severity::Warning,
                    DiagnosticKind::UnsupportedVariant,
                    "negative spring stiffness written as is, may read back as fixed",
                )
                .about(no),
            );
        }
        records.push(constraint_to_foreign(constraint, no, *node_no));
    }

    writer.set_nodal_supports(records)?;
    tracing::info!(count = numbers.len(), "Nodal supports written");
    Ok(numbers)
}

fn has_negative_spring(constraint: &Constraint6Dof) -> bool {
    constraint
        .dofs()
        .iter()
        .any(|dof| matches!(dof, DofMode::Spring(k) if *k < 0.0))
}
