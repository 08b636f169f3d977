// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Section property → foreign cross-section

use femlink_model::{
    CrossSectionNo, Diagnostic, DiagnosticKind, Diagnostics, ForeignCrossSection, MaterialNo,
    SectionProperty, SectionVariant, Severity,
};

/// Convert a section property into a foreign cross-section
///
/// The scalar constants are copied for every variant. Concrete and explicit
/// sections have no further mapping; they still produce a valid record and
/// leave a warning behind.
pub fn section_to_foreign(
    section: &SectionProperty,
    section_no: CrossSectionNo,
    material_no: MaterialNo,
    diagnostics: &mut Diagnostics,
) -> ForeignCrossSection {
    let record = ForeignCrossSection {
        no: section_no,
        material_no,
        text_id: section.name.clone(),
        description: format!("{} | no standard/norm", section.name),
        axial_area: section.area,
        torsion_moment: section.j,
        shear_area_y: section.asy,
        shear_area_z: section.asz,
        bending_moment_y: section.iy,
        bending_moment_z: section.iz,
    };

    match section.variant {
        SectionVariant::Steel => {}
        SectionVariant::Concrete | SectionVariant::Explicit => diagnostics.push(
            Diagnostic::new(
                Severity::Warning,
                DiagnosticKind::UnsupportedVariant,
                format!(
                    "only steel sections are mapped, {} '{}' written with constants only",
                    section.variant, section.name
                ),
            )
            .about(section_no),
        ),
    }

    record
}
