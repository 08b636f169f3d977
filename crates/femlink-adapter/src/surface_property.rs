// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Surface property ↔ foreign surface stiffness

use femlink_model::{
    Diagnostic, DiagnosticKind, Diagnostics, ForeignSurfaceStiffness, GeometricProperties,
    Material, OrthotropyType, Severity, SurfaceProperty, SurfaceStiffness,
};

/// Convert a surface property into a foreign stiffness record
///
/// Loading panels carry no stiffness and produce an empty record with a
/// warning; so does any layout without a mapping. This never fails, so one
/// unmappable panel cannot abort a batch.
pub fn surface_property_to_foreign(
    property: &SurfaceProperty,
    diagnostics: &mut Diagnostics,
) -> ForeignSurfaceStiffness {
    match &property.stiffness {
        SurfaceStiffness::LoadingPanel => {
            diagnostics.push(unsupported(
                property,
                "loading panels have no stiffness to export",
            ));
            ForeignSurfaceStiffness::default()
        }
        SurfaceStiffness::ConstantThickness { thickness } => ForeignSurfaceStiffness {
            orthotropy: Some(OrthotropyType::ConstantThickness),
            thickness: *thickness,
            geometry: GeometricProperties::default(),
        },
        SurfaceStiffness::Ribbed {
            thickness,
            total_depth,
            spacing,
            stem_width,
        } => ForeignSurfaceStiffness {
            orthotropy: Some(OrthotropyType::UnidirectionalRibs),
            thickness: *thickness,
            geometry: GeometricProperties {
                height: *total_depth,
                spacing: *spacing,
                width: *stem_width,
                ..Default::default()
            },
        },
        SurfaceStiffness::Waffle {
            thickness,
            total_depth_x,
            total_depth_y,
            spacing_x,
            spacing_y,
            stem_width_x,
            stem_width_y,
        } => ForeignSurfaceStiffness {
            orthotropy: Some(OrthotropyType::BidirectionalRibs),
            thickness: *thickness,
            geometry: GeometricProperties {
                height_x: *total_depth_x,
                height_y: *total_depth_y,
                spacing_x: *spacing_x,
                spacing_y: *spacing_y,
                width_x: *stem_width_x,
                width_y: *stem_width_y,
                ..Default::default()
            },
        },
        SurfaceStiffness::Unknown(type_name) => {
            diagnostics.push(unsupported(
                property,
                format!("no stiffness mapping for surface property type {}", type_name),
            ));
            ForeignSurfaceStiffness::default()
        }
    }
}

/// Convert a foreign stiffness record back into a surface property
///
/// Inverse of [`surface_property_to_foreign`] for constant thickness,
/// unidirectional ribs and bidirectional ribs. Other orthotropy types, and
/// records without one, come back as an unrecorded warning so the caller can
/// name the surface it belongs to.
pub fn surface_property_from_foreign(
    stiffness: &ForeignSurfaceStiffness,
    material: Option<Material>,
) -> std::result::Result<SurfaceProperty, Diagnostic> {
    let geometry = &stiffness.geometry;

    let layout = match stiffness.orthotropy {
        Some(OrthotropyType::ConstantThickness) => SurfaceStiffness::ConstantThickness {
            thickness: stiffness.thickness,
        },
        Some(OrthotropyType::UnidirectionalRibs) => SurfaceStiffness::Ribbed {
            thickness: stiffness.thickness,
            total_depth: geometry.height,
            spacing: geometry.spacing,
            stem_width: geometry.width,
        },
        Some(OrthotropyType::BidirectionalRibs) => SurfaceStiffness::Waffle {
            thickness: stiffness.thickness,
            total_depth_x: geometry.height_x,
            total_depth_y: geometry.height_y,
            spacing_x: geometry.spacing_x,
            spacing_y: geometry.spacing_y,
            stem_width_x: geometry.width_x,
            stem_width_y: geometry.width_y,
        },
        Some(
            other @ (OrthotropyType::EffectiveThickness
            | OrthotropyType::StiffnessMatrix
            | OrthotropyType::TrapezoidalSheet
            | OrthotropyType::HollowCoreSlab
            | OrthotropyType::Grillage),
        ) => {
            return Err(Diagnostic::new(
                Severity::Warning,
                DiagnosticKind::UnsupportedVariant,
                format!("could not create surface property of orthotropy type {}", other),
            ));
        }
        None => {
            return Err(Diagnostic::new(
                Severity::Warning,
                DiagnosticKind::UnsupportedVariant,
                "orthotropic stiffness record has no orthotropy type",
            ));
        }
    };

    Ok(SurfaceProperty::new(layout, material))
}

fn unsupported(property: &SurfaceProperty, message: impl Into<String>) -> Diagnostic {
    let diagnostic = Diagnostic::new(
        Severity::Warning,
        DiagnosticKind::UnsupportedVariant,
        message,
    );
    if property.name.is_empty() {
        diagnostic
    } else {
        diagnostic.about(&property.name)
    }
}
