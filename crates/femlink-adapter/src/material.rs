// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Foreign material → structural material

use femlink_model::{ForeignMaterial, Material, MaterialCategory, Timber, Vector};

/// Damping ratio given to every timber read from the foreign store
pub const TIMBER_DAMPING_RATIO: f64 = 0.05;

/// Category a foreign material declares
///
/// Records without a declared type are `Undefined`.
pub fn classify(material: &ForeignMaterial) -> MaterialCategory {
    material
        .declared_type()
        .map(MaterialCategory::parse)
        .unwrap_or(MaterialCategory::Undefined)
}

/// Convert a foreign material
///
/// Steel, concrete and aluminium keep only their name; their constants are
/// the domain defaults. Timber takes each foreign scalar and repeats it on
/// all three axes, so the result is isotropic in value even though it is an
/// orthotropic material. Rebar, tendon, glass, cable and undefined materials
/// have no domain counterpart and yield `None`.
///
/// The result carries the foreign number as its cross-reference.
pub fn material_from_foreign(material: &ForeignMaterial) -> Option<Material> {
    let name = material.name();

    let result = match classify(material) {
        MaterialCategory::Steel => Material::steel(name),
        MaterialCategory::Concrete => Material::concrete(name),
        MaterialCategory::Aluminium => Material::aluminium(name),
        MaterialCategory::Timber => Material::timber(
            name,
            Timber {
                youngs_modulus: Vector::splat(material.elasticity_modulus),
                poissons_ratio: Vector::splat(material.poisson_ratio),
                shear_modulus: Vector::splat(material.shear_modulus),
                thermal_expansion: Vector::splat(material.thermal_expansion),
                density: material.specific_weight,
                damping_ratio: TIMBER_DAMPING_RATIO,
            },
        ),
        MaterialCategory::Rebar
        | MaterialCategory::Tendon
        | MaterialCategory::Glass
        | MaterialCategory::Cable
        | MaterialCategory::Undefined => return None,
    };

    Some(result.with_foreign_id(material.no))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use femlink_model::{MaterialNo, MaterialProperties, Steel};

    #[test]
    fn test_steel_keeps_name_and_number() {
        let foreign = ForeignMaterial::new(MaterialNo(7), "S355", MaterialCategory::Steel);
        let material = material_from_foreign(&foreign).unwrap();

        assert_eq!(material.category(), MaterialCategory::Steel);
        assert_eq!(material.name, "S355");
        assert_eq!(material.foreign_id, Some(MaterialNo(7)));
        assert_eq!(material.properties, MaterialProperties::Steel(Steel::default()));
    }

    #[test]
    fn test_concrete_and_aluminium() {
        let concrete = ForeignMaterial::new(MaterialNo(1), "C30/37", MaterialCategory::Concrete);
        let aluminium = ForeignMaterial::new(MaterialNo(2), "EN AW-6082", MaterialCategory::Aluminium);

        assert_eq!(
            material_from_foreign(&concrete).unwrap().category(),
            MaterialCategory::Concrete
        );
        assert_eq!(
            material_from_foreign(&aluminium).unwrap().category(),
            MaterialCategory::Aluminium
        );
    }

    #[test]
    fn test_timber_replicates_scalars() {
        let foreign = ForeignMaterial {
            no: MaterialNo(4),
            text_id: "NameID|GL24h@TypeID|TIMBER".into(),
            elasticity_modulus: 11.5e9,
            shear_modulus: 0.65e9,
            poisson_ratio: 0.0,
            specific_weight: 4.2e3,
            thermal_expansion: 5.0e-6,
            ..Default::default()
        };
        let material = material_from_foreign(&foreign).unwrap();

        let MaterialProperties::Timber(timber) = material.properties else {
            panic!("expected timber, got {:?}", material.properties);
        };
        assert_eq!(timber.youngs_modulus, Vector::new(11.5e9, 11.5e9, 11.5e9));
        assert_eq!(timber.shear_modulus, Vector::splat(0.65e9));
        assert_eq!(timber.thermal_expansion, Vector::splat(5.0e-6));
        assert_relative_eq!(timber.density, 4.2e3);
        assert_relative_eq!(timber.damping_ratio, 0.05);
        assert_eq!(material.foreign_id, Some(MaterialNo(4)));
    }

    #[test]
    fn test_unsupported_categories_yield_nothing() {
        for category in [
            MaterialCategory::Rebar,
            MaterialCategory::Tendon,
            MaterialCategory::Glass,
            MaterialCategory::Cable,
            MaterialCategory::Undefined,
        ] {
            let foreign = ForeignMaterial::new(MaterialNo(1), "X", category);
            assert!(material_from_foreign(&foreign).is_none(), "{category}");
        }
    }

    #[test]
    fn test_undeclared_type_is_undefined() {
        let foreign = ForeignMaterial {
            text_id: "Mystery".into(),
            ..Default::default()
        };
        assert_eq!(classify(&foreign), MaterialCategory::Undefined);
        assert!(material_from_foreign(&foreign).is_none());
    }

    #[test]
    fn test_explicit_type_field_wins() {
        let foreign = ForeignMaterial {
            text_id: "NameID|Float glass@TypeID|STEEL".into(),
            material_type: Some("Glass".into()),
            ..Default::default()
        };
        assert_eq!(classify(&foreign), MaterialCategory::Glass);
    }
}
