// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel assembly from foreign surfaces

use crate::cache::{BatchCache, MaterialLookup};
use crate::config::ReadOptions;
use crate::geometry::{is_closed_loop, GeometryResolver};
use crate::material::{classify, material_from_foreign};
use crate::surface_property::surface_property_from_foreign;
use femlink_model::{
    Diagnostic, DiagnosticKind, Diagnostics, ForeignSurface, Material, MaterialNo, ModelStore,
    ModelStoreExt, Panel, Result, Severity, SurfaceNo, SurfaceProperty, SurfaceStiffnessType,
};
use serde::{Deserialize, Serialize};

/// Panels read in one batch, with everything that went wrong on the way
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelBatch {
    pub panels: Vec<Panel>,
    pub diagnostics: Diagnostics,
}

impl PanelBatch {
    /// Pretty JSON dump, for debugging
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Reads foreign surfaces as structural panels
///
/// Each panel combines the surface's boundary edges, its material and its
/// surface property. Anything that cannot be resolved is left out of the
/// panel and reported; the panel itself is always kept.
///
/// # Example
///
/// ```ignore
/// use femlink_adapter::PanelReader;
///
/// let batch = PanelReader::new(&store).read_all_panels();
/// for d in &batch.diagnostics {
///     eprintln!("{d}");
/// }
/// ```
pub struct PanelReader<'a> {
    store: &'a dyn ModelStore,
    options: ReadOptions,
}

impl<'a> PanelReader<'a> {
    /// Create a reader with default options
    pub fn new(store: &'a dyn ModelStore) -> Self {
        Self::with_options(store, ReadOptions::default())
    }

    pub fn with_options(store: &'a dyn ModelStore, options: ReadOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Read every surface in the store
    pub fn read_all_panels(&self) -> PanelBatch {
        self.read_panels(None)
    }

    /// Read the given surfaces, or all of them for `None`
    ///
    /// Panels come back in request order (store order for `None`). Every
    /// surface found in the store yields a panel, with whatever parts of it
    /// could be resolved; each missing part leaves a diagnostic naming the
    /// surface.
    pub fn read_panels(&self, ids: Option<&[SurfaceNo]>) -> PanelBatch {
        let mut diagnostics = Diagnostics::new();
        let mut cache = BatchCache::new();

        let surfaces: Vec<ForeignSurface> = match ids {
            None => self.store.surfaces(),
            Some(ids) => ids
                .iter()
                .filter_map(|&no| match self.store.surface_or_err(no) {
                    Ok(surface) => Some(surface),
                    Err(err) => {
                        diagnostics.push(
                            Diagnostic::new(
                                Severity::Error,
                                err.diagnostic_kind(),
                                format!("skipped: {}", err),
                            )
                            .about(no),
                        );
                        None
                    }
                })
                .collect(),
        };

        let panels: Vec<Panel> = surfaces
            .iter()
            .map(|surface| self.assemble(surface, &mut cache, &mut diagnostics))
            .collect();

        tracing::info!(
            panels = panels.len(),
            diagnostics = diagnostics.len(),
            material_cache_hits = cache.hits(),
            "Panel batch read"
        );

        PanelBatch {
            panels,
            diagnostics,
        }
    }

    /// Read one surface
    ///
    /// Fails only when the surface itself does not exist.
    pub fn read_panel(&self, no: SurfaceNo, diagnostics: &mut Diagnostics) -> Result<Panel> {
        let surface = self.store.surface_or_err(no)?;
        Ok(self.assemble(&surface, &mut BatchCache::new(), diagnostics))
    }

    fn assemble(
        &self,
        surface: &ForeignSurface,
        cache: &mut BatchCache,
        diagnostics: &mut Diagnostics,
    ) -> Panel {
        tracing::debug!(surface = surface.no.0, "Assembling panel");

        let mut resolver =
            GeometryResolver::new(self.store).with_node_memo(self.options.memoize_nodes);
        let edges = resolver.surface_edges(surface, diagnostics);

        if self.options.check_boundary_closure
            && !is_closed_loop(&edges, self.options.closure_tolerance)
        {
            diagnostics.push(
                Diagnostic::new(
                    Severity::Warning,
                    DiagnosticKind::OpenBoundary,
                    format!(
                        "boundary lines '{}' do not form a closed loop",
                        surface.boundary_line_list
                    ),
                )
                .about(surface.no),
            );
        }

        let material = self.material(surface, cache, diagnostics);
        let property = self.surface_property(surface, material, diagnostics);

        let mut panel = Panel::new(edges, Vec::new(), property);
        panel.foreign_id = Some(surface.no);
        panel
    }

    /// Surface property chosen by the surface's stiffness type
    fn surface_property(
        &self,
        surface: &ForeignSurface,
        material: Option<Material>,
        diagnostics: &mut Diagnostics,
    ) -> Option<SurfaceProperty> {
        match surface.stiffness_type {
            SurfaceStiffnessType::Standard => {
                Some(SurfaceProperty::constant_thickness(surface.thickness, material))
            }
            SurfaceStiffnessType::Orthotropic => match self.store.surface_stiffness(surface.no) {
                Some(stiffness) => match surface_property_from_foreign(&stiffness, material) {
                    Ok(property) => Some(property),
                    Err(diagnostic) => {
                        diagnostics.push(diagnostic.about(surface.no));
                        None
                    }
                },
                None => {
                    diagnostics.push(
                        Diagnostic::new(
                            Severity::Error,
                            DiagnosticKind::MissingReference,
                            "orthotropic surface has no stiffness record",
                        )
                        .about(surface.no),
                    );
                    None
                }
            },
            other @ (SurfaceStiffnessType::Glass
            | SurfaceStiffnessType::Laminate
            | SurfaceStiffnessType::Rigid
            | SurfaceStiffnessType::Membrane
            | SurfaceStiffnessType::WithoutTension
            | SurfaceStiffnessType::Null) => {
                diagnostics.push(
                    Diagnostic::new(
                        Severity::Error,
                        DiagnosticKind::UnsupportedVariant,
                        format!("could not create surface property of type {}", other),
                    )
                    .about(surface.no),
                );
                None
            }
        }
    }

    /// Material of a surface, `None` for unsupported categories
    ///
    /// A missing material is reported for every surface referencing it,
    /// whether or not the lookup came from the cache.
    fn material(
        &self,
        surface: &ForeignSurface,
        cache: &mut BatchCache,
        diagnostics: &mut Diagnostics,
    ) -> Option<Material> {
        let no = surface.material_no;
        let cached = if self.options.memoize_materials {
            cache.material(no)
        } else {
            None
        };

        let lookup = match cached {
            Some(lookup) => lookup,
            None => {
                let lookup = self.lookup_material(no);
                if self.options.memoize_materials {
                    cache.insert_material(no, lookup.clone());
                }
                lookup
            }
        };

        if lookup == MaterialLookup::Missing {
            diagnostics.push(
                Diagnostic::new(
                    Severity::Warning,
                    DiagnosticKind::MissingReference,
                    format!("{} not found, panel read without material", no),
                )
                .about(surface.no),
            );
        }

        lookup.material()
    }

    fn lookup_material(&self, no: MaterialNo) -> MaterialLookup {
        match self.store.material(no) {
            Some(record) => match material_from_foreign(&record) {
                Some(material) => MaterialLookup::Mapped(material),
                None => {
                    tracing::debug!(
                        material = no.0,
                        category = %classify(&record),
                        "Material category has no structural counterpart"
                    );
                    MaterialLookup::Unsupported
                }
            },
            None => MaterialLookup::Missing,
        }
    }
}

/// Read panels from a store with default options
pub fn read_panels(store: &dyn ModelStore, ids: Option<&[SurfaceNo]>) -> PanelBatch {
    PanelReader::new(store).read_panels(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use femlink_model::{
        ForeignLine, ForeignMaterial, ForeignNode, ForeignSurfaceStiffness, LineNo,
        MaterialCategory, NodeNo, OrthotropyType, SurfaceGeometryType, SurfaceStiffness,
    };

    /// Two unit squares side by side sharing nodes 2 and 5
    ///
    /// ```text
    /// 4---5---6
    /// |   |   |
    /// 1---2---3
    /// ```
    fn two_bays() -> MemoryStore {
        let mut store = MemoryStore::new();
        let coords = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 1.0), (1.0, 1.0), (2.0, 1.0)];
        for (i, (x, y)) in coords.iter().enumerate() {
            store.add_node(ForeignNode {
                no: NodeNo(i as u32 + 1),
                x: *x,
                y: *y,
                z: 0.0,
            });
        }
        let lines = [(1, "1,2"), (2, "2,5"), (3, "5,4"), (4, "4,1"), (5, "2-3"), (6, "3,6"), (7, "6,5"), (8, "5,2")];
        for (no, nodes) in lines {
            store.add_line(ForeignLine {
                no: LineNo(no),
                node_list: nodes.into(),
            });
        }

        store.add_material(ForeignMaterial::new(MaterialNo(1), "C30/37", MaterialCategory::Concrete));
        store.add_material(ForeignMaterial::new(MaterialNo(2), "B500", MaterialCategory::Rebar));

        store.add_surface(ForeignSurface {
            no: SurfaceNo(1),
            boundary_line_list: "1-4".into(),
            material_no: MaterialNo(1),
            thickness: 0.2,
            ..Default::default()
        });
        store.add_surface(ForeignSurface {
            no: SurfaceNo(2),
            boundary_line_list: "5-8".into(),
            material_no: MaterialNo(1),
            stiffness_type: SurfaceStiffnessType::Orthotropic,
            ..Default::default()
        });
        store.add_surface_stiffness(
            SurfaceNo(2),
            ForeignSurfaceStiffness {
                orthotropy: Some(OrthotropyType::UnidirectionalRibs),
                thickness: 0.1,
                geometry: femlink_model::GeometricProperties {
                    height: 0.5,
                    spacing: 0.9,
                    width: 0.15,
                    ..Default::default()
                },
            },
        );
        store
    }

    #[test]
    fn test_read_all() {
        let store = two_bays();
        let batch = PanelReader::new(&store).read_all_panels();

        assert!(batch.diagnostics.is_empty(), "{:?}", batch.diagnostics);
        assert_eq!(batch.panels.len(), 2);

        let first = &batch.panels[0];
        assert_eq!(first.foreign_id, Some(SurfaceNo(1)));
        assert_eq!(first.external_edges.len(), 4);
        assert!(first.openings.is_empty());
        assert!(first.is_closed(1e-9));
        let property = first.property.as_ref().unwrap();
        assert_eq!(
            property.stiffness,
            SurfaceStiffness::ConstantThickness { thickness: 0.2 }
        );
        assert_eq!(property.material.as_ref().unwrap().name, "C30/37");

        let second = batch.panels[1].property.as_ref().unwrap();
        assert!(matches!(second.stiffness, SurfaceStiffness::Ribbed { .. }));
    }

    #[test]
    fn test_material_mapped_once_per_batch() {
        let store = two_bays();
        PanelReader::new(&store).read_all_panels();
        assert_eq!(store.material_requests(), 1);

        let uncached = two_bays();
        PanelReader::with_options(&uncached, ReadOptions::new().with_material_memo(false))
            .read_all_panels();
        assert_eq!(uncached.material_requests(), 2);
    }

    #[test]
    fn test_unsupported_material_keeps_panel() {
        let mut store = two_bays();
        let mut surface = store.surface(SurfaceNo(1)).unwrap();
        surface.material_no = MaterialNo(2);
        store.add_surface(surface);

        let batch = PanelReader::new(&store).read_panels(Some(&[SurfaceNo(1)]));

        assert_eq!(batch.panels.len(), 1);
        let property = batch.panels[0].property.as_ref().unwrap();
        assert!(property.material.is_none());
        assert!(batch.diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_stiffness_type_keeps_panel() {
        let mut store = two_bays();
        let mut surface = store.surface(SurfaceNo(1)).unwrap();
        surface.stiffness_type = SurfaceStiffnessType::Membrane;
        store.add_surface(surface);

        let batch = PanelReader::new(&store).read_all_panels();

        assert_eq!(batch.panels.len(), 2);
        assert!(batch.panels[0].property.is_none());
        assert_eq!(batch.panels[0].external_edges.len(), 4);
        assert_eq!(batch.diagnostics.count(DiagnosticKind::UnsupportedVariant), 1);
    }

    #[test]
    fn test_unreadable_boundary_keeps_panel() {
        let mut store = two_bays();
        let mut surface = store.surface(SurfaceNo(1)).unwrap();
        surface.boundary_line_list = "4-1".into();
        store.add_surface(surface);

        let batch = PanelReader::new(&store).read_all_panels();

        assert_eq!(batch.panels.len(), 2);
        let broken = &batch.panels[0];
        assert_eq!(broken.foreign_id, Some(SurfaceNo(1)));
        assert!(broken.external_edges.is_empty());
        let property = broken.property.as_ref().unwrap();
        assert_eq!(property.material.as_ref().unwrap().name, "C30/37");

        assert_eq!(batch.diagnostics.count(DiagnosticKind::Parse), 1);
        assert_eq!(batch.diagnostics.count(DiagnosticKind::OpenBoundary), 1);
        assert!(batch.diagnostics.has_errors());
    }

    #[test]
    fn test_missing_boundary_line_keeps_the_rest() {
        let mut store = two_bays();
        let mut surface = store.surface(SurfaceNo(1)).unwrap();
        surface.boundary_line_list = "1,2,3,4,9".into();
        store.add_surface(surface);

        let batch = PanelReader::new(&store).read_panels(Some(&[SurfaceNo(1)]));

        assert_eq!(batch.panels.len(), 1);
        let panel = &batch.panels[0];
        assert_eq!(panel.external_edges.len(), 4);
        assert!(panel.is_closed(1e-9));
        let property = panel.property.as_ref().unwrap();
        assert_eq!(
            property.stiffness,
            SurfaceStiffness::ConstantThickness { thickness: 0.2 }
        );
        assert!(property.material.is_some());

        assert_eq!(batch.diagnostics.len(), 1);
        let d = batch.diagnostics.iter().next().unwrap();
        assert_eq!(d.kind, DiagnosticKind::MissingReference);
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.subject.as_deref(), Some("surface 1"));
        assert!(d.message.contains("line 9"));
    }

    #[test]
    fn test_unsupported_orthotropy_names_each_surface() {
        let mut store = two_bays();
        for no in [1, 2] {
            let mut surface = store.surface(SurfaceNo(no)).unwrap();
            surface.stiffness_type = SurfaceStiffnessType::Orthotropic;
            store.add_surface(surface);
            store.add_surface_stiffness(
                SurfaceNo(no),
                ForeignSurfaceStiffness {
                    orthotropy: Some(OrthotropyType::TrapezoidalSheet),
                    thickness: 0.1,
                    ..Default::default()
                },
            );
        }

        let batch = PanelReader::new(&store).read_all_panels();

        assert_eq!(batch.panels.len(), 2);
        assert!(batch.panels.iter().all(|p| p.property.is_none()));
        let subjects: Vec<_> = batch
            .diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::UnsupportedVariant)
            .map(|d| d.subject.clone())
            .collect();
        assert_eq!(
            subjects,
            vec![Some("surface 1".to_string()), Some("surface 2".to_string())]
        );
    }

    #[test]
    fn test_missing_material_reported_per_surface() {
        let mut store = two_bays();
        for no in [1, 2] {
            let mut surface = store.surface(SurfaceNo(no)).unwrap();
            surface.material_no = MaterialNo(7);
            store.add_surface(surface);
        }

        let batch = PanelReader::new(&store).read_all_panels();

        assert_eq!(batch.panels.len(), 2);
        assert_eq!(store.material_requests(), 1);
        let missing: Vec<_> = batch
            .diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::MissingReference)
            .collect();
        assert_eq!(missing.len(), 2);
        assert_eq!(missing[0].subject.as_deref(), Some("surface 1"));
        assert_eq!(missing[1].subject.as_deref(), Some("surface 2"));
        assert!(missing[0].message.contains("material 7"));
        assert!(missing.iter().all(|d| d.severity == Severity::Warning));
    }

    #[test]
    fn test_missing_surface_id() {
        let store = two_bays();
        let batch = PanelReader::new(&store).read_panels(Some(&[SurfaceNo(2), SurfaceNo(99)]));

        assert_eq!(batch.panels.len(), 1);
        assert_eq!(batch.diagnostics.count(DiagnosticKind::MissingReference), 1);
    }

    #[test]
    fn test_open_boundary_warns() {
        let mut store = two_bays();
        let mut surface = store.surface(SurfaceNo(1)).unwrap();
        surface.boundary_line_list = "1,2,3".into();
        store.add_surface(surface);

        let batch = PanelReader::new(&store).read_panels(Some(&[SurfaceNo(1)]));
        assert_eq!(batch.panels.len(), 1);
        assert_eq!(batch.diagnostics.count(DiagnosticKind::OpenBoundary), 1);

        let unchecked = PanelReader::with_options(&store, ReadOptions::new().with_closure_check(false))
            .read_panels(Some(&[SurfaceNo(1)]));
        assert!(unchecked.diagnostics.is_empty());
    }

    #[test]
    fn test_non_plane_surface_still_read() {
        let mut store = two_bays();
        let mut surface = store.surface(SurfaceNo(1)).unwrap();
        surface.geometry_type = SurfaceGeometryType::Nurbs;
        store.add_surface(surface);

        let mut diagnostics = Diagnostics::new();
        let panel = PanelReader::new(&store)
            .read_panel(SurfaceNo(1), &mut diagnostics)
            .unwrap();

        assert!(panel.is_closed(1e-9));
        assert_eq!(diagnostics.count(DiagnosticKind::GeometryTypeMismatch), 1);
    }

    #[test]
    fn test_read_panel_missing_is_error() {
        let store = two_bays();
        let mut diagnostics = Diagnostics::new();
        let err = PanelReader::new(&store)
            .read_panel(SurfaceNo(7), &mut diagnostics)
            .unwrap_err();
        assert_eq!(err.to_string(), "surface 7 not found");
    }

    #[test]
    fn test_batch_json_dump() {
        let store = two_bays();
        let json = read_panels(&store, None).to_json().unwrap();
        assert!(json.contains("C30/37"));
        assert!(json.contains("external_edges"));
    }
}
