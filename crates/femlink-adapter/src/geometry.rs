// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Surface → line → node resolution into boundary edges

use crate::id_range;
use femlink_model::{
    edges_close, ConvertError, Diagnostic, DiagnosticKind, Diagnostics, Edge, ForeignNode,
    ForeignSurface, LineNo, ModelStore, ModelStoreExt, Node, NodeNo, Point, Result, Severity,
    SurfaceGeometryType,
};
use rustc_hash::FxHashMap;

/// Resolves foreign boundary references into ordered edges
///
/// Holds an optional node memo so vertices shared by neighbouring lines are
/// fetched once. The memo lives as long as the resolver; create one resolver
/// per surface (or per batch) and drop it afterwards.
pub struct GeometryResolver<'a> {
    store: &'a dyn ModelStore,
    memoize_nodes: bool,
    nodes: FxHashMap<NodeNo, Point>,
}

impl<'a> GeometryResolver<'a> {
    /// Create a resolver with node memoization enabled
    pub fn new(store: &'a dyn ModelStore) -> Self {
        Self {
            store,
            memoize_nodes: true,
            nodes: FxHashMap::default(),
        }
    }

    /// Set whether node coordinates are memoized
    pub fn with_node_memo(mut self, enabled: bool) -> Self {
        self.memoize_nodes = enabled;
        self
    }

    /// Resolve the boundary of a surface, keeping whatever resolves
    ///
    /// Each boundary line that cannot be resolved is left out with an error
    /// diagnostic naming the surface and the line; the other lines still
    /// become edges. An unreadable boundary token gives no edges at all.
    /// Non-plane surfaces are reported as a geometry type mismatch and their
    /// boundary is still resolved.
    pub fn surface_edges(
        &mut self,
        surface: &ForeignSurface,
        diagnostics: &mut Diagnostics,
    ) -> Vec<Edge> {
        if surface.geometry_type != SurfaceGeometryType::Plane {
            diagnostics.push(
                Diagnostic::new(
                    Severity::Error,
                    DiagnosticKind::GeometryTypeMismatch,
                    format!(
                        "only plane surfaces are supported, boundary of {:?} surface resolved as polylines",
                        surface.geometry_type
                    ),
                )
                .about(surface.no),
            );
        }

        let lines: Vec<LineNo> = match id_range::decode_as(&surface.boundary_line_list) {
            Ok(lines) => lines,
            Err(err) => {
                diagnostics.push(
                    Diagnostic::new(
                        Severity::Error,
                        err.diagnostic_kind(),
                        format!("boundary not resolved: {}", err),
                    )
                    .about(surface.no),
                );
                return Vec::new();
            }
        };

        let mut edges = Vec::with_capacity(lines.len());
        for no in lines {
            match self.line_edge(no) {
                Ok(edge) => edges.push(edge),
                Err(err) => diagnostics.push(
                    Diagnostic::new(
                        Severity::Error,
                        err.diagnostic_kind(),
                        format!("{} skipped: {}", no, err),
                    )
                    .about(surface.no),
                ),
            }
        }
        edges
    }

    /// Resolve a boundary line token, one edge per line in token order
    pub fn boundary_edges(&mut self, boundary_line_list: &str) -> Result<Vec<Edge>> {
        let lines: Vec<LineNo> = id_range::decode_as(boundary_line_list)?;
        lines.into_iter().map(|no| self.line_edge(no)).collect()
    }

    /// Resolve one line into an edge with points in line order
    pub fn line_edge(&mut self, no: LineNo) -> Result<Edge> {
        let line = self.store.line_or_err(no)?;
        let node_ids: Vec<NodeNo> = id_range::decode_as(&line.node_list)?;

        if node_ids.len() < 2 {
            return Err(ConvertError::DegenerateEdge {
                line: no.0,
                points: node_ids.len(),
            });
        }

        let points = node_ids
            .into_iter()
            .map(|id| self.point(id))
            .collect::<Result<Vec<_>>>()?;

        Ok(Edge::from_points(points))
    }

    /// Coordinates of one node
    pub fn point(&mut self, no: NodeNo) -> Result<Point> {
        if let Some(point) = self.nodes.get(&no) {
            return Ok(*point);
        }

        let node = self.store.node_or_err(no)?;
        let point = Point::new(node.x, node.y, node.z);

        if self.memoize_nodes {
            self.nodes.insert(no, point);
        }

        Ok(point)
    }

    /// Number of memoized nodes
    pub fn memo_size(&self) -> usize {
        self.nodes.len()
    }
}

/// Convert a foreign node into a structural node
pub fn node_from_foreign(node: &ForeignNode) -> Node {
    let mut result = Node::new(Point::new(node.x, node.y, node.z));
    result.foreign_id = Some(node.no);
    result
}

/// Whether edges chain into a closed loop
pub fn is_closed_loop(edges: &[Edge], tolerance: f64) -> bool {
    edges_close(edges, tolerance)
}
