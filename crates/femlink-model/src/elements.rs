// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structural elements: nodes, edges, panels

use crate::{Constraint6Dof, NodeNo, Point, Polyline, SurfaceNo, SurfaceProperty};
use serde::{Deserialize, Serialize};

/// Structural node
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub position: Point,
    /// Support assigned to this node, if any
    pub support: Option<Constraint6Dof>,
    /// Foreign node this was read from or written to
    pub foreign_id: Option<NodeNo>,
}

impl Node {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            support: None,
            foreign_id: None,
        }
    }
}

/// Panel boundary segment
///
/// Points keep the order the foreign line lists its nodes in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub curve: Polyline,
    pub release: Option<Constraint6Dof>,
    pub name: Option<String>,
}

impl Edge {
    /// Edge with no release and no name
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            curve: Polyline::new(points),
            release: None,
            name: None,
        }
    }

    pub fn start(&self) -> Option<&Point> {
        self.curve.start()
    }

    pub fn end(&self) -> Option<&Point> {
        self.curve.end()
    }
}

/// Hole inside a panel
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub edges: Vec<Edge>,
}

/// Planar structural surface
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Outer boundary, in loop order
    pub external_edges: Vec<Edge>,
    /// Always empty when read from a foreign store
    pub openings: Vec<Opening>,
    pub property: Option<SurfaceProperty>,
    pub foreign_id: Option<SurfaceNo>,
}

impl Panel {
    pub fn new(
        external_edges: Vec<Edge>,
        openings: Vec<Opening>,
        property: Option<SurfaceProperty>,
    ) -> Self {
        Self {
            external_edges,
            openings,
            property,
            foreign_id: None,
        }
    }

    /// Whether `edge[i].end == edge[i + 1 mod n].start` for every edge
    pub fn is_closed(&self, tolerance: f64) -> bool {
        edges_close(&self.external_edges, tolerance)
    }
}

/// Whether a sequence of edges chains into a closed loop
///
/// An empty sequence is not a loop. Every edge needs at least two points.
pub fn edges_close(edges: &[Edge], tolerance: f64) -> bool {
    if edges.is_empty() || edges.iter().any(|e| e.curve.len() < 2) {
        return false;
    }
    let n = edges.len();
    (0..n).all(|i| match (edges[i].end(), edges[(i + 1) % n].start()) {
        (Some(end), Some(start)) => end.coincides(start, tolerance),
        _ => false,
    })
}
