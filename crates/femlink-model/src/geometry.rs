// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometric primitives for structural elements

use serde::{Deserialize, Serialize};

/// 3D point in model coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Whether two points coincide within `tolerance`
    pub fn coincides(&self, other: &Point, tolerance: f64) -> bool {
        self.distance(other) <= tolerance
    }
}

/// 3-component vector, used for directional material constants
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Same value on all three axes
    pub fn splat(value: f64) -> Self {
        Self {
            x: value,
            y: value,
            z: value,
        }
    }
}

/// Open polyline through an ordered list of points
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn start(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn end(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Sum of segment lengths
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_length() {
        let line = Polyline::new(vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(3.0, 0.0, 0.0),
            Point::new(3.0, 4.0, 0.0),
        ]);
        assert!((line.length() - 7.0).abs() < 1e-12);
        assert_eq!(line.start(), Some(&Point::new(0.0, 0.0, 0.0)));
        assert_eq!(line.end(), Some(&Point::new(3.0, 4.0, 0.0)));
    }

    #[test]
    fn test_coincides() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(1.0, 2.0, 3.0 + 1e-12);
        assert!(a.coincides(&b, 1e-9));
        assert!(!a.coincides(&Point::new(1.0, 2.0, 4.0), 1e-9));
    }
}
