// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar point loops
//!
//! Winding is read relative to a normal: a loop whose signed area about `n`
//! is non-negative reports `clockwise`. Reading the same loop about `-n`
//! flips the answer without touching the point order.

use crate::{Axis, Direction, Error, Plane, Point, Result, Vector};

/// Unnormalized polygon normal by Newell's method
///
/// The result has twice the polygon's vector area as magnitude, and stays
/// usable when the first few points are collinear.
pub fn newell_normal(points: &[Point]) -> Vector {
    let n = points.len();
    let mut normal = Vector::zeros();

    for i in 0..n {
        let current = &points[i];
        let next = &points[(i + 1) % n];

        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }

    normal
}

/// Signed area of triangle `(a, b, c)` read about `normal`
#[inline]
pub fn signed_triangle_area(a: &Point, b: &Point, c: &Point, normal: &Vector) -> f64 {
    normal.dot(&(b - a).cross(&(c - a))) / 2.0
}

/// An ordered loop of at least three coplanar points
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    points: Vec<Point>,
    plane: Plane,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            return Err(Error::invalid_input(format!(
                "a polygon needs at least 3 points, got {}",
                points.len()
            )));
        }
        if let Some(bad) = points.iter().position(|p| !p.coords.iter().all(|c| c.is_finite())) {
            return Err(Error::invalid_input(format!(
                "polygon point {} has a non-finite coordinate",
                bad
            )));
        }

        let plane = Plane::from_loop(&points)?;
        Ok(Self { points, plane })
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    #[inline]
    pub fn normal(&self) -> Direction {
        self.plane.normal
    }

    /// Signed area about the polygon's own normal
    pub fn signed_area(&self) -> f64 {
        self.signed_area_about(&self.plane.normal)
    }

    /// `dot(normal, Σ p_i × p_{i+1}) / 2`
    pub fn signed_area_about(&self, normal: &Vector) -> f64 {
        let n = self.points.len();
        let sum = (0..n).fold(Vector::zeros(), |acc, i| {
            acc + self.points[i].coords.cross(&self.points[(i + 1) % n].coords)
        });
        normal.dot(&sum) / 2.0
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[inline]
    pub fn clockwise(&self) -> bool {
        self.signed_area() >= 0.0
    }

    #[inline]
    pub fn clockwise_about(&self, normal: &Vector) -> bool {
        self.signed_area_about(normal) >= 0.0
    }

    /// Index of the first point farther than `epsilon` from the plane
    pub fn first_off_plane(&self, epsilon: f64) -> Option<usize> {
        self.points
            .iter()
            .position(|p| !self.plane.contains_point_within(p, epsilon))
    }

    #[inline]
    pub fn is_coplanar_within(&self, epsilon: f64) -> bool {
        self.first_off_plane(epsilon).is_none()
    }

    /// Even-odd containment test
    ///
    /// Points off the plane are outside. On-plane points are projected by
    /// dropping the dominant normal axis and tested with a half-open ray
    /// cast, so a boundary point counts as inside on some edges and outside
    /// on others.
    pub fn contains_point(&self, p: &Point) -> bool {
        if !self.plane.contains_point(p) {
            return false;
        }

        let (u, v) = Axis::dominant(&self.plane.normal).others();
        let (u, v) = (u.index(), v.index());
        let (x, y) = (p[u], p[v]);

        let n = self.points.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = (self.points[i][u], self.points[i][v]);
            let (xj, yj) = (self.points[j][u], self.points[j][v]);

            if (yi <= y && yj > y) || (yj <= y && yi > y) {
                let crossing = xi + (y - yi) * (xj - xi) / (yj - yi);
                if x < crossing {
                    inside = !inside;
                }
            }
            j = i;
        }

        inside
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = Error;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Self::new(points)
    }
}
