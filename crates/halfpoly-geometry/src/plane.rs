// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planes in Hessian normal form
//!
//! A plane is the set of points `p` with `dot(normal, p) = scalar`, where
//! `normal` is a unit vector. Intersections between planes and lines return
//! `None` when the inputs are parallel rather than an error.

use crate::polygon::newell_normal;
use crate::{Direction, Error, Line, Point, Result, EPSILON};
use nalgebra::Matrix3;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    pub normal: Direction,
    pub scalar: f64,
}

impl Plane {
    /// Plane from a unit normal and its distance along that normal
    #[inline]
    pub fn new(normal: Direction, scalar: f64) -> Self {
        Self { normal, scalar }
    }

    /// Plane with the given normal passing through `point`
    #[inline]
    pub fn through_point(normal: Direction, point: &Point) -> Self {
        Self::new(normal, normal.dot(&point.coords))
    }

    /// Plane through three points, oriented by `(b - a) × (c - a)`
    pub fn from_points(a: &Point, b: &Point, c: &Point) -> Result<Self> {
        let normal = Direction::new((b - a).cross(&(c - a))).map_err(|_| {
            Error::degenerate_geometry("cannot build a plane from collinear points")
        })?;
        Ok(Self::through_point(normal, a))
    }

    /// Plane through the first three points of `points`
    ///
    /// Fails with `DegenerateGeometry` when those three are collinear.
    pub fn from_polygon(points: &[Point]) -> Result<Self> {
        match points {
            [a, b, c, ..] => Self::from_points(a, b, c),
            _ => Err(Error::invalid_input(format!(
                "a plane needs at least 3 points, got {}",
                points.len()
            ))),
        }
    }

    /// Plane of a point loop that may start with collinear points
    ///
    /// Same as [`Plane::from_polygon`] when the first three points span a
    /// plane; otherwise the loop's Newell normal anchored at the first point.
    pub fn from_loop(points: &[Point]) -> Result<Self> {
        match Self::from_polygon(points) {
            Err(Error::DegenerateGeometry(_)) => {}
            result => return result,
        }

        let normal = Direction::new(newell_normal(points)).map_err(|_| {
            Error::degenerate_geometry("all polygon points are collinear")
        })?;
        Ok(Self::through_point(normal, &points[0]))
    }

    /// `dot(normal, p) - scalar`; positive on the side the normal points to
    #[inline]
    pub fn signed_distance(&self, p: &Point) -> f64 {
        self.normal.dot(&p.coords) - self.scalar
    }

    /// Whether `p` lies on the plane within [`EPSILON`]
    #[inline]
    pub fn contains_point(&self, p: &Point) -> bool {
        self.contains_point_within(p, EPSILON)
    }

    /// Whether `p` lies within `epsilon` of the plane, on either side
    #[inline]
    pub fn contains_point_within(&self, p: &Point, epsilon: f64) -> bool {
        self.signed_distance(p).abs() <= epsilon
    }

    /// Orthogonal projection of `p` onto the plane
    pub fn project_point(&self, p: &Point) -> Point {
        p - self.normal.as_vector() * self.signed_distance(p)
    }

    /// Translate the plane along its normal by `distance`
    #[inline]
    pub fn scale(&mut self, distance: f64) {
        self.scalar += distance;
    }

    /// Copy translated along the normal by `distance`
    #[inline]
    pub fn scaled(mut self, distance: f64) -> Self {
        self.scale(distance);
        self
    }

    /// Reverse the orientation; the point set is unchanged
    #[inline]
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.scalar = -self.scalar;
    }

    /// Copy with the orientation reversed
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    /// Whether the normals are parallel or anti-parallel within `epsilon`
    #[inline]
    pub fn is_parallel_to(&self, other: &Plane, epsilon: f64) -> bool {
        self.normal.is_parallel_to(&other.normal, epsilon)
    }

    /// Line shared by two planes, or `None` if they are parallel
    pub fn line_of_intersection_with(&self, other: &Plane) -> Option<Line> {
        let (n1, n2) = (self.normal.as_vector(), other.normal.as_vector());
        let cross = n1.cross(n2);
        if cross.norm() < EPSILON {
            return None;
        }

        let d = n1.dot(n2);
        let denom = 1.0 - d * d;
        let c1 = (self.scalar - other.scalar * d) / denom;
        let c2 = (other.scalar - self.scalar * d) / denom;

        let direction = Direction::new(cross).ok()?;
        Some(Line::new(Point::from(n1 * c1 + n2 * c2), direction))
    }

    /// Single point shared by three planes, or `None` if their normals are
    /// linearly dependent
    pub fn point_of_intersection_with_planes(
        &self,
        second: &Plane,
        third: &Plane,
    ) -> Option<Point> {
        let (n1, n2, n3) = (
            self.normal.as_vector(),
            second.normal.as_vector(),
            third.normal.as_vector(),
        );

        let rows = [n1.transpose(), n2.transpose(), n3.transpose()];
        let det = Matrix3::from_rows(&rows).determinant();
        if det.abs() < EPSILON {
            return None;
        }

        let numerator =
            n2.cross(n3) * self.scalar + n3.cross(n1) * second.scalar + n1.cross(n2) * third.scalar;
        Some(Point::from(numerator / det))
    }

    /// Point where `line` crosses the plane, or `None` if it runs parallel
    pub fn line_intersection(&self, line: &Line) -> Option<Point> {
        let denom = self.normal.dot(line.direction.as_vector());
        if denom.abs() < EPSILON {
            return None;
        }
        let t = -self.signed_distance(&line.point) / denom;
        Some(line.point_from_distance(t))
    }
}
