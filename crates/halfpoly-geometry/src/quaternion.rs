// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Quaternions for rotating vectors and points
//!
//! A quaternion is stored as a scalar part and a vector part. Rotations use
//! unit quaternions built from an angle and an axis; rotating `v` computes
//! `q · (0, v) · q*` and keeps the vector part.

use crate::{Angle, Direction, Point, Vector};
use std::ops::Mul;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub scalar: f64,
    pub vector: Vector,
}

impl Quaternion {
    #[inline]
    pub fn new(scalar: f64, vector: Vector) -> Self {
        Self { scalar, vector }
    }

    /// The rotation that leaves everything in place
    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, Vector::zeros())
    }

    /// Rotation by `angle` about `axis` (right-hand rule)
    pub fn from_angle_and_direction(angle: Angle, axis: &Direction) -> Self {
        let half = angle.half();
        Self::new(half.cos(), axis.as_vector() * half.sin())
    }

    /// Pure quaternion `(0, p)` carrying a point
    #[inline]
    pub fn from_point(point: &Point) -> Self {
        Self::new(0.0, point.coords)
    }

    /// Hamilton product `self · other`
    pub fn multiply(&self, other: &Quaternion) -> Self {
        let (s1, v1) = (self.scalar, &self.vector);
        let (s2, v2) = (other.scalar, &other.vector);
        Self::new(
            s1 * s2 - v1.dot(v2),
            v2 * s1 + v1 * s2 + v1.cross(v2),
        )
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.scalar, -self.vector)
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        (self.scalar * self.scalar + self.vector.norm_squared()).sqrt()
    }

    /// Rotate a vector; only meaningful for unit quaternions
    pub fn rotate(&self, v: &Vector) -> Vector {
        self.multiply(&Self::new(0.0, *v))
            .multiply(&self.conjugate())
            .vector
    }

    /// Rotate a point about the origin
    #[inline]
    pub fn rotate_point(&self, p: &Point) -> Point {
        Point::from(self.rotate(&p.coords))
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        self.multiply(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::UnitQuaternion;

    #[test]
    fn test_quarter_turn_about_up() {
        let q = Quaternion::from_angle_and_direction(Angle::right_angle(), &Direction::up());
        let rotated = q.rotate(&Vector::x());
        assert_relative_eq!(rotated, Vector::new(0.0, 0.0, -1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_matches_nalgebra_rotation() {
        let axis = Direction::from_xyz(1.0, 2.0, -0.5).unwrap();
        let angle = Angle::from_degrees(73.0);
        let q = Quaternion::from_angle_and_direction(angle, &axis);
        let unit_axis = nalgebra::Unit::new_normalize(*axis);
        let reference = UnitQuaternion::from_axis_angle(&unit_axis, angle.radians());

        let v = Vector::new(0.3, -4.0, 2.5);
        assert_relative_eq!(q.rotate(&v), reference * v, epsilon = 1e-12);
        assert_relative_eq!(q.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_identity_and_conjugate() {
        let p = Point::new(1.0, 2.0, 3.0);
        assert_eq!(Quaternion::identity().rotate_point(&p), p);

        let q =
            Quaternion::from_angle_and_direction(Angle::from_degrees(30.0), &Direction::right());
        let back = q.conjugate().rotate(&q.rotate(&p.coords));
        assert_relative_eq!(back, p.coords, epsilon = 1e-12);
    }

    #[test]
    fn test_hamilton_product() {
        // i * j = k
        let i = Quaternion::new(0.0, Vector::x());
        let j = Quaternion::new(0.0, Vector::y());
        let k = i * j;
        assert_relative_eq!(k.scalar, 0.0);
        assert_relative_eq!(k.vector, Vector::z());
    }
}
