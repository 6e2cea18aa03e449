// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vectors, points and unit directions

use crate::{Angle, Error, Quaternion, Result};
use nalgebra::{Unit, Vector3};
use std::fmt;
use std::ops::{Deref, Neg};
use std::str::FromStr;

/// Free vector in 3D space
pub type Vector = Vector3<f64>;

/// Position in 3D space
pub type Point = nalgebra::Point3<f64>;

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index of the axis (x = 0, y = 1, z = 2)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Axis of the largest-magnitude component of `v`
    ///
    /// Ties resolve towards the later axis, so a vector with equal x and z
    /// magnitude reports `Z`.
    #[inline]
    pub fn dominant(v: &Vector) -> Self {
        let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());
        if ax > ay && ax > az {
            Axis::X
        } else if ay > az {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// The two remaining axes, in ascending order
    #[inline]
    pub fn others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(Error::invalid_input(format!(
                "axis must be \"x\", \"y\" or \"z\", got {:?}",
                other
            ))),
        }
    }
}

/// A unit-length vector
///
/// Construction normalizes the input; a zero vector is rejected because it
/// has no direction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction(Unit<Vector3<f64>>);

impl Direction {
    /// Normalize `v` into a direction
    pub fn new(v: Vector) -> Result<Self> {
        Unit::try_new(v, f64::EPSILON)
            .map(Self)
            .ok_or_else(|| Error::degenerate_vector(format!("cannot normalize {:?}", v.as_slice())))
    }

    /// Normalize the vector `(x, y, z)` into a direction
    pub fn from_xyz(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::new(Vector::new(x, y, z))
    }

    /// +Y, the direction of the sky
    pub fn up() -> Self {
        Self(Vector3::y_axis())
    }

    /// -Y, the direction of the ground
    pub fn down() -> Self {
        Self(Unit::new_unchecked(-Vector3::y()))
    }

    /// +X
    pub fn right() -> Self {
        Self(Vector3::x_axis())
    }

    /// -X
    pub fn left() -> Self {
        Self(Unit::new_unchecked(-Vector3::x()))
    }

    /// +Z
    pub fn forwards() -> Self {
        Self(Vector3::z_axis())
    }

    /// -Z
    pub fn backwards() -> Self {
        Self(Unit::new_unchecked(-Vector3::z()))
    }

    /// Positive direction of a coordinate axis
    pub fn from_axis(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::right(),
            Axis::Y => Self::up(),
            Axis::Z => Self::forwards(),
        }
    }

    /// The underlying unit vector
    #[inline]
    pub fn into_inner(self) -> Vector {
        self.0.into_inner()
    }

    /// Borrow the underlying unit vector
    #[inline]
    pub fn as_vector(&self) -> &Vector {
        self.0.as_ref()
    }

    /// Angle between this direction and `other`
    pub fn angle_to(&self, other: &Direction) -> Angle {
        Angle::from_radians(self.dot(other.as_vector()).clamp(-1.0, 1.0).acos())
    }

    /// Whether `other` is parallel or anti-parallel within `epsilon`
    ///
    /// Measured as the magnitude of the cross product, i.e. the sine of the
    /// angle between the two directions.
    #[inline]
    pub fn is_parallel_to(&self, other: &Direction, epsilon: f64) -> bool {
        self.cross(other.as_vector()).norm() <= epsilon
    }

    /// Rotate by a unit quaternion
    pub fn rotate(&self, rotation: &Quaternion) -> Self {
        Self(Unit::new_normalize(rotation.rotate(self.as_vector())))
    }
}

impl Deref for Direction {
    type Target = Vector;

    #[inline]
    fn deref(&self) -> &Vector {
        self.0.as_ref()
    }
}

impl Neg for Direction {
    type Output = Direction;

    #[inline]
    fn neg(self) -> Direction {
        Self(Unit::new_unchecked(-self.0.into_inner()))
    }
}

impl From<Direction> for Vector {
    fn from(direction: Direction) -> Vector {
        direction.into_inner()
    }
}

impl TryFrom<Vector> for Direction {
    type Error = Error;

    fn try_from(v: Vector) -> Result<Self> {
        Self::new(v)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.4}, {:.4}, {:.4}]", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direction_normalizes() {
        let d = Direction::from_xyz(3.0, 0.0, 4.0).unwrap();
        assert_relative_eq!(d.norm(), 1.0);
        assert_relative_eq!(d.x, 0.6);
        assert_relative_eq!(d.z, 0.8);
    }

    #[test]
    fn test_zero_direction_is_degenerate() {
        let err = Direction::new(Vector::zeros()).unwrap_err();
        assert!(matches!(err, Error::DegenerateVector(_)));
    }

    #[test]
    fn test_named_directions() {
        assert_eq!(Direction::up().into_inner(), Vector::new(0.0, 1.0, 0.0));
        assert_eq!(-Direction::up(), Direction::down());
        assert_eq!(-Direction::right(), Direction::left());
        assert_eq!(-Direction::forwards(), Direction::backwards());
        assert_eq!(Direction::from_axis(Axis::Z), Direction::forwards());
    }

    #[test]
    fn test_axis_from_str() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!(" Y ".parse::<Axis>().unwrap(), Axis::Y);
        assert!("w".parse::<Axis>().is_err());
    }

    #[test]
    fn test_dominant_axis_uses_magnitude() {
        assert_eq!(Axis::dominant(&Vector::new(0.1, -0.9, 0.2)), Axis::Y);
        assert_eq!(Axis::dominant(&Vector::new(-5.0, 1.0, 1.0)), Axis::X);
        assert_eq!(Axis::dominant(&Vector::new(0.0, 0.0, -1.0)), Axis::Z);
    }

    #[test]
    fn test_parallel_includes_antiparallel() {
        let up = Direction::up();
        assert!(up.is_parallel_to(&Direction::down(), 1e-9));
        assert!(!up.is_parallel_to(&Direction::right(), 1e-9));
    }

    #[test]
    fn test_angle_between_directions() {
        let angle = Direction::up().angle_to(&Direction::right());
        assert_relative_eq!(angle.degrees(), 90.0, epsilon = 1e-9);
    }
}
