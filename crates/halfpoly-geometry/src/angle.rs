// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Angles stored in radians

use crate::{Error, Result, Vector};
use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

/// Angle in radians
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle(f64);

impl Angle {
    /// Create an angle from radians
    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    /// Create an angle from degrees
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    /// A quarter turn
    #[inline]
    pub const fn right_angle() -> Self {
        Self(FRAC_PI_2)
    }

    /// Angle between two vectors, in `[0, π]`
    pub fn between(u: &Vector, v: &Vector) -> Result<Self> {
        let denom = u.norm() * v.norm();
        if denom <= f64::EPSILON {
            return Err(Error::degenerate_vector(
                "angle is undefined for a zero-length vector",
            ));
        }
        Ok(Self((u.dot(v) / denom).clamp(-1.0, 1.0).acos()))
    }

    /// Value in radians
    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    /// Value in degrees
    #[inline]
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Half of this angle
    #[inline]
    pub fn half(self) -> Self {
        Self(self.0 / 2.0)
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    #[inline]
    pub fn tan(self) -> f64 {
        self.0.tan()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.degrees())
    }
}

/// Parse `"180 deg"`, `"37.5°"`, `".5deg"`, `"3.142 rad"` or a bare number
/// (radians)
impl FromStr for Angle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let start = s
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .ok_or_else(|| Error::invalid_input(format!("angle {:?} contains no digits", s)))?;

        let len = s[start..]
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(s.len() - start);
        let digits = &s[start..start + len];

        let mut value: f64 = digits
            .parse()
            .map_err(|_| Error::invalid_input(format!("angle {:?} is not a number", s)))?;

        if s[..start].trim_end().ends_with('-') {
            value = -value;
        }

        let unit = &s[start + len..];
        if unit.contains("deg") || unit.contains('°') {
            Ok(Self::from_degrees(value))
        } else {
            Ok(Self::from_radians(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_radians_and_degrees() {
        let angle = Angle::from_radians(PI);
        assert_relative_eq!(angle.radians(), PI);
        assert_relative_eq!(angle.degrees(), 180.0);
        assert_relative_eq!(Angle::right_angle().degrees(), 90.0);
    }

    #[test]
    fn test_parse_degrees() {
        let parsed: Vec<f64> = ["180 deg", "37.5°", ".5deg"]
            .iter()
            .map(|s| s.parse::<Angle>().unwrap().degrees())
            .collect();

        assert_relative_eq!(parsed[0], 180.0, epsilon = 1e-9);
        assert_relative_eq!(parsed[1], 37.5, epsilon = 1e-9);
        assert_relative_eq!(parsed[2], 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_parse_radians() {
        assert_relative_eq!("3.142 rad".parse::<Angle>().unwrap().radians(), 3.142);
        assert_relative_eq!("1".parse::<Angle>().unwrap().radians(), 1.0);
        assert_relative_eq!("-2 rad".parse::<Angle>().unwrap().radians(), -2.0);
    }

    #[test]
    fn test_parse_without_digits() {
        let err = "nothingNumeric".parse::<Angle>().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_display_in_degrees() {
        assert_eq!(Angle::from_degrees(45.0).to_string(), "45.00°");
    }

    #[test]
    fn test_between_vectors() {
        let angle =
            Angle::between(&Vector::new(1.0, 0.0, 0.0), &Vector::new(1.0, 1.0, 0.0)).unwrap();
        assert_relative_eq!(angle.degrees(), 45.0, epsilon = 1e-9);
        assert!(Angle::between(&Vector::zeros(), &Vector::x()).is_err());
    }
}
