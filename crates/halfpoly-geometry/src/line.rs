// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Infinite lines

use crate::{Direction, Point};

/// An infinite line through `point` along `direction`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub point: Point,
    pub direction: Direction,
}

impl Line {
    #[inline]
    pub fn new(point: Point, direction: Direction) -> Self {
        Self { point, direction }
    }

    /// Point at signed distance `t` from the anchor point
    #[inline]
    pub fn point_from_distance(&self, t: f64) -> Point {
        self.point + self.direction.as_vector() * t
    }

    /// The same line anchored `t` further along
    #[inline]
    pub fn line_from_distance(&self, t: f64) -> Line {
        Line::new(self.point_from_distance(t), self.direction)
    }

    /// Shortest distance from `p` to the line
    pub fn distance_to_point(&self, p: &Point) -> f64 {
        (p - self.point).cross(self.direction.as_vector()).norm()
    }
}
