// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{Error, Plane, Point, Result, EPSILON};

/// Face index triples paired with the vertex opposite each face
const FACES: [([usize; 3], usize); 4] = [
    ([0, 1, 2], 3),
    ([0, 1, 3], 2),
    ([0, 2, 3], 1),
    ([1, 2, 3], 0),
];

/// Four non-coplanar points
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tetrahedron {
    vertices: [Point; 4],
}

impl Tetrahedron {
    pub fn new(vertices: [Point; 4]) -> Result<Self> {
        let [a, b, c, d] = &vertices;
        let six_volume = (b - a).cross(&(c - a)).dot(&(d - a));
        if six_volume.abs() < EPSILON {
            return Err(Error::degenerate_geometry("tetrahedron vertices are coplanar"));
        }
        Ok(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point; 4] {
        &self.vertices
    }

    /// Whether `p` is strictly inside
    ///
    /// For every face, `p` must be on the same side as the opposite vertex.
    /// A point within [`EPSILON`] of any face plane is not inside, so the
    /// vertices themselves are rejected.
    pub fn contains_point(&self, p: &Point) -> bool {
        FACES.iter().all(|([i, j, k], opposite)| {
            let [a, b, c] = [*i, *j, *k].map(|v| self.vertices[v]);
            let Ok(plane) = Plane::from_points(&a, &b, &c) else {
                return false;
            };
            let expected = side(plane.signed_distance(&self.vertices[*opposite]));
            expected != 0 && side(plane.signed_distance(p)) == expected
        })
    }
}

#[inline]
fn side(distance: f64) -> i8 {
    if distance > EPSILON {
        1
    } else if distance < -EPSILON {
        -1
    } else {
        0
    }
}
