// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon triangulation
//!
//! Ear clipping over a circular working list, measured against one
//! reference normal taken from the polygon's plane. The emitted triangles
//! keep the orientation of the input loop and use every input vertex;
//! straight vertices are kept, so a simple loop always yields `n - 2`
//! triangles. Self-intersecting loops run out of ears and fail.

use crate::{Error, Result};
use halfpoly_geometry::{signed_triangle_area, Point, Polygon, Vector};
use tracing::{debug, trace};

/// Triangulate one planar index loop into `n - 2` index triples
///
/// `positions` is the full vertex table the loop indexes into. Every loop
/// vertex must lie within `epsilon` of the polygon's plane.
pub fn triangulate(
    indices: &[u32],
    positions: &[Point],
    epsilon: f64,
) -> Result<Vec<[u32; 3]>> {
    let n = indices.len();
    if n < 3 {
        return Err(Error::triangulation(format!(
            "a polygon needs at least 3 vertices, got {}",
            n
        )));
    }
    if let Some(&bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
        return Err(Error::invalid_input(format!(
            "index {} is out of range for {} positions",
            bad,
            positions.len()
        )));
    }
    if n == 3 {
        return Ok(vec![[indices[0], indices[1], indices[2]]]);
    }

    let points: Vec<Point> = indices.iter().map(|&i| positions[i as usize]).collect();
    let polygon = Polygon::new(points)?;
    if let Some(k) = polygon.first_off_plane(epsilon) {
        return Err(Error::degenerate_geometry(format!(
            "vertex {} of the polygon lies off its plane",
            indices[k]
        )));
    }

    let normal = polygon.normal().into_inner();
    let reversed = polygon.clockwise_about(&normal);
    let points = polygon.points();

    let mut working: Vec<usize> = (0..n).collect();
    if reversed {
        working.reverse();
    }

    let tolerance = epsilon * epsilon;
    let limit = n * n + n;
    let mut triangles = Vec::with_capacity(n - 2);
    let mut cursor = 0;
    let mut iterations = 0;

    while working.len() > 2 {
        iterations += 1;
        if iterations > limit {
            return Err(Error::triangulation(format!(
                "no ear found after {} iterations with {} vertices left",
                limit,
                working.len()
            )));
        }

        let m = working.len();
        let prev = working[(cursor + m - 1) % m];
        let cur = working[cursor];
        let next = working[(cursor + 1) % m];

        if is_ear(points, &working, prev, cur, next, &normal, tolerance) {
            trace!(prev, cur, next, "clipped ear");
            triangles.push(if reversed {
                [indices[next], indices[cur], indices[prev]]
            } else {
                [indices[prev], indices[cur], indices[next]]
            });

            working.remove(cursor);
            if cursor >= working.len() {
                cursor = 0;
            }
            if !working.is_empty() {
                cursor = (cursor + 1) % working.len();
            }
        } else {
            cursor = (cursor + 1) % m;
        }
    }

    debug!(vertices = n, triangles = triangles.len(), "triangulated polygon");
    Ok(triangles)
}

/// Convex at `cur` about `normal` and no other working vertex strictly inside
fn is_ear(
    points: &[Point],
    working: &[usize],
    prev: usize,
    cur: usize,
    next: usize,
    normal: &Vector,
    tolerance: f64,
) -> bool {
    let (a, b, c) = (&points[prev], &points[cur], &points[next]);
    if signed_triangle_area(a, b, c, normal) >= -tolerance {
        return false;
    }

    !working
        .iter()
        .filter(|&&i| i != prev && i != cur && i != next)
        .any(|&i| strictly_inside(&points[i], a, b, c, normal, tolerance))
}

/// Point strictly inside a triangle that winds negatively about `normal`
#[inline]
fn strictly_inside(
    p: &Point,
    a: &Point,
    b: &Point,
    c: &Point,
    normal: &Vector,
    tolerance: f64,
) -> bool {
    let side = |from: &Point, to: &Point| normal.dot(&(to - from).cross(&(p - from)));
    side(a, b) < -tolerance && side(b, c) < -tolerance && side(c, a) < -tolerance
}
