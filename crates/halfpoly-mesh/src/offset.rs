// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Offset points above a face
//!
//! For each vertex the offset point is where the surrounding face planes,
//! each pushed out by `h` along its normal, meet. Adjacent faces therefore
//! agree on the offset point of a shared vertex.
//!
//! Fallbacks, in order:
//!
//! 1. this face with the faces across the two edges meeting at the vertex
//!    (a boundary edge contributes a horizontal plane through the vertex)
//! 2. any pairwise non-parallel triple of faces around the vertex
//! 3. a single distinct normal: straight out by `h`
//! 4. two or more distinct normals: the kite point on the bisector of the
//!    widest pair, `h / cos(θ / 2)` out

use crate::{Error, FaceRef, Mesh, Result};
use halfpoly_geometry::{Direction, Plane, Point};
use tracing::{trace, warn};

pub(crate) fn points_above(mesh: &Mesh, face_index: usize, h: f64) -> Result<[Point; 3]> {
    let face = FaceRef::new(mesh, face_index);
    let plane = face.plane()?;
    let indices = face.indices();

    let mut points = [Point::origin(); 3];
    for (k, point) in points.iter_mut().enumerate() {
        *point = point_above(mesh, &face, &plane, indices[k], k, h)?;
    }
    Ok(points)
}

fn point_above(
    mesh: &Mesh,
    face: &FaceRef<'_>,
    plane: &Plane,
    vertex: u32,
    k: usize,
    h: f64,
) -> Result<Point> {
    let options = mesh.options();
    let epsilon = options.epsilon;
    let position = mesh.position(vertex);

    let neighbour_plane = |edge: usize| -> Result<Plane> {
        match face.adjacent_face(edge)? {
            Some(neighbour) => Ok(neighbour.plane()?.scaled(h)),
            None => Ok(Plane::through_point(options.up, &position)),
        }
    };

    let own = plane.scaled(h);
    let now = neighbour_plane(k)?;
    let before = neighbour_plane((k + 2) % 3)?;

    if pairwise_distinct(&[own, now, before], epsilon) {
        if let Some(p) = own.point_of_intersection_with_planes(&now, &before) {
            return Ok(p);
        }
    }

    // Distinct planes around the vertex, starting with this face.
    let mut distinct = vec![*plane];
    for other in mesh.faces_around(vertex) {
        if other.index() == face.index() {
            continue;
        }
        let Ok(candidate) = other.plane() else {
            continue;
        };
        if distinct.iter().all(|p| !p.is_parallel_to(&candidate, epsilon)) {
            distinct.push(candidate);
        }
    }

    let shifted: Vec<Plane> = distinct.iter().map(|p| p.scaled(h)).collect();
    for i in 0..shifted.len() {
        for j in i + 1..shifted.len() {
            for l in j + 1..shifted.len() {
                let meet = shifted[i].point_of_intersection_with_planes(&shifted[j], &shifted[l]);
                if let Some(p) = meet {
                    trace!(vertex, "offset from incident face triple");
                    return Ok(p);
                }
            }
        }
    }

    if distinct.len() == 1 {
        warn!(vertex, "offset point falls back to the face normal");
        return Ok(position + plane.normal.as_vector() * h);
    }

    kite_point(&position, &distinct, h, vertex)
}

/// Whether no two planes are parallel
fn pairwise_distinct(planes: &[Plane], epsilon: f64) -> bool {
    planes.iter().enumerate().all(|(i, a)| {
        planes[i + 1..]
            .iter()
            .all(|b| !a.is_parallel_to(b, epsilon))
    })
}

/// Offset along the bisector of the two most divergent normals
fn kite_point(position: &Point, planes: &[Plane], h: f64, vertex: u32) -> Result<Point> {
    let mut widest: Option<(Direction, Direction, f64)> = None;
    for (i, a) in planes.iter().enumerate() {
        for b in &planes[i + 1..] {
            let angle = a.normal.angle_to(&b.normal).radians();
            if widest.map_or(true, |(_, _, best)| angle > best) {
                widest = Some((a.normal, b.normal, angle));
            }
        }
    }

    let (n1, n2, angle) = widest.ok_or_else(|| {
        Error::degenerate_geometry(format!(
            "vertex {} has no face normals to offset along",
            vertex
        ))
    })?;

    let bisector = Direction::new(n1.into_inner() + n2.into_inner()).map_err(|_| {
        Error::degenerate_geometry(format!("vertex {} sits between opposing faces", vertex))
    })?;

    warn!(
        vertex,
        degrees = angle.to_degrees(),
        "offset point falls back to kite construction"
    );
    Ok(position + bisector.as_vector() * (h / (angle / 2.0).cos()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MeshOptions;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    #[test]
    fn test_single_face_offsets_along_normal() {
        let mesh = Mesh::new(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![vec![0, 1, 2]],
        )
        .unwrap();
        let points = points_above(&mesh, 0, 2.0).unwrap();
        assert_relative_eq!(points[0], Point::new(0.0, 0.0, 2.0), epsilon = 1e-12);
        assert_relative_eq!(points[1], Point::new(1.0, 0.0, 2.0), epsilon = 1e-12);
        assert_relative_eq!(points[2], Point::new(0.0, 1.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_ridge_uses_kite() {
        // two 45° slopes meeting along the z axis at height 1
        let mesh = Mesh::with_options(
            vec![
                [0.0, 1.0, 0.0],
                [0.0, 1.0, 2.0],
                [1.0, 0.0, 0.0],
                [-1.0, 0.0, 0.0],
            ],
            vec![vec![0, 1, 2], vec![1, 0, 3]],
            MeshOptions::default().with_winding(false),
        )
        .unwrap();

        let h = 0.5;
        let points = points_above(&mesh, 0, h).unwrap();
        let offset = points[0] - Point::new(0.0, 1.0, 0.0);
        assert_relative_eq!(offset.norm(), h * 2f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(offset.normalize(), Vector3::y(), epsilon = 1e-9);

        // the eave vertex only sees its own face
        let eave = points[2] - Point::new(1.0, 0.0, 0.0);
        assert_relative_eq!(eave, Vector3::new(1.0, 1.0, 0.0).normalize() * h, epsilon = 1e-9);
    }

    #[test]
    fn test_pairwise_distinct() {
        let a = Plane::new(Direction::up(), 0.0);
        let b = Plane::new(Direction::right(), 0.0);
        let c = Plane::new(Direction::down(), 3.0);
        assert!(pairwise_distinct(&[a, b], 1e-4));
        assert!(!pairwise_distinct(&[a, b, c], 1e-4));
    }
}
