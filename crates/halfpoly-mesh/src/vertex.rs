// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{FaceRef, Mesh};
use halfpoly_geometry::{Direction, Point};

/// A mesh vertex with an optional cached normal
///
/// The normal is only set by [`Mesh::compute_vertex_normals`]; moving the
/// vertex does not refresh it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub position: Point,
    pub normal: Option<Direction>,
}

impl Vertex {
    #[inline]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            normal: None,
        }
    }

    #[inline]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point::new(x, y, z))
    }
}

/// A vertex bound to its mesh
#[derive(Debug, Clone, Copy)]
pub struct VertexRef<'a> {
    mesh: &'a Mesh,
    index: u32,
}

impl<'a> VertexRef<'a> {
    pub(crate) fn new(mesh: &'a Mesh, index: u32) -> Self {
        Self { mesh, index }
    }

    /// Position in the mesh's vertex sequence
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.mesh.position(self.index)
    }

    /// Cached normal, if [`Mesh::compute_vertex_normals`] has run
    #[inline]
    pub fn normal(&self) -> Option<Direction> {
        self.mesh.raw_vertex(self.index).normal
    }

    /// Faces using this vertex, in ascending face order
    pub fn faces(&self) -> impl Iterator<Item = FaceRef<'a>> + 'a {
        self.mesh.faces_around(self.index)
    }
}

impl PartialEq for VertexRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.mesh, other.mesh) && self.index == other.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_positions_are_distinct_vertices() {
        let mesh = Mesh::new(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]],
            vec![vec![0, 1, 2]],
        )
        .unwrap();

        let first = mesh.vertex(0).unwrap();
        let duplicate = mesh.vertex(3).unwrap();
        assert_eq!(first.position(), duplicate.position());
        assert_ne!(first, duplicate);
        assert_eq!(first.faces().count(), 1);
        assert_eq!(duplicate.faces().count(), 0);
    }

    #[test]
    fn test_normal_unset_until_computed() {
        let mut mesh = Mesh::new(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![vec![0, 1, 2]],
        )
        .unwrap();
        assert!(mesh.vertex(0).unwrap().normal().is_none());

        mesh.compute_vertex_normals().unwrap();
        assert_eq!(mesh.vertex(0).unwrap().normal(), Some(Direction::forwards()));
    }
}
