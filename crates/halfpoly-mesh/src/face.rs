// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Triangular faces
//!
//! [`Face`] is a plain index triple. [`FaceRef`] binds one to its mesh and
//! derives geometry from the live vertex positions on every call; nothing is
//! cached, so rotating the mesh is reflected immediately.

use crate::{offset, Edge, EdgeRef, Mesh, Result};
use halfpoly_geometry::{Angle, Direction, Plane, Point};

/// Vertex index triple `(a, b, c)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Face {
    pub indices: [u32; 3],
}

impl Face {
    #[inline]
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self { indices: [a, b, c] }
    }

    #[inline]
    pub fn a(&self) -> u32 {
        self.indices[0]
    }

    #[inline]
    pub fn b(&self) -> u32 {
        self.indices[1]
    }

    #[inline]
    pub fn c(&self) -> u32 {
        self.indices[2]
    }

    /// Edge `k`: from index `k` to index `k + 1` (mod 3)
    #[inline]
    pub fn edge(&self, k: usize) -> Edge {
        Edge::new(self.indices[k % 3], self.indices[(k + 1) % 3])
    }

    /// Edges a-b, b-c, c-a
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        [self.edge(0), self.edge(1), self.edge(2)]
    }

    /// The index not on edge `k`
    #[inline]
    pub fn opposite(&self, k: usize) -> u32 {
        self.indices[(k + 2) % 3]
    }

    #[inline]
    pub fn contains(&self, index: u32) -> bool {
        self.indices.contains(&index)
    }

    #[inline]
    pub fn position_of(&self, index: u32) -> Option<usize> {
        self.indices.iter().position(|&i| i == index)
    }

    /// Whether the face walks from `from` directly to `to`
    pub fn traverses(&self, from: u32, to: u32) -> bool {
        (0..3).any(|k| self.indices[k] == from && self.indices[(k + 1) % 3] == to)
    }

    /// Same triangle with opposite winding: `(c, b, a)`
    #[inline]
    pub fn flipped(&self) -> Self {
        Self::new(self.c(), self.b(), self.a())
    }

    /// Whether `other` is this face up to rotation of its indices
    pub fn same_cycle(&self, other: &Face) -> bool {
        (0..3).any(|r| {
            (0..3).all(|k| self.indices[k] == other.indices[(k + r) % 3])
        })
    }
}

impl From<[u32; 3]> for Face {
    fn from(indices: [u32; 3]) -> Self {
        Self { indices }
    }
}

/// A face bound to its mesh
#[derive(Debug, Clone, Copy)]
pub struct FaceRef<'a> {
    mesh: &'a Mesh,
    index: usize,
}

impl<'a> FaceRef<'a> {
    pub(crate) fn new(mesh: &'a Mesh, index: usize) -> Self {
        Self { mesh, index }
    }

    /// Position in the mesh's face sequence
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn face(&self) -> Face {
        self.mesh.raw_face(self.index)
    }

    #[inline]
    pub fn indices(&self) -> [u32; 3] {
        self.face().indices
    }

    pub fn contains_vertex(&self, vertex: u32) -> bool {
        self.face().contains(vertex)
    }

    pub fn vertices(&self) -> [Point; 3] {
        self.face().indices.map(|i| self.mesh.position(i))
    }

    /// Plane oriented by `(b - a) × (c - a)`
    pub fn plane(&self) -> Result<Plane> {
        let [a, b, c] = self.vertices();
        Ok(Plane::from_points(&a, &b, &c)?)
    }

    pub fn normal(&self) -> Result<Direction> {
        Ok(self.plane()?.normal)
    }

    pub fn edges(&self) -> [EdgeRef<'a>; 3] {
        self.face().edges().map(|edge| EdgeRef::new(self.mesh, edge))
    }

    pub fn center(&self) -> Point {
        let [a, b, c] = self.vertices();
        Point::from((a.coords + b.coords + c.coords) / 3.0)
    }

    pub fn area(&self) -> f64 {
        let [a, b, c] = self.vertices();
        (b - a).cross(&(c - a)).norm() / 2.0
    }

    /// Signed volume of the tetrahedron spanned with the origin
    pub fn signed_volume(&self) -> f64 {
        signed_volume(&self.vertices())
    }

    /// The other face across edge `k`, or `None` on a boundary
    pub fn adjacent_face(&self, k: usize) -> Result<Option<FaceRef<'a>>> {
        let neighbour = self
            .mesh
            .edge_index()
            .neighbour(self.mesh.raw_faces(), self.index, k % 3)?;
        Ok(neighbour.map(|index| FaceRef::new(self.mesh, index)))
    }

    /// Neighbours across edges a-b, b-c, c-a
    pub fn adjacent_faces(&self) -> Result<[Option<FaceRef<'a>>; 3]> {
        Ok([
            self.adjacent_face(0)?,
            self.adjacent_face(1)?,
            self.adjacent_face(2)?,
        ])
    }

    /// Angle between this face's normal and each neighbour's normal
    ///
    /// A boundary edge measures against the normal projected onto the
    /// ground plane (perpendicular to the mesh's `up`). A horizontal face on
    /// a boundary reads a right angle.
    pub fn dihedrals(&self) -> Result<[Angle; 3]> {
        let normal = self.normal()?;
        let up = self.mesh.options().up;
        let epsilon = self.mesh.options().epsilon;

        let mut angles = [Angle::default(); 3];
        for (k, angle) in angles.iter_mut().enumerate() {
            *angle = match self.adjacent_face(k)? {
                Some(neighbour) => normal.angle_to(&neighbour.normal()?),
                None => {
                    let ground =
                        normal.into_inner() - up.into_inner() * normal.dot(up.as_vector());
                    if ground.norm() < epsilon {
                        Angle::right_angle()
                    } else {
                        Angle::between(&normal, &ground)?
                    }
                }
            };
        }
        Ok(angles)
    }

    /// Offset points at height `h` above each vertex
    pub fn points_above(&self, h: f64) -> Result<[Point; 3]> {
        offset::points_above(self.mesh, self.index, h)
    }
}

impl PartialEq for FaceRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.mesh, other.mesh) && self.index == other.index
    }
}

/// `dot(a, (b - a) × (c - a)) / 6`
#[inline]
pub(crate) fn signed_volume([a, b, c]: &[Point; 3]) -> f64 {
    a.coords.dot(&(b - a).cross(&(c - a))) / 6.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MeshOptions;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn tent() -> Mesh {
        // two slopes meeting at a ridge along z
        Mesh::with_options(
            vec![
                [0.0, 1.0, 0.0],
                [0.0, 1.0, 2.0],
                [1.0, 0.0, 0.0],
                [-1.0, 0.0, 0.0],
            ],
            vec![vec![0, 1, 2], vec![1, 0, 3]],
            MeshOptions::default().with_winding(false),
        )
        .unwrap()
    }

    #[test]
    fn test_face_indices() {
        let face = Face::new(4, 5, 6);
        assert_eq!((face.a(), face.b(), face.c()), (4, 5, 6));
        assert_eq!(face.edge(1), Edge::new(5, 6));
        assert_eq!(face.opposite(0), 6);
        assert_eq!(face.flipped(), Face::new(6, 5, 4));
        assert!(face.traverses(6, 4));
        assert!(!face.traverses(4, 6));
        assert!(face.same_cycle(&Face::new(5, 6, 4)));
        assert!(!face.same_cycle(&Face::new(6, 5, 4)));
    }

    #[test]
    fn test_face_geometry() {
        let mesh = Mesh::new(
            vec![[0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 3.0, 0.0]],
            vec![vec![0, 1, 2]],
        )
        .unwrap();
        let face = mesh.face(0).unwrap();

        assert_relative_eq!(face.area(), 4.5);
        assert_relative_eq!(face.center(), Point::new(1.0, 1.0, 0.0));
        assert_relative_eq!(face.normal().unwrap().into_inner(), Vector3::z());
        assert!(face.contains_vertex(2));
        assert!(!face.contains_vertex(3));
    }

    #[test]
    fn test_adjacent_faces() {
        let mesh = tent();
        let first = mesh.face(0).unwrap();
        let adjacent = first.adjacent_faces().unwrap();

        assert_eq!(adjacent[0].map(|f| f.index()), Some(1));
        assert!(adjacent[1].is_none());
        assert!(adjacent[2].is_none());
    }

    #[test]
    fn test_dihedral_across_ridge() {
        let mesh = tent();
        let dihedrals = mesh.face(0).unwrap().dihedrals().unwrap();
        assert_relative_eq!(dihedrals[0].degrees(), 90.0, epsilon = 1e-9);
        // boundary edges measure against the ground projection
        assert_relative_eq!(dihedrals[1].degrees(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flat_boundary_dihedral_is_right_angle() {
        let mesh = Mesh::new(
            vec![[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]],
            vec![vec![0, 1, 2]],
        )
        .unwrap();
        let dihedrals = mesh.face(0).unwrap().dihedrals().unwrap();
        for angle in dihedrals {
            assert_relative_eq!(angle.degrees(), 90.0);
        }
    }

    #[test]
    fn test_geometry_follows_vertex_positions() {
        let mut mesh = Mesh::new(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![vec![0, 1, 2]],
        )
        .unwrap();
        let before = mesh.face(0).unwrap().normal().unwrap();

        let quarter = halfpoly_geometry::Quaternion::from_angle_and_direction(
            Angle::right_angle(),
            &Direction::right(),
        );
        mesh.rotate(&quarter).unwrap();

        let after = mesh.face(0).unwrap().normal().unwrap();
        assert_relative_eq!(before.angle_to(&after).degrees(), 90.0, epsilon = 1e-9);
    }
}
