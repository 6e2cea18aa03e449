// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Indexed triangle mesh
//!
//! The mesh owns its vertices, faces and the edge index. Elements are read
//! through borrowed views ([`VertexRef`], [`FaceRef`], [`EdgeRef`]) that
//! cannot outlive the mesh; every mutation goes through `&mut Mesh` and
//! keeps the edge index current.

use crate::adjacency::EdgeIndex;
use crate::triangulator::triangulate;
use crate::winding::{wind_faces, WindingReport};
use crate::{
    offset, Edge, EdgeRef, Error, Face, FaceRef, MeshOptions, Result, Vertex, VertexRef,
    WindingMode,
};
use halfpoly_geometry::{Direction, Point, Quaternion, Vector};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
    edge_index: EdgeIndex,
    options: MeshOptions,
    disposed: bool,
}

impl Mesh {
    /// Build a mesh with default options
    ///
    /// Faces with more than three indices are triangulated, then the
    /// winding is normalized.
    pub fn new(vertices: Vec<[f64; 3]>, faces: Vec<Vec<u32>>) -> Result<Self> {
        Self::with_options(vertices, faces, MeshOptions::default())
    }

    #[tracing::instrument(skip_all, fields(vertices = vertices.len(), faces = faces.len()))]
    pub fn with_options(
        vertices: Vec<[f64; 3]>,
        faces: Vec<Vec<u32>>,
        options: MeshOptions,
    ) -> Result<Self> {
        if !(options.epsilon.is_finite() && options.epsilon > 0.0) {
            return Err(Error::invalid_input(format!(
                "epsilon must be a positive finite number, got {}",
                options.epsilon
            )));
        }

        let vertices = vertices
            .into_iter()
            .enumerate()
            .map(|(index, [x, y, z])| {
                if x.is_finite() && y.is_finite() && z.is_finite() {
                    Ok(Vertex::from_coords(x, y, z))
                } else {
                    Err(Error::invalid_vertex(index, "coordinates must be finite"))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let positions: Vec<Point> = vertices.iter().map(|v| v.position).collect();
        let mut triangles = Vec::with_capacity(faces.len());
        for (index, loop_indices) in faces.iter().enumerate() {
            validate_indices(index, loop_indices, vertices.len())?;
            if let [a, b, c] = loop_indices[..] {
                triangles.push(Face::new(a, b, c));
            } else {
                let split = triangulate(loop_indices, &positions, options.epsilon)?;
                triangles.extend(split.into_iter().map(Face::from));
            }
        }

        let edge_index = EdgeIndex::build(&triangles);
        let mut mesh = Self {
            vertices,
            faces: triangles,
            edge_index,
            options,
            disposed: false,
        };

        if options.wind {
            mesh.wind()?;
        }

        debug!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            edges = mesh.edge_count(),
            "built mesh"
        );
        Ok(mesh)
    }

    #[inline]
    pub fn options(&self) -> &MeshOptions {
        &self.options
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of unique edges
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_index.edge_count()
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn vertex(&self, index: u32) -> Result<VertexRef<'_>> {
        if self.disposed || index as usize >= self.vertices.len() {
            return Err(Error::unbound("vertex", index as usize));
        }
        Ok(VertexRef::new(self, index))
    }

    pub fn face(&self, index: usize) -> Result<FaceRef<'_>> {
        if self.disposed || index >= self.faces.len() {
            return Err(Error::unbound("face", index));
        }
        Ok(FaceRef::new(self, index))
    }

    /// The edge between vertices `a` and `b`, directed `a -> b`
    pub fn edge(&self, a: u32, b: u32) -> Result<EdgeRef<'_>> {
        self.vertex(a)?;
        self.vertex(b)?;
        let edge = Edge::new(a, b);
        if !self.edge_index.contains(edge.key()) {
            return Err(Error::invalid_input(format!(
                "({}, {}) is not an edge of the mesh",
                a, b
            )));
        }
        Ok(EdgeRef::new(self, edge))
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexRef<'_>> + '_ {
        (0..self.vertices.len() as u32).map(move |i| VertexRef::new(self, i))
    }

    pub fn faces(&self) -> impl Iterator<Item = FaceRef<'_>> + '_ {
        (0..self.faces.len()).map(move |i| FaceRef::new(self, i))
    }

    /// Faces using `vertex`, in ascending face order
    pub fn faces_around(&self, vertex: u32) -> impl Iterator<Item = FaceRef<'_>> + '_ {
        self.faces
            .iter()
            .enumerate()
            .filter(move |(_, face)| face.contains(vertex))
            .map(move |(i, _)| FaceRef::new(self, i))
    }

    /// Index of `face`, matching any rotation of its indices
    pub fn face_index_of(&self, face: &Face) -> Option<usize> {
        self.edge_index
            .faces_on(face.edge(0).key())
            .iter()
            .copied()
            .filter(|&i| self.faces[i].same_cycle(face))
            .min()
    }

    /// Unique edges in first-seen face order
    pub fn edges(&self) -> Result<Vec<EdgeRef<'_>>> {
        self.ensure_bound()?;
        let mut seen = FxHashSet::default();
        Ok(self
            .faces
            .iter()
            .flat_map(|face| face.edges())
            .filter(|edge| seen.insert(edge.key()))
            .map(|edge| EdgeRef::new(self, edge))
            .collect())
    }

    /// Edges used by exactly one face
    pub fn boundary_edges(&self) -> Result<Vec<EdgeRef<'_>>> {
        Ok(self
            .edges()?
            .into_iter()
            .filter(|edge| edge.is_boundary())
            .collect())
    }

    /// Whether every edge is shared by two faces
    pub fn is_closed(&self) -> Result<bool> {
        self.ensure_bound()?;
        Ok(!self.faces.is_empty() && self.edge_index.boundary_keys().next().is_none())
    }

    /// Mean vertex position
    pub fn center(&self) -> Result<Point> {
        self.ensure_bound()?;
        if self.vertices.is_empty() {
            return Err(Error::invalid_input("an empty mesh has no center"));
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vector::zeros(), |acc, v| acc + v.position.coords);
        Ok(Point::from(sum / self.vertices.len() as f64))
    }

    /// Total face area
    pub fn area(&self) -> Result<f64> {
        self.ensure_bound()?;
        Ok((0..self.faces.len())
            .into_par_iter()
            .map(|i| FaceRef::new(self, i).area())
            .sum())
    }

    /// Enclosed volume; positive for an outward-wound closed mesh
    pub fn volume(&self) -> Result<f64> {
        self.ensure_bound()?;
        Ok((0..self.faces.len())
            .into_par_iter()
            .map(|i| FaceRef::new(self, i).signed_volume())
            .sum())
    }

    /// Normal of every face, in face order
    pub fn face_normals(&self) -> Result<Vec<Direction>> {
        self.ensure_bound()?;
        (0..self.faces.len())
            .into_par_iter()
            .map(|i| FaceRef::new(self, i).normal())
            .collect()
    }

    /// Offset points of every face, in face order
    pub fn points_above(&self, h: f64) -> Result<Vec<[Point; 3]>> {
        self.ensure_bound()?;
        (0..self.faces.len())
            .map(|i| offset::points_above(self, i, h))
            .collect()
    }

    /// Normalize winding with the configured [`WindingMode`]
    pub fn wind(&mut self) -> Result<WindingReport> {
        self.wind_with(self.options.winding_mode)
    }

    pub fn wind_with(&mut self, mode: WindingMode) -> Result<WindingReport> {
        self.ensure_bound()?;
        let positions: Vec<Point> = self.vertices.iter().map(|v| v.position).collect();
        wind_faces(&mut self.faces, &self.edge_index, &positions, mode)
    }

    /// Replace face `index`, keeping the edge index current
    pub fn update_face(&mut self, index: usize, face: Face) -> Result<()> {
        if self.disposed || index >= self.faces.len() {
            return Err(Error::unbound("face", index));
        }
        validate_indices(index, &face.indices, self.vertices.len())?;

        let old = self.faces[index];
        self.edge_index.remove_face(index, &old);
        self.faces[index] = face;
        self.edge_index.insert_face(index, &face);
        Ok(())
    }

    /// Reverse the winding of face `index`
    pub fn flip_face(&mut self, index: usize) -> Result<()> {
        let flipped = self.face(index)?.face().flipped();
        self.update_face(index, flipped)
    }

    /// Cache unit(sum of incident face normals) on every vertex
    ///
    /// Degenerate faces contribute nothing; a vertex with no usable faces
    /// keeps no normal.
    pub fn compute_vertex_normals(&mut self) -> Result<()> {
        self.ensure_bound()?;
        let mut sums = vec![Vector::zeros(); self.vertices.len()];
        for face in self.faces() {
            if let Ok(normal) = face.normal() {
                for i in face.indices() {
                    sums[i as usize] += normal.into_inner();
                }
            }
        }

        for (vertex, sum) in self.vertices.iter_mut().zip(sums) {
            vertex.normal = Direction::new(sum).ok();
        }
        debug!(vertices = self.vertices.len(), "computed vertex normals");
        Ok(())
    }

    /// Rotate vertex positions and cached normals about the origin
    pub fn rotate(&mut self, rotation: &Quaternion) -> Result<()> {
        self.ensure_bound()?;
        for vertex in &mut self.vertices {
            vertex.position = rotation.rotate_point(&vertex.position);
            vertex.normal = vertex.normal.map(|n| n.rotate(rotation));
        }
        Ok(())
    }

    /// Drop all elements; later queries fail with `UnboundElement`
    pub fn dispose(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.edge_index.clear();
        self.disposed = true;
        debug!("disposed mesh");
    }

    fn ensure_bound(&self) -> Result<()> {
        if self.disposed {
            return Err(Error::unbound("mesh", 0));
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn position(&self, index: u32) -> Point {
        self.vertices[index as usize].position
    }

    #[inline]
    pub(crate) fn raw_vertex(&self, index: u32) -> &Vertex {
        &self.vertices[index as usize]
    }

    #[inline]
    pub(crate) fn raw_face(&self, index: usize) -> Face {
        self.faces[index]
    }

    #[inline]
    pub(crate) fn raw_faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub(crate) fn edge_index(&self) -> &EdgeIndex {
        &self.edge_index
    }
}

fn validate_indices(face: usize, indices: &[u32], vertex_count: usize) -> Result<()> {
    if indices.len() < 3 {
        return Err(Error::invalid_face(
            face,
            format!("needs at least 3 indices, got {}", indices.len()),
        ));
    }
    if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(Error::invalid_face(
            face,
            format!("index {} is out of range for {} vertices", bad, vertex_count),
        ));
    }
    for (k, i) in indices.iter().enumerate() {
        if indices[k + 1..].contains(i) {
            return Err(Error::invalid_face(face, format!("index {} is repeated", i)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use halfpoly_geometry::Angle;

    fn unit_tetrahedron() -> Mesh {
        Mesh::new(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            vec![vec![0, 1, 2], vec![0, 1, 3], vec![1, 2, 3], vec![0, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_short_face() {
        let err = Mesh::new(vec![[0.0; 3], [1.0, 0.0, 0.0]], vec![vec![0, 1]]).unwrap_err();
        assert!(matches!(err, Error::InvalidFace { index: 0, .. }));
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let vertices = vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let err = Mesh::new(vertices, vec![vec![0, 1, 3]]).unwrap_err();
        assert!(matches!(err, Error::InvalidFace { index: 0, .. }));
    }

    #[test]
    fn test_rejects_repeated_index() {
        let vertices = vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let err = Mesh::new(vertices, vec![vec![0, 1, 1]]).unwrap_err();
        assert!(matches!(err, Error::InvalidFace { .. }));
    }

    #[test]
    fn test_rejects_non_finite_vertex() {
        let err = Mesh::new(vec![[0.0; 3], [f64::INFINITY, 0.0, 0.0]], vec![]).unwrap_err();
        assert!(matches!(err, Error::InvalidVertex { index: 1, .. }));
    }

    #[test]
    fn test_rejects_bad_epsilon() {
        let options = MeshOptions::default().with_epsilon(0.0);
        let err = Mesh::with_options(vec![], vec![], options).unwrap_err();
        assert!(matches!(err, Error::Geometry(_)));
    }

    #[test]
    fn test_tetrahedron_properties() {
        let mesh = unit_tetrahedron();
        assert_eq!(mesh.edges().unwrap().len(), 6);
        assert!(mesh.is_closed().unwrap());
        assert!(mesh.boundary_edges().unwrap().is_empty());
        assert_relative_eq!(mesh.volume().unwrap(), 1.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(mesh.center().unwrap(), Point::new(0.25, 0.25, 0.25));
    }

    #[test]
    fn test_face_index_of() {
        let mesh = unit_tetrahedron();
        for face in mesh.faces() {
            let [a, b, c] = face.indices();
            assert_eq!(mesh.face_index_of(&Face::new(b, c, a)), Some(face.index()));
        }
        assert_eq!(mesh.face_index_of(&Face::new(0, 1, 9)), None);
    }

    #[test]
    fn test_update_face_keeps_edge_index() {
        let mut mesh = Mesh::with_options(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
            vec![vec![0, 1, 2]],
            MeshOptions::default().with_winding(false),
        )
        .unwrap();

        mesh.update_face(0, Face::new(1, 3, 2)).unwrap();
        assert!(mesh.edge(0, 1).is_err());
        assert!(mesh.edge(3, 2).is_ok());
        assert_eq!(mesh.edge_count(), 3);

        let err = mesh.update_face(0, Face::new(1, 3, 7)).unwrap_err();
        assert!(matches!(err, Error::InvalidFace { .. }));
    }

    #[test]
    fn test_flip_face() {
        let mut mesh = unit_tetrahedron();
        let before = mesh.face(0).unwrap().face();
        mesh.flip_face(0).unwrap();
        assert_eq!(mesh.face(0).unwrap().face(), before.flipped());
        assert!(mesh.flip_face(10).is_err());
    }

    #[test]
    fn test_vertex_normals() {
        let mut mesh = unit_tetrahedron();
        mesh.compute_vertex_normals().unwrap();
        let normal = mesh.vertex(3).unwrap().normal().unwrap();
        // apex above the origin corner leans away from the other three
        assert!(normal.z > 0.0);
        assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_preserves_volume() {
        let mut mesh = unit_tetrahedron();
        mesh.compute_vertex_normals().unwrap();
        let normal = mesh.vertex(0).unwrap().normal().unwrap();

        let axis = Direction::from_xyz(1.0, 1.0, 0.0).unwrap();
        let rotation = Quaternion::from_angle_and_direction(Angle::from_degrees(40.0), &axis);
        mesh.rotate(&rotation).unwrap();

        assert_relative_eq!(mesh.volume().unwrap(), 1.0 / 6.0, epsilon = 1e-12);
        let rotated = mesh.vertex(0).unwrap().normal().unwrap();
        assert_relative_eq!(rotated.into_inner(), rotation.rotate(&normal), epsilon = 1e-12);
    }

    #[test]
    fn test_dispose() {
        let mut mesh = unit_tetrahedron();
        mesh.dispose();

        assert!(mesh.is_disposed());
        assert_eq!(mesh.vertex(0).unwrap_err(), Error::unbound("vertex", 0));
        assert_eq!(mesh.face(0).unwrap_err(), Error::unbound("face", 0));
        assert!(matches!(mesh.edge(0, 1), Err(Error::UnboundElement { .. })));
        assert!(matches!(mesh.center(), Err(Error::UnboundElement { .. })));
        assert!(mesh.wind().is_err());
    }

    #[test]
    fn test_aggregates_fail_after_dispose() {
        let mut mesh = unit_tetrahedron();
        mesh.dispose();

        let unbound = Error::unbound("mesh", 0);
        assert_eq!(mesh.area().unwrap_err(), unbound);
        assert_eq!(mesh.volume().unwrap_err(), unbound);
        assert_eq!(mesh.edges().unwrap_err(), unbound);
        assert_eq!(mesh.boundary_edges().unwrap_err(), unbound);
        assert_eq!(mesh.is_closed().unwrap_err(), unbound);
        assert_eq!(mesh.face_normals().unwrap_err(), unbound);
        assert_eq!(mesh.points_above(1.0).unwrap_err(), unbound);
        assert_eq!(mesh.compute_vertex_normals().unwrap_err(), unbound);
        assert_eq!(mesh.rotate(&Quaternion::identity()).unwrap_err(), unbound);
    }
}
