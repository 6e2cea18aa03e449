// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Edge to face index
//!
//! Maps each undirected edge (sorted vertex pair) to the faces that use it.
//! The mesh keeps it current across face mutations so neighbour lookups do
//! not scan the face list.

use crate::{Error, Face, Result};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

type FaceList = SmallVec<[usize; 2]>;

#[derive(Debug, Clone, Default)]
pub(crate) struct EdgeIndex {
    map: FxHashMap<(u32, u32), FaceList>,
}

impl EdgeIndex {
    pub fn build(faces: &[Face]) -> Self {
        let mut index = Self::default();
        index.map.reserve(faces.len() * 3 / 2);
        for (face_index, face) in faces.iter().enumerate() {
            index.insert_face(face_index, face);
        }
        index
    }

    pub fn insert_face(&mut self, face_index: usize, face: &Face) {
        for edge in face.edges() {
            let faces = self.map.entry(edge.key()).or_default();
            if !faces.contains(&face_index) {
                faces.push(face_index);
            }
        }
    }

    pub fn remove_face(&mut self, face_index: usize, face: &Face) {
        for edge in face.edges() {
            let key = edge.key();
            if let Some(faces) = self.map.get_mut(&key) {
                faces.retain(|f| *f != face_index);
                if faces.is_empty() {
                    self.map.remove(&key);
                }
            }
        }
    }

    /// Faces using the edge `key`; empty when the edge is unknown
    pub fn faces_on(&self, key: (u32, u32)) -> &[usize] {
        self.map.get(&key).map(|faces| faces.as_slice()).unwrap_or(&[])
    }

    #[inline]
    pub fn contains(&self, key: (u32, u32)) -> bool {
        self.map.contains_key(&key)
    }

    /// The face across edge `k` of `faces[face_index]`
    ///
    /// A candidate shares the edge, is not the face itself and does not use
    /// the face's third vertex. More than one candidate means the mesh is not
    /// manifold at that edge.
    pub fn neighbour(&self, faces: &[Face], face_index: usize, k: usize) -> Result<Option<usize>> {
        let face = &faces[face_index];
        let edge = face.edge(k);
        let third = face.opposite(k);

        let candidates: SmallVec<[usize; 2]> = self
            .faces_on(edge.key())
            .iter()
            .copied()
            .filter(|&other| other != face_index && !faces[other].contains(third))
            .collect();

        match candidates.len() {
            0 => Ok(None),
            1 => Ok(Some(candidates[0])),
            _ => {
                let mut shared = candidates.to_vec();
                shared.push(face_index);
                shared.sort_unstable();
                Err(Error::NonManifoldMesh {
                    a: edge.a,
                    b: edge.b,
                    faces: shared,
                })
            }
        }
    }

    /// Keys of edges used by exactly one face
    pub fn boundary_keys(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.map
            .iter()
            .filter(|(_, faces)| faces.len() == 1)
            .map(|(key, _)| *key)
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.map.len()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fan() -> Vec<Face> {
        vec![Face::new(0, 1, 2), Face::new(2, 1, 3), Face::new(1, 0, 4)]
    }

    #[test]
    fn test_build_counts_unique_edges() {
        let index = EdgeIndex::build(&fan());
        // 0-1, 1-2, 2-0, 1-3, 3-2, 0-4, 4-1
        assert_eq!(index.edge_count(), 7);
        assert_eq!(index.faces_on((1, 2)), &[0, 1]);
        assert_eq!(index.faces_on((0, 1)), &[0, 2]);
        assert!(index.faces_on((5, 6)).is_empty());
    }

    #[test]
    fn test_neighbour_lookup() {
        let faces = fan();
        let index = EdgeIndex::build(&faces);
        assert_eq!(index.neighbour(&faces, 0, 0).unwrap(), Some(2));
        assert_eq!(index.neighbour(&faces, 0, 1).unwrap(), Some(1));
        assert_eq!(index.neighbour(&faces, 0, 2).unwrap(), None);
    }

    #[test]
    fn test_remove_and_insert() {
        let faces = fan();
        let mut index = EdgeIndex::build(&faces);

        index.remove_face(1, &faces[1]);
        assert_eq!(index.faces_on((1, 2)), &[0]);
        assert!(!index.contains((1, 3)));

        index.insert_face(1, &faces[1]);
        assert_eq!(index.faces_on((1, 2)), &[0, 1]);
        assert_eq!(index.boundary_keys().count(), 5);
    }

    #[test]
    fn test_non_manifold_edge() {
        let faces = vec![Face::new(0, 1, 2), Face::new(1, 0, 3), Face::new(0, 1, 4)];
        let index = EdgeIndex::build(&faces);

        let err = index.neighbour(&faces, 0, 0).unwrap_err();
        assert_eq!(
            err,
            Error::NonManifoldMesh {
                a: 0,
                b: 1,
                faces: vec![0, 1, 2]
            }
        );
    }
}
