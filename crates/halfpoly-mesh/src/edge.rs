// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh edges
//!
//! [`Edge`] keeps its endpoints in traversal order, but equality and hashing
//! use the sorted pair, so `(a, b)` and `(b, a)` name the same edge.

use crate::{FaceRef, Mesh, Result};
use halfpoly_geometry::{Direction, Line, Point};
use std::hash::{Hash, Hasher};

/// Directed vertex index pair with undirected identity
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub a: u32,
    pub b: u32,
}

impl Edge {
    #[inline]
    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }

    /// Sorted index pair used as the undirected identity
    #[inline]
    pub fn key(&self) -> (u32, u32) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }

    #[inline]
    pub fn contains(&self, index: u32) -> bool {
        self.a == index || self.b == index
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<(u32, u32)> for Edge {
    fn from((a, b): (u32, u32)) -> Self {
        Self::new(a, b)
    }
}

/// An edge bound to its mesh
#[derive(Debug, Clone, Copy)]
pub struct EdgeRef<'a> {
    mesh: &'a Mesh,
    edge: Edge,
}

impl<'a> EdgeRef<'a> {
    pub(crate) fn new(mesh: &'a Mesh, edge: Edge) -> Self {
        Self { mesh, edge }
    }

    #[inline]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.mesh.position(self.edge.a)
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.mesh.position(self.edge.b)
    }

    pub fn length(&self) -> f64 {
        (self.end() - self.start()).norm()
    }

    /// Unit direction from `a` to `b`; fails for coincident endpoints
    pub fn direction(&self) -> Result<Direction> {
        Ok(Direction::new(self.end() - self.start())?)
    }

    /// Point at fraction `t` along the edge: `a + t (b - a)`
    pub fn lerp(&self, t: f64) -> Point {
        let start = self.start();
        start + (self.end() - start) * t
    }

    pub fn to_line(&self) -> Result<Line> {
        Ok(Line::new(self.start(), self.direction()?))
    }

    /// Faces sharing this edge, in ascending face order
    pub fn faces(&self) -> Vec<FaceRef<'a>> {
        let mut indices = self.mesh.edge_index().faces_on(self.edge.key()).to_vec();
        indices.sort_unstable();
        indices
            .into_iter()
            .map(|index| FaceRef::new(self.mesh, index))
            .collect()
    }

    /// Whether only one face uses this edge
    pub fn is_boundary(&self) -> bool {
        self.mesh.edge_index().faces_on(self.edge.key()).len() == 1
    }
}

impl PartialEq for EdgeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.mesh, other.mesh) && self.edge == other.edge
    }
}
