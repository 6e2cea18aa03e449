// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # halfpoly Mesh
//!
//! Indexed triangle meshes with consistent winding, adjacency and derived
//! geometry, built on [`halfpoly_geometry`].
//!
//! ## Overview
//!
//! - **Construction**: raw coordinates and index loops; loops longer than
//!   three are ear-clipped, then face winding is normalized
//! - **Topology**: edge to face index, adjacent faces, boundary edges
//! - **Geometry**: area, volume, center, face normals, dihedral angles
//! - **Offsets**: points above each face where neighbouring offset planes meet
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use halfpoly_mesh::Mesh;
//!
//! let cube = Mesh::new(
//!     vec![
//!         [5.0, 5.0, -5.0], [-5.0, 5.0, -5.0], [-5.0, 5.0, 5.0], [5.0, 5.0, 5.0],
//!         [5.0, -5.0, -5.0], [-5.0, -5.0, -5.0], [-5.0, -5.0, 5.0], [5.0, -5.0, 5.0],
//!     ],
//!     vec![
//!         vec![0, 1, 2, 3], vec![7, 4, 0, 3], vec![4, 5, 1, 0],
//!         vec![6, 7, 3, 2], vec![5, 6, 2, 1], vec![7, 6, 5, 4],
//!     ],
//! )?;
//!
//! assert_eq!(cube.face_count(), 12);
//! println!("area {} volume {}", cube.area()?, cube.volume()?);
//! ```

mod adjacency;
pub mod edge;
pub mod error;
pub mod face;
pub mod mesh;
mod offset;
pub mod options;
pub mod triangulator;
pub mod vertex;
pub mod winding;

pub use edge::{Edge, EdgeRef};
pub use error::{Error, Result};
pub use face::{Face, FaceRef};
pub use mesh::Mesh;
pub use options::{MeshOptions, WindingMode};
pub use triangulator::triangulate;
pub use vertex::{Vertex, VertexRef};
pub use winding::WindingReport;

// Re-export the geometry crate for convenience
pub use halfpoly_geometry as geometry;
