// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for mesh construction and queries

use thiserror::Error;

/// Mesh result type
pub type Result<T> = std::result::Result<T, Error>;

/// Mesh errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] halfpoly_geometry::Error),

    #[error("Invalid face {index}: {message}")]
    InvalidFace { index: usize, message: String },

    #[error("Invalid vertex {index}: {message}")]
    InvalidVertex { index: usize, message: String },

    /// More than two faces share one edge
    #[error("Non-manifold edge ({a}, {b}) shared by faces {faces:?}")]
    NonManifoldMesh { a: u32, b: u32, faces: Vec<usize> },

    #[error("Triangulation failed: {0}")]
    Triangulation(String),

    /// Lookup on a disposed mesh or with an index it does not hold
    #[error("{kind} {index} is not bound to a mesh")]
    UnboundElement { kind: &'static str, index: usize },
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::Geometry(halfpoly_geometry::Error::invalid_input(msg))
    }

    /// Create a degenerate geometry error
    pub fn degenerate_geometry(msg: impl Into<String>) -> Self {
        Error::Geometry(halfpoly_geometry::Error::degenerate_geometry(msg))
    }

    pub fn invalid_face(index: usize, msg: impl Into<String>) -> Self {
        Error::InvalidFace {
            index,
            message: msg.into(),
        }
    }

    pub fn invalid_vertex(index: usize, msg: impl Into<String>) -> Self {
        Error::InvalidVertex {
            index,
            message: msg.into(),
        }
    }

    /// Create a triangulation error
    pub fn triangulation(msg: impl Into<String>) -> Self {
        Error::Triangulation(msg.into())
    }

    pub fn unbound(kind: &'static str, index: usize) -> Self {
        Error::UnboundElement { kind, index }
    }
}
