// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for geometric primitives

use thiserror::Error;

/// Geometry result type
pub type Result<T> = std::result::Result<T, Error>;

/// Geometry errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Wrong arity or non-finite value at a constructor boundary
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Zero-length vector where a direction is required
    #[error("Degenerate vector: {0}")]
    DegenerateVector(String),

    /// Collinear or non-coplanar points where a plane or normal is required
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a degenerate vector error
    pub fn degenerate_vector(msg: impl Into<String>) -> Self {
        Error::DegenerateVector(msg.into())
    }

    /// Create a degenerate geometry error
    pub fn degenerate_geometry(msg: impl Into<String>) -> Self {
        Error::DegenerateGeometry(msg.into())
    }
}
