// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # halfpoly Geometry Primitives
//!
//! Value types used by the half-polyhedral mesh kernel. Linear algebra is
//! delegated to `nalgebra`; this crate layers the domain vocabulary on top.
//!
//! ## Overview
//!
//! - **Vectors**: `Vector`, `Point` and the unit-length `Direction`
//! - **Rotation**: `Angle` and `Quaternion` (Hamilton product, conjugate rotation)
//! - **Planes**: Hessian normal form with line, plane and three-plane intersection
//! - **Polygons**: signed area, winding and even-odd point containment
//! - **Tetrahedron**: strict point containment
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use halfpoly_geometry::{Plane, Point3};
//!
//! let floor = Plane::from_points(
//!     &Point3::new(0.0, 0.0, 0.0),
//!     &Point3::new(1.0, 0.0, 0.0),
//!     &Point3::new(0.0, 1.0, 0.0),
//! )?;
//!
//! assert!(floor.contains_point(&Point3::new(5.0, -2.0, 0.0)));
//! ```

pub mod angle;
pub mod error;
pub mod line;
pub mod plane;
pub mod polygon;
pub mod quaternion;
pub mod tetrahedron;
pub mod units;
pub mod vector;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

// Re-export main types
pub use angle::Angle;
pub use error::{Error, Result};
pub use line::Line;
pub use plane::Plane;
pub use polygon::{newell_normal, signed_triangle_area, Polygon};
pub use quaternion::Quaternion;
pub use tetrahedron::Tetrahedron;
pub use units::Meters;
pub use vector::{Axis, Direction, Point, Vector};

/// Default tolerance for containment and parallelism tests
pub const EPSILON: f64 = 1e-4;
