// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh construction options

use halfpoly_geometry::{Direction, EPSILON};

/// Which connected components [`crate::Mesh::wind`] visits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindingMode {
    /// Only the component reachable from face 0; other faces are reported
    /// as unvisited
    #[default]
    FirstComponent,
    /// Every component, each seeded at its lowest face index
    AllComponents,
}

/// Options controlling mesh construction and geometric queries
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshOptions {
    /// Tolerance for coplanarity, parallelism and containment tests
    pub epsilon: f64,
    /// Normalize face winding after construction
    pub wind: bool,
    pub winding_mode: WindingMode,
    /// Ground normal for synthetic boundary planes and boundary dihedrals
    pub up: Direction,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            wind: true,
            winding_mode: WindingMode::default(),
            up: Direction::up(),
        }
    }
}

impl MeshOptions {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_winding(mut self, wind: bool) -> Self {
        self.wind = wind;
        self
    }

    pub fn with_winding_mode(mut self, mode: WindingMode) -> Self {
        self.winding_mode = mode;
        self
    }

    pub fn with_up(mut self, up: Direction) -> Self {
        self.up = up;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MeshOptions::default();
        assert_eq!(options.epsilon, 1e-4);
        assert!(options.wind);
        assert_eq!(options.winding_mode, WindingMode::FirstComponent);
        assert_eq!(options.up, Direction::up());
    }

    #[test]
    fn test_builder() {
        let options = MeshOptions::default()
            .with_winding(false)
            .with_winding_mode(WindingMode::AllComponents)
            .with_up(Direction::forwards())
            .with_epsilon(1e-6);
        assert!(!options.wind);
        assert_eq!(options.winding_mode, WindingMode::AllComponents);
        assert_eq!(options.up, Direction::forwards());
        assert_eq!(options.epsilon, 1e-6);
    }
}
