// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Consistent face winding
//!
//! Breadth-first flood over face adjacency. Each newly reached neighbour is
//! rewritten so the shared edge runs opposite to the face it was reached
//! from. Once a component is done its signed volume decides whether the
//! whole component is turned inside out.

use crate::adjacency::EdgeIndex;
use crate::face::signed_volume;
use crate::{Face, Result, WindingMode};
use halfpoly_geometry::Point;
use std::collections::VecDeque;
use tracing::{debug, trace, warn};

/// Outcome of a winding pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindingReport {
    /// Connected components wound
    pub components: usize,
    /// Faces reached by the flood
    pub visited: usize,
    /// Faces whose index order was rewritten to match a neighbour
    pub rewritten: usize,
    /// Faces reversed because their component had negative volume
    pub reversed: usize,
    /// Faces not reached; only non-empty in [`WindingMode::FirstComponent`]
    pub unvisited: Vec<usize>,
}

impl WindingReport {
    /// Whether every face was wound
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.unvisited.is_empty()
    }
}

/// Wind `faces` in place
///
/// Rewrites keep each face's vertex set, so the edge index stays valid.
pub(crate) fn wind_faces(
    faces: &mut [Face],
    index: &EdgeIndex,
    positions: &[Point],
    mode: WindingMode,
) -> Result<WindingReport> {
    let mut report = WindingReport::default();
    let mut visited = vec![false; faces.len()];
    let mut queue = VecDeque::new();

    for seed in 0..faces.len() {
        if visited[seed] {
            continue;
        }
        if mode == WindingMode::FirstComponent && report.components > 0 {
            break;
        }

        report.components += 1;
        visited[seed] = true;
        queue.push_back(seed);
        let mut component = Vec::new();

        while let Some(current) = queue.pop_front() {
            component.push(current);

            for k in 0..3 {
                let Some(neighbour) = index.neighbour(faces, current, k)? else {
                    continue;
                };
                if visited[neighbour] {
                    continue;
                }
                visited[neighbour] = true;

                let edge = faces[current].edge(k);
                if !faces[neighbour].traverses(edge.b, edge.a) {
                    let third = faces[neighbour]
                        .indices
                        .into_iter()
                        .find(|&i| i != edge.a && i != edge.b)
                        .unwrap_or(edge.a);
                    faces[neighbour] = Face::new(edge.b, edge.a, third);
                    report.rewritten += 1;
                    trace!(face = neighbour, from = current, "rewrote face to match neighbour");
                }
                queue.push_back(neighbour);
            }
        }

        let volume: f64 = component
            .iter()
            .map(|&f| signed_volume(&faces[f].indices.map(|i| positions[i as usize])))
            .sum();
        if volume < 0.0 {
            for &f in &component {
                faces[f] = faces[f].flipped();
            }
            report.reversed += component.len();
            trace!(faces = component.len(), volume, "reversed inward component");
        }

        report.visited += component.len();
    }

    report.unvisited = (0..faces.len()).filter(|&f| !visited[f]).collect();

    if !report.is_complete() {
        warn!(
            unvisited = report.unvisited.len(),
            "winding left faces outside the first component untouched"
        );
    }
    debug!(
        components = report.components,
        rewritten = report.rewritten,
        reversed = report.reversed,
        "wound faces"
    );

    Ok(report)
}
