// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Build an icosahedron and print its area, volume and dihedral angles

use halfpoly_mesh::Mesh;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> halfpoly_mesh::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let phi = (1.0 + 5f64.sqrt()) / 2.0;

    let icosahedron = Mesh::new(
        vec![
            [0.0, 1.0, phi], [0.0, -1.0, phi], [0.0, -1.0, -phi], [0.0, 1.0, -phi],
            [phi, 0.0, 1.0], [-phi, 0.0, 1.0], [-phi, 0.0, -1.0], [phi, 0.0, -1.0],
            [1.0, phi, 0.0], [-1.0, phi, 0.0], [-1.0, -phi, 0.0], [1.0, -phi, 0.0],
        ],
        vec![
            vec![0, 8, 9], vec![0, 9, 5], vec![0, 5, 1], vec![0, 1, 4], vec![0, 4, 8],
            vec![1, 5, 10], vec![1, 10, 11], vec![1, 11, 4], vec![2, 3, 7], vec![2, 7, 11],
            vec![2, 11, 10], vec![2, 10, 6], vec![2, 6, 3], vec![3, 6, 9], vec![3, 9, 8],
            vec![3, 8, 7], vec![4, 11, 7], vec![4, 7, 8], vec![5, 9, 6], vec![5, 6, 10],
        ],
    )?;

    println!(
        "area {:.4}, volume {:.4}",
        icosahedron.area()?,
        icosahedron.volume()?
    );

    let dihedrals = icosahedron.face(0)?.dihedrals()?;
    println!(
        "face 0 dihedrals: {}",
        dihedrals.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", ")
    );

    Ok(())
}
