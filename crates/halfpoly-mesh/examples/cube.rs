// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Build a cube from six quads and print its area and volume
//!
//! Run with `RUST_LOG=halfpoly_mesh=debug` to see triangulation and winding.

use halfpoly_mesh::geometry::Meters;
use halfpoly_mesh::Mesh;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> halfpoly_mesh::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let size = 10.0;
    let (neg, pos) = (size / 2.0, -size / 2.0);

    let cube = Mesh::new(
        vec![
            [neg, neg, pos],
            [pos, neg, pos],
            [pos, neg, neg],
            [neg, neg, neg],
            [neg, pos, pos],
            [pos, pos, pos],
            [pos, pos, neg],
            [neg, pos, neg],
        ],
        vec![
            vec![0, 1, 2, 3],
            vec![7, 4, 0, 3],
            vec![4, 5, 1, 0],
            vec![6, 7, 3, 2],
            vec![5, 6, 2, 1],
            vec![7, 6, 5, 4],
        ],
    )?;

    println!(
        "{} faces, {} edges, area {}, volume {:.3}",
        cube.face_count(),
        cube.edge_count(),
        Meters(cube.area()?),
        cube.volume()?
    );

    for (index, points) in cube.points_above(1.0)?.iter().enumerate().take(2) {
        println!("face {index} raised: {points:?}");
    }

    Ok(())
}
