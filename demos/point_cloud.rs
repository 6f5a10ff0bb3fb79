//! Write a ring of points rotating about the x axis as a series of XDMF files,
//! one per time step, plus a temporal collection that ties them together.
//!
//! ```text
//! cargo run --example point_cloud -- ./output
//! ```

use ndarray::{Array1, Array2};
use std::path::{Path, PathBuf};
use xdmf::prelude::*;

const BASE_NAME: &str = "points";
const RADIUS: f64 = 2.0;
const NPOINTS: usize = 12;
const END_TIME: f64 = 5.0;
const NSTEPS: usize = 20;

fn positions(time: f64) -> Array2<f64> {
    let rotation = 360.0 * (time / END_TIME);

    Array2::from_shape_fn((NPOINTS, 3), |(i, axis)| {
        let angle = (360.0 * i as f64 / NPOINTS as f64 + rotation).to_radians();
        match axis {
            0 => 0.0,
            1 => RADIUS * angle.cos(),
            _ => RADIUS * angle.sin(),
        }
    })
}

fn step_grid(time: f64) -> Result<Element, xdmf::Error> {
    let xyz = positions(time);
    let height: Array1<f64> = xyz.column(2).to_owned();

    let mut grid = xdmf::create_grid(&GridAttribs::uniform().name(BASE_NAME))?;

    let topology = TopologyAttribs::new(TopologyType::Polyvertex, vec![NPOINTS]).nodes_per_element(1);

    grid.append_children([
        xdmf::create_time(&TimeAttribs::single(time))?,
        xdmf::create_topology(&topology)?,
        xdmf::create_geometry_from_array(&xyz, &GeometryAttribs::default())?,
        xdmf::create_attribute_from_array(&height, "height", Center::Node)?,
    ]);

    Ok(grid)
}

fn document(grid: Element) -> Element {
    let mut root = xdmf::create_xdmf(Some("3.0"));
    let mut domain = xdmf::create_domain(None);
    domain.append_child(grid);
    root.append_child(domain);
    root
}

fn write_series(output_dir: &Path) -> Result<(), xdmf::Error> {
    std::fs::create_dir_all(output_dir)?;

    let mut collection =
        xdmf::create_grid(&GridAttribs::collection(CollectionType::Temporal).name(BASE_NAME))?;

    for i in 0..NSTEPS {
        let time = END_TIME * i as f64 / (NSTEPS - 1) as f64;
        let grid = step_grid(time)?;

        let path = output_dir.join(format!("{BASE_NAME}_{i}.xdmf"));
        xdmf::write(&document(grid.clone()), &path)?;

        collection.append_child(grid);
    }

    let path = output_dir.join(format!("{BASE_NAME}.xdmf"));
    xdmf::write(&document(collection), path)?;

    Ok(())
}

fn main() {
    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    if let Err(e) = write_series(&output_dir) {
        eprintln!("failed to write point cloud: {e}");
        std::process::exit(1);
    }

    println!("wrote {} time steps to {}", NSTEPS, output_dir.display());
}
