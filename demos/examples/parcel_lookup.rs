// Copyright 2026 the Sitegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Sitegrid Index: build a grid over a subdivision of
//! parcels, then look up which parcels cover a few probe points.

use sitegrid_geometry::{BoundingBox, BoxBounded};
use sitegrid_index::{GridError, UniformGridIndex};

struct Parcel {
    lot: String,
    bounds: BoundingBox,
}

impl BoxBounded for Parcel {
    fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }
}

fn main() -> Result<(), GridError> {
    // A 10x10 block of 30 m x 40 m lots.
    let mut parcels = Vec::new();
    for row in 0..10 {
        for col in 0..10 {
            let x0 = col as f64 * 30.0;
            let y0 = row as f64 * 40.0;
            parcels.push(Parcel {
                lot: format!("L{}-{}", row + 1, col + 1),
                bounds: BoundingBox::new(x0, y0, x0 + 30.0, y0 + 40.0),
            });
        }
    }

    let extent = BoundingBox::new(0.0, 0.0, 300.0, 400.0);
    let mut index = UniformGridIndex::new(parcels.len(), extent)?;
    index.assign_objects_to_cells(&parcels)?;

    println!(
        "indexed {} parcels into a {}x{} grid ({:.1} m x {:.1} m cells)",
        index.object_count(),
        index.row_count(),
        index.column_count(),
        index.cell_width(),
        index.cell_depth(),
    );

    // Interior probe, a probe on a shared lot corner, and one off-site.
    for (x, y) in [(15.0, 20.0), (30.0, 40.0), (500.0, 500.0)] {
        let lots: Vec<&str> = index
            .find_objects_at(x, y)
            .into_iter()
            .map(|p| p.lot.as_str())
            .collect();
        println!("parcels at ({x}, {y}): {lots:?}");
    }
    Ok(())
}
