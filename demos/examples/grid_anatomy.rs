// Copyright 2026 the Sitegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inspect how objects distribute over grid cells: prints a plan-view
//! occupancy map, one row of digits per cell band, north at the top.

use sitegrid_geometry::BoundingBox;
use sitegrid_index::{GridError, UniformGridIndex};

fn main() -> Result<(), GridError> {
    let extent = BoundingBox::new(0.0, 0.0, 640.0, 640.0);

    // Deterministic pseudo-random site furniture, biased toward the
    // south-west so the occupancy map has visible structure.
    let mut state = 0x1234_5678_9ABC_DEF0u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        ((state >> 11) as f64) / ((1u64 << 53) as f64)
    };
    let mut objects = Vec::new();
    for _ in 0..200 {
        let x0 = next() * next() * 600.0;
        let y0 = next() * next() * 600.0;
        let w = 5.0 + next() * 60.0;
        let d = 5.0 + next() * 60.0;
        objects.push(BoundingBox::new(x0, y0, (x0 + w).min(640.0), (y0 + d).min(640.0)));
    }

    let mut index = UniformGridIndex::new(objects.len(), extent)?;
    index.assign_objects_to_cells(&objects)?;

    println!(
        "{} objects, {}x{} cells of {:.0} m x {:.0} m\n",
        index.object_count(),
        index.row_count(),
        index.column_count(),
        index.cell_width(),
        index.cell_depth(),
    );

    for row in 0..index.row_count() {
        let mut line = String::new();
        for col in 0..index.column_count() {
            let n = index.cell(row, col).map_or(0, |c| c.len());
            line.push(match n {
                0 => '.',
                1..=9 => char::from(b'0' + n as u8),
                _ => '#',
            });
        }
        println!("{line}");
    }

    let center = extent.center();
    let covering = index.find_objects_at(center.x, center.y);
    println!("\n{} objects cover the site center", covering.len());
    Ok(())
}
