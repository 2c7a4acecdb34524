// Copyright 2026 the Sitegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid index: construction, assignment, and point queries.

use std::collections::BTreeSet;
use std::fmt::Debug;

use sitegrid_geometry::{BoundingBox, BoxBounded};

use crate::cell::GridCell;
use crate::error::GridError;

/// A build-then-query uniform grid over a fixed rectangular extent.
///
/// The extent is partitioned into `row_count x column_count` cells. Row 0
/// is the northmost band and rows increase southward; columns increase
/// eastward from the extent's west edge. During
/// [assignment](Self::assign_objects_to_cells) every object's reference is
/// filed into each cell its bounding box overlaps, so a later
/// [point query](Self::find_objects_at) only has to scan the one cell
/// containing the query point.
///
/// The index borrows the objects it files (`&'a T`); the caller keeps
/// ownership and must keep the objects alive for the index's lifetime.
/// Assignment takes `&mut self` and queries take `&self`, so the borrow
/// checker enforces the write-phase-then-read-phase discipline: queries
/// can run concurrently from many readers once assignment is done.
pub struct UniformGridIndex<'a, T> {
    extent: BoundingBox,
    row_count: usize,
    column_count: usize,
    cell_width: f64,
    cell_depth: f64,
    // Row-major flat arena: cell (row, col) lives at row * column_count + col.
    cells: Vec<GridCell<'a, T>>,
    object_count: usize,
}

impl<'a, T: BoxBounded> UniformGridIndex<'a, T> {
    /// Create an empty grid over `extent`, sized for roughly
    /// `expected_item_count` objects.
    ///
    /// The grid is square in cell count with side
    /// `ceil(sqrt(expected_item_count))`, about one cell per expected
    /// object. The side never drops below 1, so `expected_item_count = 0`
    /// yields a single cell spanning the whole extent. Sizing only affects
    /// performance, never query results.
    ///
    /// # Errors
    ///
    /// [`GridError::DegenerateExtent`] when `extent` has a non-positive
    /// width or depth, or a non-finite coordinate.
    pub fn new(expected_item_count: usize, extent: BoundingBox) -> Result<Self, GridError> {
        let width = extent.width();
        let depth = extent.depth();
        if !extent.is_finite() || width <= 0.0 || depth <= 0.0 {
            return Err(GridError::DegenerateExtent { width, depth });
        }

        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "ceil of a sqrt of a usize is non-negative and far below usize::MAX"
        )]
        let side = (((expected_item_count as f64).sqrt().ceil()) as usize).max(1);
        let row_count = side;
        let column_count = side;
        let cell_width = width / column_count as f64;
        let cell_depth = depth / row_count as f64;

        let mut cells = Vec::with_capacity(row_count * column_count);
        for row in 0..row_count {
            for column in 0..column_count {
                let min_x = extent.lower_left.x + column as f64 * cell_width;
                let max_y = extent.upper_right.y - row as f64 * cell_depth;
                cells.push(GridCell::new(BoundingBox::new(
                    min_x,
                    max_y - cell_depth,
                    min_x + cell_width,
                    max_y,
                )));
            }
        }

        Ok(Self {
            extent,
            row_count,
            column_count,
            cell_width,
            cell_depth,
            cells,
            object_count: 0,
        })
    }

    /// Map plan coordinates to the `(row, column)` of the covering cell.
    ///
    /// This one function is used by both assignment and queries, so the
    /// two sides always agree on which cell covers a point. Coordinates
    /// outside the extent (or non-finite) clamp to the nearest edge cell
    /// instead of failing; the mapping is total.
    pub fn cell_index_of(&self, x: f64, y: f64) -> (usize, usize) {
        let column = (x - self.extent.lower_left.x) / self.cell_width;
        let row = (self.extent.upper_right.y - y) / self.cell_depth;
        (
            Self::clamp_axis(row, self.row_count),
            Self::clamp_axis(column, self.column_count),
        )
    }

    #[inline]
    fn clamp_axis(v: f64, count: usize) -> usize {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "the saturating float-to-usize cast is the clamp: negatives and NaN \
                      land on 0, overshoot lands on usize::MAX before the min"
        )]
        let i = v as usize;
        i.min(count - 1)
    }

    /// File each object into every cell its bounding box overlaps.
    ///
    /// The whole batch is validated before any cell is touched: on error
    /// the grid is unchanged. Calling this more than once appends again,
    /// including for objects already assigned; the query side tolerates
    /// that (results are deduplicated by object identity), but the wasted
    /// cell-list growth is the caller's to avoid.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidObjectBounds`] naming the position of the first
    /// object whose bounding box has non-finite coordinates or inverted
    /// corners.
    pub fn assign_objects_to_cells(&mut self, objects: &'a [T]) -> Result<(), GridError> {
        for (index, object) in objects.iter().enumerate() {
            let bb = object.bounding_box();
            if !bb.is_finite() || bb.is_inverted() {
                return Err(GridError::InvalidObjectBounds { index });
            }
        }

        for object in objects {
            let bb = object.bounding_box();
            // North-west and south-east corners bound the covered index
            // range under the top-to-bottom row convention.
            let (first_row, first_column) = self.cell_index_of(bb.lower_left.x, bb.upper_right.y);
            let (last_row, last_column) = self.cell_index_of(bb.upper_right.x, bb.lower_left.y);
            for row in first_row..=last_row {
                for column in first_column..=last_column {
                    self.cells[row * self.column_count + column].push(object);
                }
            }
            self.object_count += 1;
        }
        Ok(())
    }

    /// All assigned objects whose bounding box contains `(x, y)`.
    ///
    /// Scans only the cell covering the point and keeps the objects whose
    /// own containment test passes, deduplicated by object identity in
    /// first-filed order. Total for any input: out-of-extent points clamp
    /// to an edge cell, and a point no object covers returns an empty
    /// vector.
    pub fn find_objects_at(&self, x: f64, y: f64) -> Vec<&'a T> {
        let (row, column) = self.cell_index_of(x, y);
        let cell = &self.cells[row * self.column_count + column];
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        for object in cell.objects_covering(x, y) {
            if seen.insert(std::ptr::from_ref(object).addr()) {
                out.push(object);
            }
        }
        out
    }

    /// The extent this grid partitions.
    pub fn extent(&self) -> BoundingBox {
        self.extent
    }

    /// Number of cell rows (north to south).
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of cell columns (west to east).
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// East-west size of one cell.
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// North-south size of one cell.
    pub fn cell_depth(&self) -> f64 {
        self.cell_depth
    }

    /// Number of objects assigned so far (assignments, not cell replicas).
    pub fn object_count(&self) -> usize {
        self.object_count
    }

    /// The cell at `(row, column)`, if in range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&GridCell<'a, T>> {
        if row < self.row_count && column < self.column_count {
            self.cells.get(row * self.column_count + column)
        } else {
            None
        }
    }

    /// Iterate all cells in row-major order (north to south, west to east).
    pub fn cells(&self) -> impl Iterator<Item = &GridCell<'a, T>> {
        self.cells.iter()
    }
}

impl<T> Debug for UniformGridIndex<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniformGridIndex")
            .field("extent", &self.extent)
            .field("row_count", &self.row_count)
            .field("column_count", &self.column_count)
            .field("cell_width", &self.cell_width)
            .field("cell_depth", &self.cell_depth)
            .field("object_count", &self.object_count)
            .finish_non_exhaustive()
    }
}
