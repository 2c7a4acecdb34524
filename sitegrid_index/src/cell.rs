// Copyright 2026 the Sitegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single rectangular subdivision of the grid and the objects filed in it.

use std::fmt::Debug;

use sitegrid_geometry::{BoundingBox, BoxBounded};

/// One cell of a [`UniformGridIndex`](crate::UniformGridIndex).
///
/// A cell knows its own rectangle within the grid extent and holds borrowed
/// references to every object whose bounding box overlaps that rectangle.
/// Cells never own objects; they reference data owned by the caller for the
/// lifetime `'a`.
pub struct GridCell<'a, T> {
    bounds: BoundingBox,
    items: Vec<&'a T>,
}

impl<'a, T: BoxBounded> GridCell<'a, T> {
    pub(crate) fn new(bounds: BoundingBox) -> Self {
        Self {
            bounds,
            items: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, item: &'a T) {
        self.items.push(item);
    }

    /// The rectangle this cell covers within the grid extent.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// All objects filed in this cell, in assignment order.
    ///
    /// An object assigned more than once appears once per assignment.
    pub fn items(&self) -> &[&'a T] {
        &self.items
    }

    /// Number of object references stored in this cell.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no objects are filed in this cell.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over stored objects whose bounding box contains `(x, y)`.
    ///
    /// Lazy and side-effect free; call it again with different coordinates
    /// at any time. Yields duplicates if the same object was filed twice;
    /// [`UniformGridIndex::find_objects_at`](crate::UniformGridIndex::find_objects_at)
    /// deduplicates by identity on top of this.
    pub fn objects_covering(&self, x: f64, y: f64) -> impl Iterator<Item = &'a T> + '_ {
        self.items
            .iter()
            .copied()
            .filter(move |item| item.bounding_box().contains_point(x, y))
    }
}

impl<T> Debug for GridCell<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridCell")
            .field("bounds", &self.bounds)
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}
