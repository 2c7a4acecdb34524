// Copyright 2026 the Sitegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for grid construction and assignment.

use thiserror::Error;

/// Errors surfaced by [`UniformGridIndex`](crate::UniformGridIndex).
///
/// Queries have no error variant: a point that no object covers returns an
/// empty result, and out-of-extent coordinates clamp to an edge cell.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum GridError {
    /// The extent handed to construction cannot be partitioned: one of its
    /// dimensions is zero or negative, or a coordinate is not finite.
    #[error("grid extent must be finite with positive width and depth, got {width} x {depth}")]
    DegenerateExtent {
        /// East-west dimension of the rejected extent.
        width: f64,
        /// North-south dimension of the rejected extent.
        depth: f64,
    },

    /// An object in an assignment batch reported a bounding box with
    /// non-finite coordinates or inverted corners. The batch is rejected
    /// without modifying the grid.
    #[error("object at position {index} has a non-finite or inverted bounding box")]
    InvalidObjectBounds {
        /// Position of the offending object in the batch slice.
        index: usize,
    },
}
