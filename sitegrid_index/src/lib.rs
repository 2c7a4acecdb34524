// Copyright 2026 the Sitegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sitegrid Index: a uniform grid spatial index for plan-view point queries.
//!
//! Sitegrid Index answers "which objects cover this point?" in better than
//! linear time for the build-once, query-many workloads common in civil
//! CAD: locating the TIN triangle under a probe point, picking parcels
//! under a cursor, sampling a surface along an alignment.
//!
//! - Construct a grid over a known extent, sized from an expected object
//!   count.
//! - Assign a batch of box-bounded objects once; each object is filed into
//!   every cell its bounding box overlaps.
//! - Query any number of times; a query scans a single cell and
//!   deduplicates results by object identity.
//!
//! The index borrows objects rather than owning them, and it never mutates
//! after assignment: queries take `&self`, so once the grid is populated it
//! can be shared freely across reader threads.
//!
//! Out-of-extent query points clamp to the nearest edge cell instead of
//! failing, so queries are total; the containment test still decides what
//! is returned. Float inputs are assumed finite where it matters —
//! construction and assignment validate, queries degrade gracefully.
//!
//! # Example
//!
//! ```rust
//! use sitegrid_index::{BoundingBox, UniformGridIndex};
//!
//! // A 100 m x 100 m site, expecting around 16 objects: a 4x4 grid.
//! let extent = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
//! let parcels = vec![
//!     BoundingBox::new(10.0, 10.0, 20.0, 20.0),
//!     BoundingBox::new(40.0, 70.0, 80.0, 95.0),
//! ];
//!
//! let mut index = UniformGridIndex::new(16, extent)?;
//! index.assign_objects_to_cells(&parcels)?;
//!
//! let hits = index.find_objects_at(15.0, 15.0);
//! assert_eq!(hits.len(), 1);
//! assert!(index.find_objects_at(90.0, 90.0).is_empty());
//! # Ok::<(), sitegrid_index::GridError>(())
//! ```

pub mod cell;
pub mod error;
pub mod grid;

pub use cell::GridCell;
pub use error::GridError;
pub use grid::UniformGridIndex;

// Re-exported so downstream crates can depend on this crate alone.
pub use sitegrid_geometry::{BoundingBox, BoxBounded};
