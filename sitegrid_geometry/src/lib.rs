// Copyright 2026 the Sitegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sitegrid Geometry: the coordinate foundation for the Sitegrid toolkit.
//!
//! This crate holds the small plan-view primitives the rest of the
//! workspace builds on:
//!
//! - [`BoundingBox`]: an axis-aligned rectangle with survey-flavored
//!   accessors (width runs east-west, depth runs north-south) and an
//!   edge-inclusive point-containment test.
//! - [`BoxBounded`]: the capability trait for anything that can report its
//!   bounding box. Spatial structures depend on objects only through this
//!   trait.
//!
//! It is Kurbo-native: corners are [`kurbo::Point`] and boxes convert
//! to and from [`kurbo::Rect`], so callers can move freely between this
//! crate and the wider Kurbo ecosystem.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use sitegrid_geometry::{BoundingBox, BoxBounded};
//!
//! // Grow an extent around a survey point set.
//! let mut extent = BoundingBox::from_point(Point::new(104.2, 818.9));
//! extent.expand_by_point(Point::new(96.0, 850.3));
//! extent.expand_by_point(Point::new(120.7, 804.1));
//!
//! assert!(extent.contains_point(100.0, 820.0));
//! assert_eq!(extent.bounding_box(), extent);
//! ```

pub mod bounds;

pub use bounds::{BoundingBox, BoxBounded};
