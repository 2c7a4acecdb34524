// Copyright 2026 the Sitegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes and the [`BoxBounded`] capability.

use kurbo::{Point, Rect};

/// Axis-aligned rectangular extent in plan view.
///
/// Corners follow survey conventions: `lower_left` is the south-west
/// corner, `upper_right` the north-east corner. Width runs east-west
/// along x, depth runs north-south along y.
///
/// The constructor does not reorder corners; holders are expected to keep
/// `lower_left.x <= upper_right.x` and `lower_left.y <= upper_right.y`.
/// Consumers that cannot tolerate an inverted or non-finite box (such as
/// a spatial index) validate with [`BoundingBox::is_finite`] and
/// [`BoundingBox::is_degenerate`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    /// South-west (minimum) corner.
    pub lower_left: Point,
    /// North-east (maximum) corner.
    pub upper_right: Point,
}

impl BoundingBox {
    /// Create a bounding box from corner coordinates.
    pub const fn new(llx: f64, lly: f64, urx: f64, ury: f64) -> Self {
        Self {
            lower_left: Point::new(llx, lly),
            upper_right: Point::new(urx, ury),
        }
    }

    /// Create a zero-size box collapsed onto a single point.
    ///
    /// Combine with [`BoundingBox::expand_by_point`] to grow an extent
    /// around a point set.
    pub const fn from_point(p: Point) -> Self {
        Self {
            lower_left: p,
            upper_right: p,
        }
    }

    /// East-west dimension.
    pub fn width(&self) -> f64 {
        self.upper_right.x - self.lower_left.x
    }

    /// North-south dimension.
    pub fn depth(&self) -> f64 {
        self.upper_right.y - self.lower_left.y
    }

    /// Plan area, `width * depth`.
    pub fn area(&self) -> f64 {
        self.width() * self.depth()
    }

    /// Center point of the box.
    pub fn center(&self) -> Point {
        Point::new(
            self.lower_left.x + self.width() / 2.0,
            self.lower_left.y + self.depth() / 2.0,
        )
    }

    /// Whether the point lies inside the box.
    ///
    /// All four edges are inclusive, so a point exactly on the boundary
    /// counts as inside. A point on a shared edge of two adjacent boxes
    /// is therefore inside both.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.lower_left.x
            && y >= self.lower_left.y
            && x <= self.upper_right.x
            && y <= self.upper_right.y
    }

    /// Grow the box so it covers `p`. No-op when `p` is already inside.
    pub fn expand_by_point(&mut self, p: Point) {
        if p.x < self.lower_left.x {
            self.lower_left.x = p.x;
        }
        if p.y < self.lower_left.y {
            self.lower_left.y = p.y;
        }
        if p.x > self.upper_right.x {
            self.upper_right.x = p.x;
        }
        if p.y > self.upper_right.y {
            self.upper_right.y = p.y;
        }
    }

    /// Whether the two boxes share any area or boundary.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.upper_right.x >= other.lower_left.x
            && other.upper_right.x >= self.lower_left.x
            && self.upper_right.y >= other.lower_left.y
            && other.upper_right.y >= self.lower_left.y
    }

    /// The smallest box covering both inputs.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            lower_left: Point::new(
                self.lower_left.x.min(other.lower_left.x),
                self.lower_left.y.min(other.lower_left.y),
            ),
            upper_right: Point::new(
                self.upper_right.x.max(other.upper_right.x),
                self.upper_right.y.max(other.upper_right.y),
            ),
        }
    }

    /// Whether all four coordinates are finite (no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        self.lower_left.is_finite() && self.upper_right.is_finite()
    }

    /// Whether the box has no area: inverted corners or zero width/depth.
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.depth() > 0.0)
    }

    /// Whether the corners are inverted on either axis.
    pub fn is_inverted(&self) -> bool {
        self.upper_right.x < self.lower_left.x || self.upper_right.y < self.lower_left.y
    }
}

impl From<Rect> for BoundingBox {
    fn from(r: Rect) -> Self {
        Self::new(r.min_x(), r.min_y(), r.max_x(), r.max_y())
    }
}

impl From<BoundingBox> for Rect {
    fn from(bb: BoundingBox) -> Self {
        Self::new(
            bb.lower_left.x,
            bb.lower_left.y,
            bb.upper_right.x,
            bb.upper_right.y,
        )
    }
}

/// Capability for anything that can report an axis-aligned bounding box.
///
/// Spatial structures consume objects only through this trait; they never
/// need the object's actual geometry.
pub trait BoxBounded {
    /// The minimal axis-aligned box enclosing this object.
    fn bounding_box(&self) -> BoundingBox;
}

impl BoxBounded for BoundingBox {
    fn bounding_box(&self) -> BoundingBox {
        *self
    }
}

impl BoxBounded for Rect {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from(*self)
    }
}
