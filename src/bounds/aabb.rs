//! Axis-aligned bounding rectangle.
//!
//! The rectangle follows screen conventions: `y` grows downward, so the
//! `top` edge is `min.y` and the `bottom` edge is `max.y`.

use crate::primitives::Point2;
use num_traits::Float;
use std::ops::BitOr;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (left, top).
    pub min: Point2<F>,
    /// Maximum corner (right, bottom).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from an origin and a size, `(x, y, width, height)`.
    #[inline]
    pub fn from_origin_size(x: F, y: F, width: F, height: F) -> Self {
        Self {
            min: Point2::new(x, y),
            max: Point2::new(x + width, y + height),
        }
    }

    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Returns the left edge (`min.x`).
    #[inline]
    pub fn left(self) -> F {
        self.min.x
    }

    /// Returns the right edge (`max.x`).
    #[inline]
    pub fn right(self) -> F {
        self.max.x
    }

    /// Returns the top edge (`min.y`).
    #[inline]
    pub fn top(self) -> F {
        self.min.y
    }

    /// Returns the bottom edge (`max.y`).
    #[inline]
    pub fn bottom(self) -> F {
        self.max.y
    }

    /// Returns the width of the AABB.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the AABB.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the center point of the AABB.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// Returns the area of the AABB.
    #[inline]
    pub fn area(self) -> F {
        self.width() * self.height()
    }

    /// Returns `true` when every coordinate is finite and the size is non-negative.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.width() >= F::zero()
            && self.height() >= F::zero()
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns `true` if this AABB contains the given point (boundary inclusive).
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns `true` if the point lies within `eps` of the box (boundary inclusive).
    #[inline]
    pub fn contains_point_within(self, p: Point2<F>, eps: F) -> bool {
        p.x >= self.min.x - eps
            && p.x <= self.max.x + eps
            && p.y >= self.min.y - eps
            && p.y <= self.max.y + eps
    }

    /// Returns the four corners in screen-clockwise order, starting top-left.
    #[inline]
    pub fn corners(self) -> [Point2<F>; 4] {
        [
            Point2::new(self.left(), self.top()),
            Point2::new(self.right(), self.top()),
            Point2::new(self.right(), self.bottom()),
            Point2::new(self.left(), self.bottom()),
        ]
    }

    /// Classifies which rectangle edges a point lies on.
    ///
    /// Uses exact comparison: clipped points carry bound values verbatim, so
    /// anything else is not on the boundary. Corners report two sides.
    pub fn boundary_sides(self, p: Point2<F>) -> BoundarySides {
        let mut sides = BoundarySides::NONE;
        if p.x == self.left() {
            sides = sides | BoundarySides::LEFT;
        }
        if p.x == self.right() {
            sides = sides | BoundarySides::RIGHT;
        }
        if p.y == self.top() {
            sides = sides | BoundarySides::TOP;
        }
        if p.y == self.bottom() {
            sides = sides | BoundarySides::BOTTOM;
        }
        sides
    }
}

/// Set of rectangle edges a point touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundarySides(u8);

impl BoundarySides {
    pub const NONE: Self = Self(0);
    pub const TOP: Self = Self(1);
    pub const BOTTOM: Self = Self(2);
    pub const LEFT: Self = Self(4);
    pub const RIGHT: Self = Self(8);

    /// Returns `true` if every side in `other` is present.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    /// Returns `true` if the two sets share a side.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns `true` if the point is not on any side.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for BoundarySides {
    type Output = Self;

    #[inline]
    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}
