//! Simple polygons: area, winding, containment.
//!
//! Voronoi regions are returned as [`Polygon`]s normalized to
//! counter-clockwise winding.
//!
//! # Example
//!
//! ```
//! use fortune_voronoi::polygon::{Polygon, Winding};
//! use fortune_voronoi::Point2;
//!
//! let mut square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 0.0),
//! ]);
//! assert_eq!(square.winding(), Winding::Clockwise);
//!
//! square.ensure_ccw();
//! assert_eq!(square.winding(), Winding::CounterClockwise);
//! assert_eq!(square.signed_area(), 4.0);
//! ```

mod core;

pub use core::{
    polygon_area, polygon_contains, polygon_is_convex, polygon_is_convex_within,
    polygon_signed_area, Polygon, Winding,
};
