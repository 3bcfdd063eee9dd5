//! fortune-voronoi - Voronoi diagrams and Delaunay triangulations
//!
//! Builds the Voronoi diagram of a set of 2D sites with Fortune's sweep,
//! clips it to a plot rectangle, and derives the dual Delaunay links, the
//! convex hull, per-site cells, and minimum or maximum spanning trees.
//!
//! Everything is generic over `F: num_traits::Float`. Tolerances are
//! explicit through [`VoronoiOptions`].

pub mod bounds;
pub mod error;
pub mod polygon;
pub mod primitives;
pub mod spanning;
pub mod voronoi;

pub use bounds::Aabb2;
pub use error::VoronoiError;
pub use polygon::{Polygon, Winding};
pub use primitives::{Circle2, Point2, Segment2, Vec2};
pub use spanning::SpanningTreeMode;
pub use voronoi::{Voronoi, VoronoiBuilder, VoronoiOptions};
