//! Voronoi diagrams by Fortune's sweep.
//!
//! Sites are consumed in `(y, x)` order while a beach line of bisector
//! half-edges tracks the parabolic front. Each step either inserts a new
//! site's arc or collapses an arc at a circle event, fixing one Voronoi
//! vertex. Edges come out as implicit lines with optional vertices, then get
//! clipped to the plot rectangle.
//!
//! Coordinates follow screen conventions: `y` grows downward.
//!
//! # Example
//!
//! ```
//! use fortune_voronoi::bounds::Aabb2;
//! use fortune_voronoi::voronoi::Voronoi;
//! use fortune_voronoi::Point2;
//!
//! let sites: [Point2<f64>; 4] = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(0.0, 10.0),
//!     Point2::new(10.0, 10.0),
//! ];
//! let bounds = Aabb2::from_origin_size(0.0, 0.0, 10.0, 10.0);
//! let diagram = Voronoi::new(&sites, &[], bounds).unwrap();
//!
//! // Each corner site owns one quadrant.
//! for cell in diagram.regions() {
//!     assert!((cell.area() - 25.0).abs() < 1e-9);
//! }
//! assert_eq!(diagram.hull_points_in_order().len(), 4);
//! ```

mod beach_line;
mod diagram;
mod edge;
mod event_queue;
mod halfedge;
mod options;
mod region;
mod reorder;
mod site;
mod sweep;

pub use diagram::{Voronoi, VoronoiBuilder};
pub use edge::{ClippedEnds, Edge, EdgeId, Side, Vertex, VertexId};
pub use options::VoronoiOptions;
pub use reorder::{reorder_edges, OrientedEdge, ReorderCriterion};
pub use site::{Site, SiteId};

use num_traits::{Float, NumCast};

/// Converts a constant into `F`. Primitive floats accept every `f64`, so
/// the fallback only matters for exotic `Float` types.
#[inline]
pub(crate) fn constant<F: Float>(value: f64) -> F {
    <F as NumCast>::from(value).unwrap_or_else(F::zero)
}

/// Maps `offset` within a span of length `extent` onto `0..count`.
///
/// Truncates toward zero and clamps; a zero span with zero offset (NaN)
/// lands in bucket 0.
pub(crate) fn bucket_index<F: Float>(offset: F, extent: F, count: usize) -> usize {
    let last = count.saturating_sub(1);
    let scaled = offset / extent * constant(count as f64);
    match scaled.to_isize() {
        Some(bucket) if bucket <= 0 => 0,
        Some(bucket) => (bucket as usize).min(last),
        None if scaled > F::zero() => last,
        None => 0,
    }
}
