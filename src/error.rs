//! Error types for diagram construction.

use thiserror::Error;

/// Errors that reject an input before the sweep starts.
///
/// Degenerate geometry (collinear sites, parallel bisectors) is never an
/// error; the sweep resolves it to "no event".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoronoiError {
    /// A site coordinate is NaN or infinite.
    #[error("site {index} has a non-finite coordinate")]
    NonFiniteSite {
        /// Position of the site in the input list.
        index: usize,
    },

    /// A site weight is NaN or infinite.
    #[error("site {index} has a non-finite weight")]
    NonFiniteWeight {
        /// Position of the site in the input list.
        index: usize,
    },

    /// Two sites share exactly the same coordinate.
    #[error("site {duplicate} duplicates the coordinate of site {first}")]
    DuplicateSite {
        /// Input position of the earlier site.
        first: usize,
        /// Input position of the later, duplicate site.
        duplicate: usize,
    },

    /// The plot bounds are non-finite or have negative size.
    #[error("plot bounds must be finite with non-negative width and height")]
    InvalidBounds,
}
