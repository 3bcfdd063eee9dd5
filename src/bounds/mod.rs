//! Axis-aligned plot bounds.

mod aabb;

pub use aabb::{Aabb2, BoundarySides};
