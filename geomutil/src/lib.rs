//! A thin layer over the `geo` crate with just the primitives a room-footprint pipeline needs:
//! buffering, overlap tests, convex hulls, centroids.

mod polygon;
mod pt;

pub use crate::polygon::Polygon;
pub use crate::pt::Pt2D;
