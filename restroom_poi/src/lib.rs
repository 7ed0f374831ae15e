//! Derives restroom point-of-interest markers from a building floor-plan room dataset. Rooms
//! tagged as restrooms come in as polygons with hierarchical location codes; what comes out is
//! one representative point per physical restroom complex per floor, labelled by audience
//! (staff, mobility-impaired, women, men, general).
//!
//! The interesting part is the per-floor grouping: buffer every room footprint outward by a
//! small tolerance, merge rooms whose buffered footprints overlap into clusters, drop clusters
//! swallowed by bigger ones, then pick one point per cluster — an anteroom's centroid when the
//! complex has one, the convex hull's centroid otherwise.

#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

pub mod classify;
pub mod cluster;
pub mod floors;
pub mod io;
pub mod pipeline;
pub mod rooms;
pub mod select;
