use std::f64::consts::FRAC_PI_2;

use anyhow::Result;
use geo::{Area, BooleanOps, Centroid, Contains, ConvexHull, Intersects};

use crate::Pt2D;

/// A polygon in map-space, directly wrapping a `geo::Polygon`. Just a single exterior ring; the
/// room footprints this crate deals with don't have holes.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon(geo::Polygon);

impl Polygon {
    /// Build from an outer ring of points. The ring is closed if the input doesn't repeat the
    /// first point at the end.
    pub fn new(mut points: Vec<Pt2D>) -> Result<Polygon> {
        if points.len() < 3 {
            anyhow::bail!("a polygon needs at least 3 points, got {}", points.len());
        }
        if points[0] != *points.last().unwrap() {
            points.push(points[0]);
        }
        let coords: Vec<geo::Coordinate> = points.into_iter().map(|pt| pt.into()).collect();
        Ok(Polygon(geo::Polygon::new(
            geo::LineString(coords),
            Vec::new(),
        )))
    }

    /// Top-left at the origin.
    pub fn rectangle(width: f64, height: f64) -> Polygon {
        Polygon(geo::Polygon::new(
            geo::LineString(vec![
                geo::Coordinate { x: 0.0, y: 0.0 },
                geo::Coordinate { x: width, y: 0.0 },
                geo::Coordinate {
                    x: width,
                    y: height,
                },
                geo::Coordinate { x: 0.0, y: height },
                geo::Coordinate { x: 0.0, y: 0.0 },
            ]),
            Vec::new(),
        ))
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Polygon {
        let coords = self
            .0
            .exterior()
            .0
            .iter()
            .map(|c| geo::Coordinate {
                x: c.x + dx,
                y: c.y + dy,
            })
            .collect();
        Polygon(geo::Polygon::new(geo::LineString(coords), Vec::new()))
    }

    /// The points of the exterior ring. The first and last point match.
    pub fn points(&self) -> Vec<Pt2D> {
        self.0.exterior().0.iter().map(|c| (*c).into()).collect()
    }

    /// Do two polygons intersect at all?
    pub fn intersects(&self, other: &Polygon) -> bool {
        self.0.intersects(&other.0)
    }

    /// Does this polygon contain the point in its interior?
    pub fn contains_pt(&self, pt: Pt2D) -> bool {
        self.0.contains(&geo::Point::from(pt))
    }

    /// Usually m^2, unless the polygon is in screen-space
    pub fn area(&self) -> f64 {
        // Don't use signed_area, since we may work with polygons that have different orientations
        self.0.unsigned_area()
    }

    /// The area-weighted center. Degenerate polygons fall back to the average of their points.
    pub fn centroid(&self) -> Pt2D {
        match self.0.centroid() {
            Some(pt) => pt.into(),
            None => Pt2D::center(&self.points()),
        }
    }

    pub fn convex_hull(list: Vec<Polygon>) -> Polygon {
        let mp: geo::MultiPolygon = list.into_iter().map(|p| p.0).collect();
        Polygon(mp.convex_hull())
    }

    /// Expand the polygon outward by `distance`, with round joins. The exterior ring is offset by
    /// unioning a round-capped capsule along every edge with the polygon itself.
    pub fn buffer(&self, distance: f64) -> Polygon {
        if distance <= 0.0 {
            return self.clone();
        }
        let mut result = geo::MultiPolygon(vec![self.0.clone()]);
        for line in self.0.exterior().lines() {
            result = result.union(&geo::MultiPolygon(vec![capsule(
                line.start, line.end, distance,
            )]));
        }
        // The union is one connected piece, but floating point noise can leave slivers behind;
        // keep the largest.
        let largest = result
            .0
            .into_iter()
            .max_by(|a, b| {
                a.unsigned_area()
                    .partial_cmp(&b.unsigned_area())
                    .unwrap()
            })
            .unwrap();
        Polygon(largest)
    }
}

impl From<geo::Polygon> for Polygon {
    fn from(poly: geo::Polygon) -> Self {
        Polygon(poly)
    }
}

impl From<Polygon> for geo::Polygon {
    fn from(poly: Polygon) -> Self {
        poly.0
    }
}

/// A thick segment with round caps, approximated by `RESOLUTION` points per arc.
fn capsule(a: geo::Coordinate, b: geo::Coordinate, radius: f64) -> geo::Polygon {
    const RESOLUTION: usize = 16;
    let theta = (b.y - a.y).atan2(b.x - a.x);
    let mut pts: Vec<geo::Coordinate> = Vec::new();
    let mut arc = |center: geo::Coordinate, angle1: f64, angle2: f64| {
        for i in 0..=RESOLUTION {
            let angle = angle1 + (angle2 - angle1) * ((i as f64) / (RESOLUTION as f64));
            pts.push(geo::Coordinate {
                x: center.x + radius * angle.cos(),
                y: center.y + radius * angle.sin(),
            });
        }
    };
    arc(b, theta - FRAC_PI_2, theta + FRAC_PI_2);
    arc(a, theta + FRAC_PI_2, theta + 3.0 * FRAC_PI_2);
    let first = pts[0];
    pts.push(first);
    geo::Polygon::new(geo::LineString(pts), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_grows_area() {
        let rect = Polygon::rectangle(4.0, 3.0);
        let buffered = rect.buffer(0.8);
        // 4x3 rectangle offset by 0.8: 12 + 14 * 0.8 + (a bit less than) pi * 0.64
        assert!(buffered.area() > 23.0 && buffered.area() < 26.0, "{}", buffered.area());
    }

    #[test]
    fn buffer_bridges_small_gaps() {
        let r1 = Polygon::rectangle(4.0, 3.0);
        let r2 = Polygon::rectangle(4.0, 3.0).translate(5.0, 0.0);
        assert!(!r1.intersects(&r2));
        // A 1.0 gap closes when both sides grow by 0.8.
        assert!(r1.buffer(0.8).intersects(&r2.buffer(0.8)));
        // A 2.0 gap doesn't.
        let r3 = Polygon::rectangle(4.0, 3.0).translate(6.0, 0.0);
        assert!(!r1.buffer(0.8).intersects(&r3.buffer(0.8)));
    }

    #[test]
    fn hull_spans_all_inputs() {
        let r1 = Polygon::rectangle(4.0, 3.0);
        let r2 = Polygon::rectangle(4.0, 3.0).translate(6.0, 0.0);
        let hull = Polygon::convex_hull(vec![r1, r2]);
        // The hull of the two rectangles is the 10x3 box spanning them.
        assert!(hull.centroid().approx_eq(Pt2D::new(5.0, 1.5), 1e-6));
        assert!(hull.contains_pt(Pt2D::new(5.0, 1.5)));
    }

    #[test]
    fn ring_closes_itself() {
        let triangle = Polygon::new(vec![
            Pt2D::new(0.0, 0.0),
            Pt2D::new(6.0, 0.0),
            Pt2D::new(3.0, 3.0),
        ])
        .unwrap();
        assert_eq!(triangle.points().len(), 4);
        assert!(triangle.contains_pt(Pt2D::new(3.0, 1.0)));
        assert!(Polygon::new(vec![Pt2D::new(0.0, 0.0), Pt2D::new(1.0, 1.0)]).is_err());
    }

    #[test]
    fn rectangle_centroid() {
        let rect = Polygon::rectangle(4.0, 3.0).translate(10.0, 20.0);
        assert!(rect.centroid().approx_eq(Pt2D::new(12.0, 21.5), 1e-6));
    }
}
