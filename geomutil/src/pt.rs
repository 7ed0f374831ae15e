use std::fmt;

/// A point in map-space, in whatever planar units the source dataset uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pt2D {
    x: f64,
    y: f64,
}

impl Pt2D {
    pub fn new(x: f64, y: f64) -> Pt2D {
        Pt2D { x, y }
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }

    /// The average of all the points.
    pub fn center(pts: &[Pt2D]) -> Pt2D {
        assert!(!pts.is_empty());
        let mut x = 0.0;
        let mut y = 0.0;
        for pt in pts {
            x += pt.x;
            y += pt.y;
        }
        let len = pts.len() as f64;
        Pt2D::new(x / len, y / len)
    }

    /// Are the two points within `epsilon` of each other on both axes?
    pub fn approx_eq(self, other: Pt2D, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl From<Pt2D> for geo::Coordinate {
    fn from(pt: Pt2D) -> Self {
        geo::Coordinate { x: pt.x, y: pt.y }
    }
}

impl From<Pt2D> for geo::Point {
    fn from(pt: Pt2D) -> Self {
        geo::Point::new(pt.x, pt.y)
    }
}

impl From<geo::Coordinate> for Pt2D {
    fn from(coord: geo::Coordinate) -> Self {
        Pt2D::new(coord.x, coord.y)
    }
}

impl From<geo::Point> for Pt2D {
    fn from(pt: geo::Point) -> Self {
        Pt2D::new(pt.x(), pt.y())
    }
}

impl fmt::Display for Pt2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pt2D({}, {})", self.x, self.y)
    }
}
