use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A canvas position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Bounds {
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(0.0, 0.0, 100.0, 100.0)
    }
}

/// Vertices of a regular polygon, first vertex straight up from the center,
/// proceeding clockwise in canvas coordinates.
pub fn regular_polygon(center: Point, radius: f64, sides: u32) -> Vec<Point> {
    let n = f64::from(sides);
    (0..sides)
        .map(|i| {
            let angle = std::f64::consts::TAU * f64::from(i) / n - std::f64::consts::FRAC_PI_2;
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// Arrowhead at `end`, pointing away from `start`. Returns the point where
/// the shaft meets the head, and the head triangle as tip, left wing and
/// right wing. The head is half as wide as it is long.
pub fn arrow_head(start: Point, end: Point, size: f64) -> (Point, [Point; 3]) {
    let (dx, dy) = (end.x - start.x, end.y - start.y);
    let len = match dx.hypot(dy) {
        l if l > 0.0 => l,
        _ => 1.0,
    };
    let (ux, uy) = (dx / len, dy / len);
    let base = Point::new(end.x - ux * size, end.y - uy * size);
    let (px, py) = (-uy * size * 0.5, ux * size * 0.5);
    let left = Point::new(base.x + px, base.y + py);
    let right = Point::new(base.x - px, base.y - py);
    (base, [end, left, right])
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn square_polygon_starts_at_top() {
        let pts = regular_polygon(Point::new(100.0, 100.0), 50.0, 4);
        assert_eq!(pts.len(), 4);
        assert!((pts[0].x - 100.0).abs() < 1e-9);
        assert!((pts[0].y - 50.0).abs() < 1e-9);
        assert!((pts[1].x - 150.0).abs() < 1e-9);
        assert!((pts[1].y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn bounds_dimensions() {
        let b = Bounds::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(b.width(), 50.0);
        assert_eq!(b.height(), 100.0);
    }

    #[test]
    fn arrow_head_points_along_the_shaft() {
        let (base, [tip, left, right]) =
            arrow_head(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 12.0);
        assert_eq!(base, Point::new(88.0, 0.0));
        assert_eq!(tip, Point::new(100.0, 0.0));
        assert!((left.y - 6.0).abs() < 1e-9);
        assert!((right.y + 6.0).abs() < 1e-9);

        let (base, _) = arrow_head(Point::new(5.0, 5.0), Point::new(5.0, 5.0), 10.0);
        assert_eq!(base, Point::new(5.0, 5.0));
    }
}
