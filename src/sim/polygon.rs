//! Polygon geometry: rigid transforms and point containment
//!
//! A polygon is a fixed local-space outline plus a world position and a
//! rotation in degrees. The outline is normalized on construction so that its
//! bounding corner sits at the local origin, which means {(0,1),(1,1),(1,0)}
//! and {(9,10),(10,10),(10,9)} describe the same shape.
//!
//! World-space vertices rotate about the shape's area-weighted centroid and
//! then shift by half that centroid plus the position. The centroid formula
//! takes absolute values of both the area and the final coordinates; shapes
//! whose true centroid lies in negative local coordinates come out mirrored.
//! After normalization that only affects self-intersecting outlines.

use glam::Vec2;

use crate::error::ShapeError;
use crate::{Point, normalize_degrees};

/// Axis-aligned rectangle (min corner inclusive, max corner inclusive)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn from_center(center: Point, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            max: center + size / 2.0,
        }
    }

    /// Bounding rectangle of a point set (zero-sized at the origin if empty)
    pub fn bounding(points: &[Point]) -> Self {
        let Some(first) = points.first() else {
            return Self {
                min: Point::ZERO,
                max: Point::ZERO,
            };
        };
        points.iter().fold(
            Self {
                min: *first,
                max: *first,
            },
            |r, p| Self {
                min: r.min.min(*p),
                max: r.max.max(*p),
            },
        )
    }

    pub fn center(&self) -> Point {
        (self.min + self.max) / 2.0
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.y >= self.min.y
            && point.x <= self.max.x
            && point.y <= self.max.y
    }
}

/// Cyclic edge list: (p[n-1], p[0]), (p[0], p[1]), ..., (p[n-2], p[n-1])
fn edges(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[(i + n - 1) % n], points[i]))
}

#[inline]
fn cross(a: Point, b: Point) -> f32 {
    a.x * b.y - b.x * a.y
}

/// Unsigned shoelace area
pub fn area(shape: &[Point]) -> f32 {
    let sum: f32 = edges(shape).map(|(a, b)| cross(a, b)).sum();
    (sum / 2.0).abs()
}

/// Area-weighted centroid with unsigned area and unsigned result.
///
/// Zero-area outlines (two points, collinear points) fall back to the center
/// of their bounding box.
pub fn centroid(shape: &[Point]) -> Point {
    let area = area(shape);
    if area == 0.0 {
        return Rect::bounding(shape).center();
    }

    let mut sum = Vec2::ZERO;
    for (a, b) in edges(shape) {
        let c = cross(a, b);
        sum.x += (a.x + b.x) * c;
        sum.y += (a.y + b.y) * c;
    }

    Point::new((sum.x / (6.0 * area)).abs(), (sum.y / (6.0 * area)).abs())
}

/// A rigid polygon: fixed outline, mutable position and rotation
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Outline in local space, bounding corner at the origin
    shape: Vec<Point>,
    /// Cached `centroid(shape)`; the outline never changes after construction
    center: Point,
    /// World anchor
    position: Point,
    /// Degrees in [0, 360)
    rotation: f32,
}

impl Polygon {
    /// Build a polygon from any outline; the caller's points are copied, not
    /// modified.
    pub fn new(shape: &[Point], position: Point, rotation: f32) -> Result<Self, ShapeError> {
        if shape.len() < 2 {
            return Err(ShapeError::TooFewVertices { count: shape.len() });
        }

        let origin = shape.iter().skip(1).fold(shape[0], |o, p| o.min(*p));
        let shape: Vec<Point> = shape.iter().map(|p| *p - origin).collect();
        let center = centroid(&shape);

        Ok(Self {
            shape,
            center,
            position,
            rotation: normalize_degrees(rotation),
        })
    }

    /// Normalized local outline
    pub fn local_shape(&self) -> &[Point] {
        &self.shape
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = normalize_degrees(degrees);
    }

    /// Shift the world anchor (no bounds checking)
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.position.x += dx;
        self.position.y += dy;
    }

    pub fn rotate(&mut self, degrees: f32) {
        self.rotation = normalize_degrees(self.rotation + degrees);
    }

    /// Current world-space vertices, same order as the local outline
    pub fn points(&self) -> Vec<Point> {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let c = self.center;
        let offset = c / 2.0 + self.position;

        self.shape
            .iter()
            .map(|p| {
                let d = *p - c;
                Point::new(
                    d.x * cos - d.y * sin + offset.x,
                    d.x * sin + d.y * cos + offset.y,
                )
            })
            .collect()
    }

    /// World-space bounding rectangle
    pub fn bounds(&self) -> Rect {
        Rect::bounding(&self.points())
    }

    /// Crossing-number point-in-polygon test.
    ///
    /// An edge counts when the point's x lies in the half-open span
    /// (min.x, max.x] of the edge and the point is strictly below the edge
    /// line (larger y). Vertical edges never satisfy the span test and so
    /// contribute nothing.
    pub fn contains(&self, point: Point) -> bool {
        let points = self.points();
        let crossings = edges(&points)
            .filter(|(a, b)| {
                let spans = (a.x < point.x && point.x <= b.x) || (b.x < point.x && point.x <= a.x);
                spans && point.y > a.y + (b.y - a.y) / (b.x - a.x) * (point.x - a.x)
            })
            .count();
        crossings % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ENEMY_SHAPE;
    use proptest::prelude::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ]
    }

    fn assert_close(a: Point, b: Point) {
        assert!((a - b).length() < 1e-4, "{a:?} != {b:?}");
    }

    fn vertex_mean(points: &[Point]) -> Point {
        points.iter().copied().sum::<Point>() / points.len() as f32
    }

    #[test]
    fn test_rejects_single_vertex() {
        let err = Polygon::new(&[Point::new(1.0, 1.0)], Point::ZERO, 0.0).unwrap_err();
        assert_eq!(err, ShapeError::TooFewVertices { count: 1 });
        assert!(Polygon::new(&[], Point::ZERO, 0.0).is_err());
    }

    #[test]
    fn test_normalizes_without_touching_input() {
        let input = vec![
            Point::new(9.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 9.0),
        ];
        let poly = Polygon::new(&input, Point::ZERO, 0.0).unwrap();
        assert_eq!(
            poly.local_shape(),
            &[
                Point::new(0.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(1.0, 0.0)
            ]
        );
        // Template is reusable
        assert_eq!(input[0], Point::new(9.0, 10.0));

        let shifted = [
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        let other = Polygon::new(&shifted, Point::ZERO, 0.0).unwrap();
        assert_eq!(poly.local_shape(), other.local_shape());
    }

    #[test]
    fn test_rotation_normalized() {
        let mut poly = Polygon::new(&square(), Point::ZERO, 370.0).unwrap();
        assert_eq!(poly.rotation(), 10.0);

        poly.set_rotation(-10.0);
        assert_eq!(poly.rotation(), 350.0);

        poly.rotate(20.0);
        assert_eq!(poly.rotation(), 10.0);

        poly.rotate(-730.0);
        assert_eq!(poly.rotation(), 0.0);
    }

    #[test]
    fn test_square_fixture() {
        let poly = Polygon::new(&square(), Point::new(10.0, 10.0), 0.0).unwrap();
        assert_eq!(poly.center(), Point::new(1.0, 1.0));
        assert_eq!(
            poly.points(),
            vec![
                Point::new(9.5, 9.5),
                Point::new(11.5, 9.5),
                Point::new(11.5, 11.5),
                Point::new(9.5, 11.5),
            ]
        );
    }

    #[test]
    fn test_square_fixture_rotated() {
        let poly = Polygon::new(&square(), Point::new(10.0, 10.0), 90.0).unwrap();
        let points = poly.points();
        assert_close(points[0], Point::new(11.5, 9.5));
        assert_close(points[1], Point::new(11.5, 11.5));
        assert_close(points[2], Point::new(9.5, 11.5));
        assert_close(points[3], Point::new(9.5, 9.5));
    }

    #[test]
    fn test_points_is_pure() {
        let poly = Polygon::new(&ENEMY_SHAPE, Point::new(50.0, 50.0), 45.0).unwrap();
        let before = poly.clone();
        let _ = poly.points();
        assert_eq!(poly, before);
    }

    #[test]
    fn test_centroid_symmetric() {
        let poly = Polygon::new(&ENEMY_SHAPE, Point::ZERO, 0.0).unwrap();
        assert_close(poly.center(), Point::new(20.0, 25.0));
    }

    #[test]
    fn test_centroid_takes_absolute_value() {
        // True centroid is (-2, -2)
        let shape = [
            Point::new(-3.0, -3.0),
            Point::new(-1.0, -3.0),
            Point::new(-1.0, -1.0),
            Point::new(-3.0, -1.0),
        ];
        assert_close(centroid(&shape), Point::new(2.0, 2.0));
        assert!((area(&shape) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_centroid_winding_independent() {
        let mut clockwise = square();
        clockwise.reverse();
        assert_close(centroid(&clockwise), centroid(&square()));
    }

    #[test]
    fn test_zero_area_centroid_falls_back_to_bounds() {
        let segment = [Point::new(0.0, 0.0), Point::new(4.0, 0.0)];
        assert_eq!(centroid(&segment), Point::new(2.0, 0.0));

        let collinear = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(3.0, 3.0),
        ];
        assert_eq!(centroid(&collinear), Point::new(1.5, 1.5));

        let poly = Polygon::new(&segment, Point::new(5.0, 5.0), 0.0).unwrap();
        assert!(poly.points().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_tiny_outline_keeps_true_centroid() {
        // Area 5e-9; the bounding-box centre would be (5e-5, 5e-5)
        let tiny = [
            Point::new(0.0, 0.0),
            Point::new(1e-4, 0.0),
            Point::new(0.0, 1e-4),
        ];
        let c = centroid(&tiny);
        let expected = Point::splat(1e-4 / 3.0);
        assert!((c - expected).length() < 1e-8, "{c:?}");
    }

    #[test]
    fn test_contains_at_quarter_turns() {
        for shape in [square(), ENEMY_SHAPE.to_vec()] {
            for rotation in [0.0, 90.0, 180.0, 270.0] {
                let poly = Polygon::new(&shape, Point::new(100.0, 100.0), rotation).unwrap();
                let mid = vertex_mean(&poly.points());
                assert!(poly.contains(mid), "rotation {rotation}: {mid:?}");
                // World image of the rotation centre
                let pivot = poly.center() / 2.0 + poly.position();
                assert!(poly.contains(pivot), "rotation {rotation}: {pivot:?}");
                assert!(!poly.contains(Point::new(1000.0, -1000.0)));
                assert!(!poly.contains(Point::new(-1000.0, 100.0)));
            }
        }
    }

    #[test]
    fn test_contains_with_vertical_edges() {
        // Axis-aligned square: two vertical edges, no division by zero
        let poly = Polygon::new(&square(), Point::new(10.0, 10.0), 0.0).unwrap();
        assert!(poly.contains(Point::new(10.5, 10.5)));
        assert!(!poly.contains(Point::new(9.0, 10.5)));
        assert!(!poly.contains(Point::new(12.0, 10.5)));
        assert!(!poly.contains(Point::new(10.5, 9.0)));
        assert!(!poly.contains(Point::new(10.5, 12.0)));
    }

    #[test]
    fn test_contains_concave_ship() {
        let poly = Polygon::new(&crate::consts::PLAYER_SHAPE, Point::ZERO, 0.0).unwrap();
        let points = poly.points();
        let nose = points[0];
        // Just under the nose is inside
        assert!(poly.contains(nose + Point::new(0.0, 5.0)));
        // Between the wings, below the notch, is outside
        let notch_mid = (points[2] + points[3]) / 2.0;
        assert!(!poly.contains(notch_mid + Point::new(1.0, 5.0)));
    }

    #[test]
    fn test_bounds() {
        let poly = Polygon::new(&square(), Point::new(10.0, 10.0), 0.0).unwrap();
        let rect = poly.bounds();
        assert_eq!(rect.min, Point::new(9.5, 9.5));
        assert_eq!(rect.max, Point::new(11.5, 11.5));
        assert!(rect.contains_point(Point::new(10.0, 11.0)));
        assert!(!rect.contains_point(Point::new(12.0, 11.0)));
    }

    fn arb_shape() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec((-1000.0f32..1000.0, -1000.0f32..1000.0), 2..12)
            .prop_map(|v| v.into_iter().map(|(x, y)| Point::new(x, y)).collect())
    }

    proptest! {
        #[test]
        fn prop_local_shape_touches_origin(shape in arb_shape()) {
            let poly = Polygon::new(&shape, Point::ZERO, 0.0).unwrap();
            let local = poly.local_shape();
            let min_x = local.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
            let min_y = local.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
            prop_assert_eq!(min_x, 0.0);
            prop_assert_eq!(min_y, 0.0);
            prop_assert_eq!(local.len(), shape.len());
        }

        #[test]
        fn prop_set_rotation_is_modulo(d in -100_000i64..100_000) {
            let mut poly = Polygon::new(&square(), Point::ZERO, 0.0).unwrap();
            poly.set_rotation(d as f32);
            prop_assert_eq!(poly.rotation(), d.rem_euclid(360) as f32);
        }

        #[test]
        fn prop_translate_is_additive(
            dx in -500.0f32..500.0,
            dy in -500.0f32..500.0,
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
        ) {
            let start = Point::new(x, y);
            let mut split = Polygon::new(&square(), start, 0.0).unwrap();
            split.translate(dx, 0.0);
            split.translate(0.0, dy);

            let mut swapped = Polygon::new(&square(), start, 0.0).unwrap();
            swapped.translate(0.0, dy);
            swapped.translate(dx, 0.0);

            let mut once = Polygon::new(&square(), start, 0.0).unwrap();
            once.translate(dx, dy);

            prop_assert_eq!(split.position(), once.position());
            prop_assert_eq!(swapped.position(), once.position());
        }
    }
}
