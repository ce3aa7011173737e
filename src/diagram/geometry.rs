// SPDX-License-Identifier: MPL-2.0
//! Region outlines in diagram coordinates and point containment.
//!
//! Curves are flattened into line segments once, when the scene is built, so
//! hit-testing is a plain polygon test.

use tiny_skia::{Path, PathSegment, Point, Transform};

/// Line segments used to approximate each quadratic or cubic curve.
const CURVE_STEPS: usize = 12;

/// Point in diagram space (the SVG's own user units after `viewBox` scaling).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiagramPoint {
    pub x: f32,
    pub y: f32,
}

impl DiagramPoint {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for DiagramPoint {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DiagramPoint,
    pub max: DiagramPoint,
}

impl Bounds {
    #[must_use]
    pub fn contains(&self, point: DiagramPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    #[must_use]
    pub fn center(&self) -> DiagramPoint {
        DiagramPoint::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// Flattened outline of one region: closed polygons plus their bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    polygons: Vec<Vec<DiagramPoint>>,
    bounds: Bounds,
    rule: FillRule,
}

impl Outline {
    /// Flattens `path` after applying `transform`. Returns `None` for paths
    /// that enclose no area (fewer than three points overall).
    #[must_use]
    pub fn from_path(path: &Path, transform: Transform, rule: FillRule) -> Option<Self> {
        let path = path.clone().transform(transform)?;
        let polygons = flatten(&path);
        Self::from_polygons(polygons, rule)
    }

    /// Builds an outline from already flattened polygons.
    #[must_use]
    pub fn from_polygons(polygons: Vec<Vec<DiagramPoint>>, rule: FillRule) -> Option<Self> {
        let polygons: Vec<_> = polygons.into_iter().filter(|p| p.len() >= 3).collect();
        let mut points = polygons.iter().flatten();
        let first = *points.next()?;
        let mut bounds = Bounds {
            min: first,
            max: first,
        };
        for point in points {
            bounds.min.x = bounds.min.x.min(point.x);
            bounds.min.y = bounds.min.y.min(point.y);
            bounds.max.x = bounds.max.x.max(point.x);
            bounds.max.y = bounds.max.y.max(point.y);
        }
        Some(Self {
            polygons,
            bounds,
            rule,
        })
    }

    #[must_use]
    pub fn polygons(&self) -> &[Vec<DiagramPoint>] {
        &self.polygons
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn rule(&self) -> FillRule {
        self.rule
    }

    /// Whether `point` lies inside the outline under its fill rule.
    #[must_use]
    pub fn contains(&self, point: DiagramPoint) -> bool {
        if !self.bounds.contains(point) {
            return false;
        }
        let winding: i32 = self
            .polygons
            .iter()
            .map(|polygon| winding_number(polygon, point))
            .sum();
        match self.rule {
            FillRule::NonZero => winding != 0,
            FillRule::EvenOdd => winding % 2 != 0,
        }
    }
}

/// Splits a path into closed polygons. Open subpaths are closed implicitly,
/// the way SVG fills them.
fn flatten(path: &Path) -> Vec<Vec<DiagramPoint>> {
    let mut polygons = Vec::new();
    let mut current: Vec<DiagramPoint> = Vec::new();
    let mut last = Point::from_xy(0.0, 0.0);

    for segment in path.segments() {
        match segment {
            PathSegment::MoveTo(point) => {
                if !current.is_empty() {
                    polygons.push(std::mem::take(&mut current));
                }
                current.push(point.into());
                last = point;
            }
            PathSegment::LineTo(point) => {
                current.push(point.into());
                last = point;
            }
            PathSegment::QuadTo(control, end) => {
                for step in 1..=CURVE_STEPS {
                    let t = step as f32 / CURVE_STEPS as f32;
                    current.push(quad_point(last, control, end, t));
                }
                last = end;
            }
            PathSegment::CubicTo(c1, c2, end) => {
                for step in 1..=CURVE_STEPS {
                    let t = step as f32 / CURVE_STEPS as f32;
                    current.push(cubic_point(last, c1, c2, end, t));
                }
                last = end;
            }
            PathSegment::Close => {
                if !current.is_empty() {
                    polygons.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        polygons.push(current);
    }
    polygons
}

fn quad_point(p0: Point, p1: Point, p2: Point, t: f32) -> DiagramPoint {
    let mt = 1.0 - t;
    DiagramPoint::new(
        mt * mt * p0.x + 2.0 * mt * t * p1.x + t * t * p2.x,
        mt * mt * p0.y + 2.0 * mt * t * p1.y + t * t * p2.y,
    )
}

fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> DiagramPoint {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    DiagramPoint::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// Signed winding number of a closed polygon around `point`.
fn winding_number(polygon: &[DiagramPoint], point: DiagramPoint) -> i32 {
    let mut winding = 0;
    for (i, a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        if a.y <= point.y {
            if b.y > point.y && cross(*a, b, point) > 0.0 {
                winding += 1;
            }
        } else if b.y <= point.y && cross(*a, b, point) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Positive when `p` is left of the directed edge `a → b`.
fn cross(a: DiagramPoint, b: DiagramPoint, p: DiagramPoint) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::PathBuilder;

    fn square(x: f32, y: f32, size: f32) -> Vec<DiagramPoint> {
        vec![
            DiagramPoint::new(x, y),
            DiagramPoint::new(x + size, y),
            DiagramPoint::new(x + size, y + size),
            DiagramPoint::new(x, y + size),
        ]
    }

    #[test]
    fn square_contains_interior_points_only() {
        let outline = Outline::from_polygons(vec![square(0.0, 0.0, 10.0)], FillRule::NonZero)
            .expect("non-degenerate");
        assert!(outline.contains(DiagramPoint::new(5.0, 5.0)));
        assert!(!outline.contains(DiagramPoint::new(15.0, 5.0)));
        assert!(!outline.contains(DiagramPoint::new(5.0, -1.0)));
    }

    #[test]
    fn even_odd_leaves_nested_hole_empty() {
        let polygons = vec![square(0.0, 0.0, 10.0), square(3.0, 3.0, 4.0)];
        let even_odd =
            Outline::from_polygons(polygons.clone(), FillRule::EvenOdd).expect("outline");
        let non_zero = Outline::from_polygons(polygons, FillRule::NonZero).expect("outline");

        let hole = DiagramPoint::new(5.0, 5.0);
        assert!(!even_odd.contains(hole));
        assert!(non_zero.contains(hole));
        assert!(even_odd.contains(DiagramPoint::new(1.0, 1.0)));
    }

    #[test]
    fn degenerate_polygons_yield_no_outline() {
        let line = vec![DiagramPoint::new(0.0, 0.0), DiagramPoint::new(1.0, 1.0)];
        assert!(Outline::from_polygons(vec![line], FillRule::NonZero).is_none());
    }

    #[test]
    fn path_transform_is_applied_before_flattening() {
        let mut builder = PathBuilder::new();
        builder.move_to(0.0, 0.0);
        builder.line_to(10.0, 0.0);
        builder.line_to(10.0, 10.0);
        builder.line_to(0.0, 10.0);
        builder.close();
        let path = builder.finish().expect("valid path");

        let outline = Outline::from_path(
            &path,
            Transform::from_translate(100.0, 50.0),
            FillRule::NonZero,
        )
        .expect("outline");
        assert!(outline.contains(DiagramPoint::new(105.0, 55.0)));
        assert!(!outline.contains(DiagramPoint::new(5.0, 5.0)));
        assert_eq!(outline.bounds().center(), DiagramPoint::new(105.0, 55.0));
    }

    #[test]
    fn curves_are_flattened_into_the_outline() {
        let mut builder = PathBuilder::new();
        builder.move_to(0.0, 10.0);
        builder.cubic_to(0.0, 0.0, 20.0, 0.0, 20.0, 10.0);
        builder.close();
        let path = builder.finish().expect("valid path");

        let outline =
            Outline::from_path(&path, Transform::identity(), FillRule::NonZero).expect("outline");
        assert!(outline.polygons()[0].len() > CURVE_STEPS);
        assert!(outline.contains(DiagramPoint::new(10.0, 6.0)));
        assert!(!outline.contains(DiagramPoint::new(1.0, 1.0)));
    }
}
