use crate::geometry::{Point, Polygon};
use serde::{Deserialize, Serialize};

/// Outline of a drawable element, already reduced to straight segments.
/// Curves are flattened upstream and arrive as a [`Outline::Path`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outline {
    Line {
        start: Point,
        end: Point,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Polygon {
        points: Vec<Point>,
    },
    Polyline {
        points: Vec<Point>,
    },
    Path {
        points: Vec<Point>,
        #[serde(default)]
        closed: bool,
    },
}

impl Outline {
    /// The outline as a sequence of path points.
    /// Closed outlines end with a copy of their first point.
    pub fn flatten(&self) -> Vec<Point> {
        match self {
            Outline::Line { start, end } => vec![*start, *end],
            Outline::Rect {
                x,
                y,
                width,
                height,
            } => close(vec![
                Point::new(*x, *y),
                Point::new(x + width, *y),
                Point::new(x + width, y + height),
                Point::new(*x, y + height),
            ]),
            Outline::Polygon { points } => close(points.clone()),
            Outline::Polyline { points } => points.clone(),
            Outline::Path { points, closed } => match closed {
                true => close(points.clone()),
                false => points.clone(),
            },
        }
    }
}

fn close(mut points: Vec<Point>) -> Vec<Point> {
    if points.len() > 1 && points.first() != points.last() {
        let first = points[0];
        points.push(first);
    }
    points
}

/// A leaf of the scene tree that takes part in collision detection.
#[derive(Debug, Clone)]
pub struct Shape {
    pub outline: Outline,
    /// Flattened path points, used for the segment crossing test
    pub path: Vec<Point>,
    /// Polygon derived from the path, used for the overlap and containment tests
    pub polygon: Polygon,
    /// Area enclosed by the outer outline, compared against the pruning threshold
    pub outer_area: f32,
}

impl Shape {
    pub fn new(outline: Outline) -> Self {
        let path = outline.flatten();
        let polygon = Polygon::from_path(&path);
        let outer_area = polygon.area();
        Self {
            outline,
            path,
            polygon,
            outer_area,
        }
    }

    /// Replaces the computed outer area, e.g. with a value reported by the renderer.
    pub fn with_outer_area(mut self, outer_area: f32) -> Self {
        self.outer_area = outer_area;
        self
    }
}

impl From<Outline> for Shape {
    fn from(outline: Outline) -> Self {
        Shape::new(outline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn rect_path_is_closed() {
        let shape = Shape::new(Outline::Rect {
            x: 0.0,
            y: 0.0,
            width: 4.0,
            height: 2.0,
        });
        assert_eq!(shape.path.len(), 5);
        assert_eq!(shape.path.first(), shape.path.last());
        assert_eq!(shape.polygon.len(), 4);
        assert_approx_eq!(f32, shape.outer_area, 8.0, ulps = 2);
    }

    #[test]
    fn polyline_stays_open() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
        let shape = Shape::new(Outline::Polyline {
            points: points.clone(),
        });
        assert_eq!(shape.path, points);
        assert_eq!(shape.polygon.len(), 3);
    }

    #[test]
    fn already_closed_polygon_is_not_closed_twice() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.0),
        ];
        let path = Outline::Polygon { points }.flatten();
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn line_has_no_area() {
        let shape = Shape::new(Outline::Line {
            start: Point::new(0.0, 0.0),
            end: Point::new(3.0, 3.0),
        });
        assert_eq!(shape.outer_area, 0.0);
        assert_eq!(shape.with_outer_area(2.0).outer_area, 2.0);
    }
}
