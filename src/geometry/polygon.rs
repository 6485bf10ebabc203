use crate::geometry::primitives::{Point, Vector};
use itertools::Itertools;

/// Ordered sequence of vertices with the edges between them.
/// The last vertex connects back to the first, so there are as many edges as vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    edges: Vec<Vector>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        let edges = vertices
            .iter()
            .circular_tuple_windows()
            .map(|(&p1, &p2)| p2 - p1)
            .collect_vec();
        // a single vertex produces no window, but still closes onto itself
        let edges = match vertices.len() {
            1 => vec![Vector::ZERO],
            _ => edges,
        };
        debug_assert!(edges.len() == vertices.len());
        Self { vertices, edges }
    }

    /// Builds a polygon from a flattened path.
    /// A closed path repeats its start point at the end, that duplicate is dropped.
    pub fn from_path(path: &[Point]) -> Self {
        let vertices = match path {
            [first, .., last] if first == last => &path[..path.len() - 1],
            _ => path,
        };
        Self::new(vertices.to_vec())
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Vector] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Arithmetic mean of the vertices
    pub fn center(&self) -> Point {
        let n = self.vertices.len() as f32;
        let sum = self
            .vertices
            .iter()
            .fold(Vector::ZERO, |acc, &p| acc + p);
        Point::new(sum.x / n, sum.y / n)
    }

    /// Absolute area enclosed by the vertices (shoelace formula)
    pub fn area(&self) -> f32 {
        let twice_area = self
            .vertices
            .iter()
            .circular_tuple_windows()
            .map(|(&p1, &p2)| p1.cross(p2))
            .sum::<f32>();
        (twice_area / 2.0).abs()
    }

    /// Length of the closed outline
    pub fn perimeter(&self) -> f32 {
        self.edges.iter().map(|e| e.magnitude()).sum()
    }

    pub fn offset(&mut self, v: Vector) {
        self.vertices.iter_mut().for_each(|p| *p += v);
    }

    /// True if all turns go the same way (collinear vertices are tolerated).
    pub fn is_convex(&self) -> bool {
        let mut sign = 0.0;
        for (e1, e2) in self.edges.iter().circular_tuple_windows() {
            let turn = e1.cross(*e2);
            if turn != 0.0 {
                if sign * turn < 0.0 {
                    return false;
                }
                sign = turn;
            }
        }
        true
    }

    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(|p| p.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    fn square(min: f32, max: f32) -> Polygon {
        Polygon::new(vec![
            Point::new(min, min),
            Point::new(max, min),
            Point::new(max, max),
            Point::new(min, max),
        ])
    }

    #[test]
    fn edges_wrap_around() {
        let sq = square(0.0, 2.0);
        assert_eq!(sq.edges().len(), sq.vertices().len());
        assert_eq!(sq.edges()[0], Vector::new(2.0, 0.0));
        assert_eq!(sq.edges()[3], Vector::new(0.0, -2.0));
    }

    #[test]
    fn single_vertex_has_one_degenerate_edge() {
        let p = Polygon::new(vec![Point::new(1.0, 1.0)]);
        assert_eq!(p.edges(), &[Vector::ZERO]);
        assert_eq!(p.center(), Point::new(1.0, 1.0));
    }

    #[test]
    fn center_area_and_perimeter() {
        let sq = square(-5.0, 5.0);
        assert_eq!(sq.center(), Point::ZERO);
        assert_approx_eq!(f32, sq.area(), 100.0, ulps = 2);
        assert_approx_eq!(f32, sq.perimeter(), 40.0, ulps = 2);
    }

    #[test]
    fn from_path_drops_closing_vertex() {
        let path = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.0),
        ];
        assert_eq!(Polygon::from_path(&path).len(), 3);
        assert_eq!(Polygon::from_path(&path[..3]).len(), 3);
        assert!(Polygon::from_path(&[]).is_empty());
    }

    #[test]
    fn convexity() {
        assert!(square(0.0, 1.0).is_convex());
        let arrow = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 2.0),
            Point::new(0.0, 4.0),
            Point::new(1.0, 2.0),
        ]);
        assert!(!arrow.is_convex());
    }

    #[test]
    fn offset_moves_every_vertex() {
        let mut sq = square(0.0, 1.0);
        sq.offset(Vector::new(10.0, -1.0));
        assert_eq!(sq.vertices()[0], Point::new(10.0, -1.0));
        assert_eq!(sq.center(), Point::new(10.5, -0.5));
        assert_eq!(sq.edges()[0], Vector::new(1.0, 0.0));
    }
}
