use crate::geometry::Point;
use itertools::Itertools;
use log::trace;

/// Outcome of testing every segment of one path against every segment of another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineTest {
    pub is_intersecting: bool,
    pub on_path: bool,
    /// Crossing points, in discovery order and not deduplicated
    pub points: Vec<Point>,
}

/// Brute force test of all segment pairs of two paths, O(|a|·|b|).
/// Segments connect consecutive points, closed paths are expected to repeat their first point.
pub fn test(path_a: &[Point], path_b: &[Point]) -> LineTest {
    let mut result = LineTest::default();

    for (&start_a, &end_a) in path_a.iter().tuple_windows() {
        for (&start_b, &end_b) in path_b.iter().tuple_windows() {
            //segments sharing a same-index endpoint are not tested
            if end_a == end_b || start_a == start_b {
                continue;
            }
            if segments_intersect(start_a, end_a, start_b, end_b) {
                result.is_intersecting = true;
                result.on_path = true;
                match intersection_point(end_a, start_a, end_b, start_b) {
                    Some(p) => result.points.push(p),
                    None => trace!(
                        "[LINE] no crossing point for parallel segments {:?}-{:?} and {:?}-{:?}",
                        start_a,
                        end_a,
                        start_b,
                        end_b
                    ),
                }
            }
        }
    }
    result
}

/// Tests whether segment `ps1→pe1` intersects segment `ps2→pe2`.
///
/// When `ps2` lies on the line through the first segment, the segments are treated as collinear
/// and reported as intersecting if `ps2` lies between `ps1` and `pe1` along either the X or the Y axis.
/// This is an axis-aligned approximation, not an exact collinear overlap test.
pub fn segments_intersect(ps1: Point, pe1: Point, ps2: Point, pe2: Point) -> bool {
    let cmp = ps2 - ps1;
    let r = pe1 - ps1;
    let s = pe2 - ps2;

    let cmp_x_r = cmp.cross(r);
    let cmp_x_s = cmp.cross(s);
    let r_x_s = r.cross(s);

    if cmp_x_r == 0.0 {
        return ((ps2.x - ps1.x < 0.0) != (ps2.x - pe1.x < 0.0))
            || ((ps2.y - ps1.y < 0.0) != (ps2.y - pe1.y < 0.0));
    }

    if r_x_s == 0.0 {
        //parallel
        return false;
    }

    let t = cmp_x_s / r_x_s;
    let u = cmp_x_r / r_x_s;

    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// Intersection of the infinite lines through `ps1, pe1` and `ps2, pe2`.
/// Returns `None` if the lines are parallel.
pub fn intersection_point(ps1: Point, pe1: Point, ps2: Point, pe2: Point) -> Option<Point> {
    // a·x + b·y = c
    let a1 = pe1.y - ps1.y;
    let b1 = ps1.x - pe1.x;
    let c1 = a1 * ps1.x + b1 * ps1.y;

    let a2 = pe2.y - ps2.y;
    let b2 = ps2.x - pe2.x;
    let c2 = a2 * ps2.x + b2 * ps2.y;

    let delta = a1 * b2 - a2 * b1;
    if delta == 0.0 {
        return None;
    }

    Some(Point::new(
        (b2 * c1 - b1 * c2) / delta,
        (a1 * c2 - a2 * c1) / delta,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn crossing_diagonals() {
        assert!(segments_intersect(p(0.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(10.0, 0.0)));
        assert_eq!(
            intersection_point(p(0.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(10.0, 0.0)),
            Some(p(5.0, 5.0))
        );
    }

    #[test]
    fn parallel_segments_never_intersect() {
        for offset in [0.5, 1.0, 3.0, 100.0] {
            let (a1, a2) = (p(0.0, 0.0), p(10.0, 0.0));
            let (b1, b2) = (p(0.0, offset), p(10.0, offset));
            assert!(!segments_intersect(a1, a2, b1, b2));
            assert_eq!(intersection_point(a1, a2, b1, b2), None);
        }
    }

    #[test]
    fn disjoint_segments_on_crossing_lines() {
        assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 1.0), p(0.0, 10.0), p(10.0, 0.0)));
    }

    #[test]
    fn touching_endpoint_counts() {
        assert!(segments_intersect(p(0.0, 0.0), p(5.0, 5.0), p(10.0, 0.0), p(5.0, 5.0)));
    }

    #[test]
    fn collinear_overlap_is_axis_approximated() {
        //ps2 between ps1 and pe1 on the X axis
        assert!(segments_intersect(p(0.0, 0.0), p(10.0, 0.0), p(5.0, 0.0), p(20.0, 0.0)));
        //ps2 beyond pe1
        assert!(!segments_intersect(p(0.0, 0.0), p(10.0, 0.0), p(15.0, 0.0), p(20.0, 0.0)));
    }

    #[test]
    fn path_crossings_are_collected() {
        let square_a = [p(-5.0, -5.0), p(5.0, -5.0), p(5.0, 5.0), p(-5.0, 5.0), p(-5.0, -5.0)];
        let square_b = [p(2.0, 2.0), p(12.0, 2.0), p(12.0, 12.0), p(2.0, 12.0), p(2.0, 2.0)];
        let result = test(&square_a, &square_b);
        assert!(result.is_intersecting);
        assert!(result.on_path);
        assert_eq!(result.points.len(), 2);
        assert!(result.points.contains(&p(5.0, 2.0)));
        assert!(result.points.contains(&p(2.0, 5.0)));
    }

    #[test]
    fn nested_paths_do_not_cross() {
        let outer = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(0.0, 0.0)];
        let inner = [p(2.0, 2.0), p(3.0, 2.0), p(3.0, 3.0), p(2.0, 3.0), p(2.0, 2.0)];
        assert_eq!(test(&outer, &inner), LineTest::default());
    }

    #[test]
    fn collinear_overlap_is_flagged_without_a_point() {
        let result = test(&[p(0.0, 0.0), p(10.0, 0.0)], &[p(5.0, 0.0), p(20.0, 0.0)]);
        assert!(result.is_intersecting);
        assert!(result.on_path);
        assert!(result.points.is_empty());
    }

    #[test]
    fn single_point_path_has_no_segments() {
        let result = test(&[p(0.0, 0.0)], &[p(-1.0, 0.0), p(1.0, 0.0)]);
        assert!(!result.is_intersecting);
    }
}
