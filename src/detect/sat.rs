use crate::geometry::{Polygon, Vector};
use log::trace;

/// Outcome of a separating axis test between two convex polygons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatTest {
    /// The polygons currently overlap
    pub is_intersecting: bool,
    /// The polygons overlap at some point while `a` moves by the velocity
    pub will_intersect: bool,
    /// Translation to apply to `a` (after applying the velocity) to push the polygons apart.
    /// Only set when `will_intersect` holds.
    pub minimum_translation_vector: Option<Vector>,
}

/// Separating axis test of `a` moving by `velocity` against a static `b`.
///
/// Only holds for convex polygons. Concave input is not rejected, but the outcome is not reliable.
/// Zero-length edges do not define an axis and are ignored.
pub fn test(a: &Polygon, b: &Polygon, velocity: Vector) -> SatTest {
    debug_assert!(!a.is_empty() && !b.is_empty());
    if !(a.is_convex() && b.is_convex()) {
        trace!("[SAT] concave polygon, separating axis result is approximate");
    }

    let mut is_intersecting = true;
    let mut will_intersect = true;

    let mut min_interval_distance = f32::INFINITY;
    let mut translation_axis = None;
    let d = a.center() - b.center();

    for edge in a.edges().iter().chain(b.edges().iter()) {
        let Some(axis) = edge.perpendicular().normalized() else {
            trace!("[SAT] skipping degenerate edge {:?}", edge);
            continue;
        };

        //are the polygons currently intersecting?
        let (mut min_a, mut max_a) = project(axis, a);
        let (min_b, max_b) = project(axis, b);

        if interval_distance(min_a, max_a, min_b, max_b) > 0.0 {
            is_intersecting = false;
        }

        //will they intersect while a moves?
        let velocity_projection = axis.dot(velocity);
        if velocity_projection < 0.0 {
            min_a += velocity_projection;
        } else {
            max_a += velocity_projection;
        }

        let distance = interval_distance(min_a, max_a, min_b, max_b);
        if distance > 0.0 {
            will_intersect = false;
        }

        if !is_intersecting && !will_intersect {
            //separation proven, no need to look further
            break;
        }

        let distance = distance.abs();
        if distance < min_interval_distance {
            min_interval_distance = distance;
            //orient the axis from b towards a
            translation_axis = match d.dot(axis) < 0.0 {
                true => Some(-axis),
                false => Some(axis),
            };
        }
    }

    let minimum_translation_vector = match will_intersect {
        true => translation_axis.map(|axis| axis * min_interval_distance),
        false => None,
    };

    SatTest {
        is_intersecting,
        will_intersect,
        minimum_translation_vector,
    }
}

/// Projects all vertices of the polygon onto the axis, returning the `[min, max]` interval.
pub fn project(axis: Vector, polygon: &Polygon) -> (f32, f32) {
    polygon
        .vertices()
        .iter()
        .map(|&p| p.dot(axis))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), d| {
            (min.min(d), max.max(d))
        })
}

/// Distance between the intervals `[min_a, max_a]` and `[min_b, max_b]`, negative if they overlap.
pub fn interval_distance(min_a: f32, max_a: f32, min_b: f32, max_b: f32) -> f32 {
    match min_a < min_b {
        true => min_b - max_a,
        false => min_a - max_b,
    }
}
