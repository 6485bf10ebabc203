use crate::geometry::{Point, Polygon};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Position of one polygon's vertices relative to another polygon's interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Containment {
    /// Every vertex lies inside
    Inside,
    /// Every vertex lies outside
    Outside,
    /// Some vertices inside, some outside
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayCast {
    pub containment: Containment,
    /// Highest crossing count of any single vertex
    pub max_crossings: usize,
}

/// Classifies the vertices of `probe` against the interior of `container`.
pub fn classify(container: &Polygon, probe: &Polygon) -> RayCast {
    let mut has_odd = false;
    let mut has_even = false;
    let mut max_crossings = 0;

    for &vertex in probe.vertices() {
        let n = crossings(container, vertex);
        match n % 2 == 0 {
            true => has_even = true,
            false => has_odd = true,
        }
        max_crossings = max_crossings.max(n);
    }

    let containment = match (has_even, has_odd) {
        (true, false) => Containment::Outside,
        (false, true) => Containment::Inside,
        _ => Containment::Mixed,
    };
    RayCast {
        containment,
        max_crossings,
    }
}

/// Number of polygon edges crossed by a horizontal ray from `point` towards +X.
/// An odd count means the point lies inside.
pub fn crossings(polygon: &Polygon, point: Point) -> usize {
    polygon
        .vertices()
        .iter()
        .circular_tuple_windows()
        .filter(|&(&pj, &pi)| {
            let straddles = (pi.y <= point.y && point.y < pj.y) || (pj.y <= point.y && point.y < pi.y);
            straddles && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        })
        .count()
}

pub fn contains(polygon: &Polygon, point: Point) -> bool {
    crossings(polygon, point) % 2 == 1
}
