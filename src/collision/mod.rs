use crate::config::{CheckMode, CollisionConfig};
use crate::detect::ray::Containment;
use crate::detect::{line, ray, sat};
use crate::geometry::{Point, Vector};
use crate::scene::Shape;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub mod scan;

pub use scan::{CollisionScan, ScanReport, ScanStats, check_for_collision};

/// Combined outcome of the tests run on a single pair of shapes.
/// Fields belonging to tests that were not run keep their default value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairTest {
    pub is_intersecting: bool,
    pub will_intersect: bool,
    pub on_path: bool,
    pub minimum_translation_vector: Option<Vector>,
    pub intersection_points: Vec<Point>,
    pub containment: Option<Containment>,
    pub max_crossings: Option<usize>,
}

impl PairTest {
    /// Only pairs that overlap now or after moving are reported
    pub fn is_collision(&self) -> bool {
        self.is_intersecting || self.will_intersect
    }
}

/// Collision between two shapes of the scene, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionResult {
    /// Id of the moving shape
    pub collidor: String,
    /// Id of the shape that got collided with
    pub collidee: String,
    pub is_intersecting: bool,
    pub will_intersect: bool,
    pub on_path: bool,
    pub minimum_translation_vector: Option<Vector>,
    pub intersection_points: Vec<Point>,
    pub containment: Option<Containment>,
    /// Highest number of collidor edges crossed by a ray from one of the collidee's vertices
    pub max_crossings: Option<usize>,
}

impl CollisionResult {
    pub fn new(collidor: String, collidee: String, test: PairTest) -> Self {
        Self {
            collidor,
            collidee,
            is_intersecting: test.is_intersecting,
            will_intersect: test.will_intersect,
            on_path: test.on_path,
            minimum_translation_vector: test.minimum_translation_vector,
            intersection_points: test.intersection_points,
            containment: test.containment,
            max_crossings: test.max_crossings,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Collidor,
    Collidee,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Collidor => write!(f, "collidor"),
            Side::Collidee => write!(f, "collidee"),
        }
    }
}

/// Reasons for which a pair of shapes could not be evaluated.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvalError {
    #[error("the {side} has no vertices")]
    EmptyPolygon { side: Side },
    #[error("the {side} has a non-finite vertex")]
    NonFiniteVertex { side: Side },
    #[error("velocity ({}, {}) is not finite", .velocity.x, .velocity.y)]
    NonFiniteVelocity { velocity: Vector },
}

/// Runs the tests selected by `config.mode` on shape `a` (moving) against shape `b`.
pub fn evaluate_pair(config: &CollisionConfig, a: &Shape, b: &Shape) -> Result<PairTest, EvalError> {
    validate(config, a, Side::Collidor)?;
    validate(config, b, Side::Collidee)?;

    let test = match config.mode {
        CheckMode::LineCollision => {
            let lt = line::test(&a.path, &b.path);
            PairTest {
                is_intersecting: lt.is_intersecting,
                on_path: lt.on_path,
                intersection_points: lt.points,
                ..PairTest::default()
            }
        }
        CheckMode::SeparatingAxisTheorem => {
            let st = sat::test(&a.polygon, &b.polygon, config.velocity);
            PairTest {
                is_intersecting: st.is_intersecting,
                will_intersect: st.will_intersect,
                minimum_translation_vector: st.minimum_translation_vector,
                ..PairTest::default()
            }
        }
        CheckMode::Mixed => {
            let st = sat::test(&a.polygon, &b.polygon, config.velocity);
            let mut test = PairTest {
                is_intersecting: st.is_intersecting,
                will_intersect: st.will_intersect,
                minimum_translation_vector: st.minimum_translation_vector,
                ..PairTest::default()
            };
            //the exact tests are only worth running if the polygons currently overlap
            if st.is_intersecting {
                let lt = line::test(&a.path, &b.path);
                test.on_path = lt.on_path;
                test.intersection_points = lt.points;
                let rc = ray::classify(&a.polygon, &b.polygon);
                test.containment = Some(rc.containment);
                test.max_crossings = Some(rc.max_crossings);
            }
            test
        }
    };
    Ok(test)
}

fn validate(config: &CollisionConfig, shape: &Shape, side: Side) -> Result<(), EvalError> {
    let uses_polygon = config.mode != CheckMode::LineCollision;
    if uses_polygon && shape.polygon.is_empty() {
        return Err(EvalError::EmptyPolygon { side });
    }
    if !shape.polygon.is_finite() || !shape.path.iter().all(|p| p.is_finite()) {
        return Err(EvalError::NonFiniteVertex { side });
    }
    if uses_polygon && !config.velocity.is_finite() {
        return Err(EvalError::NonFiniteVelocity {
            velocity: config.velocity,
        });
    }
    Ok(())
}
