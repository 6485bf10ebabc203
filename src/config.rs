use crate::geometry::Vector;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy)]
pub struct CollisionConfig {
    /// Which tests are run for every pair of shapes
    pub mode: CheckMode,
    /// Shapes with an outer area below this threshold are excluded from all comparisons.
    /// Disabled if `0.0`.
    pub minimum_area: f32,
    /// Uniform translation applied to every shape during the swept test
    pub velocity: Vector,
    /// How the pairs of shapes are enumerated from the scene tree
    pub enumeration: PairEnumeration,
    /// Level at which the summary of a scan is logged
    pub log_level: log::Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CheckMode {
    /// Only segment crossings
    LineCollision,
    /// Only the separating axis test (static and swept)
    SeparatingAxisTheorem,
    /// Separating axis test first, segment crossings and containment only for overlapping pairs
    #[default]
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PairEnumeration {
    /// Nested recursion over the tree. Depending on its shape, some pairs are visited more than once.
    #[default]
    Nested,
    /// Every unordered pair of leaves exactly once
    Unique,
}

pub const DEFAULT_COLLISION_CONFIG: CollisionConfig = CollisionConfig {
    mode: CheckMode::Mixed,
    minimum_area: 0.0,
    velocity: Vector::ZERO,
    enumeration: PairEnumeration::Nested,
    log_level: log::Level::Debug,
};

impl Default for CollisionConfig {
    fn default() -> Self {
        DEFAULT_COLLISION_CONFIG
    }
}
