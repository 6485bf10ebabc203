/// Identifier reported for shapes without an id
pub const ANONYMOUS_ID: &str = "-";

pub const LOG_LEVEL_FILTER_RELEASE: log::LevelFilter = log::LevelFilter::Info;

pub const LOG_LEVEL_FILTER_DEBUG: log::LevelFilter = log::LevelFilter::Debug;

/// Fraction of the scene's largest dimension used as margin around the exported svg
pub const SVG_MARGIN_RATIO: f32 = 0.05;

/// Fraction of the scene's largest dimension used as stroke width in the exported svg
pub const SVG_STROKE_RATIO: f32 = 0.002;

pub const SVG_SHAPE_COLOR: &str = "#7F7F7F";

pub const SVG_COLLIDING_COLOR: &str = "#D00000";

pub const SVG_CROSSING_COLOR: &str = "#0050D0";

/// Seed for the random scenes used by the benchmark
pub const BENCH_RNG_SEED: u64 = 0;
