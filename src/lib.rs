use std::sync::LazyLock;
use std::time::Instant;

pub mod collision;
pub mod config;
pub mod consts;
pub mod detect;
pub mod geometry;
pub mod scene;
pub mod util;
pub mod walker;

pub use collision::check_for_collision;
pub use config::*;

/// Reference point for the elapsed time in log messages
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
