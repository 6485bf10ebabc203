//! The three pairwise tests: segment crossings, ray casting containment and separating axes.

pub mod line;
pub mod ray;
pub mod sat;
