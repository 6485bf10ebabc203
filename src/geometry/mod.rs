pub mod polygon;
pub mod primitives;

pub use polygon::Polygon;
pub use primitives::{Point, Vector};
