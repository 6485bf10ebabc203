use crate::geometry::Point;
use crate::scene::{NodeKey, Outline, SceneTree};
use anyhow::Result;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::f32::consts::TAU;

/// Parameters of a randomly generated scene.
#[derive(Debug, Clone, Copy)]
pub struct SceneGenConfig {
    /// Number of top level groups
    pub n_groups: usize,
    /// Number of group levels below each top level group
    pub depth: usize,
    pub shapes_per_group: usize,
    /// Shapes are centered in `[-extent, extent]²`
    pub extent: f32,
    pub mean_radius: f32,
    pub stddev_radius: f32,
}

pub const DEFAULT_SCENE_GEN_CONFIG: SceneGenConfig = SceneGenConfig {
    n_groups: 4,
    depth: 2,
    shapes_per_group: 5,
    extent: 500.0,
    mean_radius: 40.0,
    stddev_radius: 15.0,
};

/// Builds a tree of nested groups filled with random convex polygons.
pub fn random_scene(rng: &mut impl Rng, config: &SceneGenConfig) -> Result<SceneTree> {
    let radius_distr = Normal::new(config.mean_radius, config.stddev_radius)?;
    let mut tree = SceneTree::new();
    let mut counter = 0;
    for _ in 0..config.n_groups {
        add_group(&mut tree, None, config.depth, rng, config, &radius_distr, &mut counter);
    }
    Ok(tree)
}

fn add_group(
    tree: &mut SceneTree,
    parent: Option<NodeKey>,
    depth: usize,
    rng: &mut impl Rng,
    config: &SceneGenConfig,
    radius_distr: &Normal<f32>,
    counter: &mut usize,
) {
    *counter += 1;
    let group = tree.add_group(parent, Some(&format!("g{counter}")));
    for _ in 0..config.shapes_per_group {
        *counter += 1;
        let radius = radius_distr.sample(rng).max(1.0);
        let outline = random_convex_polygon(rng, config.extent, radius);
        tree.add_shape(Some(group), Some(&format!("s{counter}")), outline);
    }
    if depth > 0 {
        add_group(tree, Some(group), depth - 1, rng, config, radius_distr, counter);
    }
}

/// Regular polygon with 3 to 8 vertices, randomly placed and rotated.
pub fn random_convex_polygon(rng: &mut impl Rng, extent: f32, radius: f32) -> Outline {
    let n_vertices = rng.random_range(3..=8);
    let center = Point::new(
        rng.random_range(-extent..=extent),
        rng.random_range(-extent..=extent),
    );
    let rotation = rng.random_range(0.0..TAU);
    let points = (0..n_vertices)
        .map(|i| {
            let angle = rotation + TAU * i as f32 / n_vertices as f32;
            center + Point::new(angle.cos(), angle.sin()) * radius
        })
        .collect();
    Outline::Polygon { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Shape;
    use crate::util::assertions::tree_links_are_consistent;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn generated_scene_shape() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let config = DEFAULT_SCENE_GEN_CONFIG;
        let tree = random_scene(&mut rng, &config).unwrap();
        let n_groups = config.n_groups * (config.depth + 1);
        assert_eq!(tree.len(), n_groups * (config.shapes_per_group + 1));
        assert_eq!(tree.leaves().len(), n_groups * config.shapes_per_group);
        assert_eq!(tree.depth(), config.depth + 2);
        assert!(tree_links_are_consistent(&tree));
    }

    #[test]
    fn random_polygons_are_convex() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        for _ in 0..100 {
            let shape = Shape::new(random_convex_polygon(&mut rng, 100.0, 10.0));
            assert!(shape.polygon.is_convex());
            assert!((3..=8).contains(&shape.polygon.len()));
        }
    }
}
