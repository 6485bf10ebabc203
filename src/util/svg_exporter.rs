use crate::collision::ScanReport;
use crate::consts::{
    ANONYMOUS_ID, SVG_COLLIDING_COLOR, SVG_CROSSING_COLOR, SVG_MARGIN_RATIO, SVG_SHAPE_COLOR,
    SVG_STROKE_RATIO,
};
use crate::geometry::Point;
use crate::scene::SceneTree;
use anyhow::{Context, Result};
use itertools::Itertools;
use log::{Level, log};
use ordered_float::OrderedFloat;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use svg::Document;
use svg::node::element::{Circle, Group, Polyline};

/// Renders the shapes of the scene, highlighting the ones involved in a collision
/// and marking every crossing point found.
pub fn scene_to_svg(tree: &SceneTree, report: &ScanReport) -> Document {
    let colliding: HashSet<&str> = report
        .collisions()
        .flat_map(|r| [r.collidor.as_str(), r.collidee.as_str()])
        .filter(|id| *id != ANONYMOUS_ID)
        .collect();

    let leaves = tree.leaves();
    let all_points = leaves
        .iter()
        .filter_map(|&k| tree[k].shape.as_ref())
        .flat_map(|s| s.path.iter().copied())
        .filter(|p| p.is_finite())
        .collect_vec();

    let (min, max) = bounds(&all_points);
    let dim = f32::max(max.x - min.x, max.y - min.y).max(1.0);
    let margin = dim * SVG_MARGIN_RATIO;
    let stroke_width = dim * SVG_STROKE_RATIO;

    let mut shapes = Group::new()
        .set("fill", "none")
        .set("stroke-width", stroke_width);
    for &key in &leaves {
        let node = &tree[key];
        let Some(shape) = &node.shape else { continue };
        let color = match node.id.as_deref() {
            Some(id) if colliding.contains(id) => SVG_COLLIDING_COLOR,
            _ => SVG_SHAPE_COLOR,
        };
        let points = shape
            .path
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .join(" ");
        shapes = shapes.add(
            Polyline::new()
                .set("points", points)
                .set("stroke", color)
                .set("data-id", node.id.as_deref().unwrap_or(ANONYMOUS_ID)),
        );
    }

    let mut crossings = Group::new().set("fill", SVG_CROSSING_COLOR);
    for p in report.collisions().flat_map(|r| r.intersection_points.iter()) {
        crossings = crossings.add(
            Circle::new()
                .set("cx", p.x)
                .set("cy", p.y)
                .set("r", stroke_width * 2.0),
        );
    }

    Document::new()
        .set(
            "viewBox",
            (
                min.x - margin,
                min.y - margin,
                (max.x - min.x) + 2.0 * margin,
                (max.y - min.y) + 2.0 * margin,
            ),
        )
        .add(shapes)
        .add(crossings)
}

fn bounds(points: &[Point]) -> (Point, Point) {
    let x_range = points.iter().map(|p| OrderedFloat(p.x)).minmax().into_option();
    let y_range = points.iter().map(|p| OrderedFloat(p.y)).minmax().into_option();
    match (x_range, y_range) {
        (Some((x_min, x_max)), Some((y_min, y_max))) => (
            Point::new(x_min.0, y_min.0),
            Point::new(x_max.0, y_max.0),
        ),
        _ => (Point::ZERO, Point::ZERO),
    }
}

pub fn write_svg(document: &Document, path: &Path, log_lvl: Level) -> Result<()> {
    //make sure the parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("could not create parent directory for svg file")?;
    }
    svg::save(path, document)?;
    log!(
        log_lvl,
        "[IO] svg exported to file://{}",
        fs::canonicalize(path)
            .context("could not canonicalize path")?
            .display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::check_for_collision;
    use crate::config::DEFAULT_COLLISION_CONFIG;
    use crate::scene::Outline;

    #[test]
    fn colliding_shapes_are_highlighted() {
        let mut tree = SceneTree::new();
        let rect = |x: f32| Outline::Rect {
            x,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        tree.add_shape(None, Some("a"), rect(0.0));
        tree.add_shape(None, Some("b"), rect(5.0));
        tree.add_shape(None, Some("c"), rect(100.0));

        let report = check_for_collision(&tree, &DEFAULT_COLLISION_CONFIG);
        let svg = scene_to_svg(&tree, &report).to_string();

        assert_eq!(svg.matches(SVG_COLLIDING_COLOR).count(), 2);
        assert_eq!(svg.matches(SVG_SHAPE_COLOR).count(), 1);
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn empty_scene_renders() {
        let tree = SceneTree::new();
        let svg = scene_to_svg(&tree, &ScanReport::default()).to_string();
        assert!(svg.contains("viewBox"));
    }
}
