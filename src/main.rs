use anyhow::Result;
use clap::Parser as Clap;
use log::{Level, info, warn};
use polycd::config::*;
use polycd::consts::{LOG_LEVEL_FILTER_DEBUG, LOG_LEVEL_FILTER_RELEASE};
use polycd::geometry::Vector;
use polycd::scene::ext_repr;
use polycd::util::io;
use polycd::util::io::MainCli;
use polycd::util::svg_exporter;
use polycd::check_for_collision;
use std::fs;
use std::path::Path;

pub const OUTPUT_DIR: &str = "output";

fn main() -> Result<()> {
    let mut config = DEFAULT_COLLISION_CONFIG;

    fs::create_dir_all(OUTPUT_DIR)?;
    let log_file_path = format!("{}/log.txt", OUTPUT_DIR);
    match cfg!(debug_assertions) {
        true => io::init_logger(LOG_LEVEL_FILTER_DEBUG, Path::new(&log_file_path))?,
        false => io::init_logger(LOG_LEVEL_FILTER_RELEASE, Path::new(&log_file_path))?,
    }

    let args = MainCli::parse();
    config.mode = args.mode;
    config.minimum_area = args.minimum_area;
    config.enumeration = args.enumeration;
    config.log_level = Level::Info;
    //clap enforces exactly two velocity components
    if let Some(&[x, y]) = args.velocity.as_deref() {
        config.velocity = Vector::new(x, y);
    }
    if config.minimum_area < 0.0 {
        warn!("[MAIN] negative minimum area {} prunes nothing", config.minimum_area);
    }

    info!(
        "[MAIN] configured with mode: {:?}, minimum area: {}, velocity: ({}, {}), enumeration: {:?}",
        config.mode, config.minimum_area, config.velocity.x, config.velocity.y, config.enumeration
    );

    let ext_scene = io::read_scene_json(Path::new(&args.input))?;
    let tree = ext_repr::import(&ext_scene);

    info!(
        "[MAIN] loaded scene {} with #{} nodes ({} shapes, depth {})",
        ext_scene.name,
        tree.len(),
        tree.leaves().len(),
        tree.depth()
    );

    let report = check_for_collision(&tree, &config);

    for r in report.collisions() {
        info!(
            "[MAIN] {} -> {}: intersecting: {}, will intersect: {}, on path: {}, #crossings: {}",
            r.collidor,
            r.collidee,
            r.is_intersecting,
            r.will_intersect,
            r.on_path,
            r.intersection_points.len()
        );
    }
    if report.stats.n_skipped > 0 {
        warn!(
            "[MAIN] {} pairs could not be evaluated, see the report for details",
            report.stats.n_skipped
        );
    }

    let json_path = format!("{OUTPUT_DIR}/collisions_{}.json", ext_scene.name);
    io::write_json(&report, Path::new(&json_path), Level::Info)?;

    if !args.no_svg {
        let svg_path = format!("{OUTPUT_DIR}/collisions_{}.svg", ext_scene.name);
        let document = svg_exporter::scene_to_svg(&tree, &report);
        svg_exporter::write_svg(&document, Path::new(&svg_path), Level::Info)?;
    }

    Ok(())
}
