use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use polycd::config::*;
use polycd::consts::BENCH_RNG_SEED;
use polycd::scene::ext_repr;
use polycd::util::io;
use polycd::util::scene_gen::{DEFAULT_SCENE_GEN_CONFIG, random_scene};
use polycd::check_for_collision;
use polycd::collision::ScanStats;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use std::env::args;
use std::fs;
use std::path::Path;
use std::time::Instant;

pub const OUTPUT_DIR: &str = "output";

fn main() -> Result<()> {
    //number of scenes is the first argument, passes per scene the second
    let n_scenes: usize = args()
        .nth(1)
        .context("first argument must be the number of scenes")?
        .parse()
        .context("first argument must be the number of scenes")?;
    let n_passes: usize = args()
        .nth(2)
        .context("second argument must be the number of passes per scene")?
        .parse()
        .context("second argument must be the number of passes per scene")?;

    fs::create_dir_all(OUTPUT_DIR)?;

    println!("[BENCH] system time: {}", jiff::Timestamp::now());
    println!("[BENCH] using seed: {}", BENCH_RNG_SEED);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(BENCH_RNG_SEED);

    let scenes = (0..n_scenes)
        .map(|_| random_scene(&mut rng, &DEFAULT_SCENE_GEN_CONFIG))
        .collect::<Result<Vec<_>>>()?;

    if let Some(first) = scenes.first() {
        let path = format!("{OUTPUT_DIR}/bench_scene_0.json");
        io::write_json(&ext_repr::export(first, "bench_scene_0"), Path::new(&path), log::Level::Info)?;
    }

    for mode in [
        CheckMode::LineCollision,
        CheckMode::SeparatingAxisTheorem,
        CheckMode::Mixed,
    ] {
        let config = CollisionConfig {
            mode,
            log_level: log::Level::Trace,
            ..DEFAULT_COLLISION_CONFIG
        };
        let start = Instant::now();

        //independent passes over the same scenes run concurrently, each owning its scan state
        let reports = scenes
            .par_iter()
            .enumerate()
            .flat_map(|(i, tree)| {
                (0..n_passes)
                    .into_par_iter()
                    .map(move |_| (i, check_for_collision(tree, &config)))
            })
            .collect::<Vec<_>>();

        let secs = start.elapsed().as_secs_f32();

        for (_, group) in &reports.iter().chunk_by(|(i, _)| *i) {
            let group = group.collect_vec();
            ensure!(
                group.iter().map(|(_, r)| &r.outcomes).all_equal(),
                "passes over the same scene disagree"
            );
        }

        let stats: ScanStats = reports.iter().map(|(_, r)| r.stats).sum();
        println!(
            "[BENCH] {:?}: {} passes in {:.3}s ({:.1} pairs/ms), {} collisions, {} skipped",
            mode,
            reports.len(),
            secs,
            stats.n_pairs as f32 / (secs * 1000.0),
            stats.n_collisions,
            stats.n_skipped
        );
    }

    Ok(())
}
