use crate::EPOCH;
use crate::config::{CheckMode, PairEnumeration};
use crate::scene::ext_repr::ExtScene;
use anyhow::{Context, Result};
use clap::Parser;
use log::{Level, LevelFilter, log};
use serde::Serialize;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Parser)]
pub struct MainCli {
    /// Path to input file (mandatory)
    #[arg(short = 'i', long, help = "Path to the input scene JSON file")]
    pub input: String,

    #[arg(short = 'm', long, value_enum, default_value_t = CheckMode::Mixed, help = "Collision tests to perform")]
    pub mode: CheckMode,

    #[arg(
        short = 'a',
        long,
        default_value_t = 0.0,
        help = "Exclude shapes with an outer area below this value (0 disables)"
    )]
    pub minimum_area: f32,

    #[arg(
        short = 'v',
        long,
        num_args = 2,
        value_names = ["X", "Y"],
        allow_negative_numbers = true,
        help = "Velocity applied to every shape for the swept test"
    )]
    pub velocity: Option<Vec<f32>>,

    #[arg(short = 'e', long, value_enum, default_value_t = PairEnumeration::Nested, help = "How shape pairs are enumerated")]
    pub enumeration: PairEnumeration,

    /// Skip the svg rendering of the result
    #[arg(long, help = "Do not export an svg of the scene")]
    pub no_svg: bool,
}

pub fn init_logger(level_filter: LevelFilter, log_file_path: &Path) -> Result<()> {
    //remove old log file
    let _ = fs::remove_file(log_file_path);
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{:<25}{}", prefix, message))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .chain(fern::log_file(log_file_path)?)
        .apply()?;
    log!(
        Level::Info,
        "[EPOCH]: {}",
        jiff::Timestamp::now().to_string()
    );
    Ok(())
}

pub fn write_json(json: &impl Serialize, path: &Path, log_lvl: Level) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("could not create parent directory for json file")?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, json)?;
    log!(
        log_lvl,
        "[IO] json exported to file://{}",
        fs::canonicalize(path)
            .context("could not canonicalize path")?
            .display()
    );
    Ok(())
}

pub fn read_scene_json(path: &Path) -> Result<ExtScene> {
    let file = File::open(path).context("could not open scene file")?;
    serde_json::from_reader(BufReader::new(file)).context("not a valid scene (ExtScene)")
}
