//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "respan", about = "prediction post-processing tool.")]
/// Holds every command that is callable by the `respan` command.
pub enum Respan {
    #[structopt(about = "Re-project model predictions and merge them with the gold dataset")]
    Predict(Predict),
}

#[derive(Debug, StructOpt)]
/// Predict command and parameters.
///
/// ```sh
/// respan-predict 0.1.0
/// Re-project model predictions and merge them with the gold dataset
///
/// USAGE:
///     respan predict <archive> <input> <output> <device> [score-dir]
///
/// ARGS:
///     <archive>      model archive (decoder dump) location
///     <input>        gold dataset (one JSON document per line)
///     <output>       merged results destination
///     <device>       compute device selector (-1 for CPU)
///     <score-dir>    raw score destination, created if absent
/// ```
pub struct Predict {
    #[structopt(parse(from_os_str), help = "model archive (decoder dump) location")]
    pub archive: PathBuf,
    #[structopt(parse(from_os_str), help = "gold dataset (one JSON document per line)")]
    pub input: PathBuf,
    #[structopt(parse(from_os_str), help = "merged results destination")]
    pub output: PathBuf,
    #[structopt(help = "compute device selector (-1 for CPU)")]
    pub device: i32,
    #[structopt(parse(from_os_str), help = "raw score destination, created if absent")]
    pub score_dir: Option<PathBuf>,
}
