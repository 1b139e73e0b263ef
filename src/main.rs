//! # respan
//!
//! Post-processing pipeline for information-extraction model predictions:
//! re-projects sentence-local spans into document coordinates and merges
//! them back into the gold dataset.
//!
//! ```sh
//! respan 0.1.0
//! prediction post-processing tool.
//!
//! USAGE:
//!     respan <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help       Prints this message or the help of the given subcommand(s)
//!     predict    Re-project model predictions and merge them with the gold dataset
//! ```
use log::debug;
use structopt::StructOpt;

use respan::cli;
use respan::error;
use respan::pipeline::Prediction;

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Respan::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Respan::Predict(p) => {
            let pred = Prediction::new(p.archive, p.input, p.output, p.device, p.score_dir);
            pred.run()?;
        }
    };
    Ok(())
}
