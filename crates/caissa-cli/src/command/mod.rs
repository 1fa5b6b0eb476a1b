use clap::{Parser, Subcommand};

use self::{batch::BatchArg, check_weights::CheckWeightsArg, score::ScoreArg};

mod batch;
mod check_weights;
mod score;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Score one player's records file and print the profile
    Score(#[clap(flatten)] ScoreArg),
    /// Score a batch of players in parallel
    Batch(#[clap(flatten)] BatchArg),
    /// Validate a calibration weights file
    CheckWeights(#[clap(flatten)] CheckWeightsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Score(arg) => score::run(&arg)?,
        Mode::Batch(arg) => batch::run(&arg)?,
        Mode::CheckWeights(arg) => check_weights::run(&arg)?,
    }
    Ok(())
}
