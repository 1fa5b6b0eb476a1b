use std::path::PathBuf;

use clap::Args;

use crate::data;

#[derive(Debug, Clone, Args)]
pub struct CheckWeightsArg {
    /// Calibration weights file (JSON) to validate
    weights: PathBuf,
}

pub fn run(arg: &CheckWeightsArg) -> anyhow::Result<()> {
    let weights = data::load_weights(&arg.weights)?;
    weights.validate()?;
    println!("{}: valid calibration", arg.weights.display());
    Ok(())
}
