use std::{fs, path::PathBuf};

use anyhow::Context;
use caissa_profile::{profiler::PersonalityProfiler, weights::AggregationWeights};
use clap::Args;

use crate::{data, report};

#[derive(Debug, Clone, Args)]
pub struct BatchArg {
    /// JSON file with an array of players' records
    records: PathBuf,
    /// Alternate calibration weights file (JSON)
    #[arg(long)]
    weights: Option<PathBuf>,
    /// Write profiles as JSON to this file instead of printing text
    #[arg(long)]
    output: Option<PathBuf>,
}

pub fn run(arg: &BatchArg) -> anyhow::Result<()> {
    let weights = match &arg.weights {
        Some(path) => data::load_weights(path)?,
        None => AggregationWeights::calibrated(),
    };
    let profiler = PersonalityProfiler::new(weights)?;

    let players = data::load_players(&arg.records)?;
    let profiles = profiler.score_batch(&players);

    if let Some(output) = &arg.output {
        let json = serde_json::to_string_pretty(&profiles)?;
        fs::write(output, json)
            .with_context(|| format!("failed to write {}", output.display()))?;
        println!("Scored {} players -> {}", profiles.len(), output.display());
    } else {
        for scored in &profiles {
            println!("{}", report::render_text(scored));
        }
    }
    Ok(())
}
