use std::path::PathBuf;

use caissa_profile::{
    batch::PlayerProfile, profiler::PersonalityProfiler, weights::AggregationWeights,
};
use clap::Args;

use crate::{
    data,
    report::{self, ProfileReport},
};

#[derive(Debug, Clone, Args)]
pub struct ScoreArg {
    /// JSON file with one player's move and opening records
    records: PathBuf,
    /// Alternate calibration weights file (JSON)
    #[arg(long)]
    weights: Option<PathBuf>,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(arg: &ScoreArg) -> anyhow::Result<()> {
    let weights = match &arg.weights {
        Some(path) => data::load_weights(path)?,
        None => AggregationWeights::calibrated(),
    };
    let profiler = PersonalityProfiler::new(weights)?;

    let player = data::load_player(&arg.records)?;
    let profile = profiler.score(&player.moves, &player.openings);

    if arg.json {
        let losses: Vec<f32> = player.moves.iter().map(|m| m.centipawn_loss).collect();
        let report = ProfileReport::new(player.player_id, profile, &losses);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let scored = PlayerProfile {
            player_id: player.player_id,
            profile,
        };
        print!("{}", report::render_text(&scored));
    }
    Ok(())
}
