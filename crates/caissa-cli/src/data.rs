//! Loading and boundary validation of record files.
//!
//! Record files are JSON produced by the upstream analysis workers.
//! Malformed records (non-finite centipawn loss) are an upstream bug and
//! fail loudly here, before any scoring runs.

use std::{fs, path::Path};

use anyhow::Context;
use caissa_profile::{batch::PlayerRecords, weights::AggregationWeights};

/// Loads one player's records from a JSON file and validates every move.
pub fn load_player(path: &Path) -> anyhow::Result<PlayerRecords> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read records file {}", path.display()))?;
    let player: PlayerRecords = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse records file {}", path.display()))?;
    validate(&player)?;
    Ok(player)
}

/// Loads a batch of players from a JSON file and validates every move.
pub fn load_players(path: &Path) -> anyhow::Result<Vec<PlayerRecords>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read records file {}", path.display()))?;
    let players: Vec<PlayerRecords> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse records file {}", path.display()))?;
    for player in &players {
        validate(player)?;
    }
    Ok(players)
}

/// Loads an alternate calibration from a JSON file.
pub fn load_weights(path: &Path) -> anyhow::Result<AggregationWeights> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read weights file {}", path.display()))?;
    let weights: AggregationWeights = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse weights file {}", path.display()))?;
    Ok(weights)
}

fn validate(player: &PlayerRecords) -> anyhow::Result<()> {
    for (i, record) in player.moves.iter().enumerate() {
        record.validate().with_context(|| {
            format!(
                "invalid move record {i} for player '{}'",
                player.player_id
            )
        })?;
    }
    Ok(())
}
