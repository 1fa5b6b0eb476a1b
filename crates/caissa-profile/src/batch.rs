//! Parallel scoring across players.
//!
//! Scoring is a pure function per player with no shared mutable state,
//! so a batch of players parallelizes trivially: one rayon task per
//! player, no locks. Output order matches input order regardless of
//! scheduling, keeping batch runs deterministic end to end.

use caissa_model::{GameOpeningRecord, MoveRecord, TraitProfile};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::profiler::PersonalityProfiler;

/// One player's full scoring input.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerRecords {
    /// Caller-assigned identifier, echoed back on the output.
    pub player_id: String,
    pub moves: Vec<MoveRecord>,
    pub openings: Vec<GameOpeningRecord>,
}

/// One player's scored profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerProfile {
    pub player_id: String,
    pub profile: TraitProfile,
}

impl PersonalityProfiler {
    /// Scores a batch of players in parallel.
    ///
    /// # Examples
    ///
    /// ```
    /// use caissa_profile::{
    ///     batch::PlayerRecords, profiler::PersonalityProfiler, weights::AggregationWeights,
    /// };
    ///
    /// let profiler = PersonalityProfiler::new(AggregationWeights::calibrated()).unwrap();
    /// let players = vec![PlayerRecords {
    ///     player_id: "magnus".to_string(),
    ///     moves: vec![],
    ///     openings: vec![],
    /// }];
    ///
    /// let profiles = profiler.score_batch(&players);
    /// assert_eq!(profiles[0].player_id, "magnus");
    /// assert_eq!(profiles[0].profile.tactical, 50.0);
    /// ```
    #[must_use]
    pub fn score_batch(&self, players: &[PlayerRecords]) -> Vec<PlayerProfile> {
        players
            .par_iter()
            .map(|player| PlayerProfile {
                player_id: player.player_id.clone(),
                profile: self.score(&player.moves, &player.openings),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use caissa_model::{GameOutcome, PlayerColor};

    use super::*;
    use crate::weights::AggregationWeights;

    fn player(id: &str, opening_labels: &[&str]) -> PlayerRecords {
        PlayerRecords {
            player_id: id.to_string(),
            moves: vec![MoveRecord::new(false, false, false, 15.0).unwrap(); 40],
            openings: opening_labels
                .iter()
                .map(|label| GameOpeningRecord::new(label, PlayerColor::Black, GameOutcome::Loss))
                .collect(),
        }
    }

    #[test]
    fn test_batch_preserves_input_order() {
        let profiler = PersonalityProfiler::new(AggregationWeights::calibrated()).unwrap();
        let players: Vec<_> = (0..64)
            .map(|i| player(&format!("player-{i}"), &["e4", "d4", "c4"]))
            .collect();

        let profiles = profiler.score_batch(&players);
        assert_eq!(profiles.len(), 64);
        for (i, scored) in profiles.iter().enumerate() {
            assert_eq!(scored.player_id, format!("player-{i}"));
        }
    }

    #[test]
    fn test_batch_matches_sequential_scoring() {
        let profiler = PersonalityProfiler::new(AggregationWeights::calibrated()).unwrap();
        let players = vec![
            player("narrow", &["e4", "e4", "e4", "e4"]),
            player("broad", &["e4", "d4", "c4", "Nf3"]),
            player("empty", &[]),
        ];

        let batch = profiler.score_batch(&players);
        for (input, scored) in players.iter().zip(&batch) {
            assert_eq!(scored.profile, profiler.score(&input.moves, &input.openings));
        }
    }
}
