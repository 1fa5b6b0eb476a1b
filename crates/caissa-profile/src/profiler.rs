//! Trait blending: combining the two pipelines into a final profile.
//!
//! [`PersonalityProfiler`] owns one validated [`AggregationWeights`] and
//! exposes a single pure scoring entry point: given a player's move
//! records and opening records, produce a [`TraitProfile`].
//!
//! # Blending
//!
//! Tactical, positional, aggressive, and patient come straight from the
//! move-level aggregator. Novelty and staleness blend the move-level
//! component with the game-level repertoire component:
//!
//! ```text
//! final = move_component · wm + game_component · wg    (wm + wg = 1, wg ≥ wm)
//! ```
//!
//! The game-level weight dominates because opening choice is a stronger,
//! lower-noise signal of novelty/staleness than per-move engine deltas.
//!
//! # Empty Input
//!
//! If either the move collection or the opening collection is empty, the
//! profile is the neutral default: every trait exactly 50.0, confidence
//! 0.0. No formula runs against a zero denominator, so no NaN can reach
//! the output. Absence of data is reported as low confidence, never as
//! an error.

use caissa_model::{GameOpeningRecord, MoveRecord, TraitProfile};
use caissa_stats::scaling::clamp_score;

use crate::{
    move_aggregator::{MoveAggregate, MoveTraitScores},
    repertoire::RepertoireSummary,
    weights::{AggregationWeights, WeightError},
};

/// Games of history at which confidence from game count saturates.
const CONFIDENCE_FULL_GAMES: f32 = 30.0;
/// Analyzed moves at which confidence from move count saturates.
const CONFIDENCE_FULL_MOVES: f32 = 200.0;

/// Stateless scoring engine for one calibration.
///
/// Construction validates the weights; scoring is a pure function of the
/// supplied records, so one profiler can be shared freely across threads
/// (`&self` everywhere, no interior mutability).
///
/// # Examples
///
/// ```
/// use caissa_model::{GameOpeningRecord, GameOutcome, MoveRecord, PlayerColor};
/// use caissa_profile::{profiler::PersonalityProfiler, weights::AggregationWeights};
///
/// let profiler = PersonalityProfiler::new(AggregationWeights::calibrated()).unwrap();
///
/// let moves = [MoveRecord::new(false, false, true, 5.0).unwrap()];
/// let games = [GameOpeningRecord::new(
///     "Ruy Lopez",
///     PlayerColor::White,
///     GameOutcome::Win,
/// )];
///
/// let profile = profiler.score(&moves, &games);
/// assert!(profile.is_bounded());
/// assert_eq!(profile.games_analyzed, 1);
/// ```
#[derive(Debug, Clone)]
pub struct PersonalityProfiler {
    weights: AggregationWeights,
}

impl PersonalityProfiler {
    /// Creates a profiler, validating the calibration.
    ///
    /// # Errors
    ///
    /// Returns a [`WeightError`] if the weights violate a structural
    /// constraint. This is fatal at construction, not per call.
    pub fn new(weights: AggregationWeights) -> Result<Self, WeightError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// The calibration this profiler scores with.
    #[must_use]
    pub fn weights(&self) -> &AggregationWeights {
        &self.weights
    }

    /// Scores one player's history.
    ///
    /// Pure and order-independent: any permutation of `moves` or
    /// `openings` yields a bit-identical profile.
    #[must_use]
    pub fn score(&self, moves: &[MoveRecord], openings: &[GameOpeningRecord]) -> TraitProfile {
        if moves.is_empty() || openings.is_empty() {
            let mut profile = TraitProfile::neutral();
            profile.moves_analyzed = moves.len();
            profile.games_analyzed = openings.len();
            return profile;
        }

        let move_scores = MoveAggregate::from_records(moves).trait_scores(&self.weights);
        let repertoire = RepertoireSummary::from_records(openings);
        self.blend(&move_scores, &repertoire, moves.len())
    }

    /// Blends pre-computed pipeline outputs. Split out so batch scoring
    /// and calibration sweeps can reuse aggregates.
    #[must_use]
    pub fn blend(
        &self,
        move_scores: &MoveTraitScores,
        repertoire: &RepertoireSummary,
        moves_analyzed: usize,
    ) -> TraitProfile {
        let w = &self.weights;
        let wm = w.blend.move_level;
        let wg = w.blend.game_level;

        let novelty_game = repertoire.novelty_score(&w.repertoire);
        let staleness_game = repertoire.staleness_score(&w.repertoire);

        TraitProfile {
            tactical: move_scores.tactical,
            positional: move_scores.positional,
            aggressive: move_scores.aggressive,
            patient: move_scores.patient,
            novelty: clamp_score(move_scores.novelty * wm + novelty_game * wg),
            staleness: clamp_score(move_scores.staleness * wm + staleness_game * wg),
            games_analyzed: repertoire.games(),
            moves_analyzed,
            confidence: confidence(repertoire.games(), moves_analyzed),
        }
    }
}

/// Confidence in `[0, 1]`: saturating in both history dimensions.
#[expect(clippy::cast_precision_loss)]
fn confidence(games: usize, moves: usize) -> f32 {
    let game_part = (games as f32 / CONFIDENCE_FULL_GAMES).min(1.0);
    let move_part = (moves as f32 / CONFIDENCE_FULL_MOVES).min(1.0);
    game_part * move_part
}

#[cfg(test)]
mod tests {
    use caissa_model::{GameOutcome, PlayerColor};

    use super::*;

    fn profiler() -> PersonalityProfiler {
        PersonalityProfiler::new(AggregationWeights::calibrated()).unwrap()
    }

    fn opening(label: &str) -> GameOpeningRecord {
        GameOpeningRecord::new(label, PlayerColor::White, GameOutcome::Win)
    }

    fn sample_moves() -> Vec<MoveRecord> {
        // Fractional loss so permutation tests cover float rounding too
        let mut moves = vec![MoveRecord::new(false, false, false, 20.3).unwrap(); 180];
        moves.extend(vec![MoveRecord::new(false, false, true, 0.0).unwrap(); 15]);
        moves.extend(vec![MoveRecord::new(true, false, false, 300.0).unwrap(); 3]);
        moves.extend(vec![MoveRecord::new(false, false, false, -120.0).unwrap(); 2]);
        moves
    }

    fn sample_openings() -> Vec<GameOpeningRecord> {
        let mut games = Vec::new();
        for i in 0..12 {
            games.push(opening(&format!("Opening {i}")));
        }
        games.extend(std::iter::repeat_with(|| opening("Queen's Gambit")).take(8));
        games
    }

    #[test]
    fn test_empty_moves_yield_neutral_profile() {
        let profile = profiler().score(&[], &sample_openings());
        assert_eq!(profile.tactical, 50.0);
        assert_eq!(profile.novelty, 50.0);
        assert_eq!(profile.staleness, 50.0);
        assert_eq!(profile.confidence, 0.0);
    }

    #[test]
    fn test_empty_openings_yield_neutral_profile() {
        let profile = profiler().score(&sample_moves(), &[]);
        assert_eq!(profile.tactical, 50.0);
        assert_eq!(profile.confidence, 0.0);
        assert_eq!(profile.moves_analyzed, 200);
    }

    #[test]
    fn test_fully_empty_input_is_exactly_neutral() {
        assert_eq!(profiler().score(&[], &[]), TraitProfile::neutral());
    }

    #[test]
    fn test_profile_is_deterministic_under_permutation() {
        let profiler = profiler();
        let moves = sample_moves();
        let openings = sample_openings();

        let mut moves_shuffled = moves.clone();
        moves_shuffled.reverse();
        moves_shuffled.rotate_left(17);
        let mut openings_shuffled = openings.clone();
        openings_shuffled.reverse();
        openings_shuffled.rotate_left(5);

        let baseline = profiler.score(&moves, &openings);
        let permuted = profiler.score(&moves_shuffled, &openings_shuffled);
        assert_eq!(baseline, permuted);
    }

    #[test]
    fn test_profile_is_bounded() {
        let profile = profiler().score(&sample_moves(), &sample_openings());
        assert!(profile.is_bounded());
    }

    #[test]
    fn test_game_level_dominates_novelty_blend() {
        // Same moves, drastically different repertoires: the blended
        // novelty must follow the repertoire signal.
        let profiler = profiler();
        let moves = sample_moves();

        let narrow: Vec<_> = std::iter::repeat_with(|| opening("London System"))
            .take(40)
            .collect();
        let broad: Vec<_> = (0..40).map(|i| opening(&format!("Opening {i}"))).collect();

        let narrow_profile = profiler.score(&moves, &narrow);
        let broad_profile = profiler.score(&moves, &broad);

        assert!(broad_profile.novelty > narrow_profile.novelty + 20.0);
        assert!(narrow_profile.staleness > broad_profile.staleness + 20.0);
    }

    #[test]
    fn test_confidence_grows_with_history() {
        let profiler = profiler();
        let moves = sample_moves();

        let few_games = profiler.score(&moves, &sample_openings()[..5]);
        let many_games = profiler.score(&moves, &sample_openings());
        assert!(many_games.confidence > few_games.confidence);
        assert!(many_games.confidence <= 1.0);
    }

    #[test]
    fn test_invalid_weights_rejected_at_construction() {
        let mut weights = AggregationWeights::calibrated();
        weights.blend.move_level = 0.9;
        assert!(PersonalityProfiler::new(weights).is_err());
    }
}
