//! Move-level aggregation: reducing per-move engine annotations to
//! trait scores.
//!
//! This is the first of the two pipelines feeding the trait blender. It
//! reduces a player's move records to pure aggregate counts and means
//! ([`MoveAggregate`]), then applies the per-trait formulas to produce
//! [`MoveTraitScores`]. Only counts and means enter the formulas, and
//! the loss mean is computed over a canonically sorted copy of the
//! losses (float addition is not associative), so any permutation of
//! the same records yields bit-identical scores.
//!
//! # Formulas
//!
//! Tactical uses the fixed count-weighted shape (see
//! [`TacticalWeights`](crate::weights::TacticalWeights)); every other
//! trait uses the shared additive shape of
//! [`MoveTraitWeights`](crate::weights::MoveTraitWeights):
//!
//! ```text
//! score = clamp(base + Σ(shareᵢ · weightᵢ) + avg_loss · loss_weight, 0, 100)
//! ```
//!
//! An empty aggregate scores neutral (50.0 everywhere): absence of data
//! is not an error.

use caissa_model::MoveRecord;
use caissa_stats::scaling::{clamp_score, ratio};

use crate::weights::{AggregationWeights, MoveTraitWeights, TacticalWeights};

/// Order-independent aggregate of a player's move records.
///
/// # Examples
///
/// ```
/// use caissa_model::MoveRecord;
/// use caissa_profile::move_aggregator::MoveAggregate;
///
/// let moves = [
///     MoveRecord::new(false, false, true, 0.0).unwrap(),
///     MoveRecord::new(true, false, false, 220.0).unwrap(),
/// ];
/// let aggregate = MoveAggregate::from_records(&moves);
/// assert_eq!(aggregate.len(), 2);
/// assert_eq!(aggregate.blunders(), 1);
/// assert_eq!(aggregate.average_loss(), 110.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveAggregate {
    moves: usize,
    blunders: usize,
    mistakes: usize,
    best: usize,
    brilliant: usize,
    losses: Vec<f32>,
}

impl MoveAggregate {
    /// Aggregates a sequence of validated move records.
    #[must_use]
    pub fn from_records(records: &[MoveRecord]) -> Self {
        let mut aggregate = Self::default();
        for record in records {
            aggregate.add(record);
        }
        aggregate
    }

    /// Folds one record into the aggregate.
    pub fn add(&mut self, record: &MoveRecord) {
        debug_assert!(
            record.centipawn_loss.is_finite(),
            "records must be validated at the ingestion boundary"
        );
        self.moves += 1;
        self.blunders += usize::from(record.is_blunder);
        self.mistakes += usize::from(record.is_mistake);
        self.best += usize::from(record.is_best);
        self.brilliant += usize::from(record.is_brilliant());
        self.losses.push(record.centipawn_loss);
    }

    /// Number of moves aggregated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves
    }

    /// Returns `true` if no moves were aggregated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves == 0
    }

    /// Number of blunders.
    #[must_use]
    pub fn blunders(&self) -> usize {
        self.blunders
    }

    /// Number of mistakes.
    #[must_use]
    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    /// Number of engine-best moves.
    #[must_use]
    pub fn best_moves(&self) -> usize {
        self.best
    }

    /// Number of brilliant moves (loss below the brilliance threshold).
    #[must_use]
    pub fn brilliant_moves(&self) -> usize {
        self.brilliant
    }

    /// Mean centipawn loss across all aggregated moves. Zero when empty.
    ///
    /// Losses are summed over a copy sorted with `f32::total_cmp`, so
    /// the mean is bit-identical for any permutation of the input
    /// records regardless of how float rounding falls.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn average_loss(&self) -> f32 {
        if self.moves == 0 {
            return 0.0;
        }
        let mut sorted = self.losses.clone();
        sorted.sort_by(f32::total_cmp);
        sorted.iter().copied().sum::<f32>() / self.moves as f32
    }

    /// Computes all six move-level trait scores.
    ///
    /// Returns [`MoveTraitScores::neutral`] when the aggregate is empty.
    #[must_use]
    pub fn trait_scores(&self, weights: &AggregationWeights) -> MoveTraitScores {
        if self.is_empty() {
            return MoveTraitScores::neutral();
        }
        let average_loss = self.average_loss();
        MoveTraitScores {
            tactical: self.tactical_score(&weights.tactical, average_loss),
            positional: self.additive_score(&weights.positional, average_loss),
            aggressive: self.additive_score(&weights.aggressive, average_loss),
            patient: self.additive_score(&weights.patient, average_loss),
            novelty: self.additive_score(&weights.novelty_move, average_loss),
            staleness: self.additive_score(&weights.staleness_move, average_loss),
        }
    }

    /// The fixed tactical formula.
    #[expect(clippy::cast_precision_loss)]
    fn tactical_score(&self, w: &TacticalWeights, average_loss: f32) -> f32 {
        let n = self.moves as f32;
        let error_penalty = (self.blunders as f32 * w.blunder_count_weight
            + self.mistakes as f32 * w.mistake_count_weight)
            / n
            * 100.0;
        let centipawn_penalty = (average_loss / w.loss_divisor).min(w.loss_penalty_cap);
        let best_bonus = ratio(self.best, self.moves) * w.best_bonus;
        let brilliant_bonus = ratio(self.brilliant, self.moves) * w.brilliant_bonus;
        clamp_score(w.base - error_penalty - centipawn_penalty + best_bonus + brilliant_bonus)
    }

    /// The shared additive shape used by every non-tactical trait.
    fn additive_score(&self, w: &MoveTraitWeights, average_loss: f32) -> f32 {
        let raw = w.base
            + ratio(self.best, self.moves) * w.best_weight
            + ratio(self.brilliant, self.moves) * w.brilliant_weight
            + ratio(self.blunders, self.moves) * w.blunder_weight
            + ratio(self.mistakes, self.moves) * w.mistake_weight
            + average_loss * w.loss_weight;
        clamp_score(raw)
    }
}

/// The six move-level trait scores, each in `[0, 100]`.
///
/// Tactical, positional, aggressive, and patient pass through to the
/// final profile unchanged; the novelty/staleness pair is blended with
/// the game-level repertoire scores downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveTraitScores {
    pub tactical: f32,
    pub positional: f32,
    pub aggressive: f32,
    pub patient: f32,
    pub novelty: f32,
    pub staleness: f32,
}

impl MoveTraitScores {
    /// Every trait at the neutral 50.0.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            tactical: 50.0,
            positional: 50.0,
            aggressive: 50.0,
            patient: 50.0,
            novelty: 50.0,
            staleness: 50.0,
        }
    }
}
