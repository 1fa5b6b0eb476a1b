//! Opening repertoire analysis: the game-level novelty/staleness signal.
//!
//! The second pipeline feeding the trait blender. A player's opening
//! labels (one per game) reduce to exactly two scalars:
//!
//! - `diversity_score` - sub-linearly scaled distinct-opening count
//!   (100 distinct openings = full credit; see
//!   [`caissa_stats::scaling::diversity_score`])
//! - `most_common_share` - fraction of games using the single most
//!   frequent opening
//!
//! These feed two *independent* linear formulas with opposite signs on
//! the same inputs:
//!
//! ```text
//! novelty_game   = clamp(base_n + diversity·w1 − share·w2, 0, 100)
//! staleness_game = clamp(base_s + share·w3 − diversity·w4, 0, 100)
//! ```
//!
//! The pair is deliberately not complementary: both scores can be low
//! (narrow repertoire, little repetition) or high, and nothing forces
//! `novelty + staleness ≈ 100`. See
//! [`weights::RepertoireWeights`](crate::weights::RepertoireWeights)
//! for the calibration constraints that keep the pair informative.

use caissa_model::GameOpeningRecord;
use caissa_stats::{frequency::FrequencyTable, scaling};

use crate::weights::RepertoireWeights;

/// The two repertoire scalars plus their raw inputs.
///
/// # Examples
///
/// ```
/// use caissa_model::{GameOpeningRecord, GameOutcome, PlayerColor};
/// use caissa_profile::repertoire::RepertoireSummary;
///
/// let games = [
///     GameOpeningRecord::new("Sicilian Defense", PlayerColor::White, GameOutcome::Win),
///     GameOpeningRecord::new("Sicilian Defense", PlayerColor::Black, GameOutcome::Draw),
///     GameOpeningRecord::new("French Defense", PlayerColor::White, GameOutcome::Loss),
///     GameOpeningRecord::new("Caro-Kann Defense", PlayerColor::Black, GameOutcome::Win),
/// ];
/// let summary = RepertoireSummary::from_records(&games);
/// assert_eq!(summary.games(), 4);
/// assert_eq!(summary.unique_openings(), 3);
/// assert_eq!(summary.most_common_share(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RepertoireSummary {
    games: usize,
    unique_openings: usize,
    most_common_share: f32,
    diversity_score: f32,
}

impl RepertoireSummary {
    /// Summarizes a player's opening records.
    ///
    /// Labels were normalized at the model boundary, so the `"Unknown"`
    /// sentinel participates here like any other label.
    #[must_use]
    pub fn from_records(records: &[GameOpeningRecord]) -> Self {
        let table = FrequencyTable::from_labels(records.iter().map(|r| r.opening.as_str()));
        Self::from_table(&table)
    }

    /// Summarizes a pre-built frequency table.
    #[must_use]
    pub fn from_table(table: &FrequencyTable) -> Self {
        Self {
            games: table.total(),
            unique_openings: table.unique_count(),
            most_common_share: table.most_common_share(),
            diversity_score: scaling::diversity_score(table.unique_count()),
        }
    }

    /// Builds a summary from already-known aggregates.
    ///
    /// Used by calibration experiments that sweep `(unique, share)` pairs
    /// without materializing per-game records.
    #[must_use]
    pub fn from_parts(games: usize, unique_openings: usize, most_common_share: f32) -> Self {
        Self {
            games,
            unique_openings,
            most_common_share,
            diversity_score: scaling::diversity_score(unique_openings),
        }
    }

    /// Number of games summarized.
    #[must_use]
    pub fn games(&self) -> usize {
        self.games
    }

    /// Number of distinct opening labels.
    #[must_use]
    pub fn unique_openings(&self) -> usize {
        self.unique_openings
    }

    /// Share of games using the most frequent opening, in `[0, 1]`.
    #[must_use]
    pub fn most_common_share(&self) -> f32 {
        self.most_common_share
    }

    /// Sub-linearly scaled diversity, in `[0, 100]`.
    #[must_use]
    pub fn diversity_score(&self) -> f32 {
        self.diversity_score
    }

    /// Game-level novelty: `clamp(base_n + diversity·w1 − share·w2)`.
    #[must_use]
    pub fn novelty_score(&self, w: &RepertoireWeights) -> f32 {
        scaling::clamp_score(
            w.novelty_base + self.diversity_score * w.novelty_diversity_bonus
                - self.most_common_share * w.novelty_repetition_penalty,
        )
    }

    /// Game-level staleness: `clamp(base_s + share·w3 − diversity·w4)`.
    #[must_use]
    pub fn staleness_score(&self, w: &RepertoireWeights) -> f32 {
        scaling::clamp_score(
            w.staleness_base + self.most_common_share * w.staleness_repetition_bonus
                - self.diversity_score * w.staleness_diversity_penalty,
        )
    }
}

#[cfg(test)]
mod tests {
    use caissa_model::{GameOutcome, PlayerColor};

    use super::*;

    fn games_with_counts(counts: &[(&str, usize)]) -> Vec<GameOpeningRecord> {
        let mut records = Vec::new();
        for (label, count) in counts {
            for _ in 0..*count {
                records.push(GameOpeningRecord::new(
                    label,
                    PlayerColor::White,
                    GameOutcome::Draw,
                ));
            }
        }
        records
    }

    /// Distributes `games` games over `unique` labels with the given
    /// most-common count; every other label gets an even share of the rest.
    fn synthetic_repertoire(games: usize, unique: usize, top_count: usize) -> Vec<GameOpeningRecord> {
        let rest = games - top_count;
        let others = unique - 1;
        let mut counts = vec![("Top", top_count)];
        let labels: Vec<String> = (0..others).map(|i| format!("Opening {i}")).collect();
        for (i, label) in labels.iter().enumerate() {
            let share = rest / others + usize::from(i < rest % others);
            counts.push((label.as_str(), share));
        }
        let records = games_with_counts(&counts);
        assert_eq!(records.len(), games);
        records
    }

    #[test]
    fn test_unknown_sentinel_participates() {
        let records = games_with_counts(&[("", 3), ("Sicilian Defense", 2)]);
        let summary = RepertoireSummary::from_records(&records);
        assert_eq!(summary.unique_openings(), 2);
        assert_eq!(summary.most_common_share(), 0.6);
    }

    #[test]
    fn test_single_opening_repertoire() {
        let w = RepertoireWeights::default();
        let records = games_with_counts(&[("London System", 40)]);
        let summary = RepertoireSummary::from_records(&records);

        assert_eq!(summary.unique_openings(), 1);
        assert_eq!(summary.most_common_share(), 1.0);
        // Formula-implied extremes for the default calibration:
        // novelty   = 30 + 10*0.7 - 1.0*25 = 12
        // staleness = 25 + 1.0*60 - 10*0.3 = 82
        assert!((summary.novelty_score(&w) - 12.0).abs() < 1e-4);
        assert!((summary.staleness_score(&w) - 82.0).abs() < 1e-4);
    }

    #[test]
    fn test_diversity_monotonicity() {
        // Holding the most-common share fixed, more unique openings never
        // decreases novelty and never increases staleness.
        let w = RepertoireWeights::default();
        let share = 0.2;
        let mut last_novelty = -1.0;
        let mut last_staleness = 101.0;
        for unique in 1..=150 {
            let summary = RepertoireSummary::from_parts(1000, unique, share);
            let novelty = summary.novelty_score(&w);
            let staleness = summary.staleness_score(&w);
            assert!(novelty >= last_novelty, "novelty dropped at unique={unique}");
            assert!(
                staleness <= last_staleness,
                "staleness rose at unique={unique}"
            );
            last_novelty = novelty;
            last_staleness = staleness;
        }
    }

    #[test]
    fn test_repetition_monotonicity() {
        // Holding unique openings fixed, more repetition never increases
        // novelty and never decreases staleness.
        let w = RepertoireWeights::default();
        let mut last_novelty = 101.0;
        let mut last_staleness = -1.0;
        for step in 0..=100 {
            #[expect(clippy::cast_precision_loss)]
            let share = step as f32 / 100.0;
            let summary = RepertoireSummary::from_parts(1000, 40, share);
            let novelty = summary.novelty_score(&w);
            let staleness = summary.staleness_score(&w);
            assert!(novelty <= last_novelty, "novelty rose at share={share}");
            assert!(
                staleness >= last_staleness,
                "staleness dropped at share={share}"
            );
            last_novelty = novelty;
            last_staleness = staleness;
        }
    }

    #[test]
    fn test_concentrated_vs_broad_repertoire() {
        // 1000 games / 27 unique / top opening 25.7% must score staler
        // and less novel than 1000 games / 79 unique / top 15.9%.
        let w = RepertoireWeights::default();
        let concentrated =
            RepertoireSummary::from_records(&synthetic_repertoire(1000, 27, 257));
        let broad = RepertoireSummary::from_records(&synthetic_repertoire(1000, 79, 159));

        assert_eq!(concentrated.unique_openings(), 27);
        assert!((concentrated.most_common_share() - 0.257).abs() < 1e-4);
        assert_eq!(broad.unique_openings(), 79);
        assert!((broad.most_common_share() - 0.159).abs() < 1e-4);

        assert!(concentrated.staleness_score(&w) > broad.staleness_score(&w));
        assert!(concentrated.novelty_score(&w) < broad.novelty_score(&w));
    }

    #[test]
    fn test_novelty_and_staleness_not_complementary() {
        // A narrow repertoire with little repetition scores low on both:
        // the pair is not forced to sum to ~100.
        let w = RepertoireWeights::default();
        let summary = RepertoireSummary::from_parts(8, 4, 0.25);
        let total = summary.novelty_score(&w) + summary.staleness_score(&w);
        assert!(
            (total - 100.0).abs() > 20.0,
            "novelty + staleness = {total}, too close to 100"
        );
    }

    #[test]
    fn test_scores_bounded_across_grid() {
        let w = RepertoireWeights::default();
        for unique in [1, 2, 10, 50, 100, 500] {
            for share in [0.0, 0.01, 0.25, 0.5, 1.0] {
                let summary = RepertoireSummary::from_parts(1000, unique, share);
                for score in [summary.novelty_score(&w), summary.staleness_score(&w)] {
                    assert!((0.0..=100.0).contains(&score));
                }
            }
        }
    }
}
