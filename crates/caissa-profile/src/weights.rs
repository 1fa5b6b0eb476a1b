//! Calibration weights for the scoring formulas.
//!
//! Every coefficient the trait formulas use lives in
//! [`AggregationWeights`]: an explicit, immutable configuration value
//! constructed once and passed into the profiler, never module-level
//! mutable state. The struct is serde-(de)serializable so alternate
//! calibrations can be loaded from JSON and compared without recompiling.
//!
//! # Qualitative Constraints
//!
//! The exact numbers are a tuning exercise, but any valid calibration
//! must satisfy the structural constraints enforced by
//! [`AggregationWeights::validate`]:
//!
//! - Diversity pushes novelty **up** and staleness **down**
//!   (`novelty_diversity_bonus > 0`, `staleness_diversity_penalty > 0`)
//! - Repetition pushes novelty **down** and staleness **up**
//!   (`novelty_repetition_penalty > 0`, `staleness_repetition_bonus > 0`)
//! - Repetition matters more to staleness than to novelty
//!   (`staleness_repetition_bonus > novelty_repetition_penalty`).
//!   Without this the two scores collapse into near-mirror images that
//!   always sum to ~100, making the pair uninformative.
//! - Blend weights sum to 1.0 with the game-level weight dominant:
//!   opening choice is a stronger, lower-noise novelty/staleness signal
//!   than per-move engine deltas.
//!
//! A violated constraint is a configuration bug and fails at
//! construction ([`WeightError`]), not per scoring call.

use serde::{Deserialize, Serialize};

/// Coefficients for the tactical formula (spec-fixed shape):
///
/// ```text
/// error_penalty     = (blunders·5 + mistakes·3) / N · 100
/// centipawn_penalty = min(10, avg_loss / 6)
/// best_bonus        = best_share · 25
/// brilliant_bonus   = brilliant_share · 35
/// tactical = clamp(100 − error_penalty − centipawn_penalty
///                      + best_bonus + brilliant_bonus, 0, 100)
/// ```
///
/// Error *counts* subtract more than loss magnitude does, and
/// best/brilliant moves reward peak performance disproportionately,
/// which right-skews the score distribution and separates strong
/// tactical players from the bulk.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TacticalWeights {
    /// Starting score before penalties and bonuses.
    pub base: f32,
    /// Per-blunder multiplier inside the error penalty.
    pub blunder_count_weight: f32,
    /// Per-mistake multiplier inside the error penalty.
    pub mistake_count_weight: f32,
    /// Cap on the average-loss penalty.
    pub loss_penalty_cap: f32,
    /// Divisor turning average centipawn loss into penalty points.
    pub loss_divisor: f32,
    /// Bonus per unit of best-move share.
    pub best_bonus: f32,
    /// Bonus per unit of brilliant-move share.
    pub brilliant_bonus: f32,
}

impl Default for TacticalWeights {
    fn default() -> Self {
        Self {
            base: 100.0,
            blunder_count_weight: 5.0,
            mistake_count_weight: 3.0,
            loss_penalty_cap: 10.0,
            loss_divisor: 6.0,
            best_bonus: 25.0,
            brilliant_bonus: 35.0,
        }
    }
}

/// Coefficients for one move-level trait in the shared additive shape:
///
/// ```text
/// score = clamp(base + best_share·best_weight
///                    + brilliant_share·brilliant_weight
///                    + blunder_share·blunder_weight
///                    + mistake_share·mistake_weight
///                    + avg_loss·loss_weight, 0, 100)
/// ```
///
/// Weights are signed: a negative weight is a penalty. This lets the
/// same formula express opposing traits (a blunder share that *raises*
/// aggression and *lowers* patience) without per-trait code paths.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MoveTraitWeights {
    pub base: f32,
    pub best_weight: f32,
    pub brilliant_weight: f32,
    pub blunder_weight: f32,
    pub mistake_weight: f32,
    /// Applied to the average centipawn loss (not a share).
    pub loss_weight: f32,
}

/// Coefficients for the game-level novelty/staleness pair:
///
/// ```text
/// novelty_game   = clamp(base_n + diversity·w1 − share·w2, 0, 100)
/// staleness_game = clamp(base_s + share·w3 − diversity·w4, 0, 100)
/// ```
///
/// The two formulas read the same inputs with opposite polarity but are
/// calibrated independently: the scores may both be low, both high, or
/// diverge. The "natural opposition" between novelty and staleness comes
/// from shared input polarity, not from forcing the pair to sum to 100.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RepertoireWeights {
    /// `base_n`: floor so a moderate player doesn't collapse to 0.
    pub novelty_base: f32,
    /// `w1`: bonus per diversity point.
    pub novelty_diversity_bonus: f32,
    /// `w2`: penalty per unit of most-common share.
    pub novelty_repetition_penalty: f32,
    /// `base_s`: floor for staleness.
    pub staleness_base: f32,
    /// `w3`: bonus per unit of most-common share. Must exceed `w2`.
    pub staleness_repetition_bonus: f32,
    /// `w4`: penalty per diversity point.
    pub staleness_diversity_penalty: f32,
}

impl Default for RepertoireWeights {
    fn default() -> Self {
        Self {
            novelty_base: 30.0,
            novelty_diversity_bonus: 0.7,
            novelty_repetition_penalty: 25.0,
            staleness_base: 25.0,
            staleness_repetition_bonus: 60.0,
            staleness_diversity_penalty: 0.3,
        }
    }
}

/// Blend weights combining move-level and game-level components for the
/// novelty/staleness pair. `move_level + game_level` must equal 1.0 with
/// `game_level ≥ move_level`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct BlendWeights {
    /// `wm`: weight of the move-level component.
    pub move_level: f32,
    /// `wg`: weight of the game-level component.
    pub game_level: f32,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            move_level: 0.3,
            game_level: 0.7,
        }
    }
}

/// The full, immutable calibration for one profiler instance.
///
/// # Examples
///
/// ```
/// use caissa_profile::weights::AggregationWeights;
///
/// let weights = AggregationWeights::default();
/// assert!(weights.validate().is_ok());
///
/// let mut broken = AggregationWeights::default();
/// broken.blend.move_level = 0.8; // blend no longer sums to 1.0
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AggregationWeights {
    pub tactical: TacticalWeights,
    pub positional: MoveTraitWeights,
    pub aggressive: MoveTraitWeights,
    pub patient: MoveTraitWeights,
    /// Move-level component of the novelty blend.
    pub novelty_move: MoveTraitWeights,
    /// Move-level component of the staleness blend.
    pub staleness_move: MoveTraitWeights,
    pub repertoire: RepertoireWeights,
    pub blend: BlendWeights,
}

impl Default for AggregationWeights {
    /// The shipped calibration ([`AggregationWeights::calibrated`]).
    fn default() -> Self {
        Self::calibrated()
    }
}

impl AggregationWeights {
    /// The default calibration shipped with the engine.
    ///
    /// Chosen to satisfy every structural constraint of
    /// [`AggregationWeights::validate`] and to keep typical club-player
    /// inputs in the informative middle of the scale. The exact numbers
    /// are tuning, not contract; load alternates from JSON to experiment.
    #[must_use]
    pub fn calibrated() -> Self {
        Self {
            tactical: TacticalWeights::default(),
            // Steady low-loss play: rewards best-move consistency,
            // punishes average loss and outright errors.
            positional: MoveTraitWeights {
                base: 65.0,
                best_weight: 25.0,
                brilliant_weight: 0.0,
                blunder_weight: -40.0,
                mistake_weight: -20.0,
                loss_weight: -0.9,
            },
            // Sharp play carries both brilliancies and errors; average
            // loss mildly raises the score (risk tolerance).
            aggressive: MoveTraitWeights {
                base: 40.0,
                best_weight: 10.0,
                brilliant_weight: 150.0,
                blunder_weight: 45.0,
                mistake_weight: 20.0,
                loss_weight: 0.15,
            },
            // Restraint: speculative strikes and errors both count
            // against patience.
            patient: MoveTraitWeights {
                base: 60.0,
                best_weight: 15.0,
                brilliant_weight: -60.0,
                blunder_weight: -50.0,
                mistake_weight: -25.0,
                loss_weight: -0.4,
            },
            // Move-level novelty: willingness to deviate from the
            // engine's expectation in a good way.
            novelty_move: MoveTraitWeights {
                base: 45.0,
                best_weight: 5.0,
                brilliant_weight: 120.0,
                blunder_weight: 0.0,
                mistake_weight: -10.0,
                loss_weight: 0.1,
            },
            // Move-level staleness: safe, expectation-hugging play.
            staleness_move: MoveTraitWeights {
                base: 55.0,
                best_weight: 10.0,
                brilliant_weight: -80.0,
                blunder_weight: -10.0,
                mistake_weight: 0.0,
                loss_weight: -0.1,
            },
            repertoire: RepertoireWeights::default(),
            blend: BlendWeights::default(),
        }
    }

    /// Checks the structural constraints described in the module docs.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a [`WeightError`].
    pub fn validate(&self) -> Result<(), WeightError> {
        for (name, value) in self.coefficients() {
            if !value.is_finite() {
                return Err(WeightError::NonFiniteCoefficient { name });
            }
        }

        let blend_sum = self.blend.move_level + self.blend.game_level;
        if (blend_sum - 1.0).abs() > 1e-4 {
            return Err(WeightError::BlendNotUnit { sum: blend_sum });
        }
        if self.blend.move_level < 0.0 || self.blend.game_level < self.blend.move_level {
            return Err(WeightError::GameLevelNotDominant {
                move_level: self.blend.move_level,
                game_level: self.blend.game_level,
            });
        }

        let r = &self.repertoire;
        if r.novelty_diversity_bonus <= 0.0 || r.staleness_diversity_penalty <= 0.0 {
            return Err(WeightError::DiversityPolarity {
                novelty_bonus: r.novelty_diversity_bonus,
                staleness_penalty: r.staleness_diversity_penalty,
            });
        }
        if r.novelty_repetition_penalty <= 0.0 || r.staleness_repetition_bonus <= 0.0 {
            return Err(WeightError::RepetitionPolarity {
                novelty_penalty: r.novelty_repetition_penalty,
                staleness_bonus: r.staleness_repetition_bonus,
            });
        }
        if r.staleness_repetition_bonus <= r.novelty_repetition_penalty {
            return Err(WeightError::RepetitionNotDominant {
                novelty_penalty: r.novelty_repetition_penalty,
                staleness_bonus: r.staleness_repetition_bonus,
            });
        }

        Ok(())
    }

    fn coefficients(&self) -> Vec<(&'static str, f32)> {
        let mut out = vec![
            ("tactical.base", self.tactical.base),
            ("tactical.blunder_count_weight", self.tactical.blunder_count_weight),
            ("tactical.mistake_count_weight", self.tactical.mistake_count_weight),
            ("tactical.loss_penalty_cap", self.tactical.loss_penalty_cap),
            ("tactical.loss_divisor", self.tactical.loss_divisor),
            ("tactical.best_bonus", self.tactical.best_bonus),
            ("tactical.brilliant_bonus", self.tactical.brilliant_bonus),
            ("repertoire.novelty_base", self.repertoire.novelty_base),
            ("repertoire.novelty_diversity_bonus", self.repertoire.novelty_diversity_bonus),
            (
                "repertoire.novelty_repetition_penalty",
                self.repertoire.novelty_repetition_penalty,
            ),
            ("repertoire.staleness_base", self.repertoire.staleness_base),
            (
                "repertoire.staleness_repetition_bonus",
                self.repertoire.staleness_repetition_bonus,
            ),
            (
                "repertoire.staleness_diversity_penalty",
                self.repertoire.staleness_diversity_penalty,
            ),
            ("blend.move_level", self.blend.move_level),
            ("blend.game_level", self.blend.game_level),
        ];
        for (trait_name, w) in [
            ("positional", &self.positional),
            ("aggressive", &self.aggressive),
            ("patient", &self.patient),
            ("novelty_move", &self.novelty_move),
            ("staleness_move", &self.staleness_move),
        ] {
            // One aggregate finiteness probe per trait keeps the list short;
            // any NaN/inf member poisons the sum.
            let probe = w.base
                + w.best_weight
                + w.brilliant_weight
                + w.blunder_weight
                + w.mistake_weight
                + w.loss_weight;
            out.push((trait_name, probe));
        }
        out
    }
}

/// A structurally invalid calibration. Fatal at profiler construction.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
pub enum WeightError {
    #[display("coefficient '{name}' is not finite")]
    NonFiniteCoefficient { name: &'static str },
    #[display("blend weights must sum to 1.0, got {sum}")]
    BlendNotUnit { sum: f32 },
    #[display(
        "game-level blend weight must dominate (move_level={move_level}, game_level={game_level})"
    )]
    GameLevelNotDominant { move_level: f32, game_level: f32 },
    #[display(
        "diversity must push novelty up and staleness down \
         (novelty_bonus={novelty_bonus}, staleness_penalty={staleness_penalty})"
    )]
    DiversityPolarity {
        novelty_bonus: f32,
        staleness_penalty: f32,
    },
    #[display(
        "repetition must push novelty down and staleness up \
         (novelty_penalty={novelty_penalty}, staleness_bonus={staleness_bonus})"
    )]
    RepetitionPolarity {
        novelty_penalty: f32,
        staleness_bonus: f32,
    },
    #[display(
        "repetition must matter more to staleness than to novelty \
         (novelty_penalty={novelty_penalty}, staleness_bonus={staleness_bonus})"
    )]
    RepetitionNotDominant {
        novelty_penalty: f32,
        staleness_bonus: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calibrated_weights_are_valid() {
        assert!(AggregationWeights::calibrated().validate().is_ok());
    }

    #[test]
    fn test_blend_must_sum_to_one() {
        let mut weights = AggregationWeights::calibrated();
        weights.blend = BlendWeights {
            move_level: 0.3,
            game_level: 0.6,
        };
        assert!(matches!(
            weights.validate(),
            Err(WeightError::BlendNotUnit { .. })
        ));
    }

    #[test]
    fn test_move_level_must_not_dominate() {
        let mut weights = AggregationWeights::calibrated();
        weights.blend = BlendWeights {
            move_level: 0.6,
            game_level: 0.4,
        };
        assert!(matches!(
            weights.validate(),
            Err(WeightError::GameLevelNotDominant { .. })
        ));
    }

    #[test]
    fn test_repetition_dominance_enforced() {
        let mut weights = AggregationWeights::calibrated();
        weights.repertoire.staleness_repetition_bonus =
            weights.repertoire.novelty_repetition_penalty;
        assert!(matches!(
            weights.validate(),
            Err(WeightError::RepetitionNotDominant { .. })
        ));
    }

    #[test]
    fn test_nan_coefficient_rejected() {
        let mut weights = AggregationWeights::calibrated();
        weights.patient.loss_weight = f32::NAN;
        assert!(matches!(
            weights.validate(),
            Err(WeightError::NonFiniteCoefficient { .. })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let weights = AggregationWeights::calibrated();
        let json = serde_json::to_string(&weights).unwrap();
        let back: AggregationWeights = serde_json::from_str(&json).unwrap();
        assert_eq!(weights, back);
    }
}
