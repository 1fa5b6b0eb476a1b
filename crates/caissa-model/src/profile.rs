//! The six-trait personality profile produced by the scoring engine.

use serde::{Deserialize, Serialize};

/// Neutral score reported when there is not enough data to say anything.
pub const NEUTRAL_SCORE: f32 = 50.0;

/// A player's behavioral profile: six trait scores in `[0, 100]`.
///
/// Produced fresh on every scoring run; the engine keeps no state between
/// runs, so two runs over the same records yield identical profiles.
///
/// `confidence` is in `[0, 1]` and grows with the amount of history
/// analyzed. A player with too little history gets the neutral profile
/// (every trait [`NEUTRAL_SCORE`], confidence 0.0) rather than an error -
/// absence of signal is distinct from failure.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TraitProfile {
    /// Error avoidance and peak-move finding from per-move engine deltas.
    pub tactical: f32,
    /// Steady low-loss play.
    pub positional: f32,
    /// Willingness to enter sharp, double-edged positions.
    pub aggressive: f32,
    /// Restraint: low error rate, few speculative strikes.
    pub patient: f32,
    /// Breadth of opening choice (game-level dominant).
    pub novelty: f32,
    /// Reliance on a narrow repertoire (game-level dominant).
    pub staleness: f32,
    /// Number of games the profile is based on.
    pub games_analyzed: usize,
    /// Number of analyzed moves the profile is based on.
    pub moves_analyzed: usize,
    /// `[0, 1]`; grows with sample size.
    pub confidence: f32,
}

impl TraitProfile {
    /// The neutral profile: every trait exactly [`NEUTRAL_SCORE`],
    /// confidence zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use caissa_model::TraitProfile;
    ///
    /// let profile = TraitProfile::neutral();
    /// assert_eq!(profile.tactical, 50.0);
    /// assert_eq!(profile.staleness, 50.0);
    /// assert_eq!(profile.confidence, 0.0);
    /// ```
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            tactical: NEUTRAL_SCORE,
            positional: NEUTRAL_SCORE,
            aggressive: NEUTRAL_SCORE,
            patient: NEUTRAL_SCORE,
            novelty: NEUTRAL_SCORE,
            staleness: NEUTRAL_SCORE,
            games_analyzed: 0,
            moves_analyzed: 0,
            confidence: 0.0,
        }
    }

    /// Returns the six `(name, score)` pairs in display order.
    #[must_use]
    pub fn traits(&self) -> [(&'static str, f32); 6] {
        [
            ("tactical", self.tactical),
            ("positional", self.positional),
            ("aggressive", self.aggressive),
            ("patient", self.patient),
            ("novelty", self.novelty),
            ("staleness", self.staleness),
        ]
    }

    /// Returns `true` if every trait score lies in `[0, 100]` and the
    /// confidence lies in `[0, 1]`.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.traits()
            .iter()
            .all(|(_, score)| (0.0..=100.0).contains(score))
            && (0.0..=1.0).contains(&self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_profile_is_all_fifty() {
        let profile = TraitProfile::neutral();
        for (name, score) in profile.traits() {
            assert_eq!(score, NEUTRAL_SCORE, "trait {name}");
        }
        assert_eq!(profile.confidence, 0.0);
        assert!(profile.is_bounded());
    }

    #[test]
    fn test_is_bounded_rejects_out_of_range() {
        let mut profile = TraitProfile::neutral();
        profile.novelty = 100.5;
        assert!(!profile.is_bounded());
    }
}
