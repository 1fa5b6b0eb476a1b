//! Per-game opening metadata supplied by the opening-normalization collaborator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::GameOutcome;

/// Sentinel label for games whose opening could not be resolved.
///
/// Unresolvable openings are bucketed here rather than dropped, so the
/// repertoire denominator stays equal to the number of games played.
/// The sentinel participates in diversity/repetition counts like any
/// other label.
pub const UNKNOWN_OPENING: &str = "Unknown";

/// A normalized opening name or family code.
///
/// Construction maps empty or whitespace-only strings to
/// [`UNKNOWN_OPENING`], so a label is never empty once inside the model.
/// Normalization of raw opening names into families (collapsing ECO-code
/// variants) happens upstream; this type only guarantees non-emptiness.
///
/// # Examples
///
/// ```
/// use caissa_model::OpeningLabel;
///
/// let sicilian = OpeningLabel::new("Sicilian Defense");
/// assert_eq!(sicilian.as_str(), "Sicilian Defense");
///
/// let unknown = OpeningLabel::new("   ");
/// assert_eq!(unknown.as_str(), "Unknown");
/// assert!(unknown.is_unknown());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(from = "String")]
pub struct OpeningLabel(String);

impl OpeningLabel {
    /// Creates a label, bucketing empty/whitespace input into the
    /// `"Unknown"` sentinel.
    #[must_use]
    pub fn new(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            Self(UNKNOWN_OPENING.to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the `"Unknown"` sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_OPENING
    }
}

impl From<String> for OpeningLabel {
    fn from(label: String) -> Self {
        Self::new(&label)
    }
}

impl fmt::Display for OpeningLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which side the profiled player held in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    White,
    Black,
}

/// One played game's opening label plus color and outcome.
///
/// The scoring core only reads the label; color and outcome are carried
/// for the consumers that render repertoire breakdowns per side.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GameOpeningRecord {
    /// Normalized opening name or family code.
    pub opening: OpeningLabel,
    /// Side the profiled player held.
    pub color: PlayerColor,
    /// Game result from the profiled player's perspective.
    pub outcome: GameOutcome,
}

impl GameOpeningRecord {
    /// Creates a record from a raw label, bucketing unresolvable labels
    /// into the `"Unknown"` sentinel.
    #[must_use]
    pub fn new(opening: &str, color: PlayerColor, outcome: GameOutcome) -> Self {
        Self {
            opening: OpeningLabel::new(opening),
            color,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_label_becomes_unknown() {
        assert!(OpeningLabel::new("").is_unknown());
        assert!(OpeningLabel::new("  \t ").is_unknown());
        assert!(!OpeningLabel::new("Caro-Kann Defense").is_unknown());
    }

    #[test]
    fn test_label_is_trimmed() {
        let label = OpeningLabel::new("  King's Indian Defense ");
        assert_eq!(label.as_str(), "King's Indian Defense");
    }

    #[test]
    fn test_deserialized_empty_label_becomes_unknown() {
        let record: GameOpeningRecord = serde_json::from_str(
            r#"{ "opening": "", "color": "white", "outcome": "win" }"#,
        )
        .unwrap();
        assert!(record.opening.is_unknown());
    }
}
