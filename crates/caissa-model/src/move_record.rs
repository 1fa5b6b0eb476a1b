//! Per-move analysis records produced by the engine-analysis collaborator.

use serde::{Deserialize, Serialize};

/// Centipawn-loss threshold below which a move counts as brilliant.
///
/// A large *negative* loss means the played move outperformed the engine's
/// naive best-line expectation. The threshold is fixed here because the
/// quality flags on [`MoveRecord`] are computed once, upstream, with
/// matching thresholds; re-deriving them downstream would desynchronize
/// the two.
pub const BRILLIANT_THRESHOLD: f32 = -100.0;

/// One played move with engine-derived quality annotations.
///
/// The boolean flags are derived upstream from fixed centipawn-loss
/// thresholds; a move is at most one of best/mistake/blunder, or none of
/// them (a good move or inaccuracy). `centipawn_loss` is always finite -
/// [`MoveRecord::new`] enforces this at the boundary.
///
/// # Examples
///
/// ```
/// use caissa_model::MoveRecord;
///
/// let quiet = MoveRecord::new(false, false, false, 12.0).unwrap();
/// assert!(!quiet.is_brilliant());
///
/// let spark = MoveRecord::new(false, false, true, -140.0).unwrap();
/// assert!(spark.is_brilliant());
///
/// assert!(MoveRecord::new(false, false, false, f32::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct MoveRecord {
    /// Move lost enough evaluation to cross the blunder threshold.
    pub is_blunder: bool,
    /// Move crossed the (milder) mistake threshold.
    pub is_mistake: bool,
    /// Move matched the engine's best line.
    pub is_best: bool,
    /// Evaluation delta versus the engine's best line, in centipawns.
    /// Negative values mean the move beat the engine's expectation.
    pub centipawn_loss: f32,
}

impl MoveRecord {
    /// Creates a validated move record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::NonFiniteCentipawnLoss`] if `centipawn_loss`
    /// is NaN or infinite. A non-finite loss indicates a bug in the
    /// upstream analysis worker, not a data condition to recover from.
    pub fn new(
        is_blunder: bool,
        is_mistake: bool,
        is_best: bool,
        centipawn_loss: f32,
    ) -> Result<Self, RecordError> {
        if !centipawn_loss.is_finite() {
            return Err(RecordError::NonFiniteCentipawnLoss { centipawn_loss });
        }
        Ok(Self {
            is_blunder,
            is_mistake,
            is_best,
            centipawn_loss,
        })
    }

    /// Returns `true` if this move outperformed the engine's expectation
    /// by more than [`BRILLIANT_THRESHOLD`] centipawns.
    #[must_use]
    pub fn is_brilliant(&self) -> bool {
        self.centipawn_loss < BRILLIANT_THRESHOLD
    }

    /// Re-validates a record that was deserialized without going through
    /// [`MoveRecord::new`] (serde accepts NaN from some producers).
    ///
    /// # Errors
    ///
    /// Same as [`MoveRecord::new`].
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.centipawn_loss.is_finite() {
            Ok(())
        } else {
            Err(RecordError::NonFiniteCentipawnLoss {
                centipawn_loss: self.centipawn_loss,
            })
        }
    }
}

/// Boundary-validation failure for an upstream record.
#[derive(Debug, Clone, Copy, derive_more::Display, derive_more::Error)]
pub enum RecordError {
    /// `centipawn_loss` was NaN or infinite.
    #[display("centipawn loss must be finite, got {centipawn_loss}")]
    NonFiniteCentipawnLoss { centipawn_loss: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_nan_loss() {
        assert!(MoveRecord::new(false, false, false, f32::NAN).is_err());
        assert!(MoveRecord::new(false, false, false, f32::INFINITY).is_err());
        assert!(MoveRecord::new(false, false, false, f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_brilliant_threshold_is_strict() {
        let at_threshold = MoveRecord::new(false, false, false, -100.0).unwrap();
        assert!(!at_threshold.is_brilliant());

        let past_threshold = MoveRecord::new(false, false, false, -100.5).unwrap();
        assert!(past_threshold.is_brilliant());
    }

    #[test]
    fn test_validate_catches_deserialized_nan() {
        let record = MoveRecord {
            is_blunder: false,
            is_mistake: false,
            is_best: false,
            centipawn_loss: f32::NAN,
        };
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let record = MoveRecord::new(true, false, false, 250.0).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
