//! Score scaling helpers shared by the trait formulas.

/// Reference repertoire size that earns full diversity credit.
pub const FULL_DIVERSITY_OPENINGS: f32 = 100.0;

/// Sub-linear diversity scaling: `min(100, sqrt(n) / sqrt(100) * 100)`.
///
/// Square-root scaling makes diversity gains taper as the repertoire
/// grows: going from 1 to 4 distinct openings doubles the score, while
/// going from 81 to 100 adds only ten points. A player needs
/// [`FULL_DIVERSITY_OPENINGS`] distinct openings for full credit, and
/// anything beyond that saturates at 100.
///
/// # Examples
///
/// ```
/// use caissa_stats::scaling::diversity_score;
///
/// assert_eq!(diversity_score(0), 0.0);
/// assert_eq!(diversity_score(1), 10.0);
/// assert_eq!(diversity_score(4), 20.0);
/// assert_eq!(diversity_score(100), 100.0);
/// assert_eq!(diversity_score(400), 100.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn diversity_score(unique_count: usize) -> f32 {
    let scaled = (unique_count as f32).sqrt() / FULL_DIVERSITY_OPENINGS.sqrt() * 100.0;
    scaled.min(100.0)
}

/// Clamps a raw trait score into the reportable `[0, 100]` range.
///
/// # Examples
///
/// ```
/// use caissa_stats::scaling::clamp_score;
///
/// assert_eq!(clamp_score(-3.0), 0.0);
/// assert_eq!(clamp_score(42.5), 42.5);
/// assert_eq!(clamp_score(140.0), 100.0);
/// ```
#[must_use]
pub fn clamp_score(raw: f32) -> f32 {
    raw.clamp(0.0, 100.0)
}

/// Ratio of `count` to `total`, or zero when `total` is zero.
///
/// Used for per-move shares (blunder rate, best-move rate). The zero
/// fallback keeps the caller's formulas NaN-free; empty collections are
/// handled before the formulas run, so the fallback is never load-bearing
/// for scoring.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn ratio(count: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        count as f32 / total as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diversity_is_monotonic() {
        let mut previous = -1.0;
        for unique in 0..200 {
            let score = diversity_score(unique);
            assert!(score >= previous, "not monotonic at {unique}");
            assert!((0.0..=100.0).contains(&score));
            previous = score;
        }
    }

    #[test]
    fn test_diversity_reference_points() {
        assert_eq!(diversity_score(25), 50.0);
        assert_eq!(diversity_score(81), 90.0);
    }

    #[test]
    fn test_ratio_zero_total() {
        assert_eq!(ratio(5, 0), 0.0);
        assert_eq!(ratio(1, 4), 0.25);
    }
}
