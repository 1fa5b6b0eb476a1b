//! Descriptive statistics for per-move loss distributions.

/// Summary statistics for a dataset of `f32` values.
///
/// Used to summarize a player's centipawn-loss distribution in reports:
/// the mean feeds the scoring formulas, while median and standard
/// deviation give consumers a sense of how skewed the distribution is
/// (loss distributions are typically right-skewed - many small losses,
/// a few large blunders).
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// Smallest value in the dataset.
    pub min: f32,
    /// Largest value in the dataset.
    pub max: f32,
    /// Arithmetic mean.
    pub mean: f32,
    /// Median value.
    pub median: f32,
    /// Population standard deviation.
    pub std_dev: f32,
    /// Number of values summarized.
    pub count: usize,
}

impl DescriptiveStats {
    /// Computes statistics from unsorted values, sorting internally.
    ///
    /// Returns `None` for an empty dataset.
    ///
    /// # Examples
    ///
    /// ```
    /// use caissa_stats::descriptive::DescriptiveStats;
    ///
    /// let losses = [40.0, 5.0, 10.0, 20.0, 0.0];
    /// let stats = DescriptiveStats::new(losses).unwrap();
    /// assert_eq!(stats.min, 0.0);
    /// assert_eq!(stats.max, 40.0);
    /// assert_eq!(stats.mean, 15.0);
    /// assert_eq!(stats.median, 10.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f32::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes statistics from values already sorted in ascending order.
    ///
    /// Returns `None` for an empty dataset.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f32]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f32;
        let mean = sorted_values.iter().copied().sum::<f32>() / n;
        let median = sorted_values[count / 2];
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f32>()
            / n;

        Some(Self {
            min,
            max,
            mean,
            median,
            std_dev: variance.sqrt(),
            count,
        })
    }
}
