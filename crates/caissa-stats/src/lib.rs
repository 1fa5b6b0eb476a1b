//! Statistical helpers for the caissa profiling engine.
//!
//! This crate provides the small, dependency-free building blocks the
//! scoring formulas share:
//!
//! - **Frequency analysis**: count categorical labels and extract the
//!   distinct-label count and the most-common share
//! - **Scaling**: sub-linear diversity scaling and score clamping
//! - **Descriptive statistics**: min/max/mean/median/std-dev summaries
//!   of per-move loss distributions
//!
//! # Modules
//!
//! - [`frequency`]: [`frequency::FrequencyTable`] over categorical labels
//! - [`scaling`]: [`scaling::diversity_score`] and [`scaling::clamp_score`]
//! - [`descriptive`]: [`descriptive::DescriptiveStats`] for `f32` datasets
//!
//! # Examples
//!
//! ## Repertoire frequency analysis
//!
//! ```
//! use caissa_stats::frequency::FrequencyTable;
//!
//! let table = FrequencyTable::from_labels(["e4", "d4", "e4", "e4"]);
//! assert_eq!(table.unique_count(), 2);
//! assert_eq!(table.most_common_share(), 0.75);
//! ```
//!
//! ## Diversity scaling
//!
//! ```
//! use caissa_stats::scaling::diversity_score;
//!
//! // 25 distinct openings earn half of the full diversity credit
//! assert_eq!(diversity_score(25), 50.0);
//! assert_eq!(diversity_score(100), 100.0);
//! ```

pub mod descriptive;
pub mod frequency;
pub mod scaling;
