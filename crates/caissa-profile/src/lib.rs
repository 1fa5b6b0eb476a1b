//! Scoring engine computing behavioral personality profiles for chess
//! players from their analyzed game history.
//!
//! Two pipelines feed a final blend:
//!
//! 1. **Move-Level Aggregation** ([`move_aggregator`]) - reduces per-move
//!    engine annotations (blunders, mistakes, best moves, brilliancies,
//!    centipawn loss) to one scalar per trait.
//!
//! 2. **Repertoire Analysis** ([`repertoire`]) - reduces per-game opening
//!    labels to a diversity measure and a repetition measure, then to
//!    game-level novelty/staleness scores.
//!
//! 3. **Trait Blending** ([`profiler`]) - combines the two under fixed
//!    weights and clamps every trait into `[0, 100]`.
//!
//! ```text
//! MoveRecords ──▶ Move-Level Aggregation ──▶ 6 move-level scores ──┐
//!                                                                  ├──▶ Trait Blending ──▶ TraitProfile
//! GameOpeningRecords ──▶ Repertoire Analysis ──▶ novelty/staleness ┘
//! ```
//!
//! Data flows one way; there are no feedback loops and no process-wide
//! state. Every invocation is a pure function of the supplied records and
//! the injected [`weights::AggregationWeights`], which makes scoring
//! deterministic, order-independent, and trivially parallel across
//! players ([`batch`]).
//!
//! # Design Principles
//!
//! ## Injected Calibration
//!
//! All coefficients live in one immutable [`weights::AggregationWeights`]
//! value validated at profiler construction. Calibration experiments swap
//! JSON weight files; nothing re-edits module state.
//!
//! ## Natural Opposition, Not Enforced Complementarity
//!
//! Novelty and staleness read the same repertoire inputs with opposite
//! polarity but are calibrated independently. The validation rules in
//! [`weights`] keep repetition mattering more to staleness than to
//! novelty, which prevents the two scores from collapsing into mirror
//! images that always sum to ~100.
//!
//! ## Recover Shape, Reject Invalidity
//!
//! Empty collections recover locally to the neutral profile (50.0 per
//! trait, confidence 0.0). Malformed records are an upstream bug and are
//! rejected at the model boundary, never coerced mid-formula.
//!
//! # Example
//!
//! ```
//! use caissa_model::{GameOpeningRecord, GameOutcome, MoveRecord, PlayerColor};
//! use caissa_profile::{profiler::PersonalityProfiler, weights::AggregationWeights};
//!
//! let profiler = PersonalityProfiler::new(AggregationWeights::calibrated())?;
//!
//! let moves = vec![MoveRecord::new(false, false, true, 3.0)?; 20];
//! let openings = vec![
//!     GameOpeningRecord::new("Sicilian Defense", PlayerColor::White, GameOutcome::Win),
//!     GameOpeningRecord::new("English Opening", PlayerColor::Black, GameOutcome::Draw),
//! ];
//!
//! let profile = profiler.score(&moves, &openings);
//! assert!(profile.is_bounded());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod batch;
pub mod move_aggregator;
pub mod profiler;
pub mod repertoire;
pub mod weights;
