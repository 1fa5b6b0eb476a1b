//! Data model for the caissa personality profiling engine.
//!
//! This crate defines the strongly-typed records exchanged between the
//! upstream analysis collaborators and the scoring engine:
//!
//! - [`MoveRecord`] - one played move with engine-derived annotations
//!   (blunder/mistake/best flags and centipawn loss)
//! - [`GameOpeningRecord`] - one played game's normalized opening label,
//!   player color, and outcome
//! - [`TraitProfile`] - the six trait scores produced by the engine,
//!   plus sample counts and a confidence indicator
//!
//! # Boundary Validation
//!
//! Upstream sources deliver loosely-shaped data (JSON rows produced by an
//! engine-analysis worker). All shape problems are rejected here, at the
//! model boundary, so the scoring formulas can assume validated input:
//!
//! - [`MoveRecord::new`] rejects non-finite centipawn loss
//!   ([`RecordError::NonFiniteCentipawnLoss`])
//! - [`OpeningLabel::new`] maps empty or whitespace-only labels to the
//!   `"Unknown"` sentinel, which then participates in repertoire counts
//!   like any other label
//!
//! Records are immutable once constructed; the scoring engine consumes
//! them read-only.
//!
//! # Serialization
//!
//! All types implement `serde` traits. A move record file is a JSON array:
//!
//! ```json
//! [
//!   { "is_blunder": false, "is_mistake": false, "is_best": true, "centipawn_loss": 2.0 },
//!   { "is_blunder": true, "is_mistake": false, "is_best": false, "centipawn_loss": 312.0 }
//! ]
//! ```

pub use self::{
    move_record::{MoveRecord, RecordError},
    opening::{GameOpeningRecord, OpeningLabel, PlayerColor},
    outcome::GameOutcome,
    profile::TraitProfile,
};

mod move_record;
mod opening;
mod outcome;
mod profile;
