//! Guess inference over the unseen portion of the deck.
//!
//! This module is composed of:
//! - `ranking`: the per-round seed schedule and deterministic seeded deck
//!   rankings.
//! - `belief`: availability mask and probability vector indexed by
//!   deck-index, with hard elimination and refinement rules.
//! - `engine`: per-call orchestration emitting the round's guess set.

mod belief;
mod engine;
mod ranking;

pub use belief::{GuessBelief, NUM_ROUNDS, OPENING_HAND_SIZE, PAR_PROBABILITY};
pub use engine::infer_guesses;
pub use ranking::{CardRanking, SeedSchedule};
