//! # fol-search
//!
//! The proof search driver that sits on top of the inference kernel: given
//! a goal and a knowledge base seeded with axioms, repeatedly applies
//! direct inference, matching against proven sentences, backward chaining,
//! and forward chaining until the goal is proven, the round budget is
//! exhausted, or the wall-clock timeout elapses.

mod complexity;
mod driver;
mod instantiate;

pub use complexity::{logic_complexity, numeric_complexity};
pub use driver::{
    ProofDriver, ProofOutcome, DEFAULT_MAX_ROUNDS, DEFAULT_TIMEOUT_SECS,
    MAX_GUESSES_PER_IMPLICATION, MAX_NEW_GUESSES_PER_ROUND, MAX_TOTAL_GUESSES,
};
pub use instantiate::instantiate;
