//! Game rules.
//!
//! `TurnEngine` owns both token positions and applies dice values to them:
//! - Counting steps and clamping at the goal
//! - Single-hop snake and ladder resolution
//! - Turn alternation and win detection
//!
//! It never rolls dice or draws anything. Callers supply the values and
//! read back `Snapshot`s.

pub mod engine;

pub use engine::{MoveOutcome, TurnEngine};
