//! Session driver: connects dice, the turn engine, and an event loop.

pub mod game;

pub use game::GameSession;
