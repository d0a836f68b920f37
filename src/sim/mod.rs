//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Wall-clock deltas enter as plain f32 arguments
//! - Randomness only through the injected serve direction source
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Ball, GameState, HitEnvelope, Paddle, PlayerSide, Score};
pub use tick::{DirectionSource, ServeRng, TickInput, tick};
