//! Classic Pong - two-player paddle game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (serve, paddles, ball, scoring)
//! - `renderer`: WebGPU rendering pipeline
//! - `app`: Window and per-frame loop
//! - `clock`: Wall-clock frame deltas
//! - `input`: Keyboard state sampling

pub mod app;
pub mod clock;
pub mod input;
pub mod renderer;
pub mod sim;

pub use sim::{GameState, tick};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Window dimensions in physical pixels
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;
    pub const WINDOW_TITLE: &str = "PONG";

    /// Field reference resolution. All pixel-to-field conversions use these,
    /// even after the window is resized.
    pub const FIELD_WIDTH: f32 = WINDOW_WIDTH as f32;
    pub const FIELD_HEIGHT: f32 = WINDOW_HEIGHT as f32;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 8.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Paddle speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 600.0;

    /// Initial paddle placement in screen pixels
    pub const LEFT_PADDLE_X: f32 = 32.0;
    pub const RIGHT_PADDLE_X: f32 = 768.0;
    pub const PADDLE_START_Y: f32 = 300.0;

    /// Ball defaults
    pub const BALL_WIDTH: f32 = 8.0;
    pub const BALL_HEIGHT: f32 = 8.0;
    /// Ball speed (pixels/s)
    pub const BALL_SPEED: f32 = 800.0;

    /// Seconds between a point (or restart) and the next serve
    pub const SERVE_DELAY: f32 = 3.0;
}

/// Convert a screen-pixel coordinate to field space ([-1, 1] on both axes,
/// origin at center).
#[inline]
pub fn screen_to_field(x: f32, y: f32) -> Vec2 {
    Vec2::new(
        -1.0 + x * 2.0 / consts::FIELD_WIDTH,
        -1.0 + y * 2.0 / consts::FIELD_HEIGHT,
    )
}
