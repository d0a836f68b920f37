//! Per-frame simulation step.
//!
//! [`tick`] advances the whole game by one wall-clock delta: serve
//! sequencing, paddle movement, clamping, then ball flight with scoring,
//! wall reflection and paddle rebound. Phase order is fixed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts;
use crate::sim::state::{GameState, PlayerSide};

/// Level-triggered input flags sampled once per frame. Holding a key keeps
/// its flag set, so movement continues frame after frame without debouncing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    pub restart: bool,
    /// Terminal signal. Carried to the frame loop, never consumed here.
    pub quit: bool,
}

/// Source of serve directions, the only randomness in the game. Production
/// uses [`ServeRng`]; tests script it.
pub trait DirectionSource {
    /// Horizontal serve component: -1.0 or +1.0.
    fn horizontal(&mut self) -> f32;
    /// Vertical serve component: -1.0, 0.0 or +1.0.
    fn vertical(&mut self) -> f32;
}

/// Seeded serve direction source over a PCG32 stream.
#[derive(Debug, Clone)]
pub struct ServeRng(Pcg32);

impl ServeRng {
    pub fn new(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }
}

impl DirectionSource for ServeRng {
    fn horizontal(&mut self) -> f32 {
        if self.0.random_bool(0.5) { 1.0 } else { -1.0 }
    }

    fn vertical(&mut self) -> f32 {
        self.0.random_range(-1..=1) as f32
    }
}

/// Advance the game state by one frame.
///
/// A `dt` of zero advances nothing but is a valid frame. `input.quit` is
/// ignored here; the frame loop reads it after the frame completes.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, serve: &mut impl DirectionSource) {
    // Serve sequencing. The timer advances every frame; once it expires the
    // ball launches with a coarse random angle, horizontal drawn first. The
    // fresh serve integrates this same frame.
    state.serve_elapsed += dt;
    if state.serve_elapsed >= consts::SERVE_DELAY && !state.ball.served {
        let dx = serve.horizontal();
        let dy = serve.vertical();
        state.ball.dir = Vec2::new(dx, dy);
        state.ball.served = true;
        log::info!("Serve: direction ({}, {})", dx, dy);
    }

    // Paddle movement. Up and down are independent and additive, so opposed
    // keys cancel out.
    let step = consts::PADDLE_SPEED * dt / consts::FIELD_HEIGHT;
    if input.left_up {
        state.paddles[0].pos.y += step;
    }
    if input.left_down {
        state.paddles[0].pos.y -= step;
    }
    if input.right_up {
        state.paddles[1].pos.y += step;
    }
    if input.right_down {
        state.paddles[1].pos.y -= step;
    }

    if input.restart {
        state.reset();
    }

    for paddle in &mut state.paddles {
        paddle.clamp_to_field();
    }

    if !state.ball.served {
        return;
    }

    // Ball flight. Direction components act as a direction only; dividing by
    // the magnitude keeps diagonal and straight serves at equal speed.
    let dir = state.ball.dir;
    let hyp = (dir.x * dir.x + dir.y * dir.y).sqrt();
    state.ball.pos.x += dir.x * consts::BALL_SPEED * dt / hyp / consts::FIELD_WIDTH;
    state.ball.pos.y += dir.y * consts::BALL_SPEED * dt / hyp / consts::FIELD_HEIGHT;

    // Scoring. The exit zones sit one ball half-extent outside the field. A
    // ball traveling right got past the right player, so the point goes to
    // the left player, and vice versa.
    let score_zone = 1.0 + consts::BALL_WIDTH / consts::FIELD_WIDTH;
    if state.ball.pos.x >= score_zone || state.ball.pos.x <= -score_zone {
        let scorer = if state.ball.dir.x > 0.0 {
            PlayerSide::Left
        } else {
            PlayerSide::Right
        };
        state.score.award(scorer);
        log::info!(
            "Point to {:?} - score {} : {}",
            scorer,
            state.score.left,
            state.score.right
        );
        state.ball.reset();
        state.serve_elapsed = 0.0;
    }

    // Top/bottom reflection. Requires motion into the wall, so a ball still
    // inside the zone after a flip is not flipped back.
    let reflect_zone = 1.0 - consts::BALL_HEIGHT / consts::FIELD_HEIGHT;
    if (state.ball.pos.y >= reflect_zone && state.ball.dir.y > 0.0)
        || (state.ball.pos.y <= -reflect_zone && state.ball.dir.y <= 0.0)
    {
        state.ball.dir.y *= -1.0;
    }

    // Paddle rebound. Envelope overlap plus motion toward the paddle. The
    // outgoing vertical angle is the strike offset, so a center hit returns
    // flat and an edge hit steep; the incoming angle is discarded. Left is
    // checked first and at most one rebound applies per frame.
    let envelope = state.hit_envelope;
    for paddle in &state.paddles {
        let toward = match paddle.side {
            PlayerSide::Left => state.ball.dir.x < 0.0,
            PlayerSide::Right => state.ball.dir.x > 0.0,
        };
        if toward
            && (state.ball.pos.x - paddle.pos.x).abs() <= envelope.width
            && (state.ball.pos.y - paddle.pos.y).abs() <= envelope.height
        {
            state.ball.dir.x *= -1.0;
            state.ball.dir.y = (state.ball.pos.y - paddle.pos.y) / envelope.height;
            break;
        }
    }
}
