//! Game entity state.
//!
//! All positions live in field space: the visible play area spans [-1, 1] on
//! both axes with the origin at center. Sizes stay in pixels at the 800x600
//! reference resolution; conversion to field units happens once, at
//! placement, via [`screen_to_field`](crate::screen_to_field).

use glam::Vec2;

use crate::consts;
use crate::screen_to_field;

/// Which player owns a paddle or a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSide {
    Left,
    Right,
}

/// A paddle. `x` is fixed for the whole session; only `y` moves, clamped so
/// the paddle stays fully inside the field.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub side: PlayerSide,
    /// Center position in field space
    pub pos: Vec2,
    /// Size in pixels
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: PlayerSide) -> Self {
        let x = match side {
            PlayerSide::Left => consts::LEFT_PADDLE_X,
            PlayerSide::Right => consts::RIGHT_PADDLE_X,
        };
        Self {
            side,
            pos: screen_to_field(x, consts::PADDLE_START_Y),
            size: Vec2::new(consts::PADDLE_WIDTH, consts::PADDLE_HEIGHT),
        }
    }

    /// Keep the paddle fully inside the field vertically. A span of `s`
    /// pixels covers `s * 2 / dim` field units, so `size.y / FIELD_HEIGHT`
    /// is exactly the paddle's half-extent.
    pub fn clamp_to_field(&mut self) {
        let bound = 1.0 - self.size.y / consts::FIELD_HEIGHT;
        self.pos.y = self.pos.y.clamp(-bound, bound);
    }
}

/// The ball. Held at center with zero direction until served; while served,
/// `dir` components are only ever flipped or re-angled by collisions.
#[derive(Debug, Clone)]
pub struct Ball {
    /// Center position in field space
    pub pos: Vec2,
    pub dir: Vec2,
    /// Size in pixels
    pub size: Vec2,
    pub served: bool,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            dir: Vec2::ZERO,
            size: Vec2::new(consts::BALL_WIDTH, consts::BALL_HEIGHT),
            served: false,
        }
    }

    /// Back to center, held, waiting on the serve timer.
    pub fn reset(&mut self) {
        self.pos = Vec2::ZERO;
        self.dir = Vec2::ZERO;
        self.served = false;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Points per player. Reset only by an explicit restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: PlayerSide) {
        match side {
            PlayerSide::Left => self.left += 1,
            PlayerSide::Right => self.right += 1,
        }
    }
}

/// Axis-aligned tolerance for ball/paddle hits, precomputed from the paddle
/// and ball pixel sizes. Constant for the session.
#[derive(Debug, Clone, Copy)]
pub struct HitEnvelope {
    pub width: f32,
    pub height: f32,
}

impl HitEnvelope {
    pub fn new(paddle_size: Vec2, ball_size: Vec2) -> Self {
        Self {
            width: (paddle_size.x + ball_size.x) / consts::FIELD_WIDTH,
            height: (paddle_size.y + ball_size.y) / consts::FIELD_HEIGHT,
        }
    }
}

/// Everything the simulation mutates frame to frame. A single value owned by
/// the frame loop and handed to [`tick`](crate::sim::tick) by `&mut`.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Left paddle at index 0, right at index 1
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    pub score: Score,
    /// Seconds since the last point or restart
    pub serve_elapsed: f32,
    pub hit_envelope: HitEnvelope,
}

impl GameState {
    pub fn new() -> Self {
        let ball = Ball::new();
        let paddles = [Paddle::new(PlayerSide::Left), Paddle::new(PlayerSide::Right)];
        let hit_envelope = HitEnvelope::new(paddles[0].size, ball.size);
        Self {
            paddles,
            ball,
            score: Score::default(),
            serve_elapsed: 0.0,
            hit_envelope,
        }
    }

    /// Back to the initial layout: paddles at their start offsets, ball held
    /// at center, scores and serve timer zeroed.
    pub fn reset(&mut self) {
        self.paddles = [Paddle::new(PlayerSide::Left), Paddle::new(PlayerSide::Right)];
        self.ball.reset();
        self.score = Score::default();
        self.serve_elapsed = 0.0;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_initial_paddle_placement() {
        let state = GameState::new();
        assert!((state.paddles[0].pos.x + 0.92).abs() < EPS);
        assert!(state.paddles[0].pos.y.abs() < EPS);
        assert!((state.paddles[1].pos.x - 0.92).abs() < EPS);
        assert!(state.paddles[1].pos.y.abs() < EPS);
        assert_eq!(state.paddles[0].side, PlayerSide::Left);
        assert_eq!(state.paddles[1].side, PlayerSide::Right);
    }

    #[test]
    fn test_initial_placement_satisfies_clamp() {
        let state = GameState::new();
        let bound = 1.0 - consts::PADDLE_HEIGHT / consts::FIELD_HEIGHT;
        for paddle in &state.paddles {
            assert!(paddle.pos.y >= -bound && paddle.pos.y <= bound);
        }
    }

    #[test]
    fn test_hit_envelope_from_sizes() {
        let state = GameState::new();
        assert!((state.hit_envelope.width - 16.0 / 800.0).abs() < EPS);
        assert!((state.hit_envelope.height - 88.0 / 600.0).abs() < EPS);
    }

    #[test]
    fn test_ball_starts_held_at_center() {
        let ball = Ball::new();
        assert_eq!(ball.pos, Vec2::ZERO);
        assert_eq!(ball.dir, Vec2::ZERO);
        assert!(!ball.served);
    }

    #[test]
    fn test_clamp_to_field_bounds() {
        let mut paddle = Paddle::new(PlayerSide::Left);
        let bound = 1.0 - consts::PADDLE_HEIGHT / consts::FIELD_HEIGHT;

        paddle.pos.y = 2.0;
        paddle.clamp_to_field();
        assert!((paddle.pos.y - bound).abs() < EPS);

        paddle.pos.y = -2.0;
        paddle.clamp_to_field();
        assert!((paddle.pos.y + bound).abs() < EPS);
    }

    #[test]
    fn test_reset_restores_initial_layout() {
        let mut state = GameState::new();
        state.paddles[0].pos.y = 0.5;
        state.paddles[1].pos.y = -0.5;
        state.ball.pos = Vec2::new(0.4, -0.2);
        state.ball.dir = Vec2::new(1.0, 1.0);
        state.ball.served = true;
        state.score = Score { left: 3, right: 5 };
        state.serve_elapsed = 1.7;

        state.reset();

        let initial = GameState::new();
        assert_eq!(state.paddles[0].pos, initial.paddles[0].pos);
        assert_eq!(state.paddles[1].pos, initial.paddles[1].pos);
        assert_eq!(state.ball.pos, Vec2::ZERO);
        assert_eq!(state.ball.dir, Vec2::ZERO);
        assert!(!state.ball.served);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.serve_elapsed, 0.0);
    }
}
