//! Fixed timestep Pong engine
//!
//! Advances the game deterministically each tick: paddle integration and
//! bound clamping, ball integration, wall and paddle bounces, goal scoring
//! and serve resets.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geometry::{Rect, overlaps};
use super::state::{GameState, PaddleMove};
use crate::config::{ConfigError, PongConfig};

/// Maximum deflection off a paddle face, radians.
const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
/// Speed multiplier applied on every paddle hit.
const BOUNCE_FACTOR: f32 = 1.1;
/// Maximum serve angle off horizontal, radians.
const MAX_SERVE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

/// The simulation engine.
///
/// Owns the seeded RNG and the last two committed snapshots; only the latest
/// snapshot is authoritative and it is published only after a tick completes.
pub struct PongLogic {
    config: PongConfig,
    rng: Pcg32,
    /// Serve template: the state every goal reset restarts from.
    initial: GameState,
    prev: GameState,
    current: GameState,
}

impl PongLogic {
    /// Validate the configuration and build the serve state: paddles at the
    /// configured offsets, vertically centered, ball served at a random angle.
    pub fn new(config: PongConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);

        let (width, height) = (config.window.x, config.window.y);
        let initial = GameState {
            paddle1_pos: Vec2::new(width * config.paddle_offset, height / 2.0),
            paddle2_pos: Vec2::new(width * (1.0 - config.paddle_offset), height / 2.0),
            paddle1_vel: Vec2::ZERO,
            paddle2_vel: Vec2::ZERO,
            ball_pos: config.ball_start,
            ball_vel: random_ball_velocity(&mut rng, config.ball_speed),
            player1_action: PaddleMove::Still,
            player2_action: PaddleMove::Still,
            player1_score: 0,
            player2_score: 0,
            time: 0.0,
            total_time: 0.0,
        };

        Ok(Self {
            prev: initial.clone(),
            current: initial.clone(),
            initial,
            config,
            rng,
        })
    }

    /// Last committed snapshot.
    pub fn state(&self) -> &GameState {
        &self.current
    }

    /// Snapshot committed by the tick before the current one.
    pub fn previous(&self) -> &GameState {
        &self.prev
    }

    pub fn config(&self) -> &PongConfig {
        &self.config
    }

    /// Advance one tick.
    ///
    /// Collision boxes are built from the post-integration, pre-clamp paddle
    /// positions and the pre-advance ball position; every collision test in
    /// the tick uses those boxes.
    pub fn update(&mut self, action1: PaddleMove, action2: PaddleMove) {
        let dt = self.config.dt;
        let mut state = self.current.clone();
        state.time += dt;
        state.total_time += dt;
        state.player1_action = action1;
        state.player2_action = action2;

        state.paddle1_vel = Vec2::new(0.0, self.config.paddle_speed) * action1.as_f32();
        state.paddle2_vel = Vec2::new(0.0, self.config.paddle_speed) * action2.as_f32();
        state.paddle1_pos += state.paddle1_vel * dt;
        state.paddle2_pos += state.paddle2_vel * dt;

        let paddle1_rect = Rect::new(state.paddle1_pos, self.config.paddle_shape);
        let paddle2_rect = Rect::new(state.paddle2_pos, self.config.paddle_shape);
        let ball_rect = Rect::new(state.ball_pos, self.config.ball_shape);

        let top = 0.0;
        let bottom = self.config.window.y;

        // Hard clamp to the vertical bounds: shift by exactly the overflow.
        let offset = paddle1_rect.min().y - top;
        if offset < 0.0 {
            state.paddle1_pos.y -= offset;
        }
        let offset = paddle2_rect.min().y - top;
        if offset < 0.0 {
            state.paddle2_pos.y -= offset;
        }
        let offset = bottom - paddle1_rect.max().y;
        if offset < 0.0 {
            state.paddle1_pos.y += offset;
        }
        let offset = bottom - paddle2_rect.max().y;
        if offset < 0.0 {
            state.paddle2_pos.y += offset;
        }

        state.ball_pos += state.ball_vel * dt;

        if state.ball_pos.y <= top || state.ball_pos.y >= bottom {
            self.bounce_ball_wall(&mut state);
        }

        if overlaps(&paddle1_rect, &ball_rect) {
            self.bounce_ball_paddle(1, &mut state);
        }
        if overlaps(&paddle2_rect, &ball_rect) {
            self.bounce_ball_paddle(2, &mut state);
        }

        if !(state.ball_vel.is_finite() && state.ball_pos.is_finite()) {
            log::error!(
                "non-finite ball state after tick: pos={:?} vel={:?}",
                state.ball_pos,
                state.ball_vel
            );
            panic!("simulation invariant violated: non-finite ball state");
        }

        self.prev = std::mem::replace(&mut self.current, state);

        if self.current.ball_pos.x < 0.0 {
            self.reset(2);
        }
        if self.current.ball_pos.x > self.config.window.x {
            self.reset(1);
        }
    }

    /// Score for `winner`, carry cumulative score and total time forward, and
    /// serve a fresh ball from the initial layout.
    pub fn reset(&mut self, winner: u8) {
        let mut state = self.initial.clone();
        state.player1_score = self.current.player1_score + u32::from(winner == 1);
        state.player2_score = self.current.player2_score + u32::from(winner == 2);
        state.total_time = self.current.total_time;
        state.ball_vel = random_ball_velocity(&mut self.rng, self.config.ball_speed);
        log::info!(
            "score: p1 {} | p2 {}",
            state.player1_score,
            state.player2_score
        );
        self.prev = std::mem::replace(&mut self.current, state);
    }

    /// Elastic top/bottom bounce: invert the vertical component, then advance
    /// the ball again by the inverted velocity within the same tick. The
    /// second advance compounds the offset when the ball is still out of
    /// bounds afterwards; pinned by a regression test.
    fn bounce_ball_wall(&self, state: &mut GameState) {
        state.ball_vel.y = -state.ball_vel.y;
        state.ball_pos += state.ball_vel * self.config.dt;
    }

    /// Angle-based paddle deflection.
    ///
    /// The strike point relative to the paddle center, as a fraction of the
    /// combined half heights, scales the maximum bounce angle. Speed is
    /// boosted per hit and each velocity component is capped afterwards.
    fn bounce_ball_paddle(&self, id: u8, state: &mut GameState) {
        let ball_speed = state.ball_vel.length();
        let paddle_y = if id == 1 {
            state.paddle1_pos.y
        } else {
            state.paddle2_pos.y
        };

        let half_extent = self.config.paddle_shape.y / 2.0 + self.config.ball_shape.y / 2.0;
        let relative_intersect = (state.ball_pos.y - paddle_y) / half_extent;
        let bounce_angle = relative_intersect * MAX_BOUNCE_ANGLE;

        let boosted = ball_speed * BOUNCE_FACTOR;
        state.ball_vel = Vec2::new(boosted * bounce_angle.cos(), boosted * bounce_angle.sin());
        // The right paddle sends the ball back leftward.
        if id == 2 {
            state.ball_vel.x = -state.ball_vel.x;
        }

        let cap = self.config.velocity_cap();
        state.ball_vel = state.ball_vel.clamp(Vec2::splat(-cap), Vec2::splat(cap));
        state.ball_pos += state.ball_vel * self.config.dt;
    }
}

/// Serve velocity: uniform angle within the maximum serve angle of
/// horizontal, left/right direction chosen uniformly, fixed magnitude.
fn random_ball_velocity(rng: &mut Pcg32, magnitude: f32) -> Vec2 {
    let angle = rng.random_range(-1.0..=1.0f32) * MAX_SERVE_ANGLE;
    let sign = if rng.random::<bool>() { 1.0 } else { -1.0 };
    Vec2::new(magnitude * sign * angle.cos(), magnitude * angle.sin())
}
