//! Training environment adapter
//!
//! Wraps the engine behind a step/reset contract producing a fixed-order
//! normalized observation vector and a reward signal.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{ConfigError, PongConfig};
use crate::sim::{GameState, PaddleMove, PongLogic};

/// Observation length: paddle 1, paddle 2 and ball each contribute position
/// X/Y and velocity X/Y, followed by the two raw action fields.
pub const OBS_LEN: usize = 14;

/// The full normalized game-state feature vector consumed by policies.
pub type Observation = [f32; OBS_LEN];

/// Result of one environment step.
#[derive(Debug, Clone)]
pub struct Step {
    pub obs: Observation,
    /// Cumulative score differential (player 1 minus player 2), not a
    /// per-step delta; callers wanting a stepwise signal must difference
    /// consecutive rewards themselves.
    pub reward: f32,
    /// Always false; the adapter never terminates episodes. Callers bound
    /// episodes by step count or score.
    pub done: bool,
    /// Always false.
    pub truncated: bool,
}

pub struct PongEnv {
    logic: PongLogic,
    config: PongConfig,
    seed_rng: Pcg32,
    steps: u64,
}

impl PongEnv {
    pub fn new(config: PongConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut seed_rng = Pcg32::seed_from_u64(seed);
        let logic = PongLogic::new(config.clone(), seed_rng.random())?;
        Ok(Self {
            logic,
            config,
            seed_rng,
            steps: 0,
        })
    }

    /// Rebuild the engine with the same configuration and a fresh serve,
    /// returning the initial observation.
    ///
    /// Engine seeds are drawn from the env's own seeded RNG, so an entire
    /// training run replays deterministically from the env seed.
    pub fn reset(&mut self) -> Observation {
        let seed = self.seed_rng.random();
        self.logic = PongLogic::new(self.config.clone(), seed)
            .expect("configuration already validated at construction");
        self.steps = 0;
        self.observation()
    }

    /// Advance one tick with both players' actions.
    pub fn step(&mut self, action1: PaddleMove, action2: PaddleMove) -> Step {
        self.logic.update(action1, action2);
        self.steps += 1;
        Step {
            obs: self.observation(),
            reward: self.logic.state().score_diff() as f32,
            done: false,
            truncated: false,
        }
    }

    /// Current observation, fixed field order: for paddle 1, paddle 2 and
    /// the ball, X/width, Y/height, Vx/scale, Vy/scale with
    /// scale = ball speed x 100; then the two raw actions as -1/0/1.
    pub fn observation(&self) -> Observation {
        let state = self.logic.state();
        let w = self.config.window.x;
        let h = self.config.window.y;
        let vscale = self.config.velocity_cap();

        [
            state.paddle1_pos.x / w,
            state.paddle1_pos.y / h,
            state.paddle1_vel.x / vscale,
            state.paddle1_vel.y / vscale,
            state.paddle2_pos.x / w,
            state.paddle2_pos.y / h,
            state.paddle2_vel.x / vscale,
            state.paddle2_vel.y / vscale,
            state.ball_pos.x / w,
            state.ball_pos.y / h,
            state.ball_vel.x / vscale,
            state.ball_vel.y / vscale,
            state.player1_action.as_f32(),
            state.player2_action.as_f32(),
        ]
    }

    /// Latest committed engine snapshot.
    pub fn state(&self) -> &GameState {
        self.logic.state()
    }

    /// Steps taken since the last reset.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn config(&self) -> &PongConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn logic_mut(&mut self) -> &mut PongLogic {
        &mut self.logic
    }
}
