//! Paddle controllers
//!
//! Policies consume the full observation vector and emit one discrete action
//! per step. Trained networks plug in through the same trait; the scripted
//! implementations here serve as training opponents and baselines.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::env::Observation;
use crate::sim::PaddleMove;

pub trait Policy: Send {
    fn name(&self) -> &'static str;
    /// Receive the latest observation; called after every step.
    fn observe(&mut self, obs: &Observation);
    /// Choose the action for the next tick.
    fn act(&mut self) -> PaddleMove;
}

/// Which paddle a policy controls; selects the observation fields it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Holds still; useful as a passive opponent and in tests.
pub struct StillPolicy;

impl Policy for StillPolicy {
    fn name(&self) -> &'static str {
        "still"
    }

    fn observe(&mut self, _obs: &Observation) {}

    fn act(&mut self) -> PaddleMove {
        PaddleMove::Still
    }
}

/// Uniformly random action each step.
pub struct RandomPolicy {
    rng: Pcg32,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn observe(&mut self, _obs: &Observation) {}

    fn act(&mut self) -> PaddleMove {
        PaddleMove::from_index(self.rng.random_range(0..3))
    }
}

/// Tracks the ball vertically: up when the ball is above the paddle, down
/// when below. Strong enough to return most serves, which makes it the
/// sparring opponent for training runs.
pub struct FollowBallPolicy {
    side: Side,
    obs: Option<Observation>,
}

impl FollowBallPolicy {
    pub fn new(side: Side) -> Self {
        Self { side, obs: None }
    }
}

impl Policy for FollowBallPolicy {
    fn name(&self) -> &'static str {
        "follow_ball"
    }

    fn observe(&mut self, obs: &Observation) {
        self.obs = Some(*obs);
    }

    fn act(&mut self) -> PaddleMove {
        // Before the first observation there is nothing to chase.
        let Some(obs) = self.obs else {
            return PaddleMove::Still;
        };
        let paddle_y = match self.side {
            Side::Left => obs[1],
            Side::Right => obs[5],
        };
        let ball_y = obs[9];
        if paddle_y < ball_y {
            PaddleMove::Up
        } else if paddle_y > ball_y {
            PaddleMove::Down
        } else {
            PaddleMove::Still
        }
    }
}

/// Map a 3-way network output to an action by argmax. Ties resolve to the
/// earliest index. This is the whole boundary to a trained network: 14
/// floats in, one of three actions out.
pub fn argmax_action(outputs: &[f32]) -> PaddleMove {
    let mut best = 0;
    for (i, v) in outputs.iter().enumerate() {
        if *v > outputs[best] {
            best = i;
        }
    }
    PaddleMove::from_index(best)
}
