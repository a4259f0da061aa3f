//! Game state snapshots and paddle actions

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Discrete paddle command for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleMove {
    Up,
    #[default]
    Still,
    Down,
}

impl PaddleMove {
    /// Signed velocity factor: Up=+1, Still=0, Down=-1.
    pub fn as_f32(self) -> f32 {
        match self {
            PaddleMove::Up => 1.0,
            PaddleMove::Still => 0.0,
            PaddleMove::Down => -1.0,
        }
    }

    /// Map an argmax index over a 3-way network output to an action
    /// (0 = Down, 1 = Still, anything else = Up).
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => PaddleMove::Down,
            1 => PaddleMove::Still,
            _ => PaddleMove::Up,
        }
    }
}

/// One committed simulation snapshot.
///
/// A new snapshot is derived from the previous one every tick; the engine
/// only ever publishes fully committed snapshots, so a reader between ticks
/// never observes a state under construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub paddle1_pos: Vec2,
    pub paddle2_pos: Vec2,
    pub paddle1_vel: Vec2,
    pub paddle2_vel: Vec2,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub player1_action: PaddleMove,
    pub player2_action: PaddleMove,
    pub player1_score: u32,
    pub player2_score: u32,
    /// Seconds since the last goal reset.
    pub time: f32,
    /// Seconds since engine construction, carried across resets.
    pub total_time: f32,
}

impl GameState {
    /// Cumulative score differential, player 1 minus player 2.
    pub fn score_diff(&self) -> i64 {
        i64::from(self.player1_score) - i64::from(self.player2_score)
    }
}
