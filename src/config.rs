//! Simulation configuration
//!
//! All tunable parameters are fixed at engine construction and validated
//! before any state exists; the engine never mutates them.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configuration input, raised at engine construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tick duration must be positive, got {0}")]
    NonPositiveDt(f32),
    #[error("{name} shape must have positive dimensions, got {width}x{height}")]
    NonPositiveShape {
        name: &'static str,
        width: f32,
        height: f32,
    },
    #[error("{name} speed must be positive, got {value}")]
    NonPositiveSpeed { name: &'static str, value: f32 },
    #[error("paddle offset must lie in (0, 0.5), got {0}")]
    PaddleOffsetOutOfRange(f32),
}

/// Immutable simulation parameters.
///
/// Window bounds are left=0, right=`window.x`, top=0, bottom=`window.y`.
/// Paddle 1 sits at `window.x * paddle_offset`, paddle 2 mirrored at
/// `window.x * (1 - paddle_offset)`, both vertically centered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PongConfig {
    /// Tick duration in seconds.
    pub dt: f32,
    /// Window shape (width, height).
    pub window: Vec2,
    /// Paddle shape (width, height).
    pub paddle_shape: Vec2,
    /// Fractional horizontal placement of the paddles.
    pub paddle_offset: f32,
    /// Vertical paddle speed magnitude.
    pub paddle_speed: f32,
    /// Ball shape (width, height).
    pub ball_shape: Vec2,
    /// Ball position at serve.
    pub ball_start: Vec2,
    /// Serve speed magnitude; also sets the post-bounce velocity cap.
    pub ball_speed: f32,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            dt: 1.0 / 30.0,
            window: Vec2::new(400.0, 400.0),
            paddle_shape: Vec2::new(10.0, 30.0),
            paddle_offset: 0.15,
            paddle_speed: 200.0,
            ball_shape: Vec2::new(5.0, 5.0),
            ball_start: Vec2::new(200.0, 200.0),
            ball_speed: 100.0,
        }
    }
}

impl PongConfig {
    /// Fail fast on parameters the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt > 0.0) {
            return Err(ConfigError::NonPositiveDt(self.dt));
        }
        check_shape("window", self.window)?;
        check_shape("paddle", self.paddle_shape)?;
        check_shape("ball", self.ball_shape)?;
        check_speed("paddle", self.paddle_speed)?;
        check_speed("ball", self.ball_speed)?;
        if !(self.paddle_offset > 0.0 && self.paddle_offset < 0.5) {
            return Err(ConfigError::PaddleOffsetOutOfRange(self.paddle_offset));
        }
        Ok(())
    }

    /// Per-component ball velocity cap applied after a paddle bounce,
    /// and the scale used to normalize velocity observations.
    pub fn velocity_cap(&self) -> f32 {
        self.ball_speed * 100.0
    }
}

// Positive-guard form so NaN fails the check too.
fn check_shape(name: &'static str, shape: Vec2) -> Result<(), ConfigError> {
    if shape.x > 0.0 && shape.y > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveShape {
            name,
            width: shape.x,
            height: shape.y,
        })
    }
}

fn check_speed(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveSpeed { name, value })
    }
}
