//! CyberPong - a deterministic Pong simulation used as a training
//! environment for neuroevolution agents
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `env`: Step/reset adapter producing normalized observation vectors
//! - `policy`: Pluggable paddle controllers
//! - `runner`: Headless match loop between two policies

pub mod config;
pub mod env;
pub mod policy;
pub mod runner;
pub mod sim;

pub use config::{ConfigError, PongConfig};
pub use env::{OBS_LEN, Observation, PongEnv, Step};
pub use policy::{FollowBallPolicy, Policy, RandomPolicy, Side, StillPolicy, argmax_action};
pub use runner::{MatchConfig, MatchReport, run_match};
pub use sim::{GameState, PaddleMove, PongLogic, Rect, overlaps};
