//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or I/O dependencies

pub mod geometry;
pub mod logic;
pub mod state;

pub use geometry::{Rect, overlaps};
pub use logic::PongLogic;
pub use state::{GameState, PaddleMove};
