//! Deterministic simulation module
//!
//! All gameplay rules live here. This module must stay pure:
//! - Integer pixel grid, unit steps only
//! - Randomness only through a caller-supplied RNG
//! - No rendering, scheduling or LED calls

pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use collision::{WallBounce, bounce_off_walls, hits_paddle, reached_floor};
pub use geometry::{Rect, Size2i, Vector2i, Velocity};
pub use state::{Ball, Difficulty, GamePhase, GameState, Player};
pub use tick::{TickOutcome, advance_ball, ramp_difficulty, tick};
