//! Pocket Bounce - a bouncing-ball arcade core for a 128x128 LCD module
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, difficulty ramp)
//! - `game`: Controller and state machine (menu, playing, game over)
//! - `renderer`: Scene drawing and an in-memory framebuffer
//! - `platform`: Display/scheduler/LED traits and headless implementations
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{Game, HeadlessGame};
pub use tuning::Tuning;

/// Fixed hardware constants
pub mod consts {
    /// LCD dimensions in pixels
    pub const SCREEN_WIDTH: u32 = 128;
    pub const SCREEN_HEIGHT: u32 = 128;
}
