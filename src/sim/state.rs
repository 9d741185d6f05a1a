//! Game state and core simulation types
//!
//! Everything one play session touches lives in a single `GameState`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, Size2i, Velocity};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// "Press any key" screen, waiting for input
    Menu,
    /// Active gameplay, the update task is scheduled
    Playing,
    /// Ball hit the floor, waiting for the reset task
    GameOver,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub frame: Rect,
    pub velocity: Velocity,
}

impl Ball {
    /// Move one step along the current velocity
    pub fn advance(&mut self) {
        self.frame.origin += self.velocity.as_ivec2();
    }
}

/// The player's paddle and score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub frame: Rect,
    pub score: u32,
}

impl Player {
    /// Rightmost origin that keeps `max_x <= screen.w - 1`
    pub fn max_origin_x(&self, screen: Size2i) -> i32 {
        (screen.w as i32 - 1 - self.frame.size.w as i32).max(0)
    }

    /// Shift horizontally, clamped to the screen
    pub fn shift(&mut self, dx: i32, screen: Size2i) {
        let max_x = self.max_origin_x(screen);
        self.frame.origin.x = (self.frame.origin.x + dx).clamp(0, max_x);
    }
}

/// Per-session difficulty counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Tick rate, also the difficulty level
    pub frames_per_second: u32,
    /// Ticks since the last speed increase
    pub game_tick_counter: u32,
    /// Ticks since the last paddle shrink
    pub player_width_shrink_counter: u32,
}

impl Difficulty {
    pub fn new(frames_per_second: u32) -> Self {
        Self {
            frames_per_second: frames_per_second.max(1),
            game_tick_counter: 0,
            player_width_shrink_counter: 0,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Screen bounds (fixed)
    pub screen: Size2i,
    pub ball: Ball,
    pub player: Player,
    pub difficulty: Difficulty,
    /// Simulation ticks run this session
    pub ticks: u64,
}

impl GameState {
    /// Fresh session with a random paddle position and horizontal direction
    pub fn new<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Self {
        // Uniform in [0, width - 1 - paddle_width)
        let span = SCREEN_WIDTH.saturating_sub(1 + tuning.paddle_width).max(1);
        let paddle_x = rng.random_range(0..span) as i32;
        let ball_dx = if rng.random_bool(0.5) { -1 } else { 1 };
        Self::with_layout(paddle_x, ball_dx, tuning)
    }

    /// Fresh session with a known paddle position and ball direction
    pub fn with_layout(paddle_x: i32, ball_dx: i32, tuning: &Tuning) -> Self {
        let screen = Size2i::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        let paddle_h = tuning.paddle_height;

        let mut player = Player {
            frame: Rect::new(0, (SCREEN_HEIGHT - paddle_h) as i32, tuning.paddle_width, paddle_h),
            score: 0,
        };
        player.shift(paddle_x, screen);

        // Ball sits centered on the paddle, moving up
        let ball = Ball {
            frame: Rect::new(
                player.frame.center_x(),
                SCREEN_HEIGHT as i32 - 2 - paddle_h as i32,
                tuning.ball_size,
                tuning.ball_size,
            ),
            velocity: Velocity::new(ball_dx, -1),
        };

        Self {
            phase: GamePhase::Menu,
            screen,
            ball,
            player,
            difficulty: Difficulty::new(tuning.initial_frames_per_second),
            ticks: 0,
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
