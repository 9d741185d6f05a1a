//! Data-driven game balance
//!
//! Defaults match the original LCD firmware. A host build can override any
//! subset of fields from JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Balance knobs for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Tick rate at the start of a session
    pub initial_frames_per_second: u32,
    /// Upper bound for the tick rate (keeps the tick interval >= 1 ms)
    pub max_frames_per_second: u32,

    /// Paddle width in pixels
    pub paddle_width: u32,
    /// Paddle height in pixels
    pub paddle_height: u32,
    /// Pixels moved per button press/hold
    pub paddle_step: i32,

    /// Ball side length in pixels
    pub ball_size: u32,

    /// Speed ramp threshold, measured in "seconds" at the current fps
    pub speed_ramp_seconds: u32,
    /// Paddle shrink threshold, measured in "seconds" at the current fps
    pub shrink_interval_seconds: u32,
    /// Width removed per shrink
    pub shrink_step: u32,

    /// Delay between game over and the next menu
    pub reset_delay_ms: u64,
    /// LED pulse length on a paddle hit
    pub led_pulse_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_frames_per_second: 60,
            max_frames_per_second: 1000,

            paddle_width: 30,
            paddle_height: 4,
            paddle_step: 10,

            ball_size: 4,

            speed_ramp_seconds: 1,
            shrink_interval_seconds: 10,
            shrink_step: 2,

            reset_delay_ms: 5000,
            led_pulse_ms: 100,
        }
    }
}

impl Tuning {
    /// Parse a tuning file. Unknown fields are rejected, missing ones default.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Clamp values that would break the simulation invariants
    pub fn sanitized(mut self) -> Self {
        self.initial_frames_per_second = self.initial_frames_per_second.clamp(1, 1000);
        self.max_frames_per_second = self
            .max_frames_per_second
            .clamp(self.initial_frames_per_second, 1000);
        self.paddle_height = self.paddle_height.clamp(1, SCREEN_HEIGHT / 4);
        // The ball spawns at y = height - 2 - paddle_height; taller would start on the floor
        self.ball_size = self
            .ball_size
            .clamp(1, SCREEN_WIDTH / 4)
            .min(self.paddle_height);
        // Paddle must fit in [0, width - 1 - w); a ball centered on it at either
        // edge must start at least one column inside the wall
        self.paddle_width = self
            .paddle_width
            .clamp(2 * self.ball_size + 1, SCREEN_WIDTH - 2);
        self.paddle_step = self.paddle_step.max(1);
        self.speed_ramp_seconds = self.speed_ramp_seconds.max(1);
        self.shrink_interval_seconds = self.shrink_interval_seconds.max(1);
        // Each shrink nudges the paddle right by one, so the width has to drop too
        self.shrink_step = self.shrink_step.max(1);
        self
    }

    /// Milliseconds between ticks at the given rate
    #[inline]
    pub fn frame_interval_ms(frames_per_second: u32) -> u64 {
        (1000 / frames_per_second.max(1) as u64).max(1)
    }
}
