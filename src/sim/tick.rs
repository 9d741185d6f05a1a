//! Fixed timestep simulation tick
//!
//! One tick moves the ball a single pixel, resolves collisions, then ramps the
//! difficulty. The controller runs the two halves separately so it can redraw
//! between them; [`tick`] runs both for headless use.

use super::collision::{bounce_off_walls, hits_paddle, reached_floor};
use super::state::{GamePhase, GameState};
use crate::tuning::Tuning;

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Ball turned around at the left, right or top wall
    pub wall_bounce: bool,
    /// Ball bounced off the paddle (score went up by one)
    pub paddle_hit: bool,
    /// Ball reached the floor, phase is now `GameOver`
    pub ball_lost: bool,
    /// Tick rate went up by one
    pub sped_up: bool,
    /// Paddle got narrower
    pub paddle_shrunk: bool,
}

/// Motion and collision half of a tick
///
/// Does nothing outside `Playing`.
pub fn advance_ball(state: &mut GameState) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if state.phase != GamePhase::Playing {
        return outcome;
    }

    state.ticks += 1;
    state.ball.advance();
    let bounce = bounce_off_walls(&mut state.ball, state.screen);
    if bounce.any() {
        log::trace!("Wall bounce {:?} at {}", bounce, state.ball.frame.origin);
        outcome.wall_bounce = true;
    }

    if hits_paddle(&state.ball, &state.player.frame) {
        state.ball.velocity.set_dy(-1);
        state.player.score = state.player.score.saturating_add(1);
        outcome.paddle_hit = true;
    }

    if reached_floor(&state.ball, state.screen) {
        state.phase = GamePhase::GameOver;
        outcome.ball_lost = true;
    }

    outcome
}

/// Difficulty half of a tick
///
/// Both thresholds are measured in ticks divided by the *current* tick rate,
/// so each speed-up makes the next one take one tick longer.
pub fn ramp_difficulty(state: &mut GameState, tuning: &Tuning, outcome: &mut TickOutcome) {
    let difficulty = &mut state.difficulty;

    difficulty.game_tick_counter += 1;
    if difficulty.game_tick_counter.div_ceil(difficulty.frames_per_second)
        > tuning.speed_ramp_seconds
    {
        difficulty.game_tick_counter = 0;
        if difficulty.frames_per_second < tuning.max_frames_per_second {
            difficulty.frames_per_second += 1;
            outcome.sped_up = true;
        }
    }

    difficulty.player_width_shrink_counter += 1;
    let ball_w = state.ball.frame.size.w;
    let paddle = &mut state.player.frame;
    if difficulty
        .player_width_shrink_counter
        .div_ceil(difficulty.frames_per_second)
        > tuning.shrink_interval_seconds
        && paddle.size.w > ball_w
    {
        difficulty.player_width_shrink_counter = 0;
        paddle.size.w = paddle.size.w.saturating_sub(tuning.shrink_step).max(ball_w);
        paddle.origin.x += 1;
        outcome.paddle_shrunk = true;
    }
}

/// Advance the game state by one full tick
pub fn tick(state: &mut GameState, tuning: &Tuning) -> TickOutcome {
    if state.phase != GamePhase::Playing {
        return TickOutcome::default();
    }
    let mut outcome = advance_ball(state);
    ramp_difficulty(state, tuning, &mut outcome);
    outcome
}
