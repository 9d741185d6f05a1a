//! Game controller
//!
//! Owns the session state, the RNG and the three collaborators, and runs the
//! state machine:
//!
//! ```text
//! Menu --(press/hold)--> Playing --(ball on floor)--> GameOver --(reset task)--> Menu
//! ```
//!
//! Everything runs on one thread: scheduled tasks and button events are
//! handed in one at a time and run to completion.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::platform::{
    ButtonEvent, Direction, Display, Led, RecordingLed, Scheduler, Task, TaskHandle,
    VirtualScheduler,
};
use crate::renderer::{self, Framebuffer};
use crate::sim::{self, GamePhase, GameState};
use crate::tuning::Tuning;

pub struct Game<D, S, L> {
    state: GameState,
    tuning: Tuning,
    rng: Pcg32,
    display: D,
    scheduler: S,
    led: L,
    /// Registered update task, `None` outside `Playing`
    update_task: Option<TaskHandle>,
    /// Sessions started by `init`
    sessions: u64,
}

impl<D: Display, S: Scheduler, L: Led> Game<D, S, L> {
    /// Build a controller. Nothing is drawn until [`Game::init`].
    pub fn new(seed: u64, tuning: Tuning, display: D, scheduler: S, led: L) -> Self {
        let tuning = tuning.sanitized();
        // Placeholder until `init`, which is the only place that draws from the RNG
        let state = GameState::with_layout(0, 1, &tuning);
        Self {
            state,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            display,
            scheduler,
            led,
            update_task: None,
            sessions: 0,
        }
    }

    /// Start a fresh session in the menu
    pub fn init(&mut self) {
        if let Some(handle) = self.update_task.take() {
            self.scheduler.unschedule(handle);
        }

        self.state = GameState::new(&mut self.rng, &self.tuning);
        self.sessions += 1;
        log::info!(
            "Session {} ready: paddle x={}, ball dx={}",
            self.sessions,
            self.state.player.frame.min_x(),
            self.state.ball.velocity.dx()
        );

        renderer::draw_menu(&mut self.display, self.state.screen);
    }

    /// Leave the menu and register the update task
    pub fn start(&mut self) {
        if self.state.phase != GamePhase::Menu {
            return;
        }
        self.state.phase = GamePhase::Playing;
        self.update_task = Some(self.scheduler.schedule_periodic(Task::Update));
        log::info!(
            "Session {} started at {} fps",
            self.sessions,
            self.state.difficulty.frames_per_second
        );
    }

    /// One simulation tick
    pub fn update(&mut self) {
        if !self.state.is_playing() {
            log::trace!("update skipped in {:?}", self.state.phase);
            return;
        }

        let mut outcome = sim::advance_ball(&mut self.state);

        if outcome.paddle_hit {
            log::debug!("Paddle hit, score {}", self.state.player.score);
            self.led.pulse(self.tuning.led_pulse_ms);
        }

        if outcome.ball_lost {
            self.game_over();
        } else {
            renderer::draw_play_frame(&mut self.display, &self.state);
        }

        sim::ramp_difficulty(&mut self.state, &self.tuning, &mut outcome);
        if outcome.sped_up {
            log::debug!("Speed up: {} fps", self.state.difficulty.frames_per_second);
        }
        if outcome.paddle_shrunk {
            log::debug!("Paddle shrunk to {}", self.state.player.frame.size.w);
        }

        if self.update_task.is_some() {
            let interval = self.frame_interval_ms();
            self.scheduler.reschedule_current(interval);
        }
    }

    /// End the session and plan the return to the menu
    pub fn game_over(&mut self) {
        self.state.phase = GamePhase::GameOver;
        renderer::draw_game_over(&mut self.display, self.state.screen);

        if let Some(handle) = self.update_task.take() {
            self.scheduler.unschedule(handle);
        }
        self.scheduler.schedule_once(Task::Reset, self.tuning.reset_delay_ms);

        log::info!(
            "Game over: score {} after {} ticks, {} fps",
            self.state.player.score,
            self.state.ticks,
            self.state.difficulty.frames_per_second
        );
    }

    /// Move the paddle one step. Only while playing.
    pub fn move_player(&mut self, direction: Direction) {
        if !self.state.is_playing() {
            return;
        }
        let step = match direction {
            Direction::Left => -self.tuning.paddle_step,
            Direction::Right => self.tuning.paddle_step,
        };
        self.state.player.shift(step, self.state.screen);
    }

    pub fn move_left(&mut self) {
        self.move_player(Direction::Left);
    }

    pub fn move_right(&mut self) {
        self.move_player(Direction::Right);
    }

    /// Either button starts the game from the menu, otherwise it steers
    pub fn on_directional_input(&mut self, direction: Direction) {
        match self.state.phase {
            GamePhase::Menu => self.start(),
            GamePhase::Playing => self.move_player(direction),
            GamePhase::GameOver => {}
        }
    }

    /// Button driver entry point
    pub fn on_button(&mut self, direction: Direction, event: ButtonEvent) {
        if event.is_active() {
            self.on_directional_input(direction);
        }
    }

    /// Scheduler entry point
    pub fn run_task(&mut self, task: Task) {
        match task {
            Task::Update => self.update(),
            Task::Reset => self.init(),
        }
    }

    /// Milliseconds until the next tick at the current difficulty
    pub fn frame_interval_ms(&self) -> u64 {
        Tuning::frame_interval_ms(self.state.difficulty.frames_per_second)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn update_task(&self) -> Option<TaskHandle> {
        self.update_task
    }

    pub fn sessions(&self) -> u64 {
        self.sessions
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn led(&self) -> &L {
        &self.led
    }
}

/// Controller wired to the in-memory collaborators
pub type HeadlessGame = Game<Framebuffer, VirtualScheduler, RecordingLed>;

impl HeadlessGame {
    pub fn headless(seed: u64, tuning: Tuning) -> Self {
        let screen = (crate::consts::SCREEN_WIDTH, crate::consts::SCREEN_HEIGHT);
        Game::new(
            seed,
            tuning,
            Framebuffer::new(screen.0, screen.1),
            VirtualScheduler::new(),
            RecordingLed::new(),
        )
    }

    /// Virtual time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Run every task due up to `until_ms`, then move the clock there.
    /// Returns how many tasks ran.
    pub fn run_until(&mut self, until_ms: u64) -> usize {
        let mut ran = 0;
        while let Some(task) = self.scheduler.next_due(until_ms) {
            self.run_task(task);
            ran += 1;
        }
        self.scheduler.advance_to(until_ms);
        ran
    }
}
