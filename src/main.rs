//! Pocket Bounce headless demo
//!
//! Runs the game core on the virtual scheduler with an autopilot pressing the
//! buttons, then prints the last frame and a state snapshot.
//!
//! Usage: `pocket-bounce [seed] [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
use pocket_bounce::{
    HeadlessGame, Tuning,
    platform::{ButtonEvent, Direction},
    sim::GamePhase,
};

/// Simulated run length
#[cfg(not(target_arch = "wasm32"))]
const RUN_MS: u64 = 90_000;
/// Button hold repeat period
#[cfg(not(target_arch = "wasm32"))]
const HOLD_REPEAT_MS: u64 = 100;

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: Option<&str>) -> Tuning {
    let Some(path) = path else {
        return Tuning::default();
    };

    match std::fs::read_to_string(path) {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning file {}: {} - using defaults", path, e);
                Tuning::default()
            }
        },
        Err(e) => {
            log::warn!("Could not read {}: {} - using defaults", path, e);
            Tuning::default()
        }
    }
}

/// Steer toward the ball, or press anything to leave the menu
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(game: &HeadlessGame) -> Option<(Direction, ButtonEvent)> {
    let state = game.state();
    match state.phase {
        GamePhase::Menu => Some((Direction::Right, ButtonEvent::Press)),
        GamePhase::Playing => {
            let target = state.ball.frame.center_x();
            let paddle = state.player.frame.center_x();
            let slack = game.tuning().paddle_step / 2;
            if target < paddle - slack {
                Some((Direction::Left, ButtonEvent::Hold))
            } else if target > paddle + slack {
                Some((Direction::Right, ButtonEvent::Hold))
            } else {
                None
            }
        }
        GamePhase::GameOver => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = match args.first().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::warn!("Bad seed {:?}: {} - using 0", args[0], e);
            0
        }
        None => 0,
    };
    let tuning = load_tuning(args.get(1).map(String::as_str));

    log::info!("Pocket Bounce (headless) starting with seed {}", seed);
    let mut game = HeadlessGame::headless(seed, tuning);
    game.init();

    let mut best_score = 0;
    let mut t = 0;
    while t < RUN_MS {
        if let Some((direction, event)) = autopilot(&game) {
            game.on_button(direction, event);
        }
        t += HOLD_REPEAT_MS;
        game.run_until(t);
        best_score = best_score.max(game.state().player.score);
    }

    println!("{}", game.display().to_ascii());
    println!(
        "sessions: {}, best score: {}, LED pulses: {}",
        game.sessions(),
        best_score,
        game.led().pulses().len()
    );
    match serde_json::to_string_pretty(game.state()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize state: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless demo on wasm
}
