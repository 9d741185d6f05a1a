//! Scene drawing
//!
//! Three screens, all drawn through the `Display` trait: the menu prompt, the
//! play frame (ball, paddle, score) and the game-over banner.

pub mod framebuffer;

pub use framebuffer::{Framebuffer, TextRun};

use crate::platform::Display;
use crate::sim::{GameState, Rect, Size2i};

pub const MENU_TEXT: &str = "Press any key";
pub const GAME_OVER_TEXT: &str = "Game over";

/// Score position, top-left corner
const SCORE_POS: (i32, i32) = (2, 2);

/// Banner rows sit just above the vertical middle
fn banner_y(screen: Size2i) -> i32 {
    screen.h as i32 / 2 - 10
}

fn draw_frame_rect<D: Display + ?Sized>(display: &mut D, rect: &Rect) {
    display.draw_rect(rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y(), true);
}

/// Clear the screen and show the start prompt
pub fn draw_menu<D: Display + ?Sized>(display: &mut D, screen: Size2i) {
    display.clear();
    display.draw_text(10, banner_y(screen), MENU_TEXT, true);
    display.present();
}

/// Redraw the whole play field
pub fn draw_play_frame<D: Display + ?Sized>(display: &mut D, state: &GameState) {
    display.clear();
    draw_frame_rect(display, &state.ball.frame);
    draw_frame_rect(display, &state.player.frame);
    display.draw_text(SCORE_POS.0, SCORE_POS.1, &state.player.score.to_string(), true);
    display.present();
}

/// Stamp the game-over banner over whatever is on screen
pub fn draw_game_over<D: Display + ?Sized>(display: &mut D, screen: Size2i) {
    display.draw_text(30, banner_y(screen), GAME_OVER_TEXT, true);
    display.present();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_menu_prompt() {
        let mut fb = Framebuffer::new(128, 128);
        draw_menu(&mut fb, Size2i::new(128, 128));
        assert_eq!(
            fb.texts(),
            &[TextRun {
                x: 10,
                y: 54,
                text: MENU_TEXT.to_string()
            }]
        );
        assert_eq!(fb.lit_pixels(), 0);
    }

    #[test]
    fn test_play_frame_draws_ball_paddle_and_score() {
        let mut state = GameState::with_layout(49, 1, &Tuning::default());
        state.player.score = 12;

        let mut fb = Framebuffer::new(128, 128);
        draw_play_frame(&mut fb, &state);

        // Ball (64,122)-(68,126) and paddle (49,124)-(79,128), clipped at 127
        assert!(fb.pixel(64, 122));
        assert!(fb.pixel(68, 126));
        assert!(fb.pixel(49, 124));
        assert!(fb.pixel(79, 127));
        assert!(!fb.pixel(48, 124));
        assert!(!fb.pixel(10, 10));
        assert_eq!(fb.texts()[0].text, "12");
        assert_eq!((fb.texts()[0].x, fb.texts()[0].y), (2, 2));
    }

    #[test]
    fn test_game_over_keeps_last_frame() {
        let state = GameState::with_layout(49, 1, &Tuning::default());
        let mut fb = Framebuffer::new(128, 128);
        draw_play_frame(&mut fb, &state);
        let lit = fb.lit_pixels();

        draw_game_over(&mut fb, state.screen);
        assert_eq!(fb.lit_pixels(), lit);
        assert!(fb.shows_text("0"));
        assert!(fb.shows_text(GAME_OVER_TEXT));
        assert_eq!(fb.frames_presented(), 2);
    }
}
