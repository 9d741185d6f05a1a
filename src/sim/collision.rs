//! Collision rules for the ball
//!
//! All checks are edge-exact on the pixel grid: the ball moves one pixel per
//! tick, so a wall or paddle is "hit" when the ball sits exactly on the
//! boundary row/column, not when the rectangles overlap.

use super::geometry::{Rect, Size2i};
use super::state::Ball;

/// Which walls turned the ball around this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallBounce {
    pub left: bool,
    pub right: bool,
    pub top: bool,
}

impl WallBounce {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top
    }
}

/// Reflect the ball off the left, right and top walls
///
/// The floor is not a wall: reaching it ends the game, see [`reached_floor`].
pub fn bounce_off_walls(ball: &mut Ball, screen: Size2i) -> WallBounce {
    let mut bounce = WallBounce::default();
    let frame = ball.frame;

    if frame.min_x() == 0 && ball.velocity.dx() == -1 {
        ball.velocity.set_dx(1);
        bounce.left = true;
    }
    if frame.max_x() == screen.w as i32 - 1 && ball.velocity.dx() == 1 {
        ball.velocity.set_dx(-1);
        bounce.right = true;
    }
    if frame.min_y() == 0 && ball.velocity.dy() == -1 {
        ball.velocity.set_dy(1);
        bounce.top = true;
    }

    bounce
}

/// True if a falling ball sits exactly one row above the paddle, within its span
pub fn hits_paddle(ball: &Ball, paddle: &Rect) -> bool {
    let over_paddle = ball.frame.overlaps_x(paddle);
    let touching_top = ball.frame.max_y() == paddle.min_y() - 1;
    over_paddle && touching_top && ball.velocity.dy() == 1
}

/// True once the ball's bottom edge reaches the last screen row
pub fn reached_floor(ball: &Ball, screen: Size2i) -> bool {
    ball.frame.max_y() == screen.h as i32 - 1
}
