//! Integer screen geometry
//!
//! Everything on the LCD lives on a whole-pixel grid:
//! - `Vector2i`: a point (top-left origin, y grows downward)
//! - `Size2i`: non-negative width/height
//! - `Rect`: origin + size, with derived edges
//! - `Velocity`: unit step per tick on each axis

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Integer point on the screen
pub type Vector2i = IVec2;

/// Non-negative dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size2i {
    pub w: u32,
    pub h: u32,
}

impl Size2i {
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

/// Axis-aligned rectangle
///
/// Edges follow the display driver convention: `max_x = origin.x + w`, so a
/// rectangle of width 4 at x=0 reports `max_x == 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vector2i,
    pub size: Size2i,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            origin: IVec2::new(x, y),
            size: Size2i::new(w, h),
        }
    }

    #[inline]
    pub fn min_x(&self) -> i32 {
        self.origin.x
    }

    #[inline]
    pub fn max_x(&self) -> i32 {
        self.origin.x + self.size.w as i32
    }

    #[inline]
    pub fn min_y(&self) -> i32 {
        self.origin.y
    }

    #[inline]
    pub fn max_y(&self) -> i32 {
        self.origin.y + self.size.h as i32
    }

    /// Horizontal center, rounded down
    #[inline]
    pub fn center_x(&self) -> i32 {
        self.origin.x + (self.size.w / 2) as i32
    }

    /// True if the open horizontal spans of both rectangles overlap
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.max_x() > other.min_x() && self.min_x() < other.max_x()
    }
}

/// Unit velocity, one pixel per tick on each axis
///
/// Components are always -1, 0 or 1; every constructor and setter keeps only
/// the sign, so a larger step can't skip the edge-exact collision row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawVelocity")]
pub struct Velocity {
    dx: i32,
    dy: i32,
}

#[derive(Deserialize)]
struct RawVelocity {
    dx: i32,
    dy: i32,
}

impl From<RawVelocity> for Velocity {
    fn from(raw: RawVelocity) -> Self {
        Velocity::new(raw.dx, raw.dy)
    }
}

impl Velocity {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self {
            dx: dx.signum(),
            dy: dy.signum(),
        }
    }

    #[inline]
    pub fn dx(&self) -> i32 {
        self.dx
    }

    #[inline]
    pub fn dy(&self) -> i32 {
        self.dy
    }

    pub fn set_dx(&mut self, dx: i32) {
        self.dx = dx.signum();
    }

    pub fn set_dy(&mut self, dy: i32) {
        self.dy = dy.signum();
    }

    #[inline]
    pub fn as_ivec2(&self) -> IVec2 {
        IVec2::new(self.dx, self.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(49, 124, 30, 4);
        assert_eq!(r.min_x(), 49);
        assert_eq!(r.max_x(), 79);
        assert_eq!(r.min_y(), 124);
        assert_eq!(r.max_y(), 128);
        assert_eq!(r.center_x(), 64);
    }

    #[test]
    fn test_overlaps_x_is_open_interval() {
        let paddle = Rect::new(10, 100, 30, 4);

        // Touching edges do not count
        assert!(!Rect::new(6, 0, 4, 4).overlaps_x(&paddle));
        assert!(!Rect::new(40, 0, 4, 4).overlaps_x(&paddle));

        // One pixel of overlap does
        assert!(Rect::new(7, 0, 4, 4).overlaps_x(&paddle));
        assert!(Rect::new(39, 0, 4, 4).overlaps_x(&paddle));
    }

    #[test]
    fn test_velocity_clamps_to_unit_steps() {
        let v = Velocity::new(5, -3);
        assert_eq!((v.dx(), v.dy()), (1, -1));
        assert_eq!(Velocity::new(0, 0).as_ivec2(), IVec2::ZERO);

        let mut v = Velocity::new(1, 1);
        v.set_dx(-7);
        v.set_dy(4);
        assert_eq!(v, Velocity::new(-1, 1));
    }

    #[test]
    fn test_velocity_deserialize_keeps_sign_only() {
        let v: Velocity = serde_json::from_str(r#"{"dx": 9, "dy": -2}"#).unwrap();
        assert_eq!(v, Velocity::new(1, -1));
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"dx":1,"dy":-1}"#);
    }
}
