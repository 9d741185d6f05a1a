//! In-memory monochrome framebuffer
//!
//! Double buffered like the LCD driver: drawing goes to a back buffer and
//! `present` copies it to the front buffer that tests and the demo inspect.
//! There is no font, so text is kept as positioned runs.

use crate::platform::Display;

/// A string drawn at a pixel position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub x: i32,
    pub y: i32,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
struct Buffer {
    pixels: Vec<bool>,
    texts: Vec<TextRun>,
}

#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    back: Buffer,
    front: Buffer,
    presented: u64,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let blank = Buffer {
            pixels: vec![false; (width * height) as usize],
            texts: Vec::new(),
        };
        Self {
            width,
            height,
            back: blank.clone(),
            front: blank,
            presented: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel on the last presented frame. Off-screen reads are `false`.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.front.pixels[i])
    }

    /// Number of lit pixels on the last presented frame
    pub fn lit_pixels(&self) -> usize {
        self.front.pixels.iter().filter(|&&p| p).count()
    }

    /// Text runs on the last presented frame, in draw order
    pub fn texts(&self) -> &[TextRun] {
        &self.front.texts
    }

    pub fn shows_text(&self, text: &str) -> bool {
        self.front.texts.iter().any(|t| t.text == text)
    }

    /// How many times `present` was called
    pub fn frames_presented(&self) -> u64 {
        self.presented
    }

    /// Render the presented frame as text, one character per pixel
    pub fn to_ascii(&self) -> String {
        let w = self.width as usize;
        let mut rows: Vec<Vec<char>> = self
            .front
            .pixels
            .chunks(w)
            .map(|row| row.iter().map(|&p| if p { '#' } else { '.' }).collect())
            .collect();

        for run in &self.front.texts {
            let Some(row) = usize::try_from(run.y).ok().and_then(|y| rows.get_mut(y)) else {
                continue;
            };
            for (i, ch) in run.text.chars().enumerate() {
                let x = run.x + i as i32;
                if let Some(cell) = usize::try_from(x).ok().and_then(|x| row.get_mut(x)) {
                    *cell = ch;
                }
            }
        }

        let mut out = String::with_capacity((w + 1) * rows.len());
        for row in rows {
            out.extend(row);
            out.push('\n');
        }
        out
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some((y * self.width + x) as usize)
    }

    fn set(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.back.pixels[i] = true;
        }
    }
}

impl Display for Framebuffer {
    fn clear(&mut self) {
        self.back.pixels.fill(false);
        self.back.texts.clear();
    }

    fn draw_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, filled: bool) {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        for y in y0..=y1 {
            for x in x0..=x1 {
                let edge = x == x0 || x == x1 || y == y0 || y == y1;
                if filled || edge {
                    self.set(x, y);
                }
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, _filled: bool) {
        self.back.texts.push(TextRun {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn present(&mut self) {
        self.front.clone_from(&self.back);
        self.presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_visible_until_present() {
        let mut fb = Framebuffer::new(16, 16);
        fb.draw_rect(0, 0, 3, 3, true);
        assert_eq!(fb.lit_pixels(), 0);

        fb.present();
        assert_eq!(fb.lit_pixels(), 16);
        assert_eq!(fb.frames_presented(), 1);
    }

    #[test]
    fn test_outline_rect() {
        let mut fb = Framebuffer::new(16, 16);
        fb.draw_rect(2, 2, 5, 5, false);
        fb.present();
        assert!(fb.pixel(2, 2));
        assert!(fb.pixel(5, 3));
        assert!(!fb.pixel(3, 3));
        assert_eq!(fb.lit_pixels(), 12);
    }

    #[test]
    fn test_rect_is_clipped() {
        let mut fb = Framebuffer::new(8, 8);
        fb.draw_rect(-4, 6, 20, 12, true);
        fb.present();
        assert_eq!(fb.lit_pixels(), 16);
        assert!(!fb.pixel(-1, 6));
        assert!(!fb.pixel(8, 7));
    }

    #[test]
    fn test_clear_drops_pixels_and_text() {
        let mut fb = Framebuffer::new(8, 8);
        fb.draw_rect(0, 0, 1, 1, true);
        fb.draw_text(0, 0, "7", true);
        fb.present();
        assert!(fb.shows_text("7"));

        fb.clear();
        fb.present();
        assert_eq!(fb.lit_pixels(), 0);
        assert!(fb.texts().is_empty());
    }

    #[test]
    fn test_ascii_overlays_text() {
        let mut fb = Framebuffer::new(4, 2);
        fb.draw_rect(0, 1, 3, 1, true);
        fb.draw_text(1, 0, "hi!!", true);
        fb.present();
        assert_eq!(fb.to_ascii(), ".hi!\n####\n");
    }
}
