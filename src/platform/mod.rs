//! Platform abstraction layer
//!
//! The game core never talks to hardware directly. It calls into three
//! collaborators and is driven by typed input events:
//! - `Display`: framebuffer drawing
//! - `Scheduler`: cooperative timer tasks
//! - `Led`: feedback pulses
//!
//! Host-side implementations live in the submodules so the core can run
//! headlessly.

pub mod led;
pub mod scheduler;

pub use led::RecordingLed;
pub use scheduler::VirtualScheduler;

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// One of the two directional buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Button driver events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Press,
    Release,
    Click,
    Hold,
}

impl ButtonEvent {
    /// Press and hold drive the game; release and click are ignored
    pub fn is_active(&self) -> bool {
        matches!(self, ButtonEvent::Press | ButtonEvent::Hold)
    }
}

/// Work the game core asks the scheduler to run later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// One simulation tick
    Update,
    /// Return to the menu after a game over
    Reset,
}

/// Handle to a registered task. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskHandle(NonZeroU32);

impl TaskHandle {
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

/// Monochrome framebuffer drawing, synchronous
pub trait Display {
    /// Clear the back buffer
    fn clear(&mut self);
    /// Rectangle spanning `(x0, y0)` to `(x1, y1)` inclusive
    fn draw_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, filled: bool);
    /// Text with its top-left corner at `(x, y)`
    fn draw_text(&mut self, x: i32, y: i32, text: &str, filled: bool);
    /// Push the back buffer to the panel
    fn present(&mut self);
}

/// Cooperative, single-threaded timer service
pub trait Scheduler {
    /// Register a task due immediately. It stays registered after running but
    /// only runs again when re-planned with [`Scheduler::reschedule_current`].
    fn schedule_periodic(&mut self, task: Task) -> TaskHandle;
    /// Run a task once after `delay_ms`
    fn schedule_once(&mut self, task: Task, delay_ms: u64);
    /// Drop a registered task
    fn unschedule(&mut self, handle: TaskHandle);
    /// Re-plan the task currently running, `delay_ms` from now
    fn reschedule_current(&mut self, delay_ms: u64);
}

/// Fire-and-forget feedback LED
pub trait Led {
    fn pulse(&mut self, duration_ms: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_handle_rejects_zero() {
        assert!(TaskHandle::new(0).is_none());
        assert_eq!(TaskHandle::new(3).map(|h| h.get()), Some(3));
    }

    #[test]
    fn test_only_press_and_hold_are_active() {
        assert!(ButtonEvent::Press.is_active());
        assert!(ButtonEvent::Hold.is_active());
        assert!(!ButtonEvent::Release.is_active());
        assert!(!ButtonEvent::Click.is_active());
    }
}
