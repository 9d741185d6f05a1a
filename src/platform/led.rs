//! LED that remembers its pulses instead of lighting anything

use super::Led;

#[derive(Debug, Clone, Default)]
pub struct RecordingLed {
    pulses: Vec<u32>,
}

impl RecordingLed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pulse durations in the order they were requested
    pub fn pulses(&self) -> &[u32] {
        &self.pulses
    }
}

impl Led for RecordingLed {
    fn pulse(&mut self, duration_ms: u32) {
        log::trace!("LED pulse {} ms", duration_ms);
        self.pulses.push(duration_ms);
    }
}
