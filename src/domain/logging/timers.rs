use super::operations::elapsed_millis;
use super::types::TimerLabel;
use std::collections::HashMap;

/// Named stopwatches. Start times are clock readings in milliseconds.
#[derive(Debug, Clone, Default)]
pub struct TimerRegistry {
    timers: HashMap<TimerLabel, f64>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) a timer.
    pub fn start(&mut self, label: TimerLabel, now: f64) {
        self.timers.insert(label, now);
    }

    pub fn elapsed(&self, label: &TimerLabel, now: f64) -> Option<u64> {
        self.timers
            .get(label)
            .map(|start| elapsed_millis(*start, now))
    }

    pub fn remove(&mut self, label: &TimerLabel) -> Option<f64> {
        self.timers.remove(label)
    }

    pub fn contains(&self, label: &TimerLabel) -> bool {
        self.timers.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
