//! Auto-advance speed schedule.
//!
//! Speeds are inter-frame delays in milliseconds, cycled in order. A delay of
//! zero means auto-advance is off.

use std::time::Duration;

use crate::config::ConfigError;

/// Default delays, in milliseconds.
pub const DEFAULT_SPEEDS_MS: [u64; 4] = [0, 500, 350, 200];

/// Default starting position in [`DEFAULT_SPEEDS_MS`] (500 ms).
pub const DEFAULT_SPEED_INDEX: usize = 1;

/// Cyclic list of inter-frame delays with a current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedSchedule {
    delays: Vec<Duration>,
    index: usize,
}

impl Default for SpeedSchedule {
    fn default() -> Self {
        Self {
            delays: DEFAULT_SPEEDS_MS
                .iter()
                .copied()
                .map(Duration::from_millis)
                .collect(),
            index: DEFAULT_SPEED_INDEX,
        }
    }
}

impl SpeedSchedule {
    /// Build a schedule from delays in milliseconds.
    ///
    /// # Errors
    /// * [`ConfigError::EmptySpeeds`] if `delays_ms` is empty
    /// * [`ConfigError::SpeedIndexOutOfRange`] if `index` is not a valid position
    pub fn new(delays_ms: &[u64], index: usize) -> Result<Self, ConfigError> {
        if delays_ms.is_empty() {
            return Err(ConfigError::EmptySpeeds);
        }
        if index >= delays_ms.len() {
            return Err(ConfigError::SpeedIndexOutOfRange {
                index,
                len: delays_ms.len(),
            });
        }
        Ok(Self {
            delays: delays_ms.iter().copied().map(Duration::from_millis).collect(),
            index,
        })
    }

    /// Currently selected delay. Zero means paused.
    pub fn current(&self) -> Duration {
        self.delays[self.index]
    }

    /// Position of the current delay in the list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of delays in the cycle.
    pub fn len(&self) -> usize {
        self.delays.len()
    }

    /// Always false; construction rejects an empty list.
    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }

    /// Whether the current delay enables auto-advance.
    pub fn is_running(&self) -> bool {
        !self.current().is_zero()
    }

    /// Select the next delay, wrapping to the first, and return it.
    pub fn cycle(&mut self) -> Duration {
        self.index = (self.index + 1) % self.delays.len();
        self.current()
    }

    /// Frames per second for the current delay, or `None` when paused.
    pub fn frames_per_second(&self) -> Option<f64> {
        let delay = self.current();
        (!delay.is_zero()).then(|| 1.0 / delay.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_at_500ms() {
        let speeds = SpeedSchedule::default();
        assert_eq!(speeds.current(), Duration::from_millis(500));
        assert!(speeds.is_running());
    }

    #[test]
    fn cycle_wraps_through_pause() {
        let mut speeds = SpeedSchedule::default();
        assert_eq!(speeds.cycle(), Duration::from_millis(350));
        assert_eq!(speeds.cycle(), Duration::from_millis(200));
        assert_eq!(speeds.cycle(), Duration::ZERO);
        assert!(!speeds.is_running());
        assert_eq!(speeds.cycle(), Duration::from_millis(500));
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut speeds = SpeedSchedule::new(&[0, 100, 250], 2).unwrap();
        let start = speeds.current();
        for _ in 0..speeds.len() {
            speeds.cycle();
        }
        assert_eq!(speeds.current(), start);
        assert_eq!(speeds.index(), 2);
    }

    #[test]
    fn rejects_empty_list() {
        assert_eq!(SpeedSchedule::new(&[], 0), Err(ConfigError::EmptySpeeds));
    }

    #[test]
    fn rejects_out_of_range_index() {
        assert_eq!(
            SpeedSchedule::new(&[100, 200], 2),
            Err(ConfigError::SpeedIndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn frames_per_second() {
        let speeds = SpeedSchedule::new(&[250, 0], 0).unwrap();
        assert_eq!(speeds.frames_per_second(), Some(4.0));
        let paused = SpeedSchedule::new(&[250, 0], 1).unwrap();
        assert_eq!(paused.frames_per_second(), None);
    }
}
