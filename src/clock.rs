//! Wall-clock frame timing.

use std::time::Instant;

/// Per-frame delta clock. The first tick establishes the baseline and
/// reports zero, so startup latency never lands in the physics step.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds elapsed since the previous call; 0.0 on the first call.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = match self.last {
            Some(prev) => now.duration_since(prev).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(), 0.0);
    }

    #[test]
    fn test_later_ticks_measure_elapsed_time() {
        let mut clock = FrameClock::new();
        clock.tick();
        thread::sleep(Duration::from_millis(10));
        let dt = clock.tick();
        assert!(dt >= 0.009);
    }

    #[test]
    fn test_ticks_are_never_negative() {
        let mut clock = FrameClock::new();
        for _ in 0..100 {
            assert!(clock.tick() >= 0.0);
        }
    }
}
