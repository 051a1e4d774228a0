use chrono::{Duration, Utc};
use parking_lot::RwLock;
use quoter_core::Timestamp;
use quoter_ports::Clock;
use std::sync::Arc;

/// Manually controlled clock
///
/// Time stands still until `advance` or `set_time` is called. Clones share
/// the same underlying time, so a test can hold one handle while the quote
/// manager reads through another.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    current: Arc<RwLock<Timestamp>>,
}

impl SimulationClock {
    /// Create a clock frozen at a specific time
    pub fn at(time: Timestamp) -> Self {
        Self {
            current: Arc::new(RwLock::new(time)),
        }
    }

    /// Create a clock frozen at the current wall time
    pub fn fixed() -> Self {
        Self::at(Utc::now())
    }

    /// Move time forward (or backward, for a negative duration)
    pub fn advance(&self, duration: Duration) {
        *self.current.write() += duration;
    }

    /// Jump to a specific time
    pub fn set_time(&self, time: Timestamp) {
        *self.current.write() = time;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::fixed()
    }
}

impl Clock for SimulationClock {
    fn now(&self) -> Timestamp {
        *self.current.read()
    }

    fn name(&self) -> &str {
        "SimulationClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_does_not_move() {
        let clock = SimulationClock::fixed();
        let t1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(clock.now(), t1);
    }

    #[test]
    fn test_advance_and_set_time() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clock = SimulationClock::at(start);

        clock.advance(Duration::minutes(5));
        assert_eq!(clock.now(), start + Duration::minutes(5));

        clock.set_time(start);
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_clones_share_time() {
        let clock = SimulationClock::fixed();
        let other = clock.clone();

        clock.advance(Duration::seconds(30));
        assert_eq!(other.now(), clock.now());
    }
}
