//! Where update timestamps come from.
//!
use chrono::{DateTime, TimeDelta, Utc};

pub trait Clock {
    fn now(&mut self) -> DateTime<Utc>;
}

/// Wall clock.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&mut self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock, returns `start`, `start + step`, `start + 2 * step`…
///
#[derive(Clone, Copy, Debug)]
pub struct StepClock {
    next: DateTime<Utc>,
    step: TimeDelta,
}

impl StepClock {
    pub fn new(start: DateTime<Utc>, step: TimeDelta) -> Self {
        StepClock { next: start, step }
    }
}

impl Clock for StepClock {
    fn now(&mut self) -> DateTime<Utc> {
        let tm = self.next;
        self.next += self.step;
        tm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_step_clock() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut clock = StepClock::new(start, TimeDelta::seconds(3));

        assert_eq!(start, clock.now());
        assert_eq!(start + TimeDelta::seconds(3), clock.now());
        assert_eq!(start + TimeDelta::seconds(6), clock.now());
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let mut clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
