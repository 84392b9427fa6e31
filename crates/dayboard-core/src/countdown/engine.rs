//! Countdown engine implementation.
//!
//! The engine is wall-clock-based and owns no thread -- the caller is
//! responsible for calling `tick()` periodically (1 Hz while a countdown
//! is on screen). Each tick recomputes from "now" rather than decrementing
//! a counter, so ticks never accumulate drift and the display survives
//! clock changes and suspend/resume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{parse_instant, Countdown};

/// Caller-ticked countdown to a fixed target instant.
///
/// Once the target passes, the engine is done: every further tick returns
/// the terminal past state and the caller may stop ticking (no further
/// transitions are possible).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownEngine {
    target: DateTime<Utc>,
    done: bool,
}

impl CountdownEngine {
    /// Create an engine counting down to `target`.
    pub fn new(target: DateTime<Utc>) -> Self {
        Self {
            target,
            done: false,
        }
    }

    /// Create an engine from raw user input. An unparseable instant is
    /// treated as already past rather than an error.
    pub fn from_input(raw: &str) -> Self {
        match parse_instant(raw) {
            Some(target) => Self::new(target),
            None => Self::new(DateTime::<Utc>::MIN_UTC),
        }
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Terminal: the target has been observed at or before "now".
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Recompute the countdown from wall-clock now.
    pub fn tick(&mut self) -> Countdown {
        self.tick_at(Utc::now())
    }

    /// Recompute against an explicit "now" (tests, replay).
    pub fn tick_at(&mut self, now: DateTime<Utc>) -> Countdown {
        let countdown = Countdown::between(self.target, now);
        if countdown.is_past {
            self.done = true;
        }
        countdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn ticks_recompute_from_now_not_from_a_counter() {
        let mut engine = CountdownEngine::new(base() + Duration::seconds(90));
        let first = engine.tick_at(base());
        assert_eq!((first.minutes, first.seconds), (1, 30));

        // A 40-second "suspend" between ticks is absorbed, not drifted past.
        let second = engine.tick_at(base() + Duration::seconds(40));
        assert_eq!((second.minutes, second.seconds), (0, 50));
        assert!(!engine.is_done());
    }

    #[test]
    fn reaching_the_target_is_terminal() {
        let mut engine = CountdownEngine::new(base() + Duration::seconds(10));
        assert!(!engine.tick_at(base()).is_past);

        let done = engine.tick_at(base() + Duration::seconds(10));
        assert_eq!(done, Countdown::PAST);
        assert!(engine.is_done());

        // Further ticks stay in the terminal state.
        assert_eq!(engine.tick_at(base() + Duration::days(1)), Countdown::PAST);
        assert!(engine.is_done());
    }

    #[test]
    fn unparseable_input_counts_as_already_past() {
        let mut engine = CountdownEngine::from_input("tomorrow-ish");
        assert_eq!(engine.tick_at(base()), Countdown::PAST);
        assert!(engine.is_done());
    }

    #[test]
    fn valid_input_counts_down() {
        let mut engine = CountdownEngine::from_input("2099-01-01T00:00:00Z");
        assert!(!engine.tick_at(base()).is_past);
    }
}
