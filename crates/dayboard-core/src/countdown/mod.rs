//! Countdown decomposition of a remaining duration.
//!
//! `Countdown` is the pure calendar/clock breakdown of (target - now);
//! [`CountdownEngine`](engine::CountdownEngine) drives it on a caller-owned
//! tick. A target at or before now is the terminal past state, not
//! "0 seconds remaining and counting".

mod engine;

pub use engine::CountdownEngine;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Remaining time to a target instant, decomposed for display.
///
/// `days` is unbounded whole days; `hours` is the 0-23 remainder,
/// `minutes` and `seconds` the 0-59 remainders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub is_past: bool,
}

impl Countdown {
    /// The terminal state: target reached or gone.
    pub const PAST: Countdown = Countdown {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        is_past: true,
    };

    /// Decompose the duration from `now` to `target`.
    ///
    /// Target exactly equal to now counts as past.
    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Countdown {
        let total_secs = (target - now).num_seconds();
        if total_secs <= 0 {
            return Countdown::PAST;
        }
        Countdown {
            days: total_secs / 86_400,
            hours: total_secs % 86_400 / 3_600,
            minutes: total_secs % 3_600 / 60,
            seconds: total_secs % 60,
            is_past: false,
        }
    }

    /// Decompose the duration from wall-clock now to `target`.
    pub fn until(target: DateTime<Utc>) -> Countdown {
        Countdown::between(target, Utc::now())
    }
}

/// Display-only severity banding for a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Target has passed.
    Past,
    /// Under 3 days remaining.
    Critical,
    /// Under 7 days remaining.
    Soon,
    /// A week or more away.
    Comfortable,
}

impl Urgency {
    pub fn of(countdown: &Countdown) -> Urgency {
        if countdown.is_past {
            Urgency::Past
        } else if countdown.days < 3 {
            Urgency::Critical
        } else if countdown.days < 7 {
            Urgency::Soon
        } else {
            Urgency::Comfortable
        }
    }
}

/// Parse a user-supplied instant: RFC 3339, or a bare `YYYY-MM-DD`
/// interpreted as local midnight.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Local
        .from_local_datetime(&midnight)
        .single()
        .map(|local| local.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn target_before_now_is_past_zeros() {
        let cd = Countdown::between(base() - Duration::hours(5), base());
        assert_eq!(cd, Countdown::PAST);
    }

    #[test]
    fn target_equal_to_now_is_past() {
        assert_eq!(Countdown::between(base(), base()), Countdown::PAST);
    }

    #[test]
    fn one_second_out() {
        let cd = Countdown::between(base() + Duration::seconds(1), base());
        assert_eq!(
            cd,
            Countdown {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 1,
                is_past: false
            }
        );
    }

    #[test]
    fn mixed_decomposition() {
        // 2 days, 3 hours, 4 minutes, 5 seconds
        let offset = Duration::days(2) + Duration::hours(3) + Duration::minutes(4) + Duration::seconds(5);
        let cd = Countdown::between(base() + offset, base());
        assert_eq!((cd.days, cd.hours, cd.minutes, cd.seconds), (2, 3, 4, 5));
        assert!(!cd.is_past);
    }

    #[test]
    fn days_have_no_upper_bound() {
        let cd = Countdown::between(base() + Duration::days(400), base());
        assert_eq!(cd.days, 400);
    }

    #[test]
    fn urgency_bands() {
        let at = |days| Countdown::between(base() + Duration::days(days) + Duration::hours(1), base());
        assert_eq!(Urgency::of(&Countdown::PAST), Urgency::Past);
        assert_eq!(Urgency::of(&at(0)), Urgency::Critical);
        assert_eq!(Urgency::of(&at(2)), Urgency::Critical);
        assert_eq!(Urgency::of(&at(3)), Urgency::Soon);
        assert_eq!(Urgency::of(&at(6)), Urgency::Soon);
        assert_eq!(Urgency::of(&at(7)), Urgency::Comfortable);
    }

    #[test]
    fn parse_instant_accepts_rfc3339_and_dates() {
        assert!(parse_instant("2025-06-01T10:30:00Z").is_some());
        assert!(parse_instant("2025-06-01T10:30:00+03:00").is_some());
        assert!(parse_instant("2025-06-01").is_some());
        assert!(parse_instant("next tuesday").is_none());
        assert!(parse_instant("").is_none());
    }

    proptest! {
        #[test]
        fn decomposition_bounds_and_reconstruction(total_secs in 1i64..500_000_000) {
            let now = base();
            let target = now + Duration::seconds(total_secs);
            let cd = Countdown::between(target, now);
            prop_assert!(!cd.is_past);
            prop_assert!((0..24).contains(&cd.hours));
            prop_assert!((0..60).contains(&cd.minutes));
            prop_assert!((0..60).contains(&cd.seconds));
            let rebuilt = cd.days * 86_400 + cd.hours * 3_600 + cd.minutes * 60 + cd.seconds;
            prop_assert_eq!(rebuilt, total_secs);
        }
    }
}
