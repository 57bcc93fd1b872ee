// dq-notifier-core/src/domain/duration.rs

use chrono::{DateTime, Utc};
use std::fmt;

const SECONDS_PER_DAY: i64 = 86_400;

/// Elapsed time of a ruleset run, split into calendar components.
///
/// `days` is floored, so a negative delta (clock skew between `StartedOn`
/// and `CompletedOn`) still yields non-negative hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutionTime {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl ExecutionTime {
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let delta = end - start;

        // Sub-second precision is dropped, rounding towards negative infinity
        let mut total = delta.num_seconds();
        if delta.subsec_nanos() < 0 {
            total -= 1;
        }

        let days = total.div_euclid(SECONDS_PER_DAY);
        let second_of_day = total.rem_euclid(SECONDS_PER_DAY);
        let hours = second_of_day / 3600;
        let remainder = second_of_day % 3600;

        Self {
            days,
            hours,
            minutes: remainder / 60,
            seconds: remainder % 60,
        }
    }
}

impl fmt::Display for ExecutionTime {
    /// Only the non-zero components are written, e.g. `2 hours 5 seconds`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = [
            (self.days, "days"),
            (self.hours, "hours"),
            (self.minutes, "minutes"),
            (self.seconds, "seconds"),
        ];

        let rendered: Vec<String> = components
            .iter()
            .filter(|(value, _)| *value != 0)
            .map(|(value, unit)| format!("{} {}", value, unit))
            .collect();

        f.write_str(&rendered.join(" "))
    }
}

pub fn format_execution_time(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    ExecutionTime::between(start, end).to_string()
}
