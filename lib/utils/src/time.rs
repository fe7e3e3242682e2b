use chrono::{DateTime, Utc};

use crate::constants::{
    JUST_NOW_STR, SECONDS_IN_DAY, SECONDS_IN_HOUR, SECONDS_IN_MINUTE, SECONDS_IN_MONTH, SECONDS_IN_YEAR,
};

enum TimeScale {
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

impl TimeScale {
    pub fn to_str(&self, is_plural: bool) -> &'static str {
        match self {
            TimeScale::Minutes => if is_plural { "minutes" } else { "minute" },
            TimeScale::Hours => if is_plural { "hours" } else { "hour" },
            TimeScale::Days => if is_plural { "days" } else { "day" },
            TimeScale::Months => if is_plural { "months" } else { "month" },
            TimeScale::Years => if is_plural { "years" } else { "year" },
        }
    }
}

/// Returns a string describing how long ago `timestamp` was, relative to `now`, e.g. "3 hours ago".
///
/// Timestamps in the future are treated as "just now".
pub fn get_elapsed_time_string(
    timestamp: DateTime<Utc>,
    now: DateTime<Utc>,
) -> String {
    let seconds = now.signed_duration_since(timestamp).num_seconds();
    let (value, scale) = match seconds {
        seconds if seconds < SECONDS_IN_MINUTE => return String::from(JUST_NOW_STR),
        seconds if seconds < SECONDS_IN_HOUR => (seconds / SECONDS_IN_MINUTE, TimeScale::Minutes),
        seconds if seconds < SECONDS_IN_DAY => (seconds / SECONDS_IN_HOUR, TimeScale::Hours),
        seconds if seconds < SECONDS_IN_MONTH => (seconds / SECONDS_IN_DAY, TimeScale::Days),
        seconds if seconds < SECONDS_IN_YEAR => (seconds / SECONDS_IN_MONTH, TimeScale::Months),
        seconds => (seconds / SECONDS_IN_YEAR, TimeScale::Years),
    };
    format!("{} {} ago", value, scale.to_str(value > 1))
}
