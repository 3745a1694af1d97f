//! Human-readable rendering of a minute count.

const MINUTES_PER_HOUR: f64 = 60.0;
const MINUTES_PER_DAY: f64 = 24.0 * MINUTES_PER_HOUR;

/// Render a non-negative minute count the way the duration field shows it.
///
/// - under an hour: `"<m> minutes"`, rounded to one decimal
/// - under a day: `"<h> hour(s)"` when the remainder rounds to zero,
///   otherwise `"<h>h <m>m"`
/// - a day or more: `"<d> day(s)"`, or `"<d> day(s) <h>h"` with leftover
///   hours (leftover minutes are dropped)
pub fn format_minutes(total: f64) -> String {
    if total < MINUTES_PER_HOUR {
        return format!("{} minutes", (total * 10.0).round() / 10.0);
    }

    if total < MINUTES_PER_DAY {
        let hours = (total / MINUTES_PER_HOUR).floor();
        // Not carried into hours: 119.6 renders as "1h 60m".
        let minutes = (total % MINUTES_PER_HOUR).round();
        if minutes == 0.0 {
            return format!("{} {}", hours, plural(hours, "hour"));
        }
        return format!("{}h {}m", hours, minutes);
    }

    let days = (total / MINUTES_PER_DAY).floor();
    let hours = ((total % MINUTES_PER_DAY) / MINUTES_PER_HOUR).floor();
    if hours == 0.0 {
        format!("{} {}", days, plural(days, "day"))
    } else {
        format!("{} {} {}h", days, plural(days, "day"), hours)
    }
}

fn plural(count: f64, unit: &str) -> String {
    if count == 1.0 {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}
