//! Display formatting for timestamps and numbers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MINUTE_MS: f64 = 60_000.0;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;

/// Coarse age of a timestamp relative to now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelativeAge {
    JustNow,
    Minutes(u32),
    Hours(u32),
    Days(u32),
}

/// Bucket the distance between `then_ms` and `now_ms`. Future timestamps
/// (clock skew) read as "just now".
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn relative_age(then_ms: f64, now_ms: f64) -> RelativeAge {
    let delta = (now_ms - then_ms).max(0.0);
    if delta < MINUTE_MS {
        RelativeAge::JustNow
    } else if delta < HOUR_MS {
        RelativeAge::Minutes((delta / MINUTE_MS).floor() as u32)
    } else if delta < DAY_MS {
        RelativeAge::Hours((delta / HOUR_MS).floor() as u32)
    } else {
        RelativeAge::Days((delta / DAY_MS).floor() as u32)
    }
}

/// Milliseconds since the epoch for an ISO-8601 timestamp, browser only.
pub fn parse_timestamp_ms(iso: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        let ms = js_sys::Date::parse(iso);
        (!ms.is_nan()).then_some(ms)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = iso;
        None
    }
}

/// Current time in milliseconds since the epoch, browser only.
pub fn now_ms() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        Some(js_sys::Date::now())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Current time as an ISO-8601 string.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "1970-01-01T00:00:00.000Z".to_owned()
    }
}

/// Calendar date portion (`YYYY-MM-DD`) of an ISO timestamp.
#[must_use]
pub fn short_date(iso: &str) -> &str {
    iso.split(['T', ' ']).next().unwrap_or(iso)
}

/// Whole-number percentage, clamped to `0..=100`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = part as f64 / total as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u32
}
