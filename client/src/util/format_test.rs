use super::*;

const NOW: f64 = 1_760_000_000_000.0;

#[test]
fn relative_age_buckets_by_magnitude() {
    assert_eq!(relative_age(NOW - 30_000.0, NOW), RelativeAge::JustNow);
    assert_eq!(relative_age(NOW - 5.0 * MINUTE_MS, NOW), RelativeAge::Minutes(5));
    assert_eq!(relative_age(NOW - 3.5 * HOUR_MS, NOW), RelativeAge::Hours(3));
    assert_eq!(relative_age(NOW - 2.0 * DAY_MS, NOW), RelativeAge::Days(2));
}

#[test]
fn relative_age_treats_future_as_just_now() {
    assert_eq!(relative_age(NOW + HOUR_MS, NOW), RelativeAge::JustNow);
}

#[test]
fn browser_clock_is_absent_outside_hydrate() {
    assert_eq!(now_ms(), None);
    assert_eq!(parse_timestamp_ms("2026-10-01T08:00:00Z"), None);
    assert!(now_iso().starts_with("1970-01-01"));
}

#[test]
fn short_date_strips_time_component() {
    assert_eq!(short_date("2026-10-01T08:00:00"), "2026-10-01");
    assert_eq!(short_date("2026-10-01 08:00:00"), "2026-10-01");
    assert_eq!(short_date("2026-10-01"), "2026-10-01");
}

#[test]
fn percent_rounds_and_handles_empty_total() {
    assert_eq!(percent(0, 0), 0);
    assert_eq!(percent(1, 3), 33);
    assert_eq!(percent(2, 3), 67);
    assert_eq!(percent(5, 5), 100);
}
