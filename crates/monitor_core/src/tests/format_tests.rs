use super::*;

fn afternoon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 14, 5, 0).single().expect("valid instant")
}

#[test]
fn us_english_uses_month_first_twelve_hour_clock() {
    let formatter = TimestampFormatter::new(Some("en-US"), Zone::utc());
    assert_eq!(formatter.format(afternoon()), "Oct 19, 2026, 02:05 PM");
}

#[test]
fn posix_locale_names_are_accepted() {
    let formatter = TimestampFormatter::new(Some("en_US.UTF-8"), Zone::utc());
    assert_eq!(formatter.locale(), Some(Locale::en_US));
}

#[test]
fn fixed_offset_shifts_the_rendered_time() {
    let zone = Zone::parse_offset("+02:00").expect("offset");
    let formatter = TimestampFormatter::new(Some("en_US"), zone);
    assert_eq!(formatter.format(afternoon()), "Oct 19, 2026, 04:05 PM");
}

#[test]
fn unknown_locale_falls_back_to_generic_pattern() {
    let formatter = TimestampFormatter::new(Some("xx_YY"), Zone::utc());
    assert!(formatter.locale().is_none());
    assert_eq!(formatter.format(afternoon()), "2026-10-19 14:05");
}

#[test]
fn c_locale_means_generic_pattern() {
    assert!(parse_locale("C").is_none());
    assert!(parse_locale("POSIX").is_none());
    assert!(parse_locale("").is_none());
}

#[test]
fn missing_timestamp_renders_placeholder() {
    let formatter = TimestampFormatter::generic(Zone::utc());
    assert_eq!(formatter.format_optional(None), TIMESTAMP_PLACEHOLDER);
    assert_eq!(formatter.format_optional(Some(afternoon())), "2026-10-19 14:05");
}

#[test]
fn garbage_offsets_are_rejected() {
    assert!(Zone::parse_offset("two hours").is_none());
    assert!(Zone::parse_offset("").is_none());
}

#[test]
fn utc_names_parse_as_zero_offset() {
    assert_eq!(Zone::parse_offset("UTC"), Some(Zone::utc()));
    assert_eq!(Zone::parse_offset(" z "), Some(Zone::utc()));
    assert_eq!(Zone::parse_offset("+00:00"), Some(Zone::utc()));
}
