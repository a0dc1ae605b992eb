use super::*;

#[test]
fn clock_formats_minutes_and_seconds() {
    assert_eq!(format_clock(0), "00:00");
    assert_eq!(format_clock(120_000), "02:00");
    assert_eq!(format_clock(243_000), "04:03");
    assert_eq!(format_clock(59_999), "00:59");
    assert_eq!(format_clock(7_507_000), "125:07");
}

#[test]
fn short_clock_drops_minute_padding() {
    assert_eq!(format_clock_short(0), "0:00");
    assert_eq!(format_clock_short(243_000), "4:03");
    assert_eq!(format_clock_short(605_000), "10:05");
}

#[test]
fn zero_duration_is_zero_fraction() {
    assert_eq!(progress_fraction(0, 0), 0.0);
    assert_eq!(progress_fraction(5_000, 0), 0.0);
}

#[test]
fn fraction_is_clamped_and_monotonic() {
    assert_eq!(progress_fraction(300_000, 243_000), 1.0);

    let duration = 243_000u64;
    let mut prev = 0.0;
    for progress in (0..=duration).step_by(1_000) {
        let f = progress_fraction(progress, duration);
        assert!((0.0..=1.0).contains(&f));
        assert!(f >= prev);
        prev = f;
    }
}
