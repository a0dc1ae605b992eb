use std::convert::Infallible;

use super::*;

fn mono(px_per_char: f64) -> impl FnMut(&str) -> Result<f64, Infallible> {
    move |s: &str| Ok(s.chars().count() as f64 * px_per_char)
}

fn ellipsis_count(s: &str) -> usize {
    s.chars().filter(|&c| c == ELLIPSIS).count()
}

#[test]
fn fitting_text_is_unchanged() {
    let out = fit_to_width("Midnight City", 130.0, mono(10.0)).unwrap();
    assert_eq!(out.text, "Midnight City");
    assert!(!out.truncated);

    let out = fit_to_width("", 0.0, mono(10.0)).unwrap();
    assert_eq!(out.text, "");
    assert!(!out.truncated);
}

#[test]
fn overflowing_text_gets_single_ellipsis() {
    let out = fit_to_width("Midnight City", 100.0, mono(10.0)).unwrap();
    assert!(out.truncated);
    assert_eq!(out.text, "Midnight \u{2026}");
    assert!(out.text.chars().count() as f64 * 10.0 <= 100.0);
}

#[test]
fn two_hundred_chars_at_narrow_width() {
    let title: String = "abcdefghij".repeat(20);
    let out = fit_to_width(&title, 55.0, mono(10.0)).unwrap();
    assert!(out.text.ends_with(ELLIPSIS));
    assert_eq!(ellipsis_count(&out.text), 1);
    assert_eq!(out.text, "abcd\u{2026}");
}

#[test]
fn width_below_one_ellipsis_terminates_with_lone_ellipsis() {
    let out = fit_to_width("M83", 3.0, mono(10.0)).unwrap();
    assert_eq!(out.text, "\u{2026}");
    assert!(out.truncated);

    let out = fit_to_width("M83", -5.0, mono(10.0)).unwrap();
    assert_eq!(out.text, "\u{2026}");

    let out = fit_to_width("M83", f64::NAN, mono(10.0)).unwrap();
    assert_eq!(out.text, "\u{2026}");
}

#[test]
fn measure_calls_bounded_by_char_count() {
    for (text, width) in [("hello world", 42.0), ("x", 0.0), ("ünïcødé ☃", 20.0)] {
        let mut calls = 0usize;
        let out = fit_to_width(text, width, |s: &str| {
            calls += 1;
            Ok::<_, Infallible>(s.chars().count() as f64 * 10.0)
        })
        .unwrap();
        assert!(calls <= text.chars().count() + 1, "{text}: {calls} calls");

        let label: String = out.text.trim_end_matches(ELLIPSIS).to_string();
        assert!(label.is_empty() || label.chars().count() as f64 * 10.0 <= width);
    }
}

#[test]
fn fitting_is_idempotent() {
    let texts = ["Midnight City", "M83", "", "a", "Hurry Up, We're Dreaming"];
    for text in texts {
        for width in [0.0, 5.0, 10.0, 35.0, 80.0, 500.0] {
            let once = fit_to_width(text, width, mono(10.0)).unwrap();
            let twice = fit_to_width(&once.text, width, mono(10.0)).unwrap();
            assert_eq!(once.text, twice.text, "text={text:?} width={width}");
        }
    }
}

#[test]
fn proportional_widths_respect_limit() {
    let widths = |s: &str| -> Result<f64, Infallible> {
        Ok(s.chars()
            .map(|c| match c {
                'W' | 'M' => 18.0,
                'i' | 'l' | '.' => 4.0,
                '\u{2026}' => 12.0,
                _ => 9.0,
            })
            .sum())
    };
    let out = fit_to_width("WWWMMMiiilll....", 80.0, widths).unwrap();
    assert!(out.truncated);
    assert!(widths(&out.text).unwrap() <= 80.0);
}

#[test]
fn measure_errors_propagate() {
    let res = fit_to_width("abc", 10.0, |_s: &str| Err::<f64, &str>("no font"));
    assert_eq!(res.unwrap_err(), "no font");
}
