/// Character appended to labels that had to be shortened.
pub const ELLIPSIS: char = '\u{2026}';

/// Result of fitting a label into a maximum width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FittedText {
    /// Text to draw, ending in exactly one [`ELLIPSIS`] when `truncated`.
    pub text: String,
    /// Whether characters were dropped.
    pub truncated: bool,
}

/// Shrink `text` one trailing character at a time until it fits in `max_width`.
///
/// A label that already fits is returned unchanged. Otherwise each candidate is measured
/// together with its ellipsis, so the result fits whenever any non-empty prefix does; when
/// none does, the result is the lone ellipsis. `measure` is called at most
/// `chars + 1` times.
pub fn fit_to_width<E>(
    text: &str,
    max_width: f64,
    mut measure: impl FnMut(&str) -> Result<f64, E>,
) -> Result<FittedText, E> {
    let max_width = if max_width.is_nan() { 0.0 } else { max_width };
    if text.is_empty() || measure(text)? <= max_width {
        return Ok(FittedText {
            text: text.to_string(),
            truncated: false,
        });
    }

    let mut label = text.to_string();
    let mut candidate = String::with_capacity(label.len() + ELLIPSIS.len_utf8());
    while label.pop().is_some() {
        candidate.clear();
        candidate.push_str(&label);
        candidate.push(ELLIPSIS);
        if measure(&candidate)? <= max_width {
            break;
        }
    }

    label.push(ELLIPSIS);
    Ok(FittedText {
        text: label,
        truncated: true,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/fit.rs"]
mod tests;
