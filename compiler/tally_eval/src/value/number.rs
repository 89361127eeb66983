//! Number-to-text and text-to-number rules of the language.

/// Render a number the way programs see it.
///
/// Integral values print without a fractional part, `-0` prints as `0`,
/// and magnitudes outside `[1e-6, 1e21)` use exponent form with an explicit
/// sign (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{n}");
    }

    let exponent_form = format!("{n:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponent_form,
    }
}

/// Parse the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped. The prefix is an optional sign followed
/// by either `Infinity` or a decimal literal (`12`, `12.5`, `.5`, `5.`)
/// with an optional exponent. Trailing text is ignored. Returns `None`
/// when no digits are found.
pub fn parse_numeric_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return Some(if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(s, end);
    end = end.saturating_add(int_digits);
    let mut digits = int_digits;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_digits(s, end.saturating_add(1));
        digits = digits.saturating_add(frac_digits);
        if digits > 0 {
            end = end.saturating_add(1).saturating_add(frac_digits);
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end.saturating_add(1);
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end = exp_end.saturating_add(1);
        }
        let exp_digits = count_digits(s, exp_end);
        // A dangling `e` is not part of the number.
        if exp_digits > 0 {
            end = exp_end.saturating_add(exp_digits);
        }
    }

    s.get(..end)?.parse::<f64>().ok()
}

/// ASCII digits in `s` starting at byte `from`.
fn count_digits(s: &str, from: usize) -> usize {
    s.as_bytes()
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}
