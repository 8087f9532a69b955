//! Leading-number parsing for computed style values.
//!
//! Computed values such as `16px`, `1.5rem` or `8px 4px` are compared by
//! their leading numeral only. The unit is dropped, so `1em` and `1px`
//! compare equal.

use std::cmp::Ordering;

/// Parse the leading floating point number of `value`, ignoring any
/// trailing unit or text. Leading whitespace is skipped.
///
/// Returns `None` when the value does not start with a number.
pub fn leading_float(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 || int_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Only consume an exponent when digits follow it: `1e` stays `1`.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

/// Parse the leading base-10 integer of `value`. A fractional part is
/// truncated: `550.5` yields `550`.
pub fn leading_integer(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    s[..sign + digits].parse().ok()
}

/// Ascending order on optional magnitudes. Values without a magnitude sort
/// after every value with one and compare equal among themselves, so a
/// stable sort keeps their discovery order.
pub fn cmp_magnitude(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending counterpart of [`cmp_magnitude`]; values without a magnitude
/// still sort last.
pub fn cmp_magnitude_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        _ => cmp_magnitude(a, b),
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
