//! Display formatting for operand buffers.

use tracing::instrument;

const GROUP_SEPARATOR: char = ',';

/// Formats a numeric string for display.
///
/// The integer part gets thousands separators; the fractional part, if any,
/// is appended verbatim after a `.`. An integer part that is not a number
/// (such as `""` or a lone `-`) renders as empty.
///
/// ```
/// use strictly_calculator::format_display;
///
/// assert_eq!(format_display("1234567.890"), "1,234,567.890");
/// assert_eq!(format_display("-1000"), "-1,000");
/// assert_eq!(format_display(""), "");
/// ```
#[instrument]
pub fn format_display(number: &str) -> String {
    let (integer, fraction) = match number.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (number, None),
    };

    let integer_display = group_integer(integer).unwrap_or_default();

    match fraction {
        Some(fraction) => format!("{integer_display}.{fraction}"),
        None => integer_display,
    }
}

/// Groups the digits of a signed integer string, or `None` if it is not one.
fn group_integer(integer: &str) -> Option<String> {
    let (sign, digits) = match integer.as_bytes().first()? {
        b'-' => ("-", &integer[1..]),
        b'+' => ("", &integer[1..]),
        _ => ("", integer),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() { "0" } else { significant };

    let mut grouped = String::with_capacity(sign.len() + significant.len() * 4 / 3);
    grouped.push_str(sign);
    for (i, digit) in significant.chars().enumerate() {
        if i > 0 && (significant.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    Some(grouped)
}
