//! Number formatting for report cells.
//!
//! Cost values arrive as JSON numbers and are carried as `f64`.
//! Integral values render with no fractional part; fractional values
//! keep their fraction after the grouped integer digits.

/// Plain decimal string: `90` -> "90", `12.5` -> "12.5".
pub fn format_plain(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Decimal string with digits grouped by 3 from the right:
/// `1234567` -> "1,234,567".
pub fn format_thousands(value: f64) -> String {
    let plain = format_plain(value);
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
