/// Value-axis tick label: plain below 1000, then `k` and `M` with one decimal.
///
/// The 1e3 and 1e6 cutoffs are fixed; a value rounding up to the next unit stays in the
/// smaller one (`999_960` prints as `"1,000.0k"`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value < 1_000.0 {
        plain(value)
    } else if value < 1_000_000.0 {
        format!("{}k", group_thousands(&format!("{:.1}", value / 1_000.0)))
    } else if value >= 1_000_000.0 {
        format!("{}M", group_thousands(&format!("{:.1}", value / 1_000_000.0)))
    } else {
        // NaN
        plain(value)
    }
}

/// Thousands-grouped value for tooltips, e.g. `1234567` -> `"1,234,567"`.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return plain(value);
    }
    group_thousands(&plain(value))
}

/// Shortest decimal form with at most 12 significant digits; integers print without a fraction.
fn plain(value: f64) -> String {
    if !value.is_finite() || value.fract() == 0.0 {
        return format!("{value}");
    }
    let int_digits = (value.abs().log10().floor() as i32 + 1).max(1);
    let decimals = (12 - int_digits).max(0) as usize;
    let text = format!("{value:.decimals$}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Inserts `,` every three digits in the integer part of a decimal string.
fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(i) => unsigned.split_at(i),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}{frac_part}")
}
