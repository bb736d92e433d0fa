//! Compact number formatting for display
//!
//! | magnitude | output |
//! |---|---|
//! | ≥ 1e9 | `X.YB` |
//! | ≥ 1e6 | `X.YM` |
//! | ≥ 1e3 | `X.YK` |
//! | otherwise | integer with `,` grouping |

/// Render a value with a single magnitude suffix.
///
/// Presentation only; never feeds back into a report.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    if value >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        group_thousands(&format!("{:.0}", value))
    }
}

/// Insert `,` every three digits of a rendered integer.
fn group_thousands(rendered: &str) -> String {
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };

    let mut grouped = String::with_capacity(rendered.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
