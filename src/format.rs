//! Display formatting for currency, rates and year counts

/// Whole-dollar AUD amount with thousands separators
///
/// Renders the absolute value; the caller decides how to present the sign.
pub fn format_currency(amount: f64) -> String {
    let amount = amount.abs();
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    if amount.is_infinite() {
        return "$∞".to_string();
    }

    format!("${}", group_thousands(&format!("{:.0}", amount.round())))
}

/// Percentage for display
///
/// Loading percentages drop a trailing `.0` (`0.1` → `10%`). MLS rates keep
/// at least one decimal and use two when needed (`0.01` → `1.0%`,
/// `0.0125` → `1.25%`).
pub fn format_percentage(rate: f64, for_loading: bool) -> String {
    if rate == 0.0 {
        return "0%".to_string();
    }

    let pct = rate * 100.0;

    if for_loading {
        let rounded = (pct * 10.0).round() / 10.0;
        if rounded.fract() == 0.0 {
            format!("{:.0}%", rounded)
        } else {
            format!("{:.1}%", rounded)
        }
    } else {
        let two = format!("{:.2}", pct);
        if two.ends_with('0') {
            format!("{:.1}%", pct)
        } else {
            format!("{}%", two)
        }
    }
}

/// "1 year" / "N years"
pub fn format_years(years: f64) -> String {
    let count = if years.fract() == 0.0 {
        format!("{:.0}", years)
    } else {
        format!("{}", years)
    };

    if years == 1.0 {
        format!("{} year", count)
    } else {
        format!("{} years", count)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
