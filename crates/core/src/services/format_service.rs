//! Display-only formatting. Nothing here is ever fed back into aggregation:
//! metrics are computed on raw values first and formatted last.

/// Symbol for the currency codes the dashboard knows; `None` otherwise.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_uppercase().as_str() {
        "USD" | "AUD" | "CAD" | "NZD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "INR" => Some("₹"),
        "JPY" | "CNY" => Some("¥"),
        "PLN" => Some("zł"),
        _ => None,
    }
}

/// Group the integer digits of an already rounded, non-negative number.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount as currency with two decimals and thousands separators,
/// e.g. `1234.5` in USD → `"$1,234.50"`, `-50` → `"-$50.00"`.
/// Unknown codes are written as a prefix: `"CHF 1,234.50"`.
pub fn format_currency(amount: f64, currency_code: &str) -> String {
    if !amount.is_finite() {
        return "—".to_string();
    }

    let rounded = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let body = format!("{}.{}", group_thousands(int_part), frac_part);

    // -0.004 rounds to 0.00 and must not print as "-$0.00"
    let negative = amount < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };

    match currency_symbol(currency_code) {
        Some(symbol) => format!("{sign}{symbol}{body}"),
        None => format!("{sign}{} {body}", currency_code.to_uppercase()),
    }
}

/// Format a ratio (0.6 = 60%) as a percentage with one decimal: `"60.0%"`.
pub fn format_percentage(ratio: f64) -> String {
    if !ratio.is_finite() {
        return "—".to_string();
    }
    format!("{:.1}%", ratio * 100.0)
}

/// Format a signed percentage change (already in percent): `"+12.5%"`, `"-3.0%"`.
pub fn format_percentage_change(percent: f64) -> String {
    if !percent.is_finite() {
        return "—".to_string();
    }
    let sign = if percent > 0.0 { "+" } else { "" };
    format!("{sign}{percent:.1}%")
}
