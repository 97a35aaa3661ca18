//! Number formatting for prices, market caps, and percent moves.
//!
//! Shared by the TUI panels and the CLI table output so both render the
//! same value the same way.

/// Currency prefix for the common quote currencies; anything else gets the
/// uppercase code as a prefix.
fn currency_prefix(currency: &str) -> String {
    match currency {
        "usd" => "$".to_string(),
        "eur" => "\u{20ac}".to_string(),
        "gbp" => "\u{a3}".to_string(),
        "jpy" => "\u{a5}".to_string(),
        other => format!("{} ", other.to_uppercase()),
    }
}

/// Spot price: thousands separators above 1000, more precision below $1
/// where the leading digits carry no information.
pub fn price(value: f64, currency: &str) -> String {
    let prefix = currency_prefix(currency);
    if value >= 1000.0 {
        let mut whole = value.trunc() as u64;
        let mut cents = ((value - value.trunc()) * 100.0).round() as u64;
        if cents >= 100 {
            whole += 1;
            cents = 0;
        }
        format!("{prefix}{}.{cents:02}", group_thousands(whole))
    } else if value >= 1.0 {
        format!("{prefix}{value:.2}")
    } else {
        format!("{prefix}{value:.4}")
    }
}

/// Market-cap style compact notation: $1.27T, $68.9B, $820.0M.
pub fn compact(value: f64, currency: &str) -> String {
    let prefix = currency_prefix(currency);
    if value >= 1.0e12 {
        format!("{prefix}{:.2}T", value / 1.0e12)
    } else if value >= 1.0e9 {
        format!("{prefix}{:.1}B", value / 1.0e9)
    } else if value >= 1.0e6 {
        format!("{prefix}{:.1}M", value / 1.0e6)
    } else if value >= 1.0e3 {
        format!("{prefix}{:.1}K", value / 1.0e3)
    } else {
        format!("{prefix}{value:.2}")
    }
}

/// Signed percent with two decimals: +2.35%, -1.82%.
pub fn pct(value: f64) -> String {
    format!("{value:+.2}%")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
