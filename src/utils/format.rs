//! Display formatting for amounts, dates and ratios.
//!
//! Everything here is pure: the same input always yields the same string.
//! Amounts use the Korean unit ladder, 원 → 억 (10^8) → 조 (10^12).

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

/// 1억 in base units.
pub const EOK: i64 = 100_000_000;
/// 1조 in base units.
pub const JO: i64 = 10_000 * EOK;
/// Chart values are expressed in this many base units (백만원).
pub const CHART_UNIT: i64 = 1_000_000;

const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Formats an amount of base currency units for the result table.
///
/// `150_000_000` → `1.50억원`, `1_000_000_000_000` → `1.00조원`,
/// `5_000` → `5,000원`. Negative amounts never reach a tier and are
/// printed as grouped integers (`-150,000,000원`).
pub fn format_amount(amount: i64) -> String {
    if amount == 0 {
        return "0원".to_string();
    }

    if amount >= JO {
        format!("{:.2}조원", amount as f64 / JO as f64)
    } else if amount >= EOK {
        format!("{:.2}억원", amount as f64 / EOK as f64)
    } else {
        format!("{}원", group_thousands(amount))
    }
}

/// Formats a chart value that is already expressed in [`CHART_UNIT`]s.
pub fn format_chart_amount(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let eok = value / 100.0;
    let jo = eok / 10_000.0;

    if jo >= 1.0 {
        format!("{:.1}조", jo)
    } else if eok >= 1.0 {
        format!("{:.1}억", eok)
    } else {
        group_decimal(value)
    }
}

/// Renders an ISO-8601 timestamp as `YYYY. MM. DD. 오전|오후 hh:mm`.
///
/// Offsets are kept as given rather than converted to the local zone.
/// Anything that does not parse comes back unchanged.
pub fn format_date(input: &str) -> String {
    match parse_timestamp(input.trim()) {
        Some(ts) => {
            let (is_pm, hour) = ts.hour12();
            format!(
                "{:04}. {:02}. {:02}. {} {:02}:{:02}",
                ts.year(),
                ts.month(),
                ts.day(),
                if is_pm { "오후" } else { "오전" },
                hour,
                ts.minute()
            )
        }
        None => input.to_string(),
    }
}

fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Some(ts.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Share of `part` in `total`, in percent. Not clamped: accounting
/// components can exceed the total or be negative.
pub fn calculate_percentage(part: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64) * 100.0
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// The `count` calendar years ending with the current one, ascending.
pub fn recent_years(count: usize) -> Vec<i32> {
    recent_years_ending(count, Local::now().year())
}

pub fn recent_years_ending(count: usize, end_year: i32) -> Vec<i32> {
    let count = i32::try_from(count).unwrap_or(i32::MAX);
    if count == 0 {
        return Vec::new();
    }
    (end_year.saturating_sub(count - 1)..=end_year).collect()
}

/// `1234567` → `1,234,567`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// Grouped integer part, up to three fractional digits with trailing zeros dropped.
fn group_decimal(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let int_value: i64 = int_part.parse().unwrap_or(0);

    let mut out = String::new();
    if value < 0.0 && (int_value != 0 || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_value));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
