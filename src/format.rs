//! Display formatting helpers

use chrono::NaiveDate;

use crate::model::{Rupees, TRUST_SCORE_MAX, TRUST_SCORE_MIN};

/// Full stroke length of the gauge arc (SVG `stroke-dasharray`)
pub const GAUGE_DASH_LENGTH: f64 = 251.32;

/// Portion of the arc a perfect score fills
const GAUGE_SWEEP: f64 = 0.7;

/// Format rupees the Indian way: `₹1,00,000`, no fraction digits.
pub fn format_currency(amount: Rupees) -> String {
    let digits = amount.unsigned_abs().to_string();
    let grouped = group_indian(&digits);
    if amount < 0 {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Lakh/crore grouping: last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Long date, e.g. `15 March 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Format an ISO `YYYY-MM-DD` string, passing unparseable input through
pub fn format_date_str(value: &str) -> String {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(format_date)
        .unwrap_or_else(|_| value.to_string())
}

/// `stroke-dashoffset` for a trust score gauge.
///
/// Scores are normalised over 300..=900 and clamped, then mapped onto the
/// visible 70% sweep of the arc.
pub fn gauge_dash_offset(score: u16) -> f64 {
    let range = f64::from(TRUST_SCORE_MAX - TRUST_SCORE_MIN);
    let normalized = ((f64::from(score) - f64::from(TRUST_SCORE_MIN)) / range).clamp(0.0, 1.0);
    GAUGE_DASH_LENGTH * (1.0 - normalized * GAUGE_SWEEP)
}

/// Band name shown under the gauge
pub fn trust_band(score: u16) -> &'static str {
    match score {
        800.. => "Excellent",
        750..=799 => "Very Good",
        700..=749 => "Good",
        650..=699 => "Fair",
        _ => "Poor",
    }
}

/// Size in kilobytes with one decimal, e.g. `12.5 KB`
pub fn format_file_size(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// Relative label for activity feed entries
pub fn relative_day_label(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();
    match days {
        i64::MIN..=-1 => format_date(date),
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=29 => format!("{} days ago", days),
        30..=364 => plural(days / 30, "month"),
        _ => plural(days / 365, "year"),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}
