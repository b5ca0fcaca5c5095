//! Display formatting for money, progress and dates.

use api::Campaign;
use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

pub const NO_GOAL: &str = "No goal set";

/// Whole dollars with thousands separators, `-` sign preserved: `1,234`.
pub fn thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    rounded.to_formatted_string(&Locale::en)
}

/// `$1,234` or `$1,234.50` when there are cents.
pub fn money(value: f64) -> String {
    if !value.is_finite() {
        return "$0".to_string();
    }
    let total_cents = (value.abs() * 100.0).round() as i64;
    let cents = total_cents % 100;
    let sign = if value < 0.0 { "-" } else { "" };
    let whole = (total_cents / 100).to_formatted_string(&Locale::en);
    if cents == 0 {
        format!("{sign}${whole}")
    } else {
        format!("{sign}${whole}.{cents:02}")
    }
}

/// `"$1,200 of $5,000"`, or just the amount raised when there is no goal.
pub fn raised_of_goal(campaign: &Campaign) -> String {
    if campaign.progress_percent().is_some() {
        format!("{} of {}", money(campaign.amount_donated), money(campaign.goal))
    } else {
        format!("{} raised", money(campaign.amount_donated))
    }
}

/// `"24% funded"` or [`NO_GOAL`].
pub fn progress_label(campaign: &Campaign) -> String {
    match campaign.progress_percent() {
        Some(p) => format!("{}% funded", p.round() as i64),
        None => NO_GOAL.to_string(),
    }
}

/// `Jan 31, 2026`
pub fn date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn end_date_label(campaign: &Campaign) -> String {
    campaign
        .end_date()
        .map(date)
        .unwrap_or_else(|| "No end date".to_string())
}
