//! Input formats checked before anything is sent to the backend.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$").unwrap()
});

static ZIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}(-\d{4})?$").unwrap());

static EIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}-\d{7}$").unwrap());

static CARD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{13,16}$").unwrap());

static CVV: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,4}$").unwrap());

static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

pub fn is_phone(value: &str) -> bool {
    PHONE.is_match(value)
}

pub fn is_zip(value: &str) -> bool {
    ZIP.is_match(value)
}

pub fn is_ein(value: &str) -> bool {
    EIN.is_match(value)
}

/// Card number with spaces removed must be 13 to 16 digits.
pub fn is_card_number(value: &str) -> bool {
    CARD.is_match(&strip_spaces(value))
}

pub fn is_cvv(value: &str) -> bool {
    CVV.is_match(value)
}

/// `YYYY-MM-DD` that is also a real calendar date.
pub fn is_iso_date(value: &str) -> bool {
    DATE.is_match(value) && chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Exactly eleven digits, nothing else.
pub fn is_eleven_digit_phone(value: &str) -> bool {
    value.len() == 11 && value.chars().all(|c| c.is_ascii_digit())
}

pub fn strip_spaces(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Group card digits in fours as the user types, capped at 16 digits.
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).take(16).collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
