//! # Form state and validation
//!
//! Every form in the app follows the same cycle: the component keeps a plain
//! form struct in a signal, calls its `validate` method on submit, and only
//! when that returns a request payload does it talk to the backend.
//! Validation failures come back as [`FieldErrors`], keyed by the form's own
//! field names, and are rendered next to the offending inputs.
//!
//! | Module | Form |
//! |--------|------|
//! | [`donation`] | Public donation form |
//! | [`campaign`] | Basic and nonprofit (501(c)(3) / 501(c)(4)) create forms, edit modal |
//! | [`wizard`] | Five-step campaign creation wizard |
//! | [`patterns`] | Shared format checks |

use std::collections::BTreeMap;

pub mod campaign;
pub mod donation;
pub mod patterns;
pub mod wizard;

/// Validation messages keyed by form field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error. The first message for a field wins.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Record `message` under `field` when `value` is blank.
    pub fn require(&mut self, field: &str, value: &str, message: &str) -> bool {
        if value.trim().is_empty() {
            self.add(field, message);
            false
        } else {
            true
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Forget the error for a field once the user edits it.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(value)` when no errors were recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<(String, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse a positive amount, rejecting zero, negatives and non-numbers.
pub fn parse_positive_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// `Some(trimmed)` for non-blank input.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Email is required");
        errors.add("email", "Please enter a valid email");
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_require_and_clear() {
        let mut errors = FieldErrors::new();
        assert!(!errors.require("city", "  ", "City is required"));
        assert!(errors.require("state", "IL", "State is required"));
        assert!(errors.contains("city"));
        errors.clear("city");
        assert!(errors.is_empty());
        assert_eq!(errors.into_result(5), Ok(5));
    }

    #[test]
    fn test_parse_positive_amount() {
        assert_eq!(parse_positive_amount("25"), Some(25.0));
        assert_eq!(parse_positive_amount(" 12.50 "), Some(12.5));
        assert_eq!(parse_positive_amount("0"), None);
        assert_eq!(parse_positive_amount("-3"), None);
        assert_eq!(parse_positive_amount("abc"), None);
        assert_eq!(parse_positive_amount("NaN"), None);
    }
}
