//! # Donation form
//!
//! [`DonationForm`] holds every input of the public donation page as typed
//! text. [`DonationForm::validate`] either produces the flattened
//! [`DonationRequest`] for `POST /donate` or a [`FieldErrors`] map keyed by the
//! form's own field names (`firstName`, `zip`, `customAmount`, ...).
//!
//! Server-side failures go through [`SubmitFailure::from_api_error`]: a
//! structured `errors` list is mapped back onto form fields (`zip_code`
//! becomes `zip`) under the banner "Please fix the following errors:",
//! otherwise the backend's message is shown, otherwise a generic payment
//! failure.

use api::{ApiError, DonationRequest, DEFAULT_CAUSE};
use chrono::Datelike;

use super::patterns::{is_card_number, is_cvv, is_email, is_phone, is_zip, strip_spaces};
use super::{parse_positive_amount, FieldErrors};

pub const AMOUNT_PRESETS: [u32; 5] = [10, 25, 50, 100, 250];

pub const CUSTOM_AMOUNT: &str = "custom";

pub const FIX_ERRORS_BANNER: &str = "Please fix the following errors:";
pub const PAYMENT_FAILED: &str = "Payment processing failed. Please try again.";

/// Cause tags a donor can attach to a gift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cause {
    Climate,
    Healthcare,
    Education,
    Equality,
    Economy,
    Democracy,
    Immigration,
    Housing,
}

impl Cause {
    pub const ALL: [Cause; 8] = [
        Cause::Climate,
        Cause::Healthcare,
        Cause::Education,
        Cause::Equality,
        Cause::Economy,
        Cause::Democracy,
        Cause::Immigration,
        Cause::Housing,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Cause::Climate => "climate",
            Cause::Healthcare => "healthcare",
            Cause::Education => "education",
            Cause::Equality => "equality",
            Cause::Economy => "economy",
            Cause::Democracy => "democracy",
            Cause::Immigration => "immigration",
            Cause::Housing => "housing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Cause::Climate => "Climate Action",
            Cause::Healthcare => "Healthcare",
            Cause::Education => "Education",
            Cause::Equality => "Social Justice",
            Cause::Economy => "Economic Justice",
            Cause::Democracy => "Voting Rights",
            Cause::Immigration => "Immigration Reform",
            Cause::Housing => "Affordable Housing",
        }
    }
}

/// Party styling for the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Party {
    #[default]
    All,
    Democratic,
    Republican,
}

impl Party {
    pub fn from_query(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "democratic" => Party::Democratic,
            "republican" => Party::Republican,
            _ => Party::All,
        }
    }

    pub fn button_class(&self) -> &'static str {
        match self {
            Party::Democratic => "bg-gradient-to-r from-blue-500 to-blue-600 hover:from-blue-600 hover:to-blue-700 text-white",
            Party::Republican => "bg-gradient-to-r from-red-500 to-red-600 hover:from-red-600 hover:to-red-700 text-white",
            Party::All => "bg-gradient-to-r from-gray-500 to-gray-600 hover:from-gray-600 hover:to-gray-700 text-white",
        }
    }
}

pub const US_STATES: [(&str, &str); 51] = [
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Two-digit expiry months `01`..`12`.
pub fn expiry_months() -> Vec<String> {
    (1..=12).map(|m| format!("{m:02}")).collect()
}

/// Expiry years from `current_year` through ten years ahead.
pub fn expiry_years(current_year: i32) -> Vec<String> {
    (current_year..=current_year + 10)
        .map(|y| y.to_string())
        .collect()
}

/// Expiry years starting from today's year.
pub fn expiry_years_from_today() -> Vec<String> {
    expiry_years(chrono::Local::now().year())
}

/// Render an amount the way donors typed it: `25`, `12.5`.
pub fn display_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        let s = format!("{amount:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// `Thank you for your $<amount> donation[ to campaign <id>]!`
pub fn success_message(amount: f64, campaign_id: Option<u64>) -> String {
    match campaign_id {
        Some(id) => format!(
            "Thank you for your ${} donation to campaign {}!",
            display_amount(amount),
            id
        ),
        None => format!("Thank you for your ${} donation!", display_amount(amount)),
    }
}

/// Form field that displays a server-side error for a request field.
pub fn form_field_for(wire: &str) -> &str {
    match wire {
        "first_name" => "firstName",
        "last_name" => "lastName",
        "phone_number" => "phone",
        "zip_code" => "zip",
        "expire_month" => "expiryMonth",
        "expire_year" => "expiryYear",
        "amount" => "donationAmount",
        other => other,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub occupation: String,
    pub employer: String,
    /// A preset like `"25"`, [`CUSTOM_AMOUNT`], or empty when nothing is picked.
    pub donation_amount: String,
    pub custom_amount: String,
    pub card_number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
    pub recurring: bool,
    pub terms_agreed: bool,
    pub causes: Vec<Cause>,
}

impl DonationForm {
    pub fn is_custom_amount(&self) -> bool {
        self.donation_amount == CUSTOM_AMOUNT
    }

    pub fn toggle_cause(&mut self, cause: Cause) {
        if let Some(pos) = self.causes.iter().position(|c| *c == cause) {
            self.causes.remove(pos);
        } else {
            self.causes.push(cause);
        }
    }

    /// First selected cause, or the general fund.
    pub fn cause(&self) -> String {
        self.causes
            .first()
            .map(|c| c.id().to_string())
            .unwrap_or_else(|| DEFAULT_CAUSE.to_string())
    }

    /// Amount to charge, if the selection resolves to a positive number.
    pub fn amount(&self) -> Option<f64> {
        if self.is_custom_amount() {
            parse_positive_amount(&self.custom_amount)
        } else {
            parse_positive_amount(&self.donation_amount)
        }
    }

    pub fn validate(&self, campaign_id: Option<u64>) -> Result<DonationRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.require("firstName", &self.first_name, "First name is required");
        errors.require("lastName", &self.last_name, "Last name is required");
        if errors.require("email", &self.email, "Email is required") && !is_email(self.email.trim()) {
            errors.add("email", "Please enter a valid email");
        }
        if errors.require("phone", &self.phone, "Phone number is required") && !is_phone(self.phone.trim()) {
            errors.add("phone", "Please enter a valid phone number");
        }

        errors.require("address", &self.address, "Address is required");
        errors.require("city", &self.city, "City is required");
        errors.require("state", &self.state, "State is required");
        if errors.require("zip", &self.zip, "ZIP code is required") && !is_zip(self.zip.trim()) {
            errors.add("zip", "Please enter a valid ZIP code");
        }

        errors.require("occupation", &self.occupation, "Occupation is required");

        if self.donation_amount.is_empty() {
            errors.add("donationAmount", "Please select an amount");
        } else if self.is_custom_amount() {
            if self.custom_amount.trim().is_empty() {
                errors.add("customAmount", "Please enter a custom amount");
            } else if parse_positive_amount(&self.custom_amount).is_none() {
                errors.add("customAmount", "Amount must be greater than 0");
            }
        } else if parse_positive_amount(&self.donation_amount).is_none() {
            errors.add("donationAmount", "Please select an amount");
        }

        if errors.require("cardNumber", &self.card_number, "Card number is required")
            && !is_card_number(&self.card_number)
        {
            errors.add("cardNumber", "Please enter a valid card number");
        }
        errors.require("expiryMonth", &self.expiry_month, "Expiry month is required");
        errors.require("expiryYear", &self.expiry_year, "Expiry year is required");
        if errors.require("cvv", &self.cvv, "CVV is required") && !is_cvv(self.cvv.trim()) {
            errors.add("cvv", "CVV must be 3 or 4 digits");
        }

        if !self.terms_agreed {
            errors.add("termsAgreed", "You must agree to the terms");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let amount = self.amount().unwrap_or_default();
        Ok(DonationRequest {
            campaign_id,
            amount,
            card_number: strip_spaces(&self.card_number),
            expire_month: self.expiry_month.clone(),
            expire_year: self.expiry_year.clone(),
            cvv: self.cvv.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.clone(),
            zip_code: self.zip.trim().to_string(),
            occupation: self.occupation.trim().to_string(),
            employer: self.employer.trim().to_string(),
            cause: self.cause(),
            recurring: self.recurring,
        })
    }
}

/// What the form shows after the backend rejects a donation.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitFailure {
    pub banner: String,
    pub fields: FieldErrors,
}

impl SubmitFailure {
    pub fn from_api_error(err: &ApiError) -> Self {
        if let Some(wire_errors) = err.field_errors() {
            let fields = wire_errors
                .into_iter()
                .map(|(field, message)| (form_field_for(&field).to_string(), message))
                .collect();
            return Self {
                banner: FIX_ERRORS_BANNER.to_string(),
                fields,
            };
        }

        let has_body_message = err
            .data
            .as_ref()
            .and_then(|d| d.get("message"))
            .and_then(|m| m.as_str())
            .is_some_and(|m| !m.trim().is_empty());

        Self {
            banner: if has_body_message {
                err.message.clone()
            } else {
                PAYMENT_FAILED.to_string()
            },
            fields: FieldErrors::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> DonationForm {
        DonationForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "555-123-4567".into(),
            address: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip: "62701".into(),
            occupation: "Engineer".into(),
            employer: String::new(),
            donation_amount: "25".into(),
            custom_amount: String::new(),
            card_number: "4111 1111 1111 1111".into(),
            expiry_month: "04".into(),
            expiry_year: "2030".into(),
            cvv: "123".into(),
            recurring: false,
            terms_agreed: true,
            causes: vec![],
        }
    }

    #[test]
    fn test_valid_form_builds_request() {
        let request = filled().validate(Some(7)).unwrap();
        assert_eq!(request.campaign_id, Some(7));
        assert_eq!(request.amount, 25.0);
        assert_eq!(request.card_number, "4111111111111111");
        assert_eq!(request.zip_code, "62701");
        assert_eq!(request.cause, "General Fund");
    }

    #[test]
    fn test_custom_amount_missing_blocks_submission() {
        let mut form = filled();
        form.donation_amount = CUSTOM_AMOUNT.into();
        let errors = form.validate(None).unwrap_err();
        assert_eq!(errors.get("customAmount"), Some("Please enter a custom amount"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_custom_amount_must_be_positive() {
        let mut form = filled();
        form.donation_amount = CUSTOM_AMOUNT.into();
        form.custom_amount = "0".into();
        let errors = form.validate(None).unwrap_err();
        assert_eq!(errors.get("customAmount"), Some("Amount must be greater than 0"));

        form.custom_amount = "42.5".into();
        assert_eq!(form.validate(None).unwrap().amount, 42.5);
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = DonationForm::default().validate(None).unwrap_err();
        for field in [
            "firstName",
            "lastName",
            "email",
            "phone",
            "address",
            "city",
            "state",
            "zip",
            "occupation",
            "donationAmount",
            "cardNumber",
            "expiryMonth",
            "expiryYear",
            "cvv",
            "termsAgreed",
        ] {
            assert!(errors.contains(field), "missing error for {field}");
        }
        assert!(!errors.contains("employer"));
    }

    #[test]
    fn test_format_errors() {
        let mut form = filled();
        form.email = "ada@example".into();
        form.phone = "123".into();
        form.zip = "1234".into();
        form.card_number = "4111".into();
        form.cvv = "12".into();
        let errors = form.validate(None).unwrap_err();
        assert_eq!(errors.get("email"), Some("Please enter a valid email"));
        assert_eq!(errors.get("phone"), Some("Please enter a valid phone number"));
        assert_eq!(errors.get("zip"), Some("Please enter a valid ZIP code"));
        assert_eq!(errors.get("cardNumber"), Some("Please enter a valid card number"));
        assert_eq!(errors.get("cvv"), Some("CVV must be 3 or 4 digits"));
    }

    #[test]
    fn test_first_cause_is_sent() {
        let mut form = filled();
        form.toggle_cause(Cause::Housing);
        form.toggle_cause(Cause::Climate);
        assert_eq!(form.validate(None).unwrap().cause, "housing");
        form.toggle_cause(Cause::Housing);
        assert_eq!(form.causes, vec![Cause::Climate]);
    }

    #[test]
    fn test_success_message() {
        assert_eq!(success_message(25.0, None), "Thank you for your $25 donation!");
        assert_eq!(
            success_message(12.5, Some(3)),
            "Thank you for your $12.5 donation to campaign 3!"
        );
        assert_eq!(success_message(12.999, None), "Thank you for your $13 donation!");
        assert_eq!(success_message(0.001, None), "Thank you for your $0 donation!");
        assert_eq!(success_message(10.05, None), "Thank you for your $10.05 donation!");
    }

    #[test]
    fn test_expiry_years() {
        let years = expiry_years(2026);
        assert_eq!(years.first().map(String::as_str), Some("2026"));
        assert_eq!(years.last().map(String::as_str), Some("2036"));
        assert_eq!(years.len(), 11);
        assert_eq!(expiry_months()[0], "01");
    }

    #[test]
    fn test_submit_failure_maps_fields() {
        let err = ApiError::from_response(
            422,
            br#"{"message":"Validation failed","errors":[{"field":"zip_code","message":"Unknown ZIP"},{"field":"cvv","message":"Bad CVV"}]}"#,
        );
        let failure = SubmitFailure::from_api_error(&err);
        assert_eq!(failure.banner, FIX_ERRORS_BANNER);
        assert_eq!(failure.fields.get("zip"), Some("Unknown ZIP"));
        assert_eq!(failure.fields.get("cvv"), Some("Bad CVV"));
    }

    #[test]
    fn test_submit_failure_messages() {
        let err = ApiError::from_response(402, br#"{"message":"Card declined"}"#);
        assert_eq!(SubmitFailure::from_api_error(&err).banner, "Card declined");

        let err = ApiError::from_response(500, b"");
        assert_eq!(SubmitFailure::from_api_error(&err).banner, PAYMENT_FAILED);
    }

    #[test]
    fn test_party_styles() {
        assert_eq!(Party::from_query("Democratic"), Party::Democratic);
        assert_eq!(Party::from_query("green"), Party::All);
        assert!(Party::Republican.button_class().contains("red"));
    }
}
