//! Basic and nonprofit campaign forms, plus the edit modal.

use api::{Campaign, CampaignUpdate, NewCampaign};

use super::patterns::{is_ein, is_eleven_digit_phone, is_email, is_iso_date};
use super::{non_blank, parse_positive_amount, FieldErrors};

pub const BASIC_CAMPAIGN_TYPE: &str = "basic";

pub const CREATED: &str = "Campaign created successfully!";
pub const CREATE_FAILED: &str = "Failed to create campaign!";
pub const UPDATED: &str = "Campaign updated successfully";
pub const UPDATE_FAILED: &str = "Failed to update campaign";
pub const DELETED: &str = "Campaign deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete campaign";

/// Which create form the admin picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateVariant {
    #[default]
    Basic,
    Nonprofit(NonprofitType),
    Wizard,
}

impl CreateVariant {
    pub const ALL: [CreateVariant; 4] = [
        CreateVariant::Basic,
        CreateVariant::Nonprofit(NonprofitType::ThreeC),
        CreateVariant::Nonprofit(NonprofitType::FourC),
        CreateVariant::Wizard,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CreateVariant::Basic => "basic",
            CreateVariant::Nonprofit(t) => t.campaign_type(),
            CreateVariant::Wizard => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CreateVariant::Basic => "Basic Campaign",
            CreateVariant::Nonprofit(NonprofitType::ThreeC) => "501(c)(3) Nonprofit",
            CreateVariant::Nonprofit(NonprofitType::FourC) => "501(c)(4) Social Welfare",
            CreateVariant::Wizard => "Political Campaign",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonprofitType {
    ThreeC,
    FourC,
}

impl NonprofitType {
    pub fn campaign_type(&self) -> &'static str {
        match self {
            NonprofitType::ThreeC => "501(c)(3)",
            NonprofitType::FourC => "501(c)(4)",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicCampaignForm {
    pub title: String,
    pub description: String,
    pub goal: String,
    pub photo: String,
    pub end_date: String,
}

impl BasicCampaignForm {
    pub fn preview_title(&self) -> &str {
        match self.title.trim() {
            "" => "Campaign Title",
            t => t,
        }
    }

    pub fn preview_description(&self) -> &str {
        match self.description.trim() {
            "" => "Campaign description will appear here.",
            d => d,
        }
    }

    pub fn preview_goal(&self) -> f64 {
        parse_positive_amount(&self.goal).unwrap_or(10_000.0)
    }

    pub fn validate(&self, owner_email: &str) -> Result<NewCampaign, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("title", &self.title, "Title is required");
        errors.require("description", &self.description, "Description is required");
        if errors.require("goal", &self.goal, "Goal is required")
            && parse_positive_amount(&self.goal).is_none()
        {
            errors.add("goal", "Goal must be a positive number");
        }
        let end_date = non_blank(&self.end_date);
        if let Some(date) = &end_date {
            if !is_iso_date(date) {
                errors.add("end_date", "End date must be YYYY-MM-DD");
            }
        }

        errors.into_result(())?;
        Ok(NewCampaign {
            email: owner_email.to_string(),
            goal: parse_positive_amount(&self.goal).unwrap_or_default(),
            campaign_type: BASIC_CAMPAIGN_TYPE.to_string(),
            title: non_blank(&self.title),
            description: non_blank(&self.description),
            photo: non_blank(&self.photo),
            end_date,
            ..Default::default()
        })
    }
}

/// Shared model for the 501(c)(3) and 501(c)(4) forms. Error keys match
/// the payload's field names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NonprofitForm {
    pub organization_name: String,
    pub ein: String,
    pub address: String,
    pub mission_statement: String,
    pub website: String,
    pub contact_person_name: String,
    pub contact_person_email: String,
    pub contact_person_number: String,
    pub goal: String,
}

impl NonprofitForm {
    pub fn validate(
        &self,
        kind: NonprofitType,
        owner_email: &str,
    ) -> Result<NewCampaign, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require(
            "organization_name",
            &self.organization_name,
            "Organization name is required",
        );
        if errors.require("EIN", &self.ein, "EIN is required") && !is_ein(self.ein.trim()) {
            errors.add("EIN", "EIN must be in format XX-XXXXXXX");
        }
        errors.require("address", &self.address, "Address is required");
        errors.require(
            "mission_statement",
            &self.mission_statement,
            "Mission statement is required",
        );
        errors.require(
            "contact_person_name",
            &self.contact_person_name,
            "Contact name is required",
        );
        if errors.require("contact_person_email", &self.contact_person_email, "Email is required")
            && !is_email(self.contact_person_email.trim())
        {
            errors.add("contact_person_email", "Invalid email format");
        }
        if errors.require(
            "contact_person_number",
            &self.contact_person_number,
            "Phone number is required",
        ) && !is_eleven_digit_phone(self.contact_person_number.trim())
        {
            errors.add("contact_person_number", "Phone must be 11 digits");
        }
        if errors.require("goal", &self.goal, "Goal amount is required")
            && parse_positive_amount(&self.goal).is_none()
        {
            errors.add("goal", "Goal must be a positive number");
        }

        errors.into_result(())?;
        Ok(NewCampaign {
            email: owner_email.to_string(),
            goal: parse_positive_amount(&self.goal).unwrap_or_default(),
            campaign_type: kind.campaign_type().to_string(),
            organization_name: non_blank(&self.organization_name),
            ein: non_blank(&self.ein),
            address: non_blank(&self.address),
            mission_statement: non_blank(&self.mission_statement),
            website: non_blank(&self.website),
            contact_person_name: non_blank(&self.contact_person_name),
            contact_person_email: non_blank(&self.contact_person_email),
            contact_person_number: non_blank(&self.contact_person_number),
            ..Default::default()
        })
    }
}

/// Edit modal state, pre-filled from the campaign being edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditCampaignForm {
    pub title: String,
    pub description: String,
    pub goal: String,
    pub end_date: String,
    pub photo: String,
}

impl EditCampaignForm {
    pub fn from_campaign(campaign: &Campaign) -> Self {
        Self {
            title: campaign.title.clone(),
            description: campaign.description.clone(),
            goal: super::donation::display_amount(campaign.goal),
            end_date: campaign
                .end_date()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            photo: campaign.photo.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self, owner_email: &str) -> Result<CampaignUpdate, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("title", &self.title, "Title is required");
        errors.require("description", &self.description, "Description is required");
        if errors.require("goal", &self.goal, "Goal is required")
            && parse_positive_amount(&self.goal).is_none()
        {
            errors.add("goal", "Goal must be a positive number");
        }
        if errors.require("end_date", &self.end_date, "End date is required")
            && !is_iso_date(self.end_date.trim())
        {
            errors.add("end_date", "End date must be YYYY-MM-DD");
        }

        errors.into_result(())?;
        Ok(CampaignUpdate {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            goal: parse_positive_amount(&self.goal).unwrap_or_default(),
            end_date: self.end_date.trim().to_string(),
            photo: self.photo.trim().to_string(),
            email: owner_email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: &str = "olive@example.com";

    fn nonprofit() -> NonprofitForm {
        NonprofitForm {
            organization_name: "Green Org".into(),
            ein: "12-3456789".into(),
            address: "1 Main St".into(),
            mission_statement: "Plant trees".into(),
            website: String::new(),
            contact_person_name: "Gail".into(),
            contact_person_email: "gail@green.org".into(),
            contact_person_number: "15551234567".into(),
            goal: "5000".into(),
        }
    }

    #[test]
    fn test_basic_form_payload() {
        let form = BasicCampaignForm {
            title: "Parks".into(),
            description: "Keep parks green".into(),
            goal: "1000".into(),
            photo: String::new(),
            end_date: "2026-12-31".into(),
        };
        let payload = form.validate(OWNER).unwrap();
        assert_eq!(payload.campaign_type, "basic");
        assert_eq!(payload.email, OWNER);
        assert_eq!(payload.goal, 1000.0);
        assert_eq!(payload.photo, None);
        assert_eq!(payload.end_date.as_deref(), Some("2026-12-31"));
    }

    #[test]
    fn test_basic_form_errors() {
        let form = BasicCampaignForm {
            goal: "-5".into(),
            end_date: "12/31/2026".into(),
            ..Default::default()
        };
        let errors = form.validate(OWNER).unwrap_err();
        assert!(errors.contains("title"));
        assert!(errors.contains("description"));
        assert_eq!(errors.get("goal"), Some("Goal must be a positive number"));
        assert!(errors.contains("end_date"));
    }

    #[test]
    fn test_basic_preview_defaults() {
        let form = BasicCampaignForm::default();
        assert_eq!(form.preview_title(), "Campaign Title");
        assert_eq!(form.preview_goal(), 10_000.0);
    }

    #[test]
    fn test_invalid_ein_is_rejected() {
        let form = NonprofitForm {
            ein: "123456789".into(),
            ..nonprofit()
        };
        let errors = form.validate(NonprofitType::ThreeC, OWNER).unwrap_err();
        assert_eq!(errors.get("EIN"), Some("EIN must be in format XX-XXXXXXX"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_nonprofit_payload_per_type() {
        let three = nonprofit().validate(NonprofitType::ThreeC, OWNER).unwrap();
        assert_eq!(three.campaign_type, "501(c)(3)");
        assert_eq!(three.email, OWNER);
        assert_eq!(three.website, None);

        let with_site = NonprofitForm {
            website: "https://green.org".into(),
            ..nonprofit()
        };
        let four = with_site.validate(NonprofitType::FourC, OWNER).unwrap();
        assert_eq!(four.campaign_type, "501(c)(4)");
        assert_eq!(four.website.as_deref(), Some("https://green.org"));
    }

    #[test]
    fn test_nonprofit_contact_checks() {
        let form = NonprofitForm {
            contact_person_email: "gail@".into(),
            contact_person_number: "555-1234".into(),
            goal: "0".into(),
            ..nonprofit()
        };
        let errors = form.validate(NonprofitType::FourC, OWNER).unwrap_err();
        assert_eq!(errors.get("contact_person_email"), Some("Invalid email format"));
        assert_eq!(errors.get("contact_person_number"), Some("Phone must be 11 digits"));
        assert_eq!(errors.get("goal"), Some("Goal must be a positive number"));
    }

    #[test]
    fn test_edit_form_round_trip() {
        let campaign = Campaign {
            id: 3,
            title: "Clean Water".into(),
            description: "Wells".into(),
            goal: 2500.0,
            end_date: Some("2026-03-01T00:00:00.000Z".into()),
            photo: Some("https://img.example.com/w.png".into()),
            ..Default::default()
        };
        let form = EditCampaignForm::from_campaign(&campaign);
        assert_eq!(form.goal, "2500");
        assert_eq!(form.end_date, "2026-03-01");

        let update = form.validate(OWNER).unwrap();
        assert_eq!(update.end_date, "2026-03-01");
        assert_eq!(update.goal, 2500.0);
        assert_eq!(update.email, OWNER);
    }

    #[test]
    fn test_variant_keys() {
        assert_eq!(
            CreateVariant::from_key("501(c)(3)"),
            Some(CreateVariant::Nonprofit(NonprofitType::ThreeC))
        );
        assert_eq!(CreateVariant::from_key("admin"), Some(CreateVariant::Wizard));
        assert_eq!(CreateVariant::from_key("nope"), None);
    }
}
