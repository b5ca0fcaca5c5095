//! # Campaign wizard
//!
//! The five-step create flow for political campaigns. Each step owns a set
//! of required fields; [`CampaignWizard::next`] validates only the current
//! step and [`CampaignWizard::back`] never validates.
//!
//! | Step | Required |
//! |------|----------|
//! | Basic Information | title, campaign type, short description (max 150), description |
//! | Goals & Timeline | funding goal |
//! | Location & Contact | candidate name, contact email |
//! | Media & Settings | nothing (up to 3 YouTube/Vimeo videos) |
//! | Legal & Review | treasurer name and email, terms agreement |

use api::NewCampaign;
use once_cell::sync::Lazy;
use regex::Regex;

use super::patterns::{is_email, is_iso_date};
use super::{non_blank, parse_positive_amount, FieldErrors};

pub const MAX_VIDEOS: usize = 3;
pub const SHORT_DESCRIPTION_MAX: usize = 150;
pub const VIDEO_PLACEHOLDER: &str = "/placeholder.svg?height=180&width=320";
pub const NOT_SPECIFIED: &str = "Not specified";

pub const CAMPAIGN_TYPES: [(&str, &str); 6] = [
    ("federal", "Federal Office"),
    ("state", "State Office"),
    ("local", "Local Office"),
    ("ballot", "Ballot Initiative"),
    ("cause", "Issue Advocacy"),
    ("pac", "Political Action Committee"),
];

pub const CATEGORIES: [(&str, &str); 8] = [
    ("climate", "Climate Action"),
    ("healthcare", "Healthcare"),
    ("education", "Education"),
    ("justice", "Social Justice"),
    ("economy", "Economic Justice"),
    ("democracy", "Voting Rights"),
    ("immigration", "Immigration Reform"),
    ("housing", "Affordable Housing"),
];

static YOUTUBE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*(youtu.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    Basics,
    Goals,
    Location,
    Media,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Basics,
        WizardStep::Goals,
        WizardStep::Location,
        WizardStep::Media,
        WizardStep::Review,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Basics => "Basic Information",
            WizardStep::Goals => "Goals & Timeline",
            WizardStep::Location => "Location & Contact",
            WizardStep::Media => "Media & Settings",
            WizardStep::Review => "Legal & Review",
        }
    }

    /// 1-based position, as shown in "Step 2 of 5".
    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0) + 1
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::ALL.get(self.number()).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        self.number().checked_sub(2).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoPlatform {
    YouTube,
    Vimeo,
}

impl VideoPlatform {
    pub fn detect(url: &str) -> Option<Self> {
        if url.contains("youtube.com") || url.contains("youtu.be") {
            Some(VideoPlatform::YouTube)
        } else if url.contains("vimeo.com") {
            Some(VideoPlatform::Vimeo)
        } else {
            None
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            VideoPlatform::YouTube => "YouTube Video",
            VideoPlatform::Vimeo => "Vimeo Video",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub url: String,
    pub platform: VideoPlatform,
}

impl Video {
    pub fn title(&self) -> &'static str {
        self.platform.title()
    }

    pub fn thumbnail(&self) -> String {
        match self.platform {
            VideoPlatform::YouTube => youtube_id(&self.url)
                .map(|id| format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg"))
                .unwrap_or_else(|| VIDEO_PLACEHOLDER.to_string()),
            VideoPlatform::Vimeo => VIDEO_PLACEHOLDER.to_string(),
        }
    }
}

/// Eleven-character video id from any of the usual YouTube URL shapes.
pub fn youtube_id(url: &str) -> Option<&str> {
    let id = YOUTUBE_ID.captures(url)?.get(2)?.as_str();
    (id.len() == 11).then_some(id)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignWizard {
    pub step: WizardStep,

    pub title: String,
    pub campaign_type: String,
    pub category: String,
    pub short_description: String,
    pub description: String,

    pub funding_goal: String,
    pub end_date: String,

    pub state: String,
    pub district: String,
    pub city: String,
    pub candidate_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub website: String,
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,

    pub videos: Vec<Video>,
    pub is_public: bool,
    pub allow_anonymous: bool,
    pub send_updates: bool,

    pub fec_id: String,
    pub treasurer_name: String,
    pub treasurer_email: String,
    pub agree_to_terms: bool,
}

impl Default for CampaignWizard {
    fn default() -> Self {
        Self {
            step: WizardStep::Basics,
            title: String::new(),
            campaign_type: String::new(),
            category: String::new(),
            short_description: String::new(),
            description: String::new(),
            funding_goal: String::new(),
            end_date: String::new(),
            state: String::new(),
            district: String::new(),
            city: String::new(),
            candidate_name: String::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
            website: String::new(),
            facebook: String::new(),
            twitter: String::new(),
            instagram: String::new(),
            videos: Vec::new(),
            is_public: true,
            allow_anonymous: true,
            send_updates: true,
            fec_id: String::new(),
            treasurer_name: String::new(),
            treasurer_email: String::new(),
            agree_to_terms: false,
        }
    }
}

impl CampaignWizard {
    pub fn validate_step(&self, step: WizardStep) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        match step {
            WizardStep::Basics => {
                errors.require("title", &self.title, "Campaign title is required");
                errors.require("campaignType", &self.campaign_type, "Campaign type is required");
                if errors.require(
                    "shortDescription",
                    &self.short_description,
                    "Short description is required",
                ) && self.short_description.trim().chars().count() > SHORT_DESCRIPTION_MAX
                {
                    errors.add(
                        "shortDescription",
                        format!("Keep it under {SHORT_DESCRIPTION_MAX} characters"),
                    );
                }
                errors.require("description", &self.description, "Description is required");
            }
            WizardStep::Goals => {
                if errors.require("fundingGoal", &self.funding_goal, "Funding goal is required")
                    && parse_positive_amount(&self.funding_goal).is_none()
                {
                    errors.add("fundingGoal", "Funding goal must be a positive number");
                }
                if let Some(date) = non_blank(&self.end_date) {
                    if !is_iso_date(&date) {
                        errors.add("endDate", "End date must be YYYY-MM-DD");
                    }
                }
            }
            WizardStep::Location => {
                errors.require("candidateName", &self.candidate_name, "Candidate name is required");
                if errors.require("contactEmail", &self.contact_email, "Contact email is required")
                    && !is_email(self.contact_email.trim())
                {
                    errors.add("contactEmail", "Please enter a valid email");
                }
            }
            WizardStep::Media => {}
            WizardStep::Review => {
                errors.require("treasurerName", &self.treasurer_name, "Treasurer name is required");
                if errors.require(
                    "treasurerEmail",
                    &self.treasurer_email,
                    "Treasurer email is required",
                ) && !is_email(self.treasurer_email.trim())
                {
                    errors.add("treasurerEmail", "Please enter a valid email");
                }
                if !self.agree_to_terms {
                    errors.add("agreeToTerms", "You must agree to the terms");
                }
            }
        }
        errors.into_result(())
    }

    /// Advance one step if the current step is complete.
    pub fn next(&mut self) -> Result<(), FieldErrors> {
        self.validate_step(self.step)?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(())
    }

    pub fn back(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }

    /// Add a video, or explain why it was refused.
    pub fn add_video(&mut self, url: &str) -> Result<(), &'static str> {
        let url = url.trim();
        if url.is_empty() {
            return Err("Please enter a video URL");
        }
        let Some(platform) = VideoPlatform::detect(url) else {
            return Err("Please enter a valid YouTube or Vimeo URL");
        };
        if self.videos.len() >= MAX_VIDEOS {
            return Err("Maximum 3 videos allowed");
        }
        self.videos.push(Video {
            url: url.to_string(),
            platform,
        });
        Ok(())
    }

    pub fn remove_video(&mut self, index: usize) {
        if index < self.videos.len() {
            self.videos.remove(index);
        }
    }

    pub fn campaign_type_label(&self) -> &str {
        CAMPAIGN_TYPES
            .iter()
            .find(|(key, _)| *key == self.campaign_type)
            .map(|(_, label)| *label)
            .unwrap_or(NOT_SPECIFIED)
    }

    /// "city, state" for the review panel.
    pub fn location_summary(&self) -> String {
        match (non_blank(&self.city), non_blank(&self.state)) {
            (Some(city), Some(state)) => format!("{city}, {state}"),
            (Some(one), None) | (None, Some(one)) => one,
            (None, None) => NOT_SPECIFIED.to_string(),
        }
    }

    /// Validate every step, then build the create payload.
    pub fn to_payload(&self, owner_email: &str) -> Result<NewCampaign, (WizardStep, FieldErrors)> {
        for step in WizardStep::ALL {
            self.validate_step(step).map_err(|e| (step, e))?;
        }
        Ok(NewCampaign {
            email: owner_email.to_string(),
            goal: parse_positive_amount(&self.funding_goal).unwrap_or_default(),
            campaign_type: self.campaign_type.clone(),
            title: non_blank(&self.title),
            description: non_blank(&self.description),
            short_description: non_blank(&self.short_description),
            end_date: non_blank(&self.end_date),
            category: non_blank(&self.category),
            state: non_blank(&self.state),
            district: non_blank(&self.district),
            city: non_blank(&self.city),
            candidate_name: non_blank(&self.candidate_name),
            contact_person_email: non_blank(&self.contact_email),
            contact_person_number: non_blank(&self.contact_phone),
            website: non_blank(&self.website),
            facebook: non_blank(&self.facebook),
            twitter: non_blank(&self.twitter),
            instagram: non_blank(&self.instagram),
            videos: self.videos.iter().map(|v| v.url.clone()).collect(),
            is_public: Some(self.is_public),
            allow_anonymous: Some(self.allow_anonymous),
            send_updates: Some(self.send_updates),
            fec_id: non_blank(&self.fec_id),
            treasurer_name: non_blank(&self.treasurer_name),
            treasurer_email: non_blank(&self.treasurer_email),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> CampaignWizard {
        CampaignWizard {
            title: "Rivera for Council".into(),
            campaign_type: "local".into(),
            short_description: "Better parks".into(),
            description: "A longer pitch".into(),
            funding_goal: "20000".into(),
            candidate_name: "Ana Rivera".into(),
            contact_email: "ana@example.com".into(),
            treasurer_name: "Tom".into(),
            treasurer_email: "tom@example.com".into(),
            agree_to_terms: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_step_navigation() {
        assert_eq!(WizardStep::Basics.number(), 1);
        assert_eq!(WizardStep::Review.number(), 5);
        assert_eq!(WizardStep::Basics.previous(), None);
        assert_eq!(WizardStep::Goals.previous(), Some(WizardStep::Basics));
        assert_eq!(WizardStep::Review.next(), None);
        assert!(WizardStep::Review.is_last());
    }

    #[test]
    fn test_next_blocks_on_incomplete_step() {
        let mut wizard = CampaignWizard::default();
        let errors = wizard.next().unwrap_err();
        assert!(errors.contains("title"));
        assert!(errors.contains("campaignType"));
        assert_eq!(wizard.step, WizardStep::Basics);
    }

    #[test]
    fn test_walk_forward_and_back() {
        let mut wizard = complete();
        for _ in 0..4 {
            wizard.next().unwrap();
        }
        assert_eq!(wizard.step, WizardStep::Review);
        wizard.agree_to_terms = false;
        wizard.back();
        assert_eq!(wizard.step, WizardStep::Media);
    }

    #[test]
    fn test_short_description_limit() {
        let wizard = CampaignWizard {
            short_description: "x".repeat(151),
            ..complete()
        };
        let errors = wizard.validate_step(WizardStep::Basics).unwrap_err();
        assert!(errors.contains("shortDescription"));
    }

    #[test]
    fn test_video_rules() {
        let mut wizard = CampaignWizard::default();
        assert_eq!(
            wizard.add_video("https://example.com/clip"),
            Err("Please enter a valid YouTube or Vimeo URL")
        );
        wizard.add_video("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        wizard.add_video("https://youtu.be/dQw4w9WgXcQ").unwrap();
        wizard.add_video("https://vimeo.com/76979871").unwrap();
        assert_eq!(
            wizard.add_video("https://vimeo.com/1"),
            Err("Maximum 3 videos allowed")
        );
        assert_eq!(wizard.videos[2].title(), "Vimeo Video");
        wizard.remove_video(0);
        assert_eq!(wizard.videos.len(), 2);
    }

    #[test]
    fn test_thumbnails() {
        let yt = Video {
            url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10".into(),
            platform: VideoPlatform::YouTube,
        };
        assert_eq!(
            yt.thumbnail(),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );
        let short = Video {
            url: "https://youtu.be/abc".into(),
            platform: VideoPlatform::YouTube,
        };
        assert_eq!(short.thumbnail(), VIDEO_PLACEHOLDER);
    }

    #[test]
    fn test_review_summary() {
        let mut wizard = complete();
        assert_eq!(wizard.campaign_type_label(), "Local Office");
        assert_eq!(wizard.location_summary(), "Not specified");
        wizard.city = "Austin".into();
        wizard.state = "TX".into();
        assert_eq!(wizard.location_summary(), "Austin, TX");
    }

    #[test]
    fn test_payload_requires_terms() {
        let wizard = CampaignWizard {
            agree_to_terms: false,
            ..complete()
        };
        let (step, errors) = wizard.to_payload("olive@example.com").unwrap_err();
        assert_eq!(step, WizardStep::Review);
        assert!(errors.contains("agreeToTerms"));
    }

    #[test]
    fn test_payload() {
        let mut wizard = complete();
        wizard.add_video("https://youtu.be/dQw4w9WgXcQ").unwrap();
        let payload = wizard.to_payload("olive@example.com").unwrap();
        assert_eq!(payload.campaign_type, "local");
        assert_eq!(payload.goal, 20000.0);
        assert_eq!(payload.videos, vec!["https://youtu.be/dQw4w9WgXcQ".to_string()]);
        assert_eq!(payload.is_public, Some(true));
        assert_eq!(payload.city, None);
    }
}
