//! The profile document rendered by the page
//!
//! All content is static configuration: the views consume it read-only and
//! nothing here changes at runtime except through a full profile reload.

use crate::ContentError;
use serde::{Deserialize, Serialize};

/// A complete portfolio profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name, also used for the window title.
    pub name: String,

    /// One-line role description shown under the greeting.
    pub headline: String,

    /// Greeting phrases cycled by the hero typewriter.
    #[serde(default)]
    pub greetings: Vec<String>,

    /// About-section paragraph.
    pub about: String,

    /// Skill badge labels.
    #[serde(default)]
    pub skills: Vec<String>,

    /// Work history, most recent first.
    #[serde(default)]
    pub experience: Vec<Job>,

    /// Projects built on the job.
    #[serde(default)]
    pub professional_projects: Vec<Project>,

    /// Projects built on personal time.
    #[serde(default)]
    pub personal_projects: Vec<Project>,

    pub contact: Contact,
}

/// One work-history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// One project card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,

    /// Company the project was built for, if any.
    #[serde(default)]
    pub company: Option<String>,

    /// Time span, shown where no company applies.
    #[serde(default)]
    pub period: Option<String>,

    pub description: String,

    /// External link rendered as a card action.
    #[serde(default)]
    pub link: Option<ContactLink>,
}

/// Contact section content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,

    /// Invitation paragraph above the contact buttons.
    #[serde(default)]
    pub blurb: String,

    /// External profile links (e.g. code hosting, professional network).
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

/// A labeled external link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

impl Profile {
    /// Check the invariants the views rely on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.name.trim().is_empty() {
            return Err(ContentError::Invalid("profile name is empty".to_string()));
        }
        if self.greetings.is_empty() {
            return Err(ContentError::Invalid(
                "at least one greeting is required".to_string(),
            ));
        }
        if self.contact.email.trim().is_empty() {
            return Err(ContentError::Invalid("contact email is empty".to_string()));
        }
        for link in self
            .contact
            .links
            .iter()
            .chain(self.professional_projects.iter().filter_map(|p| p.link.as_ref()))
            .chain(self.personal_projects.iter().filter_map(|p| p.link.as_ref()))
        {
            if link.url.trim().is_empty() {
                return Err(ContentError::Invalid(format!(
                    "link '{}' has an empty url",
                    link.label
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_toml() -> &'static str {
        r#"
            name = "Jo Doe"
            headline = "Software engineer"
            greetings = ["Welcome,"]
            about = "I build things."

            [contact]
            email = "jo@example.com"
        "#
    }

    #[test]
    fn test_minimal_document_parses_with_defaults() {
        let profile: Profile = toml::from_str(minimal_toml()).unwrap();
        assert_eq!(profile.name, "Jo Doe");
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
        assert!(profile.contact.links.is_empty());
        profile.validate().unwrap();
    }

    #[test]
    fn test_full_document_round_trips() {
        let toml_text = r#"
            name = "Jo Doe"
            headline = "Software engineer"
            greetings = ["Welcome,", "Hallo,"]
            about = "I build things."
            skills = ["Rust", "SQL"]

            [[experience]]
            title = "Engineer"
            company = "Acme"
            period = "2022 - Present"
            description = "Shipped the widget pipeline."

            [[professional_projects]]
            title = "Widget Pipeline"
            company = "Acme"
            description = "Streaming widget assembly."

            [[personal_projects]]
            title = "Interval Timer"
            period = "2020"
            description = "Workout timer app."

            [personal_projects.link]
            label = "View"
            url = "https://example.com/timer"

            [contact]
            email = "jo@example.com"
            blurb = "Say hi!"

            [[contact.links]]
            label = "Code"
            url = "https://example.com/jo"
        "#;

        let profile: Profile = toml::from_str(toml_text).unwrap();
        profile.validate().unwrap();
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(
            profile.personal_projects[0].link.as_ref().unwrap().label,
            "View"
        );

        let reserialized = toml::to_string(&profile).unwrap();
        let reparsed: Profile = toml::from_str(&reserialized).unwrap();
        assert_eq!(profile, reparsed);
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let mut profile: Profile = toml::from_str(minimal_toml()).unwrap();
        profile.name = "  ".to_string();
        assert!(matches!(
            profile.validate(),
            Err(ContentError::Invalid(_))
        ));
    }

    #[test]
    fn test_validation_rejects_missing_greetings() {
        let mut profile: Profile = toml::from_str(minimal_toml()).unwrap();
        profile.greetings.clear();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_link_url() {
        let mut profile: Profile = toml::from_str(minimal_toml()).unwrap();
        profile.contact.links.push(ContactLink {
            label: "Code".to_string(),
            url: "".to_string(),
        });
        assert!(profile.validate().is_err());
    }
}
