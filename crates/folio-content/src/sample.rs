//! Built-in sample profile so the app renders out of the box

use crate::sources::ContentSource;
use crate::{Contact, ContactLink, ContentError, Job, Profile, Project};
use once_cell::sync::Lazy;

static SAMPLE: Lazy<Profile> = Lazy::new(|| Profile {
    name: "Jordan Vale".to_string(),
    headline: "Software engineer focused on cross-platform apps and web frontends, with 5+ years of experience.".to_string(),
    greetings: vec![
        "Welcome,".to_string(),
        "Willkommen,".to_string(),
        "ようこそ,".to_string(),
    ],
    about: "Versatile software engineer with experience across mobile and web: \
            native UI toolkits, single-page frontends, and the services behind \
            them. Comfortable owning a feature from data model to pixels, quick \
            to pick up new stacks, and committed to shipping maintainable \
            software."
        .to_string(),
    skills: vec![
        "Rust".to_string(),
        "TypeScript".to_string(),
        "React".to_string(),
        "Flutter".to_string(),
        "SQL".to_string(),
        "Git".to_string(),
        "CI/CD".to_string(),
        "REST APIs".to_string(),
    ],
    experience: vec![
        Job {
            title: "Software Engineer".to_string(),
            company: "Northbeam Systems, Berlin".to_string(),
            period: "2022 – Present".to_string(),
            description: "Built inventory management and customer-facing apps \
                          across mobile and web, from barcode-driven stock \
                          flows to responsive dashboards."
                .to_string(),
        },
        Job {
            title: "Frontend Engineer (Part-Time)".to_string(),
            company: "Civis Digital, Remote".to_string(),
            period: "2021 – 2022".to_string(),
            description: "Maintained and extended public-sector web \
                          applications, improving accessibility and page \
                          performance."
                .to_string(),
        },
        Job {
            title: "Software Engineer Intern".to_string(),
            company: "Harbor Labs, Hamburg".to_string(),
            period: "2020 – 2021".to_string(),
            description: "Contributed features and bug fixes to a consumer \
                          marketplace app used by more than 10,000 people."
                .to_string(),
        },
    ],
    professional_projects: vec![
        Project {
            title: "Inventory Management App".to_string(),
            company: Some("Northbeam Systems".to_string()),
            period: None,
            description: "Stock management app with barcode scanning and \
                          multi-warehouse logistics, 500+ installs."
                .to_string(),
            link: None,
        },
        Project {
            title: "Clinic Booking Apps".to_string(),
            company: Some("Northbeam Systems".to_string()),
            period: None,
            description: "Two patient-facing booking apps with payment \
                          integration and push notifications."
                .to_string(),
            link: None,
        },
        Project {
            title: "Language Archive Webapp".to_string(),
            company: Some("Civis Digital".to_string()),
            period: None,
            description: "Responsive web app with authentication and a CRUD \
                          dashboard for a language preservation archive."
                .to_string(),
            link: None,
        },
        Project {
            title: "Marketplace Super App".to_string(),
            company: Some("Harbor Labs".to_string()),
            period: None,
            description: "E-commerce and user-to-user marketplace features in \
                          an app with 10,000+ downloads."
                .to_string(),
            link: None,
        },
    ],
    personal_projects: vec![
        Project {
            title: "CourseForge".to_string(),
            company: None,
            period: Some("2024 – Present".to_string()),
            description: "Web application that drafts course outlines with a \
                          language-model backend."
                .to_string(),
            link: Some(ContactLink {
                label: "Visit Site".to_string(),
                url: "https://courseforge.example.com".to_string(),
            }),
        },
        Project {
            title: "Interval Workout Timer".to_string(),
            company: None,
            period: Some("2020".to_string()),
            description: "Mobile interval timer with a local database and \
                          50+ store downloads."
                .to_string(),
            link: Some(ContactLink {
                label: "View Listing".to_string(),
                url: "https://apps.example.com/interval".to_string(),
            }),
        },
    ],
    contact: Contact {
        email: "jordan@jordanvale.dev".to_string(),
        blurb: "I'm always open to new opportunities and collaborations. Feel \
                free to reach out!"
            .to_string(),
        links: vec![
            ContactLink {
                label: "Email Me".to_string(),
                url: "mailto:jordan@jordanvale.dev".to_string(),
            },
            ContactLink {
                label: "LinkedIn".to_string(),
                url: "https://linkedin.com/in/jordanvale".to_string(),
            },
            ContactLink {
                label: "GitHub".to_string(),
                url: "https://github.com/jordanvale".to_string(),
            },
        ],
    },
});

/// The built-in sample profile.
pub fn sample_profile() -> &'static Profile {
    &SAMPLE
}

/// Content source serving the built-in sample.
pub struct SampleSource;

#[async_trait::async_trait]
impl ContentSource for SampleSource {
    async fn load(&self) -> Result<Profile, ContentError> {
        Ok(sample_profile().clone())
    }

    fn source_name(&self) -> &str {
        "built-in sample"
    }
}
