//! Profile content model and sources for the portfolio viewer

pub mod profile;
pub mod sample;
pub mod sources;

use thiserror::Error;

// Re-exports
pub use profile::{Contact, ContactLink, Job, Profile, Project};
pub use sample::{sample_profile, SampleSource};
pub use sources::{ContentSource, TomlFileSource};

/// Errors that can occur while loading profile content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid profile: {0}")]
    Invalid(String),
}
