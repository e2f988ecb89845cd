//! Profile sources

mod toml_source;

pub use toml_source::TomlFileSource;

use crate::{ContentError, Profile};

/// Trait for profile content sources
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    /// Load and validate the profile.
    async fn load(&self) -> Result<Profile, ContentError>;

    /// Get the source name/path
    fn source_name(&self) -> &str;
}
