//! TOML profile file source

use super::ContentSource;
use crate::{ContentError, Profile};
use std::path::PathBuf;
use tracing::info;

/// Loads a profile from a TOML document on disk.
pub struct TomlFileSource {
    path: PathBuf,
    name: String,
}

impl TomlFileSource {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown.toml")
            .to_string();
        Self { path, name }
    }
}

#[async_trait::async_trait]
impl ContentSource for TomlFileSource {
    async fn load(&self) -> Result<Profile, ContentError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        let profile: Profile = toml::from_str(&text)?;
        profile.validate()?;
        info!(path = %self.path.display(), name = %profile.name, "loaded profile");
        Ok(profile)
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_loads_valid_profile_from_disk() {
        let file = write_temp(
            r#"
                name = "Jo Doe"
                headline = "Software engineer"
                greetings = ["Welcome,"]
                about = "I build things."

                [contact]
                email = "jo@example.com"
            "#,
        );

        let source = TomlFileSource::new(file.path().to_path_buf());
        let profile = source.load().await.unwrap();
        assert_eq!(profile.name, "Jo Doe");
        assert!(source.source_name().ends_with(".toml"));
    }

    #[tokio::test]
    async fn test_malformed_toml_is_a_parse_error() {
        let file = write_temp("name = [unclosed");
        let source = TomlFileSource::new(file.path().to_path_buf());
        assert!(matches!(
            source.load().await,
            Err(ContentError::Toml(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_profile_is_rejected() {
        // Parses fine but has no greetings.
        let file = write_temp(
            r#"
                name = "Jo Doe"
                headline = "Software engineer"
                about = "I build things."

                [contact]
                email = "jo@example.com"
            "#,
        );

        let source = TomlFileSource::new(file.path().to_path_buf());
        assert!(matches!(
            source.load().await,
            Err(ContentError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_io_error() {
        let source = TomlFileSource::new(PathBuf::from("/nonexistent/profile.toml"));
        assert!(matches!(source.load().await, Err(ContentError::Io(_))));
    }
}
