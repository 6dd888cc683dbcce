//! Configuration
//!
//! Tunables for the experience flow, loaded from a JSON file. Every field
//! has a default, so an empty object is a valid config.

use crate::experience::{CoordinateSpan, MediaKind};
use crate::registry::coordinator::DEFAULT_EVENT_CAPACITY;
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperiencesConfig {
    /// Zoom used when centering the map on a location
    pub focus_span: CoordinateSpan,

    /// Directory new recordings are named into (system temp dir if unset)
    pub media_dir: Option<PathBuf>,

    pub video_extension: String,

    pub audio_extension: String,

    /// Buffered registry events per subscriber
    pub event_capacity: usize,

    /// How many times to ask for a caption before giving up on the draft
    pub caption_attempts: u32,
}

impl Default for ExperiencesConfig {
    fn default() -> Self {
        Self {
            focus_span: CoordinateSpan::default(),
            media_dir: None,
            video_extension: MediaKind::Video.extension().to_string(),
            audio_extension: MediaKind::Audio.extension().to_string(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
            caption_attempts: 3,
        }
    }
}

impl ExperiencesConfig {
    /// Read and validate a config file
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: ExperiencesConfig = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::debug!("Loaded config from {:?}", path);

        Ok(config)
    }

    /// Like `load`, but falls back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.focus_span.is_valid() {
            return Err(AppError::Config(format!(
                "focusSpan out of range: {:?}",
                self.focus_span
            )));
        }
        if self.event_capacity == 0 {
            return Err(AppError::Config("eventCapacity must be at least 1".to_string()));
        }
        if self.caption_attempts == 0 {
            return Err(AppError::Config("captionAttempts must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Directory new recordings should be named into
    pub fn media_dir(&self) -> PathBuf {
        self.media_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Configured file extension for a media kind
    pub fn extension(&self, kind: MediaKind) -> &str {
        match kind {
            MediaKind::Video => &self.video_extension,
            MediaKind::Audio => &self.audio_extension,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = ExperiencesConfig::default();
        assert_eq!(config.focus_span, CoordinateSpan::new(0.01, 0.01));
        assert_eq!(config.extension(MediaKind::Video), "mov");
        assert_eq!(config.extension(MediaKind::Audio), "m4a");
        assert_eq!(config.media_dir(), std::env::temp_dir());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("experiences.json");
        fs::write(&path, r#"{"audioExtension":"caf","captionAttempts":1}"#).unwrap();

        let config = ExperiencesConfig::load(&path).unwrap();
        assert_eq!(config.extension(MediaKind::Audio), "caf");
        assert_eq!(config.caption_attempts, 1);
        assert_eq!(config.event_capacity, DEFAULT_EVENT_CAPACITY);
    }

    #[test]
    fn test_load_rejects_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("experiences.json");

        fs::write(&path, r#"{"eventCapacity":0}"#).unwrap();
        assert!(matches!(ExperiencesConfig::load(&path), Err(AppError::Config(_))));

        fs::write(&path, r#"{"focusSpan":{"latitudeDelta":-1.0,"longitudeDelta":0.01}}"#).unwrap();
        assert!(matches!(ExperiencesConfig::load(&path), Err(AppError::Config(_))));

        fs::write(&path, "not json").unwrap();
        assert!(matches!(ExperiencesConfig::load(&path), Err(AppError::Serialization(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempdir().unwrap();
        let config = ExperiencesConfig::load_or_default(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config.caption_attempts, 3);

        assert!(matches!(
            ExperiencesConfig::load(&dir.path().join("missing.json")),
            Err(AppError::Io(_))
        ));
    }
}
