//! Media references
//!
//! An experience points at exactly one externally stored clip. The crate
//! never reads or writes the media itself; it only carries the locator.

use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Kind of clip an experience carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
}

impl MediaKind {
    /// Default file extension for recordings of this kind
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Video => "mov",
            MediaKind::Audio => "m4a",
        }
    }

    /// Label shown when the user picks an experience type
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Video => "Video",
            MediaKind::Audio => "Audio",
        }
    }
}

/// Opaque handle to externally stored media (a file path or URL)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaLocator(String);

impl MediaLocator {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// A fresh, unique locator `<dir>/<uuid>.<extension>`
    ///
    /// Only the name is generated; nothing is created on disk.
    pub fn temp(dir: &Path, extension: &str) -> Self {
        let mut path = dir.join(Uuid::new_v4().to_string());
        if !extension.is_empty() {
            path.set_extension(extension);
        }
        Self(path.to_string_lossy().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MediaLocator {
    fn from(locator: &str) -> Self {
        Self::new(locator)
    }
}

impl From<String> for MediaLocator {
    fn from(locator: String) -> Self {
        Self(locator)
    }
}

impl std::fmt::Display for MediaLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exactly one clip, either video or audio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "locator", rename_all = "camelCase")]
pub enum MediaReference {
    VideoClip(MediaLocator),
    AudioClip(MediaLocator),
}

impl MediaReference {
    pub fn new(kind: MediaKind, locator: MediaLocator) -> Self {
        match kind {
            MediaKind::Video => MediaReference::VideoClip(locator),
            MediaKind::Audio => MediaReference::AudioClip(locator),
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            MediaReference::VideoClip(_) => MediaKind::Video,
            MediaReference::AudioClip(_) => MediaKind::Audio,
        }
    }

    pub fn locator(&self) -> &MediaLocator {
        match self {
            MediaReference::VideoClip(locator) | MediaReference::AudioClip(locator) => locator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_kind() {
        let video = MediaReference::new(MediaKind::Video, "tmp/abc.mov".into());
        assert_eq!(video, MediaReference::VideoClip("tmp/abc.mov".into()));
        assert_eq!(video.kind(), MediaKind::Video);
        assert_eq!(video.locator().as_str(), "tmp/abc.mov");

        let audio = MediaReference::new(MediaKind::Audio, "tmp/abc.m4a".into());
        assert_eq!(audio.kind(), MediaKind::Audio);
    }

    #[test]
    fn test_temp_locator() {
        let dir = Path::new("/tmp/experiences");
        let first = MediaLocator::temp(dir, MediaKind::Video.extension());
        let second = MediaLocator::temp(dir, MediaKind::Video.extension());

        assert_ne!(first, second);
        assert!(first.as_str().starts_with("/tmp/experiences/"));
        assert!(first.as_str().ends_with(".mov"));

        let bare = MediaLocator::temp(dir, "");
        assert!(Path::new(bare.as_str()).extension().is_none());
    }

    #[test]
    fn test_reference_serialization() {
        let video = MediaReference::VideoClip("tmp/abc.mov".into());
        let json = serde_json::to_string(&video).unwrap();
        assert_eq!(json, r#"{"type":"videoClip","locator":"tmp/abc.mov"}"#);
    }
}
