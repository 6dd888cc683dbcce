//! Experience schema
//!
//! Finalized experiences and the read-only projections handed to the map.

use super::geo::Coordinate;
use super::media::{MediaKind, MediaReference};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Process-unique experience identifier, assigned at finalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperienceId(Uuid);

impl ExperienceId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for ExperienceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A finalized, immutable experience
///
/// Only the registry constructs these, and only once coordinate, caption
/// and media have all been validated. Serialize-only for that reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    id: ExperienceId,
    coordinate: Coordinate,
    caption: String,
    media: MediaReference,
    created_at: DateTime<Utc>,
}

impl Experience {
    pub(crate) fn finalized(coordinate: Coordinate, caption: String, media: MediaReference) -> Self {
        Self {
            id: ExperienceId::new(),
            coordinate,
            caption,
            media,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> ExperienceId {
        self.id
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn media(&self) -> &MediaReference {
        &self.media
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Map pin for this experience
    pub fn annotation(&self) -> Annotation {
        Annotation {
            id: self.id,
            coordinate: self.coordinate,
            title: self.caption.clone(),
            media_kind: self.media.kind(),
        }
    }
}

/// What the map needs to draw a pin and its callout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: ExperienceId,
    pub coordinate: Coordinate,
    pub title: String,
    pub media_kind: MediaKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalized_experience_fields() {
        let coordinate = Coordinate::new(40.0, -75.0).unwrap();
        let media = MediaReference::AudioClip("tmp/walk.m4a".into());
        let experience = Experience::finalized(coordinate, "Sunset walk".to_string(), media.clone());

        assert_eq!(experience.coordinate(), coordinate);
        assert_eq!(experience.caption(), "Sunset walk");
        assert_eq!(experience.media(), &media);

        let annotation = experience.annotation();
        assert_eq!(annotation.id, experience.id());
        assert_eq!(annotation.title, "Sunset walk");
        assert_eq!(annotation.media_kind, MediaKind::Audio);
    }

    #[test]
    fn test_ids_are_unique() {
        let coordinate = Coordinate::new(0.0, 0.0).unwrap();
        let media = MediaReference::VideoClip("a.mov".into());
        let first = Experience::finalized(coordinate, "a".to_string(), media.clone());
        let second = Experience::finalized(coordinate, "a".to_string(), media);

        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_experience_serialization() {
        let coordinate = Coordinate::new(40.0, -75.0).unwrap();
        let media = MediaReference::VideoClip("tmp/abc.mov".into());
        let experience = Experience::finalized(coordinate, "Sunset walk".to_string(), media);

        let json = serde_json::to_value(&experience).unwrap();
        assert_eq!(json["caption"], "Sunset walk");
        assert_eq!(json["coordinate"]["latitude"], 40.0);
        assert_eq!(json["media"]["type"], "videoClip");
        assert!(json.get("createdAt").is_some());
    }
}
