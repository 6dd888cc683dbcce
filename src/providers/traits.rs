//! Collaborator trait definitions
//!
//! Platform-agnostic seams for the capture, location, caption and map
//! services the experience flow talks to. Hardware and UI live behind these.

use crate::experience::{Annotation, Coordinate, MapRegion, MediaKind, MediaLocator, MediaReference};
use crate::utils::error::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A finished recording handed back by the capture provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureCompletion {
    /// Where the clip was written
    pub locator: MediaLocator,

    /// What was recorded
    pub kind: MediaKind,
}

impl CaptureCompletion {
    pub fn new(kind: MediaKind, locator: impl Into<MediaLocator>) -> Self {
        Self {
            locator: locator.into(),
            kind,
        }
    }
}

impl From<CaptureCompletion> for MediaReference {
    fn from(completion: CaptureCompletion) -> Self {
        MediaReference::new(completion.kind, completion.locator)
    }
}

/// Location permission state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationAuthorization {
    #[default]
    NotDetermined,
    Restricted,
    Denied,
    AuthorizedWhenInUse,
    AuthorizedAlways,
}

impl LocationAuthorization {
    pub fn is_authorized(&self) -> bool {
        matches!(
            self,
            LocationAuthorization::AuthorizedWhenInUse | LocationAuthorization::AuthorizedAlways
        )
    }
}

/// What the user did with the caption prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "camelCase")]
pub enum CaptionResponse {
    Submitted(String),
    Cancelled,
}

/// Records a clip of the requested kind
#[async_trait]
pub trait CaptureProvider: Send + Sync {
    /// Record until the user stops, then report where the clip went
    ///
    /// `destination` is a fresh locator the provider should write to.
    async fn record(&self, kind: MediaKind, destination: MediaLocator) -> AppResult<CaptureCompletion>;
}

/// Reports where the device is
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn authorization(&self) -> LocationAuthorization;

    /// Current position, if one is known
    async fn current_position(&self) -> AppResult<Option<Coordinate>>;
}

/// Asks the user for a caption
#[async_trait]
pub trait CaptionPrompt: Send + Sync {
    async fn prompt(&self) -> AppResult<CaptionResponse>;
}

/// Draws experiences on a map
pub trait MapDisplay: Send + Sync {
    /// Replace the pins on the map
    fn show(&self, annotations: &[Annotation]);

    /// Move the visible region
    fn focus(&self, region: MapRegion);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_to_reference() {
        let completion = CaptureCompletion::new(MediaKind::Audio, "tmp/a.m4a");
        let reference: MediaReference = completion.into();
        assert_eq!(reference, MediaReference::AudioClip("tmp/a.m4a".into()));
    }

    #[test]
    fn test_authorization() {
        assert!(LocationAuthorization::AuthorizedWhenInUse.is_authorized());
        assert!(LocationAuthorization::AuthorizedAlways.is_authorized());
        assert!(!LocationAuthorization::Denied.is_authorized());
        assert_eq!(LocationAuthorization::default(), LocationAuthorization::NotDetermined);
        assert!(!LocationAuthorization::default().is_authorized());
    }
}
