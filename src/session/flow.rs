//! Experience session
//!
//! Drives one user's create-an-experience flow: a location is picked, a clip
//! is recorded, a caption is collected, and the result lands on the map.
//! Collaborator completions arrive as `CompletionEvent`s and are mapped onto
//! the synchronous registry API.

use crate::config::ExperiencesConfig;
use crate::experience::{Coordinate, Experience, MapRegion, MediaKind, MediaLocator};
use crate::providers::{
    CaptionPrompt, CaptionResponse, CaptureCompletion, CaptureProvider, LocationProvider, MapDisplay,
};
use crate::registry::{DraftHandle, ExperienceRegistry, SharedRegistry};
use crate::utils::error::{AppResult, RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Completion events delivered by the collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum CompletionEvent {
    /// The user designated a location on the map
    LocationSelected(Coordinate),
    /// A recording finished
    CaptureFinished(CaptureCompletion),
    /// The caption prompt returned text
    CaptionSubmitted(String),
    /// The caption prompt was dismissed
    CaptionCancelled,
}

/// What handling an event did
#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome {
    DraftStarted(DraftHandle),
    MediaAttached,
    Finalized(Experience),
    Discarded,
}

/// The services a session talks to
#[derive(Clone)]
pub struct Collaborators {
    pub capture: Arc<dyn CaptureProvider>,
    pub location: Arc<dyn LocationProvider>,
    pub caption: Arc<dyn CaptionPrompt>,
    pub map: Arc<dyn MapDisplay>,
}

/// Sequential driver between the collaborators and the registry
pub struct ExperienceSession {
    registry: SharedRegistry,
    collaborators: Collaborators,
    config: ExperiencesConfig,

    /// Handle from the most recent location selection
    handle: Option<DraftHandle>,
}

impl ExperienceSession {
    /// Create a session with a fresh registry
    ///
    /// Fails with `AppError::Config` if `config` does not validate.
    pub fn new(config: ExperiencesConfig, collaborators: Collaborators) -> AppResult<Self> {
        config.validate()?;
        let registry = ExperienceRegistry::with_event_capacity(config.event_capacity).into_shared();
        Self::with_registry(registry, config, collaborators)
    }

    /// Create a session over an existing registry
    pub fn with_registry(
        registry: SharedRegistry,
        config: ExperiencesConfig,
        collaborators: Collaborators,
    ) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            registry,
            collaborators,
            config,
            handle: None,
        })
    }

    /// The registry this session writes to
    pub fn registry(&self) -> SharedRegistry {
        Arc::clone(&self.registry)
    }

    pub fn config(&self) -> &ExperiencesConfig {
        &self.config
    }

    /// Apply one collaborator completion to the registry
    pub fn handle(&mut self, event: CompletionEvent) -> RegistryResult<FlowOutcome> {
        let result = match event {
            CompletionEvent::LocationSelected(coordinate) => {
                Ok(FlowOutcome::DraftStarted(self.select_location(coordinate)))
            }
            CompletionEvent::CaptureFinished(completion) => {
                self.attach_capture(completion).map(|_| FlowOutcome::MediaAttached)
            }
            CompletionEvent::CaptionSubmitted(text) => {
                self.finalize_current(text).map(FlowOutcome::Finalized)
            }
            CompletionEvent::CaptionCancelled => {
                self.discard_current().map(|_| FlowOutcome::Discarded)
            }
        };

        if let Err(error) = &result {
            tracing::warn!("Flow event rejected: {}", error);
        }
        result
    }

    /// Run the whole flow for one experience
    ///
    /// Returns `Ok(None)` when the user cancels or never supplies a usable
    /// caption; the draft is discarded in both cases.
    pub async fn create_experience(
        &mut self,
        coordinate: Coordinate,
        kind: MediaKind,
    ) -> AppResult<Option<Experience>> {
        self.handle(CompletionEvent::LocationSelected(coordinate))?;

        let destination = self.next_media_locator(kind);
        tracing::info!("Recording {} to {}", kind.label(), destination);

        let completion = match self.collaborators.capture.record(kind, destination).await {
            Ok(completion) => completion,
            Err(error) => {
                tracing::warn!("Recording failed: {}", error);
                self.abandon();
                return Err(error);
            }
        };
        self.handle(CompletionEvent::CaptureFinished(completion))?;

        for attempt in 1..=self.config.caption_attempts {
            let response = match self.collaborators.caption.prompt().await {
                Ok(response) => response,
                Err(error) => {
                    self.abandon();
                    return Err(error);
                }
            };

            match response {
                CaptionResponse::Submitted(text) => match self.finalize_current(text) {
                    Ok(experience) => return Ok(Some(experience)),
                    Err(RegistryError::EmptyCaption) => {
                        tracing::debug!("Empty caption on attempt {}", attempt);
                    }
                    Err(error) => {
                        tracing::warn!("Finalize failed: {}", error);
                        return Err(error.into());
                    }
                },
                CaptionResponse::Cancelled => {
                    self.handle(CompletionEvent::CaptionCancelled)?;
                    return Ok(None);
                }
            }
        }

        tracing::info!(
            "No caption after {} attempts, discarding draft",
            self.config.caption_attempts
        );
        self.abandon();
        Ok(None)
    }

    /// Center the map on the user if location access allows it
    pub async fn initial_focus(&self) -> AppResult<Option<MapRegion>> {
        let authorization = self.collaborators.location.authorization().await;
        if !authorization.is_authorized() {
            tracing::debug!("Location not authorized ({:?}), leaving map as is", authorization);
            return Ok(None);
        }

        let Some(position) = self.collaborators.location.current_position().await? else {
            return Ok(None);
        };

        let region = MapRegion::new(position, self.config.focus_span);
        self.collaborators.map.focus(region);
        Ok(Some(region))
    }

    /// Push every finalized experience to the map
    pub fn refresh_map(&self) {
        let annotations = self.registry.lock().annotations();
        self.collaborators.map.show(&annotations);
    }

    /// Fresh locator for a new recording of `kind`
    pub fn next_media_locator(&self, kind: MediaKind) -> MediaLocator {
        MediaLocator::temp(&self.config.media_dir(), self.config.extension(kind))
    }

    fn current_handle(&self) -> RegistryResult<DraftHandle> {
        self.handle.ok_or(RegistryError::InvalidHandle)
    }

    fn select_location(&mut self, coordinate: Coordinate) -> DraftHandle {
        self.collaborators
            .map
            .focus(MapRegion::new(coordinate, self.config.focus_span));

        let handle = self.registry.lock().begin_draft(coordinate);
        self.handle = Some(handle);
        handle
    }

    fn attach_capture(&mut self, completion: CaptureCompletion) -> RegistryResult<()> {
        let handle = self.current_handle()?;
        self.registry.lock().attach_media(handle, completion.into())
    }

    fn finalize_current(&mut self, caption: String) -> RegistryResult<Experience> {
        let handle = self.current_handle()?;
        let experience = self.registry.lock().finalize(handle, caption)?;
        self.refresh_map();
        Ok(experience)
    }

    fn discard_current(&mut self) -> RegistryResult<()> {
        let handle = self.current_handle()?;
        self.registry.lock().discard_draft(handle)
    }

    /// Drop our draft if it is still the active one
    fn abandon(&mut self) {
        if let Ok(handle) = self.current_handle() {
            // Already superseded or closed is fine here
            let _ = self.registry.lock().discard_draft(handle);
        }
    }
}
