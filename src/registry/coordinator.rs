//! Experience registry
//!
//! Owns the finalized experiences and the single optional draft, and is the
//! only place a draft can turn into an experience.

use super::snapshot::ExperienceSnapshot;
use super::state::{DiscardReason, DraftHandle, DraftSession, DraftStatus, RegistryEvent};
use crate::experience::{Annotation, Coordinate, Experience, ExperienceId, MapRegion, MediaReference};
use crate::utils::error::{RegistryError, RegistryResult};
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Default capacity of the event channel
pub const DEFAULT_EVENT_CAPACITY: usize = 100;

/// Authoritative store of experiences and the in-progress draft
pub struct ExperienceRegistry {
    /// Identity stamped into every handle this registry issues
    id: Uuid,

    /// Finalized experiences in creation order
    experiences: Arc<Vec<Experience>>,

    /// At most one draft at a time
    draft: Option<DraftSession>,

    /// Generation of the most recently issued handle (0 = none yet)
    last_generation: u64,

    /// Event broadcaster
    event_tx: broadcast::Sender<RegistryEvent>,
}

impl ExperienceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::with_event_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Create an empty registry whose event channel buffers `capacity` events
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_event_capacity(capacity: usize) -> Self {
        let (event_tx, _) = broadcast::channel(capacity);
        Self {
            id: Uuid::new_v4(),
            experiences: Arc::new(Vec::new()),
            draft: None,
            last_generation: 0,
            event_tx,
        }
    }

    /// Subscribe to registry events
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.event_tx.subscribe()
    }

    fn emit(&self, event: RegistryEvent) {
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }

    /// Start a new draft at `coordinate`, discarding any unfinished one
    pub fn begin_draft(&mut self, coordinate: Coordinate) -> DraftHandle {
        if let Some(previous) = self.draft.take() {
            tracing::info!(
                "Draft {} superseded before finalizing",
                previous.handle.generation
            );
            self.emit(RegistryEvent::DraftDiscarded {
                handle: previous.handle,
                reason: DiscardReason::Superseded,
            });
        }

        self.last_generation += 1;
        let handle = DraftHandle {
            registry_id: self.id,
            generation: self.last_generation,
        };
        self.draft = Some(DraftSession::new(handle, coordinate));

        tracing::info!("Draft {} started at {}", handle.generation, coordinate);
        self.emit(RegistryEvent::DraftStarted { handle, coordinate });

        handle
    }

    /// Attach a clip to the draft, replacing any clip attached earlier
    pub fn attach_media(&mut self, handle: DraftHandle, media: MediaReference) -> RegistryResult<()> {
        let draft = self.active_draft_mut(handle)?;
        let kind = media.kind();

        if let Some(previous) = draft.media.replace(media) {
            tracing::debug!(
                "Draft {} media replaced: {} -> {:?}",
                handle.generation,
                previous.locator(),
                kind
            );
        } else {
            tracing::debug!("Draft {} media attached: {:?}", handle.generation, kind);
        }

        self.emit(RegistryEvent::MediaAttached { handle, kind });
        Ok(())
    }

    /// Turn the draft into an experience
    ///
    /// The caption must contain something besides whitespace; it is stored
    /// as given. On failure the draft is left untouched.
    pub fn finalize(&mut self, handle: DraftHandle, caption: impl Into<String>) -> RegistryResult<Experience> {
        let caption = caption.into();
        let draft = self.active_draft(handle)?;

        if caption.trim().is_empty() {
            return Err(RegistryError::EmptyCaption);
        }
        let media = draft.media.clone().ok_or(RegistryError::MissingMedia)?;

        let experience = Experience::finalized(draft.coordinate, caption, media);
        self.draft = None;
        Arc::make_mut(&mut self.experiences).push(experience.clone());

        tracing::info!(
            "Draft {} finalized as experience {}",
            handle.generation,
            experience.id()
        );
        self.emit(RegistryEvent::Finalized(experience.clone()));

        Ok(experience)
    }

    /// Abandon the draft
    ///
    /// Fails with `StaleDraft` for a handle that is no longer current, and
    /// with `InvalidHandle` for one this registry never issued.
    pub fn discard_draft(&mut self, handle: DraftHandle) -> RegistryResult<()> {
        self.active_draft(handle)?;
        self.draft = None;

        tracing::info!("Draft {} discarded", handle.generation);
        self.emit(RegistryEvent::DraftDiscarded {
            handle,
            reason: DiscardReason::Cancelled,
        });

        Ok(())
    }

    /// Snapshot of all finalized experiences in creation order
    pub fn all_experiences(&self) -> ExperienceSnapshot {
        ExperienceSnapshot::new(Arc::clone(&self.experiences))
    }

    /// Look up a finalized experience
    pub fn get(&self, id: ExperienceId) -> Option<&Experience> {
        self.experiences.iter().find(|experience| experience.id() == id)
    }

    /// Finalized experiences inside `region`, in creation order
    pub fn within(&self, region: &MapRegion) -> Vec<Experience> {
        self.experiences
            .iter()
            .filter(|experience| region.contains(&experience.coordinate()))
            .cloned()
            .collect()
    }

    /// Map pins for every finalized experience
    pub fn annotations(&self) -> Vec<Annotation> {
        self.experiences.iter().map(Experience::annotation).collect()
    }

    pub fn len(&self) -> usize {
        self.experiences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiences.is_empty()
    }

    /// Progress of the active draft, if any
    pub fn draft_status(&self) -> Option<DraftStatus> {
        self.draft.as_ref().map(DraftSession::status)
    }

    /// Handle of the active draft, if any
    pub fn active_handle(&self) -> Option<DraftHandle> {
        self.draft.as_ref().map(|draft| draft.handle)
    }

    fn check_issued(&self, handle: DraftHandle) -> RegistryResult<()> {
        if handle.registry_id != self.id
            || handle.generation == 0
            || handle.generation > self.last_generation
        {
            return Err(RegistryError::InvalidHandle);
        }
        Ok(())
    }

    fn active_draft(&self, handle: DraftHandle) -> RegistryResult<&DraftSession> {
        self.check_issued(handle)?;
        match &self.draft {
            Some(draft) if draft.handle == handle => Ok(draft),
            _ => Err(RegistryError::StaleDraft),
        }
    }

    fn active_draft_mut(&mut self, handle: DraftHandle) -> RegistryResult<&mut DraftSession> {
        self.check_issued(handle)?;
        match &mut self.draft {
            Some(draft) if draft.handle == handle => Ok(draft),
            _ => Err(RegistryError::StaleDraft),
        }
    }
}

impl Default for ExperienceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
