//! Draft state management
//!
//! Defines the draft lifecycle, the handles that identify a draft, and the
//! events the registry publishes as drafts move through it.

use crate::experience::{Coordinate, Experience, MediaKind, MediaReference};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque token identifying one `begin_draft` call
///
/// Carries the issuing registry and a generation number, so a handle from a
/// superseded draft (or from another registry) can be told apart from the
/// current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftHandle {
    pub(crate) registry_id: Uuid,
    pub(crate) generation: u64,
}

impl DraftHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Progress of the active draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftStatus {
    /// Location chosen, nothing recorded yet
    AwaitingMedia,
    /// Clip attached, waiting for the caption
    AwaitingCaption,
}

/// Where an experience is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    Draft,
    Finalized,
    Discarded,
}

/// The single in-progress experience owned by the registry
#[derive(Debug, Clone)]
pub(crate) struct DraftSession {
    pub handle: DraftHandle,
    pub coordinate: Coordinate,
    pub media: Option<MediaReference>,
}

impl DraftSession {
    pub fn new(handle: DraftHandle, coordinate: Coordinate) -> Self {
        Self {
            handle,
            coordinate,
            media: None,
        }
    }

    pub fn status(&self) -> DraftStatus {
        match self.media {
            Some(_) => DraftStatus::AwaitingCaption,
            None => DraftStatus::AwaitingMedia,
        }
    }
}

/// Why a draft stopped being the active one without finalizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscardReason {
    /// A newer `begin_draft` took its place
    Superseded,
    /// Explicitly discarded, e.g. the caption prompt was cancelled
    Cancelled,
}

/// Events emitted by the registry
#[derive(Debug, Clone)]
pub enum RegistryEvent {
    /// A new draft became active
    DraftStarted {
        handle: DraftHandle,
        coordinate: Coordinate,
    },
    /// Media was attached (or replaced) on the active draft
    MediaAttached { handle: DraftHandle, kind: MediaKind },
    /// A draft was finalized into an experience
    Finalized(Experience),
    /// A draft left the slot without being finalized
    DraftDiscarded {
        handle: DraftHandle,
        reason: DiscardReason,
    },
}

impl RegistryEvent {
    /// Lifecycle stage the event moves its experience into
    pub fn lifecycle(&self) -> Lifecycle {
        match self {
            RegistryEvent::DraftStarted { .. } | RegistryEvent::MediaAttached { .. } => Lifecycle::Draft,
            RegistryEvent::Finalized(_) => Lifecycle::Finalized,
            RegistryEvent::DraftDiscarded { .. } => Lifecycle::Discarded,
        }
    }
}
