//! Experience registry module
//!
//! - ExperienceRegistry owns finalized experiences and the single draft
//! - DraftHandle tokens detect superseded or discarded drafts
//! - ExperienceSnapshot gives the map a read-only, creation-ordered view

pub mod coordinator;
pub mod snapshot;
pub mod state;

pub use coordinator::ExperienceRegistry;
pub use snapshot::ExperienceSnapshot;
pub use state::{DiscardReason, DraftHandle, DraftStatus, Lifecycle, RegistryEvent};

use parking_lot::Mutex;
use std::sync::Arc;

/// Registry shared between the interactive flow and readers such as the map
pub type SharedRegistry = Arc<Mutex<ExperienceRegistry>>;

impl ExperienceRegistry {
    /// Wrap the registry for shared ownership
    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(Mutex::new(self))
    }
}
