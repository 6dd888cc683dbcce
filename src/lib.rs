//! Experiences - geo-tagged video and audio clips, pinned to a map.
//!
//! This is the main library crate. It provides the experience registry,
//! the domain model it enforces, and the session that wires capture,
//! location, caption and map collaborators to it.

pub mod config;
pub mod experience;
pub mod providers;
pub mod registry;
pub mod session;
pub mod utils;

pub use config::ExperiencesConfig;
pub use experience::{Coordinate, Experience, ExperienceId, MediaKind, MediaLocator, MediaReference};
pub use registry::{DraftHandle, ExperienceRegistry, ExperienceSnapshot, SharedRegistry};
pub use session::{Collaborators, CompletionEvent, ExperienceSession};
pub use utils::error::{AppError, AppResult, RegistryError, RegistryResult};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
///
/// Honors `RUST_LOG`, defaulting to debug output for this crate. Safe to
/// call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "experiences=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Starting Experiences v{}", env!("CARGO_PKG_VERSION"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }
}
