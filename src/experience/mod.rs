//! Experience domain model
//!
//! Coordinates, media references and the finalized experience record.

pub mod geo;
pub mod media;
pub mod schema;

pub use geo::{Coordinate, CoordinateSpan, MapRegion};
pub use media::{MediaKind, MediaLocator, MediaReference};
pub use schema::{Annotation, Experience, ExperienceId};
