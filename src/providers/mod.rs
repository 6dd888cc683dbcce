//! External collaborators
//!
//! Capture, location, caption and map services, consumed through traits.

pub mod traits;

pub use traits::{
    CaptionPrompt, CaptionResponse, CaptureCompletion, CaptureProvider, LocationAuthorization,
    LocationProvider, MapDisplay,
};
