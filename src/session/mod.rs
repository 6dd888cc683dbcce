//! Interactive experience flow
//!
//! Maps collaborator completion events onto the experience registry.

pub mod flow;

pub use flow::{Collaborators, CompletionEvent, ExperienceSession, FlowOutcome};
