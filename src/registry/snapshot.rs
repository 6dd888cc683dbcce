//! Read-only views of the finalized experiences

use crate::experience::{Annotation, Experience, MapRegion};
use std::sync::Arc;

/// Point-in-time view of every finalized experience, in creation order
///
/// Cheap to clone and unaffected by later registry changes. Iterate it as
/// many times as needed.
#[derive(Debug, Clone, Default)]
pub struct ExperienceSnapshot {
    experiences: Arc<Vec<Experience>>,
}

impl ExperienceSnapshot {
    pub(crate) fn new(experiences: Arc<Vec<Experience>>) -> Self {
        Self { experiences }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Experience> {
        self.experiences.iter()
    }

    pub fn len(&self) -> usize {
        self.experiences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiences.is_empty()
    }

    /// Experiences inside `region`, keeping creation order
    pub fn within<'a>(&'a self, region: &'a MapRegion) -> impl Iterator<Item = &'a Experience> + 'a {
        self.iter()
            .filter(move |experience| region.contains(&experience.coordinate()))
    }

    /// Map pins for every experience
    pub fn annotations(&self) -> Vec<Annotation> {
        self.iter().map(Experience::annotation).collect()
    }
}

impl<'a> IntoIterator for &'a ExperienceSnapshot {
    type Item = &'a Experience;
    type IntoIter = std::slice::Iter<'a, Experience>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
