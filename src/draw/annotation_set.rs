//! Ordered container of committed annotations.

use super::shape::Annotation;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// All committed annotations of the drawing session.
///
/// Order is z-order: the first entry is the bottom layer, the last is drawn on
/// top. Entries are shared behind [`Arc`] because annotations never change
/// after commit, so cloning the set (for history snapshots) copies pointers
/// rather than point lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationSet {
    annotations: Vec<Arc<Annotation>>,
}

impl AnnotationSet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self {
            annotations: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Iterates annotations bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().map(|shared| shared.as_ref())
    }

    pub fn get(&self, index: usize) -> Option<&Annotation> {
        self.annotations.get(index).map(|shared| shared.as_ref())
    }

    /// Adds an annotation on top of the existing ones.
    pub(crate) fn push(&mut self, annotation: Annotation) {
        self.annotations.push(Arc::new(annotation));
    }

    /// Removes every annotation matching `predicate`, returning how many went away.
    pub(crate) fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Annotation) -> bool,
    {
        let before = self.annotations.len();
        self.annotations.retain(|shared| !predicate(shared.as_ref()));
        before - self.annotations.len()
    }

    /// Removes all annotations, returning how many were dropped.
    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.annotations.len();
        self.annotations.clear();
        removed
    }
}

impl FromIterator<Annotation> for AnnotationSet {
    fn from_iter<I: IntoIterator<Item = Annotation>>(iter: I) -> Self {
        Self {
            annotations: iter.into_iter().map(Arc::new).collect(),
        }
    }
}
