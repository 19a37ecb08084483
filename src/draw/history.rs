//! Linear undo/redo log of annotation-set snapshots.

use super::annotation_set::AnnotationSet;

/// Immutable copy of the committed annotations at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    annotations: AnnotationSet,
}

impl Snapshot {
    /// Captures the current contents of `set`.
    pub fn capture(set: &AnnotationSet) -> Self {
        Self {
            annotations: set.clone(),
        }
    }

    pub fn annotations(&self) -> &AnnotationSet {
        &self.annotations
    }
}

/// Ordered snapshot log plus a cursor.
///
/// Invariants: the log is never empty and `0 <= index < len`. Pushing after an
/// undo discards the redo branch for good.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Snapshot>,
    index: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Snapshot::default())
    }
}

#[allow(clippy::len_without_is_empty)]
impl History {
    /// Creates a log holding only `initial`.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// Reinitializes the log to a single entry.
    pub fn reset(&mut self, initial: Snapshot) {
        self.entries.clear();
        self.entries.push(initial);
        self.index = 0;
    }

    /// Truncates any redo branch, appends `snapshot` and moves the cursor onto it.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.truncate(self.index + 1);
        self.entries.push(snapshot);
        self.index = self.entries.len() - 1;
    }

    /// Steps back one entry. Returns `None` (and leaves the cursor) at the start.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Steps forward one entry. Returns `None` (and leaves the cursor) at the end.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    pub fn current(&self) -> &Snapshot {
        &self.entries[self.index]
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
