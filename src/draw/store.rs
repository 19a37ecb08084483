//! Annotation store: committed annotations, the live draft and undo history.
//!
//! The store is a two-state machine. While `Idle` there is no draft; `begin`
//! enters `Drafting` and `commit`/`cancel` return to `Idle`. Every operation
//! that changes the committed set pushes exactly one history snapshot, and no
//! other operation does. Calls that make no sense in the current state are
//! logged and ignored.

use super::annotation_set::AnnotationSet;
use super::history::{History, Snapshot};
use super::hit;
use super::shape::{Annotation, ShapeKind};
use crate::input::BrushDescriptor;
use crate::util::{Point, Rect};
use log::{debug, warn};

/// The annotation currently being drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    brush: BrushDescriptor,
    start: Point,
    end: Point,
    points: Vec<Point>,
}

impl Draft {
    fn new(point: Point, brush: BrushDescriptor) -> Self {
        let points = match brush.shape {
            ShapeKind::Free => vec![point],
            ShapeKind::Line | ShapeKind::Rect => Vec::new(),
        };
        Self {
            brush,
            start: point,
            end: point,
            points,
        }
    }

    pub fn brush(&self) -> &BrushDescriptor {
        &self.brush
    }

    pub fn start(&self) -> Point {
        self.start
    }

    /// Latest pointer position fed to the draft.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Accumulated freehand points (empty for lines and rectangles).
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    fn extend(&mut self, point: Point) {
        if self.brush.shape == ShapeKind::Free {
            self.points.push(point);
        }
        self.end = point;
    }

    /// Annotation this draft would commit to right now.
    ///
    /// Renderers use this for the live preview. Returns `None` for a freehand
    /// draft that still has a single point, which a commit would discard.
    pub fn preview(&self) -> Option<Annotation> {
        self.build(self.points.clone())
    }

    fn into_annotation(mut self) -> Option<Annotation> {
        let points = std::mem::take(&mut self.points);
        self.build(points)
    }

    fn build(&self, points: Vec<Point>) -> Option<Annotation> {
        let style = self.brush.style();
        match self.brush.shape {
            ShapeKind::Free if points.len() < 2 => None,
            ShapeKind::Free => Some(Annotation::Freehand { points, style }),
            ShapeKind::Line => Some(Annotation::Line {
                start: self.start,
                end: self.end,
                style,
            }),
            ShapeKind::Rect => Some(Annotation::Rectangle {
                rect: Rect::from_corners(self.start, self.end),
                style,
            }),
        }
    }
}

/// Owns the committed annotations, the draft and the history log.
#[derive(Debug, Clone)]
pub struct AnnotationStore {
    committed: AnnotationSet,
    draft: Option<Draft>,
    history: History,
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationStore {
    /// Creates an empty store whose history holds the empty initial state.
    pub fn new() -> Self {
        let committed = AnnotationSet::new();
        let history = History::new(Snapshot::capture(&committed));
        Self {
            committed,
            draft: None,
            history,
        }
    }

    /// Starts a draft at `point`. Returns `false` when a draft is already
    /// active or the brush is invalid; state is left untouched in both cases.
    pub fn begin(&mut self, point: Point, brush: BrushDescriptor) -> bool {
        if self.draft.is_some() {
            debug!("begin ignored: a draft is already in progress");
            return false;
        }
        if let Err(err) = brush.validate() {
            warn!("begin rejected: {err}");
            return false;
        }

        self.draft = Some(Draft::new(point, brush));
        true
    }

    /// Feeds a pointer position to the draft. No-op without a draft.
    pub fn extend(&mut self, point: Point) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.extend(point);
                true
            }
            None => false,
        }
    }

    /// Finalizes the draft. Returns `true` only when an annotation was appended.
    pub fn commit(&mut self) -> bool {
        let Some(draft) = self.draft.take() else {
            return false;
        };

        match draft.into_annotation() {
            Some(annotation) => {
                debug!(
                    "Committed {} annotation ({} total)",
                    annotation.kind(),
                    self.committed.len() + 1
                );
                self.committed.push(annotation);
                self.record();
                true
            }
            None => {
                debug!("Discarded freehand draft with fewer than two points");
                false
            }
        }
    }

    /// Drops the draft without touching the committed set or history.
    pub fn cancel(&mut self) -> bool {
        self.draft.take().is_some()
    }

    /// Removes annotations within `radius` of `point`; returns how many went away.
    pub fn erase_at(&mut self, point: Point, radius: f64) -> usize {
        let removed = self
            .committed
            .remove_where(|annotation| hit::hit_circle(point, radius, annotation));
        if removed > 0 {
            debug!(
                "Erased {removed} annotation(s) at ({:.1}, {:.1})",
                point.x, point.y
            );
            self.record();
        }
        removed
    }

    /// Removes annotations touching `region`; returns how many went away.
    pub fn crop_erase(&mut self, region: Rect) -> usize {
        let removed = self
            .committed
            .remove_where(|annotation| hit::hit_region(&region, annotation));
        if removed > 0 {
            debug!("Crop-erased {removed} annotation(s)");
            self.record();
        }
        removed
    }

    /// Empties the committed set. Clearing an empty set records nothing.
    pub fn clear(&mut self) -> usize {
        let removed = self.committed.clear();
        if removed > 0 {
            debug!("Cleared {removed} annotation(s)");
            self.record();
        }
        removed
    }

    /// Restores the previous snapshot. Any draft is cancelled first.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.committed = snapshot.annotations().clone();
        self.draft = None;
        true
    }

    /// Re-applies the next snapshot. Any draft is cancelled first.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.committed = snapshot.annotations().clone();
        self.draft = None;
        true
    }

    pub fn committed(&self) -> &AnnotationSet {
        &self.committed
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn is_drafting(&self) -> bool {
        self.draft.is_some()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn record(&mut self) {
        self.history.push(Snapshot::capture(&self.committed));
    }
}
