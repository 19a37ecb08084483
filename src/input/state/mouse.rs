use crate::draw::ShapeKind;
use crate::input::{events::MouseButton, tool::Tool};
use crate::util::{Point, Rect};
use log::debug;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// # Behavior
    /// - Left click while Idle: pen/highlight start a stroke, the eraser erases
    ///   under the pointer, the crop eraser starts a selection. Ignored in view mode.
    /// - Right click: cancels the current stroke and enters view mode
    /// - Middle click: requests exit
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        let point = Point::new(x, y);
        self.cursor = Some(point);

        match button {
            MouseButton::Left => {
                if !self.board_mode.allows_drawing() {
                    debug!("Press ignored in view mode");
                    return;
                }
                if self.state != DrawingState::Idle {
                    debug!("Press ignored: {:?} already in progress", self.state);
                    return;
                }

                let brush = self.presets.brush();
                match brush.tool {
                    Tool::Pen | Tool::Highlight => {
                        if self.store.begin(point, brush) {
                            self.state = DrawingState::Drawing;
                            self.needs_redraw = true;
                        }
                    }
                    Tool::Eraser => {
                        let radius = f64::from(brush.width);
                        self.state = DrawingState::Erasing { radius };
                        if self.store.erase_at(point, radius) > 0 {
                            self.needs_redraw = true;
                        }
                    }
                    Tool::CropEraser => {
                        self.state = DrawingState::Cropping {
                            start: point,
                            end: point,
                        };
                        self.needs_redraw = true;
                    }
                }
            }
            MouseButton::Right => {
                self.cancel_pointer_action();
                self.set_view_mode();
            }
            MouseButton::Middle => {
                log::info!("Exit requested from middle click");
                self.should_exit = true;
            }
        }
    }

    /// Processes mouse motion events.
    ///
    /// # Behavior
    /// - Freehand strokes: appends the point once it is far enough from the
    ///   previous one (`decimation_factor` × stroke width, Manhattan distance)
    /// - Line and rectangle strokes: moves the end point
    /// - Eraser: erases under the pointer
    /// - Crop eraser: moves the selection corner
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        self.cursor = Some(point);

        match self.state {
            DrawingState::Idle => {}
            DrawingState::Drawing => {
                let Some(draft) = self.store.draft() else {
                    // Undo or redo dropped the draft mid-drag.
                    self.state = DrawingState::Idle;
                    return;
                };

                let accept = match draft.brush().shape {
                    ShapeKind::Free => {
                        let threshold = self.decimation_factor * f64::from(draft.brush().width);
                        draft
                            .points()
                            .last()
                            .is_none_or(|last| last.manhattan_distance(point) >= threshold)
                    }
                    ShapeKind::Line | ShapeKind::Rect => true,
                };

                if accept && self.store.extend(point) {
                    self.needs_redraw = true;
                }
            }
            DrawingState::Erasing { radius } => {
                if self.store.erase_at(point, radius) > 0 {
                    self.needs_redraw = true;
                }
            }
            DrawingState::Cropping { start, .. } => {
                self.state = DrawingState::Cropping { start, end: point };
                self.needs_redraw = true;
            }
        }
    }

    /// Processes mouse button release events.
    ///
    /// # Behavior
    /// When the left button is released:
    /// - Line and rectangle strokes end at the release point, then commit
    /// - Freehand strokes commit with the points already collected
    /// - Crop selections erase everything touching the normalized rectangle
    /// - Returns to Idle state
    pub fn on_mouse_release(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left {
            return;
        }

        let point = Point::new(x, y);
        self.cursor = Some(point);

        match self.state {
            DrawingState::Idle => {}
            DrawingState::Drawing => {
                let extends_to_release = self
                    .store
                    .draft()
                    .is_some_and(|draft| draft.brush().shape != ShapeKind::Free);
                if extends_to_release {
                    self.store.extend(point);
                }
                self.store.commit();
                self.needs_redraw = true;
            }
            DrawingState::Erasing { .. } => {}
            DrawingState::Cropping { start, .. } => {
                let removed = self.store.crop_erase(Rect::from_corners(start, point));
                debug!("Crop selection removed {removed} annotation(s)");
                self.needs_redraw = true;
            }
        }

        self.state = DrawingState::Idle;
    }
}
