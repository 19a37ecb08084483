use crate::input::action::Action;

use super::{DrawingState, InputState};

impl InputState {
    /// Dispatches a discrete action.
    ///
    /// Undo and redo drop any in-progress stroke along with the draft.
    /// Clear leaves an in-progress stroke alone; it commits on top of the
    /// cleared canvas.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Exit => {
                self.cancel_pointer_action();
                self.should_exit = true;
            }
            Action::Undo => {
                if self.store.undo() {
                    self.after_history_jump();
                }
            }
            Action::Redo => {
                if self.store.redo() {
                    self.after_history_jump();
                }
            }
            Action::Clear => {
                if self.store.clear() > 0 {
                    log::info!("Cleared canvas");
                    self.needs_redraw = true;
                }
            }
            Action::ToggleTool => {
                self.presets.toggle_tool(false);
                self.needs_redraw = true;
            }
            Action::ToggleToolReverse => {
                self.presets.toggle_tool(true);
                self.needs_redraw = true;
            }
            Action::TogglePen => {
                self.presets.toggle_pen();
                self.needs_redraw = true;
            }
            Action::ToggleEraser => {
                self.presets.toggle_eraser();
                self.needs_redraw = true;
            }
            Action::ToggleShape => {
                self.presets.toggle_shape(false);
                self.needs_redraw = true;
            }
            Action::ToggleSize => {
                self.presets.toggle_size(false);
                self.needs_redraw = true;
            }
            Action::ToggleColor => {
                self.presets.toggle_color(false);
                self.needs_redraw = true;
            }
            Action::ToggleBoard => {
                self.switch_board_mode(self.board_mode.toggled());
            }
            Action::CycleBoardMode => {
                self.switch_board_mode(self.board_mode.cycled(false));
            }
            Action::ViewMode => {
                self.set_view_mode();
            }
            Action::DrawingMode => {
                self.set_drawing_mode();
            }
        }
    }

    fn after_history_jump(&mut self) {
        if self.state == DrawingState::Drawing {
            self.state = DrawingState::Idle;
        }
        self.needs_redraw = true;
    }
}
