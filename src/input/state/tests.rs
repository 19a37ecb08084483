use super::*;
use crate::config::Config;
use crate::draw::{Annotation, ShapeKind, color::YELLOW};
use crate::input::{Action, BoardMode, MouseButton, Tool};
use crate::util::Point;

fn create_test_input_state() -> InputState {
    InputState::from_config(&Config::default())
}

fn drag(state: &mut InputState, points: &[(f64, f64)]) {
    let (first, rest) = points.split_first().expect("at least one point");
    state.on_mouse_press(MouseButton::Left, first.0, first.1);
    for (x, y) in rest {
        state.on_mouse_motion(*x, *y);
    }
    let last = points.last().expect("at least one point");
    state.on_mouse_release(MouseButton::Left, last.0, last.1);
}

#[test]
fn test_default_state() {
    let state = create_test_input_state();
    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.active_tool(), Tool::Pen);
    assert_eq!(state.board_mode(), BoardMode::Dimmed);
    assert!(state.needs_redraw);
    assert!(!state.should_exit);
    assert!(state.store().committed().is_empty());
}

#[test]
fn test_freehand_stroke_commits() {
    let mut state = create_test_input_state();
    drag(&mut state, &[(0.0, 0.0), (10.0, 0.0), (20.0, 5.0)]);

    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.store().committed().len(), 1);
    match state.store().committed().get(0) {
        Some(Annotation::Freehand { points, style }) => {
            assert_eq!(points.len(), 3);
            assert_eq!(style.width, 4);
        }
        other => panic!("expected freehand, got {other:?}"),
    }
    assert!(state.store().can_undo());
}

#[test]
fn test_freehand_decimation_skips_close_points() {
    let mut state = create_test_input_state();
    state.set_size(20);
    // Threshold is 0.25 * 20 = 5 pixels of Manhattan distance.
    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    state.on_mouse_motion(1.0, 1.0);
    state.on_mouse_motion(2.0, 2.0);
    state.on_mouse_motion(3.0, 2.0);
    state.on_mouse_motion(10.0, 0.0);

    let draft = state.store().draft().expect("drafting");
    assert_eq!(draft.points(), &[Point::new(0.0, 0.0), Point::new(3.0, 2.0), Point::new(10.0, 0.0)]);
}

#[test]
fn test_freehand_click_without_motion_is_discarded() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Left, 5.0, 5.0);
    state.on_mouse_release(MouseButton::Left, 5.0, 5.0);

    assert!(state.store().committed().is_empty());
    assert!(!state.store().can_undo());
    assert_eq!(state.state, DrawingState::Idle);
}

#[test]
fn test_line_ends_at_release_point() {
    let mut state = create_test_input_state();
    state.set_shape(ShapeKind::Line);
    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    state.on_mouse_motion(5.0, 5.0);
    state.on_mouse_release(MouseButton::Left, 40.0, 0.0);

    match state.store().committed().get(0) {
        Some(Annotation::Line { start, end, .. }) => {
            assert_eq!(*start, Point::new(0.0, 0.0));
            assert_eq!(*end, Point::new(40.0, 0.0));
        }
        other => panic!("expected line, got {other:?}"),
    }
}

#[test]
fn test_rectangle_dragged_up_left_is_normalized() {
    let mut state = create_test_input_state();
    state.set_shape(ShapeKind::Rect);
    drag(&mut state, &[(50.0, 40.0), (10.0, 10.0)]);

    match state.store().committed().get(0) {
        Some(Annotation::Rectangle { rect, .. }) => {
            assert_eq!(rect.left, 10.0);
            assert_eq!(rect.top, 10.0);
            assert_eq!(rect.right, 50.0);
            assert_eq!(rect.bottom, 40.0);
        }
        other => panic!("expected rectangle, got {other:?}"),
    }
}

#[test]
fn test_highlight_stroke_is_translucent() {
    let mut state = create_test_input_state();
    state.handle_action(Action::TogglePen);
    assert_eq!(state.active_tool(), Tool::Highlight);

    drag(&mut state, &[(0.0, 0.0), (100.0, 0.0)]);
    let annotation = state.store().committed().get(0).expect("committed");
    assert_eq!(annotation.kind(), ShapeKind::Line);
    assert_eq!(annotation.style().color, YELLOW.with_alpha(80));
    assert_eq!(annotation.style().width, 14);
}

#[test]
fn test_eraser_removes_touched_annotations() {
    let mut state = create_test_input_state();
    drag(&mut state, &[(0.0, 0.0), (10.0, 0.0)]);
    drag(&mut state, &[(0.0, 200.0), (10.0, 200.0)]);
    assert_eq!(state.store().committed().len(), 2);

    state.set_tool(Tool::Eraser);
    state.on_mouse_press(MouseButton::Left, 500.0, 500.0);
    assert_eq!(state.state, DrawingState::Erasing { radius: 30.0 });
    state.on_mouse_motion(20.0, 10.0);
    state.on_mouse_release(MouseButton::Left, 20.0, 10.0);

    assert_eq!(state.store().committed().len(), 1);
    assert_eq!(state.state, DrawingState::Idle);
    // Two commits plus one erase.
    assert_eq!(state.store().history().len(), 4);
}

#[test]
fn test_crop_eraser_removes_on_release() {
    let mut state = create_test_input_state();
    drag(&mut state, &[(10.0, 10.0), (20.0, 20.0)]);
    drag(&mut state, &[(300.0, 300.0), (310.0, 310.0)]);

    state.set_tool(Tool::CropEraser);
    state.on_mouse_press(MouseButton::Left, 50.0, 50.0);
    state.on_mouse_motion(0.0, 0.0);
    assert_eq!(
        state.crop_selection(),
        Some(crate::util::Rect::new(0.0, 0.0, 50.0, 50.0))
    );
    // Nothing is removed until the button is released.
    assert_eq!(state.store().committed().len(), 2);

    state.on_mouse_release(MouseButton::Left, 0.0, 0.0);
    assert_eq!(state.store().committed().len(), 1);
    assert!(state.crop_selection().is_none());
}

#[test]
fn test_right_click_cancels_and_enters_view_mode() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    state.on_mouse_motion(10.0, 10.0);
    assert!(state.store().is_drafting());

    state.on_mouse_press(MouseButton::Right, 10.0, 10.0);
    assert!(!state.store().is_drafting());
    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.board_mode(), BoardMode::View);
    assert!(state.store().committed().is_empty());

    // Presses are ignored while viewing.
    drag(&mut state, &[(0.0, 0.0), (50.0, 50.0)]);
    assert!(state.store().committed().is_empty());

    state.handle_action(Action::DrawingMode);
    assert_eq!(state.board_mode(), BoardMode::Dimmed);
}

#[test]
fn test_middle_click_requests_exit() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Middle, 0.0, 0.0);
    assert!(state.should_exit);
}

#[test]
fn test_undo_redo_actions() {
    let mut state = create_test_input_state();
    drag(&mut state, &[(0.0, 0.0), (10.0, 0.0)]);
    drag(&mut state, &[(0.0, 50.0), (10.0, 50.0)]);

    state.needs_redraw = false;
    state.handle_action(Action::Undo);
    assert!(state.needs_redraw);
    assert_eq!(state.store().committed().len(), 1);

    state.handle_action(Action::Redo);
    assert_eq!(state.store().committed().len(), 2);

    state.needs_redraw = false;
    state.handle_action(Action::Redo);
    assert!(!state.needs_redraw);
}

#[test]
fn test_undo_mid_stroke_drops_draft() {
    let mut state = create_test_input_state();
    drag(&mut state, &[(0.0, 0.0), (10.0, 0.0)]);

    state.on_mouse_press(MouseButton::Left, 0.0, 100.0);
    state.on_mouse_motion(10.0, 100.0);
    state.handle_action(Action::Undo);

    assert_eq!(state.state, DrawingState::Idle);
    assert!(!state.store().is_drafting());
    assert!(state.store().committed().is_empty());

    // The rest of the drag does nothing.
    state.on_mouse_motion(20.0, 100.0);
    state.on_mouse_release(MouseButton::Left, 20.0, 100.0);
    assert!(state.store().committed().is_empty());
    assert!(state.store().can_redo());
}

#[test]
fn test_clear_action_is_undoable() {
    let mut state = create_test_input_state();
    drag(&mut state, &[(0.0, 0.0), (10.0, 0.0)]);
    state.handle_action(Action::Clear);
    assert!(state.store().committed().is_empty());

    let len = state.store().history().len();
    state.handle_action(Action::Clear);
    assert_eq!(state.store().history().len(), len);

    state.handle_action(Action::Undo);
    assert_eq!(state.store().committed().len(), 1);
}

#[test]
fn test_board_actions() {
    let mut state = create_test_input_state();
    state.handle_action(Action::ToggleBoard);
    assert_eq!(state.board_mode(), BoardMode::Blackboard);
    assert_eq!(state.background_color().a, 255);

    state.handle_action(Action::CycleBoardMode);
    assert_eq!(state.board_mode(), BoardMode::View);
    assert_eq!(state.background_color().a, 0);

    // Leaving view mode returns to the last drawing mode.
    state.handle_action(Action::DrawingMode);
    assert_eq!(state.board_mode(), BoardMode::Blackboard);

    state.handle_action(Action::ViewMode);
    state.handle_action(Action::ToggleBoard);
    assert_eq!(state.board_mode(), BoardMode::Dimmed);
}

#[test]
fn test_view_mode_cancels_crop_selection() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::CropEraser);
    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    assert!(state.crop_selection().is_some());

    state.handle_action(Action::ViewMode);
    assert!(state.crop_selection().is_none());
}

#[test]
fn test_tool_actions_change_brush() {
    let mut state = create_test_input_state();
    state.handle_action(Action::ToggleTool);
    assert_eq!(state.active_tool(), Tool::Highlight);
    state.handle_action(Action::ToggleToolReverse);
    assert_eq!(state.active_tool(), Tool::Pen);

    state.handle_action(Action::ToggleSize);
    assert_eq!(state.brush().width, 6);

    state.handle_action(Action::ToggleShape);
    assert_eq!(state.brush().shape, ShapeKind::Line);

    state.handle_action(Action::ToggleColor);
    assert_eq!(state.presets().color_name(), Some("red"));

    state.handle_action(Action::ToggleEraser);
    assert_eq!(state.active_tool(), Tool::Eraser);
}

#[test]
fn test_scroll_adjusts_size() {
    let mut state = create_test_input_state();
    state.on_scroll(3);
    assert_eq!(state.brush().width, 10);
    state.on_scroll(-20);
    assert_eq!(state.brush().width, 2);
}

#[test]
fn test_scroll_with_unvalidated_inverted_range() {
    let mut config = Config::default();
    config.sizes.min = 60;
    config.sizes.max = 10;
    let mut state = InputState::from_config(&config);

    state.on_scroll(1);
    assert_eq!(state.brush().width, 10);
    state.on_scroll(50);
    assert_eq!(state.brush().width, 60);
}

#[test]
fn test_eraser_inside_rectangle_outline_misses() {
    let mut state = create_test_input_state();
    state.set_shape(ShapeKind::Rect);
    drag(&mut state, &[(0.0, 0.0), (100.0, 100.0)]);

    state.set_tool(Tool::Eraser);
    drag(&mut state, &[(50.0, 50.0), (55.0, 50.0)]);
    assert_eq!(state.store().committed().len(), 1);

    drag(&mut state, &[(50.0, 90.0)]);
    assert!(state.store().committed().is_empty());
}

#[test]
fn test_set_color_rejects_unknown_name() {
    let mut state = create_test_input_state();
    assert!(state.set_color("chartreuse").is_err());
    assert_eq!(state.presets().color_name(), Some("white"));
}

#[test]
fn test_exit_action() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    state.handle_action(Action::Exit);
    assert!(state.should_exit);
    assert!(!state.store().is_drafting());
}

#[test]
fn test_blackboard_default_from_config() {
    let mut config = Config::default();
    config.board.default_mode = "view".into();
    let mut state = InputState::from_config(&config);
    assert_eq!(state.board_mode(), BoardMode::View);

    state.set_drawing_mode();
    assert_eq!(state.board_mode(), BoardMode::Dimmed);
}
