//! Headless replay of scripted pointer events.
//!
//! A script is a TOML file with an `[[events]]` array. Each event is tagged by
//! its `type`:
//!
//! ```toml
//! [[events]]
//! type = "tool"
//! tool = "highlight"
//!
//! [[events]]
//! type = "press"
//! x = 10.0
//! y = 20.0
//!
//! [[events]]
//! type = "motion"
//! x = 200.0
//! y = 20.0
//!
//! [[events]]
//! type = "release"
//! x = 200.0
//! y = 20.0
//!
//! [[events]]
//! type = "action"
//! action = "undo"
//! ```
//!
//! Events run through [`InputState`] exactly as live pointer input would, and
//! the resulting annotation set is reported as JSON.

use crate::config::Config;
use crate::draw::{AnnotationSet, ShapeKind};
use crate::input::{Action, BoardMode, InputState, MouseButton, Tool};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// One scripted input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Press {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    Motion {
        x: f64,
        y: f64,
    },
    Release {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    /// Scroll wheel notches; positive grows the brush
    Scroll {
        delta: i32,
    },
    Action {
        action: Action,
    },
    Tool {
        tool: Tool,
    },
    Shape {
        shape: ShapeKind,
    },
    Size {
        size: u32,
    },
    /// Palette colour by name
    Color {
        color: String,
    },
}

/// Parsed replay script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay script {}", path.display()))?;
        text.parse::<Script>()
            .with_context(|| format!("Failed to parse replay script {}", path.display()))
    }
}

impl FromStr for Script {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

/// Outcome of a replay run, serialized as the CLI output.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Number of events fed to the input state before the script ended or exit was requested
    pub events_applied: usize,
    /// Committed annotations in drawing order
    pub annotations: AnnotationSet,
    /// Whether a stroke was still in progress when the script ended
    pub drafting: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub history_len: usize,
    pub history_index: usize,
    pub board_mode: BoardMode,
    pub active_tool: Tool,
    pub exited: bool,
}

/// Feeds every event of `script` through a fresh [`InputState`].
///
/// Stops early once an event requests exit.
///
/// # Errors
/// Returns an error naming the event when a colour name is unknown.
pub fn run(script: &Script, config: &Config) -> Result<ReplayReport> {
    let mut state = InputState::from_config(config);
    let mut applied = 0;

    for (index, event) in script.events.iter().enumerate() {
        debug!("Replaying event {index}: {event:?}");
        apply(&mut state, event).with_context(|| format!("Replay event {index} failed"))?;
        applied += 1;

        if state.should_exit {
            let skipped = script.events.len() - applied;
            if skipped > 0 {
                info!("Exit requested; skipping {skipped} remaining event(s)");
            }
            break;
        }
    }

    let store = state.store();
    info!(
        "Replayed {applied} event(s), {} annotation(s) committed",
        store.committed().len()
    );

    Ok(ReplayReport {
        events_applied: applied,
        annotations: store.committed().clone(),
        drafting: store.is_drafting(),
        can_undo: store.can_undo(),
        can_redo: store.can_redo(),
        history_len: store.history().len(),
        history_index: store.history().index(),
        board_mode: state.board_mode(),
        active_tool: state.active_tool(),
        exited: state.should_exit,
    })
}

fn apply(state: &mut InputState, event: &ScriptEvent) -> Result<()> {
    match event {
        ScriptEvent::Press { x, y, button } => state.on_mouse_press(*button, *x, *y),
        ScriptEvent::Motion { x, y } => state.on_mouse_motion(*x, *y),
        ScriptEvent::Release { x, y, button } => state.on_mouse_release(*button, *x, *y),
        ScriptEvent::Scroll { delta } => state.on_scroll(*delta),
        ScriptEvent::Action { action } => state.handle_action(*action),
        ScriptEvent::Tool { tool } => state.set_tool(*tool),
        ScriptEvent::Shape { shape } => state.set_shape(*shape),
        ScriptEvent::Size { size } => state.set_size(*size),
        ScriptEvent::Color { color } => state.set_color(color)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Annotation;
    use tempfile::TempDir;

    const LINE_THEN_UNDO: &str = r#"
        [[events]]
        type = "shape"
        shape = "line"

        [[events]]
        type = "press"
        x = 0.0
        y = 0.0

        [[events]]
        type = "release"
        x = 100.0
        y = 0.0

        [[events]]
        type = "press"
        x = 0.0
        y = 50.0

        [[events]]
        type = "release"
        x = 100.0
        y = 50.0

        [[events]]
        type = "action"
        action = "undo"
    "#;

    #[test]
    fn parses_all_event_kinds() {
        let script: Script = r#"
            [[events]]
            type = "tool"
            tool = "crop_eraser"

            [[events]]
            type = "press"
            x = 1.5
            y = 2.0
            button = "right"

            [[events]]
            type = "scroll"
            delta = -1

            [[events]]
            type = "color"
            color = "red"

            [[events]]
            type = "size"
            size = 10
        "#
        .parse()
        .expect("script parses");

        assert_eq!(
            script.events,
            vec![
                ScriptEvent::Tool {
                    tool: Tool::CropEraser
                },
                ScriptEvent::Press {
                    x: 1.5,
                    y: 2.0,
                    button: MouseButton::Right
                },
                ScriptEvent::Scroll { delta: -1 },
                ScriptEvent::Color {
                    color: "red".into()
                },
                ScriptEvent::Size { size: 10 },
            ]
        );
    }

    #[test]
    fn press_button_defaults_to_left() {
        let script: Script = "[[events]]\ntype = \"press\"\nx = 0.0\ny = 0.0\n"
            .parse()
            .unwrap();
        assert!(matches!(
            script.events[0],
            ScriptEvent::Press {
                button: MouseButton::Left,
                ..
            }
        ));
    }

    #[test]
    fn unknown_event_type_is_rejected() {
        assert!("[[events]]\ntype = \"teleport\"\n".parse::<Script>().is_err());
    }

    #[test]
    fn run_reports_history_state() {
        let script: Script = LINE_THEN_UNDO.parse().unwrap();
        let report = run(&script, &Config::default()).unwrap();

        assert_eq!(report.events_applied, 6);
        assert_eq!(report.annotations.len(), 1);
        assert!(matches!(
            report.annotations.get(0),
            Some(Annotation::Line { .. })
        ));
        assert!(report.can_undo);
        assert!(report.can_redo);
        assert_eq!(report.history_len, 3);
        assert_eq!(report.history_index, 1);
        assert!(!report.exited);
    }

    #[test]
    fn run_stops_after_exit() {
        let script: Script = r#"
            [[events]]
            type = "action"
            action = "exit"

            [[events]]
            type = "action"
            action = "toggle_tool"
        "#
        .parse()
        .unwrap();

        let report = run(&script, &Config::default()).unwrap();
        assert!(report.exited);
        assert_eq!(report.events_applied, 1);
        assert_eq!(report.active_tool, Tool::Pen);
    }

    #[test]
    fn unknown_color_fails_with_event_index() {
        let script: Script = "[[events]]\ntype = \"color\"\ncolor = \"mauve\"\n"
            .parse()
            .unwrap();
        let err = run(&script, &Config::default()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("event 0"));
        assert!(message.contains("mauve"));
    }

    #[test]
    fn report_serializes_annotations_as_array() {
        let script: Script = LINE_THEN_UNDO.parse().unwrap();
        let report = run(&script, &Config::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        let annotations = json["annotations"].as_array().expect("array");
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0]["shape"], "line");
        assert_eq!(json["board_mode"], "dimmed");
        assert_eq!(json["active_tool"], "pen");
    }

    #[test]
    fn load_reads_script_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("script.toml");
        fs::write(&path, LINE_THEN_UNDO).unwrap();

        let script = Script::load(&path).unwrap();
        assert_eq!(script.events.len(), 6);
        assert!(Script::load(&temp.path().join("missing.toml")).is_err());
    }
}
