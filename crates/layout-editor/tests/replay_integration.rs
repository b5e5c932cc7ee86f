//! Integration tests for the edit pipeline.
//!
//! These tests exercise the application layer of layout-editor end-to-end:
//! document parsing + script parsing + replay + document rendering.

use layout_core::{Coordinate, SequentialWidgetIds};
use layout_editor::application::replay::{replay, ReplayError};
use layout_editor::application::script::parse_script;
use layout_editor::infrastructure::storage::document::{parse_document, render_document};

const DASHBOARD: &str = r#"{
  "layout": [
    [".", ".", ".", "a", "a", "."],
    [".", ".", ".", "a", "a", "."],
    ["b", ".", ".", ".", ".", "."],
    [".", ".", "c", "c", ".", "."],
    [".", ".", "c", "c", ".", "."],
    [".", ".", ".", ".", ".", "."]
  ],
  "selection": { "x": 3, "y": 0 }
}"#;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_script_rearranges_dashboard() {
    // Arrange
    let state = parse_document(DASHBOARD).expect("fixture document is valid");
    let steps = parse_script(
        "# push `a` to the right edge, then grow `b` downwards\n\
         Alt+ArrowRight\n\
         select 0 2\n\
         Shift+Alt+ArrowDown\n",
    )
    .unwrap();
    let mut ids = SequentialWidgetIds::new("new");

    // Act
    let (state, summary) = replay(state, &steps, &mut ids).unwrap();

    // Assert
    assert_eq!(summary.unchanged, 0);
    assert_eq!(
        state.to_string(),
        [
            ". . . . a a",
            ". . . . a a",
            "b . . . . .",
            "b . c c . .",
            ". . c c . .",
            ". . . . . .",
        ]
        .join("\n")
    );
    assert_eq!(state.selection(), Coordinate::new(0, 2));
}

#[test]
fn test_script_creates_widgets_with_sequential_ids() {
    let state = parse_document(DASHBOARD).unwrap();
    let steps = parse_script("create 0 5 2 1\nselect 5 4\nEnter").unwrap();
    let mut ids = SequentialWidgetIds::new("new");

    let (state, _) = replay(state, &steps, &mut ids).unwrap();

    let rendered = render_document(&state).unwrap();
    let reparsed = parse_document(&rendered).unwrap();
    assert_eq!(reparsed, state);
    assert_eq!(ids.issued(), 2);
    assert!(state.to_string().ends_with("new-1 new-1 . . . ."));
    assert_eq!(state.selection(), Coordinate::new(5, 4));
}

#[test]
fn test_shrinking_through_a_widget_aborts_with_step_number() {
    let state = parse_document(DASHBOARD).unwrap();
    let steps = parse_script("KeyJ\ngrid 4 6").unwrap();
    let mut ids = SequentialWidgetIds::new("new");

    let error = replay(state, &steps, &mut ids).unwrap_err();

    let ReplayError::StepFailed { step, .. } = &error;
    assert_eq!(*step, 2);
    assert!(error.to_string().contains("cut through widget instance a"), "got: {error}");
}
