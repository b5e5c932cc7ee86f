//! Integration tests for layout-core: full editing sessions driven through
//! the public API, the way a UI front end uses the crate.
//!
//! Each test feeds keystrokes or commands through [`KeyMapper`] and
//! [`apply_command`] and checks the rendered grid afterwards.

use layout_core::{
    apply_command, Bounds, Coordinate, EditorCommand, KeyMapper, Keystroke, LayoutDocument,
    LayoutEditorState, SequentialWidgetIds, WidgetInstanceId,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Applies each chord in turn; chords without a binding leave the state as is.
fn press(
    mut state: LayoutEditorState,
    ids: &mut SequentialWidgetIds,
    chords: &[&str],
) -> LayoutEditorState {
    for chord in chords {
        let keystroke: Keystroke = chord.parse().expect("test chords are valid");
        if let Some(command) = KeyMapper::translate(&keystroke, &state) {
            state = apply_command(&state, &command, ids).expect("session stays in bounds");
        }
    }
    state
}

fn dashboard() -> LayoutEditorState {
    LayoutEditorState::from_labels(
        vec![
            vec![".", ".", ".", "a", "a", "."],
            vec![".", ".", ".", "a", "a", "."],
            vec!["b", ".", ".", ".", ".", "."],
            vec![".", ".", "c", "c", ".", "."],
            vec![".", ".", "c", "c", ".", "."],
            vec![".", ".", ".", ".", ".", "."],
        ],
        Coordinate::ORIGIN,
    )
    .expect("fixture layout is valid")
}

// ── Keyboard sessions ─────────────────────────────────────────────────────────

#[test]
fn test_keyboard_session_builds_a_dashboard() {
    // Arrange
    let mut ids = SequentialWidgetIds::new("w");
    let state = LayoutEditorState::blank(4, 3).unwrap();

    // Act: create a widget, grow it to 2×2 and shift it one column right.
    let state = press(
        state,
        &mut ids,
        &["Enter", "Shift+Alt+ArrowRight", "Shift+Alt+ArrowDown", "Alt+ArrowRight"],
    );

    // Assert
    assert_eq!(state.to_string(), ". w-1 w-1 .\n. w-1 w-1 .\n. . . .");
    assert_eq!(state.selection(), Coordinate::new(1, 0));
    assert_eq!(ids.issued(), 1);
}

#[test]
fn test_keyboard_session_rejections_leave_layout_intact() {
    let mut ids = SequentialWidgetIds::new("w");
    let state = LayoutEditorState::from_labels(
        vec![vec![".", "x", "x"], vec![".", "x", "x"], vec![".", ".", "."]],
        Coordinate::ORIGIN,
    )
    .unwrap();

    // New widget at the origin; moving it right runs into `x`, moving it up
    // leaves the grid, and Enter on an occupied cell creates nothing.
    let state = press(state, &mut ids, &["Space", "Alt+KeyD", "Alt+KeyW", "Enter"]);

    assert_eq!(state.to_string(), "w-1 x x\n. x x\n. . .");
    assert_eq!(ids.issued(), 1, "rejected creation must not consume an id");
}

#[test]
fn test_keyboard_session_moves_then_deletes() {
    let mut ids = SequentialWidgetIds::new("w");
    let state = LayoutEditorState::blank(3, 3).unwrap();

    let state = press(
        state,
        &mut ids,
        &["KeyJ", "KeyJ", "Enter", "Alt+KeyL", "Alt+KeyL", "Alt+KeyL"],
    );
    assert_eq!(state.to_string(), ". . .\n. . .\n. . w-1");

    let state = press(state, &mut ids, &["Delete"]);
    assert_eq!(state.to_string(), ". . .\n. . .\n. . .");
    assert_eq!(state.selection(), Coordinate::new(2, 2));
}

#[test]
fn test_plain_arrows_clamp_cursor_at_grid_edges() {
    let mut ids = SequentialWidgetIds::new("w");
    let state = press(
        dashboard(),
        &mut ids,
        &["ArrowLeft", "ArrowUp", "KeyD", "KeyD", "KeyD", "KeyD", "KeyD", "KeyD", "KeyD"],
    );
    assert_eq!(state.selection(), Coordinate::new(5, 0));
    assert_eq!(state.to_labels(), dashboard().to_labels());
}

// ── Dashboard queries ─────────────────────────────────────────────────────────

#[test]
fn test_dashboard_queries() {
    let state = dashboard().select(Coordinate::new(3, 0));
    let a = WidgetInstanceId::new("a").unwrap();

    assert_eq!(state.selected_widget_id().unwrap(), Some(&a));
    assert_eq!(state.widget_bounds(&a).unwrap(), Bounds::new(3, 0, 2, 2));

    let mut ids: Vec<&str> = state.widget_ids().into_iter().map(|id| id.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn test_commands_resize_grid_and_keep_widgets() {
    let mut ids = SequentialWidgetIds::new("w");
    let state = dashboard();

    let grown = apply_command(&state, &EditorCommand::ResizeGrid { columns: 7, rows: 6 }, &mut ids)
        .unwrap();
    assert_eq!(grown.width(), 7);
    assert_eq!(grown.placements().len(), 3);

    let shrunk = apply_command(&state, &EditorCommand::ResizeGrid { columns: 4, rows: 4 }, &mut ids);
    assert!(shrunk.is_err(), "shrinking to 4x4 cuts through `a`");
}

// ── Persistence ───────────────────────────────────────────────────────────────

#[test]
fn test_edited_state_survives_json_persistence() {
    let mut ids = SequentialWidgetIds::new("w");
    let edited = apply_command(
        &dashboard(),
        &EditorCommand::CreateWidget(Bounds::new(4, 4, 2, 2)),
        &mut ids,
    )
    .unwrap();

    let json = serde_json::to_string(&edited).unwrap();
    let document: LayoutDocument = serde_json::from_str(&json).unwrap();
    let restored = LayoutEditorState::try_from(document).unwrap();

    assert_eq!(restored, edited);
    assert_eq!(restored.selection(), Coordinate::new(4, 4));
}
