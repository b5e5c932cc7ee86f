//! Editor commands: the single entry point UI event handlers use to change a layout.
//!
//! Keyboard shortcuts, drag handlers and toolbar buttons all boil down to one
//! of the [`EditorCommand`] variants.  [`apply_command`] runs a command
//! against a [`LayoutEditorState`] and returns the next state.
//!
//! ```rust
//! use layout_core::editor::{apply_command, EditorCommand, SequentialWidgetIds};
//! use layout_core::{Bounds, Coordinate, LayoutEditorState};
//!
//! let mut ids = SequentialWidgetIds::new("w");
//! let state = LayoutEditorState::blank(3, 3).unwrap();
//!
//! let state = apply_command(&state, &EditorCommand::CreateWidget(Bounds::new(0, 0, 1, 1)), &mut ids).unwrap();
//! let state = apply_command(&state, &EditorCommand::ResizeSelected(Coordinate::new(1, 0)), &mut ids).unwrap();
//!
//! assert_eq!(state.to_string(), "w-1 w-1 .\n. . .\n. . .");
//! ```

pub mod ids;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::geometry::{Bounds, Coordinate};
use crate::domain::layout::{LayoutEditorState, LayoutError};

pub use ids::{SequentialWidgetIds, UuidWidgetIds, WidgetIdSource};

/// One user intent against the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorCommand {
    /// Put the cursor on a cell (e.g. clicking a widget).
    Select(Coordinate),
    /// Move the cursor, clamped to the grid.
    MoveSelection(Coordinate),
    /// Move the widget under the cursor.
    MoveSelected(Coordinate),
    /// Grow or shrink the widget under the cursor from its bottom-right corner.
    ResizeSelected(Coordinate),
    /// Remove the widget under the cursor.
    DeleteSelected,
    /// Place a new widget on empty cells, using an id from the [`WidgetIdSource`].
    CreateWidget(Bounds),
    /// Change the number of grid columns and rows.
    ResizeGrid { columns: usize, rows: usize },
}

impl fmt::Display for EditorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorCommand::Select(at) => write!(f, "select {at}"),
            EditorCommand::MoveSelection(delta) => write!(f, "move cursor by {delta}"),
            EditorCommand::MoveSelected(delta) => write!(f, "move widget by {delta}"),
            EditorCommand::ResizeSelected(delta) => write!(f, "resize widget by {delta}"),
            EditorCommand::DeleteSelected => f.write_str("delete widget"),
            EditorCommand::CreateWidget(bounds) => write!(f, "create widget {bounds}"),
            EditorCommand::ResizeGrid { columns, rows } => {
                write!(f, "resize grid to {columns}x{rows}")
            }
        }
    }
}

/// Applies `command` to `state` and returns the resulting state.
///
/// Rejected edits (collisions, leaving the grid) return an unchanged copy of
/// `state`.  For [`EditorCommand::CreateWidget`] the target area is checked
/// with [`LayoutEditorState::can_place_widget`] before an id is requested, so
/// a rejected creation never consumes an id.
///
/// # Errors
///
/// Propagates the structural [`LayoutError`]s of the underlying operation,
/// and any error from `ids`.
pub fn apply_command(
    state: &LayoutEditorState,
    command: &EditorCommand,
    ids: &mut dyn WidgetIdSource,
) -> Result<LayoutEditorState, LayoutError> {
    match command {
        EditorCommand::Select(at) => Ok(state.select(*at)),
        EditorCommand::MoveSelection(delta) => Ok(state.move_selection(*delta)),
        EditorCommand::MoveSelected(delta) => state.move_selected(*delta),
        EditorCommand::ResizeSelected(delta) => state.resize_selected(*delta),
        EditorCommand::DeleteSelected => state.delete_selected(),
        EditorCommand::CreateWidget(bounds) => {
            if !state.can_place_widget(*bounds) {
                return Ok(state.clone());
            }
            let id = ids.next_id()?;
            Ok(state.create_widget(id, *bounds))
        }
        EditorCommand::ResizeGrid { columns, rows } => state.resize_grid(*columns, *rows),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
