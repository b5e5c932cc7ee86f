//! The persisted string-grid form of a layout.
//!
//! Dashboards are stored as JSON with the layout as an array of rows, each row
//! an array of cell labels (`"."` for empty cells):
//!
//! ```json
//! {
//!   "layout": [[".", "a", "a"], [".", "a", "a"]],
//!   "selection": { "x": 1, "y": 0 }
//! }
//! ```
//!
//! The selection is editor state rather than dashboard data, so it is optional
//! when reading and defaults to the top-left cell.
//!
//! Converting a document into a [`LayoutEditorState`] runs the full
//! validation of [`LayoutEditorState::from_labels`]; a document read from disk
//! is never trusted to be rectangular.

use serde::{Deserialize, Serialize};

use super::geometry::Coordinate;
use super::layout::{LayoutEditorState, LayoutError};

/// Serializable form of [`LayoutEditorState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDocument {
    /// Rows of cell labels.
    pub layout: Vec<Vec<String>>,
    /// The focused cell.
    #[serde(default)]
    pub selection: Coordinate,
}

impl TryFrom<LayoutDocument> for LayoutEditorState {
    type Error = LayoutError;

    fn try_from(document: LayoutDocument) -> Result<Self, Self::Error> {
        LayoutEditorState::from_labels(document.layout, document.selection)
    }
}

impl From<LayoutEditorState> for LayoutDocument {
    fn from(state: LayoutEditorState) -> Self {
        Self {
            layout: state.to_labels(),
            selection: state.selection(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_serializes_as_string_grid() {
        let state = LayoutEditorState::from_labels(
            vec![vec![".", "a"], vec![".", "a"]],
            Coordinate::new(1, 1),
        )
        .unwrap();

        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "layout": [[".", "a"], [".", "a"]],
                "selection": { "x": 1, "y": 1 }
            })
        );
    }

    #[test]
    fn test_deserialize_without_selection_selects_origin() {
        let state: LayoutEditorState =
            serde_json::from_str(r#"{ "layout": [["a", "."]] }"#).unwrap();
        assert_eq!(state.selection(), Coordinate::ORIGIN);
        assert_eq!(state.width(), 2);
    }

    #[test]
    fn test_deserialize_rejects_ragged_layout() {
        let result: Result<LayoutEditorState, _> =
            serde_json::from_str(r#"{ "layout": [[".", "."], ["."]] }"#);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("not rectangular"), "got: {message}");
    }

    #[test]
    fn test_deserialize_rejects_selection_outside_layout() {
        let result: Result<LayoutEditorState, _> = serde_json::from_str(
            r#"{ "layout": [["."]], "selection": { "x": 0, "y": 3 } }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_non_rectangular_widget() {
        let result: Result<LayoutEditorState, _> =
            serde_json::from_str(r#"{ "layout": [["a", "."], ["a", "a"]] }"#);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("single filled rectangle"), "got: {message}");
    }

    #[test]
    fn test_document_conversion_keeps_labels_and_selection() {
        let document = LayoutDocument {
            layout: vec![vec!["w1".into(), "w1".into(), ".".into()]],
            selection: Coordinate::new(2, 0),
        };

        let state = LayoutEditorState::try_from(document.clone()).unwrap();

        assert_eq!(LayoutDocument::from(state), document);
    }
}
