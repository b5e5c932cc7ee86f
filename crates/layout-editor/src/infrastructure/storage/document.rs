//! JSON persistence for layout documents.
//!
//! A layout document stores the grid as rows of cell labels plus the cursor
//! position (see [`LayoutDocument`]).  Reading happens in two stages so that
//! a malformed file (bad JSON) and a well-formed file describing an invalid
//! layout (ragged rows, split widgets) produce distinct errors.

use std::path::{Path, PathBuf};

use layout_core::{LayoutDocument, LayoutEditorState, LayoutError};
use thiserror::Error;
use tracing::debug;

/// Error type for layout document operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing layout document at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid layout document.
    #[error("failed to parse layout document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but describes an invalid layout.
    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),
}

/// Parses and validates a layout document from JSON text.
///
/// # Errors
///
/// Returns [`DocumentError::Json`] for malformed JSON and
/// [`DocumentError::Layout`] if the layout fails validation.
pub fn parse_document(json: &str) -> Result<LayoutEditorState, DocumentError> {
    let document: LayoutDocument = serde_json::from_str(json)?;
    Ok(LayoutEditorState::try_from(document)?)
}

/// Renders `state` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`DocumentError::Json`] if serialization fails.
pub fn render_document(state: &LayoutEditorState) -> Result<String, DocumentError> {
    Ok(serde_json::to_string_pretty(&LayoutDocument::from(state.clone()))?)
}

/// Reads and validates the layout document at `path`.
///
/// # Errors
///
/// Returns [`DocumentError::Io`] if the file cannot be read, otherwise as
/// [`parse_document`].
pub fn load_document(path: &Path) -> Result<LayoutEditorState, DocumentError> {
    let json = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let state = parse_document(&json)?;
    debug!(path = %path.display(), columns = state.width(), rows = state.height(), "loaded layout document");
    Ok(state)
}

/// Writes `state` to `path` as pretty-printed JSON with a trailing newline.
///
/// # Errors
///
/// Returns [`DocumentError::Io`] for file-system failures.
pub fn save_document(state: &LayoutEditorState, path: &Path) -> Result<(), DocumentError> {
    let mut json = render_document(state)?;
    json.push('\n');
    std::fs::write(path, json).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "saved layout document");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
