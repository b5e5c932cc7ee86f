//! Keyboard shortcut translation for the layout editor.
//!
//! A [`Keystroke`] (key plus Shift/Alt modifiers) is turned into an
//! [`EditorCommand`] by [`KeyMapper::translate`].  The translation looks at
//! the current state only to decide whether a widget is selected.
//!
//! | Keys                        | Widget selected     | Empty cell          |
//! |-----------------------------|---------------------|---------------------|
//! | direction                   | move cursor         | move cursor         |
//! | Alt + direction             | move widget         | move cursor         |
//! | Shift + Alt + direction     | resize widget       | move cursor         |
//! | `Delete` / `Backspace`      | delete widget       | nothing             |
//! | `Enter` / `Space`           | create (rejected)   | create 1×1 widget   |
//!
//! Keystrokes can be written as chords, e.g. `"Shift+Alt+ArrowRight"`, which
//! is how scripts and the `layout-editor --key` flag spell them.

pub mod keys;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::geometry::Bounds;
use crate::domain::layout::LayoutEditorState;
use crate::editor::EditorCommand;

pub use keys::EditorKey;

/// Errors from parsing a key chord string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeystrokeError {
    #[error("empty key chord")]
    Empty,

    #[error("unknown modifier {0:?} (expected Shift or Alt)")]
    UnknownModifier(String),

    #[error("unknown key code {0:?}")]
    UnknownKey(String),
}

/// A single key press with the modifiers the editor cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keystroke {
    pub key: EditorKey,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
}

impl Keystroke {
    /// A key press without modifiers.
    pub const fn plain(key: EditorKey) -> Self {
        Self {
            key,
            alt: false,
            shift: false,
        }
    }

    /// Builds a keystroke from the fields of a DOM `KeyboardEvent`.
    pub fn from_dom_event(code: &str, alt: bool, shift: bool) -> Self {
        Self {
            key: EditorKey::from_dom_code(code),
            alt,
            shift,
        }
    }
}

impl FromStr for Keystroke {
    type Err = KeystrokeError;

    /// Parses `"[Shift+][Alt+]Code"`.  Modifiers may appear in any order and
    /// are case-insensitive; `Option` is accepted as an alias for `Alt`.
    /// `Unidentified` parses to [`EditorKey::Unknown`]; any other code the
    /// editor does not know is an error.
    fn from_str(chord: &str) -> Result<Self, Self::Err> {
        let chord = chord.trim();
        if chord.is_empty() {
            return Err(KeystrokeError::Empty);
        }

        let mut parts: Vec<&str> = chord.split('+').map(str::trim).collect();
        let code = parts.pop().unwrap_or_default();
        if code.is_empty() {
            return Err(KeystrokeError::Empty);
        }

        let mut keystroke = Keystroke::plain(EditorKey::from_dom_code(code));
        if keystroke.key == EditorKey::Unknown && code != EditorKey::UNIDENTIFIED {
            return Err(KeystrokeError::UnknownKey(code.to_string()));
        }

        for modifier in parts {
            match modifier.to_ascii_lowercase().as_str() {
                "shift" => keystroke.shift = true,
                "alt" | "option" => keystroke.alt = true,
                _ => return Err(KeystrokeError::UnknownModifier(modifier.to_string())),
            }
        }
        Ok(keystroke)
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shift {
            f.write_str("Shift+")?;
        }
        if self.alt {
            f.write_str("Alt+")?;
        }
        f.write_str(self.key.dom_code().unwrap_or(EditorKey::UNIDENTIFIED))
    }
}

/// Maps keystrokes to editor commands.
pub struct KeyMapper;

impl KeyMapper {
    /// Returns the command bound to `keystroke`, or `None` if the key does
    /// nothing in the current state.
    pub fn translate(keystroke: &Keystroke, state: &LayoutEditorState) -> Option<EditorCommand> {
        // A cursor outside the grid counts as "no widget"; the command it
        // produces clamps the cursor back in.
        let widget_selected = matches!(state.selected_widget_id(), Ok(Some(_)));

        if let Some(delta) = keystroke.key.direction() {
            let command = match (keystroke.shift, keystroke.alt, widget_selected) {
                (true, true, true) => EditorCommand::ResizeSelected(delta),
                (false, true, true) => EditorCommand::MoveSelected(delta),
                _ => EditorCommand::MoveSelection(delta),
            };
            return Some(command);
        }

        match keystroke.key {
            EditorKey::Delete | EditorKey::Backspace if widget_selected => {
                Some(EditorCommand::DeleteSelected)
            }
            EditorKey::Enter | EditorKey::Space => {
                Some(EditorCommand::CreateWidget(Bounds::cell(state.selection())))
            }
            _ => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
