//! Keys the layout editor reacts to, identified by their DOM
//! `KeyboardEvent.code` strings.
//!
//! # Why `code` and not `key`? (for beginners)
//!
//! A browser keyboard event carries two names for the pressed key:
//!
//! - `key` is the *character* produced (`"w"`, `"W"`, `"z"` on AZERTY…).
//! - `code` is the *physical position* (`"KeyW"` no matter the layout).
//!
//! Movement shortcuts are about position (WASD forms a cross on every
//! keyboard), so the editor matches on `code`.
//!
//! Three direction schemes are supported side by side:
//!
//! | Scheme  | Up        | Down        | Left        | Right        |
//! |---------|-----------|-------------|-------------|--------------|
//! | Arrows  | `ArrowUp` | `ArrowDown` | `ArrowLeft` | `ArrowRight` |
//! | WASD    | `KeyW`    | `KeyS`      | `KeyA`      | `KeyD`       |
//! | Vim     | `KeyK`    | `KeyJ`      | `KeyH`      | `KeyL`       |

use serde::{Deserialize, Serialize};

use crate::domain::geometry::Coordinate;

/// A key with a meaning in the layout editor.
///
/// [`EditorKey::Unknown`] stands for every other key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditorKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyH,
    KeyJ,
    KeyK,
    KeyL,
    Delete,
    Backspace,
    Enter,
    Space,
    Unknown,
}

impl EditorKey {
    /// Chord spelling of [`EditorKey::Unknown`], borrowed from the DOM's
    /// `"Unidentified"` key value.
    pub const UNIDENTIFIED: &'static str = "Unidentified";

    /// Every known key, in table order.
    pub const ALL: [EditorKey; 16] = [
        EditorKey::ArrowUp,
        EditorKey::ArrowDown,
        EditorKey::ArrowLeft,
        EditorKey::ArrowRight,
        EditorKey::KeyW,
        EditorKey::KeyA,
        EditorKey::KeyS,
        EditorKey::KeyD,
        EditorKey::KeyH,
        EditorKey::KeyJ,
        EditorKey::KeyK,
        EditorKey::KeyL,
        EditorKey::Delete,
        EditorKey::Backspace,
        EditorKey::Enter,
        EditorKey::Space,
    ];

    /// Looks up a DOM `KeyboardEvent.code` string.
    ///
    /// Returns [`EditorKey::Unknown`] for codes the editor does not use.
    pub fn from_dom_code(code: &str) -> Self {
        match code {
            "ArrowUp" => EditorKey::ArrowUp,
            "ArrowDown" => EditorKey::ArrowDown,
            "ArrowLeft" => EditorKey::ArrowLeft,
            "ArrowRight" => EditorKey::ArrowRight,
            "KeyW" => EditorKey::KeyW,
            "KeyA" => EditorKey::KeyA,
            "KeyS" => EditorKey::KeyS,
            "KeyD" => EditorKey::KeyD,
            "KeyH" => EditorKey::KeyH,
            "KeyJ" => EditorKey::KeyJ,
            "KeyK" => EditorKey::KeyK,
            "KeyL" => EditorKey::KeyL,
            "Delete" => EditorKey::Delete,
            "Backspace" => EditorKey::Backspace,
            "Enter" => EditorKey::Enter,
            "Space" => EditorKey::Space,
            _ => EditorKey::Unknown,
        }
    }

    /// Returns the DOM `KeyboardEvent.code` string, or `None` for [`EditorKey::Unknown`].
    pub fn dom_code(self) -> Option<&'static str> {
        match self {
            EditorKey::ArrowUp => Some("ArrowUp"),
            EditorKey::ArrowDown => Some("ArrowDown"),
            EditorKey::ArrowLeft => Some("ArrowLeft"),
            EditorKey::ArrowRight => Some("ArrowRight"),
            EditorKey::KeyW => Some("KeyW"),
            EditorKey::KeyA => Some("KeyA"),
            EditorKey::KeyS => Some("KeyS"),
            EditorKey::KeyD => Some("KeyD"),
            EditorKey::KeyH => Some("KeyH"),
            EditorKey::KeyJ => Some("KeyJ"),
            EditorKey::KeyK => Some("KeyK"),
            EditorKey::KeyL => Some("KeyL"),
            EditorKey::Delete => Some("Delete"),
            EditorKey::Backspace => Some("Backspace"),
            EditorKey::Enter => Some("Enter"),
            EditorKey::Space => Some("Space"),
            EditorKey::Unknown => None,
        }
    }

    /// Returns the unit delta for direction keys, `None` for all others.
    pub fn direction(self) -> Option<Coordinate> {
        match self {
            EditorKey::ArrowUp | EditorKey::KeyW | EditorKey::KeyK => Some(Coordinate::new(0, -1)),
            EditorKey::ArrowDown | EditorKey::KeyS | EditorKey::KeyJ => Some(Coordinate::new(0, 1)),
            EditorKey::ArrowLeft | EditorKey::KeyA | EditorKey::KeyH => Some(Coordinate::new(-1, 0)),
            EditorKey::ArrowRight | EditorKey::KeyD | EditorKey::KeyL => Some(Coordinate::new(1, 0)),
            _ => None,
        }
    }
}
