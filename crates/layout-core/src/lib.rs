//! # layout-core
//!
//! Grid engine for a dashboard layout editor: widget placement, cursor
//! selection, moving and resizing widgets, and resizing the grid itself.
//!
//! This crate is pure: it has no dependencies on file systems, terminals or
//! UI frameworks, and every operation returns a new state instead of
//! mutating the old one.
//!
//! # Architecture overview (for beginners)
//!
//! A dashboard is a rectangular grid of cells.  Every widget placed on the
//! dashboard (a chart, a table, …) is identified by a *widget instance id* and
//! covers one filled rectangle of cells.  Empty cells are written as `"."`:
//!
//! ```text
//! a a b
//! a a .
//! . c c
//! ```
//!
//! The crate is split into three modules:
//!
//! - **`domain`** – The grid itself ([`LayoutEditorState`]), cell contents,
//!   geometry helpers, and the JSON document form used for persistence.
//!
//! - **`editor`** – [`EditorCommand`], one value per user intent, and
//!   [`apply_command`] which runs it.  New widget ids come from a
//!   [`WidgetIdSource`] supplied by the caller.
//!
//! - **`keymap`** – Turns keyboard shortcuts (arrows, WASD, HJKL with
//!   Shift/Alt) into editor commands.

// Declare the three top-level modules.  Rust will look for each in a
// subdirectory with the same name (e.g., src/domain/mod.rs).
pub mod domain;
pub mod editor;
pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `layout_core::LayoutEditorState` instead of
// `layout_core::domain::layout::LayoutEditorState`.
pub use domain::cell::{Cell, WidgetInstanceId, EMPTY_LABEL};
pub use domain::document::LayoutDocument;
pub use domain::geometry::{Bounds, Coordinate};
pub use domain::layout::{LayoutEditorState, LayoutError};
pub use editor::{apply_command, EditorCommand, SequentialWidgetIds, UuidWidgetIds, WidgetIdSource};
pub use keymap::{EditorKey, KeyMapper, Keystroke, KeystrokeError};
