//! Domain entities for the dashboard layout editor.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What lives here? (for beginners)
//!
//! The innermost layer of the application is the **domain**.  Domain code:
//!
//! - Contains the core rules of the layout editor: where widgets may be
//!   placed, how they move and grow, and what a valid layout looks like.
//! - Has **no** imports from file systems, terminals, or UI frameworks.
//! - Can be compiled and tested on any platform without any external setup.
//!
//! Code in outer layers (the keyboard shortcut table, the command dispatcher,
//! the `layout-editor` binary) depends on the domain, but the domain never
//! depends on them.

/// Cell contents: widget instance ids and the empty marker.
pub mod cell;
/// Persisted string-grid form of a layout.
pub mod document;
/// Coordinates and rectangular bounds.
pub mod geometry;
/// The layout editor state and all grid operations.
///
/// See [`layout::LayoutEditorState`] for the main type.
pub mod layout;
