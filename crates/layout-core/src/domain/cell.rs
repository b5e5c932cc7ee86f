//! Cell contents: [`WidgetInstanceId`] and [`Cell`].
//!
//! Persisted dashboards store every cell as a plain string, using `"."` for an
//! empty cell.  Inside the engine the distinction is made explicit with the
//! [`Cell`] enum so that "empty" can never be confused with a widget id.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::layout::LayoutError;

/// Label used for empty cells in the string-grid form.
pub const EMPTY_LABEL: &str = ".";

/// Opaque identifier of one placed widget instance.
///
/// Any non-empty string except [`EMPTY_LABEL`] is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WidgetInstanceId(String);

impl WidgetInstanceId {
    /// Creates a widget instance id.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidWidgetId`] for the empty string and for
    /// the reserved empty-cell label `"."`.
    pub fn new(id: impl Into<String>) -> Result<Self, LayoutError> {
        let id = id.into();
        if id.is_empty() || id == EMPTY_LABEL {
            return Err(LayoutError::InvalidWidgetId(id));
        }
        Ok(Self(id))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WidgetInstanceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for WidgetInstanceId {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for WidgetInstanceId {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WidgetInstanceId> for String {
    fn from(id: WidgetInstanceId) -> Self {
        id.0
    }
}

/// The content of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Cell {
    /// Nothing is placed here.
    #[default]
    Empty,
    /// Part of the footprint of the given widget instance.
    Occupied(WidgetInstanceId),
}

impl Cell {
    /// Parses the string-grid label form: `"."` is an empty cell, anything
    /// else names a widget instance.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidWidgetId`] for the empty string.
    pub fn from_label(label: &str) -> Result<Self, LayoutError> {
        if label == EMPTY_LABEL {
            return Ok(Cell::Empty);
        }
        WidgetInstanceId::new(label).map(Cell::Occupied)
    }

    /// Returns the string-grid label form.
    pub fn label(&self) -> &str {
        match self {
            Cell::Empty => EMPTY_LABEL,
            Cell::Occupied(id) => id.as_str(),
        }
    }

    /// Returns `true` for [`Cell::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the occupying widget id, if any.
    pub fn widget_id(&self) -> Option<&WidgetInstanceId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(id) => Some(id),
        }
    }

    /// Returns `true` if the cell is occupied by a widget other than `id`.
    pub fn is_occupied_by_other_than(&self, id: &WidgetInstanceId) -> bool {
        matches!(self, Cell::Occupied(other) if other != id)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<WidgetInstanceId> for Cell {
    fn from(id: WidgetInstanceId) -> Self {
        Cell::Occupied(id)
    }
}

impl From<&WidgetInstanceId> for Cell {
    fn from(id: &WidgetInstanceId) -> Self {
        Cell::Occupied(id.clone())
    }
}

impl FromStr for Cell {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl TryFrom<String> for Cell {
    type Error = LayoutError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        if label == EMPTY_LABEL {
            return Ok(Cell::Empty);
        }
        WidgetInstanceId::new(label).map(Cell::Occupied)
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => EMPTY_LABEL.to_string(),
            Cell::Occupied(id) => id.into(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
