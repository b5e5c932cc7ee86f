//! Layout editor state: the dashboard grid and the editing cursor.
//!
//! A dashboard layout is a rectangular grid of cells.  Each placed widget
//! instance occupies one filled rectangle of cells; all other cells are empty.
//! The editor additionally tracks a single selected cell (the cursor).
//!
//! Every operation here is a pure transformation: it borrows the current
//! [`LayoutEditorState`] and returns a new one.  Two kinds of failure exist:
//!
//! - **Structural errors** ([`LayoutError`]) mean the caller broke a
//!   precondition (e.g. the selection points outside the grid).  They are
//!   returned as `Err`.
//! - **Rejected edits** (moving a widget off the grid, onto another widget,
//!   or shrinking it to nothing) are expected during interactive editing.
//!   They return `Ok` with an unchanged state and log a `warn!` diagnostic.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::cell::{Cell, WidgetInstanceId};
use super::document::LayoutDocument;
use super::geometry::{Bounds, Coordinate};

/// Errors raised when the layout engine is used incorrectly or fed an
/// invalid layout.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The selection lies outside the grid.
    #[error("invalid selection {0}: outside of the layout")]
    InvalidSelection(Coordinate),

    /// The requested widget instance is not placed in the grid.
    #[error("widget instance {0} not found in layout")]
    WidgetInstanceNotFound(WidgetInstanceId),

    /// A grid resize asked for fewer than one column or row.
    #[error("invalid grid size {columns}x{rows}: must be at least 1x1")]
    InvalidGridSize { columns: usize, rows: usize },

    /// Bounds that must lie inside the grid reach outside of it.
    #[error("bounds {0} reach outside of the layout")]
    BoundsOutsideGrid(Bounds),

    /// Shrinking the grid would leave only part of a widget instance behind.
    #[error("resizing the grid would cut through widget instance {0}")]
    WidgetWouldBeTruncated(WidgetInstanceId),

    /// The layout has no rows or no columns.
    #[error("layout must have at least one row and one column")]
    EmptyLayout,

    /// Not all rows have the same length.
    #[error("layout is not rectangular: row {row} has {found} cells, expected {expected}")]
    RaggedLayout {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A widget instance is split, L-shaped or has holes.
    #[error("widget instance {0} does not occupy a single filled rectangle")]
    NonRectangularWidget(WidgetInstanceId),

    /// The label is not usable as a widget instance id.
    #[error("invalid widget instance id {0:?}")]
    InvalidWidgetId(String),
}

/// The dashboard grid plus the editing cursor.
///
/// Constructed through [`LayoutEditorState::new`], [`LayoutEditorState::from_labels`]
/// or [`LayoutEditorState::blank`], all of which validate that:
///
/// - the grid has at least one row and one column and every row has the
///   same length,
/// - the selection lies inside the grid,
/// - every widget instance occupies exactly one filled rectangle.
///
/// Serializes to and from [`LayoutDocument`], re-running the same checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LayoutDocument", into = "LayoutDocument")]
pub struct LayoutEditorState {
    /// Rows of cells, top to bottom.
    layout: Vec<Vec<Cell>>,
    /// The focused cell.  Only checked lazily, see [`LayoutEditorState::select`].
    selection: Coordinate,
}

impl LayoutEditorState {
    /// Creates a validated state.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::EmptyLayout`] for a grid without rows or columns.
    /// - [`LayoutError::RaggedLayout`] if rows differ in length.
    /// - [`LayoutError::InvalidSelection`] if `selection` is outside the grid.
    /// - [`LayoutError::NonRectangularWidget`] if a widget is not one filled rectangle.
    pub fn new(layout: Vec<Vec<Cell>>, selection: Coordinate) -> Result<Self, LayoutError> {
        let expected = layout.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(LayoutError::EmptyLayout);
        }
        if let Some((row, cells)) = layout
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(LayoutError::RaggedLayout {
                row,
                expected,
                found: cells.len(),
            });
        }

        let state = Self { layout, selection };
        if state.index(selection).is_none() {
            return Err(LayoutError::InvalidSelection(selection));
        }
        state.check_widgets_are_rectangles()?;
        Ok(state)
    }

    /// Creates a validated state from string labels, `"."` marking empty cells.
    ///
    /// # Errors
    ///
    /// Same as [`LayoutEditorState::new`], plus [`LayoutError::InvalidWidgetId`]
    /// for empty labels.
    pub fn from_labels<R, S>(
        rows: impl IntoIterator<Item = R>,
        selection: Coordinate,
    ) -> Result<Self, LayoutError>
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let layout = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|label| Cell::from_label(label.as_ref()))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(layout, selection)
    }

    /// Creates an empty `columns` × `rows` grid with the cursor at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidGridSize`] if either dimension is zero.
    pub fn blank(columns: usize, rows: usize) -> Result<Self, LayoutError> {
        if columns == 0 || rows == 0 {
            return Err(LayoutError::InvalidGridSize { columns, rows });
        }
        Ok(Self {
            layout: vec![vec![Cell::Empty; columns]; rows],
            selection: Coordinate::ORIGIN,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.layout.first().map_or(0, Vec::len)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.layout.len()
    }

    /// The focused cell.  May lie outside the grid after [`LayoutEditorState::select`].
    pub fn selection(&self) -> Coordinate {
        self.selection
    }

    /// Returns the cell at `at`, or `None` outside the grid.
    pub fn cell(&self, at: Coordinate) -> Option<&Cell> {
        self.index(at).map(|(column, row)| &self.layout[row][column])
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.layout.iter().map(Vec::as_slice)
    }

    /// Returns the grid in its string-label form.
    pub fn to_labels(&self) -> Vec<Vec<String>> {
        self.layout
            .iter()
            .map(|row| row.iter().map(|cell| cell.label().to_string()).collect())
            .collect()
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// Returns the widget instance under the cursor, or `None` if that cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidSelection`] if the cursor is outside the
    /// grid.  The selection is never clamped here.
    pub fn selected_widget_id(&self) -> Result<Option<&WidgetInstanceId>, LayoutError> {
        self.cell(self.selection)
            .map(Cell::widget_id)
            .ok_or(LayoutError::InvalidSelection(self.selection))
    }

    /// Returns the bounding box of all cells occupied by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::WidgetInstanceNotFound`] if `id` is not in the grid.
    pub fn widget_bounds(&self, id: &WidgetInstanceId) -> Result<Bounds, LayoutError> {
        let mut extent: Option<(usize, usize, usize, usize)> = None;

        for (y, row) in self.layout.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if cell.widget_id() != Some(id) {
                    continue;
                }
                extent = Some(match extent {
                    None => (x, y, x, y),
                    Some((min_x, min_y, max_x, max_y)) => {
                        (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
                    }
                });
            }
        }

        let (min_x, min_y, max_x, max_y) =
            extent.ok_or_else(|| LayoutError::WidgetInstanceNotFound(id.clone()))?;
        Ok(Bounds::new(
            min_x as i32,
            min_y as i32,
            (max_x - min_x + 1) as u32,
            (max_y - min_y + 1) as u32,
        ))
    }

    /// Returns every placed widget instance id once, in row-major order of
    /// first appearance.
    pub fn widget_ids(&self) -> Vec<&WidgetInstanceId> {
        let mut seen = HashSet::new();
        self.layout
            .iter()
            .flatten()
            .filter_map(Cell::widget_id)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Returns every placed widget instance together with its bounds.
    ///
    /// This is what a renderer needs to draw the widgets on top of the grid.
    pub fn placements(&self) -> Vec<(&WidgetInstanceId, Bounds)> {
        let mut extents: HashMap<&WidgetInstanceId, (usize, usize, usize, usize)> =
            HashMap::new();
        for (y, row) in self.layout.iter().enumerate() {
            for (x, id) in row.iter().enumerate().filter_map(|(x, c)| Some((x, c.widget_id()?))) {
                extents
                    .entry(id)
                    .and_modify(|(min_x, min_y, max_x, max_y)| {
                        *min_x = (*min_x).min(x);
                        *min_y = (*min_y).min(y);
                        *max_x = (*max_x).max(x);
                        *max_y = (*max_y).max(y);
                    })
                    .or_insert((x, y, x, y));
            }
        }

        self.widget_ids()
            .into_iter()
            .filter_map(|id| {
                let (min_x, min_y, max_x, max_y) = *extents.get(id)?;
                Some((
                    id,
                    Bounds::new(
                        min_x as i32,
                        min_y as i32,
                        (max_x - min_x + 1) as u32,
                        (max_y - min_y + 1) as u32,
                    ),
                ))
            })
            .collect()
    }

    /// Returns `true` if any cell inside `bounds` satisfies `predicate`.
    ///
    /// `bounds` is clipped to the grid; cells outside are never visited.
    pub fn any_in_bounds<F>(&self, bounds: Bounds, mut predicate: F) -> bool
    where
        F: FnMut(&Cell, Coordinate) -> bool,
    {
        let Some((columns, rows)) = self.clip(bounds) else {
            return false;
        };
        rows.into_iter().any(|y| {
            columns
                .clone()
                .any(|x| predicate(&self.layout[y][x], Coordinate::new(x as i32, y as i32)))
        })
    }

    /// Returns `true` if every cell inside `bounds` satisfies `predicate`.
    ///
    /// Unlike [`LayoutEditorState::any_in_bounds`] this does not clip.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::BoundsOutsideGrid`] if `bounds` is not fully
    /// inside the grid.
    pub fn every_in_bounds<F>(&self, bounds: Bounds, mut predicate: F) -> Result<bool, LayoutError>
    where
        F: FnMut(&Cell, Coordinate) -> bool,
    {
        if !bounds.fits_within(self.width(), self.height()) {
            return Err(LayoutError::BoundsOutsideGrid(bounds));
        }
        Ok(bounds.cells().all(|at| {
            let (x, y) = (at.x as usize, at.y as usize);
            predicate(&self.layout[y][x], at)
        }))
    }

    // ── Transformations ───────────────────────────────────────────────────────

    /// Writes `cell` into every cell of `bounds`.
    ///
    /// Parts of `bounds` outside the grid are silently ignored.
    #[must_use]
    pub fn fill_with(&self, cell: impl Into<Cell>, bounds: Bounds) -> Self {
        let mut next = self.clone();
        next.paint(&cell.into(), bounds);
        next
    }

    /// Moves the cursor to `selection` without any validation.
    ///
    /// Keeping the cursor in range is up to the caller (see
    /// [`LayoutEditorState::move_selection`]); an out-of-range cursor is
    /// reported by [`LayoutEditorState::selected_widget_id`].
    #[must_use]
    pub fn select(&self, selection: Coordinate) -> Self {
        Self {
            layout: self.layout.clone(),
            selection,
        }
    }

    /// Moves the cursor by `delta`, clamping each axis to the grid.
    #[must_use]
    pub fn move_selection(&self, delta: Coordinate) -> Self {
        self.select(self.clamp_to_grid(self.selection.offset(delta)))
    }

    /// Moves the selected widget instance by `delta`.
    ///
    /// Does nothing if the cursor is on an empty cell.  The move is rejected
    /// (state returned unchanged) if the widget would leave the grid or land
    /// on another widget; overlapping its own current footprint is fine.
    /// On success the cursor follows the widget's new top-left cell.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidSelection`] if the cursor is outside the grid.
    pub fn move_selected(&self, delta: Coordinate) -> Result<Self, LayoutError> {
        let Some(id) = self.selected_widget_id()?.cloned() else {
            return Ok(self.clone());
        };

        let old_bounds = self.widget_bounds(&id)?;
        let new_bounds = old_bounds.translated(delta);

        if !new_bounds.fits_within(self.width(), self.height()) {
            warn!(widget = %id, requested = %new_bounds, "cannot move widget instance outside of the layout");
            return Ok(self.clone());
        }
        if self.any_in_bounds(new_bounds, |cell, _| cell.is_occupied_by_other_than(&id)) {
            warn!(widget = %id, requested = %new_bounds, "cannot move widget instance on top of another widget instance");
            return Ok(self.clone());
        }

        debug!(widget = %id, from = %old_bounds, to = %new_bounds, "moved widget instance");
        Ok(self.relocate(id, old_bounds, new_bounds))
    }

    /// Resizes the selected widget instance by `delta`: `delta.x` changes the
    /// width, `delta.y` the height.  The top-left corner stays in place.
    ///
    /// Does nothing if the cursor is on an empty cell.  The resize is
    /// rejected (state returned unchanged) if the widget would shrink below
    /// 1×1, grow past the grid edge, or cover another widget.  On success the
    /// cursor is placed on the widget's top-left cell.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidSelection`] if the cursor is outside the grid.
    pub fn resize_selected(&self, delta: Coordinate) -> Result<Self, LayoutError> {
        let Some(id) = self.selected_widget_id()?.cloned() else {
            return Ok(self.clone());
        };

        let old_bounds = self.widget_bounds(&id)?;
        if old_bounds.would_collapse(delta) {
            warn!(widget = %id, bounds = %old_bounds, "cannot collapse widget instance below 1x1");
            return Ok(self.clone());
        }

        let new_bounds = old_bounds.resized(delta);
        if !new_bounds.fits_within(self.width(), self.height()) {
            warn!(widget = %id, requested = %new_bounds, "cannot resize widget instance outside of the layout");
            return Ok(self.clone());
        }
        if self.any_in_bounds(new_bounds, |cell, _| cell.is_occupied_by_other_than(&id)) {
            warn!(widget = %id, requested = %new_bounds, "cannot resize widget instance on top of another widget instance");
            return Ok(self.clone());
        }

        debug!(widget = %id, from = %old_bounds, to = %new_bounds, "resized widget instance");
        Ok(self.relocate(id, old_bounds, new_bounds))
    }

    /// Removes the selected widget instance, leaving empty cells behind.
    ///
    /// Does nothing if the cursor is on an empty cell.  The cursor stays where it is.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidSelection`] if the cursor is outside the grid.
    pub fn delete_selected(&self) -> Result<Self, LayoutError> {
        let Some(id) = self.selected_widget_id()? else {
            return Ok(self.clone());
        };

        let bounds = self.widget_bounds(id)?;
        debug!(widget = %id, bounds = %bounds, "deleted widget instance");
        Ok(self.fill_with(Cell::Empty, bounds))
    }

    /// Returns `true` if a new widget instance may be placed on `bounds`: a
    /// non-empty area inside the grid that covers only empty cells.
    ///
    /// Logs a warning naming the reason when it returns `false`.
    pub fn can_place_widget(&self, bounds: Bounds) -> bool {
        if bounds.width == 0 || bounds.height == 0 {
            warn!(bounds = %bounds, "cannot create widget instance with an empty area");
            return false;
        }
        if !bounds.fits_within(self.width(), self.height()) {
            warn!(bounds = %bounds, "cannot create widget instance outside of the layout");
            return false;
        }
        if self.any_in_bounds(bounds, |cell, _| !cell.is_empty()) {
            warn!(bounds = %bounds, "cannot create widget instance on top of another widget instance");
            return false;
        }
        true
    }

    /// Places a new widget instance `id` on `bounds` and selects its top-left cell.
    ///
    /// Rejected (state returned unchanged) if [`can_place_widget`](Self::can_place_widget)
    /// refuses `bounds`, or if `id` is already placed.
    #[must_use]
    pub fn create_widget(&self, id: WidgetInstanceId, bounds: Bounds) -> Self {
        if !self.can_place_widget(bounds) {
            return self.clone();
        }
        if self.layout.iter().flatten().any(|cell| cell.widget_id() == Some(&id)) {
            warn!(widget = %id, "widget instance is already placed in the layout");
            return self.clone();
        }

        debug!(widget = %id, bounds = %bounds, "created widget instance");
        let mut next = self.fill_with(&id, bounds);
        next.selection = bounds.origin();
        next
    }

    /// Changes the grid to `columns` × `rows`.
    ///
    /// Growing fills the new cells with empty cells.  Shrinking drops the
    /// cells beyond the new extents; widgets lying completely outside are
    /// removed.  The cursor is clamped into the new grid.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::InvalidGridSize`] if `columns` or `rows` is zero.
    /// - [`LayoutError::WidgetWouldBeTruncated`] if the new edge would cut
    ///   through a widget, leaving only part of it in the grid.
    pub fn resize_grid(&self, columns: usize, rows: usize) -> Result<Self, LayoutError> {
        if columns == 0 || rows == 0 {
            return Err(LayoutError::InvalidGridSize { columns, rows });
        }

        let area = Bounds::new(
            0,
            0,
            u32::try_from(columns).unwrap_or(u32::MAX),
            u32::try_from(rows).unwrap_or(u32::MAX),
        );
        if let Some((id, _)) = self
            .placements()
            .into_iter()
            .find(|(_, bounds)| bounds.overlaps(&area) && !bounds.fits_within(columns, rows))
        {
            return Err(LayoutError::WidgetWouldBeTruncated(id.clone()));
        }

        let layout = (0..rows)
            .map(|y| {
                (0..columns)
                    .map(|x| {
                        self.layout
                            .get(y)
                            .and_then(|row| row.get(x))
                            .cloned()
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        let mut next = Self {
            layout,
            selection: self.selection,
        };
        next.selection = next.clamp_to_grid(self.selection);
        debug!(columns, rows, "resized layout grid");
        Ok(next)
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    /// Converts a coordinate into `(column, row)` indices if it lies in the grid.
    fn index(&self, at: Coordinate) -> Option<(usize, usize)> {
        let column = usize::try_from(at.x).ok()?;
        let row = usize::try_from(at.y).ok()?;
        (column < self.width() && row < self.height()).then_some((column, row))
    }

    /// Clips `bounds` to the grid, returning the column and row index ranges.
    fn clip(&self, bounds: Bounds) -> Option<(std::ops::Range<usize>, std::ops::Range<usize>)> {
        let start_x = i64::from(bounds.x).max(0);
        let start_y = i64::from(bounds.y).max(0);
        let end_x = bounds.right().min(self.width() as i64);
        let end_y = bounds.bottom().min(self.height() as i64);
        if start_x >= end_x || start_y >= end_y {
            return None;
        }
        Some((
            start_x as usize..end_x as usize,
            start_y as usize..end_y as usize,
        ))
    }

    fn clamp_to_grid(&self, at: Coordinate) -> Coordinate {
        let max_x = self.width().saturating_sub(1) as i32;
        let max_y = self.height().saturating_sub(1) as i32;
        Coordinate::new(at.x.clamp(0, max_x), at.y.clamp(0, max_y))
    }

    fn paint(&mut self, cell: &Cell, bounds: Bounds) {
        let Some((columns, rows)) = self.clip(bounds) else {
            return;
        };
        for row in &mut self.layout[rows] {
            for target in &mut row[columns.clone()] {
                *target = cell.clone();
            }
        }
    }

    /// Clears `from`, paints `to` with `id` and selects the top-left of `to`.
    fn relocate(&self, id: WidgetInstanceId, from: Bounds, to: Bounds) -> Self {
        let mut next = self.clone();
        next.paint(&Cell::Empty, from);
        next.paint(&Cell::Occupied(id), to);
        next.selection = to.origin();
        next
    }

    fn check_widgets_are_rectangles(&self) -> Result<(), LayoutError> {
        let mut counts: HashMap<&WidgetInstanceId, u64> = HashMap::new();
        for id in self.layout.iter().flatten().filter_map(Cell::widget_id) {
            *counts.entry(id).or_default() += 1;
        }

        for (id, bounds) in self.placements() {
            let area = u64::from(bounds.width) * u64::from(bounds.height);
            if counts.get(id).copied() != Some(area) {
                return Err(LayoutError::NonRectangularWidget(id.clone()));
            }
        }
        Ok(())
    }
}

impl Default for LayoutEditorState {
    /// A 2×2 empty grid, the layout of a freshly created dashboard.
    fn default() -> Self {
        Self {
            layout: vec![vec![Cell::Empty; 2]; 2],
            selection: Coordinate::ORIGIN,
        }
    }
}

impl fmt::Display for LayoutEditorState {
    /// Renders one line per row with space-separated labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.layout.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (column, cell) in row.iter().enumerate() {
                if column > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
