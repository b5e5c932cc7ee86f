//! Grid geometry value types: [`Coordinate`] and [`Bounds`].
//!
//! All positions are measured in grid cells, not pixels.  The origin (0, 0)
//! is the top-left cell; `x` grows to the right (columns) and `y` grows
//! downwards (rows).
//!
//! Coordinates are signed on purpose.  The same type is used for deltas
//! ("move one cell to the left" is `{ x: -1, y: 0 }`) and for candidate
//! positions that have not yet been checked against the grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An `(x, y)` cell position or a cell delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column index (or column delta).
    pub x: i32,
    /// Row index (or row delta).
    pub y: i32,
}

impl Coordinate {
    /// The origin cell, also the "no movement" delta.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Creates a new coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this coordinate shifted by `delta`.
    pub fn offset(self, delta: Coordinate) -> Self {
        Self {
            x: self.x.saturating_add(delta.x),
            y: self.y.saturating_add(delta.y),
        }
    }

    /// Returns the delta pointing the opposite way.
    pub fn negated(self) -> Self {
        Self {
            x: self.x.saturating_neg(),
            y: self.y.saturating_neg(),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A rectangular block of cells: columns `[x, x + width)`, rows `[y, y + height)`.
///
/// Bounds produced by the engine always have `width >= 1` and `height >= 1`.
/// Bounds passed in by callers may be partially (or entirely) outside the
/// grid; each operation documents whether it clips or rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    /// Column of the top-left cell.
    pub x: i32,
    /// Row of the top-left cell.
    pub y: i32,
    /// Number of columns covered.
    pub width: u32,
    /// Number of rows covered.
    pub height: u32,
}

impl Bounds {
    /// Creates bounds from a top-left corner and a size.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A 1×1 block at `at`.
    pub const fn cell(at: Coordinate) -> Self {
        Self::new(at.x, at.y, 1, 1)
    }

    /// The top-left cell.
    pub fn origin(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }

    /// Returns the rightmost column (exclusive).
    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    /// Returns the bottommost row (exclusive).
    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    /// Returns `true` if `at` lies inside these bounds.
    pub fn contains(&self, at: Coordinate) -> bool {
        i64::from(at.x) >= i64::from(self.x)
            && i64::from(at.x) < self.right()
            && i64::from(at.y) >= i64::from(self.y)
            && i64::from(at.y) < self.bottom()
    }

    /// Returns `true` if the bounds lie completely inside a `columns` × `rows` grid.
    pub fn fits_within(&self, columns: usize, rows: usize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.right() <= columns as i64
            && self.bottom() <= rows as i64
    }

    /// Returns `true` if this block shares at least one cell with `other`.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        i64::from(self.x) < other.right()
            && self.right() > i64::from(other.x)
            && i64::from(self.y) < other.bottom()
            && self.bottom() > i64::from(other.y)
    }

    /// Moves the top-left corner by `delta`, keeping the size.
    ///
    /// The result is not clamped to any grid; callers check it with
    /// [`Bounds::fits_within`].
    pub fn translated(&self, delta: Coordinate) -> Self {
        let origin = self.origin().offset(delta);
        Self::new(origin.x, origin.y, self.width, self.height)
    }

    /// Grows or shrinks the block by `delta` (x → width, y → height),
    /// keeping the top-left corner pinned.
    ///
    /// Width and height never drop below 1.  Use [`Bounds::would_collapse`]
    /// to find out whether the floor was hit.
    pub fn resized(&self, delta: Coordinate) -> Self {
        Self::new(
            self.x,
            self.y,
            clamped_extent(self.width, delta.x),
            clamped_extent(self.height, delta.y),
        )
    }

    /// Returns `true` if resizing by `delta` would leave a width or height below 1.
    pub fn would_collapse(&self, delta: Coordinate) -> bool {
        i64::from(self.width) + i64::from(delta.x) < 1
            || i64::from(self.height) + i64::from(delta.y) < 1
    }

    /// Iterates over every cell position in these bounds, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (x, y, width, height) = (self.x, self.y, self.width, self.height);
        (0..height).flat_map(move |row| {
            (0..width).map(move |column| {
                Coordinate::new(
                    x.saturating_add(column as i32),
                    y.saturating_add(row as i32),
                )
            })
        })
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}

fn clamped_extent(extent: u32, delta: i32) -> u32 {
    (i64::from(extent) + i64::from(delta)).clamp(1, i64::from(u32::MAX)) as u32
}

// ── Tests ─────────────────────────────────────────────────────────────────────
