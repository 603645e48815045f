use crate::error::{DbResult, DragboardError};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbol {
    /// Letter, word, or digit content.
    Text(String),
    /// The word-finalizing delimiter.
    Space,
    /// Filler cell; selecting it is a no-op.
    Blank,
}

impl Symbol {
    pub fn text(s: &str) -> Self {
        Symbol::Text(s.to_string())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Text(s) => write!(f, "{}", s),
            Symbol::Space => write!(f, "Space"),
            Symbol::Blank => write!(f, " "),
        }
    }
}

/// A grid position: (row, column), row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Physical size of the rectangle the host renders the board into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A rectangular board of symbols. Immutable for the lifetime of a gesture;
/// rebuilt from the configured layout at every gesture start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Symbol>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Symbol>>) -> DbResult<Self> {
        let first_len = rows
            .first()
            .map(|r| r.len())
            .filter(|&len| len > 0)
            .ok_or_else(|| DragboardError::Validation("grid must not be empty".to_string()))?;

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != first_len) {
            return Err(DragboardError::Validation(format!(
                "grid is ragged: row {} has {} cells, expected {}",
                i,
                row.len(),
                first_len
            )));
        }

        Ok(Self { rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows[0].len()
    }

    pub fn rows(&self) -> &[Vec<Symbol>] {
        &self.rows
    }

    /// Maps a physical point to the cell under it by dividing the bounds into
    /// `rows x cols` equal cells (floor division). `None` for points off the
    /// board or degenerate bounds.
    pub fn cell_at(&self, point: Point, bounds: Bounds) -> Option<Cell> {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return None;
        }
        if !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }

        let cell_width = bounds.width / self.col_count() as f32;
        let cell_height = bounds.height / self.row_count() as f32;
        let col = (point.x / cell_width).floor() as usize;
        let row = (point.y / cell_height).floor() as usize;

        if row < self.row_count() && col < self.col_count() {
            Some(Cell { row, col })
        } else {
            None
        }
    }

    /// Direct lookup. Out-of-bounds cells are a programming invariant
    /// violation (cells come from `cell_at`), so this indexes unchecked.
    pub fn symbol_at(&self, cell: Cell) -> &Symbol {
        &self.rows[cell.row][cell.col]
    }
}
