//! The game grid: positions, cells and cell capacity.
//!
//! ## Layout
//!
//! Cells are stored row-major in an `im::Vector`. Cloning a `Board` is O(1)
//! and shares structure with the original, so a clone can be mutated freely
//! while every other holder keeps seeing the untouched grid. The engine
//! relies on this to publish each move's board as a fresh snapshot.
//!
//! ## Capacity
//!
//! A cell detonates once it holds as many atoms as its capacity:
//! 2 on a corner, 3 on an edge, 4 in the interior.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerColor;

/// A grid coordinate. Row 0 is the top row, column 0 the leftmost column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// One grid square: an atom count and the player owning those atoms.
///
/// A settled cell is either empty (`count == 0`, no owner) or owned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub count: u32,
    pub owner: Option<PlayerColor>,
}

impl Cell {
    /// An empty, unowned cell.
    pub const EMPTY: Cell = Cell {
        count: 0,
        owner: None,
    };

    /// A cell holding `count` atoms of `owner`.
    #[must_use]
    pub const fn owned(owner: PlayerColor, count: u32) -> Self {
        Self {
            count,
            owner: Some(owner),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether `player` may place an atom here (unowned or already theirs).
    #[must_use]
    pub fn accepts(&self, player: PlayerColor) -> bool {
        self.owner.map_or(true, |owner| owner == player)
    }
}

/// Detonation threshold of the cell at `(row, col)` on a `rows × cols` grid.
///
/// Corner cells hold 2, other border cells 3, interior cells 4. On grids
/// one cell wide the same rule applies: both ends of a 1×N strip are
/// corners and its middle cells are edges.
///
/// ```
/// use chain_reaction::core::capacity;
///
/// assert_eq!(capacity(0, 0, 9, 6), 2);
/// assert_eq!(capacity(0, 3, 9, 6), 3);
/// assert_eq!(capacity(4, 3, 9, 6), 4);
/// ```
#[must_use]
pub const fn capacity(row: usize, col: usize, rows: usize, cols: usize) -> u32 {
    let row_edge = row == 0 || row + 1 == rows;
    let col_edge = col == 0 || col + 1 == cols;
    match (row_edge, col_edge) {
        (true, true) => 2,
        (true, false) | (false, true) => 3,
        (false, false) => 4,
    }
}

/// A fixed-size `rows × cols` grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vector<Cell>,
}

impl Board {
    /// Create a board with every cell empty.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: Vector::from(vec![Cell::EMPTY; rows * cols]),
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells (`rows × cols`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    const fn index_of(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Cell at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        if self.contains(pos) {
            self.cells.get(self.index_of(pos))
        } else {
            None
        }
    }

    /// Mutable cell at `pos`, or `None` when out of bounds.
    ///
    /// Only this board's copy of the cell changes; clones taken earlier
    /// keep their own view.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if self.contains(pos) {
            let idx = self.index_of(pos);
            self.cells.get_mut(idx)
        } else {
            None
        }
    }

    /// Overwrite the cell at `pos`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(slot) = self.get_mut(pos) {
            *slot = cell;
        }
    }

    /// Detonation threshold at `pos` on this board.
    #[must_use]
    pub const fn capacity_at(&self, pos: Position) -> u32 {
        capacity(pos.row, pos.col, self.rows, self.cols)
    }

    /// In-bounds orthogonal neighbors of `pos`, in up, down, left, right order.
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> SmallVec<[Position; 4]> {
        let mut out = SmallVec::new();
        if pos.row > 0 {
            out.push(Position::new(pos.row - 1, pos.col));
        }
        if pos.row + 1 < self.rows {
            out.push(Position::new(pos.row + 1, pos.col));
        }
        if pos.col > 0 {
            out.push(Position::new(pos.row, pos.col - 1));
        }
        if pos.col + 1 < self.cols {
            out.push(Position::new(pos.row, pos.col + 1));
        }
        out
    }

    /// Iterate over every cell with its position, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Position::new(i / cols, i % cols), cell))
    }

    /// Iterate over the cells of row `row`.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Cell> + '_ {
        let start = (row * self.cols).min(self.cells.len());
        let end = if row < self.rows { start + self.cols } else { start };
        self.cells.iter().skip(start).take(end - start)
    }

    /// Sum of atom counts over the whole board.
    #[must_use]
    pub fn total_atoms(&self) -> u64 {
        self.cells.iter().map(|cell| u64::from(cell.count)).sum()
    }

    /// Whether every cell sits below its capacity and empty cells are unowned.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.iter().all(|(pos, cell)| {
            cell.count < self.capacity_at(pos) && (cell.count == 0) == cell.owner.is_none()
        })
    }
}

impl std::fmt::Display for Board {
    /// One line per row of two-character fields separated by a space:
    /// ` .` for empty cells, otherwise owner initial and count.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            let line: Vec<String> = self
                .row(row)
                .map(|cell| {
                    let field = match cell.owner {
                        Some(owner) if cell.count > 0 => {
                            format!("{}{}", &owner.name()[..1], cell.count)
                        }
                        _ => ".".to_string(),
                    };
                    format!("{field:>2}")
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
