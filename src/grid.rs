//! Game board state: the square array, the ship list, and hit resolution.

use crate::common::{FireResult, GridError};
use crate::ship::Ship;
use crate::square::{Square, SquareContent, ViewMode};

/// The board: a `rows × cols` array of squares plus the placed ships.
/// Sole authority on game state; the presentation layer only reads from it
/// through `square_content` and fires through `fire_at_square`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    squares: Vec<Square>,
    ships: Vec<Ship>,
}

impl Grid {
    /// Create an all-water board with no ships placed.
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            squares: vec![Square::Water { hit: false }; rows * cols],
            ships: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds { row, col });
        }
        Ok(row * self.cols + col)
    }

    /// Add a ship to the board. All-or-nothing: every target square is
    /// validated before any is written, so a failed call leaves the board
    /// untouched.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), GridError> {
        let mut indices = Vec::with_capacity(ship.parts().len());
        for part in ship.parts() {
            let idx = self.index(part.row(), part.col())?;
            if matches!(self.squares[idx], Square::ShipPart { .. }) {
                return Err(GridError::Overlap);
            }
            indices.push(idx);
        }
        let id = self.ships.len();
        for (part, idx) in indices.into_iter().enumerate() {
            self.squares[idx] = Square::ShipPart {
                hit: false,
                ship: id,
                part,
            };
        }
        self.ships.push(ship);
        Ok(())
    }

    /// `true` while any placed ship still has an unhit part.
    pub fn contains_floating_ships(&self) -> bool {
        self.ships.iter().any(|s| s.is_floating())
    }

    /// Fire a shot at (`row`, `col`) and resolve the outcome.
    ///
    /// An already-hit square resolves as `Waste` with no state change.
    /// Otherwise the square is marked hit and the result is `Miss` for
    /// water, `Hit` while the owning ship still floats, `Sunk` when this
    /// shot finished the ship but others remain, and `Win` when it finished
    /// the last one.
    pub fn fire_at_square(&mut self, row: usize, col: usize) -> Result<FireResult, GridError> {
        let idx = self.index(row, col)?;
        let target = match self.squares[idx] {
            Square::Water { hit: true } | Square::ShipPart { hit: true, .. } => {
                return Ok(FireResult::Waste);
            }
            Square::Water { hit: false } => None,
            Square::ShipPart {
                hit: false,
                ship,
                part,
            } => Some((ship, part)),
        };
        self.squares[idx].hit();
        let (ship, part) = match target {
            None => return Ok(FireResult::Miss),
            Some(t) => t,
        };
        self.ships[ship].record_hit(part);
        if self.ships[ship].is_floating() {
            Ok(FireResult::Hit)
        } else if self
            .ships
            .iter()
            .enumerate()
            .any(|(i, other)| i != ship && other.is_floating())
        {
            Ok(FireResult::Sunk)
        } else {
            Ok(FireResult::Win)
        }
    }

    /// Contents to display for the square at (`row`, `col`).
    pub fn square_content(
        &self,
        row: usize,
        col: usize,
        mode: ViewMode,
    ) -> Result<SquareContent, GridError> {
        let idx = self.index(row, col)?;
        Ok(self.squares[idx].content(mode))
    }
}
