//! Common types: fire results and grid errors.

use thiserror::Error;

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireResult {
    /// Shot hit a ship part and the ship is still floating.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Shot re-fired at an already-hit square; no state change.
    Waste,
    /// Shot sank a ship while at least one other ship remains floating.
    Sunk,
    /// Shot sank the last floating ship.
    Win,
}

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Coordinate outside the grid extents.
    #[error("coordinate ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },
    /// Ship placement would occupy a square that already holds a ship part.
    #[error("ship placement overlaps another ship")]
    Overlap,
    /// Random placement found no free position within the attempt bound;
    /// the fleet is too large for the board.
    #[error("no free position for a ship of length {length} after {attempts} attempts")]
    UnableToPlaceShip { length: usize, attempts: usize },
}
