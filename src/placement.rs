//! Random ship placement: pick an orientation and anchor, delegate overlap
//! checking to the grid, retry on collision.

use log::{debug, trace};
use rand::Rng;

use crate::common::GridError;
use crate::config::{FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::grid::Grid;
use crate::ship::{Orientation, Ship, ShipType};

/// Place one ship of `kind` at a random in-bounds, non-overlapping position.
///
/// Orientation is chosen uniformly, then an anchor uniform over the range
/// that keeps the whole hull on the board. Overlapping attempts are retried
/// with fresh randomness up to `MAX_PLACEMENT_ATTEMPTS`; exhausting the
/// bound means the fleet does not fit the board.
pub fn generate<R: Rng>(rng: &mut R, kind: ShipType, grid: &mut Grid) -> Result<(), GridError> {
    let len = kind.length();
    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        // Anchor range is narrowed by the hull length along the chosen axis.
        let span = match orientation {
            Orientation::Vertical => grid.rows().checked_sub(len).zip(grid.cols().checked_sub(1)),
            Orientation::Horizontal => grid.rows().checked_sub(1).zip(grid.cols().checked_sub(len)),
        };
        let Some((max_row, max_col)) = span else {
            // Hull longer than this axis; the other orientation may still fit.
            continue;
        };
        let row = rng.random_range(0..=max_row);
        let col = rng.random_range(0..=max_col);
        match grid.add_ship(Ship::new(kind, orientation, row, col)) {
            Ok(()) => {
                debug!(
                    "placed {} (length {}) at ({}, {}) {:?} after {} attempt(s)",
                    kind.name(),
                    len,
                    row,
                    col,
                    orientation,
                    attempt
                );
                return Ok(());
            }
            Err(GridError::Overlap) => {
                trace!(
                    "placement of {} at ({}, {}) {:?} overlaps, retrying",
                    kind.name(),
                    row,
                    col,
                    orientation
                );
            }
            Err(e) => return Err(e),
        }
    }
    Err(GridError::UnableToPlaceShip {
        length: len,
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}

/// Place the configured fleet sequentially; later ships see earlier ships'
/// occupied squares through the grid's overlap check.
pub fn populate_fleet<R: Rng>(rng: &mut R, grid: &mut Grid) -> Result<(), GridError> {
    for kind in FLEET {
        generate(rng, kind, grid)?;
    }
    Ok(())
}
