//! Board cells: the Water / ShipPart tagged union and its rendering contract.

/// Rendering mode for square contents.
///
/// `Hide` is the player-facing fog-of-war view; `Show` reveals every ship
/// hull and is meant for debugging and the end-of-game reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Show,
    Hide,
}

/// Glyph shown for a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareContent {
    /// Water in `Show` mode, hit or not.
    OpenSea,
    /// Anything not yet hit in `Hide` mode.
    ClearWater,
    /// Hit water in `Hide` mode.
    Miss,
    /// A ship part in `Show` mode, or a hit ship part in `Hide` mode.
    ShipHit,
}

impl SquareContent {
    /// Character used when drawing the board.
    pub fn glyph(self) -> char {
        match self {
            SquareContent::OpenSea => ' ',
            SquareContent::ClearWater => '.',
            SquareContent::Miss => '-',
            SquareContent::ShipHit => 'X',
        }
    }
}

/// One cell of the grid. The variant is fixed at placement time; only the
/// `hit` flag changes, and only from `false` to `true`.
///
/// A ship part carries the index of its owning ship in the grid's ship list
/// and the index of the matching part within that ship, so firing can reach
/// the ship without the two structures owning each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Water { hit: bool },
    ShipPart { hit: bool, ship: usize, part: usize },
}

impl Square {
    /// Mark the square as hit. Idempotent; `Grid::fire_at_square` checks
    /// `is_hit` first so a repeat shot resolves as a waste.
    pub fn hit(&mut self) {
        match self {
            Square::Water { hit } | Square::ShipPart { hit, .. } => *hit = true,
        }
    }

    pub fn is_hit(&self) -> bool {
        match self {
            Square::Water { hit } | Square::ShipPart { hit, .. } => *hit,
        }
    }

    /// Contents to display for this square in the given mode.
    ///
    /// In `Hide` mode an unhit ship part is indistinguishable from unhit
    /// water, so the view never leaks ship positions.
    pub fn content(&self, mode: ViewMode) -> SquareContent {
        match (self, mode) {
            (Square::Water { .. }, ViewMode::Show) => SquareContent::OpenSea,
            (Square::Water { hit }, ViewMode::Hide) => {
                if *hit {
                    SquareContent::Miss
                } else {
                    SquareContent::ClearWater
                }
            }
            (Square::ShipPart { .. }, ViewMode::Show) => SquareContent::ShipHit,
            (Square::ShipPart { hit, .. }, ViewMode::Hide) => {
                if *hit {
                    SquareContent::ShipHit
                } else {
                    SquareContent::ClearWater
                }
            }
        }
    }
}
