use crate::ship::ShipType;

pub const GRID_ROWS: usize = 10;
pub const GRID_COLS: usize = 10;

pub const NUM_SHIPS: usize = 3;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Battleship", 5),
    ShipType::new("Destroyer", 4),
    ShipType::new("Destroyer", 4),
];

/// Sum of the fleet lengths above.
pub const TOTAL_SHIP_CELLS: usize = 13;

/// Attempts per ship before random placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;
