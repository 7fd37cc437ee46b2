//! Ship definitions: hull types, orientation, and per-part hit tracking.

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// One cell of a ship's hull. Coordinates are fixed at construction; the
/// `hit` flag only ever goes from `false` to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPart {
    row: usize,
    col: usize,
    hit: bool,
}

impl ShipPart {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            hit: false,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }
}

/// A ship: an ordered, contiguous run of parts anchored at (`row`, `col`)
/// and extending right or down according to its orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipType,
    orientation: Orientation,
    parts: Vec<ShipPart>,
}

impl Ship {
    /// Build a ship of `kind`'s length from an anchor cell and orientation.
    /// Parts are ordered from the anchor outward.
    pub fn new(kind: ShipType, orientation: Orientation, row: usize, col: usize) -> Self {
        let parts = (0..kind.length())
            .map(|k| match orientation {
                Orientation::Horizontal => ShipPart::new(row, col + k),
                Orientation::Vertical => ShipPart::new(row + k, col),
            })
            .collect();
        Self {
            kind,
            orientation,
            parts,
        }
    }

    pub fn kind(&self) -> ShipType {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The ship's parts, in anchor-outward order.
    pub fn parts(&self) -> &[ShipPart] {
        &self.parts
    }

    /// Record a hit on the part at `part`. Out-of-range indices are ignored.
    /// `Grid::fire_at_square` keeps this in step with the square-level flag.
    pub fn record_hit(&mut self, part: usize) {
        if let Some(p) = self.parts.get_mut(part) {
            p.hit = true;
        }
    }

    /// `true` while at least one part is unhit. Monotonic: once every part
    /// is hit the ship stays sunk.
    pub fn is_floating(&self) -> bool {
        self.parts.iter().any(|p| !p.hit)
    }
}
