//! Text rendering of grid state. Everything is read through
//! `Grid::square_content`, so these views see exactly what the chosen mode
//! allows and nothing more.

use crate::grid::Grid;
use crate::square::{SquareContent, ViewMode};

/// Render the board as a box-drawn text block with a 1-based column header
/// and letter row labels.
pub fn render_grid(grid: &Grid, mode: ViewMode) -> String {
    let width = 3 * grid.cols() + 4;
    let mut out = String::new();
    out.push_str(&format!("    ╔{}╗\n", "═".repeat(width)));
    out.push_str("    ║   ");
    for c in 0..grid.cols() {
        out.push_str(&format!("{:>3}", c + 1));
    }
    out.push_str(" ║\n");
    for r in 0..grid.rows() {
        let label = (b'A' + r as u8) as char;
        out.push_str(&format!("    ║  {}", label));
        for c in 0..grid.cols() {
            let glyph = grid
                .square_content(r, c, mode)
                .map(SquareContent::glyph)
                .unwrap_or('?');
            out.push_str(&format!("  {}", glyph));
        }
        out.push_str(" ║\n");
    }
    out.push_str(&format!("    ╚{}╝\n", "═".repeat(width)));
    out.push_str(match mode {
        ViewMode::Show => "    Legend: X=Ship hull  (blank)=Water\n",
        ViewMode::Hide => "    Legend: X=Hit  -=Miss  .=Unknown\n",
    });
    out
}

/// One line per ship: name, length, floating or sunk.
pub fn render_fleet_status(grid: &Grid) -> String {
    let mut out = String::from("    Ships:\n");
    for ship in grid.ships() {
        let status = if ship.is_floating() { "Floating" } else { "SUNK" };
        out.push_str(&format!(
            "      {} ({}): {}\n",
            ship.kind().name(),
            ship.kind().length(),
            status
        ));
    }
    out
}
