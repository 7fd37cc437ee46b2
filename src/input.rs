//! Move-token parsing for the interactive loop. A target is a row letter
//! followed by a 1-based column number, e.g. "B7" -> (1, 6).

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fire at (row, col), 0-indexed.
    Fire(usize, usize),
    /// Switch rendering to the reveal view.
    Show,
    /// Switch rendering back to fog-of-war.
    Hide,
    Help,
    Quit,
}

/// Parse one input line against a `rows × cols` board. Anything that is not
/// a command word is treated as a fire target.
pub fn parse_command(input: &str, rows: usize, cols: usize) -> Result<Command, String> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("show") {
        return Ok(Command::Show);
    }
    if input.eq_ignore_ascii_case("hide") {
        return Ok(Command::Hide);
    }
    if input.eq_ignore_ascii_case("help") {
        return Ok(Command::Help);
    }
    if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
        return Ok(Command::Quit);
    }
    parse_move(input, rows, cols).map(|(row, col)| Command::Fire(row, col))
}

/// Parse a fire target like "A5" into 0-indexed (row, col).
///
/// Row letters are case-insensitive. Rejects tokens the board cannot
/// contain so the grid itself never sees an out-of-bounds fire from the
/// interactive loop.
pub fn parse_move(input: &str, rows: usize, cols: usize) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need row letter and column number (e.g., B7)".to_string());
    }
    let last_row = (b'A' + rows.saturating_sub(1) as u8) as char;
    let mut chars = input.chars();
    let row_ch = chars.next().ok_or("No row letter")?.to_ascii_uppercase();
    if !row_ch.is_ascii_alphabetic() {
        return Err(format!(
            "Invalid row '{}' - must be a letter A-{}",
            row_ch, last_row
        ));
    }
    let row = (row_ch as u8 - b'A') as usize;
    if row >= rows {
        return Err(format!(
            "Row '{}' out of bounds - must be A-{}",
            row_ch, last_row
        ));
    }
    let col_str: String = chars.collect();
    let col: usize = col_str.parse().map_err(|_| {
        format!(
            "Invalid column '{}' - must be a number 1-{}",
            col_str, cols
        )
    })?;
    if col == 0 || col > cols {
        return Err(format!("Column {} out of bounds - must be 1-{}", col, cols));
    }
    Ok((row, col - 1))
}
