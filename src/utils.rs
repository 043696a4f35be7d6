//! Utility functions for parsing board descriptions from text.

use crate::board::{Board, CELLS, SIDE};

/// Parses an array of string slices into a `Board`.
///
/// Each string slice represents one row of the grid, top to bottom.
/// Rows hold one digit per cell in `0..=8` (`0` is the blank) and may
/// separate digits with spaces or tabs, so both `"724"` and `"7 2 4"`
/// parse to the same row. Exactly 3 rows of 3 tiles are required, and
/// the 9 digits must form a permutation of `0..=8`.
///
/// # Arguments
/// * `rows`: the row strings, starting from the top row.
///
/// # Returns
/// * `Ok(Board)` if parsing and validation succeed.
/// * `Err(String)` describing the first problem found: wrong row count,
///   wrong row length, an unrecognized character, or a tile set that is
///   not a permutation of `0..=8`.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["7 2 4", "5 0 6", "8 3 1"]).unwrap();
/// assert_eq!(board.tiles(), &[7, 2, 4, 5, 0, 6, 8, 3, 1]);
///
/// assert!(board_from_str_array(&["724", "506", "831"]).is_ok());
/// assert!(board_from_str_array(&["724", "506"]).is_err());
/// assert!(board_from_str_array(&["724", "509", "831"]).is_err());
/// ```
pub fn board_from_str_array(rows: &[&str]) -> Result<Board, String> {
    if rows.len() != SIDE {
        return Err(format!(
            "Invalid number of rows. Expected {}, found {}",
            SIDE,
            rows.len()
        ));
    }

    let mut tiles = Vec::with_capacity(CELLS);
    for (r, row_str) in rows.iter().enumerate() {
        let mut row_tiles = 0;
        for tile_char in row_str.chars() {
            match tile_char {
                '0'..='8' => {
                    tiles.push(tile_char as u8 - b'0');
                    row_tiles += 1;
                }
                ' ' | '\t' => {}
                _ => {
                    return Err(format!(
                        "Unrecognized character '{}' in row {}",
                        tile_char, r
                    ))
                }
            }
        }
        if row_tiles != SIDE {
            return Err(format!(
                "Row {} has {} tiles (expected {})",
                r, row_tiles, SIDE
            ));
        }
    }

    Board::new(&tiles).map_err(|e| format!("Invalid board: {}", e))
}
