//! Core board representation for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Board`: an immutable 3x3 tile arrangement, stored as a permutation
//!   of the tile values `0..=8` in row-major order (`0` is the blank).
//! - Move generation (`Board::neighbors`), driven by a fixed per-position
//!   adjacency table.
//! - The inversion-parity solvability predicate (`Board::is_solvable`).
//! - Random board construction, seeded and unseeded, with rejection
//!   sampling so only solvable boards are produced.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use thiserror::Error;

/// The blank (empty) cell is represented by tile value `0`.
pub const BLANK: u8 = 0;

/// Side length of the board. The crate supports the 8-puzzle only,
/// so this is always 3.
pub const SIDE: usize = 3;

/// Number of cells on the board (`SIDE * SIDE`).
pub const CELLS: usize = SIDE * SIDE;

/// Grid-adjacent positions for each of the 9 cells, row-major.
///
/// Entry `p` lists the cells sharing an edge with `p` (up/down/left/right
/// only). Corners have 2 neighbors, edges 3, the center 4. Built once at
/// compile time and shared read-only by all move generation.
const NEIGHBORS: [&[usize]; CELLS] = [
    &[1, 3],
    &[0, 2, 4],
    &[1, 5],
    &[0, 4, 6],
    &[1, 3, 5, 7],
    &[2, 4, 8],
    &[3, 7],
    &[4, 6, 8],
    &[5, 7],
];

/// Error produced when constructing a `Board` from an invalid tile sequence.
///
/// Validation is eager: a `Board` that exists is always a permutation of
/// `0..=8`, so the search and the heuristics never have to re-check it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidBoardError {
    /// The input did not contain exactly 9 tiles.
    #[error("expected 9 tiles, found {0}")]
    WrongLength(usize),
    /// A tile value was outside `0..=8` or appeared more than once.
    #[error("tiles are not a permutation of 0..=8: tile {0} is out of range or duplicated")]
    NotAPermutation(u8),
}

/// An 8-puzzle board state.
///
/// Stores which tile occupies each of the 9 row-major grid cells, e.g.
///
/// ```text
/// 7 2 4
/// 5 0 6
/// 8 3 1
/// ```
///
/// is `[7, 2, 4, 5, 0, 6, 8, 3, 1]`. Boards are immutable value objects:
/// equality and hashing are structural, so boards can key maps and sets
/// directly, and the derived lexicographic `Ord` gives the deterministic
/// tie-break used by the A* priority queue.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::board::Board;
///
/// let board = Board::new(&[7, 2, 4, 5, 0, 6, 8, 3, 1]).unwrap();
/// assert_eq!(board.blank_position(), 4);
/// assert!(Board::new(&[1, 1, 2, 3, 4, 5, 6, 7, 8]).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    tiles: [u8; CELLS],
}

impl Board {
    /// Creates a board from a tile sequence.
    ///
    /// # Arguments
    /// * `tiles`: the tile occupying each row-major grid cell; must be a
    ///   permutation of `0..=8`.
    ///
    /// # Returns
    /// * `Ok(Board)` when `tiles` has length 9 and contains each of
    ///   `0..=8` exactly once.
    /// * `Err(InvalidBoardError)` otherwise.
    pub fn new(tiles: &[u8]) -> Result<Self, InvalidBoardError> {
        if tiles.len() != CELLS {
            return Err(InvalidBoardError::WrongLength(tiles.len()));
        }

        let mut seen = [false; CELLS];
        let mut board = [0u8; CELLS];
        for (cell, &tile) in tiles.iter().enumerate() {
            if tile as usize >= CELLS || seen[tile as usize] {
                return Err(InvalidBoardError::NotAPermutation(tile));
            }
            seen[tile as usize] = true;
            board[cell] = tile;
        }

        Ok(Board { tiles: board })
    }

    /// Returns the canonical goal board `[0, 1, 2, 3, 4, 5, 6, 7, 8]`
    /// (blank in the top-left corner).
    pub fn goal() -> Self {
        Board {
            tiles: [0, 1, 2, 3, 4, 5, 6, 7, 8],
        }
    }

    /// Creates a random solvable board.
    ///
    /// Uses a fixed internal seed so repeated calls are deterministic and
    /// always produce the same board; use [`Board::new_random_with_seed`]
    /// for varied boards. The result is always solvable relative to
    /// [`Board::goal`].
    pub fn new_random() -> Self {
        Self::new_random_with_seed(514514)
    }

    /// Creates a random solvable board from the given seed.
    ///
    /// The same seed always produces the same board. Candidate
    /// permutations are drawn by shuffling and rejected until one passes
    /// [`Board::is_solvable`]; exactly half of all permutations do, so the
    /// loop terminates quickly.
    ///
    /// # Arguments
    /// * `seed`: seed for the random number generator.
    pub fn new_random_with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut tiles: [u8; CELLS] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

        loop {
            tiles.shuffle(&mut rng);
            let board = Board { tiles };
            if board.is_solvable() {
                return board;
            }
        }
    }

    /// Returns the tiles in row-major order.
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// Returns the tile occupying the given cell.
    ///
    /// # Panics
    /// Panics if `position >= 9`.
    pub fn tile(&self, position: usize) -> u8 {
        self.tiles[position]
    }

    /// Returns the cell currently holding the blank.
    pub fn blank_position(&self) -> usize {
        // The constructor guarantees exactly one blank.
        self.tiles
            .iter()
            .position(|&tile| tile == BLANK)
            .expect("a valid board always contains the blank tile")
    }

    /// Returns the position of the given tile value, if it is on the board.
    pub fn position_of(&self, tile: u8) -> Option<usize> {
        self.tiles.iter().position(|&t| t == tile)
    }

    /// Generates every board reachable from this one in a single move.
    ///
    /// A move swaps the blank with one of its grid-adjacent tiles, so the
    /// result has 2 entries when the blank is in a corner, 3 on an edge
    /// and 4 in the center. The input board is untouched.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::board::Board;
    ///
    /// let corner_blank = Board::goal();
    /// assert_eq!(corner_blank.neighbors().len(), 2);
    ///
    /// let center_blank = Board::new(&[7, 2, 4, 5, 0, 6, 8, 3, 1]).unwrap();
    /// assert_eq!(center_blank.neighbors().len(), 4);
    /// ```
    pub fn neighbors(&self) -> Vec<Board> {
        let blank = self.blank_position();

        NEIGHBORS[blank]
            .iter()
            .map(|&adjacent| {
                let mut tiles = self.tiles;
                tiles.swap(blank, adjacent);
                Board { tiles }
            })
            .collect()
    }

    /// Reports whether this board can reach the canonical ordered goal.
    ///
    /// Drops the blank and counts inversions among the remaining 8 tiles;
    /// the board is solvable iff that count is even. On odd-width boards
    /// the blank's row does not enter the rule: every move preserves the
    /// permutation parity of the non-blank tiles.
    ///
    /// This is an advisory precondition for [`crate::solver::a_star`],
    /// which does not check it itself: searching an unsolvable pair
    /// exhaustively enumerates the reachable half of the 9!/2 state space
    /// before reporting no path.
    pub fn is_solvable(&self) -> bool {
        self.count_inversions() % 2 == 0
    }

    fn count_inversions(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(i, &tile)| {
                self.tiles[i + 1..]
                    .iter()
                    .filter(|&&later| later != BLANK && later < tile)
                    .count()
            })
            .sum()
    }
}

impl fmt::Display for Board {
    /// Formats the board as a 3-line digit grid, row-major.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..SIDE {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.tiles[row * SIDE + col])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_permutation() {
        let board = Board::new(&[7, 2, 4, 5, 0, 6, 8, 3, 1]).unwrap();
        assert_eq!(board.tiles(), &[7, 2, 4, 5, 0, 6, 8, 3, 1]);
        assert_eq!(board.tile(0), 7);
        assert_eq!(board.blank_position(), 4);
    }

    #[test]
    fn test_new_wrong_length() {
        assert_eq!(
            Board::new(&[0, 1, 2]),
            Err(InvalidBoardError::WrongLength(3))
        );
        assert_eq!(
            Board::new(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
            Err(InvalidBoardError::WrongLength(10))
        );
    }

    #[test]
    fn test_new_rejects_duplicates_and_out_of_range() {
        assert_eq!(
            Board::new(&[0, 1, 2, 3, 4, 5, 6, 7, 7]),
            Err(InvalidBoardError::NotAPermutation(7))
        );
        assert_eq!(
            Board::new(&[0, 1, 2, 3, 4, 5, 6, 7, 9]),
            Err(InvalidBoardError::NotAPermutation(9))
        );
    }

    #[test]
    fn test_neighbor_counts_by_blank_position() {
        // Corner blank.
        assert_eq!(Board::goal().neighbors().len(), 2);
        // Edge blank.
        let edge = Board::new(&[1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(edge.neighbors().len(), 3);
        // Center blank.
        let center = Board::new(&[7, 2, 4, 5, 0, 6, 8, 3, 1]).unwrap();
        assert_eq!(center.neighbors().len(), 4);
    }

    #[test]
    fn test_neighbors_are_one_swap_away() {
        let board = Board::new(&[7, 2, 4, 5, 0, 6, 8, 3, 1]).unwrap();
        for neighbor in board.neighbors() {
            let differing = board
                .tiles()
                .iter()
                .zip(neighbor.tiles().iter())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differing, 2, "a move swaps exactly two cells");
            assert_ne!(neighbor.blank_position(), board.blank_position());
        }
    }

    #[test]
    fn test_move_relation_is_symmetric() {
        for seed in 0..5 {
            let board = Board::new_random_with_seed(seed);
            for neighbor in board.neighbors() {
                assert!(
                    neighbor.neighbors().contains(&board),
                    "board {:?} missing from neighbors of its own neighbor {:?}",
                    board,
                    neighbor
                );
            }
        }
    }

    #[test]
    fn test_goal_is_solvable() {
        assert!(Board::goal().is_solvable());
    }

    #[test]
    fn test_single_transposition_is_unsolvable() {
        // Swapping any two non-blank tiles of the goal flips parity.
        let board = Board::new(&[0, 2, 1, 3, 4, 5, 6, 7, 8]).unwrap();
        assert!(!board.is_solvable());
    }

    #[test]
    fn test_moves_preserve_solvability() {
        let board = Board::new(&[7, 2, 4, 5, 0, 6, 8, 3, 1]).unwrap();
        assert!(board.is_solvable());
        for neighbor in board.neighbors() {
            assert!(neighbor.is_solvable());
        }
    }

    #[test]
    fn test_random_boards_are_solvable_and_deterministic() {
        for seed in 0..10 {
            let board = Board::new_random_with_seed(seed);
            assert!(board.is_solvable());
            assert_eq!(board, Board::new_random_with_seed(seed));
        }
        assert_eq!(Board::new_random(), Board::new_random());
    }

    #[test]
    fn test_display_three_line_grid() {
        let board = Board::new(&[7, 2, 4, 5, 0, 6, 8, 3, 1]).unwrap();
        assert_eq!(board.to_string(), "7 2 4\n5 0 6\n8 3 1");
    }

    #[test]
    fn test_position_of() {
        let board = Board::new(&[7, 2, 4, 5, 0, 6, 8, 3, 1]).unwrap();
        assert_eq!(board.position_of(7), Some(0));
        assert_eq!(board.position_of(0), Some(4));
        assert_eq!(board.position_of(1), Some(8));
        assert_eq!(board.position_of(9), None);
    }
}
