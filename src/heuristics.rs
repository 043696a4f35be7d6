//! Admissible cost estimators for the A* search.
//!
//! All three estimators take `(current, target)` board references and
//! return a lower bound on the number of moves still needed. They never
//! overestimate, so [`crate::solver::a_star`] stays optimal with any of
//! them, and they dominate each other pointwise:
//! `misplaced_tiles <= manhattan_sum <= linear_conflict`.
//!
//! Admissibility is a caller obligation, not a checked condition: the
//! solver accepts any `Fn(&Board, &Board) -> u32` and silently loses its
//! optimality guarantee if handed an overestimating function.

use crate::board::{Board, BLANK, CELLS, SIDE};

/// Manhattan distance between two grid positions.
///
/// This is the number of moves needed to slide a tile from `a` to `b`
/// across an otherwise empty board: the sum of the absolute row and
/// column differences.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::heuristics::manhattan_distance;
///
/// assert_eq!(manhattan_distance(0, 3), 1); // (0,0) -> (1,0)
/// assert_eq!(manhattan_distance(8, 0), 4); // (2,2) -> (0,0)
/// ```
pub fn manhattan_distance(a: usize, b: usize) -> u32 {
    let (row_a, col_a) = (a / SIDE, a % SIDE);
    let (row_b, col_b) = (b / SIDE, b % SIDE);
    (row_a.abs_diff(row_b) + col_a.abs_diff(col_b)) as u32
}

/// Counts the tiles that are not on their target cell (h1).
///
/// The blank is never counted. Admissible but weak: every misplaced tile
/// needs at least one move.
pub fn misplaced_tiles(tiles: &Board, target: &Board) -> u32 {
    (0..CELLS)
        .filter(|&cell| tiles.tile(cell) != BLANK && tiles.tile(cell) != target.tile(cell))
        .count() as u32
}

/// Sums the Manhattan distances of all tiles to their target cells (h2).
///
/// The blank is excluded. Dominates [`misplaced_tiles`]: a misplaced tile
/// contributes at least 1 here.
pub fn manhattan_sum(tiles: &Board, target: &Board) -> u32 {
    let target_cell_of = target_cell_table(target);

    (0..CELLS)
        .map(|cell| {
            let tile = tiles.tile(cell);
            if tile == BLANK {
                0
            } else {
                manhattan_distance(cell, target_cell_of[tile as usize])
            }
        })
        .sum()
}

/// Manhattan distance plus the linear-conflict penalty (h3).
///
/// Two tiles conflict when they sit in the same row (or column) as their
/// target cells but in reversed relative order; resolving such a pair
/// forces one tile to leave the line and re-enter, costing at least two
/// moves beyond its Manhattan distance. Each conflicting pair therefore
/// adds 2 on top of [`manhattan_sum`] without losing admissibility.
///
/// Dominates both other estimators, making it the preferred choice for
/// expansion efficiency.
pub fn linear_conflict(tiles: &Board, target: &Board) -> u32 {
    let target_cell_of = target_cell_table(target);

    let mut conflicts = 0;
    for line in 0..SIDE {
        let row = [line * SIDE, line * SIDE + 1, line * SIDE + 2];
        let column = [line, line + SIDE, line + 2 * SIDE];
        conflicts += conflicts_in_line(tiles, &target_cell_of, row);
        conflicts += conflicts_in_line(tiles, &target_cell_of, column);
    }

    manhattan_sum(tiles, target) + 2 * conflicts
}

/// Maps each tile value to the cell it occupies in `target`.
fn target_cell_table(target: &Board) -> [usize; CELLS] {
    let mut table = [0usize; CELLS];
    for (cell, &tile) in target.tiles().iter().enumerate() {
        table[tile as usize] = cell;
    }
    table
}

/// Counts conflicting pairs among the line's native tiles.
///
/// A tile is native to the line when its target cell also lies on the
/// line. Walking the line in order and recording each native's target
/// slot, a conflict is a pair of slots out of ascending order.
fn conflicts_in_line(tiles: &Board, target_cell_of: &[usize; CELLS], line: [usize; SIDE]) -> u32 {
    let mut target_slots: Vec<usize> = Vec::with_capacity(SIDE);
    for &cell in &line {
        let tile = tiles.tile(cell);
        if tile == BLANK {
            continue;
        }
        if let Some(slot) = line.iter().position(|&c| c == target_cell_of[tile as usize]) {
            target_slots.push(slot);
        }
    }

    let mut conflicts = 0;
    for i in 0..target_slots.len() {
        for j in i + 1..target_slots.len() {
            if target_slots[i] > target_slots[j] {
                conflicts += 1;
            }
        }
    }
    conflicts
}
