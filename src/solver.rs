//! A* search over 8-puzzle board states.

use crate::board::Board;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Represents the outcome of one A* run.
#[derive(Clone, Debug)]
pub struct Solution {
    /// The optimal move sequence from start to target, both inclusive,
    /// with consecutive boards differing by exactly one blank swap.
    /// `None` when the frontier was exhausted without reaching the
    /// target; that is a normal result for unsolvable pairs, not an
    /// error.
    pub path: Option<Vec<Board>>,
    /// Number of moves in the path (`path.len() - 1`), or 0 when no
    /// path was found.
    pub steps: u32,
    /// Number of boards expanded (popped and closed) during the search.
    pub nodes_expanded: u64,
}

/// Searches for an optimal path from `start` to `target` using A*.
///
/// The search is generic over the heuristic: any
/// `Fn(&Board, &Board) -> u32` works, and the three estimators in
/// [`crate::heuristics`] are the intended choices. The returned path is
/// optimal whenever the heuristic is admissible; a stronger admissible
/// heuristic only reduces `nodes_expanded`, never changes `steps`.
///
/// The frontier is a min-queue keyed by `(f, g, board)`: minimal
/// f-score first, ties broken by smaller g-score and then by the
/// board's lexicographic order, so runs are fully deterministic and
/// `nodes_expanded` is reproducible.
///
/// This is a blocking call with no timeout or expansion cap; all search
/// state is local to the invocation. For an unsolvable pair it
/// enumerates the entire reachable half of the 9!/2 permutations before
/// reporting no path, so callers should pre-filter with
/// [`Board::is_solvable`].
///
/// # Examples
/// ```
/// use eight_puzzle_solver::board::Board;
/// use eight_puzzle_solver::heuristics::linear_conflict;
/// use eight_puzzle_solver::solver::a_star;
///
/// let start = Board::new(&[1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
/// let solution = a_star(&start, &Board::goal(), linear_conflict);
/// assert_eq!(solution.steps, 1);
/// ```
pub fn a_star<F>(start: &Board, target: &Board, heuristic: F) -> Solution
where
    F: Fn(&Board, &Board) -> u32,
{
    let mut open: BinaryHeap<Reverse<(u32, u32, Board)>> = BinaryHeap::new();
    let mut g_scores: FxHashMap<Board, u32> = FxHashMap::default();
    let mut came_from: FxHashMap<Board, Board> = FxHashMap::default();
    let mut closed: FxHashSet<Board> = FxHashSet::default();
    let mut nodes_expanded: u64 = 0;

    g_scores.insert(*start, 0);
    open.push(Reverse((heuristic(start, target), 0, *start)));

    while let Some(Reverse((_f, g, board))) = open.pop() {
        if closed.contains(&board) {
            // Stale entry: a cheaper path to this board was popped earlier.
            continue;
        }

        if board == *target {
            let path = reconstruct_path(&came_from, start, &board);
            return Solution {
                steps: (path.len() - 1) as u32,
                path: Some(path),
                nodes_expanded,
            };
        }

        closed.insert(board);
        nodes_expanded += 1;

        // Every move costs exactly 1.
        let tentative = g + 1;
        for neighbor in board.neighbors() {
            if closed.contains(&neighbor) {
                continue;
            }
            let improved = match g_scores.get(&neighbor) {
                Some(&best) => tentative < best,
                None => true,
            };
            if improved {
                g_scores.insert(neighbor, tentative);
                came_from.insert(neighbor, board);
                let f = tentative + heuristic(&neighbor, target);
                open.push(Reverse((f, tentative, neighbor)));
            }
        }
    }

    Solution {
        path: None,
        steps: 0,
        nodes_expanded,
    }
}

/// Walks predecessor links from `target` back to `start` and reverses
/// the result into a start-to-target path.
fn reconstruct_path(came_from: &FxHashMap<Board, Board>, start: &Board, target: &Board) -> Vec<Board> {
    let mut path = vec![*target];
    let mut current = *target;
    while current != *start {
        current = *came_from
            .get(&current)
            .expect("every board on the path except the start has a recorded predecessor");
        path.push(current);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::{linear_conflict, manhattan_sum, misplaced_tiles};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    /// Scrambles the goal with `moves` random blank swaps, giving a
    /// board whose optimal solution is at most `moves` long.
    fn scrambled(moves: usize, seed: u64) -> Board {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::goal();
        for _ in 0..moves {
            let neighbors = board.neighbors();
            board = neighbors[rng.gen_range(0..neighbors.len())];
        }
        board
    }

    fn assert_valid_path(solution: &Solution, start: &Board, target: &Board) {
        let path = solution.path.as_ref().expect("expected a path");
        assert_eq!(path.len() as u32, solution.steps + 1);
        assert_eq!(path.first(), Some(start));
        assert_eq!(path.last(), Some(target));
        for pair in path.windows(2) {
            assert!(
                pair[0].neighbors().contains(&pair[1]),
                "consecutive boards must differ by one blank swap"
            );
        }
    }

    #[test]
    fn test_start_equals_target() {
        let goal = Board::goal();
        let solution = a_star(&goal, &goal, linear_conflict);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.nodes_expanded, 0);
        assert_eq!(solution.path, Some(vec![goal]));
    }

    #[test]
    fn test_single_move() {
        let start = Board::new(&[1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let goal = Board::goal();
        let solution = a_star(&start, &goal, manhattan_sum);
        assert_eq!(solution.steps, 1);
        assert_valid_path(&solution, &start, &goal);
    }

    #[test]
    fn test_reference_board_all_heuristics_agree() {
        let start = Board::new(&[7, 2, 4, 5, 0, 6, 8, 3, 1]).unwrap();
        let goal = Board::goal();

        let with_h1 = a_star(&start, &goal, misplaced_tiles);
        let with_h2 = a_star(&start, &goal, manhattan_sum);
        let with_h3 = a_star(&start, &goal, linear_conflict);

        assert_eq!(with_h1.steps, 26);
        assert_eq!(with_h1.steps, with_h2.steps);
        assert_eq!(with_h2.steps, with_h3.steps);

        assert_valid_path(&with_h1, &start, &goal);
        assert_valid_path(&with_h2, &start, &goal);
        assert_valid_path(&with_h3, &start, &goal);

        // A dominating heuristic never expands more nodes.
        assert!(with_h3.nodes_expanded <= with_h2.nodes_expanded);
        assert!(with_h2.nodes_expanded <= with_h1.nodes_expanded);
    }

    #[test]
    fn test_scrambled_boards_agree_across_heuristics() {
        let goal = Board::goal();
        for seed in 0..5 {
            let start = scrambled(14, seed);
            let with_h1 = a_star(&start, &goal, misplaced_tiles);
            let with_h2 = a_star(&start, &goal, manhattan_sum);
            let with_h3 = a_star(&start, &goal, linear_conflict);

            assert_eq!(with_h1.steps, with_h2.steps, "seed {}", seed);
            assert_eq!(with_h2.steps, with_h3.steps, "seed {}", seed);
            assert!(with_h3.steps <= 14, "a 14-move scramble needs at most 14 moves");
            assert_valid_path(&with_h3, &start, &goal);
        }
    }

    #[test]
    fn test_arbitrary_target() {
        // Search toward a non-canonical target.
        let target = Board::new(&[1, 2, 5, 3, 4, 0, 6, 7, 8]).unwrap();
        let start = Board::goal();
        let solution = a_star(&start, &target, linear_conflict);
        assert_valid_path(&solution, &start, &target);
        assert!(solution.steps > 0);
    }

    #[test]
    fn test_unsolvable_pair_exhausts_frontier() {
        // One transposition of the goal flips parity, putting start and
        // target in different reachable halves of the state space.
        let start = Board::new(&[0, 2, 1, 3, 4, 5, 6, 7, 8]).unwrap();
        assert!(!start.is_solvable());

        let solution = a_star(&start, &Board::goal(), misplaced_tiles);
        assert!(solution.path.is_none());
        assert_eq!(solution.steps, 0);
        // The whole reachable parity class gets enumerated: 9!/2 boards.
        assert_eq!(solution.nodes_expanded, 181_440);
    }

    #[test]
    fn test_deterministic_node_counts() {
        let start = Board::new(&[7, 2, 4, 5, 0, 6, 8, 3, 1]).unwrap();
        let goal = Board::goal();
        let first = a_star(&start, &goal, manhattan_sum);
        let second = a_star(&start, &goal, manhattan_sum);
        assert_eq!(first.nodes_expanded, second.nodes_expanded);
    }
}
