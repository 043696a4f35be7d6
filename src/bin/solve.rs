use clap::{Parser, ValueEnum};
use eight_puzzle_solver::board::Board;
use eight_puzzle_solver::heuristics::{linear_conflict, manhattan_sum, misplaced_tiles};
use eight_puzzle_solver::solver::a_star;
use eight_puzzle_solver::utils::board_from_str_array;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Heuristic used to guide the A* search.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeuristicChoice {
    /// Misplaced-tile count (h1).
    Misplaced,
    /// Sum of Manhattan distances (h2).
    Manhattan,
    /// Manhattan distances plus linear-conflict penalty (h3).
    LinearConflict,
}

impl HeuristicChoice {
    fn function(self) -> fn(&Board, &Board) -> u32 {
        match self {
            HeuristicChoice::Misplaced => misplaced_tiles,
            HeuristicChoice::Manhattan => manhattan_sum,
            HeuristicChoice::LinearConflict => linear_conflict,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Heuristic to guide the search
    #[clap(short = 'H', long, value_enum, default_value = "linear-conflict")]
    heuristic: HeuristicChoice,

    /// Skip the solvability pre-check and search anyway
    #[clap(long)]
    force: bool,

    /// Path to the board file (3 rows of 3 digits, 0 is the blank)
    board_file: PathBuf,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_array(&lines)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let start = match read_board_file(&args.board_file) {
        Ok(board) => board,
        Err(e) => {
            eprintln!(
                "Failed to read board from {}: {}",
                args.board_file.display(),
                e
            );
            return ExitCode::FAILURE;
        }
    };
    let target = Board::goal();

    println!("Loaded board from {}\n", args.board_file.display());
    println!("Initial board state:\n{}\n", start);

    if !start.is_solvable() && !args.force {
        // Searching anyway would enumerate all 181440 reachable boards.
        println!("Board is not solvable (odd inversion count); refusing to search.");
        println!("Pass --force to exhaust the state space anyway.");
        return ExitCode::FAILURE;
    }

    println!("Searching with heuristic {:?}...\n", args.heuristic);
    let solution = a_star(&start, &target, args.heuristic.function());

    match solution.path {
        Some(path) => {
            println!(
                "Optimal solution: {} moves, {} nodes expanded\n",
                solution.steps, solution.nodes_expanded
            );
            for (i, board) in path.iter().enumerate() {
                println!("Move {}:\n{}\n", i, board);
            }
            ExitCode::SUCCESS
        }
        None => {
            println!(
                "No solution found after expanding {} nodes.",
                solution.nodes_expanded
            );
            ExitCode::FAILURE
        }
    }
}
