use eight_puzzle_solver::board::Board;
use eight_puzzle_solver::heuristics::{linear_conflict, manhattan_sum, misplaced_tiles};
use eight_puzzle_solver::solver::a_star;
use std::collections::HashMap;

const NUM_RANDOM_BOARDS_FOR_EVALUATION: usize = 10;
const START_SEED: u64 = 0;

type HeuristicFn = fn(&Board, &Board) -> u32;

fn main() {
    let heuristics: Vec<(&str, HeuristicFn)> = vec![
        ("misplaced", misplaced_tiles),
        ("manhattan", manhattan_sum),
        ("linear-conflict", linear_conflict),
    ];

    let mut all_expansions: HashMap<String, Vec<u64>> = HashMap::new();
    for (name, _) in &heuristics {
        all_expansions.insert(name.to_string(), Vec::new());
    }

    let target = Board::goal();

    println!(
        "Starting heuristic evaluation for {} random solvable boards...",
        NUM_RANDOM_BOARDS_FOR_EVALUATION
    );

    for board_idx in 0..NUM_RANDOM_BOARDS_FOR_EVALUATION {
        let current_seed = START_SEED + board_idx as u64;
        let start = Board::new_random_with_seed(current_seed);

        println!("\nEvaluating Board {} (Seed: {})", board_idx, current_seed);
        println!("{}", start);

        let mut optimal_steps: Option<u32> = None;

        for (heuristic_name, heuristic_fn) in &heuristics {
            let solution = a_star(&start, &target, heuristic_fn);

            let steps = match solution.path {
                Some(_) => solution.steps,
                None => {
                    // Random boards are rejection-sampled to be solvable,
                    // so an exhausted frontier here is a bug.
                    eprintln!(
                        "Error: no path found with {} on board {} (Seed: {})",
                        heuristic_name, board_idx, current_seed
                    );
                    break;
                }
            };

            // Optimal length must not depend on the (admissible) heuristic.
            match optimal_steps {
                None => optimal_steps = Some(steps),
                Some(expected) => {
                    if steps != expected {
                        eprintln!(
                            "Error: {} found {} steps on board {} where a previous heuristic found {}",
                            heuristic_name, steps, board_idx, expected
                        );
                    }
                }
            }

            println!(
                "  Heuristic: {:<16} Steps: {:<4} Nodes expanded: {}",
                heuristic_name, steps, solution.nodes_expanded
            );
            all_expansions
                .get_mut(*heuristic_name)
                .unwrap()
                .push(solution.nodes_expanded);
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", NUM_RANDOM_BOARDS_FOR_EVALUATION);
    println!(
        "Heuristics evaluated: {}",
        heuristics
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<&str>>()
            .join(", ")
    );
    println!("\n--- Average Nodes Expanded ---");

    let mut sorted_averages: Vec<(&str, f64)> = Vec::new();

    for (name, _) in &heuristics {
        let expansions = &all_expansions[*name];
        if expansions.is_empty() {
            println!("Heuristic {}: No results recorded.", name);
            continue;
        }
        let total: u64 = expansions.iter().sum();
        let average = total as f64 / expansions.len() as f64;
        sorted_averages.push((name, average));
    }

    // Sort by average expansions ascending: the strongest heuristic first.
    sorted_averages.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    for (name, average) in sorted_averages {
        println!("Heuristic {:<16}: Average nodes expanded = {:.1}", name, average);
    }
}
