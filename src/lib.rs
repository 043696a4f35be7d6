//! # 8-Puzzle A* Solver Library
//!
//! This library computes optimal solutions to the 3x3 sliding-tile
//! puzzle (8-puzzle) using A* graph search driven by interchangeable
//! admissible heuristics.
//!
//! It is used by two binaries:
//! - `solve`: Loads a board from a file, checks solvability, and prints
//!   an optimal move sequence to the canonical goal.
//! - `heuristic_evaluator`: Solves a batch of random boards with each
//!   heuristic and tabulates steps and nodes expanded.
//!
//! ## Modules
//! - `board`: The `Board` value type (a permutation of tiles `0..=8`),
//!   move generation via a fixed adjacency table, the inversion-parity
//!   solvability predicate, and random board construction.
//! - `heuristics`: The three estimators — misplaced-tile count, sum of
//!   Manhattan distances, and Manhattan plus linear-conflict penalty —
//!   plus the `manhattan_distance` position helper.
//! - `solver`: The generic `a_star` search and its `Solution` result.
//! - `utils`: Parsing board descriptions from text rows.

pub mod board;
pub mod heuristics;
pub mod solver;
pub mod utils;
