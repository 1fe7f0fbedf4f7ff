//! Core engine for an 0h h1-style binary puzzle.
//!
//! A [`Board`] is an N×N grid of tri-state [`Cell`]s (empty, red, blue).
//! A finished board satisfies three constraints: no three consecutive
//! same-colored cells in any line, equally many cells of each color in
//! every line, and no two identical rows or columns. The [`Solver`] applies
//! one local deduction rule per constraint, rows then columns, over and
//! over until the board stops changing — pure forward propagation, no
//! guessing and no backtracking.

mod board;
mod solver;

pub use board::{Board, Cell, LineId, LineKind, ParseError, Position, Violation};
pub use solver::{Hint, OverwritePolicy, Rule, SolveError, Solver, SolverOptions};
