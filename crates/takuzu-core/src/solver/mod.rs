//! Rule-based propagation solver.
//!
//! One sweep applies the three rules in fixed order (Adjacency, Balance,
//! Uniqueness), each along rows and then along columns through the
//! transpose. [`Solver::solve`] repeats sweeps until the board stops
//! changing and returns that fixpoint. The solver only propagates — it
//! never guesses, never backtracks, and leaves anything the rules cannot
//! force untouched.

mod adjacency;
mod balance;
mod types;
mod uniqueness;

use crate::{Board, Cell, Position};

pub use types::{Hint, OverwritePolicy, Rule, SolveError, SolverOptions};

/// Applies a row-wise pass to both orientations of the board: rows
/// directly, then columns by transposing, passing again, and transposing
/// back. Every rule is written once against rows and reused for columns
/// through this helper.
fn both_orientations<F>(board: &Board, mut pass: F) -> Board
where
    F: FnMut(&mut [Vec<Cell>]),
{
    let mut direct = board.clone();
    pass(direct.rows_mut());
    let mut flipped = direct.transpose();
    pass(flipped.rows_mut());
    flipped.transpose()
}

/// Stateless solver; per-call configuration lives in [`SolverOptions`].
#[derive(Debug, Clone, Default)]
pub struct Solver {
    options: SolverOptions,
}

impl Solver {
    /// Solver with the original game's behavior.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Deduce everything the rules force on this board.
    ///
    /// Returns the fixpoint: the first board a full sweep leaves unchanged.
    /// Sweeps are capped (see [`SolverOptions::max_sweeps`]); hitting the
    /// cap means a rule regressed a cell and is reported as
    /// [`SolveError::FixpointOverrun`] rather than looping forever.
    pub fn solve(&self, board: &Board) -> Result<Board, SolveError> {
        let ceiling = self
            .options
            .max_sweeps
            .unwrap_or(board.size() * board.size() + 1);
        let mut current = board.clone();
        for _ in 0..ceiling {
            let next = self.sweep(&current);
            if next == current {
                return Ok(current);
            }
            current = next;
        }
        Err(SolveError::FixpointOverrun { sweeps: ceiling })
    }

    /// One pass of the full rule triple.
    fn sweep(&self, board: &Board) -> Board {
        let board = adjacency::apply(board, &self.options);
        let board = balance::apply(&board);
        uniqueness::apply(&board)
    }

    /// Run a single rule (rows and columns) once.
    pub fn apply_rule(&self, board: &Board, rule: Rule) -> Board {
        match rule {
            Rule::Adjacency => adjacency::apply(board, &self.options),
            Rule::Balance => balance::apply(board),
            Rule::Uniqueness => uniqueness::apply(board),
        }
    }

    /// The first cell any rule can force on this board, tried in sweep
    /// order. `None` means propagation is out of moves here.
    pub fn get_hint(&self, board: &Board) -> Option<Hint> {
        Rule::ALL
            .iter()
            .find_map(|&rule| self.hint_for(board, rule))
    }

    fn hint_for(&self, board: &Board, rule: Rule) -> Option<Hint> {
        let next = self.apply_rule(board, rule);
        let (pos, cell) = first_change(board, &next)?;
        Some(Hint {
            rule,
            pos,
            cell,
            explanation: explain(rule, pos, cell),
        })
    }
}

/// First differing cell in row-major order.
fn first_change(before: &Board, after: &Board) -> Option<(Position, Cell)> {
    for row in 0..before.size() {
        for col in 0..before.size() {
            let pos = Position::new(row, col);
            if after.get(pos) != before.get(pos) {
                return Some((pos, after.get(pos)));
            }
        }
    }
    None
}

fn explain(rule: Rule, pos: Position, cell: Cell) -> String {
    match rule {
        Rule::Adjacency => format!(
            "{} must be {}: the other color would make three in a row",
            pos,
            cell.name()
        ),
        Rule::Balance => format!(
            "{} must be {}: its line already has its share of {}",
            pos,
            cell.name(),
            cell.opposite().name()
        ),
        Rule::Uniqueness => format!(
            "{} must be {}: anything else would duplicate a finished line",
            pos,
            cell.name()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Clues that propagate all the way to the unique solution
    /// RRBB / BBRR / RBRB / BRBR.
    const PUZZLE: &str = "\
        RR..\n\
        ....\n\
        R.R.\n\
        .R.R";

    const SOLUTION: &str = "\
        RRBB\n\
        BBRR\n\
        RBRB\n\
        BRBR";

    #[test]
    fn test_solve_completes_propagation_puzzle() {
        let board = Board::from_string(PUZZLE).unwrap();
        let solver = Solver::new();
        let result = solver.solve(&board).unwrap();
        assert_eq!(result, Board::from_string(SOLUTION).unwrap());
        assert!(result.is_solved());
    }

    #[test]
    fn test_solve_is_idempotent() {
        let solver = Solver::new();
        for input in [PUZZLE, "....\n....\n....\n....", "R...\n..B.\n....\nB..R"] {
            let board = Board::from_string(input).unwrap();
            let once = solver.solve(&board).unwrap();
            let twice = solver.solve(&once).unwrap();
            assert_eq!(twice, once, "solve not idempotent for:\n{}", input);
        }
    }

    #[test]
    fn test_empty_board_is_a_fixpoint() {
        let board = Board::new(6);
        let solver = Solver::new();
        assert_eq!(solver.solve(&board).unwrap(), board);
    }

    #[test]
    fn test_solved_board_is_a_fixpoint() {
        let board = Board::from_string(SOLUTION).unwrap();
        let solver = Solver::new();
        assert_eq!(solver.solve(&board).unwrap(), board);
    }

    #[test]
    fn test_solve_never_empties_a_cell() {
        let board = Board::from_string(PUZZLE).unwrap();
        let solver = Solver::new();
        let result = solver.solve(&board).unwrap();
        assert!(result.empty_count() <= board.empty_count());
        for row in 0..board.size() {
            for col in 0..board.size() {
                let pos = Position::new(row, col);
                if !board.get(pos).is_empty() {
                    assert!(!result.get(pos).is_empty());
                }
            }
        }
    }

    #[test]
    fn test_sweep_ceiling_reports_overrun() {
        let board = Board::from_string(PUZZLE).unwrap();
        let solver = Solver::with_options(SolverOptions {
            max_sweeps: Some(1),
            ..SolverOptions::default()
        });
        // One sweep makes progress but does not reach the fixpoint.
        assert_eq!(
            solver.solve(&board),
            Err(SolveError::FixpointOverrun { sweeps: 1 })
        );
    }

    #[test]
    fn test_first_hint_on_adjacent_pair() {
        let board = Board::from_string("RR..\n....\n....\n....").unwrap();
        let solver = Solver::new();
        let hint = solver.get_hint(&board).unwrap();
        assert_eq!(hint.rule, Rule::Adjacency);
        assert_eq!(hint.pos, Position::new(0, 2));
        assert_eq!(hint.cell, Cell::Blue);
        assert!(hint.explanation.contains("blue"));
    }

    #[test]
    fn test_balance_hint_when_adjacency_is_silent() {
        let board = Board::from_string("R.B.\nB.R.\nR.B.\n....").unwrap();
        let solver = Solver::new();
        // No adjacent pairs or gaps anywhere; columns 0 and 2 are at quota.
        let hint = solver.get_hint(&board).unwrap();
        assert_eq!(hint.rule, Rule::Balance);
    }

    #[test]
    fn test_no_hint_at_fixpoint() {
        let solver = Solver::new();
        assert_eq!(solver.get_hint(&Board::new(4)), None);
        let solved = Board::from_string(SOLUTION).unwrap();
        assert_eq!(solver.get_hint(&solved), None);
    }

    #[test]
    fn test_hints_replay_to_the_solved_board() {
        let solver = Solver::new();
        let mut board = Board::from_string(PUZZLE).unwrap();
        let mut steps = 0;
        while let Some(hint) = solver.get_hint(&board) {
            board.set(hint.pos, hint.cell);
            steps += 1;
            assert!(steps <= 16 * 3, "hint replay failed to converge");
        }
        assert_eq!(board, solver.solve(&Board::from_string(PUZZLE).unwrap()).unwrap());
        assert!(board.is_solved());
    }
}
