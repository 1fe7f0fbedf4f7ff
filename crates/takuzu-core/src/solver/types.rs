use crate::{Cell, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three deduction rules, in the order one sweep applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// No three consecutive same-colored cells in a line.
    Adjacency,
    /// Each line holds equally many cells of each color.
    Balance,
    /// No two rows and no two columns are identical.
    Uniqueness,
}

impl Rule {
    /// Sweep order.
    pub const ALL: [Rule; 3] = [Rule::Adjacency, Rule::Balance, Rule::Uniqueness];
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Adjacency => write!(f, "Adjacency"),
            Rule::Balance => write!(f, "Balance"),
            Rule::Uniqueness => write!(f, "Uniqueness"),
        }
    }
}

/// What an adjacency write does when its target cell is already filled.
///
/// The original game overwrites unconditionally, which can clobber a clue
/// that contradicts the deduction. That behavior is kept as the default;
/// `KeepFilled` is the guarded alternative for callers that treat filled
/// cells as authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverwritePolicy {
    /// Forced writes land even on filled cells (original behavior).
    #[default]
    Overwrite,
    /// Forced writes only land on empty cells.
    KeepFilled,
}

/// Tuning knobs for [`Solver`](crate::Solver).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverOptions {
    pub overwrite: OverwritePolicy,
    /// Sweep ceiling before the solver reports an internal inconsistency.
    /// `None` uses `size * size + 1`: a productive sweep fills at least one
    /// of the N² cells, so an honest run can never need more.
    pub max_sweeps: Option<usize>,
}

/// A single forced cell, with the rule that forces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub rule: Rule,
    pub pos: Position,
    pub cell: Cell,
    pub explanation: String,
}

/// Solver failure. The rules cannot fail on well-formed input; the only
/// error is the defensive sweep ceiling tripping, which means a rule
/// regressed a cell and the fixpoint loop would not have terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    FixpointOverrun { sweeps: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::FixpointOverrun { sweeps } => write!(
                f,
                "no fixpoint after {} sweeps: a rule keeps changing the board",
                sweeps
            ),
        }
    }
}

impl std::error::Error for SolveError {}
