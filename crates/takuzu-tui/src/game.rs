use rand::seq::SliceRandom;
use takuzu_core::{Board, Cell, Hint, Position, SolveError, Solver, Violation};

/// Built-in starting layouts, grouped by nothing in particular — the
/// player picks one at random among those matching the current board size.
const PRESETS: &[&str] = &[
    // 4x4
    "RR..\n....\nR.R.\n.R.R",
    ".R.B\n....\nR..B\nB...",
    // 6x6
    "RR..R.\n...R.R\n.R..B.\nR..R..\n.R..R.\n..B..R",
    // 8x8
    "R....R..\n..R....R\nR..R....\n.R....B.\n....R...\nB..R....\n.R...B..\n..R.R...",
];

/// Board plus play state: undo history and the solver it consults.
pub struct Game {
    board: Board,
    undo_stack: Vec<Board>,
    solver: Solver,
}

impl Game {
    /// Fresh all-empty board.
    pub fn new(size: usize) -> Self {
        Self::from_board(Board::new(size))
    }

    /// Resume from an existing board (e.g. a restored session).
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            undo_stack: Vec::new(),
            solver: Solver::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Cycle one cell Empty → Red → Blue → Empty, the original game's
    /// single input gesture.
    pub fn cycle_cell(&mut self, pos: Position) {
        self.push_undo();
        let next = match self.board.get(pos) {
            Cell::Empty => Cell::Red,
            Cell::Red => Cell::Blue,
            Cell::Blue => Cell::Empty,
        };
        self.board.set(pos, next);
    }

    /// Run propagation to its fixpoint. Returns how many cells it filled.
    pub fn solve(&mut self) -> Result<usize, SolveError> {
        let result = self.solver.solve(&self.board)?;
        let filled = self.board.empty_count() - result.empty_count();
        self.push_undo();
        self.board = result;
        Ok(filled)
    }

    /// Apply the first forced cell, if any rule can find one.
    pub fn hint(&mut self) -> Option<Hint> {
        let hint = self.solver.get_hint(&self.board)?;
        self.push_undo();
        self.board.set(hint.pos, hint.cell);
        Some(hint)
    }

    /// Reset to an all-empty board of the same size.
    pub fn clear(&mut self) {
        self.push_undo();
        self.board = Board::new(self.board.size());
    }

    /// Replace the board with a random preset of the current size.
    /// Returns false when no preset exists for this size.
    pub fn load_preset(&mut self) -> bool {
        let size = self.board.size();
        let matching: Vec<Board> = PRESETS
            .iter()
            .filter_map(|s| Board::from_string(s).ok())
            .filter(|b| b.size() == size)
            .collect();
        match matching.choose(&mut rand::thread_rng()) {
            Some(board) => {
                self.push_undo();
                self.board = board.clone();
                true
            }
            None => false,
        }
    }

    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(board) => {
                self.board = board;
                true
            }
            None => false,
        }
    }

    pub fn violations(&self) -> Vec<Violation> {
        self.board.violations()
    }

    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    fn push_undo(&mut self) {
        self.undo_stack.push(self.board.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_cell_wraps_through_all_states() {
        let mut game = Game::new(4);
        let pos = Position::new(1, 2);
        game.cycle_cell(pos);
        assert_eq!(game.board().get(pos), Cell::Red);
        game.cycle_cell(pos);
        assert_eq!(game.board().get(pos), Cell::Blue);
        game.cycle_cell(pos);
        assert_eq!(game.board().get(pos), Cell::Empty);
    }

    #[test]
    fn test_undo_restores_previous_board() {
        let mut game = Game::new(4);
        let pos = Position::new(0, 0);
        game.cycle_cell(pos);
        assert!(game.undo());
        assert_eq!(game.board().get(pos), Cell::Empty);
        assert!(!game.undo());
    }

    #[test]
    fn test_solve_fills_cells_and_is_undoable() {
        let mut game = Game::from_board(
            Board::from_string("RR..\n....\nR.R.\n.R.R").unwrap(),
        );
        let filled = game.solve().unwrap();
        assert_eq!(filled, 10);
        assert!(game.is_solved());
        assert!(game.undo());
        assert_eq!(game.board().empty_count(), 10);
    }

    #[test]
    fn test_clear_empties_the_board() {
        let mut game = Game::new(4);
        game.cycle_cell(Position::new(3, 3));
        game.clear();
        assert_eq!(game.board().empty_count(), 16);
    }

    #[test]
    fn test_presets_are_well_formed() {
        for preset in PRESETS {
            let board = Board::from_string(preset).expect("preset parses");
            assert_eq!(board.size() % 2, 0, "preset size must be even");
            assert!(
                board.violations().is_empty(),
                "preset has a violation:\n{}",
                board
            );
        }
    }

    #[test]
    fn test_load_preset_matches_board_size() {
        let mut game = Game::new(6);
        assert!(game.load_preset());
        assert_eq!(game.size(), 6);
        assert!(game.board().empty_count() < 36);

        // No presets for size 12.
        let mut game = Game::new(12);
        assert!(!game.load_preset());
    }
}
