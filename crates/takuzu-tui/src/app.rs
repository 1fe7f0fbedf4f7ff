use crate::game::Game;
use crate::render;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use takuzu_core::{Board, Position};

/// Result of handling an input event
pub enum AppAction {
    Continue,
    Quit,
}

/// The main application state
pub struct App {
    pub game: Game,
    /// Currently selected cell
    pub cursor: Position,
    pub theme: Theme,
    /// Status line content
    pub message: Option<String>,
    /// Cells highlighted by the last check
    pub flagged: Vec<Position>,
}

impl App {
    pub fn new(size: usize, restored: Option<Board>, theme: Theme) -> Self {
        let (game, message) = match restored {
            Some(board) => (Game::from_board(board), Some("Session restored".to_string())),
            None => (Game::new(size), None),
        };
        Self {
            game,
            cursor: Position::new(0, 0),
            theme,
            message,
            flagged: Vec::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.touch_board();
                self.game.cycle_cell(self.cursor);
            }
            KeyCode::Char('s') => self.solve(),
            KeyCode::Char('h') => self.hint(),
            KeyCode::Char('c') => self.check(),
            KeyCode::Char('p') => self.load_preset(),
            KeyCode::Char('u') => {
                self.touch_board();
                if !self.game.undo() {
                    self.show_message("Nothing to undo");
                }
            }
            KeyCode::Char('r') => {
                self.touch_board();
                self.game.clear();
                self.show_message("Board cleared");
            }
            KeyCode::Char('t') => {
                self.theme = self.theme.next();
                self.show_message(format!("Theme: {}", self.theme.name));
            }
            _ => {}
        }
        AppAction::Continue
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) -> AppAction {
        if let MouseEventKind::Down(MouseButton::Left) = event.kind {
            if let Some(pos) = render::hit_test(self.game.size(), event.column, event.row) {
                self.cursor = pos;
                self.touch_board();
                self.game.cycle_cell(pos);
            }
        }
        AppAction::Continue
    }

    fn move_cursor(&mut self, row_delta: i32, col_delta: i32) {
        let max = (self.game.size() - 1) as i32;
        let row = (self.cursor.row as i32 + row_delta).clamp(0, max) as usize;
        let col = (self.cursor.col as i32 + col_delta).clamp(0, max) as usize;
        self.cursor = Position::new(row, col);
    }

    fn solve(&mut self) {
        self.touch_board();
        match self.game.solve() {
            Ok(0) => self.show_message("Nothing new to deduce"),
            Ok(filled) => self.show_message(format!("Filled {} cells", filled)),
            Err(e) => self.show_message(format!("Solver gave up: {}", e)),
        }
    }

    fn hint(&mut self) {
        self.touch_board();
        match self.game.hint() {
            Some(hint) => self.show_message(format!("[{}] {}", hint.rule, hint.explanation)),
            None => self.show_message("No forced cell found"),
        }
    }

    fn check(&mut self) {
        let violations = self.game.violations();
        if violations.is_empty() {
            self.flagged.clear();
            self.show_message("No rule violations");
        } else {
            let size = self.game.size();
            self.flagged = violations.iter().flat_map(|v| v.cells(size)).collect();
            self.show_message(format!(
                "{} violation(s) — {}",
                violations.len(),
                violations[0]
            ));
        }
    }

    fn load_preset(&mut self) {
        self.touch_board();
        if self.game.load_preset() {
            self.show_message("Preset loaded");
        } else {
            self.show_message(format!("No presets for size {}", self.game.size()));
        }
    }

    fn show_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Any board edit invalidates the last check's highlights.
    fn touch_board(&mut self) {
        self.flagged.clear();
        self.message = None;
    }
}
