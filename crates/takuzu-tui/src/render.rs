use crate::app::App;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io;
use takuzu_core::{Cell, Position};

/// Grid origin on screen.
pub const GRID_X: u16 = 2;
pub const GRID_Y: u16 = 2;
/// Cell pitch including one border column/row.
const CELL_W: u16 = 4;
const CELL_H: u16 = 2;

/// Map a terminal coordinate to the board cell under it, skipping border
/// lines. Used for mouse input.
pub fn hit_test(size: usize, column: u16, row: u16) -> Option<Position> {
    if column <= GRID_X || row <= GRID_Y {
        return None;
    }
    let dx = column - GRID_X;
    let dy = row - GRID_Y;
    if dx % CELL_W == 0 || dy % CELL_H == 0 {
        return None; // border
    }
    let col = (dx / CELL_W) as usize;
    let cell_row = (dy / CELL_H) as usize;
    if col < size && cell_row < size {
        Some(Position::new(cell_row, col))
    } else {
        None
    }
}

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    let size = app.game.size();

    execute!(
        stdout,
        Hide,
        SetBackgroundColor(theme.bg),
        Clear(ClearType::All)
    )?;

    // Title
    execute!(
        stdout,
        MoveTo(GRID_X, 0),
        SetForegroundColor(theme.fg),
        Print(format!("0h h1 — {}x{}", size, size))
    )?;

    render_grid(stdout, app)?;

    let below = GRID_Y + size as u16 * CELL_H + 2;
    render_status(stdout, app, below)?;
    render_help(stdout, app, below + 2)?;

    execute!(stdout, ResetColor, Show)?;
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    let size = app.game.size();
    let board = app.game.board();

    let border_row: String = {
        let mut s = String::from("+");
        for _ in 0..size {
            s.push_str("---+");
        }
        s
    };

    for row in 0..=size {
        execute!(
            stdout,
            MoveTo(GRID_X, GRID_Y + row as u16 * CELL_H),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.border),
            Print(&border_row)
        )?;
        if row == size {
            break;
        }
        let y = GRID_Y + row as u16 * CELL_H + 1;
        for col in 0..=size {
            execute!(
                stdout,
                MoveTo(GRID_X + col as u16 * CELL_W, y),
                SetBackgroundColor(theme.bg),
                SetForegroundColor(theme.border),
                Print("|")
            )?;
            if col == size {
                break;
            }
            let pos = Position::new(row, col);
            render_cell(stdout, app, pos)?;
        }
    }
    Ok(())
}

fn render_cell(stdout: &mut io::Stdout, app: &App, pos: Position) -> io::Result<()> {
    let theme = &app.theme;
    let x = GRID_X + pos.col as u16 * CELL_W + 1;
    let y = GRID_Y + pos.row as u16 * CELL_H + 1;

    let bg = if pos == app.cursor {
        theme.selected_bg
    } else if app.flagged.contains(&pos) {
        theme.error_bg
    } else {
        theme.bg
    };
    let (fg, text) = match app.game.board().get(pos) {
        Cell::Red => (theme.red, "███"),
        Cell::Blue => (theme.blue, "███"),
        Cell::Empty => (theme.empty, " · "),
    };
    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(bg),
        SetForegroundColor(fg),
        Print(text)
    )?;
    Ok(())
}

fn render_status(stdout: &mut io::Stdout, app: &App, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    execute!(stdout, MoveTo(GRID_X, y), SetBackgroundColor(theme.bg))?;
    if app.game.is_solved() {
        execute!(
            stdout,
            SetForegroundColor(theme.success),
            Print("Solved!")
        )?;
    } else if let Some(ref msg) = app.message {
        execute!(stdout, SetForegroundColor(theme.info), Print(msg))?;
    }
    Ok(())
}

fn render_help(stdout: &mut io::Stdout, app: &App, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let bindings = [
        ("arrows/click", "move/cycle"),
        ("space", "cycle"),
        ("s", "solve"),
        ("h", "hint"),
        ("c", "check"),
        ("p", "preset"),
        ("u", "undo"),
        ("r", "clear"),
        ("t", "theme"),
        ("q", "quit"),
    ];
    execute!(stdout, MoveTo(GRID_X, y), SetBackgroundColor(theme.bg))?;
    for (i, (keys, action)) in bindings.iter().enumerate() {
        if i > 0 {
            execute!(stdout, SetForegroundColor(theme.border), Print("  "))?;
        }
        execute!(
            stdout,
            SetForegroundColor(theme.key),
            Print(*keys),
            SetForegroundColor(theme.info),
            Print(format!(" {}", action))
        )?;
    }
    Ok(())
}
