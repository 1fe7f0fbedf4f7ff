mod app;
mod game;
mod render;
mod session;
mod theme;

use app::{App, AppAction};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use theme::Theme;

/// 0h h1 in the terminal: fill the grid with red and blue, or let the
/// solver deduce it for you.
#[derive(Parser)]
#[command(name = "takuzu", version)]
struct Args {
    /// Board side length (even, 4 to 12)
    #[arg(short, long, default_value_t = 8)]
    size: usize,

    /// Start with a fresh board instead of restoring the last session
    #[arg(long)]
    empty: bool,

    /// Color theme: dark, light, or contrast
    #[arg(short, long, default_value = "dark")]
    theme: String,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if args.size < 4 || args.size > 12 || args.size % 2 != 0 {
        eprintln!("board size must be an even number between 4 and 12");
        std::process::exit(2);
    }
    let theme = match Theme::by_name(&args.theme) {
        Some(theme) => theme,
        None => {
            eprintln!("unknown theme {:?}; themes are dark, light, contrast", args.theme);
            std::process::exit(2);
        }
    };

    let restored = if args.empty {
        None
    } else {
        session::load().filter(|board| board.size() == args.size)
    };
    let mut app = App::new(args.size, restored, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

    session::save(app.game.board());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    loop {
        render::render(stdout, app)?;
        stdout.flush()?;

        match event::read()? {
            Event::Key(key) => {
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }
                if let AppAction::Quit = app.handle_key(key) {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                let _ = app.handle_mouse(mouse);
            }
            _ => {}
        }
    }

    Ok(())
}
