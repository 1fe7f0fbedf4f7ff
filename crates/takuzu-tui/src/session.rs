//! Session persistence: the in-progress board is written out on quit and
//! restored on the next launch, so closing the terminal never loses a grid.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use takuzu_core::Board;

#[derive(Serialize, Deserialize)]
struct Session {
    board: Board,
}

/// Where the session file lives.
fn save_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("takuzu_session.json")
}

/// Restore the last saved board, if a readable session file exists.
pub fn load() -> Option<Board> {
    let json = fs::read_to_string(save_path()).ok()?;
    let session: Session = serde_json::from_str(&json).ok()?;
    Some(session.board)
}

/// Persist the board. Failures are ignored: losing a session file is not
/// worth interrupting shutdown for.
pub fn save(board: &Board) {
    let session = Session {
        board: board.clone(),
    };
    if let Ok(json) = serde_json::to_string_pretty(&session) {
        let _ = fs::write(save_path(), json);
    }
}
