//! Adjacency rule: no three consecutive same-colored cells in a line.
//!
//! Two trigger patterns per scan position. A same-colored pair forces the
//! opposite color on both flanks (`x x _` and `_ x x`); a same-colored pair
//! split by one cell forces the opposite color in the middle (`x _ x`).

use super::both_orientations;
use crate::solver::types::OverwritePolicy;
use crate::{Board, Cell, SolverOptions};

pub(crate) fn apply(board: &Board, options: &SolverOptions) -> Board {
    both_orientations(board, |rows| {
        for row in rows.iter_mut() {
            scan_line(row, options.overwrite);
        }
    })
}

fn scan_line(row: &mut [Cell], policy: OverwritePolicy) {
    for pos in 0..row.len().saturating_sub(1) {
        let cell = row[pos];
        if cell.is_empty() {
            continue;
        }
        if row[pos + 1] == cell {
            let forced = cell.opposite();
            write(row, pos as isize + 2, forced, policy);
            write(row, pos as isize - 1, forced, policy);
        }
        if pos + 2 < row.len() && row[pos + 2] == cell {
            write(row, pos as isize + 1, cell.opposite(), policy);
        }
    }
}

/// Write `forced` at `index`. Indices outside the line are skipped silently,
/// matching the line-boundary behavior the rule relies on.
fn write(row: &mut [Cell], index: isize, forced: Cell, policy: OverwritePolicy) {
    if index < 0 || index as usize >= row.len() {
        return;
    }
    let index = index as usize;
    if policy == OverwritePolicy::KeepFilled && !row[index].is_empty() {
        return;
    }
    row[index] = forced;
}
