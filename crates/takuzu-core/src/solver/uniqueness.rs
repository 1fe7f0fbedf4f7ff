//! Uniqueness rule: no two rows and no two columns are identical.
//!
//! Two lines are "similar" when they agree on every position the first has
//! filled — equivalently, masking the second line to the first's empty
//! positions reproduces the first exactly. Similar lines become true
//! duplicates once completed, so when one of the pair is full and the other
//! is two cells short, those two cells must take the opposite of the full
//! line's colors.

use super::both_orientations;
use crate::{Board, Cell};

pub(crate) fn apply(board: &Board) -> Board {
    both_orientations(board, pass)
}

fn pass(rows: &mut [Vec<Cell>]) {
    // Collect unordered similar pairs first, each recorded once, then apply.
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    for y1 in 0..rows.len() {
        for y2 in 0..rows.len() {
            if y1 != y2 && similar(&rows[y1], &rows[y2]) && !pairs.contains(&(y2, y1)) {
                pairs.push((y1, y2));
            }
        }
    }

    for (r1, r2) in pairs {
        if empties(&rows[r1]) == 2 && empties(&rows[r2]) == 0 {
            force_apart(rows, r1, r2);
        } else if empties(&rows[r2]) == 2 && empties(&rows[r1]) == 0 {
            force_apart(rows, r2, r1);
        }
    }
}

/// `r2` matches `r1` on every position where `r1` is filled.
fn similar(r1: &[Cell], r2: &[Cell]) -> bool {
    r1.iter().zip(r2).all(|(&a, &b)| a.is_empty() || a == b)
}

fn empties(row: &[Cell]) -> usize {
    row.iter().filter(|c| c.is_empty()).count()
}

/// Fill `target`'s empty cells with the opposite of `source`'s colors,
/// guaranteeing the two lines differ exactly there.
fn force_apart(rows: &mut [Vec<Cell>], target: usize, source: usize) {
    let source_row = rows[source].clone();
    for (i, cell) in rows[target].iter_mut().enumerate() {
        if cell.is_empty() {
            *cell = source_row[i].opposite();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_similarity_masking() {
        let r1 = [Cell::Red, Cell::Empty, Cell::Blue, Cell::Empty];
        let r2 = [Cell::Red, Cell::Blue, Cell::Blue, Cell::Red];
        assert!(similar(&r1, &r2));
        // Not symmetric: r2 is filled where r1 is not.
        assert!(!similar(&r2, &r1));

        let r3 = [Cell::Blue, Cell::Blue, Cell::Blue, Cell::Red];
        assert!(!similar(&r1, &r3));
    }

    #[test]
    fn test_two_short_row_forced_apart_from_full_row() {
        let board = Board::from_string("R.B.\nRBBR\n....\n....").unwrap();
        let result = apply(&board);
        assert_eq!(
            result.row(0),
            &[Cell::Red, Cell::Red, Cell::Blue, Cell::Blue]
        );
        // The full row is untouched.
        assert_eq!(result.row(1), board.row(1));
    }

    #[test]
    fn test_pair_with_both_rows_incomplete_left_alone() {
        let board = Board::from_string("R.B.\nR.B.\n....\n....").unwrap();
        let result = apply(&board);
        assert_eq!(result.row(0), board.row(0));
        assert_eq!(result.row(1), board.row(1));
    }

    #[test]
    fn test_three_or_more_empties_left_alone() {
        let board = Board::from_string("R...\nRBBR\n....\n....").unwrap();
        let result = apply(&board);
        assert_eq!(result.row(0), board.row(0));
    }

    #[test]
    fn test_applies_to_columns_too() {
        let board = Board::from_string("RR..\n.B..\nBB..\n.R..").unwrap();
        // Column 1 is full (R B B R); column 0 matches it on rows 0 and 2
        // and has exactly two empties, which take the opposites of column
        // 1's cells there.
        let result = apply(&board);
        let transposed = result.transpose();
        assert_eq!(
            transposed.row(0),
            &[Cell::Red, Cell::Red, Cell::Blue, Cell::Blue]
        );
    }
}
