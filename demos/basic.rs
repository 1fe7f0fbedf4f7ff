//! Basic example of using the takuzu engine

use takuzu_core::{Board, Solver};

fn main() {
    // A 4x4 puzzle: clues only, everything else empty
    let puzzle = "\
        RR..\n\
        ....\n\
        R.R.\n\
        .R.R";
    let board = Board::from_string(puzzle).expect("puzzle string is well-formed");

    println!("Puzzle:");
    println!("{}", board);
    println!("Empty cells: {}\n", board.empty_count());

    // Deduce everything the three rules force
    let solver = Solver::new();
    match solver.solve(&board) {
        Ok(result) => {
            println!("After propagation:");
            println!("{}", result);
            println!("Empty cells: {}", result.empty_count());
            println!("Solved: {}\n", result.is_solved());
        }
        Err(e) => println!("Solver gave up: {}\n", e),
    }

    // Ask for a single step instead of the full fixpoint
    println!("First forced cell:");
    if let Some(hint) = solver.get_hint(&board) {
        println!("[{}] {}", hint.rule, hint.explanation);
    }

    // Validity checking on a deliberately broken board
    let broken = Board::from_string("RRR.\n....\n....\n....").expect("well-formed");
    println!("\nViolations on a board with three reds in a row:");
    for violation in broken.violations() {
        println!("- {}", violation);
    }
}
