//! Tour of a few classic patterns through the library API
//!
//! This example steps a glider, a blinker, and a block on small toroidal
//! grids and prints each generation, without any of the CLI plumbing.

use game_of_life_torus::engine::{step, Board, Coordinate};
use game_of_life_torus::simulation::{evolution_window, BehaviorAnalysis};
use game_of_life_torus::source::parse_board_from_string;
use game_of_life_torus::utils::BoardFormatter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Pattern Tour ===\n");

    // A glider crossing the edge of a small torus comes back around.
    let (glider, width, height) = parse_board_from_string(
        "..#..\n\
         #.#..\n\
         .##..\n\
         .....\n\
         .....\n",
    )?;

    println!("Glider on a {}x{} torus:", width, height);
    let mut board = glider;
    for generation in 0..8 {
        println!("Generation {}:", generation);
        println!("{}", BoardFormatter::format_board(&board, width, height));
        board = step(&board, width, height)?;
    }

    // A blinker oscillates with period 2.
    let blinker = Board::from_cells([
        Coordinate::new(2, 1),
        Coordinate::new(2, 2),
        Coordinate::new(2, 3),
    ]);
    let frames = evolution_window(&blinker, 5, 5, 8)?;
    let analysis = BehaviorAnalysis::analyze(&frames);
    println!(
        "Blinker classification: {} (period {:?})",
        analysis.classification(),
        analysis.oscillation_period
    );

    // A block never changes.
    let block = Board::from_cells([
        Coordinate::new(1, 1),
        Coordinate::new(2, 1),
        Coordinate::new(1, 2),
        Coordinate::new(2, 2),
    ]);
    let next = step(&block, 4, 4)?;
    assert_eq!(next, block);
    println!("Block is stable: {}", next == block);

    Ok(())
}
