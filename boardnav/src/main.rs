//! boardnav — load a board file, search it, print the route.
//!
//! Run: cargo run --bin boardnav

mod render;

use gridroute_core::{Board, Point};
use gridroute_search::search;

/// Bundled board file, resolved relative to this crate.
const BOARD_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/1.board");

const START: Point = Point::new(0, 0);
const GOAL: Point = Point::new(4, 5);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let text = std::fs::read_to_string(BOARD_PATH)?;
    let board = Board::parse(&text)?;
    log::info!(
        "loaded {}x{} board from {BOARD_PATH}",
        board.rows(),
        board.cols()
    );

    match search(board, START, GOAL)? {
        Some(solution) => print!("{}", render::render(&solution)),
        // No route is a normal outcome, not a failure.
        None => println!("No path found!"),
    }
    Ok(())
}
