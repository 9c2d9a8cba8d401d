//! A* shortest-path search over occupancy boards.
//!
//! The single entry point is [`search`]: give it a [`Board`], a start and
//! a goal, and it returns the board annotated with one shortest route
//! (4-directional movement, unit edge cost, Manhattan heuristic), or
//! `Ok(None)` when no route exists.
//!
//! ```
//! use gridroute_core::{Board, CellState, Point};
//! use gridroute_search::search;
//!
//! let board = Board::parse("0,0,0\n0,1,0\n0,0,0").unwrap();
//! let solved = search(board, Point::new(0, 0), Point::new(2, 2))
//!     .unwrap()
//!     .expect("a route exists around the obstacle");
//! assert_eq!(solved.at(Point::new(2, 2)), Some(CellState::Finish));
//! ```
//!
//! [`Board`]: gridroute_core::Board

mod astar;
mod distance;
mod frontier;

pub use astar::{EndpointError, search};
pub use distance::manhattan;
pub use frontier::{Frontier, OpenNode};
