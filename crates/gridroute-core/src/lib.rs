//! Core types for grid route search.
//!
//! This crate provides the data model shared by the search and any
//! front end:
//!
//! - [`Point`] — integer row/column coordinate
//! - [`CellState`] — the six-state role of a board cell
//! - [`Board`] — an owned rectangular grid of cell states, with a parser
//!   for the line-oriented board-file format ([`Board::parse`])
//!
//! Enable the `serde` feature for `Serialize`/`Deserialize` derives on
//! all of the above.

mod board;
mod cell;
mod geom;

pub use board::{Board, BoardError};
pub use cell::CellState;
pub use geom::Point;
