//! A* shortest-path search over a [`Board`].

use std::fmt;

use gridroute_core::{Board, CellState, Point};

use crate::distance::manhattan;
use crate::frontier::Frontier;

/// An invalid start or goal coordinate, rejected before any search step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointError {
    /// The coordinate lies outside the board.
    OutOfBounds(Point),
    /// The coordinate lands on a non-empty cell (an obstacle).
    Obstructed(Point),
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "endpoint {p} is out of bounds"),
            Self::Obstructed(p) => write!(f, "endpoint {p} is on an obstacle"),
        }
    }
}

impl std::error::Error for EndpointError {}

/// Compute a shortest route from `start` to `goal` over `board`,
/// moving in the four cardinal directions at unit cost.
///
/// The board is taken by value and returned annotated: route cells are
/// marked [`CellState::Path`], the endpoints [`CellState::Start`] and
/// [`CellState::Finish`], and discovered-but-unused cells
/// [`CellState::Closed`]. `Ok(None)` means no route exists; that is a
/// normal outcome, not an error. Callers that need the unmarked board
/// afterwards should clone before calling.
///
/// Both endpoints must reference empty cells inside the board; anything
/// else fails with [`EndpointError`] before the board is touched.
///
/// Cells are closed at insertion into the open set, not at expansion,
/// and are never re-opened. With every edge costing 1 the first route
/// to close a cell is also the cheapest, so the result stays optimal;
/// this policy does not carry over to weighted edges. Among equal-f
/// frontier nodes the most recently inserted is expanded first, which
/// keeps the search deterministic.
pub fn search(
    mut board: Board,
    start: Point,
    goal: Point,
) -> Result<Option<Board>, EndpointError> {
    for p in [start, goal] {
        match board.at(p) {
            None => return Err(EndpointError::OutOfBounds(p)),
            Some(s) if !s.is_free() => return Err(EndpointError::Obstructed(p)),
            Some(_) => {}
        }
    }

    let mut open = Frontier::new();
    open.push(start, 0, manhattan(start, goal));
    board.set(start, CellState::Closed);

    let mut expanded = 0usize;
    while let Some(node) = open.pop() {
        board.set(node.pos, CellState::Path);
        expanded += 1;

        if node.pos == goal {
            board.set(start, CellState::Start);
            board.set(goal, CellState::Finish);
            log::debug!("route {start} -> {goal} found after {expanded} expansions");
            return Ok(Some(board));
        }

        for np in node.pos.neighbors_4() {
            if board.at(np).is_some_and(CellState::is_free) {
                open.push(np, node.g + 1, manhattan(np, goal));
                board.set(np, CellState::Closed);
            }
        }
    }

    log::debug!("no route {start} -> {goal}; frontier exhausted after {expanded} expansions");
    Ok(None)
}
