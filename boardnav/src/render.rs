//! Board rendering: one fixed-width symbol per cell, one row per line.

use gridroute_core::{Board, CellState};

/// Display symbol for a single cell state.
fn symbol(state: CellState) -> &'static str {
    match state {
        CellState::Obstacle => "⛰️   ",
        CellState::Path => "🚗   ",
        CellState::Start => "🚦   ",
        CellState::Finish => "🏁   ",
        // Empty and Closed both render as open ground.
        _ => "0   ",
    }
}

/// Render the whole board to a string, one row per line.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for (p, state) in board.iter() {
        out.push_str(symbol(state));
        if p.y == board.cols() - 1 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridroute_core::Point;

    #[test]
    fn renders_one_line_per_row() {
        let b = Board::parse("0,1\n0,0").unwrap();
        let s = render(&b);
        assert_eq!(s.lines().count(), 2);
        assert_eq!(s.lines().next().unwrap(), "0   ⛰️   ");
    }

    #[test]
    fn closed_cells_render_as_open_ground() {
        let mut b = Board::parse("0,0").unwrap();
        b.set(Point::new(0, 0), CellState::Closed);
        b.set(Point::new(0, 1), CellState::Path);
        assert_eq!(render(&b), "0   🚗   \n");
    }
}
