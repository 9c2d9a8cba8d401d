//! The [`Board`] type — an owned rectangular grid of [`CellState`]s,
//! plus the board-file parser.
//!
//! Boards are plainly owned (no shared views): the search takes its board
//! by value and hands back an annotated one, so the caller's copy can
//! never be aliased mid-search.

use std::fmt;

use crate::cell::CellState;
use crate::geom::Point;

/// A rectangular grid of [`CellState`]s, indexed row-major by [`Point`]
/// (`x` = row, `y` = column).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: Vec<CellState>,
    rows: i32,
    cols: i32,
}

impl Board {
    /// Create a board of the given dimensions, all cells `Empty`.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            cells: vec![CellState::default(); (rows * cols) as usize],
            rows,
            cols,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether `p` lies within the board bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.rows && p.y < self.cols
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.x * self.cols + p.y) as usize
    }

    /// The state at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellState> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Set the state at `p`. Does nothing if `p` is out of bounds.
    pub fn set(&mut self, p: Point, state: CellState) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = state;
    }

    /// Fill every cell with `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, &s)| {
            let i = i as i32;
            (Point::new(i / cols, i % cols), s)
        })
    }

    /// Count cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Parse a board from its line-oriented text form.
    ///
    /// One row per line, comma-separated integers: `0` is free, any other
    /// value is an obstacle. A trailing comma per line is accepted (the
    /// classic board files end every value with one), as is whitespace
    /// around tokens. Blank lines are skipped.
    ///
    /// All rows must have the same length; ragged input is rejected with
    /// [`BoardError::Shape`] rather than left for the search to trip over.
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        let mut cells = Vec::new();
        let mut cols: Option<usize> = None;
        let mut rows = 0i32;

        for (line_no, line) in s.lines().enumerate() {
            let line_no = line_no + 1;
            if line.trim().is_empty() {
                continue;
            }

            let mut width = 0usize;
            let mut tokens = line.split(',').peekable();
            while let Some(token) = tokens.next() {
                let token = token.trim();
                // A trailing comma leaves one empty token at line end.
                if token.is_empty() && tokens.peek().is_none() {
                    break;
                }
                let n: i32 = token.parse().map_err(|_| BoardError::Parse {
                    line: line_no,
                    token: token.to_string(),
                })?;
                cells.push(if n == 0 {
                    CellState::Empty
                } else {
                    CellState::Obstacle
                });
                width += 1;
            }

            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(BoardError::Shape {
                        line: line_no,
                        expected,
                        found: width,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let Some(cols) = cols else {
            return Err(BoardError::Empty);
        };
        if cols == 0 {
            return Err(BoardError::Empty);
        }

        Ok(Self {
            cells,
            rows,
            cols: cols as i32,
        })
    }
}

/// Errors from [`Board::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A token on the given 1-based line is not an integer.
    Parse { line: usize, token: String },
    /// A row's length differs from the first row's.
    Shape {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// The input contained no cells at all.
    Empty,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, token } => {
                write!(f, "board line {line}: invalid token \u{201c}{token}\u{201d}")
            }
            Self::Shape {
                line,
                expected,
                found,
            } => write!(
                f,
                "board line {line}: row has {found} cells, expected {expected}"
            ),
            Self::Empty => write!(f, "board is empty"),
        }
    }
}

impl std::error::Error for BoardError {}
