//! The [`CellState`] type — the role a board cell plays in a search.

/// The state of a single board cell.
///
/// Exactly one state applies to a cell at any time. `Empty` and `Obstacle`
/// come from the board file; the remaining states are produced by the
/// search: `Closed` for discovered cells, `Path` for cells on the chosen
/// route, and `Start`/`Finish` overlays on the two endpoints of a
/// successful search. A cell only ever moves `Empty → Closed → Path`;
/// `Obstacle` is never written by the search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Obstacle,
    Closed,
    Path,
    Start,
    Finish,
}

impl CellState {
    /// Whether the cell is still open terrain for the search.
    /// Only `Empty` cells may be entered; everything else is either an
    /// obstacle or already discovered.
    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert_eq!(CellState::default(), CellState::Empty);
    }

    #[test]
    fn only_empty_is_free() {
        assert!(CellState::Empty.is_free());
        for s in [
            CellState::Obstacle,
            CellState::Closed,
            CellState::Path,
            CellState::Start,
            CellState::Finish,
        ] {
            assert!(!s.is_free());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&CellState::Obstacle).unwrap();
        assert_eq!(
            serde_json::from_str::<CellState>(&json).unwrap(),
            CellState::Obstacle
        );
    }
}
