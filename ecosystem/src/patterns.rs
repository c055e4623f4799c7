// patterns.rs - Named starting layouts, placed centered on the grid

pub struct Pattern {
    pub name: &'static str,
    /// (row, col) offsets relative to the pattern's top-left corner
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

impl Pattern {
    /// Height and width of the pattern's bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Absolute coordinates when centered on a `rows` x `cols` grid.
    /// Cells that would land off the grid are dropped.
    pub fn placed(&self, rows: usize, cols: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (h, w) = self.extent();
        let top = rows.saturating_sub(h) / 2;
        let left = cols.saturating_sub(w) / 2;
        self.cells
            .iter()
            .map(move |&(r, c)| (top + r, left + c))
            .filter(move |&(r, c)| r < rows && c < cols)
    }
}

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent() {
        assert_eq!(find("blinker").unwrap().extent(), (1, 3));
        assert_eq!(find("Beacon").unwrap().extent(), (4, 4));
    }

    #[test]
    fn test_placed_is_centered() {
        let placed: Vec<_> = find("Blinker").unwrap().placed(20, 20).collect();
        assert_eq!(placed, vec![(9, 8), (9, 9), (9, 10)]);
    }

    #[test]
    fn test_placed_clips_to_small_grid() {
        let placed: Vec<_> = find("Toad").unwrap().placed(2, 2).collect();
        assert_eq!(placed, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_unknown_pattern() {
        assert!(find("Gosper Glider Gun").is_none());
    }
}
