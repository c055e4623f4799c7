// properties.rs - Property tests for the transition rule and grid operations

use ecosystem::{Business, Cell, Ecosystem, Grid, ScriptedSource};
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = Business> {
    prop::sample::select(Business::ALL.to_vec())
}

fn grid() -> impl Strategy<Value = Grid> {
    (1usize..9, 1usize..9).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::option::weighted(0.4, kind()), rows * cols).prop_map(move |cells| {
            let mut grid = Grid::new(rows, cols).unwrap();
            for (idx, cell) in cells.into_iter().enumerate() {
                grid.set(idx / cols, idx % cols, cell).unwrap();
            }
            grid
        })
    })
}

fn cells_of(grid: &Grid) -> Vec<(usize, usize, Cell)> {
    let mut out = Vec::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            out.push((row, col, grid.get(row, col).unwrap()));
        }
    }
    out
}

proptest! {
    #[test]
    fn empty_grid_stays_empty(rows in 1usize..25, cols in 1usize..25) {
        let mut eco = Ecosystem::new(rows, cols, Box::new(ScriptedSource::constant(Business::Bank))).unwrap();
        eco.step();
        prop_assert!(eco.grid().is_vacant());
        prop_assert_eq!(eco.generation(), 1);
    }

    #[test]
    fn transition_rule_holds_per_cell(before in grid(), spawn in kind()) {
        let after = before.next_generation(&mut ScriptedSource::constant(spawn));
        prop_assert_eq!((after.rows(), after.cols()), (before.rows(), before.cols()));

        for (row, col, old) in cells_of(&before) {
            let n = before.occupied_neighbors(row, col);
            let new = after.get(row, col).unwrap();
            match (old, n) {
                (_, n) if n < 2 || n > 3 => { prop_assert_eq!(new, None); }
                (Some(_), _) => { prop_assert_eq!(new, old); }
                (None, 3) => { prop_assert_eq!(new, Some(spawn)); }
                (None, _) => { prop_assert_eq!(new, None); }
            }
        }
    }

    #[test]
    fn toggle_twice_restores_occupancy(before in grid(), pick in any::<prop::sample::Index>()) {
        let (rows, cols) = (before.rows(), before.cols());
        let idx = pick.index(rows * cols);
        let (row, col) = (idx / cols, idx % cols);
        let was_occupied = before.get(row, col).unwrap().is_some();

        let mut eco = Ecosystem::new(rows, cols, Box::new(ScriptedSource::constant(Business::Factory))).unwrap();
        // Rebuild `before` through the public toggle surface
        for (r, c, cell) in cells_of(&before) {
            if cell.is_some() {
                eco.toggle_cell(r, c).unwrap();
            }
        }

        eco.toggle_cell(row, col).unwrap();
        prop_assert_ne!(eco.cell(row, col).unwrap().is_some(), was_occupied);
        eco.toggle_cell(row, col).unwrap();
        prop_assert_eq!(eco.cell(row, col).unwrap().is_some(), was_occupied);
        prop_assert_eq!(eco.generation(), 0);
    }

    #[test]
    fn clear_always_resets(before in grid(), steps in 0usize..5, density in 0.0f64..=1.0) {
        let mut eco = Ecosystem::new(before.rows(), before.cols(), Box::new(ScriptedSource::constant(Business::Shop))).unwrap();
        eco.randomize(density).unwrap();
        for _ in 0..steps {
            eco.step();
        }
        eco.clear();
        prop_assert!(eco.grid().is_vacant());
        prop_assert_eq!(eco.generation(), 0);
        prop_assert_eq!(eco.active_count(), 0);
    }
}
