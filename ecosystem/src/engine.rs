// engine.rs - The business ecosystem automaton: grid, generation counter, running flag

use tracing::{debug, info};

use crate::business::{KindSource, RandomSource};
use crate::error::{EcosystemError, Result};
use crate::grid::{Cell, Grid};
use crate::patterns::Pattern;

pub type BoxedSource = Box<dyn KindSource + Send>;

/// Owns all mutable simulation state. The presentation layer reads it and
/// calls operations; it never writes cells directly.
pub struct Ecosystem {
    grid: Grid,
    generation: u64,
    running: bool,
    source: BoxedSource,
}

impl Ecosystem {
    /// Empty `rows` x `cols` ecosystem at generation 0, stopped.
    pub fn new(rows: usize, cols: usize, source: BoxedSource) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            generation: 0,
            running: false,
            source,
        })
    }

    /// Same as `new` with an entropy-seeded `RandomSource`.
    pub fn with_random_source(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols, Box::new(RandomSource::from_entropy()))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell> {
        self.grid.get(row, col)
    }

    /// Number of non-empty cells.
    pub fn active_count(&self) -> usize {
        self.grid.occupied_count()
    }

    pub fn total_cells(&self) -> usize {
        self.grid.len()
    }

    /// Empties an occupied cell, or opens a random kind of business in an empty one.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<Cell> {
        let next = match self.grid.get(row, col)? {
            Some(_) => None,
            None => Some(self.source.pick()),
        };
        self.grid.set(row, col, next)?;
        debug!(row, col, ?next, "toggled cell");
        Ok(next)
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        self.grid = self.grid.next_generation(self.source.as_mut());
        self.generation += 1;
    }

    /// One scheduled invocation: steps only while running.
    /// Returns whether a generation was computed.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.step();
        true
    }

    /// Empties every cell and resets the generation. The running flag is
    /// left alone, so a running loop carries on over the empty grid.
    pub fn clear(&mut self) {
        self.grid = self.fresh_grid();
        self.generation = 0;
        info!("grid cleared");
    }

    /// Fills each cell independently with probability `density`.
    pub fn randomize(&mut self, density: f64) -> Result<()> {
        check_density(density)?;
        let mut grid = self.fresh_grid();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                if self.source.chance(density) {
                    grid.set(row, col, Some(self.source.pick()))?;
                }
            }
        }
        self.grid = grid;
        self.generation = 0;
        info!(density, active = self.active_count(), "grid randomized");
        Ok(())
    }

    /// Replaces the grid with `pattern` centered on it and resets the generation.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> Result<()> {
        let mut grid = self.fresh_grid();
        for (row, col) in pattern.placed(grid.rows(), grid.cols()) {
            grid.set(row, col, Some(self.source.pick()))?;
        }
        self.grid = grid;
        self.generation = 0;
        info!(pattern = pattern.name, "pattern loaded");
        Ok(())
    }

    pub(crate) fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    fn fresh_grid(&self) -> Grid {
        self.grid.emptied()
    }
}

impl std::fmt::Debug for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ecosystem")
            .field("rows", &self.grid.rows())
            .field("cols", &self.grid.cols())
            .field("generation", &self.generation)
            .field("running", &self.running)
            .field("active", &self.active_count())
            .finish()
    }
}

pub(crate) fn check_density(density: f64) -> Result<()> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(EcosystemError::invalid(format!("density {density} is outside [0, 1]")))
    }
}
