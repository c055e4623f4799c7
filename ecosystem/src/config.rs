// config.rs - Engine defaults and validation

use std::time::Duration;

use crate::business::RandomSource;
use crate::engine::{check_density, Ecosystem};
use crate::error::{EcosystemError, Result};

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 20;
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);
pub const DEFAULT_DENSITY: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    /// Time between generations while running
    pub interval: Duration,
    /// Probability that `randomize` fills a cell
    pub density: f64,
    /// Fixed seed for reproducible runs; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            interval: DEFAULT_INTERVAL,
            density: DEFAULT_DENSITY,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(EcosystemError::invalid(format!(
                "grid dimensions must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.interval.is_zero() {
            return Err(EcosystemError::invalid("step interval must be positive"));
        }
        check_density(self.density)
    }

    pub fn source(&self) -> RandomSource {
        match self.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::from_entropy(),
        }
    }

    /// A fresh, empty ecosystem with this configuration's dimensions and source.
    pub fn build(&self) -> Result<Ecosystem> {
        self.validate()?;
        Ecosystem::new(self.rows, self.cols, Box::new(self.source()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!((config.rows, config.cols), (20, 20));
        assert_eq!(config.interval, Duration::from_millis(500));
        assert_eq!(config.density, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects() {
        let bad = [
            EngineConfig { rows: 0, ..Default::default() },
            EngineConfig { interval: Duration::ZERO, ..Default::default() },
            EngineConfig { density: 1.5, ..Default::default() },
            EngineConfig { density: -0.2, ..Default::default() },
        ];
        for config in bad {
            assert!(matches!(config.validate(), Err(EcosystemError::InvalidParameter(_))), "{config:?}");
            assert!(config.build().is_err());
        }
    }

    #[test]
    fn test_seeded_builds_are_reproducible() {
        let config = EngineConfig { seed: Some(99), ..Default::default() };
        let mut a = config.build().unwrap();
        let mut b = config.build().unwrap();
        a.randomize(config.density).unwrap();
        b.randomize(config.density).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.generation(), 0);
    }
}
