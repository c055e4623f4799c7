// cli.rs - Command-line flags mapped onto EngineConfig

use clap::Parser;
use std::time::Duration;

use ecosystem::config::{DEFAULT_DENSITY, EngineConfig};

/// Business Ecosystem Simulator - watch businesses open, thrive and fail on a 20x20 grid
#[derive(Parser, Debug)]
#[command(name = "ecosystem_sim")]
#[command(version)]
pub struct Cli {
    /// Milliseconds between generations while the simulation runs
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,

    /// Share of cells filled by "Randomize", between 0 and 1
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Seed the random source for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter (e.g. "debug", "ecosystem=trace"); falls back to RUST_LOG, then "info"
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            interval: Duration::from_millis(self.interval_ms),
            density: self.density,
            seed: self.seed,
            ..EngineConfig::default()
        }
    }
}
