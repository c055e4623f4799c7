// lib.rs - Crate root and re-exports

//! Business Ecosystem Simulator engine.
//!
//! A Life-like automaton on a fixed grid where each occupied cell is a
//! business. Businesses with fewer than 2 or more than 3 neighbors fail,
//! and an empty cell with exactly 3 neighbors spawns a new one of a random
//! kind. [`Ecosystem`] owns the state; [`runner`] advances it on a timer.

pub mod business;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod runner;

pub use business::{Business, KindSource, RandomSource, ScriptedSource};
pub use config::EngineConfig;
pub use engine::{BoxedSource, Ecosystem};
pub use error::{EcosystemError, Result};
pub use grid::{Cell, Grid};
pub use patterns::{Pattern, PATTERNS};
pub use runner::{RunHandle, Runner, SharedEcosystem};
