// business.rs - Occupant kinds and the random source that picks them

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The four kinds of business a cell can hold. They look different on screen
/// but the transition rule treats them all the same.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Business {
    Office,
    Factory,
    Bank,
    Shop,
}

impl Business {
    pub const ALL: [Business; 4] = [Business::Office, Business::Factory, Business::Bank, Business::Shop];

    pub fn glyph(self) -> &'static str {
        match self {
            Business::Office  => "🏢",
            Business::Factory => "🏭",
            Business::Bank    => "🏦",
            Business::Shop    => "🏪",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Business::Office  => "Office",
            Business::Factory => "Factory",
            Business::Bank    => "Bank",
            Business::Shop    => "Shop",
        }
    }
}

/// Supplies the random draws the engine needs. Swapping the implementation
/// makes spawning and randomizing deterministic.
pub trait KindSource {
    /// A kind drawn uniformly from `Business::ALL`.
    fn pick(&mut self) -> Business;

    /// `true` with probability `p`; `p` is already validated to lie in [0, 1].
    fn chance(&mut self, p: f64) -> bool;
}

/// `StdRng` backed source used by the application.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl KindSource for RandomSource {
    fn pick(&mut self) -> Business {
        Business::ALL[self.rng.gen_range(0..Business::ALL.len())]
    }

    fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }
}

/// Replays a fixed cycle of kinds and answers every `chance` with the same
/// coin. Probabilities of exactly 0 and 1 are still honoured.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    kinds: Vec<Business>,
    next: usize,
    coin: bool,
}

impl ScriptedSource {
    /// Panics if `kinds` is empty.
    pub fn new(kinds: Vec<Business>, coin: bool) -> Self {
        assert!(!kinds.is_empty(), "ScriptedSource needs at least one kind");
        Self { kinds, next: 0, coin }
    }

    /// Always the same kind, coin heads.
    pub fn constant(kind: Business) -> Self {
        Self::new(vec![kind], true)
    }
}

impl KindSource for ScriptedSource {
    fn pick(&mut self) -> Business {
        let kind = self.kinds[self.next % self.kinds.len()];
        self.next += 1;
        kind
    }

    fn chance(&mut self, p: f64) -> bool {
        if p <= 0.0 {
            false
        } else if p >= 1.0 {
            true
        } else {
            self.coin
        }
    }
}
