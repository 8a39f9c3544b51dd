pub mod notice;
pub mod outcome;

pub use notice::Notice;
pub use outcome::Outcome;

use crate::error;
use crate::error::Error;
use rand::rngs::OsRng;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Keep a roll expression result
#[derive(Debug, Clone)]
pub struct Result {
    outcomes: Vec<Outcome>,
    total: i64,
}

impl Result {
    pub fn new(outcomes: Vec<Outcome>) -> error::Result<Self> {
        let total = outcomes
            .iter()
            .try_fold(0i64, |acc, outcome| acc.checked_add(outcome.get_total()))
            .ok_or(Error::Overflow)?;
        Ok(Result { outcomes, total })
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn get_total(&self) -> i64 {
        self.total
    }
}

impl std::fmt::Display for Result {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.outcomes
            .iter()
            .try_for_each(|outcome| writeln!(f, "{outcome}"))?;
        write!(f, "{}", self.total)
    }
}

/// Interface for rolling dices
pub trait Source {
    /// Value in `[1, sides]`, `sides` being positive
    fn throw(&mut self, sides: u64) -> error::Result<u64>;
}

/// Secure source keying a fresh generator from the operating system on every throw
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropySource;

impl Source for EntropySource {
    fn throw(&mut self, sides: u64) -> error::Result<u64> {
        let mut generator = StdRng::from_rng(OsRng)?;
        Ok(generator.gen_range(1..=sides))
    }
}

/// Dice roller over any caller provided generator
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> error::Result<u64> {
        Ok(self.generator.gen_range(1..=sides))
    }
}
