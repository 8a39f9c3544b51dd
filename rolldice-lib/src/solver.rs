use crate::dice::DiceGroup;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::parser;
use crate::roll;
use crate::roll::EntropySource;
use crate::roll::RandomSource;
use itertools::Itertools;
use rand::Rng;

/// Represent a solver and holds the parsed dice groups
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solver(Vec<DiceGroup>);

impl Solver {
    /// Parse the raw arguments, failing on the first invalid segment
    pub fn new<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Solver(parser::parse(args)?))
    }

    /// Solve the roll expression using the secure default source
    pub fn solve(&self) -> Result<roll::Result> {
        self.solve_with_source(&mut EntropySource)
    }

    /// Solve the roll expression using the provided Rng source
    pub fn solve_with<R: Rng>(&self, generator: &mut R) -> Result<roll::Result> {
        self.solve_with_source(&mut RandomSource { generator })
    }

    /// Solve the roll expression using the provided source
    pub fn solve_with_source<S: roll::Source>(&self, source: &mut S) -> Result<roll::Result> {
        Evaluator::eval(&self.0, source)
    }

    /// Return the dice groups of the expression, in order
    pub fn groups(&self) -> &[DiceGroup] {
        &self.0
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().format(" + "))
    }
}
