pub mod dice;
pub mod error;
mod evaluator;
mod parser;
pub mod roll;
pub mod segment;
pub mod solver;
