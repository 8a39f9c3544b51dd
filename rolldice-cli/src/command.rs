use crate::cli::Command;
use rolldice_lib::error::Result;
use rolldice_lib::roll::EntropySource;
use rolldice_lib::roll::Source;
use rolldice_lib::solver::Solver;
use tracing::debug;
use tracing::warn;

/// Roll one die of the given sides
pub fn roll_die(sides: u64) -> Result<String> {
    let value = EntropySource.throw(sides)?;
    debug!("rolled {} on a d{}", value, sides);
    Ok(format!("d{sides} => {value}"))
}

/// Parse then roll a whole expression, returning its transcript
pub fn roll_sum(expr: &[String]) -> Result<String> {
    let solver = Solver::new(expr)?;
    debug!("parsed `{}` into {} group(s)", solver, solver.groups().len());
    let result = solver.solve()?;
    for outcome in result.outcomes() {
        debug!("{}", outcome.describe());
        if outcome.is_capped() {
            warn!(
                "stopped exploding `{}` after {} extra dice",
                outcome.group(),
                outcome.explosions()
            );
        }
    }
    Ok(result.to_string())
}

/// Dispatch a parsed command to its roller
pub fn run(command: &Command) -> Result<String> {
    match command {
        Command::D4 => roll_die(4),
        Command::D6 => roll_die(6),
        Command::D10 => roll_die(10),
        Command::D12 => roll_die(12),
        Command::D20 => roll_die(20),
        Command::D100 => roll_die(100),
        Command::Sum { expr } => roll_sum(expr),
    }
}
