use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;
use clap::Subcommand;

const ROLLDICE_AUTHOR: &str = crate_authors!();
const ROLLDICE_VERSION: &str = crate_version!();
const ROLLDICE_ABOUT: &str = crate_description!();
const ROLLDICE_FLAG_D_SHORT: char = 'd';
const ROLLDICE_FLAG_D_HELP: &str = "Enable Debug logging";
const ROLLDICE_FLAG_D_ENV: &str = "ROLLDICE_DEBUG";

#[derive(Parser, Debug)]
#[command(author = ROLLDICE_AUTHOR, version = ROLLDICE_VERSION, about = ROLLDICE_ABOUT)]
pub struct Args {
    #[arg(
        short = ROLLDICE_FLAG_D_SHORT,
        long,
        help = ROLLDICE_FLAG_D_HELP,
        env = ROLLDICE_FLAG_D_ENV,
        global = true,
        action
    )]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Roll a single 4-sided die
    D4,
    /// Roll a single 6-sided die
    D6,
    /// Roll a single 10-sided die
    D10,
    /// Roll a single 12-sided die
    D12,
    /// Roll a single 20-sided die
    D20,
    /// Roll percentile dice
    ///
    /// Roll 1-100 or "percentile dice" as typically achieved by rolling 2d10 of
    /// different colors where one represents the ones place and the other
    /// represents the tens place, and where two 0s would be interpreted as 100.
    D100,
    /// Roll an arbitrary combination of dice
    ///
    /// Specify a set of dice by the number of dice, followed by a 'd', followed by
    /// the number of sides on that set of dice. Use a 'w' instead of the 'd' for a
    /// wild set: when its last die shows 1 the highest die rolled is taken off the
    /// total, and when it shows its maximum another die is rolled and added, again
    /// and again.
    ///
    /// Specify multiple sets of dice by separating each set by either a space ' '
    /// or with a plus '+'. Specify a fixed bonus just as you would another set of
    /// dice, it is added to the set before it.
    ///
    /// For example:
    ///
    /// 2d8 will calculate the sum of d8 + d8 in the range of 2-16.
    ///
    /// 3d6 + 2 will calculate the sum of d6 + d6 + d6 + 2 in the range of 5-20.
    ///
    /// 3d12 2d6 5 will calculate the sum of d12 + d12 + d12 + d6 + d6 + 5 in the
    /// range of 10-53.
    #[command(visible_aliases = ["total", "complex", "add"])]
    Sum {
        /// Dice sets and bonuses, e.g. `3d6 + 2 1w6`
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expr: Vec<String>,
    },
}
