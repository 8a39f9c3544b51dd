/// Crate Error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not determine desired dice from \"{0}\"")]
    Malformed(String),

    #[error("Could not read number from \"{0}\"")]
    NotANumber(String),

    #[error("Cannot operate against non-positive values like \"{0}\"")]
    NonPositive(i64),

    #[error("Cannot roll more than {} dice at once, asked for {0}", crate::dice::limits::MAX_DICE_AMOUNT)]
    TooManyDice(u64),

    #[error("Cannot roll dice with more than {} sides, asked for {0}", crate::dice::limits::MAX_DICE_SIDES)]
    TooManySides(u64),

    #[error("Total does not fit in a 64-bit integer")]
    Overflow,

    #[error("Could not draw from the entropy source: {0}")]
    Entropy(#[from] rand::Error),
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
