/// Something notable that happened while rolling a wild group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Last die came up 1, the highest value rolled is taken off the total
    Fumble { lost: u64 },
    /// Last die came up on its maximum and one more die was rolled
    Explosion,
    /// Explosion chain stopped by the safety limit
    Capped,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Fumble { lost } => write!(f, "Fumble: -{lost}")?,
            Notice::Explosion => write!(f, "Blown up")?,
            Notice::Capped => write!(f, "Explosion limit reached")?,
        }
        Ok(())
    }
}
