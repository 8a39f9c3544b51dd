use crate::error::Error;
use crate::error::Result;
use crate::parser;

pub(crate) mod limits {
    /// Arbitrary limits to avoid oom
    pub(crate) const MAX_DICE_AMOUNT: u64 = 5000;
    pub(crate) const MAX_DICE_SIDES: u64 = 5000;
}

/// Character splitting the amount of dice from their sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `d`: a plain set of dice
    Plain,
    /// `w`: a set whose last die fumbles on 1 and explodes on its maximum
    Wild,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Plain => 'd',
            Separator::Wild => 'w',
        }
    }

    /// Find the separator of an already lowercased segment, if any
    pub fn classify(segment: &str) -> Option<Self> {
        let (wild, plain) = segment
            .chars()
            .fold((false, false), |(wild, plain), c| match c {
                'w' => (true, plain),
                'd' => (wild, true),
                _ => (wild, plain),
            });
        match (wild, plain) {
            (true, _) => Some(Separator::Wild),
            (false, true) => Some(Separator::Plain),
            (false, false) => None,
        }
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One clause of a roll expression: a set of same sided dice plus a bonus, or a bare bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceGroup {
    count: u64,
    sides: u64,
    bonus: i64,
    wild: bool,
}

impl DiceGroup {
    /// New rollable group without bonus
    pub fn dice(count: u64, sides: u64, separator: Separator) -> Result<Self> {
        if count == 0 || sides == 0 {
            return Err(Error::NonPositive(0));
        }
        if count > limits::MAX_DICE_AMOUNT {
            return Err(Error::TooManyDice(count));
        }
        if sides > limits::MAX_DICE_SIDES {
            return Err(Error::TooManySides(sides));
        }
        Ok(DiceGroup {
            count,
            sides,
            bonus: 0,
            wild: separator == Separator::Wild,
        })
    }

    /// New standalone bonus group
    pub fn bonus_only(bonus: i64) -> Result<Self> {
        if bonus <= 0 {
            return Err(Error::NonPositive(bonus));
        }
        Ok(DiceGroup {
            count: 0,
            sides: 0,
            bonus,
            wild: false,
        })
    }

    /// Same group with its bonus replaced
    pub fn with_bonus(self, bonus: i64) -> Result<Self> {
        if bonus < 0 || (self.is_bonus_only() && bonus == 0) {
            return Err(Error::NonPositive(bonus));
        }
        Ok(DiceGroup { bonus, ..self })
    }

    /// Same group with `extra` added to its bonus
    pub fn add_bonus(self, extra: i64) -> Result<Self> {
        let bonus = self.bonus.checked_add(extra).ok_or(Error::Overflow)?;
        self.with_bonus(bonus)
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn sides(&self) -> u64 {
        self.sides
    }

    pub fn bonus(&self) -> i64 {
        self.bonus
    }

    pub fn is_wild(&self) -> bool {
        self.wild
    }

    pub fn is_bonus_only(&self) -> bool {
        self.count == 0
    }

    pub fn separator(&self) -> Separator {
        if self.wild {
            Separator::Wild
        } else {
            Separator::Plain
        }
    }

    /// Lowest total a non wild group can produce
    pub fn min(&self) -> i64 {
        (self.count as i64).saturating_add(self.bonus)
    }

    /// Highest total a non wild group can produce
    pub fn max(&self) -> i64 {
        (self.count.saturating_mul(self.sides) as i64).saturating_add(self.bonus)
    }
}

impl std::fmt::Display for DiceGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_bonus_only() {
            return write!(f, "{}", self.bonus);
        }
        write!(f, "{}{}{}", self.count, self.separator(), self.sides)?;
        if self.bonus != 0 {
            write!(f, "+{}", self.bonus)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for DiceGroup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut groups = parser::parse([s])?;
        match (groups.pop(), groups.is_empty()) {
            (Some(group), true) => Ok(group),
            _ => Err(Error::Malformed(s.to_owned())),
        }
    }
}
