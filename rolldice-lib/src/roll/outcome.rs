use crate::dice::DiceGroup;
use crate::error::Error;
use crate::error::Result;
use crate::roll::notice::Notice;
use itertools::Itertools;

fn checked_add(acc: i64, value: u64) -> Result<i64> {
    i64::try_from(value)
        .ok()
        .and_then(|value| acc.checked_add(value))
        .ok_or(Error::Overflow)
}

/// The dice rolled for one group, in roll order, with what happened along the way
#[derive(Debug, Clone)]
pub struct Outcome {
    group: DiceGroup,
    rolls: Vec<u64>,
    notices: Vec<Notice>,
    total: i64,
}

impl Outcome {
    /// Standalone bonus, nothing rolled
    pub fn bonus(group: DiceGroup) -> Self {
        Self {
            group,
            rolls: Vec::new(),
            notices: Vec::new(),
            total: group.bonus(),
        }
    }

    /// New from the final rolls, computing the group total
    pub fn new(group: DiceGroup, rolls: Vec<u64>, notices: Vec<Notice>) -> Result<Self> {
        let lost = notices
            .iter()
            .filter_map(|notice| match notice {
                Notice::Fumble { lost } => Some(*lost),
                _ => None,
            })
            .try_fold(0i64, checked_add)?;
        let total = rolls
            .iter()
            .try_fold(0i64, |acc, &value| checked_add(acc, value))?
            .checked_sub(lost)
            .and_then(|total| total.checked_add(group.bonus()))
            .ok_or(Error::Overflow)?;
        Ok(Self {
            group,
            rolls,
            notices,
            total,
        })
    }

    pub fn group(&self) -> &DiceGroup {
        &self.group
    }

    pub fn rolls(&self) -> &[u64] {
        &self.rolls
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Value taken off by a fumble, if any
    pub fn lost(&self) -> Option<u64> {
        self.notices.iter().find_map(|notice| match notice {
            Notice::Fumble { lost } => Some(*lost),
            _ => None,
        })
    }

    /// Amount of extra dice rolled by explosions
    pub fn explosions(&self) -> usize {
        self.notices
            .iter()
            .filter(|notice| matches!(notice, Notice::Explosion))
            .count()
    }

    pub fn is_capped(&self) -> bool {
        self.notices.contains(&Notice::Capped)
    }

    /// Contribution of this group to the grand total
    pub fn get_total(&self) -> i64 {
        self.total
    }

    /// Roll trace as printed after each group
    pub fn to_string_rolls(&self) -> String {
        format!("[{}]", self.rolls.iter().format(" "))
    }

    /// Single line with the group and its rolls
    pub fn describe(&self) -> String {
        format!(
            "{}\t=> [{}] = {}",
            self.group,
            self.rolls.iter().format(", "),
            self.total
        )
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.notices
            .iter()
            .try_for_each(|notice| writeln!(f, "{notice}"))?;
        write!(f, "Rolls:  {}", self.to_string_rolls())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Separator;

    #[test]
    fn total_with_bonus() {
        let group = DiceGroup::dice(3, 6, Separator::Plain)
            .unwrap()
            .with_bonus(2)
            .unwrap();
        let outcome = Outcome::new(group, vec![1, 4, 6], Vec::new()).unwrap();
        assert_eq!(13, outcome.get_total());
        assert_eq!(None, outcome.lost());
        assert_eq!("Rolls:  [1 4 6]", outcome.to_string());
        assert_eq!("3d6+2\t=> [1, 4, 6] = 13", outcome.describe());
    }

    #[test]
    fn total_with_fumble() {
        let group = DiceGroup::dice(2, 6, Separator::Wild).unwrap();
        let outcome =
            Outcome::new(group, vec![5, 1], vec![Notice::Fumble { lost: 5 }]).unwrap();
        assert_eq!(1, outcome.get_total());
        assert_eq!(Some(5), outcome.lost());
        assert_eq!("Fumble: -5\nRolls:  [5 1]", outcome.to_string());
    }

    #[test]
    fn explosions_are_counted() {
        let group = DiceGroup::dice(1, 6, Separator::Wild).unwrap();
        let outcome = Outcome::new(
            group,
            vec![6, 6, 2],
            vec![Notice::Explosion, Notice::Explosion],
        )
        .unwrap();
        assert_eq!(14, outcome.get_total());
        assert_eq!(2, outcome.explosions());
        assert!(!outcome.is_capped());
        assert_eq!("Blown up\nBlown up\nRolls:  [6 6 2]", outcome.to_string());
    }

    #[test]
    fn total_overflow() {
        let group = DiceGroup::dice(1, 6, Separator::Plain)
            .unwrap()
            .with_bonus(i64::MAX)
            .unwrap();
        assert!(matches!(
            Outcome::new(group, vec![6], Vec::new()),
            Err(Error::Overflow)
        ));
        let group = DiceGroup::dice(1, 6, Separator::Plain).unwrap();
        assert!(matches!(
            Outcome::new(group, vec![u64::MAX], Vec::new()),
            Err(Error::Overflow)
        ));
    }

    #[test]
    fn bonus_rolls_nothing() {
        let outcome = Outcome::bonus(DiceGroup::bonus_only(5).unwrap());
        assert_eq!(5, outcome.get_total());
        assert!(outcome.rolls().is_empty());
        assert_eq!("Rolls:  []", outcome.to_string());
    }
}
