use crate::dice::DiceGroup;
use crate::error::Result;
use crate::roll;
use crate::roll::Notice;
use crate::roll::Outcome;

mod limits {
    /// Extra dice allowed per wild group, a one sided wild die never stops exploding
    pub(crate) const MAX_EXPLOSIONS: usize = 1000;
}

/// Steps of a wild group once its dice are rolled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Initial,
    CheckFumble,
    Exploding,
    Done,
}

/// Represent an evaluator
pub(crate) struct Evaluator;

impl Evaluator {
    /// Apply fumble then explosion rules on the last die, appending extra dice to `rolls`
    fn eval_wild<S: roll::Source>(
        sides: u64,
        rolls: &mut Vec<u64>,
        source: &mut S,
    ) -> Result<Vec<Notice>> {
        let mut notices = Vec::new();
        let mut explosions = 0;
        let mut phase = Phase::Initial;
        while phase != Phase::Done {
            let last = rolls.last().copied();
            phase = match phase {
                Phase::Initial => Phase::CheckFumble,
                Phase::CheckFumble => {
                    if last == Some(1) {
                        let lost = rolls.iter().copied().max().unwrap_or_default();
                        notices.push(Notice::Fumble { lost });
                    }
                    Phase::Exploding
                }
                Phase::Exploding if last != Some(sides) => Phase::Done,
                Phase::Exploding if explosions >= limits::MAX_EXPLOSIONS => {
                    notices.push(Notice::Capped);
                    Phase::Done
                }
                Phase::Exploding => {
                    rolls.push(source.throw(sides)?);
                    explosions += 1;
                    notices.push(Notice::Explosion);
                    Phase::Exploding
                }
                Phase::Done => Phase::Done,
            };
        }
        Ok(notices)
    }

    fn eval_group<S: roll::Source>(group: &DiceGroup, source: &mut S) -> Result<Outcome> {
        if group.is_bonus_only() {
            return Ok(Outcome::bonus(*group));
        }
        let mut rolls = Self::roll(group.count(), group.sides(), source)?;
        let notices = if group.is_wild() {
            Self::eval_wild(group.sides(), &mut rolls, source)?
        } else {
            Vec::new()
        };
        Outcome::new(*group, rolls, notices)
    }

    // compute every group, in order
    pub(crate) fn eval<S: roll::Source>(
        groups: &[DiceGroup],
        source: &mut S,
    ) -> Result<roll::Result> {
        let outcomes = groups
            .iter()
            .map(|group| Self::eval_group(group, source))
            .collect::<Result<Vec<_>>>()?;
        roll::Result::new(outcomes)
    }

    pub(crate) fn roll<S: roll::Source>(
        amount: u64,
        sides: u64,
        source: &mut S,
    ) -> Result<Vec<u64>> {
        (0..amount).map(|_| source.throw(sides)).collect()
    }
}
