use crate::dice::DiceGroup;
use crate::dice::Separator;
use crate::error::Error;
use crate::error::Result;
use crate::segment;
use crate::segment::Segment;

/// Parse a strictly positive base 10 integer
fn parse_positive(part: &str) -> Result<i64> {
    let value = part
        .parse::<i64>()
        .map_err(|_| Error::NotANumber(part.to_owned()))?;
    if value <= 0 {
        return Err(Error::NonPositive(value));
    }
    Ok(value)
}

/// Parse `<count><separator><sides>`, the separator appearing exactly once
fn parse_dice(raw: &str, separator: Separator) -> Result<DiceGroup> {
    let mut parts = raw.split(separator.as_char());
    let (count, sides) = match (parts.next(), parts.next(), parts.next()) {
        (Some(count), Some(sides), None) => (parse_positive(count)?, parse_positive(sides)?),
        _ => return Err(Error::Malformed(raw.to_owned())),
    };
    DiceGroup::dice(count as u64, sides as u64, separator)
}

/// Collects groups in order while folding bare bonuses into the open group
#[derive(Debug, Default)]
pub(crate) struct Builder {
    groups: Vec<DiceGroup>,
    open: Option<DiceGroup>,
}

impl Builder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, segment: &Segment) -> Result<()> {
        match segment.separator {
            Some(separator) => {
                let group = parse_dice(&segment.raw, separator)?;
                if let Some(done) = self.open.replace(group) {
                    self.groups.push(done);
                }
            }
            None => {
                let bonus = parse_positive(&segment.raw)?;
                self.open = Some(match self.open {
                    Some(open) => open.add_bonus(bonus)?,
                    None => DiceGroup::bonus_only(bonus)?,
                });
            }
        }
        Ok(())
    }

    pub(crate) fn finish(mut self) -> Vec<DiceGroup> {
        self.groups.extend(self.open.take());
        self.groups
    }
}

/// Turn raw arguments into dice groups, stopping at the first invalid segment
pub(crate) fn parse<I, S>(args: I) -> Result<Vec<DiceGroup>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = Builder::new();
    for segment in segment::segment(args).iter() {
        builder.push(segment)?;
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(count: u64, sides: u64) -> DiceGroup {
        DiceGroup::dice(count, sides, Separator::Plain).unwrap()
    }

    #[test]
    fn fold_bonus_into_previous() {
        let groups = parse(["3d6", "2"]).unwrap();
        assert_eq!(
            vec![plain(3, 6).with_bonus(2).unwrap()],
            groups
        );
    }

    #[test]
    fn fold_several_bonuses() {
        let groups = parse(["1w6+2+3", "2d4"]).unwrap();
        assert_eq!(
            vec![
                DiceGroup::dice(1, 6, Separator::Wild)
                    .unwrap()
                    .with_bonus(5)
                    .unwrap(),
                plain(2, 4),
            ],
            groups
        );
    }

    #[test]
    fn standalone_bonus() {
        assert_eq!(vec![DiceGroup::bonus_only(5).unwrap()], parse(["5"]).unwrap());
        assert_eq!(
            vec![DiceGroup::bonus_only(7).unwrap(), plain(1, 20)],
            parse(["5 + 2 + 1d20"]).unwrap()
        );
    }

    #[test]
    fn keep_order() {
        let groups = parse(["3d12", "2d6", "5"]).unwrap();
        assert_eq!(
            vec![
                plain(3, 12),
                plain(2, 6).with_bonus(5).unwrap(),
            ],
            groups
        );
    }

    #[test]
    fn reject_multiple_separators() {
        assert!(matches!(parse(["3dd6"]), Err(Error::Malformed(s)) if s == "3dd6"));
        assert!(matches!(parse(["1w2w3"]), Err(Error::Malformed(_))));
    }

    #[test]
    fn reject_non_numeric() {
        assert!(matches!(parse(["3dx"]), Err(Error::NotANumber(s)) if s == "x"));
        assert!(matches!(parse(["d6"]), Err(Error::NotANumber(s)) if s.is_empty()));
        assert!(matches!(parse(["3d6", "two"]), Err(Error::NotANumber(_))));
    }

    #[test]
    fn reject_non_positive() {
        assert!(matches!(parse(["-3d6"]), Err(Error::NonPositive(-3))));
        assert!(matches!(parse(["3d0"]), Err(Error::NonPositive(0))));
        assert!(matches!(parse(["3d6", "0"]), Err(Error::NonPositive(0))));
    }

    #[test]
    fn reject_beyond_limits() {
        assert!(matches!(parse(["5001d6"]), Err(Error::TooManyDice(5001))));
        assert!(matches!(parse(["1d5001"]), Err(Error::TooManySides(5001))));
    }

    #[test]
    fn reject_bonus_overflow() {
        assert!(matches!(
            parse(["9223372036854775807", "1"]),
            Err(Error::Overflow)
        ));
        assert!(matches!(
            parse(["1w6", "9223372036854775807", "9223372036854775807"]),
            Err(Error::Overflow)
        ));
    }

    #[test]
    fn first_error_wins() {
        assert!(matches!(parse(["3d6", "3dx", "0"]), Err(Error::NotANumber(_))));
    }
}
