use crate::dice::Separator;

const PLUS_SIGIL: char = '+';

/// A normalized piece of the expression with the separator it contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub raw: String,
    pub separator: Option<Separator>,
}

impl Segment {
    fn new(piece: &str) -> Self {
        let raw = piece.to_lowercase();
        let separator = Separator::classify(&raw);
        Segment { raw, separator }
    }
}

fn is_blank(piece: &str) -> bool {
    piece
        .chars()
        .all(|c| c == PLUS_SIGIL || c.is_whitespace())
}

/// Split raw arguments over whitespace and `+`, keeping their order
pub fn segment<I, S>(args: I) -> Vec<Segment>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .flat_map(|arg| {
            arg.as_ref()
                .split(|c: char| c == PLUS_SIGIL || c.is_whitespace())
                .filter(|piece| !is_blank(piece))
                .map(Segment::new)
                .collect::<Vec<_>>()
        })
        .collect()
}
