use std::fmt;

const SPACE_SENTINEL: &str = "(space)";

/// Atomic unit of the analysed alphabet.
///
/// A literal space is kept apart as [`Symbol::Space`] so it stays visible in
/// tabular output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Space,
    Character(char),
}

impl Symbol {
    /// Maps a decoded character onto the alphabet. Newlines are not part of
    /// it and yield `None`.
    pub fn classify(character: char) -> Option<Symbol> {
        match character {
            '\n' | '\r' => None,
            ' ' => Some(Symbol::Space),
            c => Some(Symbol::Character(c)),
        }
    }

    pub fn is_countable(&self) -> bool {
        match self {
            Symbol::Space => true,
            Symbol::Character(c) => Symbol::classify(*c).is_some(),
        }
    }
}

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        if value == ' ' {
            Symbol::Space
        } else {
            Symbol::Character(value)
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Space => f.pad(SPACE_SENTINEL),
            Symbol::Character(c) => f.pad(c.encode_utf8(&mut [0; 4])),
        }
    }
}
