//! The [`Element`] value stored in occupied cells.

use std::fmt;

/// An opaque single-character value occupying one cell.
///
/// Elements carry no behaviour; a space only checks them for membership in
/// its catalog, if it has one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element(pub char);

impl Element {
    /// The underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Element {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
