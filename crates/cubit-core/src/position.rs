//! The [`Position`] value type and the [`Axis`] selector.

use std::fmt;

/// One of the three spatial axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// The x axis (columns).
    X,
    /// The y axis (rows).
    Y,
    /// The z axis (layers).
    Z,
}

impl Axis {
    /// All axes in canonical `x, y, z` order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index of the axis within an `[x, y, z]` triple.
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}

/// An `(x, y, z)` integer cell address.
///
/// Positions carry no derived state; equality, ordering and hashing are
/// structural. A position is not tied to any extent; whether it is valid
/// depends on the space it is checked against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
    /// Layer.
    pub z: i64,
}

impl Position {
    /// Create a position from its three components.
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Component along `axis`.
    pub fn get(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Components as an `[x, y, z]` array.
    pub fn to_array(self) -> [i64; 3] {
        [self.x, self.y, self.z]
    }

    /// Translate by `(dx, dy, dz)`, or `None` if any axis overflows.
    pub fn checked_offset(self, dx: i64, dy: i64, dz: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            z: self.z.checked_add(dz)?,
        })
    }
}

impl From<(i64, i64, i64)> for Position {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self { x, y, z }
    }
}

impl From<[i64; 3]> for Position {
    fn from([x, y, z]: [i64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Position> for (i64, i64, i64) {
    fn from(p: Position) -> Self {
        (p.x, p.y, p.z)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
