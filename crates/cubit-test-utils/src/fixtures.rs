//! Reusable coordinate space fixtures.
//!
//! - [`reference_seed`] / [`reference_space`]: the five-element scenario
//!   used throughout the test suites.
//! - [`open_cube`]: an empty, unrestricted cube with overwrite allowed.
//! - [`pos`] / [`extent`]: terse constructors for test literals.

use cubit_core::{Element, Extent, Position};
use cubit_space::{CoordinateSpace, ElementCatalog};

/// Shorthand position constructor.
pub fn pos(x: i64, y: i64, z: i64) -> Position {
    Position::new(x, y, z)
}

/// Extent constructor for sizes known to be valid.
pub fn extent(x: i64, y: i64, z: i64) -> Extent {
    Extent::new(x, y, z).expect("fixture extent must be non-zero")
}

/// The five-element reference seed.
///
/// Two of its positions have `z = 3`, so it only fits extents at least
/// three layers deep.
pub fn reference_seed() -> Vec<(Position, Element)> {
    vec![
        (pos(2, 1, 2), Element('c')),
        (pos(1, 1, 1), Element('a')),
        (pos(1, 1, 3), Element('a')),
        (pos(3, 1, 1), Element('a')),
        (pos(3, 1, 3), Element('a')),
    ]
}

/// Catalog listing exactly the elements of [`reference_seed`].
pub fn reference_catalog() -> ElementCatalog {
    ElementCatalog::from_chars("ac")
}

/// The reference seed in an unrestricted 3×3×3 space, overwrite denied.
pub fn reference_space() -> CoordinateSpace {
    CoordinateSpace::new(reference_seed(), None, extent(3, 3, 3), false)
        .expect("reference seed fits 3x3x3")
}

/// An unrestricted, unoccupied `side³` space with overwrite allowed.
pub fn open_cube(side: i64) -> CoordinateSpace {
    let initial: Vec<(Position, Element)> = Vec::new();
    CoordinateSpace::new(initial, None, extent(side, side, side), true)
        .expect("empty seed always valid")
}
