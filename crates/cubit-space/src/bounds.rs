//! Containment checks of positions against an [`Extent`].
//!
//! The predicates here are pure. They accept either a single [`Position`]
//! or any contiguous sequence of positions through the [`Positions`] trait.

use cubit_core::{Axis, CoordinateError, Extent, IntoPosition, Position};
use smallvec::{Array, SmallVec};

/// A single position or a contiguous sequence of positions.
///
/// A single position is viewed as a one-element slice.
pub trait Positions {
    /// The positions in input order.
    fn as_positions(&self) -> &[Position];
}

impl Positions for Position {
    fn as_positions(&self) -> &[Position] {
        std::slice::from_ref(self)
    }
}

impl Positions for [Position] {
    fn as_positions(&self) -> &[Position] {
        self
    }
}

impl<const N: usize> Positions for [Position; N] {
    fn as_positions(&self) -> &[Position] {
        self
    }
}

impl Positions for Vec<Position> {
    fn as_positions(&self) -> &[Position] {
        self
    }
}

impl<A: Array<Item = Position>> Positions for SmallVec<A> {
    fn as_positions(&self) -> &[Position] {
        self
    }
}

/// Whether `query` has any position outside `extent`.
///
/// A position is out of bounds if any axis value is `<= 0` or exceeds the
/// corresponding extent axis. For a sequence this only reports that some
/// member violates the bounds; use [`first_out_of_bounds`] to find which.
/// An empty sequence is in bounds.
pub fn is_out_of_bounds<Q: Positions + ?Sized>(query: &Q, extent: &Extent) -> bool {
    first_out_of_bounds(query, extent).is_some()
}

/// The first position in `query` that lies outside `extent`.
pub fn first_out_of_bounds<Q: Positions + ?Sized>(query: &Q, extent: &Extent) -> Option<Position> {
    query
        .as_positions()
        .iter()
        .copied()
        .find(|p| !extent.contains(p))
}

/// First axis (x, then y, then z) on which `position` leaves `extent`.
pub fn violating_axis(position: &Position, extent: &Extent) -> Option<Axis> {
    extent.violating_axis(position)
}

/// Coerce `raw` to an integer position, then check it against `extent`.
///
/// Fails with the coercion error rather than truncating a fractional or
/// non-finite coordinate.
pub fn try_is_out_of_bounds<P: IntoPosition>(
    raw: P,
    extent: &Extent,
) -> Result<bool, CoordinateError> {
    let position = raw.into_position()?;
    Ok(is_out_of_bounds(&position, extent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use smallvec::smallvec;

    fn p(x: i64, y: i64, z: i64) -> Position {
        Position::new(x, y, z)
    }

    fn extent_332() -> Extent {
        Extent::new(3, 3, 2).unwrap()
    }

    #[test]
    fn single_position_edges() {
        let e = extent_332();
        assert!(!is_out_of_bounds(&p(1, 1, 1), &e));
        assert!(!is_out_of_bounds(&p(3, 3, 2), &e));
        assert!(is_out_of_bounds(&p(0, 1, 1), &e));
        assert!(is_out_of_bounds(&p(1, -1, 1), &e));
        assert!(is_out_of_bounds(&p(1, 1, 3), &e));
        assert!(is_out_of_bounds(&p(4, 1, 1), &e));
    }

    #[test]
    fn sequence_reports_any_violation() {
        let e = extent_332();
        let all_inside = vec![p(1, 1, 1), p(2, 1, 2), p(3, 1, 1)];
        assert!(!is_out_of_bounds(&all_inside, &e));

        let one_outside = [p(1, 1, 1), p(1, 1, 3), p(3, 1, 1)];
        assert!(is_out_of_bounds(&one_outside, &e));
        assert_eq!(first_out_of_bounds(&one_outside, &e), Some(p(1, 1, 3)));

        let small: SmallVec<[Position; 4]> = smallvec![p(2, 2, 2), p(25, 1, 3)];
        assert_eq!(first_out_of_bounds(&small, &e), Some(p(25, 1, 3)));
    }

    #[test]
    fn empty_sequence_in_bounds() {
        let none: &[Position] = &[];
        assert!(!is_out_of_bounds(none, &extent_332()));
    }

    #[test]
    fn violating_axis_order() {
        let e = extent_332();
        assert_eq!(violating_axis(&p(0, 0, 0), &e), Some(Axis::X));
        assert_eq!(violating_axis(&p(1, 9, 9), &e), Some(Axis::Y));
        assert_eq!(violating_axis(&p(2, 2, 2), &e), None);
    }

    #[test]
    fn coercing_check() {
        let e = extent_332();
        assert_eq!(try_is_out_of_bounds([1.0, 2.0, 2.0], &e), Ok(false));
        assert_eq!(try_is_out_of_bounds("4,1,1", &e), Ok(true));
        assert!(matches!(
            try_is_out_of_bounds([1.5, 1.0, 1.0], &e),
            Err(CoordinateError::NonInteger { axis: Axis::X, .. })
        ));
    }

    proptest! {
        #[test]
        fn sequence_is_disjunction_of_members(
            coords in proptest::collection::vec((-2i64..6, -2i64..6, -2i64..6), 0..8),
        ) {
            let e = extent_332();
            let ps: Vec<Position> = coords.into_iter().map(Position::from).collect();
            let any = ps.iter().any(|q| is_out_of_bounds(q, &e));
            prop_assert_eq!(is_out_of_bounds(&ps, &e), any);
        }
    }
}
