//! The [`Extent`] of a coordinate space.
//!
//! Every space occupies the positive octant only: valid positions satisfy
//! `1 <= p.axis <= extent.axis` on all three axes.

use crate::error::ExtentError;
use crate::position::{Axis, Position};
use std::fmt;

/// Inclusive per-axis upper bound of a coordinate space.
///
/// The lower bound is always 1. All three components are positive; this is
/// enforced by every constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent {
    max_x: i64,
    max_y: i64,
    max_z: i64,
}

impl Extent {
    /// Side length of [`Extent::default`] on every axis.
    pub const DEFAULT_SIDE: i64 = 10;

    /// Create an extent from signed sizes, taking the absolute value of each.
    ///
    /// Negative sizes are folded to their magnitude. Returns
    /// `Err(ExtentError::ZeroAxis)` if any size is zero and
    /// `Err(ExtentError::TooLarge)` for `i64::MIN`.
    pub fn new(x: i64, y: i64, z: i64) -> Result<Self, ExtentError> {
        let magnitude = |axis: Axis, value: i64| -> Result<i64, ExtentError> {
            let abs = value
                .checked_abs()
                .ok_or(ExtentError::TooLarge { axis, value })?;
            if abs == 0 {
                return Err(ExtentError::ZeroAxis { axis });
            }
            Ok(abs)
        };
        Ok(Self {
            max_x: magnitude(Axis::X, x)?,
            max_y: magnitude(Axis::Y, y)?,
            max_z: magnitude(Axis::Z, z)?,
        })
    }

    /// A cube with the same size on every axis.
    pub fn cube(side: i64) -> Result<Self, ExtentError> {
        Self::new(side, side, side)
    }

    /// A single-layer (`z = 1`) extent for two-dimensional grids.
    pub fn planar(x: i64, y: i64) -> Result<Self, ExtentError> {
        Self::new(x, y, 1)
    }

    /// Largest valid x.
    pub fn max_x(&self) -> i64 {
        self.max_x
    }

    /// Largest valid y.
    pub fn max_y(&self) -> i64 {
        self.max_y
    }

    /// Largest valid z.
    pub fn max_z(&self) -> i64 {
        self.max_z
    }

    /// Largest valid coordinate along `axis`.
    pub fn max(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.max_x,
            Axis::Y => self.max_y,
            Axis::Z => self.max_z,
        }
    }

    /// Number of addressable cells.
    pub fn volume(&self) -> u128 {
        self.max_x as u128 * self.max_y as u128 * self.max_z as u128
    }

    /// First axis on which `position` falls outside `[1, max]`, if any.
    pub fn violating_axis(&self, position: &Position) -> Option<Axis> {
        Axis::ALL.into_iter().find(|&axis| {
            let v = position.get(axis);
            v <= 0 || v > self.max(axis)
        })
    }

    /// Whether `position` lies inside this extent.
    pub fn contains(&self, position: &Position) -> bool {
        self.violating_axis(position).is_none()
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self {
            max_x: Self::DEFAULT_SIDE,
            max_y: Self::DEFAULT_SIDE,
            max_z: Self::DEFAULT_SIDE,
        }
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.max_x, self.max_y, self.max_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn negative_sizes_fold_to_magnitude() {
        let e = Extent::new(-3, 3, -2).unwrap();
        assert_eq!((e.max_x(), e.max_y(), e.max_z()), (3, 3, 2));
    }

    #[test]
    fn zero_axis_rejected() {
        assert_eq!(
            Extent::new(3, 0, 2),
            Err(ExtentError::ZeroAxis { axis: Axis::Y })
        );
        assert_eq!(
            Extent::planar(0, 4),
            Err(ExtentError::ZeroAxis { axis: Axis::X })
        );
    }

    #[test]
    fn min_value_rejected() {
        assert!(matches!(
            Extent::new(1, 1, i64::MIN),
            Err(ExtentError::TooLarge { axis: Axis::Z, .. })
        ));
    }

    #[test]
    fn default_and_helpers() {
        assert_eq!(Extent::default(), Extent::cube(10).unwrap());
        assert_eq!(Extent::default().volume(), 1000);
        let flat = Extent::planar(4, 5).unwrap();
        assert_eq!(flat.max_z(), 1);
        assert_eq!(flat.to_string(), "4x5x1");
    }

    #[test]
    fn contains_is_inclusive_from_one() {
        let e = Extent::new(3, 3, 2).unwrap();
        assert!(e.contains(&Position::new(1, 1, 1)));
        assert!(e.contains(&Position::new(3, 3, 2)));
        assert!(!e.contains(&Position::new(0, 1, 1)));
        assert!(!e.contains(&Position::new(1, 1, 3)));
        assert_eq!(e.violating_axis(&Position::new(4, -1, 9)), Some(Axis::X));
        assert_eq!(e.violating_axis(&Position::new(1, 1, 3)), Some(Axis::Z));
    }

    proptest! {
        #[test]
        fn contains_matches_axis_ranges(
            mx in 1i64..20, my in 1i64..20, mz in 1i64..20,
            x in -5i64..25, y in -5i64..25, z in -5i64..25,
        ) {
            let e = Extent::new(mx, my, mz).unwrap();
            let inside = (1..=mx).contains(&x) && (1..=my).contains(&y) && (1..=mz).contains(&z);
            prop_assert_eq!(e.contains(&Position::new(x, y, z)), inside);
        }
    }
}
