//! Enumeration of the cube of positions surrounding a center.
//!
//! ```text
//!      ___ ___ ___
//!    /___/___/___/|     side = 3: the center plus 26 neighbours,
//!   /___/___/___/||     before filtering
//!  /___/___/__ /|/|
//! |   |   |   | /||
//! |___|___|___|/|/|
//! |   |   |   | /||
//! |___|___|___|/|/
//! |   |   |   | /
//! |___|___|___|/
//! ```
//!
//! # Frame filter
//!
//! Candidates are bounds-checked against a *synthetic* extent of
//! `side × side × side`, not against the extent of any space. A candidate
//! survives only if each of its absolute coordinates lies in `[1, side]`.
//! This drops negative coordinates around the origin, but it also drops
//! every candidate once the center moves far enough from the origin:
//!
//! - center `(2, 2, 2)`, side 3: 26 neighbours
//! - center `(1, 1, 1)`, side 3: 7 neighbours
//! - center `(9, 9, 9)`, side 3: none
//!
//! The result is therefore not clipped to a real grid. Callers that need
//! that must filter against their own extent, or use
//! [`CoordinateSpace::neighbours_of`](crate::CoordinateSpace::neighbours_of).

use cubit_core::{Extent, Position};
use indexmap::IndexSet;
use std::ops::RangeInclusive;

/// Cube side used when the caller has no preference.
pub const DEFAULT_CUBE_SIDE: i64 = 3;

/// Upper bound on the capacity reserved up front for the result set.
const MAX_PREALLOC: usize = 4096;

/// Positions in the cube of side `cube_side` centred on `center`, excluding
/// `center` and any candidate outside the synthetic `cube_side` frame.
///
/// Returns `None` when `cube_side` is even (there is no center cell) or not
/// positive. Positions are yielded z-major, then y, then x.
pub fn neighbours(center: Position, cube_side: i64) -> Option<IndexSet<Position>> {
    if cube_side <= 0 || cube_side % 2 == 0 {
        return None;
    }
    let frame = Extent::cube(cube_side).ok()?;
    let half = (cube_side - 1) / 2;

    let xs = frame_window(center.x, half, frame.max_x());
    let ys = frame_window(center.y, half, frame.max_y());
    let zs = frame_window(center.z, half, frame.max_z());

    let expected = [&xs, &ys, &zs]
        .iter()
        .map(|r| window_len(r))
        .fold(1usize, usize::saturating_mul);
    let mut result = IndexSet::with_capacity(expected.min(MAX_PREALLOC));

    for z in zs {
        for y in ys.clone() {
            for x in xs.clone() {
                let candidate = Position::new(x, y, z);
                if candidate != center {
                    result.insert(candidate);
                }
            }
        }
    }
    Some(result)
}

/// [`neighbours`] with [`DEFAULT_CUBE_SIDE`].
pub fn neighbours_default(center: Position) -> Option<IndexSet<Position>> {
    neighbours(center, DEFAULT_CUBE_SIDE)
}

/// Absolute coordinates within `half` of `c` that also lie in `[1, max]`.
///
/// Empty when the two intervals do not overlap.
fn frame_window(c: i64, half: i64, max: i64) -> RangeInclusive<i64> {
    let lo = c.saturating_sub(half).max(1);
    let hi = c.saturating_add(half).min(max);
    lo..=hi
}

fn window_len(r: &RangeInclusive<i64>) -> usize {
    if r.is_empty() {
        0
    } else {
        usize::try_from(r.end() - r.start() + 1).unwrap_or(usize::MAX)
    }
}
