//! Invariant assertions shared by the test modules of this crate.

use crate::bounds::is_out_of_bounds;
use crate::catalog::exists;
use crate::neighbourhood::neighbours;
use crate::space::CoordinateSpace;
use cubit_core::{Extent, Position};
use indexmap::IndexSet;

/// Assert that every occupied position lies inside the space's extent.
pub fn assert_occupancy_within_extent(space: &CoordinateSpace) {
    for (position, element) in space.iter() {
        assert!(
            !is_out_of_bounds(&position, space.extent()),
            "occupied position {position} ('{element}') outside extent {}",
            space.extent()
        );
    }
}

/// Assert that every stored element passes the space's catalog.
pub fn assert_occupancy_in_catalog(space: &CoordinateSpace) {
    for (position, element) in space.iter() {
        assert!(
            exists(element, space.catalog()),
            "element '{element}' at {position} not in catalog"
        );
    }
}

/// Assert that `is_empty` agrees with the occupancy iterator.
pub fn assert_is_empty_consistent(space: &CoordinateSpace) {
    let occupied: IndexSet<Position> = space.iter().map(|(p, _)| p).collect();
    assert_eq!(occupied.len(), space.occupied_count());
    for p in &occupied {
        assert!(!space.is_empty(p), "{p} iterated but reported empty");
    }
}

/// Assert the set properties of a neighbour cube for an odd side.
///
/// The center is absent, every member is within `half` of the center on
/// every axis, and every member lies inside the synthetic side frame.
pub fn assert_neighbour_set_well_formed(center: Position, cube_side: i64) {
    let set = neighbours(center, cube_side).expect("odd positive side must yield a set");
    let half = (cube_side - 1) / 2;
    let frame = Extent::cube(cube_side).expect("positive side");
    assert!(!set.contains(&center), "center {center} in its own neighbourhood");
    for q in &set {
        assert!(
            (q.x - center.x).abs() <= half
                && (q.y - center.y).abs() <= half
                && (q.z - center.z).abs() <= half,
            "{q} farther than {half} from {center}"
        );
        assert!(frame.contains(q), "{q} outside the {cube_side} frame");
    }
    let upper = (cube_side * cube_side * cube_side - 1) as usize;
    assert!(set.len() <= upper, "{} neighbours exceeds {upper}", set.len());
}

/// Run every occupancy check on a space.
pub fn run_full_compliance(space: &CoordinateSpace) {
    assert_occupancy_within_extent(space);
    assert_occupancy_in_catalog(space);
    assert_is_empty_consistent(space);
}
