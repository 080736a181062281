//! Benchmark profiles for Cubit coordinate spaces.
//!
//! - [`checkerboard_space`]: a densely seeded cube for query benchmarks
//! - [`scattered_batch`]: a deterministic placement batch with a fraction
//!   of out-of-bounds entries

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cubit_core::{Element, Extent, Position};
use cubit_space::CoordinateSpace;

/// A `side³` space with every cell where `x + y + z` is even occupied.
pub fn checkerboard_space(side: i64) -> CoordinateSpace {
    let extent = Extent::cube(side).expect("benchmark side must be non-zero");
    let mut seed = Vec::new();
    for z in 1..=side {
        for y in 1..=side {
            for x in 1..=side {
                if (x + y + z) % 2 == 0 {
                    seed.push((Position::new(x, y, z), Element('a')));
                }
            }
        }
    }
    CoordinateSpace::new(seed, None, extent, true).expect("checkerboard fits its cube")
}

/// `len` deterministic placements spread over `[0, side + 1]³`.
///
/// Coordinates on the `0` and `side + 1` planes are out of bounds, so the
/// batch exercises both the apply and the skip path.
pub fn scattered_batch(len: usize, side: i64) -> Vec<(Position, Element)> {
    let span = (side + 2) as u64;
    (0..len as u64)
        .map(|i| {
            let x = (i.wrapping_mul(6364136223846793007) >> 33) % span;
            let y = (i.wrapping_mul(1442695040888963407) >> 33) % span;
            let z = (i.wrapping_mul(2862933555777941757) >> 33) % span;
            (
                Position::new(x as i64, y as i64, z as i64),
                Element('b'),
            )
        })
        .collect()
}
