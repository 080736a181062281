//! Cubit: a bounded sparse 3D coordinate store.
//!
//! This is the top-level facade crate that re-exports the public API of the
//! Cubit sub-crates. For most users, adding `cubit` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cubit::prelude::*;
//!
//! let extent = Extent::new(3, 3, 3).unwrap();
//! let seed = vec![
//!     (Position::new(2, 1, 2), Element('c')),
//!     (Position::new(1, 1, 1), Element('a')),
//! ];
//! let mut space = CoordinateSpace::new(seed, None, extent, false).unwrap();
//! assert!(!space.is_empty(&Position::new(1, 1, 1)));
//! assert!(space.is_empty(&Position::new(2, 2, 2)));
//!
//! // Out-of-bounds entries are skipped by default...
//! space.place([(Position::new(25, 1, 3), 'C')]).unwrap();
//! assert_eq!(space.occupied_count(), 2);
//!
//! // ...or reported when asked to.
//! let err = space.place_with([(Position::new(25, 1, 3), 'C')], false).unwrap_err();
//! assert_eq!(err.kind(), PlacementErrorKind::OutOfBounds);
//!
//! // The neighbour cube is filtered by its own frame, not by the space.
//! let around = neighbours(Position::new(1, 1, 1), 3).unwrap();
//! assert_eq!(around.len(), 7);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cubit-core` | Positions, extents, elements, coordinate coercion |
//! | [`space`] | `cubit-space` | The coordinate store, bounds, catalog and neighbourhood helpers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Value types and coordinate coercion (`cubit-core`).
pub use cubit_core as types;

/// The coordinate store and its helpers (`cubit-space`).
pub use cubit_space as space;

/// Common imports for working with coordinate spaces.
pub mod prelude {
    pub use cubit_core::{Axis, CoordinateError, Element, Extent, IntoPosition, Position};
    pub use cubit_space::{
        exists, is_out_of_bounds, neighbours, BatchPolicy, CoordinateSpace, ElementCatalog,
        OverwritePolicy, PlacementError, PlacementErrorKind, PlacementReport, Positions,
        SpaceConfig, SpaceError,
    };
}
