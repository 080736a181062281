//! Bounded sparse coordinate spaces for Cubit.
//!
//! This crate defines [`CoordinateSpace`], a sparse map from integer
//! positions inside a fixed cuboid to single-character elements, along with
//! the pure helpers it is built from.
//!
//! # Components
//!
//! - [`bounds`]: containment predicate for a position or a sequence of
//!   positions against an [`Extent`]
//! - [`catalog`]: optional allow-list of elements ([`ElementCatalog`])
//! - [`neighbourhood`]: the cube of positions surrounding a center
//! - [`space`]: the validated store itself
//!
//! # Validation
//!
//! Every candidate entry is checked in a fixed order: integer coordinates,
//! bounds, catalog membership, then (for [`CoordinateSpace::place`]) the
//! overwrite policy. Failures are reported as [`PlacementError`] values.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod catalog;
pub mod config;
pub mod error;
pub mod neighbourhood;
pub mod report;
pub mod space;

#[cfg(test)]
pub(crate) mod compliance;

pub use bounds::{is_out_of_bounds, Positions};
pub use catalog::{exists, ElementCatalog};
pub use config::{BatchPolicy, OverwritePolicy, SpaceConfig};
pub use error::{PlacementError, PlacementErrorKind, SpaceError};
pub use neighbourhood::{neighbours, DEFAULT_CUBE_SIDE};
pub use report::PlacementReport;
pub use space::CoordinateSpace;

pub use cubit_core::{Axis, Element, Extent, IntoPosition, Position};
