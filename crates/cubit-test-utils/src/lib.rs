//! Test utilities for Cubit development.
//!
//! Fixtures live in [`fixtures`] and are re-exported at the crate root.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    extent, open_cube, pos, reference_catalog, reference_seed, reference_space,
};
