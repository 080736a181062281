//! Core types for Cubit coordinate spaces.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types every other crate in the workspace speaks: positions,
//! extents, elements, and the coercion from loosely-typed coordinates to
//! integer positions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod element;
pub mod error;
pub mod extent;
pub mod position;

pub use coord::IntoPosition;
pub use element::Element;
pub use error::{CoordinateError, ExtentError};
pub use extent::Extent;
pub use position::{Axis, Position};
