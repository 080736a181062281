//! Error types for coordinate coercion and extent construction.

use crate::position::Axis;
use std::error::Error;
use std::fmt;

/// A coordinate could not be interpreted as an integer position.
///
/// Coercion never truncates: `2.0` is accepted as `2`, `2.5` is an error.
#[derive(Clone, Debug, PartialEq)]
pub enum CoordinateError {
    /// A component is fractional, non-finite, or outside the `i64` range.
    NonInteger {
        /// Axis of the offending component.
        axis: Axis,
        /// The rejected value.
        value: f64,
    },
    /// A textual component could not be parsed as a number.
    Unparsable {
        /// Axis of the offending component.
        axis: Axis,
        /// The component text as given.
        input: String,
    },
    /// The input did not have exactly three components.
    WrongArity {
        /// Number of components found.
        found: usize,
    },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonInteger { axis, value } => {
                write!(f, "{axis} component {value} is not an integer")
            }
            Self::Unparsable { axis, input } => {
                write!(f, "{axis} component '{input}' is not a number")
            }
            Self::WrongArity { found } => {
                write!(f, "expected 3 coordinate components, got {found}")
            }
        }
    }
}

impl Error for CoordinateError {}

/// An extent could not be constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtentError {
    /// An axis has size zero, so the extent admits no position.
    ZeroAxis {
        /// The empty axis.
        axis: Axis,
    },
    /// The absolute value of an axis does not fit in `i64`.
    TooLarge {
        /// The offending axis.
        axis: Axis,
        /// The value as given.
        value: i64,
    },
}

impl fmt::Display for ExtentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroAxis { axis } => write!(f, "extent {axis} axis must be non-zero"),
            Self::TooLarge { axis, value } => {
                write!(f, "extent {axis} axis {value} has no positive i64 magnitude")
            }
        }
    }
}

impl Error for ExtentError {}
