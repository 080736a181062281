//! Error types for space construction and placement.

use cubit_core::{Axis, CoordinateError, Element, Extent, ExtentError, Position};
use std::error::Error;
use std::fmt;

/// Discriminant of a [`PlacementError`], for callers that only need the cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlacementErrorKind {
    /// See [`PlacementError::NonIntegerCoordinate`].
    NonIntegerCoordinate,
    /// See [`PlacementError::OutOfBounds`].
    OutOfBounds,
    /// See [`PlacementError::UnknownElement`].
    UnknownElement,
    /// See [`PlacementError::OverwriteConflict`].
    OverwriteConflict,
}

/// A single `(position, element)` entry failed validation.
///
/// Variants are listed in the order the checks run.
#[derive(Clone, Debug, PartialEq)]
pub enum PlacementError {
    /// The coordinates could not be coerced to integers.
    NonIntegerCoordinate {
        /// The element that was to be placed.
        element: Element,
        /// The coercion failure.
        source: CoordinateError,
    },
    /// The position lies outside `[1, extent]` on some axis.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// The element that was to be placed.
        element: Element,
        /// First axis that is out of range.
        axis: Axis,
        /// The extent it was checked against.
        extent: Extent,
    },
    /// A catalog is in effect and does not list the element.
    UnknownElement {
        /// Target position.
        position: Position,
        /// The rejected element.
        element: Element,
    },
    /// The position is occupied and overwriting is not allowed.
    OverwriteConflict {
        /// The occupied position.
        position: Position,
        /// The element already stored there.
        existing: Element,
        /// The element that was to be placed.
        element: Element,
    },
}

impl PlacementError {
    /// Which check failed.
    pub fn kind(&self) -> PlacementErrorKind {
        match self {
            Self::NonIntegerCoordinate { .. } => PlacementErrorKind::NonIntegerCoordinate,
            Self::OutOfBounds { .. } => PlacementErrorKind::OutOfBounds,
            Self::UnknownElement { .. } => PlacementErrorKind::UnknownElement,
            Self::OverwriteConflict { .. } => PlacementErrorKind::OverwriteConflict,
        }
    }

    /// The target position, if the coordinates were integers.
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::NonIntegerCoordinate { .. } => None,
            Self::OutOfBounds { position, .. }
            | Self::UnknownElement { position, .. }
            | Self::OverwriteConflict { position, .. } => Some(*position),
        }
    }

    /// The element the entry tried to place.
    pub fn element(&self) -> Element {
        match self {
            Self::NonIntegerCoordinate { element, .. }
            | Self::OutOfBounds { element, .. }
            | Self::UnknownElement { element, .. }
            | Self::OverwriteConflict { element, .. } => *element,
        }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonIntegerCoordinate { element, source } => {
                write!(f, "element '{element}' has non-integer coordinates: {source}")
            }
            Self::OutOfBounds {
                position,
                element,
                axis,
                extent,
            } => write!(
                f,
                "coordinates {position} of element '{element}' are out of bounds \
                 ({axis} outside extent {extent})"
            ),
            Self::UnknownElement { position, element } => {
                write!(f, "element '{element}' at {position} is not in the catalog")
            }
            Self::OverwriteConflict {
                position,
                existing,
                element,
            } => write!(
                f,
                "cannot place '{element}' at {position}: already occupied by '{existing}'"
            ),
        }
    }
}

impl Error for PlacementError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NonIntegerCoordinate { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors from building a [`CoordinateSpace`](crate::CoordinateSpace).
///
/// Construction is all-or-nothing: no partially seeded space is returned.
#[derive(Clone, Debug, PartialEq)]
pub enum SpaceError {
    /// The requested size is not a valid extent.
    InvalidExtent(ExtentError),
    /// An entry of the initial occupancy failed validation.
    InvalidSeed(PlacementError),
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent(e) => write!(f, "invalid extent: {e}"),
            Self::InvalidSeed(e) => write!(f, "invalid initial entry: {e}"),
        }
    }
}

impl Error for SpaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidExtent(e) => Some(e),
            Self::InvalidSeed(e) => Some(e),
        }
    }
}

impl From<ExtentError> for SpaceError {
    fn from(e: ExtentError) -> Self {
        Self::InvalidExtent(e)
    }
}

impl From<PlacementError> for SpaceError {
    fn from(e: PlacementError) -> Self {
        Self::InvalidSeed(e)
    }
}
