//! Space configuration and placement policies.
//!
//! [`SpaceConfig`] is the builder input for
//! [`CoordinateSpace::from_config`](crate::CoordinateSpace::from_config).
//! Every combination of fields is valid: extents are checked when they are
//! built, and an empty catalog is an allow-list that admits nothing.

use crate::catalog::ElementCatalog;
use cubit_core::Extent;

// ── OverwritePolicy ────────────────────────────────────────────────

/// Whether placement may replace an existing occupant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverwritePolicy {
    /// Placing onto an occupied cell is an overwrite conflict.
    #[default]
    Deny,
    /// Placing onto an occupied cell replaces the stored element.
    Allow,
}

impl OverwritePolicy {
    /// `true` for [`OverwritePolicy::Allow`].
    pub fn is_allowed(self) -> bool {
        self == Self::Allow
    }
}

impl From<bool> for OverwritePolicy {
    fn from(allowed: bool) -> Self {
        if allowed {
            Self::Allow
        } else {
            Self::Deny
        }
    }
}

// ── BatchPolicy ────────────────────────────────────────────────────

/// How a placement batch reacts to an invalid entry.
///
/// Batches are never transactional: entries applied before a failure stay
/// applied under either policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BatchPolicy {
    /// Skip the invalid entry and continue with the rest of the batch.
    #[default]
    IgnoreInvalid,
    /// Stop at the first invalid entry and return its error.
    AbortOnFirstError,
}

impl BatchPolicy {
    /// Map the `ignore_invalid` flag of the call contract to a policy.
    pub fn from_ignore_invalid(ignore_invalid: bool) -> Self {
        if ignore_invalid {
            Self::IgnoreInvalid
        } else {
            Self::AbortOnFirstError
        }
    }

    /// `true` for [`BatchPolicy::IgnoreInvalid`].
    pub fn ignores_invalid(self) -> bool {
        self == Self::IgnoreInvalid
    }
}

// ── SpaceConfig ────────────────────────────────────────────────────

/// Configuration for a [`CoordinateSpace`](crate::CoordinateSpace).
#[derive(Clone, Debug, Default)]
pub struct SpaceConfig {
    /// Inclusive upper bound per axis. Default: 10×10×10.
    pub extent: Extent,
    /// Allow-list of elements. `None` permits every element.
    pub catalog: Option<ElementCatalog>,
    /// Overwrite policy for placement. Default: deny.
    pub overwrite: OverwritePolicy,
    /// Default batch policy used by `place`. Default: ignore invalid entries.
    pub batch: BatchPolicy,
}

impl SpaceConfig {
    /// Default configuration with the given extent.
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            ..Self::default()
        }
    }

    /// Set the element catalog.
    pub fn with_catalog(mut self, catalog: ElementCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the overwrite policy.
    pub fn with_overwrite(mut self, overwrite: impl Into<OverwritePolicy>) -> Self {
        self.overwrite = overwrite.into();
        self
    }

    /// Set the default batch policy.
    pub fn with_batch(mut self, batch: BatchPolicy) -> Self {
        self.batch = batch;
        self
    }
}
