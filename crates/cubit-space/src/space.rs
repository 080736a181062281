//! The bounded sparse coordinate store.
//!
//! A [`CoordinateSpace`] maps positions inside its [`Extent`] to
//! [`Element`]s. Void cells are simply absent from the map, so memory grows
//! with the number of occupied cells, not with the volume of the extent.
//!
//! # Invariants
//!
//! - Every occupied position lies inside the extent.
//! - If a catalog is present, every stored element is listed in it.
//!
//! Both hold after construction and after every [`place`](CoordinateSpace::place)
//! call, whichever batch policy was used.

use crate::bounds::Positions;
use crate::catalog::{exists, ElementCatalog};
use crate::config::{BatchPolicy, OverwritePolicy, SpaceConfig};
use crate::error::{PlacementError, SpaceError};
use crate::neighbourhood::neighbours;
use crate::report::PlacementReport;
use cubit_core::{Element, Extent, IntoPosition, Position};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// A sparse map from in-bounds positions to elements.
///
/// `place` is the only mutator. Occupied entries are exposed read-only
/// through [`iter`](Self::iter) and the query methods.
#[derive(Clone, Debug)]
pub struct CoordinateSpace {
    extent: Extent,
    catalog: Option<ElementCatalog>,
    overwrite: OverwritePolicy,
    batch: BatchPolicy,
    /// Insertion-ordered so iteration is deterministic.
    occupied: IndexMap<Position, Element>,
}

impl CoordinateSpace {
    /// Build a space from an initial occupancy.
    ///
    /// Each initial entry is checked for integer coordinates, bounds and
    /// catalog membership. The first failing entry aborts construction with
    /// [`SpaceError::InvalidSeed`]. Repeated positions in `initial` keep the
    /// last element. Placement batches default to
    /// [`BatchPolicy::IgnoreInvalid`].
    pub fn new<I, P, E>(
        initial: I,
        catalog: Option<ElementCatalog>,
        extent: Extent,
        overwrite_allowed: bool,
    ) -> Result<Self, SpaceError>
    where
        I: IntoIterator<Item = (P, E)>,
        P: IntoPosition,
        E: Into<Element>,
    {
        let config = SpaceConfig {
            extent,
            catalog,
            overwrite: overwrite_allowed.into(),
            batch: BatchPolicy::default(),
        };
        Self::from_config(config, initial)
    }

    /// Build a space from a [`SpaceConfig`] and an initial occupancy.
    ///
    /// Every initial entry is validated as in [`new`](Self::new).
    pub fn from_config<I, P, E>(config: SpaceConfig, initial: I) -> Result<Self, SpaceError>
    where
        I: IntoIterator<Item = (P, E)>,
        P: IntoPosition,
        E: Into<Element>,
    {
        let SpaceConfig {
            extent,
            catalog,
            overwrite,
            batch,
        } = config;

        let mut occupied = IndexMap::new();
        for (raw, element) in initial {
            let (position, element) =
                check_entry(raw, element.into(), &extent, catalog.as_ref())?;
            occupied.insert(position, element);
        }
        trace!(%extent, seeded = occupied.len(), "coordinate space constructed");

        Ok(Self {
            extent,
            catalog,
            overwrite,
            batch,
            occupied,
        })
    }

    /// An unrestricted, unoccupied space.
    pub fn empty(extent: Extent) -> Self {
        Self {
            extent,
            catalog: None,
            overwrite: OverwritePolicy::default(),
            batch: BatchPolicy::default(),
            occupied: IndexMap::new(),
        }
    }

    /// An unrestricted, unoccupied space of `x × y × z` cells.
    ///
    /// Sizes are taken by absolute value; a zero size is an error.
    pub fn with_size(x: i64, y: i64, z: i64) -> Result<Self, SpaceError> {
        Ok(Self::empty(Extent::new(x, y, z)?))
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// The inclusive upper bound of valid positions.
    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// The element allow-list, if any.
    pub fn catalog(&self) -> Option<&ElementCatalog> {
        self.catalog.as_ref()
    }

    /// Whether placement may replace an occupant.
    pub fn overwrite_allowed(&self) -> bool {
        self.overwrite.is_allowed()
    }

    /// Batch policy used by [`place`](Self::place).
    pub fn batch_policy(&self) -> BatchPolicy {
        self.batch
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    /// Whether no cell is occupied.
    pub fn is_void(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Occupied `(position, element)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Element)> + '_ {
        self.occupied.iter().map(|(p, e)| (*p, *e))
    }

    // ── Queries ────────────────────────────────────────────────────

    /// Whether the queried cell holds no element.
    ///
    /// For a sequence only the **first** position is inspected and the rest
    /// are ignored; an empty sequence reports `true`. Use
    /// [`all_empty`](Self::all_empty) or [`any_occupied`](Self::any_occupied)
    /// to aggregate over a sequence.
    pub fn is_empty<Q: Positions + ?Sized>(&self, query: &Q) -> bool {
        query
            .as_positions()
            .first()
            .is_none_or(|p| !self.occupied.contains_key(p))
    }

    /// Whether every queried position is void.
    pub fn all_empty<Q: Positions + ?Sized>(&self, query: &Q) -> bool {
        !self.any_occupied(query)
    }

    /// Whether at least one queried position is occupied.
    pub fn any_occupied<Q: Positions + ?Sized>(&self, query: &Q) -> bool {
        query
            .as_positions()
            .iter()
            .any(|p| self.occupied.contains_key(p))
    }

    /// The element at `position`, if occupied.
    pub fn get(&self, position: &Position) -> Option<Element> {
        self.occupied.get(position).copied()
    }

    /// Look up several positions at once.
    ///
    /// Positions outside the extent are dropped from the result; the rest
    /// keep their input order and report `None` when void.
    pub fn get_many<Q: Positions + ?Sized>(
        &self,
        query: &Q,
    ) -> Vec<(Position, Option<Element>)> {
        query
            .as_positions()
            .iter()
            .filter(|p| self.extent.contains(p))
            .map(|p| (*p, self.get(p)))
            .collect()
    }

    /// Whether any cell holds `element`.
    pub fn contains_element(&self, element: Element) -> bool {
        self.occupied.values().any(|e| *e == element)
    }

    /// The neighbour cube around `center`, clipped to this space's extent.
    ///
    /// Runs [`neighbours`] (including its synthetic frame filter) and then
    /// drops positions outside [`extent`](Self::extent). Returns `None` for
    /// an even or non-positive `cube_side`.
    pub fn neighbours_of(&self, center: Position, cube_side: i64) -> Option<Vec<Position>> {
        let set = neighbours(center, cube_side)?;
        Some(
            set.into_iter()
                .filter(|p| self.extent.contains(p))
                .collect(),
        )
    }

    // ── Mutation ───────────────────────────────────────────────────

    /// Apply a batch of placements under the space's configured
    /// [`BatchPolicy`].
    ///
    /// See [`place_with_report`](Self::place_with_report) for the checks
    /// performed on each entry.
    pub fn place<I, P, E>(&mut self, changes: I) -> Result<(), PlacementError>
    where
        I: IntoIterator<Item = (P, E)>,
        P: IntoPosition,
        E: Into<Element>,
    {
        self.place_with_report(changes, self.batch).map(|_| ())
    }

    /// Apply a batch of placements, skipping invalid entries when
    /// `ignore_invalid` is true and stopping at the first one otherwise.
    pub fn place_with<I, P, E>(
        &mut self,
        changes: I,
        ignore_invalid: bool,
    ) -> Result<(), PlacementError>
    where
        I: IntoIterator<Item = (P, E)>,
        P: IntoPosition,
        E: Into<Element>,
    {
        self.place_with_report(changes, BatchPolicy::from_ignore_invalid(ignore_invalid))
            .map(|_| ())
    }

    /// Apply a batch of placements and report what happened.
    ///
    /// Entries are processed in iteration order. Each is checked for, in
    /// order: integer coordinates, bounds, catalog membership, and (when
    /// the target is occupied and overwriting is denied) an overwrite
    /// conflict. A valid entry is written immediately.
    ///
    /// Under [`BatchPolicy::IgnoreInvalid`] an invalid entry is recorded in
    /// the report and skipped. Under [`BatchPolicy::AbortOnFirstError`] its
    /// error is returned at once; entries already written stay written.
    pub fn place_with_report<I, P, E>(
        &mut self,
        changes: I,
        policy: BatchPolicy,
    ) -> Result<PlacementReport, PlacementError>
    where
        I: IntoIterator<Item = (P, E)>,
        P: IntoPosition,
        E: Into<Element>,
    {
        let mut report = PlacementReport::default();
        for (raw, element) in changes {
            match self.try_place_one(raw, element.into()) {
                Ok(()) => report.applied += 1,
                Err(err) if policy.ignores_invalid() => {
                    debug!(
                        position = ?err.position(),
                        element = %err.element(),
                        error = %err,
                        "placement skipped"
                    );
                    report.skipped.push(err);
                }
                Err(err) => return Err(err),
            }
        }
        trace!(
            applied = report.applied,
            skipped = report.skipped.len(),
            "placement batch finished"
        );
        Ok(report)
    }

    fn try_place_one<P: IntoPosition>(
        &mut self,
        raw: P,
        element: Element,
    ) -> Result<(), PlacementError> {
        let (position, element) = check_entry(raw, element, &self.extent, self.catalog.as_ref())?;
        if !self.overwrite.is_allowed() {
            if let Some(&existing) = self.occupied.get(&position) {
                return Err(PlacementError::OverwriteConflict {
                    position,
                    existing,
                    element,
                });
            }
        }
        self.occupied.insert(position, element);
        Ok(())
    }
}

/// Integer, bounds and catalog checks shared by construction and placement.
fn check_entry<P: IntoPosition>(
    raw: P,
    element: Element,
    extent: &Extent,
    catalog: Option<&ElementCatalog>,
) -> Result<(Position, Element), PlacementError> {
    let position = raw
        .into_position()
        .map_err(|source| PlacementError::NonIntegerCoordinate { element, source })?;
    if let Some(axis) = extent.violating_axis(&position) {
        return Err(PlacementError::OutOfBounds {
            position,
            element,
            axis,
            extent: *extent,
        });
    }
    if !exists(element, catalog) {
        return Err(PlacementError::UnknownElement { position, element });
    }
    Ok((position, element))
}
