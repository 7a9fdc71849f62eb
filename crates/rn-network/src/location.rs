//! Locations and their incident-road sets.
//!
//! A location knows which live roads touch it.  The set is a relation kept in
//! sync by [`RoadNetwork`](crate::RoadNetwork): a road is added when it is
//! created and removed when it is terminated, never otherwise.

use rustc_hash::FxHashSet;

use rn_core::{Coordinate, LocationId, NetworkError, NetworkResult, RoadId};

use crate::road::Road;

/// A point-like node of the network.
#[derive(Clone, Debug)]
pub struct Location {
    id:         LocationId,
    coordinate: Coordinate,
    address:    String,
    terminated: bool,
    roads:      FxHashSet<RoadId>,
}

impl Location {
    pub(crate) fn new(id: LocationId, coordinate: Coordinate, address: String) -> Self {
        Self {
            id,
            coordinate,
            address,
            terminated: false,
            roads: FxHashSet::default(),
        }
    }

    #[inline]
    pub fn id(&self) -> LocationId {
        self.id
    }

    /// Fixed at construction.
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    // ── Incident roads ────────────────────────────────────────────────────

    pub fn has_as_adjoining_road(&self, road: RoadId) -> bool {
        self.roads.contains(&road)
    }

    /// Snapshot of the incident roads, sorted by handle.  Later changes to
    /// the network do not affect the returned `Vec`.
    pub fn adjoining_roads(&self) -> Vec<RoadId> {
        let mut roads: Vec<RoadId> = self.roads.iter().copied().collect();
        roads.sort_unstable();
        roads
    }

    pub fn adjoining_road_count(&self) -> usize {
        self.roads.len()
    }

    /// Check the preconditions of [`add_adjoining_road`](Self::add_adjoining_road)
    /// without changing anything.
    pub fn can_have_as_adjoining_road(&self, road: &Road) -> NetworkResult<()> {
        if self.terminated {
            return Err(NetworkError::LocationTerminated(self.id));
        }
        if road.is_terminated() {
            return Err(NetworkError::RoadTerminated(road.id()));
        }
        if !road.has_end_point(self.id) {
            return Err(NetworkError::NotAnEndPoint { road: road.id(), location: self.id });
        }
        Ok(())
    }

    /// Register a live road that ends here.  Adding it twice is a no-op.
    pub(crate) fn add_adjoining_road(&mut self, road: &Road) -> NetworkResult<()> {
        self.can_have_as_adjoining_road(road)?;
        self.roads.insert(road.id());
        Ok(())
    }

    /// Forget a road that has already been terminated.  Forgetting a road
    /// that was never registered is a no-op.
    pub(crate) fn remove_adjoining_road(&mut self, road: &Road) -> NetworkResult<()> {
        if !road.is_terminated() {
            return Err(NetworkError::RoadNotTerminated(road.id()));
        }
        self.roads.remove(&road.id());
        Ok(())
    }

    // ── Mutation (validated by RoadNetwork) ───────────────────────────────

    pub(crate) fn set_address(&mut self, address: String) {
        self.address = address;
    }

    pub(crate) fn mark_terminated(&mut self) {
        debug_assert!(self.roads.is_empty(), "terminating {} with live roads", self.id);
        self.roads.clear();
        self.terminated = true;
    }
}
