//! Routes: validated chains of segments.
//!
//! # Connectivity walk
//!
//! A route is checked by walking it from its start location:
//!
//! ```text
//! current = start
//! for each segment:
//!     current must be one of segment.start_locations()
//!     current = segment.other_location(current)
//! end = current
//! ```
//!
//! The walk runs at construction and after every mutation.  Mutations build
//! the candidate segment list, walk it, and only then replace the route's
//! state, so a rejected mutation leaves the route exactly as it was.
//!
//! The sequence of visited locations is stored alongside the segments; it
//! fixes which direction every segment is travelled in, which is what
//! [`Route::is_traversable`] checks against the roads' current state.
//!
//! Nested routes are owned by value, so a route can never contain itself.

use rn_core::{LocationId, NetworkError, NetworkResult, RoadId};

use crate::network::RoadNetwork;
use crate::segment::Segment;

#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    start:     LocationId,
    segments:  Vec<Segment>,
    /// `segments.len() + 1` entries, `locations[0] == start`.
    locations: Vec<LocationId>,
}

impl Route {
    /// Build a route from `start` through `segments`.
    ///
    /// # Example
    ///
    /// ```
    /// use rn_core::Coordinate;
    /// use rn_network::{RoadNetwork, RoadSpec, Route};
    ///
    /// let mut net = RoadNetwork::default();
    /// let a = net.add_location(Coordinate::new(0.0, 0.0), "Alpha").unwrap();
    /// let b = net.add_location(Coordinate::new(3.0, 4.0), "Bravo").unwrap();
    /// let r1 = net.add_road(RoadSpec::two_way("R1", a, b, 5, 10.0)).unwrap();
    ///
    /// let route = Route::new(&net, a, [r1.into()]).unwrap();
    /// assert_eq!(route.all_locations(), &[a, b]);
    /// assert_eq!(route.length(&net).unwrap(), 5);
    /// ```
    pub fn new(
        network: &RoadNetwork,
        start: LocationId,
        segments: impl IntoIterator<Item = Segment>,
    ) -> NetworkResult<Self> {
        let segments: Vec<Segment> = segments.into_iter().collect();
        let locations = walk(network, start, &segments)?;
        Ok(Self { start, segments, locations })
    }

    #[inline]
    pub fn start_location(&self) -> LocationId {
        self.start
    }

    /// Where the walk ends; equal to the start for an empty route.
    pub fn end_location(&self) -> LocationId {
        self.locations.last().copied().unwrap_or(self.start)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Every location visited, from start to end.
    pub fn all_locations(&self) -> &[LocationId] {
        &self.locations
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Append `segment` and re-validate.  On failure the route is unchanged.
    pub fn add_segment(
        &mut self,
        network: &RoadNetwork,
        segment: impl Into<Segment>,
    ) -> NetworkResult<()> {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        let locations = walk(network, self.start, &segments)?;
        log::debug!("route from {} extended to {} segments", self.start, segments.len());
        self.segments = segments;
        self.locations = locations;
        Ok(())
    }

    /// Remove the segment at `index` and re-validate.  On failure the route
    /// is unchanged.
    pub fn remove_segment(&mut self, network: &RoadNetwork, index: usize) -> NetworkResult<Segment> {
        if index >= self.segments.len() {
            return Err(NetworkError::SegmentIndex { index, len: self.segments.len() });
        }
        let mut segments = self.segments.clone();
        let removed = segments.remove(index);
        let locations = walk(network, self.start, &segments)?;
        log::debug!("route from {} lost segment {index}", self.start);
        self.segments = segments;
        self.locations = locations;
        Ok(removed)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Sum of segment lengths, recursing into nested routes.
    pub fn length(&self, network: &RoadNetwork) -> NetworkResult<u64> {
        self.segments.iter().map(|s| s.length(network)).sum()
    }

    /// `true` if every segment is open in the direction this route travels
    /// it.  An empty route is traversable.
    pub fn is_traversable(&self, network: &RoadNetwork) -> NetworkResult<bool> {
        for (segment, step) in self.segments.iter().zip(self.locations.windows(2)) {
            if !segment.is_open(network, step[0], step[1])? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Total travel time from start to end, `+∞` if not traversable.
    pub fn travel_time(&self, network: &RoadNetwork) -> NetworkResult<f32> {
        self.segments
            .iter()
            .zip(self.locations.windows(2))
            .map(|(segment, step)| segment.travel_time(network, step[0], step[1]))
            .sum()
    }

    pub fn contains_road(&self, road: RoadId) -> bool {
        self.segments.iter().any(|s| s.contains_road(road))
    }

    // ── As a segment ──────────────────────────────────────────────────────

    /// A route can be entered at either end.
    pub fn start_locations(&self) -> Vec<LocationId> {
        let (start, end) = (self.start, self.end_location());
        if start == end { vec![start] } else { vec![start, end] }
    }

    pub fn end_locations(&self) -> Vec<LocationId> {
        self.start_locations()
    }

    pub fn other_location(&self, location: LocationId) -> Option<LocationId> {
        let (start, end) = (self.start, self.end_location());
        if location == start {
            Some(end)
        } else if location == end {
            Some(start)
        } else {
            None
        }
    }

    /// Fail if the start location or any contained road is terminated.
    pub fn ensure_live(&self, network: &RoadNetwork) -> NetworkResult<()> {
        network.live_location(self.start)?;
        for segment in &self.segments {
            match segment {
                Segment::Road(id) => {
                    network.live_road(*id)?;
                }
                Segment::Route(route) => route.ensure_live(network)?,
            }
        }
        Ok(())
    }

    pub(crate) fn is_open_between(
        &self,
        network: &RoadNetwork,
        from: LocationId,
        to: LocationId,
    ) -> NetworkResult<bool> {
        let (start, end) = (self.start, self.end_location());
        if (from, to) == (start, end) {
            return self.is_traversable(network);
        }
        if (from, to) != (end, start) {
            return Ok(false);
        }
        for (segment, step) in self.segments.iter().zip(self.locations.windows(2)).rev() {
            if !segment.is_open(network, step[1], step[0])? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub(crate) fn travel_time_between(
        &self,
        network: &RoadNetwork,
        from: LocationId,
        to: LocationId,
    ) -> NetworkResult<f32> {
        let (start, end) = (self.start, self.end_location());
        if (from, to) == (start, end) {
            return self.travel_time(network);
        }
        if (from, to) != (end, start) {
            return Ok(f32::INFINITY);
        }
        self.segments
            .iter()
            .zip(self.locations.windows(2))
            .map(|(segment, step)| segment.travel_time(network, step[1], step[0]))
            .sum()
    }
}

// ── Connectivity walk ─────────────────────────────────────────────────────────

/// Walk `segments` from `start`, returning every location visited.
fn walk(
    network: &RoadNetwork,
    start: LocationId,
    segments: &[Segment],
) -> NetworkResult<Vec<LocationId>> {
    network.live_location(start)?;

    let mut locations = Vec::with_capacity(segments.len() + 1);
    locations.push(start);

    let mut current = start;
    for (index, segment) in segments.iter().enumerate() {
        if !segment.start_locations(network)?.contains(&current) {
            return Err(NetworkError::DisconnectedSegment { index, at: current });
        }
        current = segment
            .other_location(network, current)?
            .ok_or(NetworkError::DisconnectedSegment { index, at: current })?;
        locations.push(current);
    }
    Ok(locations)
}
