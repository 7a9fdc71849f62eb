//! Anything that can be chained into a [`Route`]: a road or a nested route.
//!
//! Every query resolves road handles against the network it is given, so a
//! segment always reflects the current delay/blocked state and alternating
//! direction of its roads.

use rn_core::{LocationId, NetworkResult, RoadId};

use crate::network::RoadNetwork;
use crate::route::Route;

#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    Road(RoadId),
    Route(Route),
}

impl From<RoadId> for Segment {
    fn from(road: RoadId) -> Self {
        Segment::Road(road)
    }
}

impl From<Route> for Segment {
    fn from(route: Route) -> Self {
        Segment::Route(route)
    }
}

impl Segment {
    /// Locations this segment may be entered from.  A road contributes its
    /// legal start side(s); a route contributes its own start and end.
    pub fn start_locations(&self, network: &RoadNetwork) -> NetworkResult<Vec<LocationId>> {
        match self {
            Segment::Road(id) => network.live_road(*id)?.start_locations(),
            Segment::Route(route) => {
                route.ensure_live(network)?;
                Ok(route.start_locations())
            }
        }
    }

    /// Locations this segment may be left at.
    pub fn end_locations(&self, network: &RoadNetwork) -> NetworkResult<Vec<LocationId>> {
        match self {
            Segment::Road(id) => network.live_road(*id)?.end_locations(),
            Segment::Route(route) => {
                route.ensure_live(network)?;
                Ok(route.end_locations())
            }
        }
    }

    pub fn length(&self, network: &RoadNetwork) -> NetworkResult<u64> {
        match self {
            Segment::Road(id) => Ok(u64::from(network.live_road(*id)?.length())),
            Segment::Route(route) => route.length(network),
        }
    }

    /// The far side of this segment when entered at `location`.
    pub fn other_location(
        &self,
        network: &RoadNetwork,
        location: LocationId,
    ) -> NetworkResult<Option<LocationId>> {
        match self {
            Segment::Road(id) => Ok(network.live_road(*id)?.other_end(location)),
            Segment::Route(route) => Ok(route.other_location(location)),
        }
    }

    /// `true` if the segment can be travelled from `from` to `to` right now.
    pub fn is_open(
        &self,
        network: &RoadNetwork,
        from: LocationId,
        to: LocationId,
    ) -> NetworkResult<bool> {
        match self {
            Segment::Road(id) => {
                let road = network.live_road(*id)?;
                match road.direction_toward(to) {
                    Some(direction) if road.other_end(to) == Some(from) => Ok(road.is_open(direction)),
                    _ => Ok(false),
                }
            }
            Segment::Route(route) => route.is_open_between(network, from, to),
        }
    }

    /// Travel time from `from` to `to`; `+∞` if the segment is not open in
    /// that direction.
    pub fn travel_time(
        &self,
        network: &RoadNetwork,
        from: LocationId,
        to: LocationId,
    ) -> NetworkResult<f32> {
        if !self.is_open(network, from, to)? {
            return Ok(f32::INFINITY);
        }
        match self {
            Segment::Road(id) => {
                let road = network.live_road(*id)?;
                match road.direction_toward(to) {
                    Some(direction) => road.travel_time(direction),
                    None => Ok(f32::INFINITY),
                }
            }
            Segment::Route(route) => route.travel_time_between(network, from, to),
        }
    }

    /// `true` if `road` is this segment or appears anywhere inside it.
    pub fn contains_road(&self, road: RoadId) -> bool {
        match self {
            Segment::Road(id) => *id == road,
            Segment::Route(route) => route.contains_road(road),
        }
    }
}
