//! The road network: arenas of locations and roads plus the identifier
//! registry.
//!
//! # Ownership
//!
//! `RoadNetwork` owns every [`Location`] and [`Road`].  The location↔road
//! associations are stored as handles on both sides (`Road` holds its two
//! `LocationId`s, `Location` holds a set of `RoadId`s), so ownership stays
//! acyclic and the network is the only place either side can be mutated.
//! Every mutating method keeps both sides in sync before it returns.
//!
//! # Lifecycle
//!
//! Entities are never removed from the arenas.  Termination detaches a road
//! from its end points (or cascades from a location to all its roads) and
//! leaves the slot in place, so a stale handle resolves to a terminated
//! entity rather than to an unrelated one.
//!
//! # Concurrency
//!
//! All mutation goes through `&mut RoadNetwork`.  A host that shares a
//! network between threads wraps the whole network in one lock; a
//! termination cascade or a route re-validation is then a single critical
//! section.

use rn_core::{
    Coordinate, Direction, LocationId, NetworkError, NetworkResult, NetworkRules, RoadId,
};

use crate::location::Location;
use crate::registry::RoadRegistry;
use crate::road::{AlternatingState, Road, RoadKind};

// ── RoadSpec ──────────────────────────────────────────────────────────────────

/// Parameters for [`RoadNetwork::add_road`].
///
/// # Example
///
/// ```
/// use rn_core::Coordinate;
/// use rn_network::{RoadNetwork, RoadSpec};
///
/// let mut net = RoadNetwork::default();
/// let a = net.add_location(Coordinate::new(0.0, 0.0), "Alpha").unwrap();
/// let b = net.add_location(Coordinate::new(3.0, 4.0), "Bravo").unwrap();
/// let r1 = net.add_road(RoadSpec::two_way("R1", a, b, 5, 10.0)).unwrap();
/// assert!(net.has_as_adjoining_road(a, r1).unwrap());
/// assert!(net.has_as_adjoining_road(b, r1).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct RoadSpec {
    pub identifier:    String,
    pub kind:          RoadKind,
    pub end_points:    [LocationId; 2],
    /// Replaced by the straight-line minimum when shorter than it.
    pub length:        u32,
    /// `None` uses [`NetworkRules::default_speed_limit`].
    pub speed_limit:   Option<f32>,
    pub average_speed: f32,
}

impl RoadSpec {
    pub fn new(
        kind: RoadKind,
        identifier: impl Into<String>,
        end_point_1: LocationId,
        end_point_2: LocationId,
        length: u32,
        average_speed: f32,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
            end_points: [end_point_1, end_point_2],
            length,
            speed_limit: None,
            average_speed,
        }
    }

    pub fn two_way(
        identifier: impl Into<String>,
        end_point_1: LocationId,
        end_point_2: LocationId,
        length: u32,
        average_speed: f32,
    ) -> Self {
        Self::new(RoadKind::TwoWay, identifier, end_point_1, end_point_2, length, average_speed)
    }

    /// Traversable from `start` to `end` only.
    pub fn one_way(
        identifier: impl Into<String>,
        start: LocationId,
        end: LocationId,
        length: u32,
        average_speed: f32,
    ) -> Self {
        Self::new(RoadKind::OneWay, identifier, start, end, length, average_speed)
    }

    /// Initially traversable from `start` to `end`.
    pub fn alternating(
        identifier: impl Into<String>,
        start: LocationId,
        end: LocationId,
        length: u32,
        average_speed: f32,
    ) -> Self {
        Self::new(RoadKind::ALTERNATING, identifier, start, end, length, average_speed)
    }

    pub fn with_speed_limit(mut self, speed_limit: f32) -> Self {
        self.speed_limit = Some(speed_limit);
        self
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct RoadNetwork {
    rules:     NetworkRules,
    locations: Vec<Location>,
    roads:     Vec<Road>,
    registry:  RoadRegistry,
}

impl RoadNetwork {
    /// An empty network governed by `rules`.
    pub fn new(rules: NetworkRules) -> NetworkResult<Self> {
        rules.validate()?;
        Ok(Self { rules, ..Self::default() })
    }

    pub fn rules(&self) -> &NetworkRules {
        &self.rules
    }

    pub fn registry(&self) -> &RoadRegistry {
        &self.registry
    }

    /// Number of location slots, terminated ones included.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of road slots, terminated ones included.
    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations.iter()
    }

    pub fn roads(&self) -> impl Iterator<Item = &Road> + '_ {
        self.roads.iter()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn location(&self, id: LocationId) -> NetworkResult<&Location> {
        self.locations.get(id.index()).ok_or(NetworkError::LocationNotFound(id))
    }

    pub fn road(&self, id: RoadId) -> NetworkResult<&Road> {
        self.roads.get(id.index()).ok_or(NetworkError::RoadNotFound(id))
    }

    /// The live road currently carrying `identifier`.
    pub fn road_by_identifier(&self, identifier: &str) -> Option<RoadId> {
        self.registry.get(identifier)
    }

    /// Resolve `id` and fail if the location is terminated.
    pub fn live_location(&self, id: LocationId) -> NetworkResult<&Location> {
        let location = self.location(id)?;
        if location.is_terminated() {
            return Err(NetworkError::LocationTerminated(id));
        }
        Ok(location)
    }

    /// Resolve `id` and fail if the road is terminated.
    pub fn live_road(&self, id: RoadId) -> NetworkResult<&Road> {
        let road = self.road(id)?;
        if road.is_terminated() {
            return Err(NetworkError::RoadTerminated(id));
        }
        Ok(road)
    }

    fn road_mut(&mut self, id: RoadId) -> NetworkResult<&mut Road> {
        self.roads.get_mut(id.index()).ok_or(NetworkError::RoadNotFound(id))
    }

    // ── Locations ─────────────────────────────────────────────────────────

    /// Create a location with no adjoining roads.
    pub fn add_location(
        &mut self,
        coordinate: Coordinate,
        address: impl Into<String>,
    ) -> NetworkResult<LocationId> {
        let address = address.into();
        if !self.rules.is_valid_coordinate(coordinate) {
            return Err(NetworkError::InvalidCoordinate(coordinate));
        }
        if !self.rules.is_valid_address(&address) {
            return Err(NetworkError::InvalidAddress(address));
        }
        let id = LocationId(self.locations.len() as u32);
        log::debug!("created location {id} at {coordinate} ({address})");
        self.locations.push(Location::new(id, coordinate, address));
        Ok(id)
    }

    pub fn set_location_address(
        &mut self,
        id: LocationId,
        address: impl Into<String>,
    ) -> NetworkResult<()> {
        let address = address.into();
        self.live_location(id)?;
        if !self.rules.is_valid_address(&address) {
            return Err(NetworkError::InvalidAddress(address));
        }
        self.locations[id.index()].set_address(address);
        Ok(())
    }

    /// Snapshot of the roads incident to `location`.
    pub fn adjoining_roads(&self, location: LocationId) -> NetworkResult<Vec<RoadId>> {
        Ok(self.location(location)?.adjoining_roads())
    }

    pub fn has_as_adjoining_road(&self, location: LocationId, road: RoadId) -> NetworkResult<bool> {
        Ok(self.location(location)?.has_as_adjoining_road(road))
    }

    /// `true` if every incident road of `location` is live and ends there.
    pub fn has_proper_adjoining_roads(&self, location: LocationId) -> NetworkResult<bool> {
        let location = self.location(location)?;
        for road in location.adjoining_roads() {
            if location.can_have_as_adjoining_road(self.road(road)?).is_err() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Terminate `location` and, first, every road incident to it.
    ///
    /// Idempotent.  The incident set is snapshotted before the cascade
    /// because each road termination removes the road from it.
    pub fn terminate_location(&mut self, id: LocationId) -> NetworkResult<()> {
        if self.location(id)?.is_terminated() {
            return Ok(());
        }
        let incident = self.locations[id.index()].adjoining_roads();
        log::debug!("terminating location {id} and {} incident roads", incident.len());
        for road in incident {
            self.terminate_road(road)?;
        }
        self.locations[id.index()].mark_terminated();
        Ok(())
    }

    // ── Roads ─────────────────────────────────────────────────────────────

    /// Smallest legal length of a road between `a` and `b`: the straight-line
    /// distance rounded down, and never below 1.
    pub fn minimum_length(&self, a: LocationId, b: LocationId) -> NetworkResult<u32> {
        let from = self.location(a)?.coordinate();
        let to = self.location(b)?.coordinate();
        Ok((from.distance(to).floor() as u32).max(1))
    }

    /// Validate `spec`, create the road, and register it with both end
    /// points.  Nothing is changed when validation fails.
    pub fn add_road(&mut self, spec: RoadSpec) -> NetworkResult<RoadId> {
        let RoadSpec { identifier, kind, end_points, length, speed_limit, average_speed } = spec;

        if !self.rules.is_valid_identifier(&identifier) {
            return Err(NetworkError::InvalidIdentifier(identifier));
        }
        if !self.registry.is_unique(&identifier) {
            return Err(NetworkError::DuplicateIdentifier(identifier));
        }

        let [a, b] = end_points;
        if a == b {
            return Err(NetworkError::DegenerateRoad(a));
        }
        for end in end_points {
            let coordinate = self.live_location(end)?.coordinate();
            if !self.rules.is_valid_end_point(coordinate) {
                return Err(NetworkError::InvalidCoordinate(coordinate));
            }
        }

        let speed_limit = speed_limit.unwrap_or(self.rules.default_speed_limit);
        if !self.rules.are_valid_speeds(speed_limit, average_speed) {
            return Err(NetworkError::InvalidSpeed { speed_limit, average_speed });
        }

        let length = self.checked_length(&identifier, a, b, length)?;

        let id = RoadId(self.roads.len() as u32);
        let road = Road::new(id, identifier, kind, end_points, length, speed_limit, average_speed);
        self.locations[a.index()].can_have_as_adjoining_road(&road)?;
        self.locations[b.index()].can_have_as_adjoining_road(&road)?;

        self.registry.register(road.identifier(), id)?;
        self.locations[a.index()].add_adjoining_road(&road)?;
        self.locations[b.index()].add_adjoining_road(&road)?;
        log::debug!("created {kind} road {} ({id}) between {a} and {b}", road.identifier());
        self.roads.push(road);
        Ok(id)
    }

    fn checked_length(
        &self,
        identifier: &str,
        a: LocationId,
        b: LocationId,
        length: u32,
    ) -> NetworkResult<u32> {
        let minimum = self.minimum_length(a, b)?;
        if length < minimum {
            log::warn!(
                "road {identifier}: length {length} is shorter than the straight-line distance, using {minimum}"
            );
            return Ok(minimum);
        }
        Ok(length)
    }

    /// Give `road` a new identifier.  The old one is released only if the
    /// new one is valid and free.
    pub fn rename_road(&mut self, id: RoadId, identifier: impl Into<String>) -> NetworkResult<()> {
        let identifier = identifier.into();
        let old = self.live_road(id)?.identifier().to_owned();
        if !self.rules.is_valid_identifier(&identifier) {
            return Err(NetworkError::InvalidIdentifier(identifier));
        }
        self.registry.rename(&old, &identifier, id)?;
        log::debug!("renamed road {old} to {identifier}");
        self.roads[id.index()].set_identifier(identifier);
        Ok(())
    }

    /// Change the length; values below the straight-line minimum fall back
    /// to the minimum.
    pub fn set_road_length(&mut self, id: RoadId, length: u32) -> NetworkResult<()> {
        let road = self.live_road(id)?;
        let [a, b] = road.end_points()?;
        let length = self.checked_length(road.identifier(), a, b, length)?;
        self.roads[id.index()].set_length(length);
        Ok(())
    }

    pub fn set_speed_limit(&mut self, id: RoadId, speed_limit: f32) -> NetworkResult<()> {
        let average_speed = self.live_road(id)?.average_speed();
        if !self.rules.are_valid_speeds(speed_limit, average_speed) {
            return Err(NetworkError::InvalidSpeed { speed_limit, average_speed });
        }
        self.roads[id.index()].set_speeds(speed_limit, average_speed);
        Ok(())
    }

    pub fn set_average_speed(&mut self, id: RoadId, average_speed: f32) -> NetworkResult<()> {
        let speed_limit = self.live_road(id)?.speed_limit();
        if !self.rules.are_valid_speeds(speed_limit, average_speed) {
            return Err(NetworkError::InvalidSpeed { speed_limit, average_speed });
        }
        self.roads[id.index()].set_speeds(speed_limit, average_speed);
        Ok(())
    }

    pub fn delay(&self, id: RoadId, direction: Direction) -> NetworkResult<f32> {
        self.road(id)?.delay(direction)
    }

    /// Fails with `IllegalDirection` when `direction` is not currently legal
    /// for the road, and with `InvalidDelay` for negative or NaN delays.
    pub fn set_delay(&mut self, id: RoadId, direction: Direction, delay: f32) -> NetworkResult<()> {
        self.road(id)?.check_direction(direction)?;
        if !self.rules.is_valid_delay(delay) {
            return Err(NetworkError::InvalidDelay(delay));
        }
        self.road_mut(id)?.set_delay(direction, delay)
    }

    pub fn is_blocked(&self, id: RoadId, direction: Direction) -> NetworkResult<bool> {
        self.road(id)?.is_blocked(direction)
    }

    pub fn set_blocked(&mut self, id: RoadId, direction: Direction, blocked: bool) -> NetworkResult<()> {
        self.road_mut(id)?.set_blocked(direction, blocked)
    }

    pub fn travel_time(&self, id: RoadId, direction: Direction) -> NetworkResult<f32> {
        self.road(id)?.travel_time(direction)
    }

    /// Flip the legal direction of an alternating road.
    pub fn reverse_traversal_direction(&mut self, id: RoadId) -> NetworkResult<AlternatingState> {
        let state = self.road_mut(id)?.reverse_traversal_direction()?;
        log::debug!("road {id} is now {state:?}");
        Ok(state)
    }

    /// Terminate `road`: detach it from both end points and release its
    /// identifier.  Idempotent.
    pub fn terminate_road(&mut self, id: RoadId) -> NetworkResult<()> {
        let road = self.road_mut(id)?;
        let Some(ends) = road.detach() else {
            return Ok(());
        };
        let road = &self.roads[id.index()];
        for end in ends {
            log::trace!("detaching road {id} from {end}");
            self.locations[end.index()].remove_adjoining_road(road)?;
        }
        self.registry.release(road.identifier());
        log::debug!("terminated road {} ({id})", road.identifier());
        Ok(())
    }
}
