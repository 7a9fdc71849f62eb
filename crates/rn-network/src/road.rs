//! Roads and their direction rules.
//!
//! A road joins exactly two locations and keeps delay and blocked state per
//! [`Direction`].  The variants differ only in which directions are legal:
//!
//! | Kind          | Legal directions                                    |
//! |---------------|-----------------------------------------------------|
//! | `TwoWay`      | both                                                |
//! | `OneWay`      | `EndPointTwo` (end point one → end point two)       |
//! | `Alternating` | `EndPointTwo` while `ForwardLegal`, `EndPointOne`    |
//! |               | while `ReverseLegal`                                |
//!
//! Reading or writing delay/blocked state in an illegal direction is a
//! [`NetworkError::IllegalDirection`], for every kind.
//!
//! Roads are created and mutated through [`RoadNetwork`](crate::RoadNetwork),
//! which owns the validation rules and the identifier registry.  This type
//! exposes read access and the raw setters the network calls after
//! validating.

use rn_core::{Direction, LocationId, NetworkError, NetworkResult, RoadId};

/// Which direction an alternating road currently allows.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum AlternatingState {
    /// End point one → end point two.
    #[default]
    ForwardLegal,
    /// End point two → end point one.
    ReverseLegal,
}

impl AlternatingState {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            AlternatingState::ForwardLegal => AlternatingState::ReverseLegal,
            AlternatingState::ReverseLegal => AlternatingState::ForwardLegal,
        }
    }
}

/// Road variant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoadKind {
    TwoWay,
    /// Traversable from end point one to end point two only.
    OneWay,
    Alternating(AlternatingState),
}

impl RoadKind {
    /// A new alternating road, traversable from end point one to end point two.
    pub const ALTERNATING: RoadKind = RoadKind::Alternating(AlternatingState::ForwardLegal);

    /// Directions in which this kind may currently be travelled.
    pub fn legal_directions(self) -> &'static [Direction] {
        const FORTH: &[Direction] = &[Direction::EndPointTwo];
        const BACK: &[Direction] = &[Direction::EndPointOne];
        match self {
            RoadKind::TwoWay => &Direction::BOTH,
            RoadKind::OneWay | RoadKind::Alternating(AlternatingState::ForwardLegal) => FORTH,
            RoadKind::Alternating(AlternatingState::ReverseLegal) => BACK,
        }
    }

    #[inline]
    pub fn allows(self, direction: Direction) -> bool {
        self.legal_directions().contains(&direction)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoadKind::TwoWay => "two-way",
            RoadKind::OneWay => "one-way",
            RoadKind::Alternating(_) => "alternating",
        }
    }
}

impl std::fmt::Display for RoadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Road ──────────────────────────────────────────────────────────────────────

/// A road between two distinct locations.
///
/// A terminated road has no end points; `end_points == None` is the
/// terminated state.
#[derive(Clone, Debug)]
pub struct Road {
    id:            RoadId,
    identifier:    String,
    kind:          RoadKind,
    end_points:    Option<[LocationId; 2]>,
    length:        u32,
    speed_limit:   f32,
    average_speed: f32,
    /// Indexed by `Direction::index()`.
    delay:         [f32; 2],
    blocked:       [bool; 2],
}

impl Road {
    /// Build a live road from already-validated fields.
    pub(crate) fn new(
        id: RoadId,
        identifier: String,
        kind: RoadKind,
        end_points: [LocationId; 2],
        length: u32,
        speed_limit: f32,
        average_speed: f32,
    ) -> Self {
        Self {
            id,
            identifier,
            kind,
            end_points: Some(end_points),
            length,
            speed_limit,
            average_speed,
            delay: [0.0; 2],
            blocked: [false; 2],
        }
    }

    // ── Identity ──────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> RoadId {
        self.id
    }

    /// Human-assigned identifier, unique among live roads of the network.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[inline]
    pub fn kind(&self) -> RoadKind {
        self.kind
    }

    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.end_points.is_none()
    }

    // ── End points ────────────────────────────────────────────────────────

    pub fn end_points(&self) -> NetworkResult<[LocationId; 2]> {
        self.end_points.ok_or(NetworkError::RoadTerminated(self.id))
    }

    pub fn end_point_1(&self) -> NetworkResult<LocationId> {
        self.end_points().map(|[a, _]| a)
    }

    pub fn end_point_2(&self) -> NetworkResult<LocationId> {
        self.end_points().map(|[_, b]| b)
    }

    pub fn has_end_point(&self, location: LocationId) -> bool {
        self.end_points.is_some_and(|ends| ends.contains(&location))
    }

    /// The end point opposite `location`, or `None` if `location` is not an
    /// end point (or the road is terminated).
    pub fn other_end(&self, location: LocationId) -> Option<LocationId> {
        match self.end_points? {
            [a, b] if a == location => Some(b),
            [a, b] if b == location => Some(a),
            _ => None,
        }
    }

    /// The direction that arrives at `location`.
    pub fn direction_toward(&self, location: LocationId) -> Option<Direction> {
        match self.end_points? {
            [a, _] if a == location => Some(Direction::EndPointOne),
            [_, b] if b == location => Some(Direction::EndPointTwo),
            _ => None,
        }
    }

    /// Locations the road may currently be entered from, in end point order.
    pub fn start_locations(&self) -> NetworkResult<Vec<LocationId>> {
        let [a, b] = self.end_points()?;
        let mut starts = Vec::with_capacity(2);
        if self.kind.allows(Direction::EndPointTwo) {
            starts.push(a);
        }
        if self.kind.allows(Direction::EndPointOne) {
            starts.push(b);
        }
        Ok(starts)
    }

    /// Locations the road may currently be left at, in end point order.
    pub fn end_locations(&self) -> NetworkResult<Vec<LocationId>> {
        let [a, b] = self.end_points()?;
        let mut ends = Vec::with_capacity(2);
        if self.kind.allows(Direction::EndPointOne) {
            ends.push(a);
        }
        if self.kind.allows(Direction::EndPointTwo) {
            ends.push(b);
        }
        Ok(ends)
    }

    // ── Scalar fields ─────────────────────────────────────────────────────

    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    #[inline]
    pub fn speed_limit(&self) -> f32 {
        self.speed_limit
    }

    #[inline]
    pub fn average_speed(&self) -> f32 {
        self.average_speed
    }

    // ── Direction-scoped state ────────────────────────────────────────────

    pub fn legal_directions(&self) -> &'static [Direction] {
        self.kind.legal_directions()
    }

    /// Fails if the road is terminated or `direction` is currently illegal.
    pub fn check_direction(&self, direction: Direction) -> NetworkResult<()> {
        if self.is_terminated() {
            return Err(NetworkError::RoadTerminated(self.id));
        }
        if !self.kind.allows(direction) {
            return Err(NetworkError::IllegalDirection { road: self.id, direction });
        }
        Ok(())
    }

    pub fn delay(&self, direction: Direction) -> NetworkResult<f32> {
        self.check_direction(direction)?;
        Ok(self.delay[direction.index()])
    }

    pub fn is_blocked(&self, direction: Direction) -> NetworkResult<bool> {
        self.check_direction(direction)?;
        Ok(self.blocked[direction.index()])
    }

    /// `true` if traffic may move in `direction` right now: legal and not
    /// blocked.  Never fails; a terminated road is simply closed.
    pub fn is_open(&self, direction: Direction) -> bool {
        !self.is_terminated() && self.kind.allows(direction) && !self.blocked[direction.index()]
    }

    /// `length / average_speed + delay`, or `+∞` when blocked.
    pub fn travel_time(&self, direction: Direction) -> NetworkResult<f32> {
        if self.is_blocked(direction)? {
            log::debug!("road {} is blocked {direction}", self.identifier);
            return Ok(f32::INFINITY);
        }
        Ok(self.length as f32 / self.average_speed + self.delay[direction.index()])
    }

    // ── Raw setters (validated by RoadNetwork) ────────────────────────────

    pub(crate) fn set_identifier(&mut self, identifier: String) {
        self.identifier = identifier;
    }

    pub(crate) fn set_length(&mut self, length: u32) {
        self.length = length;
    }

    pub(crate) fn set_speeds(&mut self, speed_limit: f32, average_speed: f32) {
        self.speed_limit = speed_limit;
        self.average_speed = average_speed;
    }

    pub(crate) fn set_delay(&mut self, direction: Direction, delay: f32) -> NetworkResult<()> {
        self.check_direction(direction)?;
        self.delay[direction.index()] = delay;
        Ok(())
    }

    pub(crate) fn set_blocked(&mut self, direction: Direction, blocked: bool) -> NetworkResult<()> {
        self.check_direction(direction)?;
        self.blocked[direction.index()] = blocked;
        Ok(())
    }

    pub(crate) fn reverse_traversal_direction(&mut self) -> NetworkResult<AlternatingState> {
        if self.is_terminated() {
            return Err(NetworkError::RoadTerminated(self.id));
        }
        match self.kind {
            RoadKind::Alternating(state) => {
                let next = state.toggled();
                self.kind = RoadKind::Alternating(next);
                Ok(next)
            }
            _ => Err(NetworkError::NotAlternating(self.id)),
        }
    }

    /// Drop the end point references, returning them.  `None` if the road
    /// was already terminated.
    pub(crate) fn detach(&mut self) -> Option<[LocationId; 2]> {
        self.end_points.take()
    }
}
