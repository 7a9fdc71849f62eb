//! Network error type.
//!
//! Every failing operation returns exactly one `NetworkError`.  Callers that
//! only need the coarse category (a facade translating errors into a single
//! external signal, say) match on [`NetworkError::kind`].

use thiserror::Error;

use crate::{Coordinate, Direction, LocationId, RoadId};

/// Coarse classification of a [`NetworkError`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    /// Invalid input when creating or changing an entity, including a
    /// discontinuous route.
    Construction,
    /// A direction-specific property was used in a direction the road does
    /// not currently allow.
    Direction,
    /// Segment index out of bounds.
    Index,
    /// The entity involved is terminated.
    State,
    /// The handle does not belong to this network.
    Lookup,
    /// Inconsistent `NetworkRules`.
    Config,
}

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("invalid road identifier {0:?}")]
    InvalidIdentifier(String),

    #[error("road identifier {0:?} is already in use")]
    DuplicateIdentifier(String),

    #[error("invalid address {0:?}")]
    InvalidAddress(String),

    #[error("invalid coordinate {0}")]
    InvalidCoordinate(Coordinate),

    #[error("a road cannot start and end at the same location {0}")]
    DegenerateRoad(LocationId),

    #[error("road {road} does not have location {location} as an end point")]
    NotAnEndPoint { road: RoadId, location: LocationId },

    #[error("invalid speeds: limit {speed_limit}, average {average_speed}")]
    InvalidSpeed { speed_limit: f32, average_speed: f32 },

    #[error("invalid delay {0}")]
    InvalidDelay(f32),

    #[error("segment {index} does not start at location {at}")]
    DisconnectedSegment { index: usize, at: LocationId },

    #[error("road {road} cannot be used {direction}")]
    IllegalDirection { road: RoadId, direction: Direction },

    #[error("road {0} is not an alternating road")]
    NotAlternating(RoadId),

    #[error("segment index {index} out of bounds for a route with {len} segments")]
    SegmentIndex { index: usize, len: usize },

    #[error("location {0} is terminated")]
    LocationTerminated(LocationId),

    #[error("road {0} is terminated")]
    RoadTerminated(RoadId),

    #[error("road {0} must be terminated before it is detached from its end points")]
    RoadNotTerminated(RoadId),

    #[error("location {0} not found")]
    LocationNotFound(LocationId),

    #[error("road {0} not found")]
    RoadNotFound(RoadId),

    #[error("configuration error: {0}")]
    Config(String),
}

impl NetworkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NetworkError::InvalidIdentifier(_)
            | NetworkError::DuplicateIdentifier(_)
            | NetworkError::InvalidAddress(_)
            | NetworkError::InvalidCoordinate(_)
            | NetworkError::DegenerateRoad(_)
            | NetworkError::NotAnEndPoint { .. }
            | NetworkError::InvalidSpeed { .. }
            | NetworkError::InvalidDelay(_)
            | NetworkError::DisconnectedSegment { .. } => ErrorKind::Construction,
            NetworkError::IllegalDirection { .. } | NetworkError::NotAlternating(_) => {
                ErrorKind::Direction
            }
            NetworkError::SegmentIndex { .. } => ErrorKind::Index,
            NetworkError::LocationTerminated(_)
            | NetworkError::RoadTerminated(_)
            | NetworkError::RoadNotTerminated(_) => ErrorKind::State,
            NetworkError::LocationNotFound(_) | NetworkError::RoadNotFound(_) => ErrorKind::Lookup,
            NetworkError::Config(_) => ErrorKind::Config,
        }
    }
}

/// Shorthand result type for all `rn-*` crates.
pub type NetworkResult<T> = Result<T, NetworkError>;
