//! Field validation rules for locations and roads.
//!
//! The limits are plain data so an application can load them from a TOML or
//! JSON file (with the `serde` feature) and hand them to the network at
//! construction.  The network never changes its rules afterwards, which keeps
//! every stored value valid for the lifetime of the network.

use crate::{Coordinate, NetworkError, NetworkResult};

/// Limits applied when creating or changing locations and roads.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkRules {
    /// Shortest allowed road identifier, in characters.  Default: 2.
    pub min_identifier_len: usize,

    /// Longest allowed road identifier, in characters.  Default: 3.
    pub max_identifier_len: usize,

    /// Shortest allowed location address.  Default: 2.
    pub min_address_len: usize,

    /// Largest allowed road end point component, per axis.  End points must
    /// lie in `[0, max_coordinate.x] × [0, max_coordinate.y]`.  Default: 70 × 70.
    pub max_coordinate: Coordinate,

    /// Speed limit given to roads created without one, in m/s.  Default: 19.5.
    pub default_speed_limit: f32,

    /// Upper bound on any speed, in m/s.  Default: speed of light.
    pub max_speed: f32,
}

impl Default for NetworkRules {
    fn default() -> Self {
        Self {
            min_identifier_len: 2,
            max_identifier_len: 3,
            min_address_len: 2,
            max_coordinate: Coordinate::new(70.0, 70.0),
            default_speed_limit: 19.5,
            max_speed: 299_792_458.0,
        }
    }
}

impl NetworkRules {
    /// Check that the limits are consistent with one another.
    pub fn validate(&self) -> NetworkResult<()> {
        if self.min_identifier_len == 0 || self.min_identifier_len > self.max_identifier_len {
            return Err(NetworkError::Config(format!(
                "identifier length bounds {}..={} are empty",
                self.min_identifier_len, self.max_identifier_len
            )));
        }
        if self.min_address_len == 0 {
            return Err(NetworkError::Config("minimum address length must be positive".into()));
        }
        let c = self.max_coordinate;
        if !c.is_finite() || c.x < 0.0 || c.y < 0.0 {
            return Err(NetworkError::Config(format!("invalid coordinate bound {c}")));
        }
        if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            return Err(NetworkError::Config(format!("invalid maximum speed {}", self.max_speed)));
        }
        if !(self.default_speed_limit > 0.0 && self.default_speed_limit <= self.max_speed) {
            return Err(NetworkError::Config(format!(
                "default speed limit {} outside (0, {}]",
                self.default_speed_limit, self.max_speed
            )));
        }
        Ok(())
    }

    // ── Road fields ───────────────────────────────────────────────────────

    /// An uppercase letter followed only by digits, within the length bounds.
    /// Uniqueness is the registry's concern, not checked here.
    pub fn is_valid_identifier(&self, identifier: &str) -> bool {
        let len = identifier.chars().count();
        if len < self.min_identifier_len || len > self.max_identifier_len {
            return false;
        }
        let mut chars = identifier.chars();
        chars.next().is_some_and(char::is_uppercase) && chars.all(|c| c.is_ascii_digit())
    }

    /// Road end points must lie inside the configured bounding box.
    pub fn is_valid_end_point(&self, point: Coordinate) -> bool {
        (0.0..=self.max_coordinate.x).contains(&point.x)
            && (0.0..=self.max_coordinate.y).contains(&point.y)
    }

    /// `0 < average_speed <= speed_limit <= max_speed`.
    pub fn are_valid_speeds(&self, speed_limit: f32, average_speed: f32) -> bool {
        average_speed > 0.0 && average_speed <= speed_limit && speed_limit <= self.max_speed
    }

    /// Non-negative, or positive infinity.  NaN is rejected.
    #[inline]
    pub fn is_valid_delay(&self, delay: f32) -> bool {
        delay >= 0.0
    }

    // ── Location fields ───────────────────────────────────────────────────

    /// At least `min_address_len` characters, starting with an uppercase
    /// letter, made of word characters, whitespace, and commas.
    pub fn is_valid_address(&self, address: &str) -> bool {
        address.chars().count() >= self.min_address_len
            && address.chars().next().is_some_and(char::is_uppercase)
            && address
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == ',' || c.is_whitespace())
    }

    #[inline]
    pub fn is_valid_coordinate(&self, point: Coordinate) -> bool {
        point.is_finite()
    }
}
