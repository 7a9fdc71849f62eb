//! Travel direction along a single road.
//!
//! A direction is named after the end point it travels *toward*: traffic in
//! `EndPointTwo` enters at end point one and leaves at end point two.  Delay
//! and blocked state are stored per direction.

/// Which way traffic moves along a road.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// From end point two toward end point one.
    EndPointOne,
    /// From end point one toward end point two.
    EndPointTwo,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::EndPointOne, Direction::EndPointTwo];

    /// The opposite direction.
    #[inline]
    pub fn reverse(self) -> Direction {
        match self {
            Direction::EndPointOne => Direction::EndPointTwo,
            Direction::EndPointTwo => Direction::EndPointOne,
        }
    }

    /// Slot in per-direction `[T; 2]` arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::EndPointOne => 0,
            Direction::EndPointTwo => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::EndPointOne => "toward end point one",
            Direction::EndPointTwo => "toward end point two",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
