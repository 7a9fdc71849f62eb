//! Strongly typed handles into a road network's arenas.
//!
//! A handle is the identity of a location or road.  Two locations at the same
//! coordinate are still distinct entities, so nothing in the workspace ever
//! compares locations by position.  Handles are `Copy + Ord + Hash` and are
//! never reused: a terminated entity keeps its slot and its handle.

use std::fmt;

/// Generate a typed handle wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Slot index in the owning arena.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Handle of a location in a `RoadNetwork`.
    pub struct LocationId(u32);
}

typed_id! {
    /// Handle of a road in a `RoadNetwork`.  Distinct from the road's
    /// human-assigned identifier, which can be renamed.
    pub struct RoadId(u32);
}
