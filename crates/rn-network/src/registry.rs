//! Road identifier registry.
//!
//! Maps each live road's human-assigned identifier to its handle.  One
//! registry belongs to one network; two networks may reuse the same
//! identifiers independently.

use rustc_hash::FxHashMap;

use rn_core::{NetworkError, NetworkResult, RoadId};

#[derive(Clone, Debug, Default)]
pub struct RoadRegistry {
    by_identifier: FxHashMap<String, RoadId>,
}

impl RoadRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unique(&self, identifier: &str) -> bool {
        !self.by_identifier.contains_key(identifier)
    }

    pub fn get(&self, identifier: &str) -> Option<RoadId> {
        self.by_identifier.get(identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.by_identifier.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_identifier.is_empty()
    }

    /// Claim `identifier` for `road`.
    pub fn register(&mut self, identifier: &str, road: RoadId) -> NetworkResult<()> {
        if !self.is_unique(identifier) {
            return Err(NetworkError::DuplicateIdentifier(identifier.to_owned()));
        }
        self.by_identifier.insert(identifier.to_owned(), road);
        Ok(())
    }

    /// Move `road` from `old` to `new`.  Renaming to the current identifier
    /// is a no-op; on failure `old` stays registered.
    pub fn rename(&mut self, old: &str, new: &str, road: RoadId) -> NetworkResult<()> {
        if old == new {
            return Ok(());
        }
        self.register(new, road)?;
        self.by_identifier.remove(old);
        Ok(())
    }

    /// Free `identifier` for reuse.  Returns the handle it pointed to.
    pub fn release(&mut self, identifier: &str) -> Option<RoadId> {
        self.by_identifier.remove(identifier)
    }
}
