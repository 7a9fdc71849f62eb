//! `rn-core` — foundational types for the `roadnet` workspace.
//!
//! This crate has no `rn-*` dependencies and a single required external one
//! (`thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LocationId`, `RoadId`                                |
//! | [`geo`]         | `Coordinate`, straight-line distance                  |
//! | [`direction`]   | `Direction` (toward end point one / two)              |
//! | [`rules`]       | `NetworkRules` validation limits and predicates       |
//! | [`error`]       | `NetworkError`, `ErrorKind`, `NetworkResult`          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, `Coordinate`,        |
//!           | `Direction`, and `NetworkRules`.                           |

pub mod direction;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rules;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{ErrorKind, NetworkError, NetworkResult};
pub use geo::Coordinate;
pub use ids::{LocationId, RoadId};
pub use rules::NetworkRules;
