//! `rn-network` — locations, roads, and routes.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`network`]  | `RoadNetwork` (arenas + adjacency upkeep), `RoadSpec`      |
//! | [`location`] | `Location` and its incident-road set                       |
//! | [`road`]     | `Road`, `RoadKind`, `AlternatingState`                     |
//! | [`registry`] | `RoadRegistry` (identifier uniqueness)                     |
//! | [`segment`]  | `Segment` (road or nested route)                           |
//! | [`route`]    | `Route` (connectivity walk, traversal queries)             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Propagates `rn-core/serde`.                                  |
//!
//! # Logging
//!
//! Entity creation, termination, and route mutation are reported through the
//! `log` facade.  No logger is installed here.

pub mod location;
pub mod network;
pub mod registry;
pub mod road;
pub mod route;
pub mod segment;


pub use location::Location;
pub use network::{RoadNetwork, RoadSpec};
pub use registry::RoadRegistry;
pub use road::{AlternatingState, Road, RoadKind};
pub use route::Route;
pub use segment::Segment;
