//! `tm-core`: foundational types for the `trailmark` path animator.
//!
//! This crate is a dependency of every other `tm-*` crate.  It has no `tm-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde` and `geojson`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RunId`, `FrameToken`                                 |
//! | [`geo`]         | `Waypoint`, Haversine distance, planar lerp           |
//! | [`path`]        | `Path`, path length, cumulative distances             |
//! | [`time`]        | `FrameTime`, `Speed`                                  |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | Adds `Serialize`/`Deserialize` to all public types.      |
//! | `geojson` | Adds `Path::from_geojson_str`.                           |

pub mod error;
pub mod geo;
pub mod ids;
pub mod path;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{EARTH_RADIUS_M, Waypoint, distance};
pub use ids::{FrameToken, RunId};
pub use path::{Path, path_length};
pub use time::{FrameTime, Speed};
