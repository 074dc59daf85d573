//! **gridwalk-world** — Obstacle grid world model.
//!
//! A [`GridWorld`] is plain data: dimensions plus a per-cell occupancy map.
//! It implements [`gridwalk_paths::WorldView`] so the pathfinding engine can
//! consult it read-only; mutation (placement, scatter generation) belongs to
//! world-building code and must never happen while a search is in flight.
//!
//! Any renderable projection of world state is an external concern that
//! reads this data; nothing here depends on a rendering representation.

mod r#gen;
mod world;

pub use r#gen::ObstacleCounts;
pub use world::{GridWorld, ObstacleKind, WorldError};
