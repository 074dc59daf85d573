//! Best-first pathfinding on 2D obstacle grids.
//!
//! This crate computes shortest walkable routes between two grid cells:
//!
//! - **[`Pathfinder::find_path`]** — best-first search with a Manhattan
//!   heuristic, uniform per-step cost of one, orthogonal movement only.
//! - **[`Pathfinder::find_path_cancelable`]** — same search with an external
//!   cancellation token checked once per frontier iteration.
//!
//! The engine consults the world through the read-only [`WorldView`] trait
//! and owns no state across calls; each search builds, uses, and discards
//! its own cost and predecessor maps.
//!
//! Exploration is bounded by a search-radius cap
//! ([`MAX_SEARCH_DISTANCE`], tunable per [`Pathfinder`]): a goal farther
//! from the start than the cap allows is reported as unreachable even when
//! a geometric path exists. This is a deliberate resource cap.

mod distance;
mod error;
mod neighbors;
mod search;
mod traits;

pub use distance::manhattan;
pub use error::PathError;
pub use neighbors::Neighbors;
pub use search::{MAX_SEARCH_DISTANCE, Pathfinder};
pub use traits::WorldView;
