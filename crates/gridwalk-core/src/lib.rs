//! **gridwalk-core** — Geometry primitives for grid-based agent movement.
//!
//! Provides the integer [`Point`] type used throughout the *gridwalk*
//! workspace: world cells, search coordinates, and agent positions are all
//! plain `Point`s with no coupling to any rendering representation.

pub mod geom;

pub use geom::Point;
