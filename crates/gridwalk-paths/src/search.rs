//! The best-first search.
//!
//! A Dijkstra-with-heuristic hybrid: the frontier is ordered by
//! `f(c) = manhattan(start, c) + manhattan(c, goal)`, while relaxation uses
//! an accumulated step-cost map with a uniform per-step cost of one.
//!
//! Note the `g` term is the *geometric* distance from the start, not the
//! accumulated cost. On open ground the two coincide; in obstacle-heavy
//! grids the search can settle on a route slightly longer than a strict A*
//! would find. Returned paths are always walkable and cycle-free; global
//! cost minimality is not guaranteed. The cost map still only ever lowers
//! a cell's recorded cost within one search, so rediscoveries via worse
//! routes are suppressed.

use std::collections::{BinaryHeap, HashMap};

use gridwalk_core::Point;

use crate::Neighbors;
use crate::distance::manhattan;
use crate::error::PathError;
use crate::traits::WorldView;

/// Default search-radius cap: candidates farther than this Manhattan
/// distance from the start are never expanded.
pub const MAX_SEARCH_DISTANCE: i32 = 20;

/// Frontier entry, ordered by estimated total cost with an
/// insertion-sequence tie-break for determinism.
#[derive(Clone, Copy, Eq, PartialEq)]
struct FrontierEntry {
    f: i32,
    seq: u64,
    pos: Point,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest f first;
        // among equal f, the earliest-inserted entry wins.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Grid pathfinding engine.
///
/// Stateless across calls apart from its configuration; every search owns
/// and discards its own cost and predecessor maps.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pathfinder {
    /// Maximum Manhattan distance from the start beyond which frontier
    /// candidates are consumed without expansion. A resource cap on
    /// exploration, not a correctness parameter.
    pub max_search_distance: i32,
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self {
            max_search_distance: MAX_SEARCH_DISTANCE,
        }
    }
}

impl Pathfinder {
    /// Create an engine with the default search radius.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom search radius.
    pub fn with_max_distance(max_search_distance: i32) -> Self {
        Self {
            max_search_distance,
        }
    }

    /// Compute a shortest walkable route from `start` to `goal`.
    ///
    /// Returns the ordered list of coordinates from the first step after
    /// `start` up to and including `goal`, `Ok(None)` if no path was found
    /// within the search radius, or an error for out-of-bounds input.
    ///
    /// `start` is assumed walkable and is never checked for occupancy. An
    /// occupied `goal` is unreachable and yields `Ok(None)`, except for the
    /// `start == goal` shortcut which returns an empty path without
    /// consulting the world.
    pub fn find_path<W: WorldView>(
        &self,
        start: Point,
        goal: Point,
        world: &W,
    ) -> Result<Option<Vec<Point>>, PathError> {
        self.find_path_cancelable(start, goal, world, || false)
    }

    /// Like [`find_path`](Self::find_path), with an external cancellation
    /// token checked once per frontier iteration.
    pub fn find_path_cancelable<W: WorldView>(
        &self,
        start: Point,
        goal: Point,
        world: &W,
        mut cancel: impl FnMut() -> bool,
    ) -> Result<Option<Vec<Point>>, PathError> {
        for p in [start, goal] {
            if !world.contains(p) {
                return Err(PathError::OutOfBounds {
                    pos: p,
                    width: world.width(),
                    height: world.height(),
                });
            }
        }

        // Already at the destination: a zero-length path is a success.
        if start == goal {
            return Ok(Some(Vec::new()));
        }

        let mut cost: HashMap<Point, i32> = HashMap::new();
        let mut came_from: HashMap<Point, Point> = HashMap::new();
        let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut nbuf = Neighbors::new();
        let mut seq: u64 = 0;
        let mut expanded: u64 = 0;

        cost.insert(start, 0);
        frontier.push(FrontierEntry {
            f: manhattan(start, goal),
            seq,
            pos: start,
        });

        let mut found = false;
        while let Some(entry) = frontier.pop() {
            if cancel() {
                return Err(PathError::Canceled);
            }
            let candidate = entry.pos;

            // Goal test comes before the radius cap: a goal that made it
            // into the frontier is found even just past the cap.
            if candidate == goal {
                found = true;
                break;
            }

            // Past the cap: consume the candidate without expanding it.
            if manhattan(start, candidate) > self.max_search_distance {
                continue;
            }
            expanded += 1;

            // Every frontier entry has a recorded cost by construction.
            let new_cost = cost[&candidate] + 1;

            for &n in nbuf.cardinal(candidate, |n| world.contains(n)) {
                // Keep the neighbor only if undiscovered or reached more
                // cheaply than before. The cost is recorded before the
                // occupancy check, so occupied cells get a cost entry but
                // never enter the frontier.
                let cheaper = cost.get(&n).is_none_or(|&c| new_cost < c);
                if !cheaper {
                    continue;
                }
                cost.insert(n, new_cost);

                if world.is_occupied(n) {
                    continue;
                }

                came_from.insert(n, candidate);
                seq += 1;
                frontier.push(FrontierEntry {
                    f: manhattan(start, n) + manhattan(n, goal),
                    seq,
                    pos: n,
                });
            }
        }

        if !found {
            log::debug!("no path {start} -> {goal}: {expanded} cells expanded");
            return Ok(None);
        }

        // Reconstruct goal -> start; every frontier entry other than the
        // start recorded its predecessor before being pushed.
        let mut path = Vec::new();
        let mut cur = goal;
        while cur != start {
            path.push(cur);
            cur = came_from[&cur];
        }
        path.reverse();

        log::debug!(
            "path {start} -> {goal}: {} steps, {expanded} cells expanded",
            path.len()
        );
        Ok(Some(path))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathfinder_config_round_trip() {
        let engine = Pathfinder::with_max_distance(35);
        let json = serde_json::to_string(&engine).unwrap();
        let back: Pathfinder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_search_distance, 35);
    }

    #[test]
    fn path_error_round_trip() {
        let err = PathError::OutOfBounds {
            pos: Point::new(9, 9),
            width: 5,
            height: 5,
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: PathError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
