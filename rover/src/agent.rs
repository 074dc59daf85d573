//! Path-following agent state machine.
//!
//! The pathfinding engine returns a precomputed route; consuming it is the
//! caller's job. An [`Agent`] holds its current position and walks a route
//! one step per tick. Requesting a new route supersedes the one in
//! progress, so whatever drives the ticks never has to reconcile two
//! routes.

use gridwalk_core::Point;

/// Route-consumption state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Walk {
    /// No route in progress.
    Idle,
    /// Walking `path`; `index` is the next step to take.
    Following { path: Vec<Point>, index: usize },
}

/// An agent that walks precomputed routes across the grid.
#[derive(Debug, Clone)]
pub struct Agent {
    pos: Point,
    walk: Walk,
}

impl Agent {
    /// Create an idle agent at a position.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            walk: Walk::Idle,
        }
    }

    /// Current position.
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Whether no route is in progress.
    pub fn is_idle(&self) -> bool {
        self.walk == Walk::Idle
    }

    /// Start walking a route, replacing any route in progress.
    ///
    /// The path is start-exclusive, as returned by the engine. An empty
    /// path means the agent is already at its destination and stays idle.
    pub fn follow(&mut self, path: Vec<Point>) {
        self.walk = if path.is_empty() {
            Walk::Idle
        } else {
            Walk::Following { path, index: 0 }
        };
    }

    /// Abandon the route in progress, if any.
    pub fn stop(&mut self) {
        self.walk = Walk::Idle;
    }

    /// Advance one step along the route.
    ///
    /// Returns the new position, or `None` when idle. Transitions to idle
    /// after stepping onto the final coordinate.
    pub fn tick(&mut self) -> Option<Point> {
        let Walk::Following { path, index } = &mut self.walk else {
            return None;
        };
        let step = path[*index];
        *index += 1;
        self.pos = step;
        if *index >= path.len() {
            self.walk = Walk::Idle;
        }
        Some(step)
    }
}
