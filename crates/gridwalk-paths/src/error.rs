use gridwalk_core::Point;

/// Errors reported by the pathfinding engine.
///
/// Absence of a path is *not* an error —
/// [`Pathfinder::find_path`](crate::Pathfinder::find_path) reports that as
/// `Ok(None)`. Errors are reserved for inputs the search must not run on,
/// and for external cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathError {
    /// Start or goal lies outside the world bounds.
    #[error("coordinate {pos} outside world bounds {width}x{height}")]
    OutOfBounds { pos: Point, width: i32, height: i32 },

    /// The cancellation token fired before the search finished.
    #[error("search canceled")]
    Canceled,
}
