use gridwalk_core::Point;

/// Read-only view of a grid world, the engine's only collaborator.
///
/// Coordinates are valid when `0 <= x < width` and `0 <= y < height`.
/// The engine bounds-filters every coordinate before calling
/// [`is_occupied`](WorldView::is_occupied), so implementations only need to
/// answer for in-range cells.
pub trait WorldView {
    /// Grid width in cells. Must be positive and fixed for the duration of
    /// a search.
    fn width(&self) -> i32;

    /// Grid height in cells. Must be positive and fixed for the duration of
    /// a search.
    fn height(&self) -> i32;

    /// Whether a static obstacle occupies the cell. Pure query, no side
    /// effects.
    fn is_occupied(&self, p: Point) -> bool;

    /// Whether the point lies inside the world bounds.
    #[inline]
    fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width() && p.y < self.height()
    }
}
