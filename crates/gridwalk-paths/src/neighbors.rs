use gridwalk_core::Point;

/// Cached cardinal-neighbor computation helper.
///
/// Enumerates the orthogonal (4-way) neighbors of a grid point, filtered by
/// a predicate, reusing an internal buffer across queries.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `p` for which `keep` returns
    /// `true`, in left, right, up, down order.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
