use gridwalk_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_basics() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, 4)), 7);
        assert_eq!(manhattan(Point::new(3, 4), Point::new(0, 0)), 7);
        assert_eq!(manhattan(Point::new(-2, 1), Point::new(2, -1)), 6);
        assert_eq!(manhattan(Point::new(5, 5), Point::new(5, 5)), 0);
    }
}
