use gridroute_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent for 4-directional unit-cost movement, so the
/// first time the goal is popped its path length is optimal.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(0, 0)), 0);
        assert_eq!(manhattan(Point::new(0, 0), Point::new(4, 5)), 9);
        assert_eq!(manhattan(Point::new(4, 5), Point::new(0, 0)), 9);
        assert_eq!(manhattan(Point::new(-1, 2), Point::new(1, -2)), 6);
    }
}
