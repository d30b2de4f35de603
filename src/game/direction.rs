/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the velocity delta (dx, dy) in surface pixels for one tick,
    /// given the grid cell size
    pub fn delta(&self, cell: i32) -> (i32, i32) {
        match self {
            Direction::Up => (0, -cell),
            Direction::Down => (0, cell),
            Direction::Left => (-cell, 0),
            Direction::Right => (cell, 0),
        }
    }

    /// Returns true if both directions lie on the same axis of movement.
    /// A steer request is only honored when this is false, which rules out
    /// both 180-degree reversals and redundant same-direction presses.
    pub fn same_axis(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up | Direction::Down, Direction::Up | Direction::Down)
                | (
                    Direction::Left | Direction::Right,
                    Direction::Left | Direction::Right
                )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_scales_with_cell_size() {
        assert_eq!(Direction::Up.delta(20), (0, -20));
        assert_eq!(Direction::Down.delta(20), (0, 20));
        assert_eq!(Direction::Left.delta(20), (-20, 0));
        assert_eq!(Direction::Right.delta(20), (20, 0));
        assert_eq!(Direction::Right.delta(10), (10, 0));
    }

    #[test]
    fn test_same_axis() {
        assert!(Direction::Up.same_axis(Direction::Down));
        assert!(Direction::Up.same_axis(Direction::Up));
        assert!(Direction::Left.same_axis(Direction::Right));
        assert!(Direction::Right.same_axis(Direction::Right));

        assert!(!Direction::Up.same_axis(Direction::Left));
        assert!(!Direction::Up.same_axis(Direction::Right));
        assert!(!Direction::Left.same_axis(Direction::Down));
    }
}
