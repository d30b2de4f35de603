use super::direction::Direction;

/// A grid-aligned position on the drawing surface, in pixels.
/// Both coordinates are multiples of the grid cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The drawing surface bounds, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }
}

/// The snake: body segments with the head at index 0
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: Vec<Point>,
    pub direction: Direction,
}

impl Snake {
    /// A fresh snake is a single segment
    pub fn new(head: Point, direction: Direction) -> Self {
        Self {
            body: vec![head],
            direction,
        }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    /// Push a new head; the tail stays when growing
    pub fn advance(&mut self, new_head: Point, grow: bool) {
        self.body.insert(0, new_head);
        if !grow {
            self.body.pop();
        }
    }

    /// True if the position coincides with any segment behind the head
    pub fn hits_body(&self, p: Point) -> bool {
        self.body[1..].contains(&p)
    }

    pub fn occupies(&self, p: Point) -> bool {
        self.body.contains(&p)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// What ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the surface bounds
    Wall,
    /// Head ran into the snake's own body
    SelfHit,
}

/// Complete game state, exclusively owned by the loop controller
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Point,
    pub board: Board,
    pub score: u32,
}

impl GameState {
    pub fn new(snake: Snake, food: Point, board: Board) -> Self {
        Self {
            snake,
            food,
            board,
            score: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_offset() {
        let p = Point::new(100, 100);
        assert_eq!(p.offset(20, 0), Point::new(120, 100));
        assert_eq!(p.offset(-20, 0), Point::new(80, 100));
        assert_eq!(p.offset(0, 20), Point::new(100, 120));
        assert_eq!(p.offset(0, -20), Point::new(100, 80));
    }

    #[test]
    fn test_board_bounds() {
        let board = Board::new(800, 600);
        assert!(board.contains(Point::new(0, 0)));
        assert!(board.contains(Point::new(780, 580)));
        assert!(!board.contains(Point::new(-20, 0)));
        assert!(!board.contains(Point::new(800, 0)));
        assert!(!board.contains(Point::new(0, 600)));
    }

    #[test]
    fn test_new_snake_is_single_segment() {
        let snake = Snake::new(Point::new(200, 200), Direction::Right);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Point::new(200, 200));
    }

    #[test]
    fn test_advance_without_growth_keeps_length() {
        let mut snake = Snake::new(Point::new(200, 200), Direction::Right);
        snake.advance(Point::new(220, 200), false);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Point::new(220, 200));
    }

    #[test]
    fn test_advance_with_growth_keeps_tail() {
        let mut snake = Snake::new(Point::new(200, 200), Direction::Right);
        snake.advance(Point::new(220, 200), true);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Point::new(220, 200));
        assert_eq!(snake.body[1], Point::new(200, 200));
    }

    #[test]
    fn test_hits_body_excludes_head() {
        let snake = Snake {
            body: vec![
                Point::new(100, 100),
                Point::new(80, 100),
                Point::new(60, 100),
            ],
            direction: Direction::Right,
        };
        assert!(!snake.hits_body(Point::new(100, 100)));
        assert!(snake.hits_body(Point::new(80, 100)));
        assert!(!snake.hits_body(Point::new(40, 100)));
    }
}
