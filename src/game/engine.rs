use super::{
    config::GameConfig,
    direction::Direction,
    state::{Board, Collision, GameState, Point, Snake},
};
use rand::Rng;

/// What a single tick did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// The collision that ended the game, if one occurred
    pub collision: Option<Collision>,
}

/// All game rules, free of timers and I/O
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the initial state for the given surface: a single-segment
    /// snake moving right, score zero, food placed outside the safe zone
    pub fn reset(&mut self, board: Board) -> GameState {
        let snake = Snake::new(self.config.start_point(board), Direction::Right);
        let food = self.spawn_food(board, &snake);
        GameState::new(snake, food, board)
    }

    /// Advance the game by one tick: move the head, grow or pop the tail,
    /// then check the moved head against the walls and the body. The cell
    /// the tail just vacated does not count as a collision.
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        let (dx, dy) = state.snake.direction.delta(self.config.cell);
        let new_head = state.snake.head().offset(dx, dy);

        let ate_food = new_head == state.food;
        state.snake.advance(new_head, ate_food);

        if ate_food {
            state.score += 1;
            state.food = self.spawn_food(state.board, &state.snake);
        }

        TickOutcome {
            ate_food,
            collision: self.check_collision(state),
        }
    }

    /// Apply a steer request. Only turns perpendicular to the current axis
    /// of movement are honored, which makes direct reversals impossible.
    /// Returns whether the request was accepted.
    pub fn steer(&self, state: &mut GameState, requested: Direction) -> bool {
        if state.snake.direction.same_axis(requested) {
            return false;
        }
        state.snake.direction = requested;
        true
    }

    /// Adopt new surface bounds and regenerate the food inside them.
    /// Snake and score are untouched; a snake left out of bounds by a
    /// shrink ends the game on its next tick.
    pub fn resize(&mut self, state: &mut GameState, board: Board) {
        state.board = board;
        state.food = self.spawn_food(board, &state.snake);
    }

    fn check_collision(&self, state: &GameState) -> Option<Collision> {
        let head = state.snake.head();
        if !state.board.contains(head) {
            return Some(Collision::Wall);
        }
        if state.snake.hits_body(head) {
            return Some(Collision::SelfHit);
        }
        None
    }

    /// Rejection-sample a grid cell outside the safe zone and off the
    /// snake body. A surface small enough to sit entirely inside the zone
    /// drops the zone exclusion instead of looping forever.
    fn spawn_food(&mut self, board: Board, snake: &Snake) -> Point {
        let cell = self.config.cell;
        let cols = (board.width / cell).max(1);
        let rows = (board.height / cell).max(1);

        let zone = self.config.safe_zone(board);
        let zone_covers_board = zone.contains(Point::new(0, 0))
            && zone.contains(Point::new((cols - 1) * cell, (rows - 1) * cell));

        loop {
            let pos = Point::new(
                self.rng.gen_range(0..cols) * cell,
                self.rng.gen_range(0..rows) * cell,
            );
            if !zone_covers_board && zone.contains(pos) {
                continue;
            }
            if snake.occupies(pos) {
                continue;
            }
            return pos;
        }
    }
}
