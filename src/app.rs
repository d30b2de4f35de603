use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::clock::{TickClock, wait_for};
use crate::game::{Board, GameConfig, GameEngine, GameState, Speed};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Lifecycle of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not started; the start control is offered
    Idle,
    Running,
    Paused,
    /// Collision detected; the final-score notification is up until a key
    /// acknowledges it, after which state resets and the phase is Idle
    GameOver { final_score: u32 },
}

/// The game loop controller. Owns all state and is the only thing that
/// mutates it: ticks and input events are serialized onto one task, so an
/// input handler can never interleave with a tick in progress.
pub struct App {
    engine: GameEngine,
    state: GameState,
    phase: Phase,
    speed: Speed,
    clock: TickClock,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl App {
    /// Placeholder surface used until the real viewport size is known
    const DEFAULT_BOARD: Board = Board {
        width: 800,
        height: 600,
    };

    pub fn new(config: GameConfig, speed: Speed) -> Self {
        let cell = config.cell;
        let mut engine = GameEngine::new(config);
        let state = engine.reset(Self::DEFAULT_BOARD);

        Self {
            engine,
            state,
            phase: Phase::Idle,
            speed,
            clock: TickClock::new(speed.interval()),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(cell),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Size the surface to the actual viewport before the first frame
        let size = terminal.size().context("Failed to read terminal size")?;
        self.handle_resize(size.width, size.height);

        let result = self.run_event_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Redraw at 30 FPS regardless of the game tick cadence
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                // Keyboard and resize events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game tick; pends forever while the clock is stopped
                _ = wait_for(self.clock.next_deadline()) => {
                    self.clock.mark_fired();
                    self.on_tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(
                            frame,
                            &self.state,
                            &self.phase,
                            self.speed,
                            &self.metrics,
                        );
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
            Event::Resize(width, height) => {
                self.handle_resize(width, height);
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let action = self.input_handler.handle_key_event(key);

        // The end-of-game notice blocks everything else until acknowledged
        if matches!(self.phase, Phase::GameOver { .. }) {
            if action == KeyAction::Quit {
                self.should_quit = true;
            } else {
                self.acknowledge_game_over();
            }
            return;
        }

        match action {
            KeyAction::Steer(direction) => {
                // Takes effect on the next tick
                self.engine.steer(&mut self.state, direction);
            }
            KeyAction::Start => self.start(),
            KeyAction::TogglePause => self.toggle_pause(),
            KeyAction::SpeedUp => self.adjust_speed(1),
            KeyAction::SpeedDown => self.adjust_speed(-1),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Idle -> Running
    fn start(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        self.metrics.on_game_start();
        self.clock.reschedule(self.speed.interval());
        self.clock.start();
        self.phase = Phase::Running;
    }

    /// Running <-> Paused; snake, food, and score are retained
    fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Running => {
                self.clock.stop();
                self.phase = Phase::Paused;
            }
            Phase::Paused => {
                self.clock.start();
                self.phase = Phase::Running;
            }
            _ => {}
        }
    }

    /// Executed per tick while Running; a collision stops the clock before
    /// anything else happens
    fn on_tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }

        let outcome = self.engine.tick(&mut self.state);

        if outcome.collision.is_some() {
            self.clock.stop();
            self.metrics.on_game_over(self.state.score);
            self.phase = Phase::GameOver {
                final_score: self.state.score,
            };
        }
    }

    /// GameOver -> Idle, with everything back at initial values
    fn acknowledge_game_over(&mut self) {
        if matches!(self.phase, Phase::GameOver { .. }) {
            self.state = self.engine.reset(self.state.board);
            self.phase = Phase::Idle;
        }
    }

    /// Clamped speed step; a running game re-arms the clock on the new
    /// interval without touching snake, food, or score
    fn adjust_speed(&mut self, steps: i32) {
        self.speed.adjust(steps);
        self.clock.reschedule(self.speed.interval());
    }

    /// Re-derive the surface from the viewport; the engine regenerates the
    /// food inside the new bounds
    fn handle_resize(&mut self, term_width: u16, term_height: u16) {
        let (cols, rows) = Renderer::board_cells(term_width, term_height);
        let cell = self.engine.config().cell;
        let board = Board::new(cols as i32 * cell, rows as i32 * cell);
        self.engine.resize(&mut self.state, board);
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Point, Snake};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        App::new(GameConfig::default(), Speed::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_initial_phase_is_idle() {
        let app = app();
        assert_eq!(app.phase, Phase::Idle);
        assert!(!app.clock.is_running());
        assert_eq!(app.state.score, 0);
        assert_eq!(app.state.snake.len(), 1);
    }

    #[test]
    fn test_start_transitions_to_running() {
        let mut app = app();
        app.start();
        assert_eq!(app.phase, Phase::Running);
        assert!(app.clock.is_running());
        assert_eq!(app.clock.period(), Duration::from_millis(350));
    }

    #[test]
    fn test_start_ignored_unless_idle() {
        let mut app = app();
        app.start();
        app.toggle_pause();
        app.start();
        assert_eq!(app.phase, Phase::Paused);
    }

    #[test]
    fn test_pause_retains_state_and_stops_clock() {
        let mut app = app();
        app.start();
        app.state.score = 4;
        let snake_before = app.state.snake.clone();

        app.toggle_pause();
        assert_eq!(app.phase, Phase::Paused);
        assert!(!app.clock.is_running());
        assert_eq!(app.state.score, 4);
        assert_eq!(app.state.snake, snake_before);

        app.toggle_pause();
        assert_eq!(app.phase, Phase::Running);
        assert!(app.clock.is_running());
        assert_eq!(app.state.score, 4);
    }

    #[test]
    fn test_tick_ignored_outside_running() {
        let mut app = app();
        let state_before = app.state.clone();
        app.on_tick();
        assert_eq!(app.state, state_before);
    }

    #[test]
    fn test_collision_stops_clock_and_raises_notice() {
        let mut app = app();
        app.start();
        app.state.snake = Snake::new(Point::new(0, 200), Direction::Left);
        app.state.score = 7;

        app.on_tick();

        assert_eq!(app.phase, Phase::GameOver { final_score: 7 });
        assert!(!app.clock.is_running());
        assert_eq!(app.metrics.high_score, 7);
        assert_eq!(app.metrics.games_played, 1);
    }

    #[test]
    fn test_acknowledge_resets_to_idle() {
        let mut app = app();
        app.start();
        app.state.snake = Snake::new(Point::new(0, 200), Direction::Left);
        app.state.score = 7;
        app.on_tick();

        app.handle_key(key(KeyCode::Char('x')));

        assert_eq!(app.phase, Phase::Idle);
        assert_eq!(app.state.score, 0);
        assert_eq!(app.state.snake.len(), 1);
        assert_eq!(app.state.snake.direction, Direction::Right);
        assert!(!app.clock.is_running());
    }

    #[test]
    fn test_quit_still_works_from_game_over() {
        let mut app = app();
        app.start();
        app.state.snake = Snake::new(Point::new(0, 200), Direction::Left);
        app.on_tick();

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
        assert!(matches!(app.phase, Phase::GameOver { .. }));
    }

    #[test]
    fn test_speed_adjust_reschedules_running_clock() {
        let mut app = app();
        app.start();
        let snake_before = app.state.snake.clone();

        app.adjust_speed(1);
        assert_eq!(app.clock.period(), Duration::from_millis(300));
        assert!(app.clock.is_running());
        assert_eq!(app.state.snake, snake_before);
        assert_eq!(app.state.score, 0);
    }

    #[test]
    fn test_speed_adjust_clamps_at_table_bounds() {
        let mut app = app();
        for _ in 0..30 {
            app.adjust_speed(1);
        }
        assert_eq!(app.speed.level(), 9);
        assert_eq!(app.clock.period(), Duration::from_millis(80));

        for _ in 0..30 {
            app.adjust_speed(-1);
        }
        assert_eq!(app.speed.level(), 1);
        assert_eq!(app.clock.period(), Duration::from_millis(450));
    }

    #[test]
    fn test_steering_applies_immediately() {
        let mut app = app();
        app.start();
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.state.snake.direction, Direction::Up);

        // Reversal is filtered out
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.state.snake.direction, Direction::Up);
    }

    #[test]
    fn test_resize_rebuilds_board_and_keeps_progress() {
        let mut app = app();
        app.start();
        app.state.score = 3;
        let snake_before = app.state.snake.clone();

        app.handle_resize(82, 30);

        let cell = app.engine.config().cell;
        assert_eq!(app.state.board, Board::new(40 * cell, 22 * cell));
        assert_eq!(app.state.score, 3);
        assert_eq!(app.state.snake, snake_before);
        assert!(app.state.board.contains(app.state.food));
        assert_eq!(app.phase, Phase::Running);
    }
}
