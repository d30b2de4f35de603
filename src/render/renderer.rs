use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::Phase;
use crate::game::{GameState, Point, Speed};
use crate::metrics::GameMetrics;

const HEADER_ROWS: u16 = 3;
const FOOTER_ROWS: u16 = 3;
const BORDER_COLS: u16 = 2;

/// Draws the game state onto the terminal frame. Never mutates state.
pub struct Renderer {
    cell: i32,
}

impl Renderer {
    pub fn new(cell: i32) -> Self {
        Self { cell }
    }

    /// Playfield size in grid cells for a terminal of the given dimensions.
    /// Each cell renders as two columns by one row; the header, footer, and
    /// playfield border are reserved.
    pub fn board_cells(term_width: u16, term_height: u16) -> (u16, u16) {
        let cols = (term_width.saturating_sub(BORDER_COLS) / 2).max(1);
        let rows = term_height
            .saturating_sub(HEADER_ROWS + FOOTER_ROWS + 2)
            .max(1);
        (cols, rows)
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        phase: &Phase,
        speed: Speed,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_ROWS),
                Constraint::Min(0),
                Constraint::Length(FOOTER_ROWS),
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], state, speed, metrics);
        frame.render_widget(stats, chunks[0]);

        // The game-over notification replaces the playfield until a key
        // acknowledges it
        if let Phase::GameOver { final_score } = phase {
            let notice = self.render_game_over(chunks[1], *final_score);
            frame.render_widget(notice, chunks[1]);
        } else {
            let grid = self.render_grid(chunks[1], state, phase);
            frame.render_widget(grid, chunks[1]);
        }

        let controls = self.render_controls(chunks[2], phase);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, state: &GameState, phase: &Phase) -> Paragraph<'_> {
        let head = state.snake.head();
        let mut lines = Vec::new();

        let mut y = 0;
        while y < state.board.height {
            let mut spans = Vec::new();
            let mut x = 0;
            while x < state.board.width {
                let pos = Point::new(x, y);

                let span = if pos == head {
                    Span::styled(
                        "██",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.hits_body(pos) {
                    Span::styled("██", Style::default().fg(Color::Yellow))
                } else if pos == state.food {
                    Span::styled(
                        "● ",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled("· ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
                x += self.cell;
            }
            lines.push(Line::from(spans));
            y += self.cell;
        }

        let title = match phase {
            Phase::Paused => " Snake - paused ",
            _ => " Snake ",
        };

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(title),
        )
    }

    fn render_stats(
        &self,
        _area: Rect,
        state: &GameState,
        speed: Speed,
        metrics: &GameMetrics,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}/9", speed.level()),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("High: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, _area: Rect, final_score: u32) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    final_score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press any key to continue",
                Style::default().fg(Color::Gray),
            )]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect, phase: &Phase) -> Paragraph<'_> {
        let mut spans = Vec::new();

        match phase {
            Phase::Idle => {
                spans.push(Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" start | "));
            }
            Phase::Running => {
                // Pause control shows yellow while the game can be paused
                spans.push(Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" pause | "));
            }
            Phase::Paused => {
                // and green while it can be resumed
                spans.push(Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" resume | "));
            }
            Phase::GameOver { .. } => {}
        }

        spans.push(Span::styled("↑↓←→", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(" steer | "));
        spans.push(Span::styled("+/-", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(" speed | "));
        spans.push(Span::styled("Q", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" quit"));

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }
}
