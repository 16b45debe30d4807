//! Stateless UI rendering for the neon board.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, Status};
use crate::effects::{Particle, RandomSource};
use crate::games::tictactoe::{Mark, Position, Square};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const PURPLE: Color = Color::Rgb(168, 85, 247);
const CYAN: Color = Color::Rgb(34, 211, 238);
const PINK: Color = Color::Rgb(236, 72, 153);
const YELLOW: Color = Color::Rgb(251, 191, 36);
const GRID: Color = Color::Rgb(76, 29, 149);

/// Screen rectangles of the nine board cells, as last drawn.
///
/// Used to hit-test mouse events against the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardCells([Rect; 9]);

impl BoardCells {
    /// Wraps cell rectangles given in position order.
    pub fn new(rects: [Rect; 9]) -> Self {
        Self(rects)
    }

    /// Rectangle of a cell.
    pub fn rect(&self, pos: Position) -> Rect {
        self.0[pos.to_index()]
    }

    /// The cell under a terminal coordinate.
    pub fn hit(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition { x: column, y: row };
        Position::ALL
            .into_iter()
            .find(|pos| self.rect(*pos).contains(point))
    }
}

/// Draws the whole screen and returns where the board cells landed.
pub fn draw<R: RandomSource>(frame: &mut Frame, app: &App<R>) -> BoardCells {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(5),            // Scores
            Constraint::Length(3),            // Status
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(2),            // Help
        ])
        .split(area);

    draw_title(frame, chunks[0]);
    draw_scores(frame, chunks[1], app);
    draw_status(frame, chunks[2], app.status());
    let cells = draw_board(frame, chunks[3], app);
    draw_help(frame, chunks[4]);

    if let Some(age) = app.effects().age() {
        draw_particles(frame.buffer_mut(), area, app.effects().particles(), age);
    }

    cells
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => CYAN,
        Mark::O => PINK,
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled("⚡ ", Style::default().fg(PURPLE)),
        Span::styled(
            "NEON TIC TAC TOE",
            Style::default().fg(PURPLE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ⚡", Style::default().fg(CYAN)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(GRID)));
    frame.render_widget(title, area);
}

fn draw_scores<R: RandomSource>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let scores = app.scores();
    let panel = center_rect(area, 44, area.height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(PURPLE));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    let entries = [
        (scores.x_wins(), "Player X", CYAN),
        (scores.draws(), "Draws", YELLOW),
        (scores.o_wins(), "Player O", PINK),
    ];
    for ((count, label, color), col) in entries.into_iter().zip(cols.iter()) {
        let text = vec![
            Line::from(Span::styled(
                count.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), *col);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, status: Status) {
    let style = match status {
        Status::Turn(mark) => Style::default().fg(mark_color(mark)),
        Status::Won(mark) => Style::default()
            .fg(mark_color(mark))
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        Status::Draw => Style::default().fg(YELLOW).add_modifier(Modifier::BOLD),
    };
    let text = match status {
        Status::Won(_) => format!("🏆 {} 🏆", status),
        Status::Draw => format!("{} 🤝", status),
        Status::Turn(_) => status.to_string(),
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(paragraph, area.inner(ratatui::layout::Margin::new(0, 1)));
}

fn draw_board<R: RandomSource>(frame: &mut Frame, area: Rect, app: &App<R>) -> BoardCells {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(PURPLE));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let game = app.game();
    let winning = game.winning_line();
    let preview = app.input().preview(game);
    let hovered = app.input().hovered();

    let mut rects = [Rect::default(); 9];
    for pos in Position::ALL {
        let rect = Rect::new(
            inner.x + pos.col() as u16 * CELL_WIDTH,
            inner.y + pos.row() as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(inner);
        rects[pos.to_index()] = rect;

        let in_line = winning.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, rect, game.board().get(pos), in_line, hovered == Some(pos), preview);
    }

    BoardCells::new(rects)
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    in_line: bool,
    hovered: bool,
    preview: Option<(Position, Mark)>,
) {
    let (symbol, mut style) = match square {
        Square::Occupied(mark) => (
            mark.to_string(),
            Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
        ),
        Square::Empty => match preview {
            Some((_, mark)) if hovered => (
                mark.to_string(),
                Style::default().fg(mark_color(mark)).add_modifier(Modifier::DIM),
            ),
            _ => (String::new(), Style::default()),
        },
    };

    let mut border = Style::default().fg(GRID);
    if in_line {
        style = style.bg(Color::Rgb(88, 28, 135));
        border = Style::default().fg(YELLOW);
    } else if hovered {
        border = Style::default().fg(PURPLE);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .style(if in_line { style } else { Style::default() })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    frame.render_widget(paragraph, area);
}

const HELP: &str = "click / 1-9 / arrows+enter: play   n: new game   r: reset scores   q: quit";

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

/// Paints particles over `area` directly into the buffer.
fn draw_particles(buf: &mut Buffer, area: Rect, particles: &[Particle], age: std::time::Duration) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    for p in particles {
        let x = area.x + ((p.x / 100.0) * f32::from(area.width)) as u16;
        let y = area.y + ((p.y / 100.0) * f32::from(area.height)) as u16;
        let x = x.min(area.right() - 1);
        let y = y.min(area.bottom() - 1);

        let glyph = if p.size < 3.0 {
            "·"
        } else if p.size < 4.5 {
            "•"
        } else {
            "●"
        };
        // Ping: bright at the start of each pulse, fading out.
        let phase = p.pulse(age);
        let mut style = Style::default().fg(Color::Rgb(192, 132, 252));
        if phase > 0.5 {
            style = style.add_modifier(Modifier::DIM);
        }

        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(glyph).set_style(style);
        }
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
