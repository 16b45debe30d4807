//! Keyboard and mouse mapping for the terminal board.

use crate::app::UserAction;
use crate::games::tictactoe::Position;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};

use super::ui::BoardCells;

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let next = match key {
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        _ => None,
    };
    next.unwrap_or(cursor)
}

/// Translates a terminal event into a user action.
///
/// `hovered` is the current cursor; `cells` is where the board was last drawn.
pub fn map_event(
    event: &Event,
    hovered: Option<Position>,
    cells: &BoardCells,
) -> Option<UserAction> {
    match event {
        Event::Key(key) => map_key(key, hovered),
        Event::Mouse(mouse) => {
            let target = cells.hit(mouse.column, mouse.row);
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => target.map(UserAction::Activate),
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    (target != hovered).then_some(UserAction::Hover(target))
                }
                _ => None,
            }
        }
        _ => None,
    }
}

fn map_key(key: &KeyEvent, hovered: Option<Position>) -> Option<UserAction> {
    // Skip key release events (crossterm fires both press and release on some platforms).
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(UserAction::Quit),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(UserAction::NewGame),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UserAction::ResetScores),
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c.to_digit(10)? as usize;
            Position::from_index(digit - 1).map(UserAction::Activate)
        }
        KeyCode::Enter | KeyCode::Char(' ') => hovered.map(UserAction::Activate),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            let next = match hovered {
                Some(pos) => move_cursor(pos, code),
                None => Position::Center,
            };
            Some(UserAction::Hover(Some(next)))
        }
        _ => None,
    }
}
