use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::direction::Direction;

/// High-level input events produced by the keyboard adapter.
///
/// Key-to-action mapping lives entirely here; the simulation only ever sees
/// direction intents and phase-transition calls.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    TogglePause,
    Restart,
    SpeedUp,
    SpeedDown,
    Quit,
}

/// Maps one key event to a game input, if the key is bound.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char(' ') => Some(GameInput::TogglePause),
        KeyCode::Char('r') => Some(GameInput::Restart),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(GameInput::SpeedUp),
        KeyCode::Char('-') => Some(GameInput::SpeedDown),
        KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

/// Polls the terminal for the next bound input, waiting at most `timeout`.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(map_key(key)),
        _ => Ok(None),
    }
}
