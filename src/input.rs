/// Input mapper — raw key events to session commands.
///
/// The mapping depends on the current state so the same key can mean
/// different things (Space starts from the menu but pauses during play).
/// Keys with no meaning in the current state map to `None` and are ignored.

use crossterm::event::KeyCode;

use crate::compute::Command;
use crate::entities::GameState;
use crate::grid::Direction;

pub fn map_key(code: KeyCode, state: &GameState) -> Option<Command> {
    // Quit works everywhere.
    if matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Some(Command::Quit);
    }

    match state {
        GameState::Menu => match code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Start),
            KeyCode::Esc => Some(Command::Quit),
            _ => None,
        },
        GameState::Playing => match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(Command::Steer(Direction::Up))
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                Some(Command::Steer(Direction::Down))
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                Some(Command::Steer(Direction::Left))
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(Command::Steer(Direction::Right))
            }
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => {
                Some(Command::Pause)
            }
            _ => None,
        },
        GameState::Paused => match code {
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => {
                Some(Command::Resume)
            }
            KeyCode::Esc => Some(Command::Menu),
            _ => None,
        },
        GameState::GameOver => match code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
            KeyCode::Esc => Some(Command::Menu),
            _ => None,
        },
    }
}
