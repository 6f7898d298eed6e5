//! Keyboard input controller.
//!
//! Key presses and releases map to [`PlayerCommand`]s through two fixed
//! tables. The headless runner reads keys from stdin, one per line:
//! `left` or `+left` presses a key, `-left` releases it, `quit` stops.

use std::io::BufRead;
use std::sync::mpsc::Sender;

use anyhow::{Context, Result};

use flokk_core::commands::PlayerCommand;

use crate::state::GameLoopCommand;

/// Keys the controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Space,
    Click,
}

impl Key {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "left" => Some(Key::Left),
            "right" => Some(Key::Right),
            "up" => Some(Key::Up),
            "space" => Some(Key::Space),
            "click" => Some(Key::Click),
            _ => None,
        }
    }
}

/// Maps key transitions to player commands.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputController;

impl InputController {
    pub fn new() -> Self {
        Self
    }

    pub fn key_pressed(&self, key: Key) -> Option<PlayerCommand> {
        Some(match key {
            Key::Left => PlayerCommand::TurnLeft { on: true },
            Key::Right => PlayerCommand::TurnRight { on: true },
            Key::Up => PlayerCommand::Thrust { on: true },
            Key::Space => PlayerCommand::Fire,
            Key::Click => PlayerCommand::Click,
        })
    }

    /// Releasing space or click does nothing.
    pub fn key_released(&self, key: Key) -> Option<PlayerCommand> {
        match key {
            Key::Left => Some(PlayerCommand::TurnLeft { on: false }),
            Key::Right => Some(PlayerCommand::TurnRight { on: false }),
            Key::Up => Some(PlayerCommand::Thrust { on: false }),
            Key::Space | Key::Click => None,
        }
    }
}

/// One parsed line of runner input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLine {
    Press(Key),
    Release(Key),
    Quit,
}

/// Parse a line of runner input. Blank lines and unknown keys yield `None`.
pub fn parse_line(line: &str) -> Option<InputLine> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
        return Some(InputLine::Quit);
    }

    let (pressed, name) = match line.strip_prefix('-') {
        Some(rest) => (false, rest),
        None => (true, line.strip_prefix('+').unwrap_or(line)),
    };
    let Some(key) = Key::parse(name) else {
        tracing::debug!(input = line, "unknown key ignored");
        return None;
    };

    Some(if pressed {
        InputLine::Press(key)
    } else {
        InputLine::Release(key)
    })
}

/// Translate a parsed line into what the game loop should receive.
pub fn to_loop_command(controller: &InputController, line: InputLine) -> Option<GameLoopCommand> {
    match line {
        InputLine::Quit => Some(GameLoopCommand::Shutdown),
        InputLine::Press(key) => controller
            .key_pressed(key)
            .map(GameLoopCommand::PlayerCommand),
        InputLine::Release(key) => controller
            .key_released(key)
            .map(GameLoopCommand::PlayerCommand),
    }
}

/// Read key lines from `reader` and forward them to the game loop until
/// EOF, `quit`, or the loop going away. With `shutdown_on_eof` the loop is
/// told to stop when input ends.
pub fn pump_lines<R: BufRead>(
    reader: R,
    tx: &Sender<GameLoopCommand>,
    shutdown_on_eof: bool,
) -> Result<()> {
    let controller = InputController::new();

    for line in reader.lines() {
        let line = line.context("failed to read input line")?;
        let Some(parsed) = parse_line(&line) else {
            continue;
        };
        let Some(command) = to_loop_command(&controller, parsed) else {
            continue;
        };
        if tx.send(command).is_err() {
            return Ok(());
        }
        if command == GameLoopCommand::Shutdown {
            return Ok(());
        }
    }

    if shutdown_on_eof {
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::mpsc;

    #[test]
    fn test_press_table() {
        let controller = InputController::new();
        assert_eq!(
            controller.key_pressed(Key::Left),
            Some(PlayerCommand::TurnLeft { on: true })
        );
        assert_eq!(
            controller.key_pressed(Key::Right),
            Some(PlayerCommand::TurnRight { on: true })
        );
        assert_eq!(
            controller.key_pressed(Key::Up),
            Some(PlayerCommand::Thrust { on: true })
        );
        assert_eq!(controller.key_pressed(Key::Space), Some(PlayerCommand::Fire));
        assert_eq!(controller.key_pressed(Key::Click), Some(PlayerCommand::Click));
    }

    #[test]
    fn test_release_table() {
        let controller = InputController::new();
        assert_eq!(
            controller.key_released(Key::Left),
            Some(PlayerCommand::TurnLeft { on: false })
        );
        assert_eq!(
            controller.key_released(Key::Right),
            Some(PlayerCommand::TurnRight { on: false })
        );
        assert_eq!(
            controller.key_released(Key::Up),
            Some(PlayerCommand::Thrust { on: false })
        );
        assert_eq!(controller.key_released(Key::Space), None);
        assert_eq!(controller.key_released(Key::Click), None);
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("left"), Some(InputLine::Press(Key::Left)));
        assert_eq!(parse_line("+UP"), Some(InputLine::Press(Key::Up)));
        assert_eq!(parse_line("  -right "), Some(InputLine::Release(Key::Right)));
        assert_eq!(parse_line("quit"), Some(InputLine::Quit));
        assert_eq!(parse_line("q"), Some(InputLine::Quit));
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("jump"), None);
    }

    #[test]
    fn test_pump_forwards_commands_in_order() {
        let (tx, rx) = mpsc::channel();
        let input = Cursor::new("click\nup\n\nbogus\n-up\nspace\n-space\n");
        pump_lines(input, &tx, false).unwrap();

        let received: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            received,
            vec![
                GameLoopCommand::PlayerCommand(PlayerCommand::Click),
                GameLoopCommand::PlayerCommand(PlayerCommand::Thrust { on: true }),
                GameLoopCommand::PlayerCommand(PlayerCommand::Thrust { on: false }),
                GameLoopCommand::PlayerCommand(PlayerCommand::Fire),
            ]
        );
    }

    #[test]
    fn test_pump_stops_at_quit() {
        let (tx, rx) = mpsc::channel();
        pump_lines(Cursor::new("left\nquit\nright\n"), &tx, false).unwrap();

        let received: Vec<_> = rx.try_iter().collect();
        assert_eq!(received.len(), 2);
        assert_eq!(received[1], GameLoopCommand::Shutdown);
    }

    #[test]
    fn test_pump_shutdown_on_eof() {
        let (tx, rx) = mpsc::channel();
        pump_lines(Cursor::new("click\n"), &tx, true).unwrap();
        let received: Vec<_> = rx.try_iter().collect();
        assert_eq!(received.last(), Some(&GameLoopCommand::Shutdown));

        let (tx, rx) = mpsc::channel();
        pump_lines(Cursor::new("click\n"), &tx, false).unwrap();
        assert!(!rx.try_iter().any(|c| c == GameLoopCommand::Shutdown));
    }
}
