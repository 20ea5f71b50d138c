//! Mapping from input lines to game commands.

use crate::types::Command;

/// Map one input line to a command.
///
/// A trailing `\n` or `\r\n` is stripped. Nothing else is trimmed, since a
/// single space is itself a command. Every other line is [`Command::Invalid`].
pub fn map_line(line: &str) -> Command {
    let line = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);
    match line {
        "a" => Command::MoveLeft,
        "d" => Command::MoveRight,
        "w" => Command::RotateCcw,
        "s" => Command::RotateCw,
        " " => Command::NoOp,
        "q" => Command::Quit,
        _ => Command::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_line("a"), Command::MoveLeft);
        assert_eq!(map_line("d"), Command::MoveRight);
        assert_eq!(map_line(" "), Command::NoOp);
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(map_line("w"), Command::RotateCcw);
        assert_eq!(map_line("s"), Command::RotateCw);
    }

    #[test]
    fn test_quit_key() {
        assert_eq!(map_line("q"), Command::Quit);
        assert_eq!(map_line("q\n"), Command::Quit);
    }

    #[test]
    fn test_line_endings_are_stripped() {
        assert_eq!(map_line("d\n"), Command::MoveRight);
        assert_eq!(map_line(" \r\n"), Command::NoOp);
        assert_eq!(map_line("w\r\n"), Command::RotateCcw);
    }

    #[test]
    fn test_everything_else_is_invalid() {
        for line in ["", "\n", "A", "Q", "  ", "a ", " a", "ad", "x", "quit", "\t"] {
            assert_eq!(map_line(line), Command::Invalid, "{line:?}");
        }
    }
}
