//! Interactive Menu
//!
//! Parsing and rendering for the terminal prompt. No I/O happens here.

use crate::game::moves::MoveSet;
use crate::proof::commitment::MoveCommitment;

/// What a line of menu input asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Play the move at this 0-based index.
    Move(usize),
    /// Quit without playing.
    Exit,
    /// Show the payoff table.
    Help,
    /// Unrecognised input; prompt again.
    Invalid,
}

/// Parse one line of input against a menu of `move_count` moves.
///
/// Moves are numbered from 1; `0` exits and `?` asks for help.
pub fn parse_choice(line: &str, move_count: usize) -> MenuChoice {
    match line.trim() {
        "?" => MenuChoice::Help,
        "0" => MenuChoice::Exit,
        other => match other.parse::<usize>() {
            Ok(n) if (1..=move_count).contains(&n) => MenuChoice::Move(n - 1),
            _ => MenuChoice::Invalid,
        },
    }
}

/// Menu text shown before the first prompt.
pub fn render_menu(moves: &MoveSet, commitment: &MoveCommitment) -> String {
    let mut out = format!("HMAC: {}\nAvailable moves:\n", commitment);
    for (i, name) in moves.iter().enumerate() {
        out.push_str(&format!("{} - {}\n", i + 1, name));
    }
    out.push_str("0 - exit\n? - help\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proof::commitment::SecretKey;

    #[test]
    fn test_parse_moves() {
        assert_eq!(parse_choice("1", 3), MenuChoice::Move(0));
        assert_eq!(parse_choice(" 3\n", 3), MenuChoice::Move(2));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_choice("0", 3), MenuChoice::Exit);
        assert_eq!(parse_choice("?", 3), MenuChoice::Help);
        assert_eq!(parse_choice(" ? ", 3), MenuChoice::Help);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_choice("4", 3), MenuChoice::Invalid);
        assert_eq!(parse_choice("-1", 3), MenuChoice::Invalid);
        assert_eq!(parse_choice("rock", 3), MenuChoice::Invalid);
        assert_eq!(parse_choice("", 3), MenuChoice::Invalid);
        assert_eq!(parse_choice("1.5", 3), MenuChoice::Invalid);
    }

    #[test]
    fn test_render_menu() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        let key = SecretKey::from_bytes(vec![1; 32]).unwrap();
        let commitment = MoveCommitment::new(&key, "paper");

        let menu = render_menu(&moves, &commitment);
        let lines: Vec<&str> = menu.lines().collect();
        assert_eq!(lines[0], format!("HMAC: {}", commitment.to_hex()));
        assert_eq!(lines[1], "Available moves:");
        assert_eq!(lines[2], "1 - rock");
        assert_eq!(lines[4], "3 - scissors");
        assert_eq!(lines[5], "0 - exit");
        assert_eq!(lines[6], "? - help");
    }
}
