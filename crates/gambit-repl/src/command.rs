//! Session command parsing.

use gambit_core::Square;

use crate::error::ReplError;
use crate::render::GlyphSet;

/// A parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `e2-e4` -- request a move. The coordinates are passed to the engine
    /// as typed; the engine decides whether they name squares.
    Move {
        /// Source coordinate text.
        from: String,
        /// Destination coordinate text.
        to: String,
    },
    /// `moves <square>` -- list legal destinations from a square.
    Moves(Square),
    /// `fen` -- print the position as FEN.
    Fen,
    /// `reset` -- return to the starting position.
    Reset,
    /// `glyphs unicode|ascii` -- switch the piece glyph set.
    Glyphs(GlyphSet),
    /// `help` -- list commands.
    Help,
    /// `quit` -- end the session.
    Quit,
}

/// Parse one line of input. Surrounding whitespace and letter case are
/// ignored. Keywords take exactly the arguments they name.
pub fn parse_command(line: &str) -> Result<Command, ReplError> {
    let line = line.trim().to_ascii_lowercase();
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Err(ReplError::MalformedMove { input: line });
    };
    let args: Vec<&str> = tokens.collect();

    match (head, args.as_slice()) {
        ("quit", []) => Ok(Command::Quit),
        ("help", []) => Ok(Command::Help),
        ("fen", []) => Ok(Command::Fen),
        ("reset", []) => Ok(Command::Reset),
        ("moves", [text]) => {
            let square = Square::parse(text).ok_or_else(|| ReplError::InvalidSquare {
                text: text.to_string(),
            })?;
            Ok(Command::Moves(square))
        }
        ("glyphs", [text]) => Ok(Command::Glyphs(text.parse()?)),
        ("moves", []) => Err(ReplError::MissingArgument { command: "moves" }),
        ("glyphs", []) => Err(ReplError::MissingArgument { command: "glyphs" }),
        ("quit" | "help" | "fen" | "reset" | "moves" | "glyphs", [.., extra]) => {
            Err(ReplError::UnexpectedArgument {
                value: extra.to_string(),
            })
        }
        _ => parse_move(&line),
    }
}

/// Split `from-to` on its single dash.
fn parse_move(line: &str) -> Result<Command, ReplError> {
    let parts: Vec<&str> = line.split('-').collect();
    match parts.as_slice() {
        [from, to] => Ok(Command::Move {
            from: from.to_string(),
            to: to.to_string(),
        }),
        _ => Err(ReplError::MalformedMove {
            input: line.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn move_cmd(from: &str, to: &str) -> Command {
        Command::Move {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn parse_simple_move() {
        assert_eq!(parse_command("e2-e4").unwrap(), move_cmd("e2", "e4"));
    }

    #[test]
    fn move_is_trimmed_and_lowercased() {
        assert_eq!(parse_command("  E2-E4 \n").unwrap(), move_cmd("e2", "e4"));
    }

    #[test]
    fn move_tokens_are_not_validated_here() {
        assert_eq!(parse_command("z9-e4").unwrap(), move_cmd("z9", "e4"));
        assert_eq!(parse_command("-e4").unwrap(), move_cmd("", "e4"));
    }

    #[test]
    fn move_needs_exactly_one_dash() {
        for input in ["e2e4", "e2-e4-e5", "e2--e4", "hello", ""] {
            assert!(
                matches!(parse_command(input), Err(ReplError::MalformedMove { .. })),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("QUIT").unwrap(), Command::Quit);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("fen").unwrap(), Command::Fen);
        assert_eq!(parse_command("reset").unwrap(), Command::Reset);
    }

    #[test]
    fn keywords_reject_trailing_words() {
        let inputs = [
            "quit now",
            "help me",
            "fen xyz",
            "reset all",
            "moves e2 e4",
            "glyphs ascii x",
        ];
        for input in inputs {
            assert!(
                matches!(parse_command(input), Err(ReplError::UnexpectedArgument { .. })),
                "{input:?} should be rejected"
            );
        }
        assert!(matches!(
            parse_command("fen xyz"),
            Err(ReplError::UnexpectedArgument { value }) if value == "xyz"
        ));
    }

    #[test]
    fn parse_moves_query() {
        assert_eq!(parse_command("moves g1").unwrap(), Command::Moves(Square::G1));
        assert!(matches!(
            parse_command("moves"),
            Err(ReplError::MissingArgument { command: "moves" })
        ));
        assert!(matches!(
            parse_command("moves k9"),
            Err(ReplError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn parse_glyphs() {
        assert_eq!(
            parse_command("glyphs ascii").unwrap(),
            Command::Glyphs(GlyphSet::Ascii)
        );
        assert_eq!(
            parse_command("glyphs Unicode").unwrap(),
            Command::Glyphs(GlyphSet::Unicode)
        );
        assert!(matches!(
            parse_command("glyphs emoji"),
            Err(ReplError::InvalidArgument { command: "glyphs", .. })
        ));
    }
}
