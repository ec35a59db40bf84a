//! The interactive game loop.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use gambit_core::{Board, GameStatus, Move, Square};

use crate::command::{Command, parse_command};
use crate::error::ReplError;
use crate::render::{BoardView, GlyphSet};

const HELP: &str = "\
commands:
  e2-e4           move the piece on e2 to e4
  moves <square>  list legal destinations from a square
  fen             print the position as FEN
  reset           start a new game
  glyphs <set>    draw pieces with `unicode` or `ascii` glyphs
  help            show this message
  quit            leave the game
";

/// Display settings adjustable from the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub glyphs: GlyphSet,
    /// Draw rank and file labels around the board.
    pub show_coordinates: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            glyphs: GlyphSet::Unicode,
            show_coordinates: true,
        }
    }
}

/// What the loop does after a command.
enum Flow {
    /// The board or its display changed; render again.
    Redraw,
    /// Stay at the prompt.
    Prompt,
    /// End the session.
    Stop,
}

/// A two-player game played over a line-oriented text stream.
pub struct Session {
    board: Board,
    config: SessionConfig,
}

impl Session {
    /// Create a session at the starting position.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_board(Board::starting_position(), config)
    }

    /// Create a session continuing from `board`.
    pub fn with_board(board: Board, config: SessionConfig) -> Self {
        Self { board, config }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Run until `quit`, end of input, or the end of the game.
    ///
    /// Each turn renders the board, announces checkmate or stalemate and
    /// stops, warns when the side to move is in check, then prompts. Bad
    /// input is reported and the prompt repeats.
    ///
    /// # Errors
    ///
    /// Returns [`ReplError::Io`] if reading `input` or writing `out` fails.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
    ) -> Result<(), ReplError> {
        info!(fen = %self.board, "session started");
        writeln!(out, "type `help` for commands")?;

        loop {
            self.render(out)?;
            match self.board.status() {
                GameStatus::Checkmate { winner } => {
                    writeln!(out, "Checkmate! {winner} wins.")?;
                    info!(%winner, "checkmate");
                    break;
                }
                GameStatus::Stalemate => {
                    writeln!(out, "Stalemate! The game is drawn.")?;
                    info!("stalemate");
                    break;
                }
                GameStatus::Check => {
                    writeln!(out, "{} is in check!", self.board.side_to_move())?;
                }
                GameStatus::Ongoing => {}
            }
            if let Flow::Stop = self.prompt(&mut input, out)? {
                break;
            }
        }

        info!(fen = %self.board, "session ended");
        Ok(())
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<(), ReplError> {
        let view = BoardView {
            board: &self.board,
            glyphs: self.config.glyphs,
            show_coordinates: self.config.show_coordinates,
        };
        writeln!(out)?;
        write!(out, "{view}")?;
        Ok(())
    }

    /// Read lines until one changes the board or ends the session.
    fn prompt<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> Result<Flow, ReplError> {
        let mut line = String::new();
        loop {
            write!(out, "{} to move: ", self.board.side_to_move())?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                info!("input closed");
                return Ok(Flow::Stop);
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let flow = match parse_command(trimmed) {
                Ok(command) => self.execute(command, out)?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(out, "error: {e}")?;
                    Flow::Prompt
                }
            };
            match flow {
                Flow::Prompt => continue,
                other => return Ok(other),
            }
        }
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, ReplError> {
        match command {
            Command::Move { from, to } => self.handle_move(&from, &to, out),
            Command::Moves(square) => {
                self.handle_moves(square, out)?;
                Ok(Flow::Prompt)
            }
            Command::Fen => {
                writeln!(out, "{}", self.board)?;
                Ok(Flow::Prompt)
            }
            Command::Reset => {
                self.board = Board::starting_position();
                info!("board reset");
                Ok(Flow::Redraw)
            }
            Command::Glyphs(glyphs) => {
                self.config.glyphs = glyphs;
                Ok(Flow::Redraw)
            }
            Command::Help => {
                out.write_all(HELP.as_bytes())?;
                Ok(Flow::Prompt)
            }
            Command::Quit => {
                writeln!(out, "Goodbye.")?;
                Ok(Flow::Stop)
            }
        }
    }

    fn handle_move<W: Write>(
        &mut self,
        from: &str,
        to: &str,
        out: &mut W,
    ) -> Result<Flow, ReplError> {
        let Some(mv) = Move::from_coords(from, to) else {
            let text = if Square::parse(from).is_none() { from } else { to };
            let e = ReplError::InvalidSquare {
                text: text.to_string(),
            };
            warn!(error = %e, "command parse error");
            writeln!(out, "error: {e}")?;
            return Ok(Flow::Prompt);
        };

        match self.board.play(mv) {
            Ok(Some(captured)) => {
                writeln!(out, "{mv} takes {} {}", captured.color(), captured.kind())?;
                Ok(Flow::Redraw)
            }
            Ok(None) => Ok(Flow::Redraw),
            Err(reason) => {
                writeln!(out, "illegal move {mv}: {reason}")?;
                Ok(Flow::Prompt)
            }
        }
    }

    fn handle_moves<W: Write>(&self, from: Square, out: &mut W) -> Result<(), ReplError> {
        let targets: Vec<String> = self
            .board
            .legal_moves_from(from)
            .iter()
            .map(|mv| mv.to().to_string())
            .collect();
        if targets.is_empty() {
            writeln!(out, "no legal moves from {from}")?;
        } else {
            writeln!(out, "{from}: {}", targets.join(" "))?;
        }
        Ok(())
    }
}
