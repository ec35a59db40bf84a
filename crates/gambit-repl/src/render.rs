//! Text rendering of the board for the terminal.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use gambit_core::{Board, Piece, Square};

use crate::error::ReplError;

const FILE_LABELS: &str = "  a b c d e f g h";

/// Which characters draw the pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    /// Chess figurines, `·` for empty squares.
    #[default]
    Unicode,
    /// FEN letters, `.` for empty squares.
    Ascii,
}

impl GlyphSet {
    fn piece(self, piece: Piece) -> char {
        match self {
            GlyphSet::Unicode => piece.glyph(),
            GlyphSet::Ascii => piece.fen_char(),
        }
    }

    fn empty(self) -> char {
        match self {
            GlyphSet::Unicode => '·',
            GlyphSet::Ascii => '.',
        }
    }
}

impl FromStr for GlyphSet {
    type Err = ReplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unicode" => Ok(GlyphSet::Unicode),
            "ascii" => Ok(GlyphSet::Ascii),
            _ => Err(ReplError::InvalidArgument {
                command: "glyphs",
                value: s.to_string(),
            }),
        }
    }
}

/// A board borrowed for display, rank 8 at the top.
pub struct BoardView<'a> {
    pub board: &'a Board,
    pub glyphs: GlyphSet,
    /// Draw rank labels on both sides and file labels above and below.
    pub show_coordinates: bool,
}

impl Display for BoardView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.show_coordinates {
            writeln!(f, "{FILE_LABELS}")?;
        }
        for row in 0u8..8 {
            let rank = 8 - row;
            if self.show_coordinates {
                write!(f, "{rank} ")?;
            }
            for col in 0u8..8 {
                let glyph = Square::from_row_col(row, col)
                    .and_then(|sq| self.board.piece_at(sq))
                    .map_or(self.glyphs.empty(), |piece| self.glyphs.piece(piece));
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{glyph}")?;
            }
            if self.show_coordinates {
                write!(f, " {rank}")?;
            }
            writeln!(f)?;
        }
        if self.show_coordinates {
            writeln!(f, "{FILE_LABELS}")?;
        }
        Ok(())
    }
}
