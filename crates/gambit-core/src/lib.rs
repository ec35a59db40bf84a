//! Chess rules engine: board state, move legality, check, checkmate and
//! stalemate detection.

mod attacks;
mod board;
mod chess_move;
mod color;
mod error;
mod fen;
mod make_move;
mod piece;
mod piece_kind;
pub mod perft;
pub mod rules;
mod square;
mod status;

pub use board::Board;
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, FenError, IllegalMove};
pub use fen::STARTING_FEN;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
pub use status::GameStatus;
