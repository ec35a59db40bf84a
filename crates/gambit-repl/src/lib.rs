//! Interactive two-player console for gambit.

pub mod command;
pub mod error;
pub mod render;
pub mod session;

pub use command::Command;
pub use error::ReplError;
pub use render::{BoardView, GlyphSet};
pub use session::{Session, SessionConfig};
