//! Session-level drivers for the two-qubit engine: the free simulator, the
//! puzzle game, and repeated-shot sampling.

pub mod error;
pub mod game;
pub mod history;
pub mod level;
pub mod output;
pub mod session;
pub mod shots;

pub use error::{Result, SandboxError};
pub use game::{Advance, Game, GameStatus};
pub use history::History;
pub use level::{builtin_levels, load_levels, Level};
pub use session::Session;
pub use shots::{frequencies, sample_counts};
