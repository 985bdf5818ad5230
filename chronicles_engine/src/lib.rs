#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const CHRONICLES_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod player;
pub mod repl;
pub mod riddle;
pub mod style;
pub mod view;

// Re-exports for convenience
pub use config::{Cli, GameConfig};
pub use error::GameError;
pub use player::{FinishOutcome, PlayerState, ProgressStage};
pub use repl::{InputManager, NumberPrompt, ReplControl, ScriptedInput, run_game};
pub use view::{View, ViewItem};
