pub mod config;
pub mod core;
pub mod ui;
pub mod utils;

pub use crate::config::Config;
pub use crate::core::{BoardSnapshot, GameEngine, Mark, Outcome, Player};
pub use crate::ui::GameInterface;
pub use crate::utils::{GameError, GameResult, MoveError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
