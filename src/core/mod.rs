pub mod board;
pub mod engine;
pub mod events;
pub mod game_state;
pub mod player;

pub use board::{Board, Mark, CELL_COUNT, WIN_LINES};
pub use engine::GameEngine;
pub use events::{GameEvent, GameEventHandler, GameEventType};
pub use game_state::{BoardSnapshot, GameState, Outcome};
pub use player::Player;
