use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides. `PlayerA` always opens a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    PlayerA,
    PlayerB,
}

impl Player {
    pub const STARTING: Player = Player::PlayerA;

    pub fn opponent(self) -> Self {
        match self {
            Player::PlayerA => Player::PlayerB,
            Player::PlayerB => Player::PlayerA,
        }
    }

    pub fn all() -> [Player; 2] {
        [Player::PlayerA, Player::PlayerB]
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::STARTING
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::PlayerA => write!(f, "Player A"),
            Player::PlayerB => write!(f, "Player B"),
        }
    }
}
