use serde::{Deserialize, Serialize};

use crate::core::board::{Board, Mark, CELL_COUNT};
use crate::core::Player;
use crate::utils::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// Immutable copy of the engine state handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub board: Board,
    pub turn: Player,
    pub outcome: Outcome,
    pub winning_line: Option<[usize; 3]>,
}

impl BoardSnapshot {
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.board.get(index)
    }

    /// Indices whose mark differs from `previous`, in ascending order.
    pub fn changed_cells(&self, previous: &BoardSnapshot) -> Vec<usize> {
        (0..CELL_COUNT)
            .filter(|&index| self.board.get(index) != previous.board.get(index))
            .collect()
    }
}

/// Board, turn and outcome together with the move rules. Holds no observers,
/// so it can be cloned freely.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
    outcome: Outcome,
    winning_line: Option<[usize; 3]>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    pub fn moves_played(&self) -> usize {
        self.board.filled_count()
    }

    /// Validates and applies a move for the current player.
    ///
    /// Checks run in a fixed order: a finished game is reported before a bad
    /// index, and a bad index before an occupied cell. On error nothing
    /// changes.
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfRange { index });
        }

        let mover = self.turn;
        if !self.board.place(index, mover) {
            return Err(MoveError::CellOccupied { index });
        }

        if let Some((owner, line)) = self.board.winning_line() {
            self.outcome = Outcome::Win(owner);
            self.winning_line = Some(line);
        } else if self.board.is_full() {
            self.outcome = Outcome::Draw;
        } else {
            self.turn = mover.opponent();
        }

        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            board: self.board,
            turn: self.turn,
            outcome: self.outcome,
            winning_line: self.winning_line,
        }
    }
}
